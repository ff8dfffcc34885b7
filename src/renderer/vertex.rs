//! Vertex format and fixed colors
//!
//! Positions are scene pixels until `RenderState` rewrites them to NDC.

use bytemuck::{Pod, Zeroable};

/// Colored corner of a scene rectangle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for game elements that are not block kinds
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const BLOCK_BORDER: [f32; 4] = [0.0, 0.0, 0.0, 0.2];
    pub const LABEL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// CSS `rgba()` string for the 2D canvas overlay
    pub fn css(color: [f32; 4]) -> String {
        let [r, g, b, a] = color;
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgba({}, {}, {}, {})", channel(r), channel(g), channel(b), a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[1].offset, 8);
    }

    #[test]
    fn test_css_color() {
        assert_eq!(colors::css(colors::LABEL), "rgba(255, 255, 255, 1)");
        assert_eq!(colors::css(colors::BLOCK_BORDER), "rgba(0, 0, 0, 0.2)");
    }
}
