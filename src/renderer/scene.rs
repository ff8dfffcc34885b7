//! Frame description handed to the drawing collaborators
//!
//! Built fresh every frame from `GameState`. Rectangles go to the GPU
//! pipeline; labels go to the 2D text overlay.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{Aabb, GameState};

/// Fraction of a block's height covered by its top accent band
const ACCENT_FRACTION: f32 = 0.25;
/// Border line width in pixels
const BORDER_WIDTH: f32 = 1.0;

/// A filled rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredRect {
    pub rect: Aabb,
    pub color: [f32; 4],
}

/// Remaining-life text drawn centered on a damaged block
#[derive(Debug, Clone, PartialEq)]
pub struct LifeLabel {
    pub text: String,
    pub center: Vec2,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Back to front
    pub rects: Vec<ColoredRect>,
    pub labels: Vec<LifeLabel>,
}

impl Scene {
    pub fn build(state: &GameState, settings: &Settings) -> Self {
        let block_size = state.world.block_size();
        let mut scene = Scene {
            rects: Vec::with_capacity(state.world.len() * 2 + 1),
            labels: Vec::new(),
        };

        for block in state.world.blocks() {
            let bounds = block.bounds(block_size);
            let descriptor = block.kind.descriptor();
            scene.push(bounds, descriptor.color);

            if let Some(top) = descriptor.color_top {
                let band_size = Vec2::new(block_size, block_size * ACCENT_FRACTION);
                scene.push(Aabb::new(bounds.pos, band_size), top);
            }

            if settings.block_borders {
                for strip in shapes::outline_strips(&bounds, BORDER_WIDTH) {
                    scene.push(strip, colors::BLOCK_BORDER);
                }
            }

            let percent = block.life_percent();
            if settings.life_labels && percent < 100 {
                scene.labels.push(LifeLabel {
                    text: format!("{}%", percent),
                    center: bounds.center(),
                });
            }
        }

        scene.push(state.player.bounds(), colors::PLAYER);
        scene
    }

    fn push(&mut self, rect: Aabb, color: [f32; 4]) {
        self.rects.push(ColoredRect { rect, color });
    }

    /// Triangle list for the whole scene, in surface pixels
    pub fn vertices(&self) -> Vec<Vertex> {
        self.rects
            .iter()
            .flat_map(|r| shapes::rect(&r.rect, r.color))
            .collect()
    }
}
