//! Block kinds and their shared descriptors

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::BLOCK_MAX_LIFE;

/// Which hit sound a block kind plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSound {
    Grass,
    Stone,
}

/// Block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    Dirt,
    DirtWithGrass,
    Stone,
    Bedrock,
}

/// Per-kind constants, shared by every block of that kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockType {
    /// Fill color, RGBA
    pub color: [f32; 4],
    /// Accent band drawn over the top quarter of the block
    pub color_top: Option<[f32; 4]>,
    pub damage_multiplier: f32,
    pub hit_sound: HitSound,
}

/// Opaque color from 8-bit channels
const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

const BROWN: [f32; 4] = rgb(0x8B, 0x45, 0x13);
const GRASS_GREEN: [f32; 4] = rgb(0x22, 0xFF, 0x22);

const DIRT: BlockType = BlockType {
    color: BROWN,
    color_top: None,
    damage_multiplier: 1.0,
    hit_sound: HitSound::Grass,
};

const DIRT_WITH_GRASS: BlockType = BlockType {
    color: BROWN,
    color_top: Some(GRASS_GREEN),
    damage_multiplier: 1.1,
    hit_sound: HitSound::Grass,
};

const STONE: BlockType = BlockType {
    color: rgb(0xA9, 0xA9, 0xA9),
    color_top: None,
    damage_multiplier: 0.75,
    hit_sound: HitSound::Stone,
};

const BEDROCK: BlockType = BlockType {
    color: rgb(0x33, 0x33, 0x33),
    color_top: None,
    damage_multiplier: 0.25,
    hit_sound: HitSound::Stone,
};

impl BlockKind {
    /// Look up the descriptor for this kind
    pub fn descriptor(self) -> &'static BlockType {
        match self {
            BlockKind::Dirt => &DIRT,
            BlockKind::DirtWithGrass => &DIRT_WITH_GRASS,
            BlockKind::Stone => &STONE,
            BlockKind::Bedrock => &BEDROCK,
        }
    }

    /// Kind of a generated row, counted from the bottom of the terrain (0 = bottom)
    pub fn for_row_from_bottom(row: u32) -> Self {
        match row {
            0 => BlockKind::Bedrock,
            1 => BlockKind::Stone,
            2 | 3 => BlockKind::Dirt,
            _ => BlockKind::DirtWithGrass,
        }
    }
}

/// A grid-aligned terrain cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub pos: Vec2,
    pub kind: BlockKind,
    /// Remaining life, starts at 100. The block is removed once it reaches 0.
    pub life: f32,
}

impl Block {
    pub fn new(pos: Vec2, kind: BlockKind) -> Self {
        Self {
            pos,
            kind,
            life: BLOCK_MAX_LIFE,
        }
    }

    #[inline]
    pub fn bounds(&self, block_size: f32) -> Aabb {
        Aabb::square(self.pos, block_size)
    }

    /// Remaining life as a whole percentage (floored)
    pub fn life_percent(&self) -> i32 {
        (self.life / BLOCK_MAX_LIFE * 100.0).floor() as i32
    }

    /// Apply one hit. Returns true when the block is destroyed.
    pub fn deduct_life(&mut self, base_damage: f32) -> bool {
        self.life -= base_damage * self.kind.descriptor().damage_multiplier;
        self.life <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_mapping() {
        assert_eq!(BlockKind::for_row_from_bottom(0), BlockKind::Bedrock);
        assert_eq!(BlockKind::for_row_from_bottom(1), BlockKind::Stone);
        assert_eq!(BlockKind::for_row_from_bottom(2), BlockKind::Dirt);
        assert_eq!(BlockKind::for_row_from_bottom(3), BlockKind::Dirt);
        assert_eq!(BlockKind::for_row_from_bottom(4), BlockKind::DirtWithGrass);
    }

    #[test]
    fn test_only_grass_has_accent() {
        assert!(BlockKind::DirtWithGrass.descriptor().color_top.is_some());
        for kind in [BlockKind::Dirt, BlockKind::Stone, BlockKind::Bedrock] {
            assert!(kind.descriptor().color_top.is_none());
        }
    }

    #[test]
    fn test_descriptor_colors() {
        let grass = BlockKind::DirtWithGrass.descriptor();
        assert_eq!(grass.color, BlockKind::Dirt.descriptor().color);
        assert_eq!(grass.color_top, Some([34.0 / 255.0, 1.0, 34.0 / 255.0, 1.0]));
        let gray = 169.0 / 255.0;
        assert_eq!(BlockKind::Stone.descriptor().color, [gray, gray, gray, 1.0]);
        assert_eq!(BlockKind::Bedrock.descriptor().color[3], 1.0);
    }

    #[test]
    fn test_deduct_life_uses_multiplier() {
        let mut stone = Block::new(Vec2::ZERO, BlockKind::Stone);
        assert!(!stone.deduct_life(25.0));
        assert_eq!(stone.life, 81.25);

        let mut grass = Block::new(Vec2::ZERO, BlockKind::DirtWithGrass);
        grass.deduct_life(25.0);
        assert_eq!(grass.life_percent(), 72);
    }

    #[test]
    fn test_bedrock_takes_sixteen_hits() {
        let mut bedrock = Block::new(Vec2::ZERO, BlockKind::Bedrock);
        let hits = (1..=16).find(|_| bedrock.deduct_life(25.0));
        assert_eq!(hits, Some(16));
    }
}
