//! The block grid
//!
//! Blocks live in a flat `Vec` in generation order (top row first, left to
//! right). Every collision scan walks this order and the first match wins,
//! so the order is part of the observable behavior.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::block::{Block, BlockKind};
use crate::consts::TERRAIN_ROWS;

/// All terrain blocks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    block_size: f32,
    blocks: Vec<Block>,
}

impl World {
    /// Empty world (no terrain)
    pub fn empty(block_size: f32) -> Self {
        Self {
            block_size,
            blocks: Vec::new(),
        }
    }

    /// World with an explicit block list, kept in the given order
    pub fn from_blocks(block_size: f32, blocks: Vec<Block>) -> Self {
        Self { block_size, blocks }
    }

    /// Fill the bottom `TERRAIN_ROWS` rows of a `width` x `height` surface
    pub fn generate(width: f32, height: f32, block_size: f32) -> Self {
        let rows = TERRAIN_ROWS;
        let cols = (width / block_size).ceil().max(0.0) as u32;
        let mut blocks = Vec::with_capacity((rows * cols) as usize);

        let top = height - block_size * rows as f32;
        for row in 0..rows {
            let y = top + block_size * row as f32;
            let kind = BlockKind::for_row_from_bottom(rows - 1 - row);
            for col in 0..cols {
                blocks.push(Block::new(Vec2::new(block_size * col as f32, y), kind));
            }
        }

        log::info!(
            "Generated world: {} blocks ({} rows x {} cols) on {}x{}",
            blocks.len(),
            rows,
            cols,
            width,
            height
        );

        Self { block_size, blocks }
    }

    #[inline]
    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn block_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Index of the first block (in world order) whose bounds contain `p`
    pub fn block_at_point(&self, p: Vec2) -> Option<usize> {
        self.blocks
            .iter()
            .position(|b| b.bounds(self.block_size).contains_point(p))
    }

    /// Remove a block, preserving the order of the rest
    pub fn remove(&mut self, index: usize) -> Option<Block> {
        (index < self.blocks.len()).then(|| self.blocks.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_320x160() {
        let world = World::generate(320.0, 160.0, 32.0);
        assert_eq!(world.len(), 50);

        let kinds_by_row: Vec<(f32, BlockKind)> = world
            .blocks()
            .chunks(10)
            .map(|row| {
                assert!(row.iter().all(|b| b.kind == row[0].kind && b.pos.y == row[0].pos.y));
                (row[0].pos.y, row[0].kind)
            })
            .collect();

        assert_eq!(
            kinds_by_row,
            vec![
                (0.0, BlockKind::DirtWithGrass),
                (32.0, BlockKind::Dirt),
                (64.0, BlockKind::Dirt),
                (96.0, BlockKind::Stone),
                (128.0, BlockKind::Bedrock),
            ]
        );
    }

    #[test]
    fn test_generate_is_grid_aligned_without_gaps() {
        let world = World::generate(640.0, 480.0, 32.0);
        assert_eq!(world.len(), 5 * 20);
        for (i, block) in world.blocks().iter().enumerate() {
            let col = (i % 20) as f32;
            let row = (i / 20) as f32;
            assert_eq!(block.pos, Vec2::new(col * 32.0, 480.0 - 160.0 + row * 32.0));
            assert_eq!(block.life, 100.0);
        }
    }

    #[test]
    fn test_partial_column_is_generated() {
        // Width not divisible by block size still covers the whole width
        let world = World::generate(330.0, 160.0, 32.0);
        assert_eq!(world.len(), 55);
        assert_eq!(world.blocks()[10].pos.x, 320.0);
    }

    #[test]
    fn test_block_at_point_and_remove() {
        let mut world = World::generate(320.0, 160.0, 32.0);
        let idx = world.block_at_point(Vec2::new(40.0, 40.0)).unwrap();
        assert_eq!(idx, 11);

        // Shared edge belongs to the earlier block
        assert_eq!(world.block_at_point(Vec2::new(32.0, 0.0)), Some(0));

        let removed = world.remove(idx).unwrap();
        assert_eq!(removed.pos, Vec2::new(32.0, 32.0));
        assert_eq!(world.len(), 49);
        assert_eq!(world.block_at_point(Vec2::new(40.0, 40.0)), None);
        assert!(world.remove(100).is_none());
    }
}
