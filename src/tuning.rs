//! Data-driven physics constants
//!
//! Defaults come from `consts`; a page may override any subset through the
//! `"tuning"` object of its settings JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and interaction constants used by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Block and player side length (px)
    pub block_size: f32,
    /// Downward acceleration (px/tick²)
    pub gravity: f32,
    /// Horizontal speed (px/tick)
    pub player_speed: f32,
    /// Jump impulse, also the ceiling clearance required to jump (px/tick)
    pub jump_force: f32,
    /// Feet-to-block-top distance that still counts as standing on it (px)
    pub support_tolerance: f32,
    /// Damage per click before the type multiplier
    pub base_damage: f32,
    /// Click reach in block widths
    pub reach_blocks: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            gravity: GRAVITY,
            player_speed: PLAYER_SPEED,
            jump_force: JUMP_FORCE,
            support_tolerance: SUPPORT_TOLERANCE,
            base_damage: BASE_DAMAGE,
            reach_blocks: REACH_BLOCKS,
        }
    }
}

impl Tuning {
    /// Maximum click distance in pixels
    #[inline]
    pub fn reach(&self) -> f32 {
        self.reach_blocks * self.block_size
    }

    /// Replace non-finite or non-positive sizes with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.block_size.is_finite() && self.block_size > 0.0) {
            log::warn!("Ignoring invalid block_size {}", self.block_size);
            self.block_size = defaults.block_size;
        }
        for (value, default, name) in [
            (&mut self.gravity, defaults.gravity, "gravity"),
            (&mut self.player_speed, defaults.player_speed, "player_speed"),
            (&mut self.jump_force, defaults.jump_force, "jump_force"),
            (&mut self.support_tolerance, defaults.support_tolerance, "support_tolerance"),
            (&mut self.base_damage, defaults.base_damage, "base_damage"),
            (&mut self.reach_blocks, defaults.reach_blocks, "reach_blocks"),
        ] {
            if !(value.is_finite() && *value >= 0.0) {
                log::warn!("Ignoring invalid {} {}", name, value);
                *value = default;
            }
        }
        self
    }
}
