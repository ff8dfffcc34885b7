//! Game state and core simulation types
//!
//! `GameState` is owned by the frame driver and handed by `&mut` to every
//! resolver; nothing in the simulation is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::block::{BlockKind, HitSound};
use super::input::InputState;
use super::world::World;
use crate::consts::TERRAIN_ROWS;
use crate::tuning::Tuning;

/// Vertical outcome of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalContact {
    /// Nothing stopped the fall this tick
    Falling,
    /// Snapped onto the ground line
    OnGround,
    /// Landed on (or resting on) a block top
    OnBlock,
    /// Stopped against a block bottom
    UnderBlock,
}

impl VerticalContact {
    /// True when a collision zeroed vertical velocity this tick
    pub fn is_resolved(self) -> bool {
        !matches!(self, VerticalContact::Falling)
    }

    /// True when the player is standing on something
    pub fn is_supported(self) -> bool {
        matches!(self, VerticalContact::OnGround | VerticalContact::OnBlock)
    }
}

/// Something that happened during a tick, for audio and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A jump impulse was applied
    Jumped,
    /// Player came to rest after falling
    Landed { contact: VerticalContact },
    /// Player was stopped by a block above
    HeadBump,
    /// A block took damage (it may also have been destroyed)
    BlockHit {
        kind: BlockKind,
        sound: HitSound,
        pos: Vec2,
        life: f32,
    },
    /// A block's life reached zero and it was removed
    BlockDestroyed { kind: BlockKind, pos: Vec2 },
}

/// The player block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Player {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Drawing surface width (px)
    pub width: f32,
    /// Drawing surface height (px), also the ground line
    pub height: f32,
    pub tuning: Tuning,
    pub player: Player,
    pub world: World,
    pub input: InputState,
    /// Contact from the previous gravity step
    pub last_contact: VerticalContact,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Generate the terrain and place the player on top of it, centered
    pub fn new(width: f32, height: f32, tuning: Tuning) -> Self {
        let world = World::generate(width, height, tuning.block_size);
        let mut state = Self::with_world(width, height, tuning, world);
        let bs = tuning.block_size;
        state.player.pos = Vec2::new(width / 2.0, height - bs - bs * TERRAIN_ROWS as f32);
        state
    }

    /// State with a caller-provided world; the player starts at the surface center
    pub fn with_world(width: f32, height: f32, tuning: Tuning, world: World) -> Self {
        Self {
            width,
            height,
            tuning,
            player: Player::new(Vec2::new(width / 2.0, height / 2.0), tuning.block_size),
            world,
            input: InputState::default(),
            last_contact: VerticalContact::Falling,
            time_ticks: 0,
        }
    }

    /// The y coordinate the player's bottom edge cannot pass
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.height
    }

    /// Player top-left y when standing on the ground
    #[inline]
    pub fn ground_level(&self) -> f32 {
        self.ground_line() - self.player.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_player_on_grass() {
        let state = GameState::new(320.0, 160.0, Tuning::default());
        assert_eq!(state.world.len(), 50);
        assert_eq!(state.player.pos, Vec2::new(160.0, -32.0));
        // Feet on the grass row
        assert_eq!(state.player.bounds().bottom(), state.world.blocks()[0].pos.y);
        assert_eq!(state.player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_ground_level() {
        let state = GameState::with_world(320.0, 240.0, Tuning::default(), World::empty(32.0));
        assert_eq!(state.ground_line(), 240.0);
        assert_eq!(state.ground_level(), 208.0);
    }

    #[test]
    fn test_contact_predicates() {
        assert!(!VerticalContact::Falling.is_resolved());
        assert!(VerticalContact::UnderBlock.is_resolved());
        assert!(!VerticalContact::UnderBlock.is_supported());
        assert!(VerticalContact::OnBlock.is_supported());
    }
}
