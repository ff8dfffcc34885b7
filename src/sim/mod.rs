//! Tick-based simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform code:
//! - One fixed step per tick, constants in px/tick
//! - Stable iteration order (world generation order)
//! - Input arrives only through `InputQueue`

pub mod aabb;
pub mod block;
pub mod damage;
pub mod input;
pub mod jump;
pub mod physics;
pub mod state;
pub mod tick;
pub mod world;

pub use aabb::Aabb;
pub use block::{Block, BlockKind, BlockType, HitSound};
pub use damage::{HitOutcome, hit};
pub use input::{InputEvent, InputQueue, InputState, Key};
pub use jump::{handle_jump, is_block_above, is_supported};
pub use physics::{apply_gravity, handle_player_movement};
pub use state::{GameEvent, GameState, Player, VerticalContact};
pub use tick::tick;
pub use world::World;
