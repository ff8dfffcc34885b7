//! Block Hop - a tiny platformer on destructible terrain
//!
//! Core modules:
//! - `sim`: Tick-based simulation (gravity, collisions, jumping, block damage)
//! - `renderer`: Scene building and the WebGPU rectangle pipeline
//! - `platform`: Browser input mapping
//! - `settings`: Presentation preferences
//! - `tuning`: Data-driven physics constants

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per animation frame
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Side length of a block and of the player, in pixels
    pub const BLOCK_SIZE: f32 = 32.0;
    /// Rows of terrain generated at the bottom of the surface
    pub const TERRAIN_ROWS: u32 = 5;

    /// Downward acceleration (px/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal speed while a direction key is held (px/tick)
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Upward velocity impulse of a jump (px/tick)
    pub const JUMP_FORCE: f32 = 10.0;
    /// How close a block top must be to the player's feet to count as support
    pub const SUPPORT_TOLERANCE: f32 = 1.0;

    /// Block life when generated
    pub const BLOCK_MAX_LIFE: f32 = 100.0;
    /// Damage per click before the block type multiplier
    pub const BASE_DAMAGE: f32 = 25.0;
    /// Click reach, in block widths, center to center
    pub const REACH_BLOCKS: f32 = 3.0;

    /// Default input queue capacity
    pub const INPUT_QUEUE_CAPACITY: usize = 64;
}
