//! Jump eligibility
//!
//! A jump is granted only while standing on the ground or a block top, and
//! only when there is headroom of at least one jump impulse above.

use super::state::GameState;

/// True when the player rests on the ground or on a block top
pub fn is_supported(state: &GameState) -> bool {
    let p = state.player.bounds();
    if p.bottom() >= state.ground_line() {
        log::debug!("Player is on the ground");
        return true;
    }

    let block_size = state.world.block_size();
    let tolerance = state.tuning.support_tolerance;
    let on_block = state.world.blocks().iter().any(|block| {
        let b = block.bounds(block_size);
        p.overlaps_x(&b) && (p.bottom() - b.top()).abs() < tolerance
    });
    if on_block {
        log::debug!("Player is on a block");
    }
    on_block
}

/// True when a block bottom is within one jump impulse of the player's head
pub fn is_block_above(state: &GameState) -> bool {
    let p = state.player.bounds();
    let block_size = state.world.block_size();
    let margin = state.tuning.jump_force;
    state.world.blocks().iter().any(|block| {
        let b = block.bounds(block_size);
        p.overlaps_x(&b) && (p.top() - b.bottom()).abs() < margin
    })
}

/// Apply the jump impulse if allowed. Call once per rising edge of the jump key.
pub fn handle_jump(state: &mut GameState) -> bool {
    if !is_supported(state) || is_block_above(state) {
        return false;
    }
    state.player.vel.y -= state.tuning.jump_force;
    log::debug!("Jump, vel.y = {}", state.player.vel.y);
    true
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::block::{Block, BlockKind};
    use crate::sim::world::World;
    use crate::tuning::Tuning;

    fn state_with_blocks(blocks: Vec<Block>) -> GameState {
        GameState::with_world(320.0, 320.0, Tuning::default(), World::from_blocks(32.0, blocks))
    }

    #[test]
    fn test_jump_from_ground() {
        let mut state = state_with_blocks(Vec::new());
        state.player.pos = Vec2::new(100.0, state.ground_level());
        assert!(handle_jump(&mut state));
        assert_eq!(state.player.vel.y, -10.0);
    }

    #[test]
    fn test_no_jump_midair() {
        let mut state = state_with_blocks(Vec::new());
        state.player.pos = Vec2::new(100.0, 100.0);
        assert!(!handle_jump(&mut state));
        assert_eq!(state.player.vel.y, 0.0);
    }

    #[test]
    fn test_jump_from_block_within_tolerance() {
        let mut state = state_with_blocks(vec![Block::new(Vec2::new(96.0, 200.0), BlockKind::Stone)]);
        state.player.pos = Vec2::new(100.0, 168.5);
        assert!(is_supported(&state));
        assert!(handle_jump(&mut state));

        state.player.pos = Vec2::new(100.0, 166.5);
        state.player.vel.y = 0.0;
        assert!(!is_supported(&state));
    }

    #[test]
    fn test_low_ceiling_blocks_jump() {
        let mut state = state_with_blocks(vec![Block::new(Vec2::new(100.0, 250.0), BlockKind::Dirt)]);
        state.player.pos = Vec2::new(100.0, state.ground_level());
        // Ceiling bottom at 282, head at 288: 6 px of headroom
        assert!(is_block_above(&state));
        assert!(!handle_jump(&mut state));
        assert_eq!(state.player.vel.y, 0.0);

        // Headroom of exactly one impulse is enough
        state.world = World::from_blocks(32.0, vec![Block::new(Vec2::new(100.0, 246.0), BlockKind::Dirt)]);
        assert!(!is_block_above(&state));
        assert!(handle_jump(&mut state));
    }

    #[test]
    fn test_jump_on_generated_terrain() {
        let mut state = GameState::new(320.0, 160.0, Tuning::default());
        assert!(handle_jump(&mut state));
        assert_eq!(state.player.vel.y, -10.0);
    }
}
