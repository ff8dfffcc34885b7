//! Gravity integration and collision resolution
//!
//! One semi-implicit Euler step per tick, no substepping. Collisions are
//! resolved against a linear scan of the world in block order; the first
//! block that matches decides the outcome.

use super::aabb::Aabb;
use super::state::{GameState, VerticalContact};

/// Integrate gravity and resolve vertical collisions
pub fn apply_gravity(state: &mut GameState) -> VerticalContact {
    let block_size = state.world.block_size();
    let player = &mut state.player;
    let prev_vel_y = player.vel.y;

    player.vel.y += state.tuning.gravity;
    player.pos.y += player.vel.y;

    let mut contact = VerticalContact::Falling;
    for block in state.world.blocks() {
        let b = block.bounds(block_size);
        let p = player.bounds();
        if !p.overlaps_x(&b) {
            continue;
        }

        // Feet inside the block: stand on top of it
        if p.bottom() > b.top() && p.bottom() <= b.bottom() {
            player.pos.y = b.top() - player.size;
            player.vel.y = 0.0;
            contact = VerticalContact::OnBlock;
            break;
        }

        // Head just below the block while moving down
        if p.top() >= b.bottom() && p.top() <= b.bottom() + player.vel.y.abs() && prev_vel_y > 0.0
        {
            player.pos.y = b.bottom();
            player.vel.y = 0.0;
            contact = VerticalContact::UnderBlock;
            log::debug!("Head bump under block at {:?}", block.pos);
            break;
        }
    }

    if contact == VerticalContact::Falling && player.bounds().bottom() >= state.height {
        player.pos.y = state.height - player.size;
        player.vel.y = 0.0;
        contact = VerticalContact::OnGround;
    }

    contact
}

/// Apply held direction keys, reverting x on any block overlap
pub fn handle_player_movement(state: &mut GameState) {
    let prev_x = state.player.pos.x;
    let speed = state.tuning.player_speed;

    if state.input.left {
        state.player.pos.x -= speed;
    }
    if state.input.right {
        state.player.pos.x += speed;
    }
    if state.player.pos.x == prev_x {
        return;
    }

    let block_size = state.world.block_size();
    let moved = state.player.bounds();
    if first_overlap(&moved, state, block_size).is_some() {
        state.player.pos.x = prev_x;
    }
}

/// Index of the first block overlapping `rect`
fn first_overlap(rect: &Aabb, state: &GameState, block_size: f32) -> Option<usize> {
    state
        .world
        .blocks()
        .iter()
        .position(|b| rect.overlaps(&b.bounds(block_size)))
}
