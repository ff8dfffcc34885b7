//! Block damage from pointer clicks

use glam::Vec2;

use super::state::{GameEvent, GameState};

/// Result of a click that reached a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    /// World index the block had when it was hit
    pub index: usize,
    /// Life left after the hit
    pub life: f32,
    pub destroyed: bool,
}

/// Damage the first in-reach block under `point`.
///
/// A block matches when `point` lies inside its bounds and its center is
/// within reach of the player's center. At most one block is affected.
pub fn hit(state: &mut GameState, point: Vec2, events: &mut Vec<GameEvent>) -> Option<HitOutcome> {
    let block_size = state.world.block_size();
    let reach = state.tuning.reach();
    let player_center = state.player.center();

    let index = state.world.blocks().iter().position(|block| {
        let b = block.bounds(block_size);
        b.contains_point(point) && player_center.distance(b.center()) <= reach
    })?;

    let base_damage = state.tuning.base_damage;
    let block = state.world.block_mut(index)?;
    let destroyed = block.deduct_life(base_damage);
    let descriptor = block.kind.descriptor();
    let (kind, pos, life) = (block.kind, block.pos, block.life);

    events.push(GameEvent::BlockHit {
        kind,
        sound: descriptor.hit_sound,
        pos,
        life,
    });
    log::debug!("Hit {:?} at {:?}, life {}", kind, pos, life);

    if destroyed {
        state.world.remove(index);
        events.push(GameEvent::BlockDestroyed { kind, pos });
        log::info!("Destroyed {:?} at {:?}", kind, pos);
    }

    Some(HitOutcome {
        index,
        life,
        destroyed,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::sim::block::{Block, BlockKind, HitSound};
    use crate::sim::world::World;
    use crate::tuning::Tuning;

    /// 320x160 terrain, player standing on the grass at x = 160
    fn terrain() -> GameState {
        GameState::new(320.0, 160.0, Tuning::default())
    }

    #[test]
    fn test_dirt_breaks_on_fourth_click() {
        let mut state = terrain();
        let mut events = Vec::new();
        // Dirt directly below the grass under the player
        let target = Vec2::new(170.0, 40.0);
        assert_eq!(state.world.blocks()[15].kind, BlockKind::Dirt);

        let mut lives = Vec::new();
        for _ in 0..4 {
            let outcome = hit(&mut state, target, &mut events).unwrap();
            lives.push(outcome.life);
        }
        assert_eq!(lives, vec![75.0, 50.0, 25.0, 0.0]);
        assert_eq!(state.world.len(), 49);
        assert_eq!(state.world.block_at_point(target), None);

        let destroyed: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BlockDestroyed { .. }))
            .collect();
        assert_eq!(destroyed.len(), 1);
        assert!(events.iter().all(|e| match e {
            GameEvent::BlockHit { sound, .. } => *sound == HitSound::Grass,
            _ => true,
        }));
    }

    #[test]
    fn test_out_of_reach_click_is_noop() {
        let mut state = terrain();
        let mut events = Vec::new();
        // Grass block at the left edge: centers 160 px apart
        assert!(hit(&mut state, Vec2::new(5.0, 5.0), &mut events).is_none());
        assert_eq!(state.world.blocks()[0].life, 100.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_reach_boundary_is_inclusive() {
        let lone_dirt = |x: f32| {
            let block = Block::new(Vec2::new(x, 100.0), BlockKind::Dirt);
            let world = World::from_blocks(32.0, vec![block]);
            let mut state = GameState::with_world(320.0, 320.0, Tuning::default(), world);
            state.player.pos = Vec2::new(100.0, 100.0);
            state
        };
        let mut events = Vec::new();

        // Centers (116, 116) and (212, 116): exactly 3 blocks apart
        let mut state = lone_dirt(196.0);
        let outcome = hit(&mut state, Vec2::new(210.0, 110.0), &mut events);
        assert_eq!(outcome.map(|o| o.life), Some(75.0));
        assert_eq!(state.world.blocks()[0].life, 75.0);

        // One pixel further is out of reach
        events.clear();
        let mut state = lone_dirt(197.0);
        assert!(hit(&mut state, Vec2::new(210.0, 110.0), &mut events).is_none());
        assert_eq!(state.world.blocks()[0].life, 100.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_click_on_empty_space_is_noop() {
        let mut state = terrain();
        let mut events = Vec::new();
        assert!(hit(&mut state, Vec2::new(170.0, -10.0), &mut events).is_none());
        assert!(events.is_empty());
    }

    #[test]
    fn test_only_one_block_per_click() {
        let mut state = terrain();
        let mut events = Vec::new();
        // Shared corner of four blocks
        let outcome = hit(&mut state, Vec2::new(160.0, 32.0), &mut events).unwrap();
        assert_eq!(outcome.index, 4);
        let damaged = state.world.blocks().iter().filter(|b| b.life < 100.0).count();
        assert_eq!(damaged, 1);
    }

    #[test]
    fn test_stone_plays_stone_sound() {
        let mut state = terrain();
        // Bring the player down next to the stone row
        state.player.pos = Vec2::new(160.0, 64.0);
        let mut events = Vec::new();
        hit(&mut state, Vec2::new(170.0, 100.0), &mut events).unwrap();
        let GameEvent::BlockHit { kind, sound, life, .. } = &events[0] else {
            panic!("expected a block hit, got {:?}", events[0]);
        };
        assert_eq!(*kind, BlockKind::Stone);
        assert_eq!(*sound, HitSound::Stone);
        assert_eq!(*life, 81.25);
    }

    proptest! {
        #[test]
        fn prop_life_never_increases(
            clicks in prop::collection::vec((0.0f32..320.0, 0.0f32..160.0), 1..40),
        ) {
            let mut state = terrain();
            let mut events = Vec::new();
            for (x, y) in clicks {
                let before: Vec<_> = state.world.blocks().iter().map(|b| (b.pos, b.life)).collect();
                let outcome = hit(&mut state, Vec2::new(x, y), &mut events);

                for block in state.world.blocks() {
                    prop_assert!(block.life > 0.0);
                    let old = before.iter().find(|(pos, _)| *pos == block.pos).unwrap();
                    prop_assert!(block.life <= old.1);
                }
                match outcome {
                    Some(o) if o.destroyed => prop_assert_eq!(state.world.len(), before.len() - 1),
                    _ => prop_assert_eq!(state.world.len(), before.len()),
                }
            }
        }
    }
}
