//! Per-tick simulation step
//!
//! Order within a tick: drain queued input (jump edges and clicks act
//! immediately), apply gravity, then horizontal movement.

use super::damage::hit;
use super::input::{InputEvent, InputQueue, KeyAction};
use super::jump::handle_jump;
use super::physics::{apply_gravity, handle_player_movement};
use super::state::{GameEvent, GameState, VerticalContact};

/// Advance the game state by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &mut InputQueue) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for event in input.drain() {
        match event {
            InputEvent::KeyDown(key) => {
                if state.input.apply_key(key, true) == KeyAction::Jump && handle_jump(state) {
                    events.push(GameEvent::Jumped);
                }
            }
            InputEvent::KeyUp(key) => {
                state.input.apply_key(key, false);
            }
            InputEvent::Click(point) => {
                hit(state, point, &mut events);
            }
        }
    }

    let contact = apply_gravity(state);
    match contact {
        VerticalContact::UnderBlock => events.push(GameEvent::HeadBump),
        c if c.is_supported() && state.last_contact == VerticalContact::Falling => {
            log::debug!("Landed ({:?}) at {:?}", c, state.player.pos);
            events.push(GameEvent::Landed { contact: c });
        }
        _ => {}
    }
    state.last_contact = contact;

    handle_player_movement(state);
    state.time_ticks += 1;

    events
}
