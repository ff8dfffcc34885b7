//! DOM key and pointer mapping

use glam::Vec2;

use crate::sim::{InputEvent, Key};

/// Map a `KeyboardEvent`'s `key` and `code` to a simulation key
pub fn key_from_dom(key: &str, code: &str) -> Option<Key> {
    match key {
        "a" | "A" | "ArrowLeft" => return Some(Key::Left),
        "d" | "D" | "ArrowRight" => return Some(Key::Right),
        _ => {}
    }
    (code == "Space").then_some(Key::Jump)
}

/// Convert client coordinates to a click in canvas-local pixels.
///
/// `rect_left`/`rect_top` come from the canvas bounding rect; `scale` maps
/// CSS pixels to surface pixels when the canvas is displayed resized.
pub fn click_event(
    client_x: f32,
    client_y: f32,
    rect_left: f32,
    rect_top: f32,
    scale: Vec2,
) -> InputEvent {
    InputEvent::Click(Vec2::new(client_x - rect_left, client_y - rect_top) * scale)
}
