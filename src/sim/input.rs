//! Input events and held-key state
//!
//! Host callbacks never touch the simulation directly. They push
//! `InputEvent`s into a bounded `InputQueue`, which the frame driver drains
//! at the start of the next tick.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::INPUT_QUEUE_CAPACITY;

/// Simulation-level keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Jump,
}

/// A single input delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer click in surface-local pixels
    Click(Vec2),
}

/// Held-key flags, read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump_held: bool,
    /// Set on the first jump key-down, cleared on key-up. While set, repeated
    /// key-downs (auto-repeat) do not jump again.
    pub jump_latch: bool,
}

/// What a key event asks the driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    /// Rising edge of the jump key
    Jump,
}

impl InputState {
    /// Apply a key transition to the flags
    pub fn apply_key(&mut self, key: Key, down: bool) -> KeyAction {
        match (key, down) {
            (Key::Left, _) => self.left = down,
            (Key::Right, _) => self.right = down,
            (Key::Jump, true) => {
                if !self.jump_latch {
                    self.jump_held = true;
                    self.jump_latch = true;
                    return KeyAction::Jump;
                }
            }
            (Key::Jump, false) => {
                self.jump_held = false;
                self.jump_latch = false;
            }
        }
        KeyAction::None
    }
}

/// Bounded FIFO of pending input
#[derive(Debug, Clone)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
    capacity: usize,
    dropped: u64,
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::with_capacity(INPUT_QUEUE_CAPACITY)
    }
}

impl InputQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Queue an event. Returns false (and drops it) when the queue is full.
    pub fn push(&mut self, event: InputEvent) -> bool {
        if self.events.len() >= self.capacity {
            self.dropped += 1;
            log::warn!("Input queue full, dropping {:?}", event);
            return false;
        }
        self.events.push_back(event);
        true
    }

    /// Take all pending events in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total events dropped because the queue was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
