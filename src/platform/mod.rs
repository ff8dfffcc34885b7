//! Platform abstraction layer
//!
//! Translates browser input into simulation events. Kept free of `web_sys`
//! types so the mapping is testable natively.

pub mod input;

pub use input::{click_event, key_from_dom};
