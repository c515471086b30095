//! Platform abstraction layer
//!
//! The outer loop owns device polling and window events; this layer turns
//! what it samples into the adapted per-tick input the simulation consumes.

pub mod input;

pub use input::{DeviceState, InputAdapter, InputEvent, InputKind, JoystickState, Key, MODE_KEYS};
