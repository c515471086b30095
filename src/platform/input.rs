//! Input adaptation
//!
//! Keyboard, mouse and joystick are sampled by the outer loop into a
//! [`DeviceState`]. The [`InputAdapter`] maps whichever device is active onto
//! the same [`TickInput`] so the simulation never sees device details.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::MODE_KEY_COUNT;
use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    S,
    D,
    W,
    Q,
    P,
    Escape,
    Enter,
    Space,
    F1,
    Num1,
    Num2,
    Num3,
    Num4,
}

impl Key {
    /// Zero-based index for the digit keys 1-4
    pub fn digit_index(self) -> Option<usize> {
        match self {
            Key::Num1 => Some(0),
            Key::Num2 => Some(1),
            Key::Num3 => Some(2),
            Key::Num4 => Some(3),
            _ => None,
        }
    }
}

/// Mode-select keys, in the slot order of [`TickInput::mode_keys`]
pub const MODE_KEYS: [Key; MODE_KEY_COUNT] = [Key::A, Key::S, Key::D, Key::W, Key::Q];

/// Discrete events delivered once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
}

/// Joystick sample
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JoystickState {
    /// Horizontal axis in [-1, 1]
    pub axis_x: f32,
    /// Face buttons 0-3
    pub buttons: [bool; 4],
}

/// Raw device state sampled by the outer loop
#[derive(Debug, Clone, Default)]
pub struct DeviceState {
    /// Keys currently held down
    pub held: HashSet<Key>,
    /// Pointer x position in playfield pixels
    pub mouse_x: f32,
    /// Connected joystick, if any
    pub joystick: Option<JoystickState>,
}

impl DeviceState {
    /// Device state with the given keys held
    pub fn with_keys(keys: &[Key]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Active input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputKind {
    #[default]
    Keyboard,
    Mouse,
    Joystick,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Keyboard => "Keyboard",
            InputKind::Mouse => "Mouse",
            InputKind::Joystick => "Joystick",
        }
    }
}

/// Mouse dead zone around the playfield center (pixels)
const MOUSE_DEAD_ZONE: f32 = 100.0;
/// Joystick axis dead zone
const JOYSTICK_DEAD_ZONE: f32 = 0.2;

/// Maps the active device onto a [`TickInput`]
#[derive(Debug, Clone)]
pub struct InputAdapter {
    kind: InputKind,
    screen_width: f32,
}

impl InputAdapter {
    pub fn new(kind: InputKind, screen_width: f32) -> Self {
        log::info!("Input device: {}", kind.as_str());
        Self { kind, screen_width }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: InputKind) {
        if kind != self.kind {
            log::info!("Input device: {} -> {}", self.kind.as_str(), kind.as_str());
            self.kind = kind;
        }
    }

    /// Toggle between keyboard and mouse
    pub fn cycle(&mut self) {
        let next = match self.kind {
            InputKind::Keyboard => InputKind::Mouse,
            InputKind::Mouse | InputKind::Joystick => InputKind::Keyboard,
        };
        self.set_kind(next);
    }

    /// Sample the adapted input for this tick
    pub fn read(&self, devices: &DeviceState) -> TickInput {
        match self.kind {
            InputKind::Keyboard => Self::read_keyboard(devices),
            InputKind::Mouse => self.read_mouse(devices),
            InputKind::Joystick => match devices.joystick {
                Some(joystick) => Self::read_joystick(&joystick),
                None => Self::read_keyboard(devices),
            },
        }
    }

    fn read_keyboard(devices: &DeviceState) -> TickInput {
        TickInput {
            left: devices.is_held(Key::Left),
            right: devices.is_held(Key::Right),
            mode_keys: MODE_KEYS.map(|key| devices.is_held(key)),
        }
    }

    fn read_mouse(&self, devices: &DeviceState) -> TickInput {
        let center = self.screen_width / 2.0;
        TickInput {
            left: devices.mouse_x < center - MOUSE_DEAD_ZONE,
            right: devices.mouse_x > center + MOUSE_DEAD_ZONE,
            // Mode switching stays on the keyboard
            mode_keys: MODE_KEYS.map(|key| devices.is_held(key)),
        }
    }

    fn read_joystick(joystick: &JoystickState) -> TickInput {
        let mut mode_keys = [false; MODE_KEY_COUNT];
        mode_keys[..4].copy_from_slice(&joystick.buttons);
        TickInput {
            left: joystick.axis_x < -JOYSTICK_DEAD_ZONE,
            right: joystick.axis_x > JOYSTICK_DEAD_ZONE,
            mode_keys,
        }
    }
}
