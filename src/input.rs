//! Abstract input contract
//!
//! Device plumbing (mouse, touch, keyboard) lives outside the core; whatever
//! the host maps, it reports plain press/release events here. Events arrive
//! asynchronously relative to the simulation, so the driver drains them into
//! a single consistent [`TickInput`] snapshot once per tick - the simulation
//! never reads torn input state.

use crate::sim::TickInput;

/// Accumulates press/release events between ticks
///
/// Key repeat is suppressed: a press while already held does not re-fire the
/// edge, matching holding a key down on a keyboard.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: bool,
    pressed_edge: bool,
    released_edge: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The jump input went down (pointer-down, touch-start, key-down)
    pub fn on_press_start(&mut self) {
        if !self.held {
            self.held = true;
            self.pressed_edge = true;
        }
    }

    /// The jump input went up (pointer-up, touch-end/cancel, key-up)
    pub fn on_press_end(&mut self) {
        if self.held {
            self.held = false;
            self.released_edge = true;
        }
    }

    /// Current held-state flag
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Snapshot the edges accumulated since the last tick and clear them
    ///
    /// The held flag persists across snapshots; only the one-shot edges are
    /// consumed.
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            press: self.pressed_edge,
            release: self.released_edge,
            held: self.held,
        };
        self.pressed_edge = false;
        self.released_edge = false;
        input
    }
}
