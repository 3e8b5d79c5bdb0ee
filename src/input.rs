//! Window input as explicit events
//!
//! The window shell translates platform events into `InputEvent`s and applies
//! them to the simulation between animation cycles, on the same thread.

use crate::sim::RadarSimulation;

/// Keys the scope cares about, by physical position (layout independent)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Q,
    Other,
}

/// Input delivered by the window
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Resized { width: u32, height: u32 },
    Key { key: Key, pressed: bool },
    /// Layout-dependent text input
    Char(char),
    CloseRequested,
}

impl RadarSimulation {
    /// Apply one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resized { width, height } => self.reshape(width, height),
            InputEvent::Key {
                key: Key::Escape | Key::Q,
                pressed: true,
            } => {
                log::info!("Quit key pressed");
                self.request_close();
            }
            InputEvent::Key { key, pressed } => {
                log::debug!("Ignoring key {:?} (pressed: {})", key, pressed);
            }
            InputEvent::Char(c) => log::info!("Char input: {:?}", c),
            InputEvent::CloseRequested => self.request_close(),
        }
    }
}
