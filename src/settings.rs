//! Radar settings
//!
//! Defaults describe the stock scope; hosts embedding the library can
//! override them from JSON.

use serde::{Deserialize, Serialize};

/// How blips decide when to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlipMotion {
    /// Each blip moves when the beam passes over where it is heading
    #[default]
    Swept,
    /// Every blip moves together once per revolution
    Lockstep,
}

impl BlipMotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlipMotion::Swept => "swept",
            BlipMotion::Lockstep => "lockstep",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "swept" | "sweep" => Some(BlipMotion::Swept),
            "lockstep" | "legacy" => Some(BlipMotion::Lockstep),
            _ => None,
        }
    }
}

/// Scope settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial window width in pixels
    pub width: u32,
    /// Initial window height in pixels
    pub height: u32,
    /// Blip movement rule
    pub motion: BlipMotion,
    /// Hide blips that drift outside the outer range ring
    pub masking_ring: bool,
    /// Pause after each presented frame (milliseconds)
    pub frame_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            motion: BlipMotion::Swept,
            masking_ring: true,
            frame_delay_ms: 2,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn frame_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_delay_ms)
    }
}
