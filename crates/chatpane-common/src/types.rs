use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-allocated surface dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Where the control is in its lifecycle.
///
/// `Connecting` covers the window between an endpoint change and the token
/// fetch resolving; the surface invariant (no surface without a session)
/// holds in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlState {
    /// Not yet initialized by the host, or destroyed.
    Detached,
    /// Initialized, no endpoint configured.
    Idle,
    /// Token fetch in flight for the current endpoint.
    Connecting,
    /// Session established, surface mounted.
    Active,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_clone_and_equality() {
        let s = PixelSize::new(800, 600);
        let s2 = s;
        assert_eq!(s, s2);
    }

    #[test]
    fn pixel_size_display() {
        let s = PixelSize::new(1920, 1080);
        assert_eq!(s.to_string(), "1920x1080");
    }

    #[test]
    fn pixel_size_serialization() {
        let s = PixelSize::new(640, 480);
        let json = serde_json::to_string(&s).unwrap();
        let deserialized: PixelSize = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }

    #[test]
    fn control_state_variants() {
        let states = [
            ControlState::Detached,
            ControlState::Idle,
            ControlState::Connecting,
            ControlState::Active,
        ];
        for state in &states {
            let json = serde_json::to_string(state).unwrap();
            let deserialized: ControlState = serde_json::from_str(&json).unwrap();
            assert_eq!(*state, deserialized);
        }
    }
}
