//! Call phases and the session snapshot shown by the call screens.

use serde::{Deserialize, Serialize};

/// Phase of a simulated outgoing call.
///
/// Phases only move forward: `Dialing -> Connecting -> Connected`. Ending the
/// call is a user action handled by the screen, not a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CallPhase {
    #[default]
    Dialing,
    Connecting,
    Connected,
}

impl CallPhase {
    /// Human label shown in place of the duration before the call connects.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dialing => "Dialing...",
            Self::Connecting => "Connecting...",
            Self::Connected => "Connected",
        }
    }

    /// The phase that follows this one, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Dialing => Some(Self::Connecting),
            Self::Connecting => Some(Self::Connected),
            Self::Connected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CallMediaType {
    #[default]
    Audio,
    Video,
}

impl CallMediaType {
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video)
    }
}

/// Snapshot of a call's phase and duration counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CallSession {
    pub phase: CallPhase,
    /// Seconds counted since the call connected. Stays at zero before that.
    pub elapsed_secs: u64,
}

impl CallSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for the status line: the phase label until connected, then the
    /// running duration.
    pub fn display_label(&self) -> String {
        if self.phase.is_connected() {
            format_elapsed(self.elapsed_secs)
        } else {
            self.phase.label().to_string()
        }
    }
}

/// Formats a second count as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(59), "00:59");
        assert_eq!(format_elapsed(60), "01:00");
        assert_eq!(format_elapsed(3661), "61:01");
    }

    #[test]
    fn test_format_elapsed_grows_past_two_digits() {
        assert_eq!(format_elapsed(100 * 60 + 5), "100:05");
    }

    #[test]
    fn test_phase_order_is_linear() {
        let mut phases = vec![CallPhase::default()];
        while let Some(next) = phases.last().and_then(CallPhase::next) {
            phases.push(next);
        }
        assert_eq!(
            phases,
            vec![CallPhase::Dialing, CallPhase::Connecting, CallPhase::Connected]
        );
    }

    /// The duration replaces the phase label only once connected.
    #[test]
    fn test_display_label() {
        let mut session = CallSession::new();
        assert_eq!(session.display_label(), "Dialing...");

        session.phase = CallPhase::Connecting;
        assert_eq!(session.display_label(), "Connecting...");

        session.phase = CallPhase::Connected;
        assert_eq!(session.display_label(), "00:00");

        session.elapsed_secs = 75;
        assert_eq!(session.display_label(), "01:15");
    }
}
