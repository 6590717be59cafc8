use chatcore::CallPhase;
use serde::Serialize;

// The size of each simulator's broadcast channel buffer.
pub(crate) const CHANNEL_CAPACITY: usize = 100;

/// Changes published by a running call simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CallEvent {
    /// The call moved to a new phase (also sent for `Dialing` on start).
    PhaseChanged(CallPhase),
    /// One more second of connected time.
    Tick { elapsed_secs: u64 },
    /// The simulation was stopped; nothing else follows until a restart.
    Stopped,
}
