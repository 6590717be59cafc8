//! Voice and video call screens.
//!
//! There is no signaling or media here: the call's progress is simulated with
//! timers so the screens have something to show.
//!
//! # Architecture
//!
//! - [`ScheduledTask`]: cancellable one-shot and repeating tokio timers
//! - [`CallLifecycleSimulator`]: `Dialing -> Connecting -> Connected` plus the
//!   connected-duration counter
//! - [`CallEvent`]: what the simulator broadcasts to subscribers
//! - [`CallControls`]: mic, camera and speaker toggles
//! - [`CallScreen`]: ties a peer, the controls and a simulator together

mod error;
mod events;
mod screen;
mod simulator;
mod state;
mod timer;

pub use error::CallError;
pub use events::CallEvent;
pub use screen::CallScreen;
pub use simulator::CallLifecycleSimulator;
pub use state::CallControls;
pub use timer::ScheduledTask;
