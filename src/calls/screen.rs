//! Model behind the voice-call and video-call screens.

use chatcore::{CallMediaType, CallSession, Contact, NavSignal};
use log::{debug, info};
use tokio::sync::broadcast;

use super::error::CallError;
use super::events::CallEvent;
use super::simulator::CallLifecycleSimulator;
use super::state::CallControls;
use crate::config::SimulatorConfig;

/// One outgoing call screen. Dropping it stops the call's timers.
pub struct CallScreen {
    peer: Contact,
    controls: CallControls,
    simulator: CallLifecycleSimulator,
}

impl CallScreen {
    pub fn new(peer: Contact, media_type: CallMediaType, config: SimulatorConfig) -> Self {
        Self {
            peer,
            controls: CallControls::new(media_type),
            simulator: CallLifecycleSimulator::new(config),
        }
    }

    pub fn voice(peer: Contact, config: SimulatorConfig) -> Self {
        Self::new(peer, CallMediaType::Audio, config)
    }

    pub fn video(peer: Contact, config: SimulatorConfig) -> Self {
        Self::new(peer, CallMediaType::Video, config)
    }

    /// Shows the screen: the call starts dialing.
    pub fn open(&self) -> Result<(), CallError> {
        info!(
            target: "Call/Screen",
            "Opening {:?} call with {}",
            self.controls.media_type(),
            self.peer.display_name
        );
        self.simulator.start()
    }

    pub fn peer(&self) -> &Contact {
        &self.peer
    }

    pub fn is_video(&self) -> bool {
        self.controls.media_type().is_video()
    }

    pub fn controls(&self) -> &CallControls {
        &self.controls
    }

    pub fn session(&self) -> CallSession {
        self.simulator.snapshot()
    }

    /// Phase label, or `MM:SS` once connected.
    pub fn status_label(&self) -> String {
        self.simulator.display_label()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CallEvent> {
        self.simulator.subscribe()
    }

    pub fn toggle_mic(&mut self) -> bool {
        let enabled = self.controls.toggle_mic();
        debug!(target: "Call/Screen", "Mic enabled: {enabled}");
        enabled
    }

    pub fn toggle_camera(&mut self) -> bool {
        let enabled = self.controls.toggle_camera();
        debug!(target: "Call/Screen", "Camera enabled: {enabled}");
        enabled
    }

    pub fn toggle_speaker(&mut self) -> bool {
        let enabled = self.controls.toggle_speaker();
        debug!(target: "Call/Screen", "Speaker enabled: {enabled}");
        enabled
    }

    pub fn flip_camera(&mut self) -> bool {
        self.controls.flip_camera()
    }

    /// Hangs up. The host is expected to dismiss the screen.
    pub fn end_call(&self) -> NavSignal<()> {
        self.simulator.stop();
        info!(
            target: "Call/Screen",
            "Call with {} ended at {}",
            self.peer.display_name,
            self.status_label()
        );
        NavSignal::Close
    }
}
