//! Local media toggles shown on the call screens.

use chatcore::CallMediaType;
use serde::Serialize;

/// Mic, camera and speaker state of a call screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallControls {
    pub mic_enabled: bool,
    pub camera_enabled: bool,
    pub speaker_enabled: bool,
    /// Which camera a video call uses. Meaningless for voice calls.
    pub front_camera: bool,
    media_type: CallMediaType,
}

impl CallControls {
    pub fn new(media_type: CallMediaType) -> Self {
        let video = media_type.is_video();
        Self {
            mic_enabled: true,
            camera_enabled: video,
            speaker_enabled: video,
            front_camera: true,
            media_type,
        }
    }

    pub fn media_type(&self) -> CallMediaType {
        self.media_type
    }

    /// Returns the new mic state.
    pub fn toggle_mic(&mut self) -> bool {
        self.mic_enabled = !self.mic_enabled;
        self.mic_enabled
    }

    /// Returns the new camera state. Voice calls have no camera, so this stays
    /// `false` for them.
    pub fn toggle_camera(&mut self) -> bool {
        if self.media_type.is_video() {
            self.camera_enabled = !self.camera_enabled;
        }
        self.camera_enabled
    }

    pub fn toggle_speaker(&mut self) -> bool {
        self.speaker_enabled = !self.speaker_enabled;
        self.speaker_enabled
    }

    /// Switches between front and back camera on video calls. Returns whether
    /// the front camera is now active.
    pub fn flip_camera(&mut self) -> bool {
        if self.media_type.is_video() {
            self.front_camera = !self.front_camera;
        }
        self.front_camera
    }
}
