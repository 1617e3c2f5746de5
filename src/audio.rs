//! Audio collaborator interface
//!
//! The game core triggers playback at well-defined points (round win/loss,
//! purchase feedback, volume changes); what actually comes out of the
//! speakers is the embedder's concern. The shipped [`SilentAudio`] sink
//! plays nothing and traces every call point.

use tracing::trace;

/// Playback surface the session drives
pub trait AudioSink {
    /// Short click for accepted interactions
    fn play_button_sound(&self);
    /// Fanfare on a won round
    fn play_victory_sound(&self);
    /// Sting on a lost round or rejected purchase
    fn play_defeat_sound(&self);

    fn start_music(&self);
    fn stop_music(&self);
    fn pause_music(&self);
    fn resume_music(&self);

    /// Volume in `[0, 1]`
    fn set_music_volume(&self, volume: f32);
    /// Volume in `[0, 1]`
    fn set_sound_volume(&self, volume: f32);
}

/// No-op sink for headless and terminal builds
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_button_sound(&self) {
        trace!("audio: button sound");
    }

    fn play_victory_sound(&self) {
        trace!("audio: victory sound");
    }

    fn play_defeat_sound(&self) {
        trace!("audio: defeat sound");
    }

    fn start_music(&self) {
        trace!("audio: start music");
    }

    fn stop_music(&self) {
        trace!("audio: stop music");
    }

    fn pause_music(&self) {
        trace!("audio: pause music");
    }

    fn resume_music(&self) {
        trace!("audio: resume music");
    }

    fn set_music_volume(&self, volume: f32) {
        trace!(volume, "audio: music volume");
    }

    fn set_sound_volume(&self, volume: f32) {
        trace!(volume, "audio: sound volume");
    }
}
