//! Short audible cue played when a guided page turn starts.
//!
//! The cue is a capability handed to the navigation controller. Every
//! implementation returns immediately and never reports failure: a missing
//! audio device degrades to silence.

#[cfg(feature = "audio")]
mod audio;
#[cfg(test)]
pub(crate) mod testing;
mod tone;

#[cfg(feature = "audio")]
pub use audio::AudioCue;
pub use tone::ToneSweep;

use tracing::{info, warn};

use crate::config::CueConfig;

pub trait TransitionCue {
    fn emit(&self);
}

impl<T: TransitionCue + ?Sized> TransitionCue for Box<T> {
    fn emit(&self) {
        (**self).emit();
    }
}

/// Cue used when sound is muted or no device is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCue;

impl TransitionCue for SilentCue {
    fn emit(&self) {}
}

/// Picks the cue implementation for this run.
pub fn open_cue(config: &CueConfig, muted: bool) -> Box<dyn TransitionCue> {
    if muted || !config.enabled {
        info!(muted, enabled = config.enabled, "Transition cue disabled");
        return Box::new(SilentCue);
    }
    open_audio_cue(config)
}

#[cfg(feature = "audio")]
fn open_audio_cue(config: &CueConfig) -> Box<dyn TransitionCue> {
    match AudioCue::open(config.clone()) {
        Ok(cue) => Box::new(cue),
        Err(err) => {
            warn!("Audio output unavailable, cue will be silent: {err}");
            Box::new(SilentCue)
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_audio_cue(_config: &CueConfig) -> Box<dyn TransitionCue> {
    warn!("Built without the `audio` feature; transition cue will be silent");
    Box::new(SilentCue)
}

#[cfg(test)]
mod tests {
    use super::testing::CountingCue;
    use super::{TransitionCue, open_cue};
    use crate::config::CueConfig;

    #[test]
    fn counting_cue_shares_count_across_clones() {
        let cue = CountingCue::new();
        let handed_out: Box<dyn TransitionCue> = Box::new(cue.clone());
        handed_out.emit();
        handed_out.emit();
        assert_eq!(cue.count(), 2);
    }

    #[test]
    fn muted_cue_is_a_silent_noop() {
        let cue = open_cue(&CueConfig::default(), true);
        for _ in 0..64 {
            cue.emit();
        }
    }
}
