use std::cell::Cell;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamHandle, Source};
use tracing::{debug, info, warn};

use crate::config::CueConfig;
use crate::error::{AppError, AppResult};

use super::TransitionCue;
use super::tone::ToneSweep;

impl Source for ToneSweep {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.remaining())
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        ToneSweep::sample_rate(self)
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.duration())
    }
}

/// Plays the tone sweep on the default output device.
///
/// The stream is opened once and released on drop. Each cue is handed to the
/// device mixer, which drops it after its last sample.
pub struct AudioCue {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    config: CueConfig,
    play_failed: Cell<bool>,
}

impl AudioCue {
    pub fn open(config: CueConfig) -> AppResult<Self> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|err| AppError::unsupported(format!("audio output: {err}")))?;
        info!(
            duration_ms = config.duration_ms,
            start_hz = config.start_hz,
            end_hz = config.end_hz,
            "Opened audio output for transition cue"
        );
        Ok(Self {
            _stream: stream,
            handle,
            config,
            play_failed: Cell::new(false),
        })
    }
}

impl TransitionCue for AudioCue {
    fn emit(&self) {
        let tone = ToneSweep::from_config(&self.config);
        match self.handle.play_raw(tone) {
            Ok(()) => debug!("Transition cue started"),
            Err(err) => {
                // Warn once per session.
                if !self.play_failed.replace(true) {
                    warn!("Failed to play transition cue: {err}");
                }
            }
        }
    }
}
