use std::f32::consts::TAU;
use std::time::Duration;

use crate::config::CueConfig;

pub(crate) const SAMPLE_RATE: u32 = 44_100;
/// Fraction of the starting amplitude left at the end of the cue.
const ENVELOPE_FLOOR: f32 = 0.05;

/// Mono sine tone sweeping exponentially from `start_hz` to `end_hz` under an
/// exponentially decaying envelope. Finite: yields exactly `len` samples.
#[derive(Debug, Clone)]
pub struct ToneSweep {
    start_hz: f32,
    end_hz: f32,
    volume: f32,
    sample_rate: u32,
    len: usize,
    position: usize,
    phase: f32,
}

impl ToneSweep {
    pub fn new(duration: Duration, start_hz: f32, end_hz: f32, volume: f32) -> Self {
        let len = (duration.as_secs_f64() * f64::from(SAMPLE_RATE)).round() as usize;
        Self {
            start_hz,
            end_hz,
            volume: volume.clamp(0.0, 1.0),
            sample_rate: SAMPLE_RATE,
            len: len.max(1),
            position: 0,
            phase: 0.0,
        }
    }

    pub fn from_config(config: &CueConfig) -> Self {
        Self::new(
            Duration::from_millis(config.duration_ms),
            config.start_hz,
            config.end_hz,
            config.volume,
        )
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.len as f64 / f64::from(self.sample_rate))
    }

    pub fn remaining(&self) -> usize {
        self.len - self.position
    }

    fn progress(&self) -> f32 {
        self.position as f32 / self.len as f32
    }

    pub fn frequency_at_position(&self) -> f32 {
        self.start_hz * (self.end_hz / self.start_hz).powf(self.progress())
    }

    pub fn amplitude_at_position(&self) -> f32 {
        self.volume * ENVELOPE_FLOOR.powf(self.progress())
    }
}

impl Iterator for ToneSweep {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.position >= self.len {
            return None;
        }

        let sample = self.phase.sin() * self.amplitude_at_position();
        self.phase = (self.phase + TAU * self.frequency_at_position() / self.sample_rate as f32) % TAU;
        self.position += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ToneSweep {}
