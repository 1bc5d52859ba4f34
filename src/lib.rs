//! Custom waveform fragment and baseline for the ECG simulator.
//!
//! The data is immutable and process-wide: [`WAVE_TABLE`] is evaluated at
//! compile time and may be read from any number of threads without
//! synchronization. How the fragment is played back against the baseline is
//! left to the consumer.

pub mod error;
mod wave;
pub mod waveform;

pub use error::ConfigurationRangeError;
pub use wave::MAX_FRAGMENT_LEN;
pub use waveform::{WaveformSample, WaveformTable, WAVE_TABLE};

/// The custom waveform fragment, in playback order.
///
/// The curated constants are only reachable through the table:
///
/// ```compile_fail
/// use ecg_wave_table::wave::CUSTOM_WAVE_FRAGMENT;
/// ```
pub fn wave_fragment() -> &'static [WaveformSample] {
    WAVE_TABLE.fragment()
}

pub fn baseline() -> WaveformSample {
    WAVE_TABLE.baseline()
}
