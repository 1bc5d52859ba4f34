use thiserror::Error;

/// A waveform table that violates the sample range or the fragment bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationRangeError {
    #[error("waveform fragment has {len} samples, at most {max} are allowed")]
    FragmentTooLong { len: usize, max: usize },
    #[error("waveform sample {index} is {value}, expected 0..=255")]
    SampleOutOfRange { index: usize, value: i64 },
    #[error("baseline is {value}, expected 0..=255")]
    BaselineOutOfRange { value: i64 },
}
