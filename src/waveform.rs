use std::fmt;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationRangeError;
use crate::wave::{CUSTOM_WAVE_FRAGMENT, MAX_FRAGMENT_LEN, WAVE_BASELINE};

/// One byte of amplitude resolution.
pub type WaveformSample = u8;

/// The curated table, evaluated at compile time.
pub static WAVE_TABLE: WaveformTable =
    match WaveformTable::new(&CUSTOM_WAVE_FRAGMENT, WAVE_BASELINE) {
        Ok(table) => table,
        Err(_) => panic!("custom waveform fragment exceeds the sample bound"),
    };

/// A waveform fragment of at most [`MAX_FRAGMENT_LEN`] samples together with
/// the baseline it is played against.
///
/// Samples live in fixed-capacity storage owned by the table; only the first
/// `len` slots are part of the fragment.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawWaveformTable", into = "RawWaveformTable")]
pub struct WaveformTable {
    samples: [WaveformSample; MAX_FRAGMENT_LEN],
    len: usize,
    baseline: WaveformSample,
}

const fn check_len(len: usize) -> Result<(), ConfigurationRangeError> {
    if len > MAX_FRAGMENT_LEN {
        return Err(ConfigurationRangeError::FragmentTooLong {
            len,
            max: MAX_FRAGMENT_LEN,
        });
    }
    Ok(())
}

impl WaveformTable {
    /// Const constructor backing [`WAVE_TABLE`]. Does not log; runtime
    /// configurations go through [`WaveformTable::try_from_values`].
    pub const fn new(
        fragment: &[WaveformSample],
        baseline: WaveformSample,
    ) -> Result<Self, ConfigurationRangeError> {
        if let Err(err) = check_len(fragment.len()) {
            return Err(err);
        }

        let mut samples = [0; MAX_FRAGMENT_LEN];
        let mut i = 0;
        while i < fragment.len() {
            samples[i] = fragment[i];
            i += 1;
        }

        Ok(WaveformTable {
            samples,
            len: fragment.len(),
            baseline,
        })
    }

    /// Builds a table from values that are not yet known to fit in a byte.
    ///
    /// The length bound is checked first, then each sample in order, then the
    /// baseline. The first violation found is returned.
    pub fn try_from_values(fragment: &[i64], baseline: i64) -> Result<Self, ConfigurationRangeError> {
        let table = Self::check_values(fragment, baseline);
        match &table {
            Ok(table) => debug!(
                "waveform table accepted: {} samples, baseline {}",
                table.len, table.baseline
            ),
            Err(err) => warn!("waveform table rejected: {}", err),
        }
        table
    }

    fn check_values(fragment: &[i64], baseline: i64) -> Result<Self, ConfigurationRangeError> {
        check_len(fragment.len())?;

        let mut samples = [0; MAX_FRAGMENT_LEN];
        for (index, (slot, &value)) in samples.iter_mut().zip(fragment).enumerate() {
            *slot = WaveformSample::try_from(value)
                .map_err(|_| ConfigurationRangeError::SampleOutOfRange { index, value })?;
        }

        let baseline = WaveformSample::try_from(baseline)
            .map_err(|_| ConfigurationRangeError::BaselineOutOfRange { value: baseline })?;

        Ok(WaveformTable {
            samples,
            len: fragment.len(),
            baseline,
        })
    }

    /// Parses `{"fragment": [...], "baseline": n}`.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawWaveformTable =
            serde_json::from_str(text).context("malformed waveform table")?;
        let table = Self::try_from_values(&raw.fragment, raw.baseline)
            .context("invalid waveform table")?;
        Ok(table)
    }

    pub fn custom() -> Self {
        WAVE_TABLE
    }

    pub fn fragment(&self) -> &[WaveformSample] {
        &self.samples[..self.len]
    }

    pub fn baseline(&self) -> WaveformSample {
        self.baseline
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = WaveformSample> + '_ {
        self.fragment().iter().copied()
    }
}

impl Default for WaveformTable {
    fn default() -> Self {
        Self::custom()
    }
}

impl PartialEq for WaveformTable {
    fn eq(&self, other: &Self) -> bool {
        self.fragment() == other.fragment() && self.baseline == other.baseline
    }
}

impl Eq for WaveformTable {}

impl fmt::Debug for WaveformTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaveformTable")
            .field("fragment", &self.fragment())
            .field("baseline", &self.baseline)
            .finish()
    }
}

// Signed and wide so negative and oversized values reach our own validation
// instead of failing inside serde's integer conversion.
#[derive(Serialize, Deserialize)]
struct RawWaveformTable {
    fragment: Vec<i64>,
    baseline: i64,
}

impl TryFrom<RawWaveformTable> for WaveformTable {
    type Error = ConfigurationRangeError;

    fn try_from(raw: RawWaveformTable) -> Result<Self, Self::Error> {
        WaveformTable::try_from_values(&raw.fragment, raw.baseline)
    }
}

impl From<WaveformTable> for RawWaveformTable {
    fn from(table: WaveformTable) -> Self {
        RawWaveformTable {
            fragment: table.iter().map(i64::from).collect(),
            baseline: i64::from(table.baseline),
        }
    }
}
