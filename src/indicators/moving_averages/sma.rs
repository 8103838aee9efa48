use crate::utilities::data_loader::{source_type, Candles};
use crate::utilities::enums::MaStatus;

#[derive(Debug, Clone)]
pub enum SmaData<'a> {
    Candles {
        candles: &'a Candles,
        source: &'a str,
    },
    Slice(&'a [f64]),
}

#[derive(Debug, Clone)]
pub struct SmaOutput {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct SmaParams {
    pub period: Option<usize>,
}

impl Default for SmaParams {
    fn default() -> Self {
        Self { period: Some(9) }
    }
}

#[derive(Debug, Clone)]
pub struct SmaInput<'a> {
    pub data: SmaData<'a>,
    pub params: SmaParams,
}

impl<'a> SmaInput<'a> {
    pub fn from_candles(candles: &'a Candles, source: &'a str, params: SmaParams) -> Self {
        Self {
            data: SmaData::Candles { candles, source },
            params,
        }
    }

    pub fn from_slice(slice: &'a [f64], params: SmaParams) -> Self {
        Self {
            data: SmaData::Slice(slice),
            params,
        }
    }

    pub fn with_default_candles(candles: &'a Candles) -> Self {
        Self {
            data: SmaData::Candles {
                candles,
                source: "close",
            },
            params: SmaParams::default(),
        }
    }

    pub fn get_period(&self) -> usize {
        self.params
            .period
            .unwrap_or_else(|| SmaParams::default().period.unwrap())
    }
}
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmaError {
    #[error("Empty data provided for SMA.")]
    EmptyData,
    #[error("Invalid period: period = {period}, data length = {data_len}")]
    InvalidPeriod { period: usize, data_len: usize },
}

/// Rolling mean over a trailing window that grows to `period` samples and
/// then slides. At index `i < period - 1` the mean covers only the `i + 1`
/// samples seen so far.
///
/// Returns [`MaStatus::Skipped`] without touching `out` when `period`
/// exceeds the data length or the buffer lengths differ.
#[inline]
pub fn sma_into_slice(data: &[f64], out: &mut [f64], period: usize) -> MaStatus {
    let len = data.len();
    if out.len() != len || period > len {
        return MaStatus::Skipped;
    }

    let mut sum = 0.0;
    for i in 0..period {
        sum += data[i];
        out[i] = sum / (i + 1) as f64;
    }
    for i in period..len {
        sum += data[i];
        sum -= data[i - period];
        out[i] = sum / period as f64;
    }
    MaStatus::Computed
}

#[inline]
pub fn sma(input: &SmaInput) -> Result<SmaOutput, SmaError> {
    let data: &[f64] = match &input.data {
        SmaData::Candles { candles, source } => source_type(candles, source),
        SmaData::Slice(slice) => slice,
    };

    if data.is_empty() {
        return Err(SmaError::EmptyData);
    }

    let period = input.get_period();
    if period == 0 || period > data.len() {
        return Err(SmaError::InvalidPeriod {
            period,
            data_len: data.len(),
        });
    }

    let mut values = vec![f64::NAN; data.len()];
    sma_into_slice(data, &mut values, period);
    Ok(SmaOutput { values })
}
