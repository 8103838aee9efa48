use crate::indicators::moving_averages::esma::esma_into_slice;
use crate::utilities::data_loader::{source_type, Candles};
use crate::utilities::enums::MaStatus;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum RmaData<'a> {
    Candles {
        candles: &'a Candles,
        source: &'a str,
    },
    Slice(&'a [f64]),
}

#[derive(Debug, Clone)]
pub struct RmaOutput {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct RmaParams {
    pub period: Option<usize>,
}

impl Default for RmaParams {
    fn default() -> Self {
        Self { period: Some(14) }
    }
}

#[derive(Debug, Clone)]
pub struct RmaInput<'a> {
    pub data: RmaData<'a>,
    pub params: RmaParams,
}

impl<'a> RmaInput<'a> {
    pub fn from_candles(candles: &'a Candles, source: &'a str, params: RmaParams) -> Self {
        Self {
            data: RmaData::Candles { candles, source },
            params,
        }
    }

    pub fn from_slice(slice: &'a [f64], params: RmaParams) -> Self {
        Self {
            data: RmaData::Slice(slice),
            params,
        }
    }

    pub fn with_default_candles(candles: &'a Candles) -> Self {
        Self {
            data: RmaData::Candles {
                candles,
                source: "close",
            },
            params: RmaParams::default(),
        }
    }

    pub fn get_period(&self) -> usize {
        self.params
            .period
            .unwrap_or_else(|| RmaParams::default().period.unwrap())
    }
}

#[derive(Debug, Error)]
pub enum RmaError {
    #[error("Empty data provided for RMA.")]
    EmptyData,
    #[error("Invalid period: period = {period}, data length = {data_len}")]
    InvalidPeriod { period: usize, data_len: usize },
}

/// Wilder smoothing: recursive filter with `alpha = 1 / period`.
#[inline]
pub fn rma_into_slice(data: &[f64], out: &mut [f64], period: usize) -> MaStatus {
    let len = data.len();
    if out.len() != len || period > len {
        return MaStatus::Skipped;
    }
    esma_into_slice(data, out, period, 1.0 / period as f64)
}

#[inline]
pub fn rma(input: &RmaInput) -> Result<RmaOutput, RmaError> {
    let data: &[f64] = match &input.data {
        RmaData::Candles { candles, source } => source_type(candles, source),
        RmaData::Slice(slice) => slice,
    };

    if data.is_empty() {
        return Err(RmaError::EmptyData);
    }

    let period = input.get_period();
    if period == 0 || period > data.len() {
        return Err(RmaError::InvalidPeriod {
            period,
            data_len: data.len(),
        });
    }

    let mut values = vec![f64::NAN; data.len()];
    rma_into_slice(data, &mut values, period);
    Ok(RmaOutput { values })
}
