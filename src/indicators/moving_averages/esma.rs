//! Generalized exponential smoothing with a caller-supplied decay constant.
//! EMA and RMA derive their constants from the period and delegate here.

use crate::utilities::data_loader::{source_type, Candles};
use crate::utilities::enums::MaStatus;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum EsmaData<'a> {
    Candles {
        candles: &'a Candles,
        source: &'a str,
    },
    Slice(&'a [f64]),
}

#[derive(Debug, Clone)]
pub struct EsmaOutput {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct EsmaParams {
    pub period: Option<usize>,
    pub alpha: Option<f64>,
}

impl Default for EsmaParams {
    fn default() -> Self {
        Self {
            period: Some(9),
            alpha: Some(0.5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EsmaInput<'a> {
    pub data: EsmaData<'a>,
    pub params: EsmaParams,
}

impl<'a> EsmaInput<'a> {
    pub fn from_candles(candles: &'a Candles, source: &'a str, params: EsmaParams) -> Self {
        Self {
            data: EsmaData::Candles { candles, source },
            params,
        }
    }

    pub fn from_slice(slice: &'a [f64], params: EsmaParams) -> Self {
        Self {
            data: EsmaData::Slice(slice),
            params,
        }
    }

    pub fn with_default_candles(candles: &'a Candles) -> Self {
        Self {
            data: EsmaData::Candles {
                candles,
                source: "close",
            },
            params: EsmaParams::default(),
        }
    }

    pub fn get_period(&self) -> usize {
        self.params
            .period
            .unwrap_or_else(|| EsmaParams::default().period.unwrap())
    }

    pub fn get_alpha(&self) -> f64 {
        self.params
            .alpha
            .unwrap_or_else(|| EsmaParams::default().alpha.unwrap())
    }
}

#[derive(Debug, Error)]
pub enum EsmaError {
    #[error("Empty data provided for ESMA.")]
    EmptyData,
    #[error("Invalid period: period = {period}, data length = {data_len}")]
    InvalidPeriod { period: usize, data_len: usize },
    #[error("Invalid alpha: alpha = {alpha}, must not be negative")]
    InvalidAlpha { alpha: f64 },
}

/// Recursive smoothing: `out[0] = data[0]`,
/// `out[i] = alpha * data[i] + (1 - alpha) * out[i - 1]`.
///
/// `period` only participates in the validity guard; it keeps the recursive
/// kernel signature-compatible with the windowed ones.
#[inline]
pub fn esma_into_slice(data: &[f64], out: &mut [f64], period: usize, alpha: f64) -> MaStatus {
    let len = data.len();
    if out.len() != len || period > len || alpha < 0.0 {
        return MaStatus::Skipped;
    }
    if len == 0 {
        return MaStatus::Computed;
    }

    out[0] = data[0];
    for i in 1..len {
        out[i] = alpha * data[i] + (1.0 - alpha) * out[i - 1];
    }
    MaStatus::Computed
}

#[inline]
pub fn esma(input: &EsmaInput) -> Result<EsmaOutput, EsmaError> {
    let data: &[f64] = match &input.data {
        EsmaData::Candles { candles, source } => source_type(candles, source),
        EsmaData::Slice(slice) => slice,
    };

    if data.is_empty() {
        return Err(EsmaError::EmptyData);
    }

    let period = input.get_period();
    if period == 0 || period > data.len() {
        return Err(EsmaError::InvalidPeriod {
            period,
            data_len: data.len(),
        });
    }

    let alpha = input.get_alpha();
    if alpha < 0.0 {
        return Err(EsmaError::InvalidAlpha { alpha });
    }

    let mut values = vec![f64::NAN; data.len()];
    esma_into_slice(data, &mut values, period, alpha);
    Ok(EsmaOutput { values })
}
