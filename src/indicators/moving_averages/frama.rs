//! # Fractal Adaptive Moving Average (FRAMA)
//!
//! An adaptive recursive filter whose decay constant follows the fractal
//! dimension of the recent high/low envelope: a trending window pushes the
//! dimension toward 1 and the filter toward pass-through, while a choppy
//! window pushes it toward 2 and the filter toward a slow crawl.
//!
//! ## Parameters
//! - **period**: lookback window (default 10).
//!
//! ## Errors
//! - **EmptyInputData**: the input slices are empty.
//! - **MismatchedInputLength**: `high`, `low`, and `close` differ in length.
//! - **InvalidPeriod**: `period` is zero or exceeds the data length.
//! - **WindowOutOfRange**: an index's window would begin before the start of
//!   the series, which happens at every index below `period - 1`. The
//!   violation is reported up front and nothing is written.

use crate::utilities::data_loader::Candles;
use crate::utilities::enums::MaStatus;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum FramaData<'a> {
    Candles {
        candles: &'a Candles,
    },
    Slices {
        high: &'a [f64],
        low: &'a [f64],
        close: &'a [f64],
    },
}

#[derive(Debug, Clone)]
pub struct FramaOutput {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct FramaParams {
    pub period: Option<usize>,
}

impl Default for FramaParams {
    fn default() -> Self {
        Self { period: Some(10) }
    }
}

#[derive(Debug, Clone)]
pub struct FramaInput<'a> {
    pub data: FramaData<'a>,
    pub params: FramaParams,
}

impl<'a> FramaInput<'a> {
    pub fn from_candles(candles: &'a Candles, params: FramaParams) -> Self {
        Self {
            data: FramaData::Candles { candles },
            params,
        }
    }

    pub fn from_slices(
        high: &'a [f64],
        low: &'a [f64],
        close: &'a [f64],
        params: FramaParams,
    ) -> Self {
        Self {
            data: FramaData::Slices { high, low, close },
            params,
        }
    }

    pub fn with_default_candles(candles: &'a Candles) -> Self {
        Self {
            data: FramaData::Candles { candles },
            params: FramaParams::default(),
        }
    }

    pub fn get_period(&self) -> usize {
        self.params
            .period
            .unwrap_or_else(|| FramaParams::default().period.unwrap())
    }
}

#[derive(Debug, Error)]
pub enum FramaError {
    #[error("frama: Empty input data.")]
    EmptyInputData,
    #[error(
        "frama: Mismatched input lengths: high = {high_len}, low = {low_len}, close = {close_len}"
    )]
    MismatchedInputLength {
        high_len: usize,
        low_len: usize,
        close_len: usize,
    },
    #[error("frama: Invalid period: period = {period}, data length = {data_len}")]
    InvalidPeriod { period: usize, data_len: usize },
    #[error(
        "frama: window for index {index} starts {shortfall} sample(s) before the series (period = {period})"
    )]
    WindowOutOfRange {
        index: usize,
        period: usize,
        shortfall: usize,
    },
}

/// High-low envelope extent over `[start, end)`; an empty range has no
/// extent and contributes 0.
fn hl_range(high: &[f64], low: &[f64], start: usize, end: usize) -> f64 {
    if start >= end {
        return 0.0;
    }
    let mut h = high[start];
    let mut l = low[start];
    for i in start + 1..end {
        if high[i] > h {
            h = high[i];
        }
        if low[i] < l {
            l = low[i];
        }
    }
    h - l
}

/// Fills `out` with the FRAMA of `data`, reading the envelope from `high`
/// and `low`. The trailing window at index `t` splits into a first half of
/// `period / 2` samples and a second half that absorbs the remainder; the
/// fractal dimension of the two halves against the full window sets the
/// decay constant, clamped to `[0.01, 1.0]`.
///
/// Index `period - 1` is seeded with the plain mean of the first `period`
/// samples. Returns `Ok(MaStatus::Skipped)` on parameter-guard violations
/// and `Err(FramaError::WindowOutOfRange)` as soon as an index's window
/// would reach before the series; nothing is written in either case.
pub fn frama_into_slice(
    data: &[f64],
    high: &[f64],
    low: &[f64],
    out: &mut [f64],
    period: usize,
) -> Result<MaStatus, FramaError> {
    let len = data.len();
    if out.len() != len
        || high.len() != len
        || low.len() != len
        || period == 0
        || period > len
    {
        return Ok(MaStatus::Skipped);
    }

    if period > 1 {
        // Index 0's window already reaches before the series.
        return Err(FramaError::WindowOutOfRange {
            index: 0,
            period,
            shortfall: period - 1,
        });
    }

    let half = period / 2;
    for t in 0..len {
        let start = t + 1 - period;

        let n = hl_range(high, low, start, t + 1);
        let range_1 = hl_range(high, low, start, start + half);
        let range_2 = hl_range(high, low, start + half, t + 1);

        let mut d = if n <= 0.0 {
            0.0
        } else {
            ((range_1 + range_2).ln() - n.ln()) / 2.0_f64.ln()
        };
        if d < 1.0 {
            d = 1.0;
        }
        if d > 2.0 {
            d = 2.0;
        }

        let mut alpha = (-4.6 * (d - 1.0)).exp();
        if alpha < 0.01 {
            alpha = 0.01;
        }
        if alpha > 1.0 {
            alpha = 1.0;
        }

        if t + 1 == period {
            let mut sum = 0.0;
            for &value in &data[..period] {
                sum += value;
            }
            out[t] = sum / period as f64;
        } else {
            out[t] = alpha * data[t] + (1.0 - alpha) * out[t - 1];
        }
    }
    Ok(MaStatus::Computed)
}

pub fn frama(input: &FramaInput) -> Result<FramaOutput, FramaError> {
    let (high, low, close): (&[f64], &[f64], &[f64]) = match &input.data {
        FramaData::Candles { candles } => (
            candles.high.as_slice(),
            candles.low.as_slice(),
            candles.close.as_slice(),
        ),
        FramaData::Slices { high, low, close } => (*high, *low, *close),
    };

    if close.is_empty() {
        return Err(FramaError::EmptyInputData);
    }
    if high.len() != close.len() || low.len() != close.len() {
        return Err(FramaError::MismatchedInputLength {
            high_len: high.len(),
            low_len: low.len(),
            close_len: close.len(),
        });
    }

    let period = input.get_period();
    if period == 0 || period > close.len() {
        return Err(FramaError::InvalidPeriod {
            period,
            data_len: close.len(),
        });
    }

    let mut values = vec![f64::NAN; close.len()];
    match frama_into_slice(close, high, low, &mut values, period)? {
        MaStatus::Computed => Ok(FramaOutput { values }),
        MaStatus::Skipped => Err(FramaError::InvalidPeriod {
            period,
            data_len: close.len(),
        }),
    }
}
