use crate::indicators::moving_averages::sma::sma_into_slice;
use crate::utilities::data_loader::{source_type, Candles};
use crate::utilities::enums::MaStatus;

#[derive(Debug, Clone)]
pub enum KamaData<'a> {
    Candles {
        candles: &'a Candles,
        source: &'a str,
    },
    Slice(&'a [f64]),
}

#[derive(Debug, Clone)]
pub struct KamaOutput {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct KamaParams {
    pub period: Option<usize>,
    pub n_fast: Option<usize>,
    pub n_slow: Option<usize>,
}

impl Default for KamaParams {
    fn default() -> Self {
        KamaParams {
            period: Some(30),
            n_fast: Some(2),
            n_slow: Some(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KamaInput<'a> {
    pub data: KamaData<'a>,
    pub params: KamaParams,
}

impl<'a> KamaInput<'a> {
    pub fn from_candles(candles: &'a Candles, source: &'a str, params: KamaParams) -> Self {
        Self {
            data: KamaData::Candles { candles, source },
            params,
        }
    }

    pub fn from_slice(slice: &'a [f64], params: KamaParams) -> Self {
        Self {
            data: KamaData::Slice(slice),
            params,
        }
    }

    pub fn with_default_candles(candles: &'a Candles) -> Self {
        Self {
            data: KamaData::Candles {
                candles,
                source: "close",
            },
            params: KamaParams::default(),
        }
    }

    fn get_period(&self) -> usize {
        self.params.period.unwrap_or(30)
    }

    fn get_n_fast(&self) -> usize {
        self.params.n_fast.unwrap_or(2)
    }

    fn get_n_slow(&self) -> usize {
        self.params.n_slow.unwrap_or(30)
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KamaError {
    #[error("No data provided for KAMA.")]
    NoData,

    #[error("Invalid period: period = {period}, data length = {data_len}")]
    InvalidPeriod { period: usize, data_len: usize },

    #[error(
        "Invalid smoothing bounds: n_fast = {n_fast}, n_slow = {n_slow}, data length = {data_len}"
    )]
    InvalidBounds {
        n_fast: usize,
        n_slow: usize,
        data_len: usize,
    },
}

/// Kaufman adaptive moving average. Warm-up indices (`i < period`) carry the
/// rolling mean; from `i = period` on, the efficiency ratio of the trailing
/// window scales the smoothing constant between the fast and slow bounds
/// (the smaller bound is always the fast one).
///
/// A flat window makes the ratio 0/0; the NaN is propagated, not guarded.
#[inline]
pub fn kama_into_slice(
    data: &[f64],
    out: &mut [f64],
    period: usize,
    n_fast: usize,
    n_slow: usize,
) -> MaStatus {
    let len = data.len();
    if out.len() != len || period > len || n_fast > len || n_slow > len {
        return MaStatus::Skipped;
    }

    let (n_fast, n_slow) = if n_fast > n_slow {
        (n_slow, n_fast)
    } else {
        (n_fast, n_slow)
    };
    let sc_fast = 2.0 / (n_fast as f64 + 1.0);
    let sc_slow = 2.0 / (n_slow as f64 + 1.0);

    // One running-sum pass covers the warm-up region; the steady-state loop
    // below overwrites the rest.
    sma_into_slice(data, out, period);

    for i in period..len {
        let mut denominator = 0.0;
        for j in 0..period {
            denominator += (data[i - j] - data[i - j - 1]).abs();
        }
        let change = (data[i] - data[i - period]).abs();
        let er = change / denominator;
        let sc = (er * (sc_fast - sc_slow) + sc_slow).powi(2);

        // i == 0 only when period == 0; the 0/0 ratio above already forces
        // NaN there.
        let prev = if i == 0 { f64::NAN } else { out[i - 1] };
        out[i] = prev + sc * (data[i] - prev);
    }
    MaStatus::Computed
}

#[inline]
pub fn kama(input: &KamaInput) -> Result<KamaOutput, KamaError> {
    let data: &[f64] = match &input.data {
        KamaData::Candles { candles, source } => source_type(candles, source),
        KamaData::Slice(slice) => slice,
    };

    let len = data.len();
    if len == 0 {
        return Err(KamaError::NoData);
    }

    let period = input.get_period();
    if period == 0 || period > len {
        return Err(KamaError::InvalidPeriod {
            period,
            data_len: len,
        });
    }

    let n_fast = input.get_n_fast();
    let n_slow = input.get_n_slow();
    if n_fast > len || n_slow > len {
        return Err(KamaError::InvalidBounds {
            n_fast,
            n_slow,
            data_len: len,
        });
    }

    let mut values = vec![f64::NAN; len];
    kama_into_slice(data, &mut values, period, n_fast, n_slow);
    Ok(KamaOutput { values })
}
