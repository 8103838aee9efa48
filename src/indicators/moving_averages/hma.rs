use crate::indicators::moving_averages::wma::wma_into_slice;
use crate::utilities::data_loader::{source_type, Candles};
use crate::utilities::enums::MaStatus;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum HmaData<'a> {
    Candles {
        candles: &'a Candles,
        source: &'a str,
    },
    Slice(&'a [f64]),
}

#[derive(Debug, Clone)]
pub struct HmaOutput {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct HmaParams {
    pub period: Option<usize>,
}

impl Default for HmaParams {
    fn default() -> Self {
        Self { period: Some(5) }
    }
}

#[derive(Debug, Clone)]
pub struct HmaInput<'a> {
    pub data: HmaData<'a>,
    pub params: HmaParams,
}

impl<'a> HmaInput<'a> {
    pub fn from_candles(candles: &'a Candles, source: &'a str, params: HmaParams) -> Self {
        Self {
            data: HmaData::Candles { candles, source },
            params,
        }
    }

    pub fn from_slice(slice: &'a [f64], params: HmaParams) -> Self {
        Self {
            data: HmaData::Slice(slice),
            params,
        }
    }

    pub fn with_default_candles(candles: &'a Candles) -> Self {
        Self {
            data: HmaData::Candles {
                candles,
                source: "close",
            },
            params: HmaParams::default(),
        }
    }

    pub fn get_period(&self) -> usize {
        self.params
            .period
            .unwrap_or_else(|| HmaParams::default().period.unwrap())
    }
}

#[derive(Debug, Error)]
pub enum HmaError {
    #[error("Empty data provided for HMA.")]
    EmptyData,
    #[error("Invalid period: period = {period}, data length = {data_len}")]
    InvalidPeriod { period: usize, data_len: usize },
}

/// Hull moving average:
/// `WMA(2 * WMA(data, period/2) - WMA(data, period), floor(sqrt(period)))`.
///
/// The sub-period passes rely on the WMA guard alone; warm-up behavior is
/// inherited from the final pass over the combined series.
#[inline]
pub fn hma_into_slice(data: &[f64], out: &mut [f64], period: usize) -> MaStatus {
    let len = data.len();
    if out.len() != len || period > len {
        return MaStatus::Skipped;
    }

    let mut wma_1 = vec![f64::NAN; len];
    let mut wma_2 = vec![f64::NAN; len];
    wma_into_slice(data, &mut wma_1, period / 2);
    wma_into_slice(data, &mut wma_2, period);

    let mut raw = vec![f64::NAN; len];
    for i in 0..len {
        raw[i] = 2.0 * wma_1[i] - wma_2[i];
    }

    let sqrt_period = (period as f64).sqrt().floor() as usize;
    wma_into_slice(&raw, out, sqrt_period)
}

#[inline]
pub fn hma(input: &HmaInput) -> Result<HmaOutput, HmaError> {
    let data: &[f64] = match &input.data {
        HmaData::Candles { candles, source } => source_type(candles, source),
        HmaData::Slice(slice) => slice,
    };

    if data.is_empty() {
        return Err(HmaError::EmptyData);
    }

    let period = input.get_period();
    if period == 0 || period > data.len() {
        return Err(HmaError::InvalidPeriod {
            period,
            data_len: data.len(),
        });
    }

    let mut values = vec![f64::NAN; data.len()];
    hma_into_slice(data, &mut values, period);
    Ok(HmaOutput { values })
}
