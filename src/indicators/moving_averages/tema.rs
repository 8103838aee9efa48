use crate::indicators::moving_averages::ema::ema_into_slice;
use crate::utilities::data_loader::{source_type, Candles};
use crate::utilities::enums::MaStatus;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum TemaData<'a> {
    Candles {
        candles: &'a Candles,
        source: &'a str,
    },
    Slice(&'a [f64]),
}

#[derive(Debug, Clone)]
pub struct TemaOutput {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct TemaParams {
    pub period: Option<usize>,
}

impl Default for TemaParams {
    fn default() -> Self {
        Self { period: Some(9) }
    }
}

#[derive(Debug, Clone)]
pub struct TemaInput<'a> {
    pub data: TemaData<'a>,
    pub params: TemaParams,
}

impl<'a> TemaInput<'a> {
    pub fn from_candles(candles: &'a Candles, source: &'a str, params: TemaParams) -> Self {
        Self {
            data: TemaData::Candles { candles, source },
            params,
        }
    }

    pub fn from_slice(slice: &'a [f64], params: TemaParams) -> Self {
        Self {
            data: TemaData::Slice(slice),
            params,
        }
    }

    pub fn with_default_candles(candles: &'a Candles) -> Self {
        Self {
            data: TemaData::Candles {
                candles,
                source: "close",
            },
            params: TemaParams::default(),
        }
    }

    pub fn get_period(&self) -> usize {
        self.params
            .period
            .unwrap_or_else(|| TemaParams::default().period.unwrap())
    }
}

#[derive(Debug, Error)]
pub enum TemaError {
    #[error("Empty data provided for TEMA.")]
    EmptyData,
    #[error("Invalid period: period = {period}, data length = {data_len}")]
    InvalidPeriod { period: usize, data_len: usize },
}

/// Triple exponential moving average: three chained EMA passes combined as
/// `3 * ema_1 - 3 * ema_2 + ema_3`.
#[inline]
pub fn tema_into_slice(data: &[f64], out: &mut [f64], period: usize) -> MaStatus {
    let len = data.len();
    if out.len() != len || period > len {
        return MaStatus::Skipped;
    }

    let mut ema_1 = vec![f64::NAN; len];
    let mut ema_2 = vec![f64::NAN; len];
    let mut ema_3 = vec![f64::NAN; len];
    ema_into_slice(data, &mut ema_1, period);
    ema_into_slice(&ema_1, &mut ema_2, period);
    ema_into_slice(&ema_2, &mut ema_3, period);

    for i in 0..len {
        out[i] = 3.0 * ema_1[i] - 3.0 * ema_2[i] + ema_3[i];
    }
    MaStatus::Computed
}

#[inline]
pub fn tema(input: &TemaInput) -> Result<TemaOutput, TemaError> {
    let data: &[f64] = match &input.data {
        TemaData::Candles { candles, source } => source_type(candles, source),
        TemaData::Slice(slice) => slice,
    };

    if data.is_empty() {
        return Err(TemaError::EmptyData);
    }

    let period = input.get_period();
    if period == 0 || period > data.len() {
        return Err(TemaError::InvalidPeriod {
            period,
            data_len: data.len(),
        });
    }

    let mut values = vec![f64::NAN; data.len()];
    tema_into_slice(data, &mut values, period);
    Ok(TemaOutput { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::data_loader::read_candles_from_csv;

    #[test]
    fn test_tema_period_one_is_identity() {
        // alpha = 1 turns every pass into a copy, and 3x - 3x + x = x.
        let data = [5.0, -12.0, 3.75, 88.0];
        let mut out = [f64::NAN; 4];
        assert!(tema_into_slice(&data, &mut out, 1).is_computed());
        for (a, b) in out.iter().zip(data.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_tema_chained_passes() {
        // TEMA must differ from a single EMA on curved data; the chained
        // second pass is the difference from DEMA's collapsed form.
        let data: Vec<f64> = (0..32).map(|i| (i as f64).powi(2) * 0.1).collect();
        let period = 4;
        let mut tema_out = vec![f64::NAN; data.len()];
        tema_into_slice(&data, &mut tema_out, period);

        let mut ema_1 = vec![f64::NAN; data.len()];
        ema_into_slice(&data, &mut ema_1, period);

        let diverged = tema_out
            .iter()
            .zip(ema_1.iter())
            .any(|(a, b)| (a - b).abs() > 1e-9);
        assert!(diverged, "TEMA should not collapse to a single EMA");
    }

    #[test]
    fn test_tema_deterministic_repeat_calls() {
        let data: Vec<f64> = (0..64)
            .map(|i| 10.0 + (i as f64 * 0.8).sin() * 2.5)
            .collect();
        let mut out_1 = vec![f64::NAN; data.len()];
        let mut out_2 = vec![f64::NAN; data.len()];
        tema_into_slice(&data, &mut out_1, 6);
        tema_into_slice(&data, &mut out_2, 6);
        for (a, b) in out_1.iter().zip(out_2.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_tema_guard_leaves_buffer_untouched() {
        let data = [1.0, 2.0, 3.0];
        let sentinel = [7.0; 3];
        let mut out = sentinel;
        assert!(tema_into_slice(&data, &mut out, 4).is_skipped());
        for (a, b) in out.iter().zip(sentinel.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_tema_candles_length() {
        let file_path = "src/data/ohlcv_sample.csv";
        let candles = read_candles_from_csv(file_path).expect("Failed to load test candles");
        let result = tema(&TemaInput::with_default_candles(&candles)).expect("Failed TEMA");
        assert_eq!(result.values.len(), candles.close.len());
        assert!(result.values.iter().all(|v| v.is_finite()));
    }
}
