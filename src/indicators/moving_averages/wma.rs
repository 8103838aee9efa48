use crate::utilities::data_loader::{source_type, Candles};
use crate::utilities::enums::MaStatus;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum WmaData<'a> {
    Candles {
        candles: &'a Candles,
        source: &'a str,
    },
    Slice(&'a [f64]),
}

#[derive(Debug, Clone)]
pub struct WmaOutput {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct WmaParams {
    pub period: Option<usize>,
}

impl Default for WmaParams {
    fn default() -> Self {
        Self { period: Some(30) }
    }
}

#[derive(Debug, Clone)]
pub struct WmaInput<'a> {
    pub data: WmaData<'a>,
    pub params: WmaParams,
}

impl<'a> WmaInput<'a> {
    pub fn from_candles(candles: &'a Candles, source: &'a str, params: WmaParams) -> Self {
        Self {
            data: WmaData::Candles { candles, source },
            params,
        }
    }

    pub fn from_slice(slice: &'a [f64], params: WmaParams) -> Self {
        Self {
            data: WmaData::Slice(slice),
            params,
        }
    }

    pub fn with_default_candles(candles: &'a Candles) -> Self {
        Self {
            data: WmaData::Candles {
                candles,
                source: "close",
            },
            params: WmaParams::default(),
        }
    }

    pub fn get_period(&self) -> usize {
        self.params
            .period
            .unwrap_or_else(|| WmaParams::default().period.unwrap())
    }
}

#[derive(Debug, Error)]
pub enum WmaError {
    #[error("Empty data provided for WMA.")]
    EmptyData,
    #[error("Invalid period: period = {period}, data length = {data_len}")]
    InvalidPeriod { period: usize, data_len: usize },
}

/// Linearly weighted mean: the newest sample in the window carries weight
/// `period`, the oldest weight 1. During warm-up both the window and the
/// weight set shrink to the samples available, and the divisor is the sum of
/// the weights actually used.
///
/// Each index rescans its full window rather than reusing the previous sum.
#[inline]
pub fn wma_into_slice(data: &[f64], out: &mut [f64], period: usize) -> MaStatus {
    let len = data.len();
    if out.len() != len || period > len {
        return MaStatus::Skipped;
    }

    let warm_end = period.saturating_sub(1);
    for i in 0..warm_end {
        let cur_period = i + 1;
        let mut sum = 0.0;
        let mut weights_sum = 0.0;
        for j in 0..cur_period {
            let weight = (j + 1) as f64;
            sum += weight * data[j];
            weights_sum += weight;
        }
        out[i] = sum / weights_sum;
    }

    let weights_sum = period as f64 * (period as f64 + 1.0) / 2.0;
    for i in warm_end..len {
        let mut sum = 0.0;
        for j in 0..period {
            sum += (j + 1) as f64 * data[i + 1 - period + j];
        }
        out[i] = sum / weights_sum;
    }
    MaStatus::Computed
}

#[inline]
pub fn wma(input: &WmaInput) -> Result<WmaOutput, WmaError> {
    let data: &[f64] = match &input.data {
        WmaData::Candles { candles, source } => source_type(candles, source),
        WmaData::Slice(slice) => slice,
    };

    if data.is_empty() {
        return Err(WmaError::EmptyData);
    }

    let period = input.get_period();
    if period == 0 || period > data.len() {
        return Err(WmaError::InvalidPeriod {
            period,
            data_len: data.len(),
        });
    }

    let mut values = vec![f64::NAN; data.len()];
    wma_into_slice(data, &mut values, period);
    Ok(WmaOutput { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::data_loader::read_candles_from_csv;

    #[test]
    fn test_wma_small_series() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut out = [f64::NAN; 5];
        assert!(wma_into_slice(&data, &mut out, 3).is_computed());

        // warm-up uses the weights 1..=i+1 over the prefix
        let expected = [
            1.0,
            (1.0 * 1.0 + 2.0 * 2.0) / 3.0,
            14.0 / 6.0,
            20.0 / 6.0,
            26.0 / 6.0,
        ];
        for (i, (&value, &exp)) in out.iter().zip(expected.iter()).enumerate() {
            assert!(
                (value - exp).abs() < 1e-10,
                "WMA mismatch at index {}: expected {}, got {}",
                i,
                exp,
                value
            );
        }
    }

    #[test]
    fn test_wma_period_one_is_identity() {
        let data = [9.0, -2.5, 0.25, 7.75];
        let mut out = [f64::NAN; 4];
        assert!(wma_into_slice(&data, &mut out, 1).is_computed());
        for (a, b) in out.iter().zip(data.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_wma_newest_sample_weighs_most() {
        // A jump in the newest sample moves the WMA more than the same jump
        // in the oldest sample of the window.
        let base = [10.0, 10.0, 10.0, 10.0];
        let newest_jump = [10.0, 10.0, 10.0, 11.0];
        let oldest_jump = [11.0, 10.0, 10.0, 10.0];

        let mut out_base = [f64::NAN; 4];
        let mut out_new = [f64::NAN; 4];
        let mut out_old = [f64::NAN; 4];
        wma_into_slice(&base, &mut out_base, 4);
        wma_into_slice(&newest_jump, &mut out_new, 4);
        wma_into_slice(&oldest_jump, &mut out_old, 4);

        let move_new = (out_new[3] - out_base[3]).abs();
        let move_old = (out_old[3] - out_base[3]).abs();
        assert!(move_new > move_old);
    }

    #[test]
    fn test_wma_zero_period_propagates_nan() {
        let data = [1.0, 2.0, 3.0];
        let mut out = [0.0; 3];
        assert!(wma_into_slice(&data, &mut out, 0).is_computed());
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_wma_guard_leaves_buffer_untouched() {
        let data = [1.0, 2.0, 3.0];
        let sentinel = [0.125; 3];
        let mut out = sentinel;
        assert!(wma_into_slice(&data, &mut out, 4).is_skipped());
        for (a, b) in out.iter().zip(sentinel.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_wma_candles_length() {
        let file_path = "src/data/ohlcv_sample.csv";
        let candles = read_candles_from_csv(file_path).expect("Failed to load test candles");
        let result = wma(&WmaInput::with_default_candles(&candles)).expect("Failed WMA");
        assert_eq!(result.values.len(), candles.close.len());
        assert!(result.values.iter().all(|v| v.is_finite()));
    }
}
