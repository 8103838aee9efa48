use crate::indicators::moving_averages::esma::esma_into_slice;
use crate::utilities::enums::MaStatus;
use std::error::Error;

#[derive(Debug, Clone)]
pub struct EmaParams {
    pub period: Option<usize>,
}

impl Default for EmaParams {
    fn default() -> Self {
        EmaParams { period: Some(9) }
    }
}

#[derive(Debug, Clone)]
pub struct EmaInput<'a> {
    pub data: &'a [f64],
    pub params: EmaParams,
}

impl<'a> EmaInput<'a> {
    pub fn new(data: &'a [f64], params: EmaParams) -> Self {
        EmaInput { data, params }
    }

    pub fn with_default_params(data: &'a [f64]) -> Self {
        EmaInput {
            data,
            params: EmaParams::default(),
        }
    }

    fn get_period(&self) -> usize {
        self.params
            .period
            .unwrap_or_else(|| EmaParams::default().period.unwrap())
    }
}

#[derive(Debug, Clone)]
pub struct EmaOutput {
    pub values: Vec<f64>,
}

/// Exponential moving average: recursive smoothing with
/// `alpha = 2 / (period + 1)`.
#[inline]
pub fn ema_into_slice(data: &[f64], out: &mut [f64], period: usize) -> MaStatus {
    esma_into_slice(data, out, period, 2.0 / (period as f64 + 1.0))
}

#[inline]
pub fn calculate_ema(input: &EmaInput) -> Result<EmaOutput, Box<dyn Error>> {
    let data = input.data;
    let period = input.get_period();

    if period == 0 || period > data.len() {
        return Err("Invalid period specified for EMA calculation.".into());
    }

    let mut values = vec![f64::NAN; data.len()];
    ema_into_slice(data, &mut values, period);
    Ok(EmaOutput { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::data_loader::read_candles_from_csv;

    #[test]
    fn test_ema_alpha_derivation() {
        // period 3 gives alpha exactly 0.5
        let data = [2.0, 4.0, 6.0];
        let input = EmaInput::new(&data, EmaParams { period: Some(3) });
        let result = calculate_ema(&input).expect("Failed to calculate EMA");
        let expected = [2.0, 3.0, 4.5];
        for (i, (&value, &exp)) in result.values.iter().zip(expected.iter()).enumerate() {
            assert!(
                (value - exp).abs() < 1e-12,
                "EMA mismatch at index {}: expected {}, got {}",
                i,
                exp,
                value
            );
        }
    }

    #[test]
    fn test_ema_long_period_hugs_first_sample() {
        // As the period grows, alpha shrinks and the output flattens toward
        // data[0].
        let data: Vec<f64> = (0..200).map(|i| 50.0 + (i as f64 * 0.7).sin()).collect();
        let input = EmaInput::new(&data, EmaParams { period: Some(200) });
        let result = calculate_ema(&input).expect("Failed to calculate EMA");
        for &value in result.values.iter() {
            assert!((value - data[0]).abs() < 2.0);
        }
    }

    #[test]
    fn test_ema_invalid_period() {
        let data = [1.0, 2.0, 3.0];
        let input = EmaInput::new(&data, EmaParams { period: Some(4) });
        assert!(calculate_ema(&input).is_err());
    }

    #[test]
    fn test_ema_candles_length() {
        let file_path = "src/data/ohlcv_sample.csv";
        let candles = read_candles_from_csv(file_path).expect("Failed to load test candles");
        let input = EmaInput::with_default_params(&candles.close);
        let result = calculate_ema(&input).expect("Failed to calculate EMA");
        assert_eq!(result.values.len(), candles.close.len());
        assert!(result.values.iter().all(|v| v.is_finite()));
    }
}
