use std::error::Error;

use crate::indicators::moving_averages::dema::{dema, DemaInput, DemaParams};
use crate::indicators::moving_averages::ema::{calculate_ema, EmaInput, EmaParams};
use crate::indicators::moving_averages::esma::{esma, EsmaInput, EsmaParams};
use crate::indicators::moving_averages::frama::{frama, FramaInput, FramaParams};
use crate::indicators::moving_averages::hma::{hma, HmaInput, HmaParams};
use crate::indicators::moving_averages::kama::{kama, KamaInput, KamaParams};
use crate::indicators::moving_averages::rma::{rma, RmaInput, RmaParams};
use crate::indicators::moving_averages::sma::{sma, SmaInput, SmaParams};
use crate::indicators::moving_averages::tema::{tema, TemaInput, TemaParams};
use crate::indicators::moving_averages::wma::{wma, WmaInput, WmaParams};
use crate::utilities::data_loader::{source_type, Candles};

#[derive(Debug, Clone)]
pub enum MaData<'a> {
    Candles {
        candles: &'a Candles,
        source: &'a str,
    },
    Slice(&'a [f64]),
}

impl<'a> MaData<'a> {
    fn series(&self) -> &'a [f64] {
        match self {
            MaData::Candles { candles, source } => source_type(*candles, source),
            MaData::Slice(slice) => *slice,
        }
    }
}

/// Name-keyed moving average dispatch. Extra parameters (the ESMA decay
/// constant, the KAMA bounds) take their defaults; FRAMA needs candle data
/// for its high and low series.
pub fn ma(ma_type: &str, data: MaData, period: usize) -> Result<Vec<f64>, Box<dyn Error>> {
    match ma_type.to_lowercase().as_str() {
        "sma" => Ok(sma(&SmaInput::from_slice(
            data.series(),
            SmaParams {
                period: Some(period),
            },
        ))?
        .values),
        "esma" => Ok(esma(&EsmaInput::from_slice(
            data.series(),
            EsmaParams {
                period: Some(period),
                ..Default::default()
            },
        ))?
        .values),
        "ema" => Ok(calculate_ema(&EmaInput::new(
            data.series(),
            EmaParams {
                period: Some(period),
            },
        ))?
        .values),
        "wma" => Ok(wma(&WmaInput::from_slice(
            data.series(),
            WmaParams {
                period: Some(period),
            },
        ))?
        .values),
        "hma" => Ok(hma(&HmaInput::from_slice(
            data.series(),
            HmaParams {
                period: Some(period),
            },
        ))?
        .values),
        "rma" => Ok(rma(&RmaInput::from_slice(
            data.series(),
            RmaParams {
                period: Some(period),
            },
        ))?
        .values),
        "dema" => Ok(dema(&DemaInput::from_slice(
            data.series(),
            DemaParams {
                period: Some(period),
            },
        ))?
        .values),
        "tema" => Ok(tema(&TemaInput::from_slice(
            data.series(),
            TemaParams {
                period: Some(period),
            },
        ))?
        .values),
        "kama" => Ok(kama(&KamaInput::from_slice(
            data.series(),
            KamaParams {
                period: Some(period),
                ..Default::default()
            },
        ))?
        .values),
        "frama" => match &data {
            MaData::Candles { candles, .. } => Ok(frama(&FramaInput::from_candles(
                candles,
                FramaParams {
                    period: Some(period),
                },
            ))?
            .values),
            MaData::Slice(_) => {
                Err("FRAMA requires candle data for its high and low series".into())
            }
        },
        other => Err(format!("Unknown moving average type: {}", other).into()),
    }
}
