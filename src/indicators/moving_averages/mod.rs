pub mod dema;
pub mod ema;
pub mod esma;
pub mod frama;
pub mod hma;
pub mod kama;
pub mod ma;
pub mod rma;
pub mod sma;
pub mod tema;
pub mod wma;

pub use dema::{dema, dema_into_slice, DemaData, DemaError, DemaInput, DemaOutput, DemaParams};
pub use ema::{calculate_ema, ema_into_slice, EmaInput, EmaOutput, EmaParams};
pub use esma::{esma, esma_into_slice, EsmaData, EsmaError, EsmaInput, EsmaOutput, EsmaParams};
pub use frama::{
    frama, frama_into_slice, FramaData, FramaError, FramaInput, FramaOutput, FramaParams,
};
pub use hma::{hma, hma_into_slice, HmaData, HmaError, HmaInput, HmaOutput, HmaParams};
pub use kama::{kama, kama_into_slice, KamaData, KamaError, KamaInput, KamaOutput, KamaParams};
pub use ma::{ma, MaData};
pub use rma::{rma, rma_into_slice, RmaData, RmaError, RmaInput, RmaOutput, RmaParams};
pub use sma::{sma, sma_into_slice, SmaData, SmaError, SmaInput, SmaOutput, SmaParams};
pub use tema::{tema, tema_into_slice, TemaData, TemaError, TemaInput, TemaOutput, TemaParams};
pub use wma::{wma, wma_into_slice, WmaData, WmaError, WmaInput, WmaOutput, WmaParams};
