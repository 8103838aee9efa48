pub mod moving_averages;

pub use moving_averages::*;
