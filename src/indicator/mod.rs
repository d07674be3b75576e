pub mod mindicador;
pub mod source;
pub mod types;

pub use mindicador::MindicadorClient;
pub use source::{IndicatorError, IndicatorSource};
pub use types::{Indicator, IndicatorReading, IndicatorsResponse};
