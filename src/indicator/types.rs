use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /api`. Only `dolar` is required; every other indicator
/// the endpoint returns (uf, euro, utm, ...) is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IndicatorsResponse {
    pub dolar: Indicator,
}

/// A single economic indicator as published by mindicador.cl.
/// Only `valor` is read; `codigo`, `nombre`, `fecha` and the rest are skipped.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Indicator {
    pub valor: f64,
}

/// The one value the rest of the crate cares about.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IndicatorReading {
    /// Chilean pesos per US dollar.
    pub dollar_value: f64,
    pub fetched_at: DateTime<Utc>,
}

impl IndicatorReading {
    pub fn new(dollar_value: f64) -> Self {
        Self {
            dollar_value,
            fetched_at: Utc::now(),
        }
    }
}

impl From<IndicatorsResponse> for IndicatorReading {
    fn from(response: IndicatorsResponse) -> Self {
        IndicatorReading::new(response.dolar.valor)
    }
}
