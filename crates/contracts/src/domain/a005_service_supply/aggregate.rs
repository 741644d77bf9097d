use serde::{Deserialize, Serialize};

/// Единица измерения по умолчанию
pub const DEFAULT_UNITS: &str = "pcs";

/// Норма расхода материала на одно оказание услуги
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSupply {
    pub id: i32,
    pub service_id: i32,
    pub supply_id: i32,
    pub material_consumption: Option<f64>,
    pub units_measurement: Option<String>,
}

impl ServiceSupply {
    pub fn consumption_or_zero(&self) -> f64 {
        self.material_consumption.unwrap_or(0.0)
    }

    pub fn units_or_default(&self) -> String {
        self.units_measurement
            .clone()
            .unwrap_or_else(|| DEFAULT_UNITS.to_string())
    }
}
