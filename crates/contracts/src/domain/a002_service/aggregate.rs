use serde::{Deserialize, Serialize};

/// Услуга, оказываемая студией
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i32,
    pub name: Option<String>,
    /// Цена в целых единицах валюты
    pub price: Option<i64>,
}

impl Service {
    pub fn price_or_zero(&self) -> i64 {
        self.price.unwrap_or(0)
    }

    pub fn name_or_empty(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}
