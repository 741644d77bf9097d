use serde::{Deserialize, Serialize};

/// Расходный материал
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    pub id: i32,
    pub name: Option<String>,
    /// Цена за единицу измерения
    pub price: Option<i64>,
}

impl Supply {
    pub fn price_or_zero(&self) -> i64 {
        self.price.unwrap_or(0)
    }

    pub fn name_or_empty(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}
