use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Запись клиента на услугу (факт оказания услуги)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i32,
    pub customer_id: i32,
    pub service_id: i32,
    /// Записи без даты не попадают ни в один период
    pub date: Option<NaiveDateTime>,
}
