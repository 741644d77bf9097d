use serde::{Deserialize, Serialize};

/// Показатель, выводимый на графике
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Revenue,
    Expenses,
    Profit,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Revenue => "revenue",
            ReportType::Expenses => "expenses",
            ReportType::Profit => "profit",
        }
    }

    /// Разбор параметра запроса.
    ///
    /// Без параметра строится выручка, а нераспознанное значение трактуется как прибыль.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("revenue") => ReportType::Revenue,
            Some("expenses") => ReportType::Expenses,
            Some(_) => ReportType::Profit,
        }
    }
}
