use serde::{Deserialize, Serialize};

/// Гранулярность периода отчёта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Day,
    Month,
    Year,
}

impl ReportPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Day => "day",
            ReportPeriod::Month => "month",
            ReportPeriod::Year => "year",
        }
    }

    /// Разбор параметра запроса. Отсутствующее и неизвестное значение дают `Day`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("month") => ReportPeriod::Month,
            Some("year") => ReportPeriod::Year,
            _ => ReportPeriod::Day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param() {
        assert_eq!(ReportPeriod::from_param(None), ReportPeriod::Day);
        assert_eq!(ReportPeriod::from_param(Some("day")), ReportPeriod::Day);
        assert_eq!(ReportPeriod::from_param(Some("month")), ReportPeriod::Month);
        assert_eq!(ReportPeriod::from_param(Some("year")), ReportPeriod::Year);
        assert_eq!(ReportPeriod::from_param(Some("week")), ReportPeriod::Day);
    }
}
