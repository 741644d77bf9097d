use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Параметры запроса финансового отчёта
///
/// GET /api/d100/financial_report?date=2024-03-15&period=day&type=revenue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialReportQuery {
    /// Опорная дата в формате "YYYY-MM-DD" (обязательна)
    pub date: Option<String>,
    /// "day" | "month" | "year", по умолчанию "day"
    pub period: Option<String>,
    /// "revenue" | "expenses" | "profit", по умолчанию "revenue"
    #[serde(rename = "type")]
    pub report_type: Option<String>,
}

/// Ответ финансового отчёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReportResponse {
    pub summary: ReportSummary,
    /// Оказанные за период услуги
    pub records: Vec<RevenueLine>,
    /// Расход материалов по услугам
    pub expenses: Vec<ExpenseLine>,
    #[serde(rename = "chartData")]
    pub chart_data: ChartData,
}

/// Итоги за период
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub revenue: i64,
    pub expenses: f64,
    pub profit: f64,
}

/// Строка выручки: одна запись клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueLine {
    pub date: NaiveDateTime,
    pub service_name: String,
    pub service_id: i32,
    pub client_name: String,
    pub price: i64,
}

/// Строка расходов: один материал одной услуги
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub service_name: String,
    pub supply_name: String,
    pub consumption_per_service: f64,
    pub total_consumption: f64,
    pub units: String,
    pub cost_per_service: f64,
    pub total_cost: f64,
    pub service_count: u32,
}

/// Ряд для графика; `labels` и `values` одной длины
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Тело ответа при ошибке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
