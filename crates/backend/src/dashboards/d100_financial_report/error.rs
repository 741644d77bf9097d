use axum::http::StatusCode;
use thiserror::Error;

/// Ошибки построения финансового отчёта
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Дата не указана")]
    MissingParameter,

    #[error("Неверный формат даты: {0}")]
    InvalidDate(String),

    #[error("Ошибка чтения данных: {0}")]
    StoreUnavailable(anyhow::Error),
}

impl ReportError {
    /// HTTP-статус для ответа клиенту
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReportError::MissingParameter | ReportError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            ReportError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Сообщение для клиента. Подробности ошибок хранилища остаются в логе.
    pub fn client_message(&self) -> String {
        match self {
            ReportError::StoreUnavailable(_) => "Ошибка чтения данных".to_string(),
            other => other.to_string(),
        }
    }
}
