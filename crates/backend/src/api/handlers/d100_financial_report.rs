use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d100_financial_report::{
    ErrorResponse, FinancialReportQuery, FinancialReportResponse,
};

use crate::dashboards::d100_financial_report::error::ReportError;
use crate::dashboards::d100_financial_report::repository::SqlReportStore;
use crate::dashboards::d100_financial_report::service;
use crate::dashboards::d100_financial_report::store::ReportStore;
use crate::shared::data::db::get_connection;

type ReportResult = Result<Json<FinancialReportResponse>, (StatusCode, Json<ErrorResponse>)>;

/// GET /api/d100/financial_report?date=2024-03-15&period=day&type=revenue
pub async fn get_financial_report(Query(query): Query<FinancialReportQuery>) -> ReportResult {
    let db = match get_connection() {
        Ok(db) => db,
        Err(e) => return Err(error_response(ReportError::StoreUnavailable(e))),
    };
    respond(&SqlReportStore::new(db), &query).await
}

async fn respond<S: ReportStore + ?Sized>(store: &S, query: &FinancialReportQuery) -> ReportResult {
    match service::build_report(store, query).await {
        Ok(report) => {
            tracing::info!(
                "D100 Report: revenue={} expenses={} profit={}",
                report.summary.revenue,
                report.summary.expenses,
                report.summary.profit
            );
            Ok(Json(report))
        }
        Err(e) => Err(error_response(e)),
    }
}

fn error_response(e: ReportError) -> (StatusCode, Json<ErrorResponse>) {
    let status = e.status_code();
    if status.is_server_error() {
        tracing::error!("D100 Report: Failed to build report: {}", e);
    } else {
        tracing::warn!("D100 Report: Rejected request: {}", e);
    }
    (
        status,
        Json(ErrorResponse {
            error: e.client_message(),
        }),
    )
}
