use contracts::dashboards::d100_financial_report::{
    FinancialReportQuery, FinancialReportResponse, ReportSummary,
};
use contracts::enums::{ReportPeriod, ReportType};

use super::chart::build_chart;
use super::error::ReportError;
use super::expenses::aggregate_expenses;
use super::period::{parse_report_date, resolve_period};
use super::revenue::aggregate_revenue;
use super::store::ReportStore;

/// Построение финансового отчёта: выручка, расходы и прибыль за период
pub async fn build_report<S>(
    store: &S,
    query: &FinancialReportQuery,
) -> Result<FinancialReportResponse, ReportError>
where
    S: ReportStore + ?Sized,
{
    let date = parse_report_date(query.date.as_deref())?;
    let period = ReportPeriod::from_param(query.period.as_deref());
    let report_type = ReportType::from_param(query.report_type.as_deref());
    let resolved = resolve_period(date, period);

    tracing::info!(
        "D100 Report: {} period={} type={} [{} .. {}]",
        date,
        period.as_str(),
        report_type.as_str(),
        resolved.start,
        resolved.end
    );

    let record_rows = store
        .records_in_range(resolved.start, resolved.end)
        .await
        .map_err(ReportError::StoreUnavailable)?;
    let revenue = aggregate_revenue(&record_rows, resolved.start, resolved.end);
    for stats in revenue.service_stats.values() {
        tracing::debug!(
            "D100 Report: service #{} '{}' performed {} times, revenue {}",
            stats.service.id,
            stats.service.name_or_empty(),
            stats.count,
            stats.total_revenue
        );
    }

    let link_rows = store
        .service_supply_links()
        .await
        .map_err(ReportError::StoreUnavailable)?;
    let expenses = aggregate_expenses(&link_rows, &revenue.service_stats);

    if revenue.total_revenue <= 0 && expenses.total_expenses != 0.0 {
        tracing::warn!(
            "D100 Report: expenses {} without revenue are not shown on the chart",
            expenses.total_expenses
        );
    }

    let chart_data = build_chart(
        report_type,
        &resolved.buckets,
        &revenue.lines,
        revenue.total_revenue,
        expenses.total_expenses,
    );

    tracing::info!(
        "D100 Report: {} records, {} expense lines, {} chart points",
        revenue.lines.len(),
        expenses.lines.len(),
        chart_data.values.len()
    );

    Ok(FinancialReportResponse {
        summary: ReportSummary {
            revenue: revenue.total_revenue,
            expenses: expenses.total_expenses,
            profit: revenue.total_revenue as f64 - expenses.total_expenses,
        },
        records: revenue.lines,
        expenses: expenses.lines,
        chart_data,
    })
}
