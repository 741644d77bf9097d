use contracts::dashboards::d100_financial_report::{ChartData, RevenueLine};
use contracts::enums::ReportType;

use super::period::Bucket;

/// Ряд графика по интервалам периода.
///
/// Расходы не привязаны ко времени, поэтому распределяются по интервалам
/// пропорционально выручке интервала. При нулевой выручке за период расходы
/// на график не попадают.
pub fn build_chart(
    report_type: ReportType,
    buckets: &[Bucket],
    lines: &[RevenueLine],
    total_revenue: i64,
    total_expenses: f64,
) -> ChartData {
    let mut chart = ChartData {
        labels: Vec::with_capacity(buckets.len()),
        values: Vec::with_capacity(buckets.len()),
    };

    for bucket in buckets {
        let bucket_revenue: f64 = lines
            .iter()
            .filter(|line| bucket.contains(line.date))
            .map(|line| line.price as f64)
            .sum();

        let bucket_expenses = if total_revenue > 0 {
            total_expenses * (bucket_revenue / total_revenue as f64)
        } else {
            0.0
        };

        let value = match report_type {
            ReportType::Revenue => bucket_revenue,
            ReportType::Expenses => bucket_expenses,
            ReportType::Profit => bucket_revenue - bucket_expenses,
        };

        chart.labels.push(bucket.label.clone());
        chart.values.push(value);
    }

    chart
}
