use contracts::dashboards::d100_financial_report::ExpenseLine;
use std::collections::HashMap;

use super::revenue::ServiceStats;
use super::store::LinkRow;

#[derive(Debug, Clone, Default)]
pub struct ExpenseAggregate {
    pub total_expenses: f64,
    pub lines: Vec<ExpenseLine>,
}

/// Расход материалов за период.
///
/// Для каждой нормы расхода стоимость на одну услугу умножается на число
/// оказаний этой услуги в периоде. В детализацию попадают только услуги,
/// которые оказывались хотя бы раз.
pub fn aggregate_expenses(
    links: &[LinkRow],
    service_stats: &HashMap<i32, ServiceStats>,
) -> ExpenseAggregate {
    let mut aggregate = ExpenseAggregate::default();

    for row in links {
        let service_count = service_stats
            .get(&row.service.id)
            .map(|s| s.count)
            .unwrap_or(0);

        let consumption = row.link.consumption_or_zero();
        let cost_per_service = row.supply.price_or_zero() as f64 * consumption;
        let total_cost = cost_per_service * f64::from(service_count);
        aggregate.total_expenses += total_cost;

        if service_count == 0 {
            continue;
        }

        aggregate.lines.push(ExpenseLine {
            service_name: row.service.name_or_empty(),
            supply_name: row.supply.name_or_empty(),
            consumption_per_service: consumption,
            total_consumption: consumption * f64::from(service_count),
            units: row.link.units_or_default(),
            cost_per_service,
            total_cost,
            service_count,
        });
    }

    aggregate
}
