use chrono::NaiveDateTime;
use contracts::dashboards::d100_financial_report::RevenueLine;
use contracts::domain::a002_service::aggregate::Service;
use std::collections::HashMap;

use super::store::RecordRow;

/// Статистика услуги за период
#[derive(Debug, Clone)]
pub struct ServiceStats {
    pub service: Service,
    pub count: u32,
    pub total_revenue: i64,
}

#[derive(Debug, Clone, Default)]
pub struct RevenueAggregate {
    pub total_revenue: i64,
    /// service_id -> статистика
    pub service_stats: HashMap<i32, ServiceStats>,
    /// В порядке выборки из хранилища
    pub lines: Vec<RevenueLine>,
}

/// Выручка по записям, попавшим в `[start, end]`
pub fn aggregate_revenue(
    rows: &[RecordRow],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> RevenueAggregate {
    let mut aggregate = RevenueAggregate::default();

    for row in rows {
        let Some(date) = row.record.date else {
            continue;
        };
        if date < start || date > end {
            continue;
        }

        let price = row.service.price_or_zero();
        aggregate.total_revenue += price;

        let stats = aggregate
            .service_stats
            .entry(row.service.id)
            .or_insert_with(|| ServiceStats {
                service: row.service.clone(),
                count: 0,
                total_revenue: 0,
            });
        stats.count += 1;
        stats.total_revenue += price;

        aggregate.lines.push(RevenueLine {
            date,
            service_name: row.service.name_or_empty(),
            service_id: row.service.id,
            client_name: row.customer.display_name(),
            price,
        });
    }

    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_customer::aggregate::Customer;
    use contracts::domain::a004_record::aggregate::Record;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn row(id: i32, service_id: i32, price: Option<i64>, date: Option<NaiveDateTime>) -> RecordRow {
        RecordRow {
            record: Record {
                id,
                customer_id: 1,
                service_id,
                date,
            },
            service: Service {
                id: service_id,
                name: Some(format!("Услуга {}", service_id)),
                price,
            },
            customer: Customer {
                id: 1,
                surname: Some("Иванова".into()),
                name: Some("Анна".into()),
                patronymic: None,
                phone: Some("+79990000000".into()),
            },
        }
    }

    #[test]
    fn test_aggregates_records_in_range() {
        let rows = vec![
            row(1, 1, Some(1000), Some(at(15, 10))),
            row(2, 1, Some(1000), Some(at(15, 12))),
            row(3, 2, None, Some(at(15, 13))),
            row(4, 2, Some(700), Some(at(16, 9))),
            row(5, 2, Some(700), None),
        ];
        let aggregate = aggregate_revenue(&rows, at(15, 0), at(15, 23));

        assert_eq!(aggregate.total_revenue, 2000);
        assert_eq!(aggregate.lines.len(), 3);
        assert_eq!(aggregate.service_stats[&1].count, 2);
        assert_eq!(aggregate.service_stats[&1].total_revenue, 2000);
        assert_eq!(aggregate.service_stats[&2].count, 1);
        assert_eq!(aggregate.service_stats[&2].total_revenue, 0);
        assert_eq!(aggregate.lines[0].client_name, "Иванова Анна");
        assert_eq!(aggregate.lines[0].service_name, "Услуга 1");
        assert_eq!(aggregate.lines[2].price, 0);
    }

    #[test]
    fn test_total_matches_lines() {
        let rows: Vec<RecordRow> = (0..10)
            .map(|i| row(i, i % 3, Some(i64::from(i) * 100), Some(at(15, i as u32))))
            .collect();
        let aggregate = aggregate_revenue(&rows, at(15, 0), at(15, 23));
        let sum: i64 = aggregate.lines.iter().map(|l| l.price).sum();
        assert_eq!(aggregate.total_revenue, sum);
        assert!(aggregate.total_revenue >= 0);
    }

    #[test]
    fn test_range_is_inclusive() {
        let rows = vec![row(1, 1, Some(10), Some(at(15, 0))), row(2, 1, Some(10), Some(at(15, 23)))];
        let aggregate = aggregate_revenue(&rows, at(15, 0), at(15, 23));
        assert_eq!(aggregate.total_revenue, 20);
    }
}
