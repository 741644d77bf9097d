use async_trait::async_trait;
use chrono::NaiveDateTime;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_service::aggregate::Service;
use contracts::domain::a003_supply::aggregate::Supply;
use contracts::domain::a004_record::aggregate::Record;
use contracts::domain::a005_service_supply::aggregate::ServiceSupply;
use sea_orm::{DatabaseConnection, FromQueryResult, Statement};

use super::store::{LinkRow, RecordRow, ReportStore};

/// Запись, соединённая с услугой и клиентом
#[derive(Debug, FromQueryResult)]
struct RecordJoin {
    record_id: i32,
    customer_id: i32,
    service_id: i32,
    record_date: Option<NaiveDateTime>,
    service_name: Option<String>,
    service_price: Option<i64>,
    customer_surname: Option<String>,
    customer_name: Option<String>,
    customer_patronymic: Option<String>,
    customer_phone: Option<String>,
}

impl From<RecordJoin> for RecordRow {
    fn from(r: RecordJoin) -> Self {
        RecordRow {
            record: Record {
                id: r.record_id,
                customer_id: r.customer_id,
                service_id: r.service_id,
                date: r.record_date,
            },
            service: Service {
                id: r.service_id,
                name: r.service_name,
                price: r.service_price,
            },
            customer: Customer {
                id: r.customer_id,
                surname: r.customer_surname,
                name: r.customer_name,
                patronymic: r.customer_patronymic,
                phone: r.customer_phone,
            },
        }
    }
}

/// Норма расхода, соединённая с услугой и материалом
#[derive(Debug, FromQueryResult)]
struct LinkJoin {
    link_id: i32,
    service_id: i32,
    supply_id: i32,
    material_consumption: Option<f64>,
    units_measurement: Option<String>,
    service_name: Option<String>,
    service_price: Option<i64>,
    supply_name: Option<String>,
    supply_price: Option<i64>,
}

impl From<LinkJoin> for LinkRow {
    fn from(l: LinkJoin) -> Self {
        LinkRow {
            link: ServiceSupply {
                id: l.link_id,
                service_id: l.service_id,
                supply_id: l.supply_id,
                material_consumption: l.material_consumption,
                units_measurement: l.units_measurement,
            },
            service: Service {
                id: l.service_id,
                name: l.service_name,
                price: l.service_price,
            },
            supply: Supply {
                id: l.supply_id,
                name: l.supply_name,
                price: l.supply_price,
            },
        }
    }
}

/// Даты в SQLite хранятся текстом, границы сравниваются в том же формате
///
/// Хранимое значение приводится к виду `YYYY-MM-DD HH:MM:SS[.f]`:
/// `2024-03-15T10:00:00` и `2024-03-15` иначе выпадают из диапазона.
const NORMALIZED_RECORD_DATE: &str = r#"
    CASE
        WHEN length(date) = 10 THEN date || ' 00:00:00'
        ELSE replace(date, 'T', ' ')
    END
"#;

fn sql_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.f").to_string()
}

/// Хранилище отчёта поверх SQLite
pub struct SqlReportStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SqlReportStore<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportStore for SqlReportStore<'_> {
    async fn records_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> anyhow::Result<Vec<RecordRow>> {
        let sql = format!(
            r#"
            SELECT
                r.id            AS record_id,
                r.id_customers  AS customer_id,
                r.id_services   AS service_id,
                r.date          AS record_date,
                s.name          AS service_name,
                s.price         AS service_price,
                c.surname       AS customer_surname,
                c.name          AS customer_name,
                c.patronymic    AS customer_patronymic,
                c.phone         AS customer_phone
            FROM (
                SELECT id, id_customers, id_services, {NORMALIZED_RECORD_DATE} AS date
                FROM record
            ) r
            JOIN services s ON r.id_services = s.id
            JOIN customers c ON r.id_customers = c.id
            WHERE r.date >= ? AND r.date <= ?
            ORDER BY r.id
        "#
        );

        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Sqlite,
            &sql,
            [sql_timestamp(start).into(), sql_timestamp(end).into()],
        );

        let rows = RecordJoin::find_by_statement(stmt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(rows)
    }

    async fn service_supply_links(&self) -> anyhow::Result<Vec<LinkRow>> {
        let sql = r#"
            SELECT
                ss.id                   AS link_id,
                ss.id_services          AS service_id,
                ss.id_supplies          AS supply_id,
                ss.material_consumption AS material_consumption,
                ss.units_measurement    AS units_measurement,
                s.name                  AS service_name,
                s.price                 AS service_price,
                sp.name                 AS supply_name,
                sp.price                AS supply_price
            FROM services_supplies ss
            JOIN services s ON ss.id_services = s.id
            JOIN supplies sp ON ss.id_supplies = sp.id
            ORDER BY ss.id
        "#;

        let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);

        let rows = LinkJoin::find_by_statement(stmt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::{bootstrap_schema, connect};
    use chrono::NaiveDate;
    use sea_orm::ConnectionTrait;

    async fn seeded_connection() -> DatabaseConnection {
        let conn = connect("sqlite::memory:").await.unwrap();
        bootstrap_schema(&conn).await.unwrap();

        let seed = [
            "INSERT INTO customers (id, surname, name, patronymic, phone) VALUES (1, 'Иванова', 'Анна', 'Сергеевна', '+79990000001')",
            "INSERT INTO services (id, name, price) VALUES (1, 'Тату', 1000)",
            "INSERT INTO services (id, name, price) VALUES (2, 'Пирсинг', NULL)",
            "INSERT INTO supplies (id, name, price) VALUES (1, 'Краска', 50)",
            "INSERT INTO record (id, id_customers, id_services, date) VALUES (1, 1, 1, '2024-03-15 10:00:00')",
            "INSERT INTO record (id, id_customers, id_services, date) VALUES (2, 1, 2, '2024-03-15 00:00:00')",
            "INSERT INTO record (id, id_customers, id_services, date) VALUES (3, 1, 1, '2024-03-16 00:00:00')",
            "INSERT INTO record (id, id_customers, id_services, date) VALUES (4, 1, 1, NULL)",
            // ссылка на несуществующего клиента
            "INSERT INTO record (id, id_customers, id_services, date) VALUES (5, 99, 1, '2024-03-15 12:00:00')",
            "INSERT INTO services_supplies (id, id_services, id_supplies, material_consumption, units_measurement) VALUES (1, 1, 1, 2.0, 'ml')",
            "INSERT INTO services_supplies (id, id_services, id_supplies, material_consumption, units_measurement) VALUES (2, 2, 1, NULL, NULL)",
            // ссылка на несуществующий материал
            "INSERT INTO services_supplies (id, id_services, id_supplies, material_consumption, units_measurement) VALUES (3, 1, 42, 1.0, NULL)",
        ];
        for sql in seed {
            conn.execute(Statement::from_string(
                sea_orm::DatabaseBackend::Sqlite,
                sql.to_string(),
            ))
            .await
            .unwrap();
        }
        conn
    }

    fn day_bounds() -> (NaiveDateTime, NaiveDateTime) {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        (
            day.and_hms_opt(0, 0, 0).unwrap(),
            day.and_hms_micro_opt(23, 59, 59, 999_999).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_records_in_range_uses_inner_join_and_inclusive_bounds() {
        let conn = seeded_connection().await;
        let store = SqlReportStore::new(&conn);
        let (start, end) = day_bounds();

        let rows = store.records_in_range(start, end).await.unwrap();
        let ids: Vec<i32> = rows.iter().map(|r| r.record.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let first = &rows[0];
        assert_eq!(first.service.price, Some(1000));
        assert_eq!(first.customer.display_name(), "Иванова Анна");
        assert_eq!(
            first.record.date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 0, 0)
        );
        assert_eq!(rows[1].service.price, None);
    }

    #[tokio::test]
    async fn test_records_in_range_accepts_iso_and_date_only_values() {
        let conn = seeded_connection().await;
        for sql in [
            "INSERT INTO record (id, id_customers, id_services, date) VALUES (6, 1, 1, '2024-03-15T23:30:00')",
            "INSERT INTO record (id, id_customers, id_services, date) VALUES (7, 1, 1, '2024-03-15')",
            "INSERT INTO record (id, id_customers, id_services, date) VALUES (8, 1, 1, '2024-03-16T00:00:00')",
            "INSERT INTO record (id, id_customers, id_services, date) VALUES (9, 1, 1, '2024-03-14')",
        ] {
            conn.execute(Statement::from_string(
                sea_orm::DatabaseBackend::Sqlite,
                sql.to_string(),
            ))
            .await
            .unwrap();
        }
        let store = SqlReportStore::new(&conn);
        let (start, end) = day_bounds();

        let rows = store.records_in_range(start, end).await.unwrap();
        let ids: Vec<i32> = rows.iter().map(|r| r.record.id).collect();
        assert_eq!(ids, vec![1, 2, 6, 7]);

        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(rows[2].record.date, day.and_hms_opt(23, 30, 0));
        assert_eq!(rows[3].record.date, day.and_hms_opt(0, 0, 0));
    }

    #[tokio::test]
    async fn test_service_supply_links() {
        let conn = seeded_connection().await;
        let store = SqlReportStore::new(&conn);

        let rows = store.service_supply_links().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].link.material_consumption, Some(2.0));
        assert_eq!(rows[0].link.units_or_default(), "ml");
        assert_eq!(rows[0].supply.price, Some(50));
        assert_eq!(rows[1].link.consumption_or_zero(), 0.0);
        assert_eq!(rows[1].link.units_or_default(), "pcs");
    }
}
