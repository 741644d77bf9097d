use async_trait::async_trait;
use chrono::NaiveDateTime;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_service::aggregate::Service;
use contracts::domain::a003_supply::aggregate::Supply;
use contracts::domain::a004_record::aggregate::Record;
use contracts::domain::a005_service_supply::aggregate::ServiceSupply;

/// Запись клиента вместе с услугой и клиентом
#[derive(Debug, Clone)]
pub struct RecordRow {
    pub record: Record,
    pub service: Service,
    pub customer: Customer,
}

/// Норма расхода вместе с услугой и материалом
#[derive(Debug, Clone)]
pub struct LinkRow {
    pub link: ServiceSupply,
    pub service: Service,
    pub supply: Supply,
}

/// Источник данных отчёта.
///
/// Оба запроса имеют семантику внутреннего соединения: строки со ссылкой на
/// несуществующую услугу, клиента или материал не возвращаются.
/// Запросы выполняются независимо, без общей транзакции.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Записи с датой в `[start, end]` включительно
    async fn records_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> anyhow::Result<Vec<RecordRow>>;

    /// Все нормы расхода материалов
    async fn service_supply_links(&self) -> anyhow::Result<Vec<LinkRow>>;
}
