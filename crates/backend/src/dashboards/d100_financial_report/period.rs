use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use contracts::enums::ReportPeriod;

use super::error::ReportError;

const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Интервал графика, обе границы включительно
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Bucket {
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        ts >= self.start && ts <= self.end
    }
}

/// Границы отчётного периода и его разбиение для графика
#[derive(Debug, Clone)]
pub struct ResolvedPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub buckets: Vec<Bucket>,
}

/// Разбор обязательного параметра `date` в формате "YYYY-MM-DD"
pub fn parse_report_date(value: Option<&str>) -> Result<NaiveDate, ReportError> {
    let raw = value
        .filter(|v| !v.is_empty())
        .ok_or(ReportError::MissingParameter)?;

    // Строго 10 символов: "2024-3-5" и пятизначные годы не принимаем
    if raw.len() != 10 {
        return Err(ReportError::InvalidDate(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ReportError::InvalidDate(raw.to_string()))
}

pub fn resolve_period(date: NaiveDate, period: ReportPeriod) -> ResolvedPeriod {
    let (first, last, buckets) = match period {
        ReportPeriod::Day => (date, date, hour_buckets(date)),
        ReportPeriod::Month => (
            first_day_of_month(date),
            last_day_of_month(date),
            day_buckets(date),
        ),
        ReportPeriod::Year => (
            first_day_of_year(date),
            last_day_of_year(date),
            month_buckets(date),
        ),
    };

    ResolvedPeriod {
        start: start_of_day(first),
        end: end_of_day(last),
        buckets,
    }
}

/// Последний день месяца: от 28-го числа шагаем на 4 дня вперёд (это всегда
/// следующий месяц) и отступаем назад на номер получившегося дня.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let day_28 = date.with_day(28).unwrap_or(date);
    let next_month = day_28 + Duration::days(4);
    next_month - Duration::days(i64::from(next_month.day()))
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn first_day_of_year(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

fn last_day_of_year(date: NaiveDate) -> NaiveDate {
    // 361-й день года всегда приходится на декабрь
    last_day_of_month(first_day_of_year(date) + Duration::days(360))
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::microseconds(1)
}

fn hour_buckets(date: NaiveDate) -> Vec<Bucket> {
    let midnight = start_of_day(date);
    (0..24)
        .map(|hour| {
            let start = midnight + Duration::hours(hour);
            Bucket {
                label: format!("{:02}:00", hour),
                start,
                end: start + Duration::hours(1) - Duration::microseconds(1),
            }
        })
        .collect()
}

fn day_buckets(date: NaiveDate) -> Vec<Bucket> {
    let last = last_day_of_month(date);
    let mut day = first_day_of_month(date);
    let mut buckets = Vec::with_capacity(31);
    while day <= last {
        buckets.push(Bucket {
            label: day.format("%d.%m").to_string(),
            start: start_of_day(day),
            end: end_of_day(day),
        });
        day += Duration::days(1);
    }
    buckets
}

fn month_buckets(date: NaiveDate) -> Vec<Bucket> {
    let mut month_start = first_day_of_year(date);
    let mut buckets = Vec::with_capacity(12);
    for name in MONTH_NAMES {
        let month_end = last_day_of_month(month_start);
        buckets.push(Bucket {
            label: name.to_string(),
            start: start_of_day(month_start),
            end: end_of_day(month_end),
        });
        month_start = month_end + Duration::days(1);
    }
    buckets
}
