use chrono::NaiveDate;
use serde::Serializer;

use crate::constants::CANONICAL_DATE_FORMAT;
use crate::error::DecodeError;

/// Разбирает дату в формате конкретного отправителя.
/// Название месяца сравнивается без учёта регистра (`DEC` == `Dec`).
pub fn parse_date(value: &str, format: &'static str) -> Result<NaiveDate, DecodeError> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|_| DecodeError::InvalidDate {
        value: value.to_string(),
        format,
    })
}

/// `DD-Mon-YY`
pub fn canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

pub(crate) fn serialize_canonical<S: Serializer>(
    date: &NaiveDate,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_str(&date.format(CANONICAL_DATE_FORMAT))
}

pub(crate) fn serialize_canonical_opt<S: Serializer>(
    date: &Option<NaiveDate>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(d) => serialize_canonical(d, s),
        None => s.serialize_none(),
    }
}
