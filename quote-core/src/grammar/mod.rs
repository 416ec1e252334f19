//! Грамматики отправителей.
//!
//! Каждый отправитель присылает таблицу котировок в своей раскладке.
//! Грамматика знает шаблоны строк отправителя, формат даты экспирации
//! и как разложить строку таблицы на ноги пут/колл. Состояния у
//! грамматик нет: всё изменяемое живёт в [`crate::session::QuoteSession`].

use crate::classifier::{Classified, LineKind, PatternSet};
use crate::columns::ColumnIndexMap;
use crate::constants::HEADER_DATE_FORMAT;
use crate::dates::parse_date;
use crate::error::DecodeError;
use crate::types::{QuoteRecord, QuoteTemplate};

mod www;
mod xxx;
mod yyy;
mod zzz;

pub use www::WwwGrammar;
pub use xxx::XxxGrammar;
pub use yyy::YyyGrammar;
pub use zzz::ZzzGrammar;

/// Общий для всех отправителей заголовок письма:
/// `From: XXX At: 12/10/21 09:15:02 EST-5:00`
pub const HEADER_PATTERN: &str = r"^From: (?P<firm_sender>\w+) At: (?P<date>\d{2}/\d{2}/\d{2}) (?P<time>\d{2}:\d{2}:\d{2}) (\w{3}[-+]\d?\d:\d\d)";

/// Тема письма с референсной ценой:
/// `Subject: $$ CDX OPTIONS: HY37 5Y UPDATE - REF 108.125`
pub(crate) const SUBJECT_PATTERN: &str = r"^Subject: .*?\w+ (?P<ref_px>\d+.\d+)";

/// Набор шаблонов до того, как отправитель определён
pub fn header_patterns() -> Result<PatternSet, regex::Error> {
    PatternSet::compile(&[(LineKind::Header, HEADER_PATTERN)])
}

/// Пара записей одной строки таблицы: `[пут, колл]`
pub type LegPair = [QuoteRecord; 2];

/// Грамматика одного отправителя
pub trait SenderGrammar: Send + Sync {
    /// Токен отправителя в заголовке письма
    fn sender(&self) -> &'static str;

    /// Шаблоны строк после того, как отправитель определён
    fn patterns(&self) -> &PatternSet;

    /// strftime-формат даты экспирации
    fn expiry_format(&self) -> &'static str;

    /// Заголовок письма: отправитель, дата, время
    fn on_header(&self, m: &Classified<'_, '_>) -> Result<QuoteTemplate, DecodeError> {
        header_template(m)
    }

    /// Тема письма: референсная цена
    fn on_subject(&self, m: &Classified<'_, '_>, tpl: &mut QuoteTemplate) -> Result<(), DecodeError> {
        tpl.ref_px = Some(required(m, "ref_px")?.to_string());
        Ok(())
    }

    /// Строка с экспирацией
    fn on_expiry(&self, m: &Classified<'_, '_>, tpl: &mut QuoteTemplate) -> Result<(), DecodeError> {
        let raw = required(m, "expiration_date")?;
        tpl.expiration = Some(parse_date(raw, self.expiry_format())?);
        Ok(())
    }

    /// Заголовок таблицы: позиции колонок по порядку именованных групп
    fn on_table_header(&self, m: &Classified<'_, '_>) -> ColumnIndexMap {
        ColumnIndexMap::from_header_pattern(m.rx)
    }

    /// Строка таблицы: ноги пут и колл
    fn on_table_row(
        &self,
        line: &str,
        cols: &ColumnIndexMap,
        tpl: &QuoteTemplate,
    ) -> Result<LegPair, DecodeError>;
}

/// Разбор общего заголовка письма. Дата приходит как `MM/DD/YY`.
pub fn header_template(m: &Classified<'_, '_>) -> Result<QuoteTemplate, DecodeError> {
    Ok(QuoteTemplate {
        sender: required(m, "firm_sender")?.to_string(),
        date: parse_date(required(m, "date")?, HEADER_DATE_FORMAT)?,
        time: required(m, "time")?.to_string(),
        expiration: None,
        ref_px: None,
    })
}

pub(crate) fn required<'h>(m: &Classified<'_, 'h>, name: &'static str) -> Result<&'h str, DecodeError> {
    m.group(name).ok_or(DecodeError::MissingCapture(name))
}

/// Заменяет шумовые символы пробелами.
pub(crate) fn clean(line: &str, noise: &[char]) -> String {
    line.chars()
        .map(|c| if noise.contains(&c) { ' ' } else { c })
        .collect()
}

/// Значение ячейки. Пустое или из одних `-` - отсутствует.
pub(crate) fn cell(token: &str) -> Option<String> {
    let t = token.trim();
    if t.is_empty() || t.chars().all(|c| c == '-') {
        None
    } else {
        Some(t.to_string())
    }
}

/// Совмещённая цена `bid/ask`
pub(crate) fn split_price(
    field: &'static str,
    token: &str,
) -> Result<(Option<String>, Option<String>), DecodeError> {
    match token.split_once('/') {
        Some((bid, ask)) if !ask.contains('/') => Ok((cell(bid), cell(ask))),
        _ => Err(DecodeError::MalformedPricePair {
            field,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::classifier::classify;
    use crate::columns::ColumnIndexMap;
    use crate::types::QuoteTemplate;

    use super::SenderGrammar;

    pub(crate) fn template(sender: &str) -> QuoteTemplate {
        QuoteTemplate {
            sender: sender.to_string(),
            date: NaiveDate::from_ymd_opt(2021, 12, 10).unwrap(),
            time: "09:15:02".to_string(),
            expiration: NaiveDate::from_ymd_opt(2021, 12, 15),
            ref_px: Some("108.1".to_string()),
        }
    }

    /// Прогоняет строку заголовка таблицы через шаблоны грамматики
    pub(crate) fn columns(g: &dyn SenderGrammar, header_line: &str) -> ColumnIndexMap {
        let m = classify(g.patterns(), header_line).expect("table header must classify");
        assert_eq!(m.kind, crate::classifier::LineKind::TableHeader);
        g.on_table_header(&m)
    }
}
