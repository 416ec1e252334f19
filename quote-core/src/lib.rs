//! # quote-core
//!
//! Разбор котировок опционов из текстовых писем нескольких отправителей.
//!
//! Каждый отправитель присылает таблицу в своей раскладке: свой набор и
//! порядок колонок, свои разделители, свой формат даты, свои единицы
//! цены. Крейт приводит всё это к одной записи [`QuoteRecord`] на страйк
//! и сторону (пут/колл).
//!
//! Этот крейт содержит:
//!
//! - [`classifier`] - классификация строк по упорядоченному набору шаблонов
//! - [`columns`] - карта "колонка -> позиция токена" из заголовка таблицы
//! - [`grammar`] - грамматики отправителей (`XXX`, `YYY`, `ZZZ`, `WWW`)
//! - [`registry`] - выбор грамматики по токену отправителя
//! - [`session`] - состояние разбора одного файла
//! - [`parser`] - прогон строк файла через сессию
//! - [`normalize`] - перевод в числа и приведение цен к единым единицам
//! - [`types`] - доменные типы
//! - [`error`] - типы ошибок
//!
//! ## Быстрый пример
//!
//! ```rust
//! use quote_core::{OptionSide, QuoteParser, RescalePolicy, normalize};
//!
//! let parser = QuoteParser::new().unwrap();
//! let file = parser
//!     .parse_lines([
//!         "From: YYY At: 12/10/21 09:15:02 EST-5:00",
//!         "Subject: $$ CDX OPTIONS: HY37 5Y UPDATE - REF 108.125",
//!         "EXPIRY: 15-DEC-2021 Fwd 107.89 / 320.8 Dv01 4.67",
//!         "K [~Sprd]  |DEC21>PAY   Dlt |DEC21>RCV   Dlt |MidVol [SprdVol] Chg    b/e",
//!         "109.5 [287] |155.5 170.5 95% |  0.0 9.6    5% |  4.5% [ 32%]    -1.3%  6.05",
//!     ])
//!     .unwrap();
//!
//! assert_eq!(file.records.len(), 2);
//! assert_eq!(file.records[0].side, OptionSide::Put);
//!
//! let rows = normalize(&file.records, &RescalePolicy::default());
//! assert_eq!(rows[0].bid_price, Some(1.555));
//! ```
//!
//! ## Дизайн
//!
//! Грамматики не хранят состояния: изменяемое состояние файла (факты
//! письма и карта колонок) живёт в [`session::QuoteSession`], которая
//! создаётся на каждый файл. Ноги строки собираются заново на каждую
//! строку, поэтому значения прошлой строки не протекают в следующую.
//! Файловой системы и вывода здесь нет, это дело бинарника.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Классификация строк письма.
pub mod classifier;

/// Позиции колонок таблицы.
pub mod columns;

/// Разбор и канонический вывод дат.
pub mod dates;

/// Грамматики отправителей.
pub mod grammar;

/// Приведение записей к числам и единым единицам цены.
pub mod normalize;

/// Прогон строк файла.
pub mod parser;

/// Реестр грамматик.
pub mod registry;

/// Состояние разбора одного файла.
pub mod session;

/// Доменные типы (запись котировки, факты письма).
pub mod types;

/// Ошибки `quote-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::{
    CANONICAL_DATE_FORMAT, DEFAULT_NO_RESCALE_SENDER, DEFAULT_PRICE_DIVISOR, HEADER_DATE_FORMAT,
    OUTPUT_COLUMNS,
};

// --- Re-exports (публичный фасад API) ---

pub use crate::classifier::{LineKind, classify};
pub use crate::columns::ColumnIndexMap;
pub use crate::error::{DecodeError, ParseError, QuoteCoreError};
pub use crate::grammar::SenderGrammar;
pub use crate::normalize::{NormalizedQuote, RescalePolicy, normalize};
pub use crate::parser::{FileStatus, ParsedFile, QuoteParser};
pub use crate::registry::GrammarRegistry;
pub use crate::session::{QuoteSession, Step};
pub use crate::types::{OptionSide, QuoteRecord};
