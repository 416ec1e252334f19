use std::io::BufRead;

use log::debug;

use crate::error::{ParseError, QuoteCoreError};
use crate::registry::GrammarRegistry;
use crate::session::{QuoteSession, Step};
use crate::types::QuoteRecord;

/// Чем закончился разбор файла
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// дочитали до конца
    Completed,
    /// заголовок письма так и не встретился
    NoHeader,
    /// неизвестный отправитель: остаток файла пропущен
    Abandoned {
        /// токен отправителя
        sender: String,
        /// номер строки заголовка, с 1
        line_no: usize,
    },
}

/// Результат разбора одного файла
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    /// записи в порядке строк таблицы
    pub records: Vec<QuoteRecord>,
    /// как закончился разбор
    pub status: FileStatus,
}

/// Разбирает файлы писем в записи котировок.
///
/// ```rust
/// use quote_core::QuoteParser;
///
/// let parser = QuoteParser::new().unwrap();
/// let file = parser
///     .parse_lines([
///         "From: ZZZ At: 12/10/21 09:15:02 EST-5:00",
///         "   K    |     Puts    Del |    Calls    Del |   Vol    Chg |  Prc Vol",
///         "    108 |   52 /  70   55 |   40 /  58  -45 |  41.7   +1.5 |    6.1 ",
///     ])
///     .unwrap();
/// assert_eq!(file.records.len(), 2);
/// ```
#[derive(Debug)]
pub struct QuoteParser {
    registry: GrammarRegistry,
}

impl QuoteParser {
    /// Парсер со всеми известными грамматиками
    pub fn new() -> Result<Self, QuoteCoreError> {
        Ok(Self {
            registry: GrammarRegistry::new()?,
        })
    }

    /// Прогоняет строки одного файла через свежую сессию.
    ///
    /// Строки, которые ничему не соответствуют, пропускаются. Неизвестный
    /// отправитель останавливает разбор без ошибки. Строка таблицы, которую
    /// не удалось разложить по колонкам, - фатальная ошибка для файла.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<ParsedFile, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut session = QuoteSession::new(&self.registry);
        let mut records = Vec::new();
        let mut status = FileStatus::NoHeader;

        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let step = session.feed(line).map_err(|source| ParseError {
                line_no: i + 1,
                line: line.to_string(),
                source,
            })?;

            match step {
                Step::Bound { .. } => status = FileStatus::Completed,
                Step::UnknownSender { sender } => {
                    status = FileStatus::Abandoned {
                        sender,
                        line_no: i + 1,
                    };
                    break;
                }
                Step::Rows(pair) => records.extend(*pair),
                Step::Skipped | Step::Consumed(_) | Step::Ignored(_) => {}
            }
        }

        debug!("parsed {} records ({status:?})", records.len());
        Ok(ParsedFile { records, status })
    }

    /// То же, что [`QuoteParser::parse_lines`], но из reader'а (UTF-8)
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParsedFile, QuoteCoreError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(self.parse_lines(lines)?)
    }
}
