use thiserror::Error;

/// Верхнеуровневый тип ошибок крейта
#[derive(Debug, Error)]
pub enum QuoteCoreError {
    /// Фатальная ошибка разбора файла
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Ошибка декодирования строки/поля
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Ошибка чтения входа
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// Не скомпилировался шаблон грамматики
    #[error("invalid recognizer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Ошибки декодирования отдельной строки письма
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Строка таблицы пришла раньше заголовка таблицы
    #[error("table row before table header: column map is not bound")]
    ColumnMapUnbound,

    /// Строка таблицы пришла раньше заголовка письма
    #[error("table row before message header: sender grammar is not bound")]
    GrammarUnbound,

    /// В заголовке таблицы нет такой колонки
    #[error("column {field:?} is not present in the table header")]
    UnknownColumn {
        /// имя колонки
        field: &'static str,
    },

    /// В строке меньше токенов, чем ожидает карта колонок
    #[error("column {field:?} expects token #{index}, row has only {tokens} tokens")]
    MissingToken {
        /// имя колонки
        field: &'static str,
        /// ожидаемая позиция
        index: usize,
        /// сколько токенов реально есть
        tokens: usize,
    },

    /// Совмещённая цена не вида `bid/ask`
    #[error("column {field:?}: expected `bid/ask`, got {token:?}")]
    MalformedPricePair {
        /// имя колонки
        field: &'static str,
        /// исходный токен
        token: String,
    },

    /// В захвате нет обязательной группы
    #[error("missing capture group {0:?}")]
    MissingCapture(&'static str),

    /// Дата не разбирается в ожидаемом формате
    #[error("invalid date {value:?} (expected format {format:?})")]
    InvalidDate {
        /// исходная строка
        value: String,
        /// strftime-формат
        format: &'static str,
    },
}

/// Фатальная ошибка разбора одного файла
#[derive(Debug, Error)]
#[error("malformed line {line_no}: {line:?}")]
pub struct ParseError {
    /// номер строки, с 1
    pub line_no: usize,
    /// содержимое строки
    pub line: String,
    /// причина
    #[source]
    pub source: DecodeError,
}
