use log::{debug, trace, warn};

use crate::classifier::{Classified, LineKind, PatternSet, classify};
use crate::columns::ColumnIndexMap;
use crate::error::DecodeError;
use crate::grammar::{LegPair, SenderGrammar};
use crate::registry::GrammarRegistry;
use crate::types::QuoteTemplate;

/// Что произошло со строкой
#[derive(Debug, PartialEq)]
pub enum Step {
    /// строка ничему не соответствует
    Skipped,
    /// заголовок письма: отправитель определён, грамматика подключена
    Bound {
        /// токен отправителя
        sender: String,
    },
    /// заголовок письма с неизвестным отправителем: разбор файла прекращается
    UnknownSender {
        /// токен отправителя
        sender: String,
    },
    /// строка уровня письма обработана (тема, экспирация, заголовок таблицы)
    Consumed(LineKind),
    /// повторный заголовок таблицы, проигнорирован
    Ignored(LineKind),
    /// строка таблицы: пара записей пут/колл
    Rows(Box<LegPair>),
}

struct Bound<'r> {
    grammar: &'r dyn SenderGrammar,
    template: QuoteTemplate,
}

/// Состояние разбора одного файла.
///
/// Создаётся на каждый файл и между файлами не переиспользуется.
pub struct QuoteSession<'r> {
    registry: &'r GrammarRegistry,
    bound: Option<Bound<'r>>,
    columns: Option<ColumnIndexMap>,
}

impl<'r> QuoteSession<'r> {
    /// Новая сессия: отправитель ещё не известен
    pub fn new(registry: &'r GrammarRegistry) -> Self {
        Self {
            registry,
            bound: None,
            columns: None,
        }
    }

    /// Шаблоны, по которым сейчас классифицируются строки
    pub fn active_patterns(&self) -> &'r PatternSet {
        match self.grammar() {
            Some(g) => g.patterns(),
            None => self.registry.header_patterns(),
        }
    }

    /// Подключённая грамматика
    pub fn grammar(&self) -> Option<&'r dyn SenderGrammar> {
        self.bound.as_ref().map(|b| b.grammar)
    }

    /// Факты уровня письма, накопленные к этому моменту
    pub fn template(&self) -> Option<&QuoteTemplate> {
        self.bound.as_ref().map(|b| &b.template)
    }

    /// Карта колонок, если заголовок таблицы уже был
    pub fn columns(&self) -> Option<&ColumnIndexMap> {
        self.columns.as_ref()
    }

    /// Заголовок таблицы уже обработан
    pub fn table_header_consumed(&self) -> bool {
        self.columns.is_some()
    }

    /// Классифицирует строку и передаёт её нужному обработчику.
    pub fn feed(&mut self, line: &str) -> Result<Step, DecodeError> {
        let Some(m) = classify(self.active_patterns(), line) else {
            return Ok(Step::Skipped);
        };
        trace!("{:?}: {line:?}", m.kind);

        match m.kind {
            LineKind::Header => self.on_header(&m),
            LineKind::Subject => {
                self.on_subject(&m)?;
                Ok(Step::Consumed(LineKind::Subject))
            }
            LineKind::Expiry => {
                self.on_expiry(&m)?;
                Ok(Step::Consumed(LineKind::Expiry))
            }
            LineKind::TableHeader => Ok(if self.on_table_header(&m)? {
                Step::Consumed(LineKind::TableHeader)
            } else {
                Step::Ignored(LineKind::TableHeader)
            }),
            LineKind::TableRow => Ok(Step::Rows(Box::new(self.on_table_row(line)?))),
        }
    }

    /// Заголовок письма: выбирает грамматику по отправителю.
    pub fn on_header(&mut self, m: &Classified<'_, '_>) -> Result<Step, DecodeError> {
        let sender = m
            .group("firm_sender")
            .ok_or(DecodeError::MissingCapture("firm_sender"))?;

        let Some(grammar) = self.registry.resolve(sender) else {
            warn!("unknown sender {sender:?}; skipping the rest of the file");
            return Ok(Step::UnknownSender {
                sender: sender.to_string(),
            });
        };

        let template = grammar.on_header(m)?;
        debug!("bound grammar for {sender}");
        self.bound = Some(Bound { grammar, template });

        Ok(Step::Bound {
            sender: sender.to_string(),
        })
    }

    /// Тема письма
    pub fn on_subject(&mut self, m: &Classified<'_, '_>) -> Result<(), DecodeError> {
        let b = self.bound.as_mut().ok_or(DecodeError::GrammarUnbound)?;
        b.grammar.on_subject(m, &mut b.template)
    }

    /// Строка экспирации
    pub fn on_expiry(&mut self, m: &Classified<'_, '_>) -> Result<(), DecodeError> {
        let b = self.bound.as_mut().ok_or(DecodeError::GrammarUnbound)?;
        b.grammar.on_expiry(m, &mut b.template)
    }

    /// Заголовок таблицы. Срабатывает один раз на файл, первый выигрывает.
    /// Возвращает `false`, если карта колонок уже была построена.
    pub fn on_table_header(&mut self, m: &Classified<'_, '_>) -> Result<bool, DecodeError> {
        let grammar = self.grammar().ok_or(DecodeError::GrammarUnbound)?;
        if self.columns.is_some() {
            debug!("repeated table header ignored");
            return Ok(false);
        }

        let cols = grammar.on_table_header(m);
        debug!("bound {} columns", cols.len());
        self.columns = Some(cols);
        Ok(true)
    }

    /// Строка таблицы
    pub fn on_table_row(&self, line: &str) -> Result<LegPair, DecodeError> {
        let b = self.bound.as_ref().ok_or(DecodeError::GrammarUnbound)?;
        let cols = self.columns.as_ref().ok_or(DecodeError::ColumnMapUnbound)?;
        b.grammar.on_table_row(line, cols, &b.template)
    }
}
