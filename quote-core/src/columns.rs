use std::collections::HashMap;

use regex::Regex;

use crate::error::DecodeError;

/// Позиции семантических колонок в строке таблицы.
///
/// Индекс колонки = порядковый номер именованной группы в шаблоне
/// заголовка таблицы. Строка таблицы после очистки режется по пробелам,
/// и `i`-я группа заголовка соответствует `i`-му токену строки.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndexMap {
    idx: HashMap<String, usize>,
}

impl ColumnIndexMap {
    /// Строит карту из упорядоченного списка имён колонок.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let idx = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.into(), i))
            .collect();
        Self { idx }
    }

    /// Строит карту по именованным группам шаблона заголовка таблицы.
    /// Безымянные группы не занимают позицию.
    pub fn from_header_pattern(rx: &Regex) -> Self {
        Self::from_names(rx.capture_names().flatten())
    }

    /// Позиция колонки
    pub fn index(&self, field: &'static str) -> Result<usize, DecodeError> {
        self.idx
            .get(field)
            .copied()
            .ok_or(DecodeError::UnknownColumn { field })
    }

    /// Токен строки, который лежит в колонке `field`
    pub fn token<'t>(&self, tokens: &[&'t str], field: &'static str) -> Result<&'t str, DecodeError> {
        let index = self.index(field)?;
        tokens.get(index).copied().ok_or(DecodeError::MissingToken {
            field,
            index,
            tokens: tokens.len(),
        })
    }

    /// Количество колонок в заголовке
    pub fn len(&self) -> usize {
        self.idx.len()
    }

    /// Карта пуста
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }
}
