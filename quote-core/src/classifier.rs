use regex::{Captures, Regex};

/// Семантический тип строки письма
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `From: XXX At: 12/10/21 09:15:02 EST-5:00`
    Header,
    /// `Subject: ...` с референсной ценой
    Subject,
    /// строка с датой экспирации
    Expiry,
    /// заголовок таблицы с именами колонок
    TableHeader,
    /// строка таблицы
    TableRow,
}

/// Шаблон одного типа строки
#[derive(Debug, Clone)]
pub struct Recognizer {
    /// какой тип строки распознаёт
    pub kind: LineKind,
    /// скомпилированный шаблон
    pub rx: Regex,
}

/// Упорядоченный набор шаблонов. Порядок = приоритет.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    recognizers: Vec<Recognizer>,
}

impl PatternSet {
    /// Компилирует набор из пар (тип, шаблон) в заданном порядке.
    pub fn compile(specs: &[(LineKind, &str)]) -> Result<Self, regex::Error> {
        let recognizers = specs
            .iter()
            .map(|&(kind, pattern)| Regex::new(pattern).map(|rx| Recognizer { kind, rx }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { recognizers })
    }

    /// Шаблон для типа строки, если он есть в наборе
    pub fn get(&self, kind: LineKind) -> Option<&Regex> {
        self.recognizers.iter().find(|r| r.kind == kind).map(|r| &r.rx)
    }

    /// Есть ли в наборе шаблон для типа строки
    pub fn contains(&self, kind: LineKind) -> bool {
        self.get(kind).is_some()
    }

    /// Типы строк в порядке приоритета
    pub fn kinds(&self) -> impl Iterator<Item = LineKind> + '_ {
        self.recognizers.iter().map(|r| r.kind)
    }
}

/// Результат классификации строки
#[derive(Debug)]
pub struct Classified<'p, 'h> {
    /// тип строки
    pub kind: LineKind,
    /// шаблон, который сработал (нужен для порядка групп заголовка таблицы)
    pub rx: &'p Regex,
    /// захваченные группы
    pub captures: Captures<'h>,
}

impl<'h> Classified<'_, 'h> {
    /// Текст именованной группы
    pub fn group(&self, name: &str) -> Option<&'h str> {
        self.captures.name(name).map(|m| m.as_str())
    }
}

/// Пробует шаблоны по порядку, первый сработавший выигрывает.
/// `None` - строка ничему не соответствует и просто пропускается.
pub fn classify<'p, 'h>(patterns: &'p PatternSet, line: &'h str) -> Option<Classified<'p, 'h>> {
    patterns.recognizers.iter().find_map(|r| {
        r.rx.captures(line).map(|captures| Classified {
            kind: r.kind,
            rx: &r.rx,
            captures,
        })
    })
}
