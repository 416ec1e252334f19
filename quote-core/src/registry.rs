use crate::classifier::PatternSet;
use crate::grammar::{self, SenderGrammar, WwwGrammar, XxxGrammar, YyyGrammar, ZzzGrammar};

/// Отправитель -> грамматика. Закрытый набор из четырёх отправителей.
pub struct GrammarRegistry {
    header: PatternSet,
    grammars: Vec<Box<dyn SenderGrammar>>,
}

impl GrammarRegistry {
    /// Компилирует шаблоны всех известных грамматик
    pub fn new() -> Result<Self, regex::Error> {
        let grammars: Vec<Box<dyn SenderGrammar>> = vec![
            Box::new(XxxGrammar::new()?),
            Box::new(YyyGrammar::new()?),
            Box::new(ZzzGrammar::new()?),
            Box::new(WwwGrammar::new()?),
        ];

        Ok(Self {
            header: grammar::header_patterns()?,
            grammars,
        })
    }

    /// Грамматика для токена отправителя. Неизвестный токен -> `None`.
    pub fn resolve(&self, sender: &str) -> Option<&dyn SenderGrammar> {
        self.grammars
            .iter()
            .find(|g| g.sender() == sender)
            .map(|g| g.as_ref())
    }

    /// Шаблоны, активные до определения отправителя (только заголовок письма)
    pub fn header_patterns(&self) -> &PatternSet {
        &self.header
    }

    /// Известные токены отправителей
    pub fn senders(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.grammars.iter().map(|g| g.sender())
    }
}

impl std::fmt::Debug for GrammarRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarRegistry")
            .field("senders", &self.senders().collect::<Vec<_>>())
            .finish()
    }
}
