use regex::Regex;

use crate::classifier::{Classified, LineKind, PatternSet};
use crate::columns::ColumnIndexMap;
use crate::dates::parse_date;
use crate::error::DecodeError;
use crate::types::{OptionSide, QuoteLeg, QuoteTemplate};

use super::{LegPair, SenderGrammar, cell, clean, required, split_price};

/// ```text
/// Exp: 15-Dec-21 Swaptions Ref: 108.1    CDX HY37
///    K    |     Puts    Del |    Calls    Del |   Vol    Chg |  Prc Vol
///     108 |   52 /  70   55 |   40 /  58  -45 |  41.7   +1.5 |    6.1
/// ```
///
/// Темы нет: референсная цена берётся из строки экспирации.
/// Цена `bid / ask` разбита пробелами вокруг слэша.
pub struct ZzzGrammar {
    patterns: PatternSet,
    slash: Regex,
}

const NOISE: &[char] = &['|', '[', ']', '\u{a0}'];

impl ZzzGrammar {
    /// Компилирует шаблоны
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = PatternSet::compile(&[
            (
                LineKind::Expiry,
                r"^Exp: (?P<expiration_date>\d{2}-\w{3}-\d{2}) .*?\w+ \w+: (?P<ref_px>\d+.\d+)",
            ),
            (
                LineKind::TableHeader,
                r"^\s+(?P<strike_px>\w+)\s+\|\s+(?P<p_price>\w+)\s+(?P<p_delta>\w+)\s+\|\s+(?P<c_price>\w+)\s+(?P<c_delta>\w+)\s+\|\s+(?P<iv_spd>\w+)\s+(?P<chg>\w+)\s+\|\s+(?P<iv_px>\w+\s\w+)",
            ),
            (LineKind::TableRow, r"^\s*\d+[.]?\d*"),
        ])?;
        Ok(Self {
            patterns,
            slash: Regex::new(r"\s*/\s*")?,
        })
    }
}

impl SenderGrammar for ZzzGrammar {
    fn sender(&self) -> &'static str {
        "ZZZ"
    }

    fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    fn expiry_format(&self) -> &'static str {
        "%d-%b-%y"
    }

    fn on_expiry(&self, m: &Classified<'_, '_>, tpl: &mut QuoteTemplate) -> Result<(), DecodeError> {
        let raw = required(m, "expiration_date")?;
        tpl.expiration = Some(parse_date(raw, self.expiry_format())?);
        tpl.ref_px = Some(required(m, "ref_px")?.to_string());
        Ok(())
    }

    fn on_table_row(
        &self,
        line: &str,
        cols: &ColumnIndexMap,
        tpl: &QuoteTemplate,
    ) -> Result<LegPair, DecodeError> {
        let cleaned = clean(line, NOISE);
        let joined = self.slash.replace_all(&cleaned, "/");
        let tokens: Vec<&str> = joined.split_whitespace().collect();

        let common = QuoteLeg {
            strike_px: cell(cols.token(&tokens, "strike_px")?),
            iv_spd: cell(cols.token(&tokens, "iv_spd")?),
            iv_px: cell(cols.token(&tokens, "iv_px")?),
            ..QuoteLeg::default()
        };

        let (bid_price, ask_price) = split_price("p_price", cols.token(&tokens, "p_price")?)?;
        let put = QuoteLeg {
            bid_price,
            ask_price,
            delta: cell(cols.token(&tokens, "p_delta")?),
            ..common.clone()
        };

        let (bid_price, ask_price) = split_price("c_price", cols.token(&tokens, "c_price")?)?;
        let call = QuoteLeg {
            bid_price,
            ask_price,
            delta: cell(cols.token(&tokens, "c_delta")?),
            ..common
        };

        Ok([tpl.emit(OptionSide::Put, put), tpl.emit(OptionSide::Call, call)])
    }
}
