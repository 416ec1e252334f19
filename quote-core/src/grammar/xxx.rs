use crate::classifier::{LineKind, PatternSet};
use crate::columns::ColumnIndexMap;
use crate::error::DecodeError;
use crate::types::{OptionSide, QuoteLeg, QuoteTemplate};

use super::{LegPair, SUBJECT_PATTERN, SenderGrammar, cell, clean, split_price};

/// ```text
/// Subject: HY37 5y SWAPTION UPDATE - Ref 108 (320.43)
/// Expiry 15Dec21 (107.78 323.85)
/// Stk   Sprd  |     Pay      Delta       Rec      Vol   Vol Chg  Vol Bpd  Tail  |
/// 110.5 266.8 | 2.650/2.800  -99.9      --/--     30.2    1.6      6.2    99.9  |
/// ```
///
/// Pay = пут, Rec = колл, цены `bid/ask` одним токеном, дельта общая.
/// Дефисы в строке таблицы - шум, как и `|`: дельта пута приходит без знака.
pub struct XxxGrammar {
    patterns: PatternSet,
}

const NOISE: &[char] = &['|', '-'];

impl XxxGrammar {
    /// Компилирует шаблоны
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = PatternSet::compile(&[
            (LineKind::Subject, SUBJECT_PATTERN),
            (LineKind::Expiry, r"^Expiry (?P<expiration_date>\d{2}\w{3}\d{2})"),
            (
                LineKind::TableHeader,
                r"^(?P<strike_px>\w+) +(?P<strike_spd>\w+) +\| +(?P<p_price>\w+) +(?P<delta>\w+) +(?P<c_price>\w+) +(?P<iv_spd>\w+) +(?P<vol_chg>\w+ \w+) +(?P<iv_bps>\w+ \w+) +(?P<tail>\w+)",
            ),
            (LineKind::TableRow, r"^ *\d+.\d+"),
        ])?;
        Ok(Self { patterns })
    }
}

impl SenderGrammar for XxxGrammar {
    fn sender(&self) -> &'static str {
        "XXX"
    }

    fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    fn expiry_format(&self) -> &'static str {
        "%d%b%y"
    }

    fn on_table_row(
        &self,
        line: &str,
        cols: &ColumnIndexMap,
        tpl: &QuoteTemplate,
    ) -> Result<LegPair, DecodeError> {
        let cleaned = clean(line, NOISE);
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();

        let common = QuoteLeg {
            strike_px: cell(cols.token(&tokens, "strike_px")?),
            strike_spd: cell(cols.token(&tokens, "strike_spd")?),
            delta: cell(cols.token(&tokens, "delta")?),
            iv_spd: cell(cols.token(&tokens, "iv_spd")?),
            iv_bps: cell(cols.token(&tokens, "iv_bps")?),
            ..QuoteLeg::default()
        };

        let (bid_price, ask_price) = split_price("p_price", cols.token(&tokens, "p_price")?)?;
        let put = QuoteLeg {
            bid_price,
            ask_price,
            ..common.clone()
        };

        let (bid_price, ask_price) = split_price("c_price", cols.token(&tokens, "c_price")?)?;
        let call = QuoteLeg {
            bid_price,
            ask_price,
            ..common
        };

        Ok([tpl.emit(OptionSide::Put, put), tpl.emit(OptionSide::Call, call)])
    }
}
