use crate::classifier::{LineKind, PatternSet};
use crate::columns::ColumnIndexMap;
use crate::error::DecodeError;
use crate::types::{OptionSide, QuoteLeg, QuoteTemplate};

use super::{LegPair, SUBJECT_PATTERN, SenderGrammar, cell, clean};

/// ```text
/// Subject: $$ CDX OPTIONS: HY37 5Y UPDATE - REF 108.125
/// EXPIRY: 15-DEC-2021 Fwd 107.89 / 320.8 Dv01 4.67
/// K [~Sprd]  |DEC21>PAY   Dlt |DEC21>RCV   Dlt |MidVol [SprdVol] Chg    b/e
/// 109.5 [287] |155.5 170.5 95% |  0.0 9.6    5% |  4.5% [ 32%]    -1.3%  6.05
/// ```
///
/// Bid и ask в отдельных колонках, у каждой ноги своя дельта.
pub struct YyyGrammar {
    patterns: PatternSet,
}

const NOISE: &[char] = &['|', '[', ']', '%'];

impl YyyGrammar {
    /// Компилирует шаблоны
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = PatternSet::compile(&[
            (LineKind::Subject, SUBJECT_PATTERN),
            (LineKind::Expiry, r"^EXPIRY: (?P<expiration_date>\d{2}-\w{3}-\d{4})"),
            (
                LineKind::TableHeader,
                r"^ *(?P<strike_px>\w) +\[.(?P<strike_spd>\w+)\] +\|(?P<p_bid_price>\w+)>(?P<p_ask_price>\w+) +(?P<p_delta>\w+) +\|(?P<c_bid_price>\w+)>(?P<c_ask_price>\w+) +(?P<c_delta>\w+) +\|(?P<mid_vol>\w+) +\[(?P<iv_spd>\w+)\] +(?P<chg>\w+) +(?P<iv_bps>.+)",
            ),
            (LineKind::TableRow, r"^ *\d+.\d+"),
        ])?;
        Ok(Self { patterns })
    }
}

impl SenderGrammar for YyyGrammar {
    fn sender(&self) -> &'static str {
        "YYY"
    }

    fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    fn expiry_format(&self) -> &'static str {
        "%d-%b-%Y"
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
            iv_spd: cell(cols.token(&tokens, "iv_spd")?),
            iv_bps: cell(cols.token(&tokens, "iv_bps")?),
            ..QuoteLeg::default()
        };

        let put = QuoteLeg {
            bid_price: cell(cols.token(&tokens, "p_bid_price")?),
            ask_price: cell(cols.token(&tokens, "p_ask_price")?),
            delta: cell(cols.token(&tokens, "p_delta")?),
            ..common.clone()
        };
        let call = QuoteLeg {
            bid_price: cell(cols.token(&tokens, "c_bid_price")?),
            ask_price: cell(cols.token(&tokens, "c_ask_price")?),
            delta: cell(cols.token(&tokens, "c_delta")?),
            ..common
        };

        Ok([tpl.emit(OptionSide::Put, put), tpl.emit(OptionSide::Call, call)])
    }
}
