use crate::classifier::{LineKind, PatternSet};
use crate::columns::ColumnIndexMap;
use crate::error::DecodeError;
use crate::types::{OptionSide, QuoteLeg, QuoteTemplate};

use super::{LegPair, SUBJECT_PATTERN, SenderGrammar, cell, clean, split_price};

/// ```text
/// Subject: CDX Options: CDX.HY S37/36 5Y Dec-Jun [ref 108.1] - Update
/// CDX Options: HY (S37V1) 15-Dec-21 ** Fwd @107.881, Delta @108.1
///   K  |    Rec    Delta Vol  Chg B/E|   K  |     Pay     Delta Vol  Chg  B/E
///  111 |  0.0/10.0   0%   32  0.4 5.3|  109 | 114.1/130.1  86%   37 -0.1  6.8
/// ```
///
/// Слева блок коллов, справа блок путов, у каждого свой страйк.
/// Страйк колла `-` значит, что колла на этой строке нет.
pub struct WwwGrammar {
    patterns: PatternSet,
}

const NOISE: &[char] = &['|', '%'];

impl WwwGrammar {
    /// Компилирует шаблоны
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = PatternSet::compile(&[
            (LineKind::Subject, SUBJECT_PATTERN),
            (
                LineKind::Expiry,
                r"^CDX \w+: \w+ \(\w+\) (?P<expiration_date>\d{2}-\w{3}-\d{2})",
            ),
            (
                LineKind::TableHeader,
                r"^ +(?P<c_strike_px>\w+) +\| +(?P<c_price>\w+) +(?P<c_delta>\w+) +(?P<c_iv_spd>\w+) +(?P<c_chg>\w+) +(?P<c_iv_bps>\w+/\w+)\| +(?P<p_strike_px>\w+) +\| +(?P<p_price>\w+) +(?P<p_delta>\w+) +(?P<p_iv_spd>\w+) +(?P<p_chg>\w+) +(?P<p_iv_bps>\w+/\w+)",
            ),
            (LineKind::TableRow, r"^ *\d+[.]?\d*|^ +- +"),
        ])?;
        Ok(Self { patterns })
    }
}

impl SenderGrammar for WwwGrammar {
    fn sender(&self) -> &'static str {
        "WWW"
    }

    fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    fn expiry_format(&self) -> &'static str {
        "%d-%b-%y"
    }

    fn on_table_row(
        &self,
        line: &str,
        cols: &ColumnIndexMap,
        tpl: &QuoteTemplate,
    ) -> Result<LegPair, DecodeError> {
        let cleaned = clean(line, NOISE);
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();

        let call_strike = cell(cols.token(&tokens, "c_strike_px")?);

        // без колла остальные колонки колла могут быть пустыми: блок путов ищем с конца
        let shift = match call_strike {
            Some(_) => 0,
            None => cols.len().saturating_sub(tokens.len()),
        };
        let put_token = |field: &'static str| shifted_token(cols, &tokens, field, shift);

        let (bid_price, ask_price) = split_price("p_price", put_token("p_price")?)?;
        let put = QuoteLeg {
            strike_px: cell(put_token("p_strike_px")?),
            bid_price,
            ask_price,
            delta: cell(put_token("p_delta")?),
            iv_spd: cell(put_token("p_iv_spd")?),
            iv_bps: cell(put_token("p_iv_bps")?),
            ..QuoteLeg::default()
        };

        let call = match call_strike {
            Some(strike_px) => {
                let (bid_price, ask_price) =
                    split_price("c_price", cols.token(&tokens, "c_price")?)?;
                QuoteLeg {
                    strike_px: Some(strike_px),
                    bid_price,
                    ask_price,
                    delta: cell(cols.token(&tokens, "c_delta")?),
                    iv_spd: cell(cols.token(&tokens, "c_iv_spd")?),
                    iv_bps: cell(cols.token(&tokens, "c_iv_bps")?),
                    ..QuoteLeg::default()
                }
            }
            None => QuoteLeg::default(),
        };

        Ok([tpl.emit(OptionSide::Put, put), tpl.emit(OptionSide::Call, call)])
    }
}

fn shifted_token<'t>(
    cols: &ColumnIndexMap,
    tokens: &[&'t str],
    field: &'static str,
    shift: usize,
) -> Result<&'t str, DecodeError> {
    let index = cols.index(field)?;
    index
        .checked_sub(shift)
        .and_then(|i| tokens.get(i))
        .copied()
        .ok_or(DecodeError::MissingToken {
            field,
            index,
            tokens: tokens.len(),
        })
}
