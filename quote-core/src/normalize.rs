use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::{DEFAULT_NO_RESCALE_SENDER, DEFAULT_PRICE_DIVISOR};
use crate::dates;
use crate::types::{OptionSide, QuoteRecord};

/// Правило приведения цен к единым единицам.
///
/// Отправители из `no_rescale` присылают цены в итоговых единицах,
/// остальные - в долях, и их bid/ask делятся на `divisor`.
#[derive(Debug, Clone, PartialEq)]
pub struct RescalePolicy {
    no_rescale: BTreeSet<String>,
    divisor: f64,
}

impl Default for RescalePolicy {
    fn default() -> Self {
        Self::new([DEFAULT_NO_RESCALE_SENDER], DEFAULT_PRICE_DIVISOR)
    }
}

impl RescalePolicy {
    /// `divisor` должен быть положительным, это проверяет вызывающий
    pub fn new<I, S>(no_rescale: I, divisor: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            no_rescale: no_rescale.into_iter().map(Into::into).collect(),
            divisor,
        }
    }

    /// Нужно ли делить цены этого отправителя
    pub fn rescales(&self, sender: &str) -> bool {
        !self.no_rescale.contains(sender)
    }

    /// Делитель цен
    pub fn divisor(&self) -> f64 {
        self.divisor
    }
}

/// Запись котировки с числовыми полями. `None` - значение отсутствует
/// или не разбирается как число.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct NormalizedQuote {
    #[serde(rename = "Date", serialize_with = "dates::serialize_canonical")]
    pub date: NaiveDate,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Firm")]
    pub sender: String,
    #[serde(rename = "Expiration", serialize_with = "dates::serialize_canonical_opt")]
    pub expiration: Option<NaiveDate>,
    #[serde(rename = "Option Type")]
    pub side: OptionSide,
    #[serde(rename = "Strike Px")]
    pub strike_px: Option<f64>,
    #[serde(rename = "Strike Spd")]
    pub strike_spd: Option<f64>,
    #[serde(rename = "Bid Price")]
    pub bid_price: Option<f64>,
    #[serde(rename = "Ask Price")]
    pub ask_price: Option<f64>,
    #[serde(rename = "Delta")]
    pub delta: Option<f64>,
    #[serde(rename = "Implied Vol Spd")]
    pub iv_spd: Option<f64>,
    #[serde(rename = "Implied Vol bps")]
    pub iv_bps: Option<f64>,
    #[serde(rename = "Implied Vol px")]
    pub iv_px: Option<f64>,
    #[serde(rename = "Ref Px")]
    pub ref_px: Option<f64>,
}

/// Текст -> число. Нечисловой текст - `None`, не ноль и не ошибка.
pub fn to_number(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Переводит весь набор записей в числа и приводит цены к единым единицам.
pub fn normalize(records: &[QuoteRecord], policy: &RescalePolicy) -> Vec<NormalizedQuote> {
    records.iter().map(|r| normalize_one(r, policy)).collect()
}

fn normalize_one(r: &QuoteRecord, policy: &RescalePolicy) -> NormalizedQuote {
    let num = |v: &Option<String>| to_number(v.as_deref());
    let price = |v: &Option<String>| {
        let p = num(v);
        if policy.rescales(&r.sender) {
            p.map(|p| p / policy.divisor())
        } else {
            p
        }
    };

    NormalizedQuote {
        date: r.date,
        time: r.time.clone(),
        sender: r.sender.clone(),
        expiration: r.expiration,
        side: r.side,
        strike_px: num(&r.strike_px),
        strike_spd: num(&r.strike_spd),
        bid_price: price(&r.bid_price),
        ask_price: price(&r.ask_price),
        delta: num(&r.delta),
        iv_spd: num(&r.iv_spd),
        iv_bps: num(&r.iv_bps),
        iv_px: num(&r.iv_px),
        ref_px: num(&r.ref_px),
    }
}
