use chrono::NaiveDate;
use serde::Serialize;

use crate::dates;

/// Сторона опциона
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OptionSide {
    /// пут (Pay)
    #[serde(rename = "P")]
    Put,
    /// колл (Rec)
    #[serde(rename = "C")]
    Call,
}

/// Факты уровня письма: заголовок, тема, экспирация.
/// Одинаковы для всех записей одного файла.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteTemplate {
    /// токен отправителя из заголовка
    pub sender: String,
    /// дата письма
    pub date: NaiveDate,
    /// `HH:MM:SS`
    pub time: String,
    /// дата экспирации из строки expiry
    pub expiration: Option<NaiveDate>,
    /// референсная цена (из темы или строки expiry)
    pub ref_px: Option<String>,
}

impl QuoteTemplate {
    /// Собирает готовую запись из фактов письма и значений одной ноги.
    pub fn emit(&self, side: OptionSide, leg: QuoteLeg) -> QuoteRecord {
        QuoteRecord {
            date: self.date,
            time: self.time.clone(),
            sender: self.sender.clone(),
            expiration: self.expiration,
            side,
            strike_px: leg.strike_px,
            strike_spd: leg.strike_spd,
            bid_price: leg.bid_price,
            ask_price: leg.ask_price,
            delta: leg.delta,
            iv_spd: leg.iv_spd,
            iv_bps: leg.iv_bps,
            iv_px: leg.iv_px,
            ref_px: self.ref_px.clone(),
        }
    }
}

/// Значения одной ноги строки таблицы.
/// Создаётся заново на каждую ногу, поэтому старые значения не протекают.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct QuoteLeg {
    pub strike_px: Option<String>,
    pub strike_spd: Option<String>,
    pub bid_price: Option<String>,
    pub ask_price: Option<String>,
    pub delta: Option<String>,
    pub iv_spd: Option<String>,
    pub iv_bps: Option<String>,
    pub iv_px: Option<String>,
}

/// Одна распознанная котировка (пут или колл) в текстовом виде.
/// `None` - значение отсутствует, в ноль не превращается.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct QuoteRecord {
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
    pub strike_px: Option<String>,
    #[serde(rename = "Strike Spd")]
    pub strike_spd: Option<String>,
    #[serde(rename = "Bid Price")]
    pub bid_price: Option<String>,
    #[serde(rename = "Ask Price")]
    pub ask_price: Option<String>,
    #[serde(rename = "Delta")]
    pub delta: Option<String>,
    #[serde(rename = "Implied Vol Spd")]
    pub iv_spd: Option<String>,
    #[serde(rename = "Implied Vol bps")]
    pub iv_bps: Option<String>,
    #[serde(rename = "Implied Vol px")]
    pub iv_px: Option<String>,
    #[serde(rename = "Ref Px")]
    pub ref_px: Option<String>,
}

impl QuoteRecord {
    /// Все поля ноги пусты (колл без страйка у WWW)
    pub fn is_empty_leg(&self) -> bool {
        [
            &self.strike_px,
            &self.strike_spd,
            &self.bid_price,
            &self.ask_price,
            &self.delta,
            &self.iv_spd,
            &self.iv_bps,
            &self.iv_px,
        ]
        .iter()
        .all(|v| v.is_none())
    }
}
