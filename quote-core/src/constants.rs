/// Формат даты в общем заголовке письма: `12/10/21`
pub const HEADER_DATE_FORMAT: &str = "%m/%d/%y";

/// Канонический формат даты на выходе: `10-Dec-21`
pub const CANONICAL_DATE_FORMAT: &str = "%d-%b-%y";

/// Отправитель, который уже присылает цены в итоговых единицах
pub const DEFAULT_NO_RESCALE_SENDER: &str = "XXX";

/// Остальные отправители шлют цены в сотых долях
pub const DEFAULT_PRICE_DIVISOR: f64 = 100.0;

/// Заголовки выходной таблицы. Порядок - контракт с writer'ом.
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "Date",
    "Time",
    "Firm",
    "Expiration",
    "Option Type",
    "Strike Px",
    "Strike Spd",
    "Bid Price",
    "Ask Price",
    "Delta",
    "Implied Vol Spd",
    "Implied Vol bps",
    "Implied Vol px",
    "Ref Px",
];
