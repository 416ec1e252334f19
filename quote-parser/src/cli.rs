use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::config;

/// Quote Parser - достаёт котировки опционов из текстовых писем отправителей
/// и складывает их в одну таблицу.
#[derive(Parser, Debug, Clone)]
#[command(name = "quote-parser", version, about)]
pub(crate) struct Args {
    /// Каталог с файлами писем
    #[arg(long, default_value = config::INPUT_DIR)]
    pub(crate) dir: PathBuf,

    /// Шаблон имени файла (glob), например "hycdx_option_quotes_*.txt"
    #[arg(long, default_value = config::FILE_PATTERN)]
    pub(crate) pattern: String,

    /// Куда писать таблицу (CSV)
    #[arg(long, short, default_value = config::OUTPUT_FILE)]
    pub(crate) output: PathBuf,

    /// Отправитель, цены которого уже в итоговых единицах. Можно повторять.
    #[arg(long = "no-rescale-sender", default_value = config::NO_RESCALE_SENDER)]
    pub(crate) no_rescale_senders: Vec<String>,

    /// Делитель цен остальных отправителей
    #[arg(long, default_value_t = config::PRICE_DIVISOR)]
    pub(crate) price_divisor: f64,

    /// Писать исходные текстовые значения, без перевода в числа
    #[arg(long)]
    pub(crate) raw: bool,

    /// Завершаться с ошибкой, если хотя бы один файл не разобрался
    #[arg(long)]
    pub(crate) strict: bool,
}

impl Args {
    /// Валидация аргументов (каталог существует, делитель положительный и т.д.)
    pub(crate) fn validate(&self) -> Result<()> {
        let md = std::fs::metadata(&self.dir)
            .with_context(|| format!("input directory not found: {:?}", self.dir))?;
        if !md.is_dir() {
            bail!("--dir must point to a directory: {:?}", self.dir);
        }

        if self.pattern.trim().is_empty() {
            bail!("--pattern is empty");
        }

        if !(self.price_divisor.is_finite() && self.price_divisor > 0.0) {
            bail!("--price-divisor must be a positive number (got: {})", self.price_divisor);
        }

        if self.no_rescale_senders.iter().any(|s| s.trim().is_empty()) {
            bail!("--no-rescale-sender must not be empty");
        }

        Ok(())
    }
}
