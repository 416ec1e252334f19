//! Точка входа `quote-parser`.
//!
//! Жизненный цикл:
//! - парсинг CLI и валидация аргументов
//! - поиск файлов писем по glob-шаблону
//! - разбор каждого файла отдельно (ошибка одного файла не останавливает остальные)
//! - перевод в числа и приведение цен (если не `--raw`)
//! - запись таблицы в CSV и итоговое число записей

mod batch;
mod cli;
mod config;
mod files;
mod writer;

use anyhow::bail;
use clap::Parser;
use log::{info, warn};
use quote_core::{QuoteParser, normalize};

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug/trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    args.validate()?;

    let paths = files::discover(&args.dir, &args.pattern)?;
    if paths.is_empty() {
        warn!("no files match {:?} in {:?}", args.pattern, args.dir);
    }
    info!("Starting quote-parser: files={}, output={:?}", paths.len(), args.output);

    let parser = QuoteParser::new()?;
    let report = batch::parse_files(&parser, &paths);

    println!("Total records added : {}", report.records.len());

    if args.raw {
        writer::write_file(&args.output, &report.records)?;
    } else {
        let rows = normalize(&report.records, &config::rescale_policy(&args));
        writer::write_file(&args.output, &rows)?;
    }
    info!("wrote {:?}", args.output);

    if !report.failed.is_empty() {
        warn!(
            "{} of {} files failed, {} abandoned",
            report.failed.len(),
            report.files,
            report.abandoned
        );
        if args.strict {
            bail!("{} of {} files failed to parse", report.failed.len(), report.files);
        }
    }

    Ok(())
}
