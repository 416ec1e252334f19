use std::path::{Path, PathBuf};

use log::{error, info, warn};
use quote_core::{FileStatus, ParsedFile, QuoteParser, QuoteRecord};

use crate::files;

/// Итог прогона по набору файлов
#[derive(Debug, Default)]
pub(crate) struct BatchReport {
    pub(crate) records: Vec<QuoteRecord>,
    pub(crate) files: usize,
    pub(crate) abandoned: usize,
    pub(crate) failed: Vec<PathBuf>,
}

/// Разбирает файлы по очереди. Ошибка одного файла не мешает остальным:
/// она логируется, а записи этого файла в итог не попадают.
pub(crate) fn parse_files(parser: &QuoteParser, paths: &[PathBuf]) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        report.files += 1;

        let file = match parse_file(parser, path) {
            Ok(file) => file,
            Err(e) => {
                error!("{}: {e:#}", path.display());
                report.failed.push(path.clone());
                continue;
            }
        };

        match &file.status {
            FileStatus::Completed => {}
            FileStatus::NoHeader => warn!("{}: no message header found", path.display()),
            FileStatus::Abandoned { sender, line_no } => {
                warn!(
                    "{}: unknown sender {sender:?} at line {line_no}; rest of file skipped",
                    path.display()
                );
                report.abandoned += 1;
            }
        }

        info!("{}: {} records", path.display(), file.records.len());
        report.records.extend(file.records);
    }

    report
}

fn parse_file(parser: &QuoteParser, path: &Path) -> anyhow::Result<ParsedFile> {
    let lines = files::read_lines(path)?;
    Ok(parser.parse_lines(&lines)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ZZZ_FILE: &str = "From: ZZZ At: 12/10/21 09:15:02 EST-5:00
   K    |     Puts    Del |    Calls    Del |   Vol    Chg |  Prc Vol
    108 |   52 /  70   55 |   40 /  58  -45 |  41.7   +1.5 |    6.1
";

    const BROKEN_FILE: &str = "From: ZZZ At: 12/10/21 09:15:02 EST-5:00
   K    |     Puts    Del |    Calls    Del |   Vol    Chg |  Prc Vol
    108 |   52 /  70   55 |   40 /  58  -45 |  41.7   +1.5 |    6.1
    109 |   60 /  80
";

    #[test]
    fn one_bad_file_does_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("a.txt");
        let good = dir.path().join("b.txt");
        let foreign = dir.path().join("c.txt");
        fs::write(&bad, BROKEN_FILE).unwrap();
        fs::write(&good, ZZZ_FILE).unwrap();
        fs::write(&foreign, "From: QQQ At: 12/10/21 09:15:02 EST-5:00\n").unwrap();

        let parser = QuoteParser::new().unwrap();
        let report = parse_files(&parser, &[bad.clone(), good, foreign]);

        assert_eq!(report.files, 3);
        assert_eq!(report.failed, vec![bad]);
        assert_eq!(report.abandoned, 1);
        // записи сломанного файла не попадают в итог
        assert_eq!(report.records.len(), 2);
    }

    #[test]
    fn unreadable_file_is_counted_as_failed() {
        let parser = QuoteParser::new().unwrap();
        let missing = PathBuf::from("/definitely/not/here.txt");

        let report = parse_files(&parser, &[missing.clone()]);
        assert_eq!(report.failed, vec![missing]);
        assert!(report.records.is_empty());
    }
}
