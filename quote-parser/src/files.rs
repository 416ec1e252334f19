use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum InputError {
    #[error("invalid file pattern: {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot access {path:?} while listing input files")]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// в том числе невалидный UTF-8
    #[error("failed to read file: {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) type Result<T> = std::result::Result<T, InputError>;

/// Файлы писем в каталоге по glob-шаблону, в лексикографическом порядке.
pub(crate) fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    // сам каталог может содержать спецсимволы glob
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let full = Path::new(&base).join(pattern).to_string_lossy().into_owned();

    let paths = glob::glob(&full).map_err(|source| InputError::Pattern {
        pattern: full.clone(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| InputError::Listing {
            path: e.path().to_path_buf(),
            source: e.into(),
        })?;
        if path.is_file() {
            out.push(path);
        }
    }

    out.sort();
    Ok(out)
}

/// Строки файла как UTF-8, без переводов строк
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    let read_err = |source| InputError::ReadFile {
        path: path.to_path_buf(),
        source,
    };

    let f = File::open(path).map_err(read_err)?;
    BufReader::new(f)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)
}
