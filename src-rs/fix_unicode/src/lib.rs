use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Literal escape sequences and their replacements, applied in this order.
pub const REPLACEMENTS: [(&str, &str); 3] = [
    ("=\\u003e", "=>"),
    ("\\u003c", "<"),
    ("\\u003e", ">"),
];

#[derive(Debug, Error)]
pub enum FixError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn fix_escapes(content: &str) -> (String, usize) {
    let mut fixed = content.to_string();
    let mut replaced = 0;
    for (from, to) in REPLACEMENTS {
        let hits = fixed.matches(from).count();
        if hits > 0 {
            fixed = fixed.replace(from, to);
            replaced += hits;
        }
    }
    (fixed, replaced)
}

/// Rewrites `path` in place and returns how many sequences were replaced.
pub fn fix_file(path: &Path) -> Result<usize, FixError> {
    let content = fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (fixed, replaced) = fix_escapes(&content);
    debug!(path = %path.display(), replaced, "fixed escape sequences");
    fs::write(path, fixed).map_err(|source| FixError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(replaced)
}
