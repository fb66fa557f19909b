//! File discovery and reading.
//!
//! A folder contributes, in this order:
//!
//! 1. every `*.log`
//! 2. the Assimilation client's `assimilationLogs.txt`
//! 3. rotated logs such as `app.log.1`, `app.log.2` (numeric suffix only)
//!
//! Each group is sorted by path and a path is never returned twice. The
//! audit log a previous run wrote into the same folder is not an input.

use fealog_core::{export::AUDIT_FILE, SourceFile};
use glob::glob;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ASSIMILATION_LOG_NAME: &str = "assimilationLogs.txt";

const LOG_GLOB: &str = "*.log";
const ROTATED_GLOB: &str = "*.log.*";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot open input folder {path}: {source}")]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input path {path} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FeedError {
    /// The file or folder the error is about, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FeedError::Glob { .. } => None,
            FeedError::FolderUnreadable { path, .. }
            | FeedError::NotADirectory { path }
            | FeedError::Read { path, .. } => Some(path),
        }
    }
}

/// What [`discover`] found in a folder.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Entries that matched a pattern but could not be inspected. Each is a
    /// [`FeedError::Read`].
    pub unreadable: Vec<FeedError>,
}

/// List the log files in `folder`, in a stable order.
///
/// Fails when `folder` is missing or is not a directory. Entries that cannot
/// be inspected are returned in [`Discovery::unreadable`] instead of failing
/// the whole listing.
pub fn discover(folder: &Path) -> Result<Discovery, FeedError> {
    let metadata = std::fs::metadata(folder).map_err(|source| FeedError::FolderUnreadable {
        path: folder.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(FeedError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }

    let mut unreadable = Vec::new();
    let mut files = matching(folder, LOG_GLOB, &mut unreadable)?;
    files.extend(matching(folder, ASSIMILATION_LOG_NAME, &mut unreadable)?);
    files.extend(
        matching(folder, ROTATED_GLOB, &mut unreadable)?
            .into_iter()
            .filter(|p| has_numeric_extension(p)),
    );

    let mut seen = std::collections::HashSet::new();
    files.retain(|p| p.file_name().is_none_or(|n| n != AUDIT_FILE) && seen.insert(p.clone()));

    tracing::debug!(
        folder = %folder.display(),
        files = files.len(),
        unreadable = unreadable.len(),
        "discovered log files"
    );
    Ok(Discovery { files, unreadable })
}

/// Read `path` into lines. Invalid UTF-8 is replaced, not rejected.
pub fn read_source(path: &Path) -> Result<SourceFile, FeedError> {
    let bytes = std::fs::read(path).map_err(|source| FeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&*text);

    Ok(SourceFile::from_text(path.display().to_string(), text))
}

fn matching(
    folder: &Path,
    pattern: &str,
    unreadable: &mut Vec<FeedError>,
) -> Result<Vec<PathBuf>, FeedError> {
    let escaped = glob::Pattern::escape(&folder.to_string_lossy());
    let full = Path::new(&escaped).join(pattern).to_string_lossy().into_owned();

    let entries = glob(&full).map_err(|source| FeedError::Glob {
        pattern: full.clone(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => unreadable.push(unreadable_entry(e)),
        }
    }

    paths.sort();
    Ok(paths)
}

fn unreadable_entry(error: glob::GlobError) -> FeedError {
    let path = error.path().to_path_buf();
    tracing::warn!(path = %path.display(), error = %error.error(), "cannot inspect directory entry");
    FeedError::Read {
        path,
        source: error.into_error(),
    }
}

fn has_numeric_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_digit()))
}
