//! Flat-file plumbing around the ranking core.
//!
//! Corpora are directories of plain-text files, one document per file, identified
//! by file name. Rankings are written either as one text file per requirement
//! (`<stem>_ranked_resumes.txt`, one `"<candidate> - Score: <score>"` line per
//! candidate) or as a single CBOR document.

pub mod error;

pub use error::StorageError;

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::{debug, info, warn};

use crate::{
    document::Document,
    pipeline::{Rankings, RequirementRanking},
};

/// Suffix of per-requirement text output files
pub const RANKING_FILE_SUFFIX: &str = "_ranked_resumes.txt";
/// File name of the CBOR output
pub const CBOR_FILE_NAME: &str = "rankings.cbor";

/// Persistence format of the rankings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// one text file per requirement
    #[default]
    Text,
    /// single `rankings.cbor`
    Cbor,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "cbor" => Ok(OutputFormat::Cbor),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Load every `*.{extension}` file of `dir` as a document.
/// Files are ordered by name so runs are reproducible across platforms.
pub fn load_corpus(dir: &Path, extension: &str) -> Result<Vec<Document>, StorageError> {
    if !dir.is_dir() {
        return Err(StorageError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    let read_err = |source| StorageError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            paths.push(path);
        } else {
            warn!(path = %path.display(), "skipping file with unexpected extension");
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|source| StorageError::Read {
            path: path.clone(),
            source,
        })?;
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        documents.push(Document::new(id, text));
    }
    debug!(dir = %dir.display(), documents = documents.len(), "loaded corpus");
    Ok(documents)
}

/// `job.txt` -> `job_ranked_resumes.txt`; other names get the suffix appended
pub fn ranking_file_name(requirement_id: &str) -> String {
    match requirement_id.strip_suffix(".txt") {
        Some(stem) => format!("{stem}{RANKING_FILE_SUFFIX}"),
        None => format!("{requirement_id}{RANKING_FILE_SUFFIX}"),
    }
}

/// One line per candidate: `"<candidate> - Score: <score>"`
pub fn render_text(ranking: &RequirementRanking, precision: usize) -> String {
    ranking
        .candidates
        .iter()
        .map(|c| format!("{} - Score: {:.*}\n", c.candidate_id, precision, c.score))
        .collect()
}

/// Write all rankings into `dir`, returning the written paths.
/// Files are staged in a temporary directory inside `dir` and moved into place
/// only once every one of them was written; on failure no output file is left behind.
pub fn write_rankings(
    dir: &Path,
    rankings: &Rankings,
    format: OutputFormat,
    precision: usize,
) -> Result<Vec<PathBuf>, StorageError> {
    if dir.exists() && !dir.is_dir() {
        return Err(StorageError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let files: Vec<(String, Vec<u8>)> = match format {
        OutputFormat::Text => rankings
            .requirements
            .iter()
            .map(|r| {
                (
                    ranking_file_name(&r.requirement_id),
                    render_text(r, precision).into_bytes(),
                )
            })
            .collect(),
        OutputFormat::Cbor => vec![(CBOR_FILE_NAME.to_string(), serde_cbor::to_vec(rankings)?)],
    };

    let dir_err = |source| StorageError::Write {
        path: dir.to_path_buf(),
        source,
    };
    fs::create_dir_all(dir).map_err(dir_err)?;
    let staging = tempfile::Builder::new()
        .prefix(".rankings-")
        .tempdir_in(dir)
        .map_err(dir_err)?;

    for (name, bytes) in &files {
        let path = staging.path().join(name);
        fs::write(&path, bytes).map_err(|source| StorageError::Write { path, source })?;
    }

    let mut written: Vec<PathBuf> = Vec::with_capacity(files.len());
    for (name, _) in &files {
        let target = dir.join(name);
        if let Err(source) = fs::rename(staging.path().join(name), &target) {
            for path in &written {
                if let Err(err) = fs::remove_file(path) {
                    warn!(path = %path.display(), error = %err, "failed to roll back ranking file");
                }
            }
            return Err(StorageError::Write {
                path: target,
                source,
            });
        }
        written.push(target);
    }
    debug!(staging = %staging.path().display(), "moved staged rankings into place");
    info!(dir = %dir.display(), files = written.len(), "wrote rankings");
    Ok(written)
}
