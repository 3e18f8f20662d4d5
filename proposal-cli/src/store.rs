//! TOML persistence for proposal session files.
//!
//! A proposal lives between CLI invocations as a single TOML file holding
//! the complete [`ProposalDocument`], id counter included, so a reloaded
//! session keeps issuing fresh ids. This is session plumbing, not a
//! database.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use proposal_core::ProposalDocument;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading or writing a proposal file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read proposal file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write proposal file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid proposal file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("cannot serialize proposal document: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Serializes a document to its TOML file form.
pub fn to_toml_string(doc: &ProposalDocument) -> Result<String, StoreError> {
    Ok(toml::to_string_pretty(doc)?)
}

/// Parses a document from TOML text. `path` is only used for error context.
fn from_toml_str(
    text: &str,
    path: &Path,
) -> Result<ProposalDocument, StoreError> {
    toml::from_str(text).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}

/// Loads a proposal document from `path`.
pub fn load(path: &Path) -> Result<ProposalDocument, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let doc = from_toml_str(&text, path)?;
    debug!(path = %path.display(), materials = doc.materials.len(), "proposal loaded");
    Ok(doc)
}

/// Saves a proposal document to `path`, replacing any existing file.
pub fn save(
    path: &Path,
    doc: &ProposalDocument,
) -> Result<(), StoreError> {
    let text = to_toml_string(doc)?;
    fs::write(path, text).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "proposal saved");
    Ok(())
}
