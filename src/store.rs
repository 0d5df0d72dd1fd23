//! Model artifact persistence.

use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::model::Model;
use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("model artifact not found at `{}`", .0.display())]
    ModelNotFound(PathBuf),

    #[error("failed to parse the model artifact")]
    CorruptArtifact(#[from] rmp_serde::decode::Error),

    #[error("failed to serialize the model")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Serializes the model and overwrites the artifact at `path`.
pub fn save(model: &Model, path: &Path) -> StdResult<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, rmp_serde::to_vec(model)?)?;
    debug!(path = ?path, "saved");
    Ok(())
}

/// Reads the artifact at `path` back into an equivalent model.
pub fn load(path: &Path) -> StdResult<Model, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::ModelNotFound(path.to_path_buf()));
        }
        Err(error) => return Err(error.into()),
    };
    Ok(rmp_serde::from_slice(&bytes)?)
}
