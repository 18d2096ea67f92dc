use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InkError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sample text not found: {0}")]
    SampleTextMissing(PathBuf),
    #[error("font list not found: {0}")]
    FontListMissing(PathBuf),
    #[error("font list is empty: {0}")]
    FontListEmpty(PathBuf),
    #[error("unusable face in {path} (face {face_index}): {reason}")]
    FaceUnusable {
        path: PathBuf,
        face_index: u32,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, InkError>;
