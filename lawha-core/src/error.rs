//! Error types for the Lawha engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no key at position ({row}, {col})")]
    InvalidKeyPosition { row: usize, col: usize },

    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    #[error("layout error: {0}")]
    Layout(#[from] crate::layouts::LayoutError),

    #[error("settings store error: {0}")]
    Store(#[from] crate::settings::StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
