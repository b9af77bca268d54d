use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("layout has no rows")]
    EmptyLayout,

    #[error("row {0} has no keys")]
    EmptyRow(usize),

    #[error("key at ({row}, {col}) has an empty label")]
    EmptyLabel { row: usize, col: usize },

    #[error("key at ({row}, {col}) is special but defines a ctrl character")]
    CtrlOnSpecial { row: usize, col: usize },

    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
