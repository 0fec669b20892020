use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TleError {
    #[error("tle text is empty")]
    Empty,
    #[error("expected two tle lines, found {0}")]
    MissingLines(usize),
    #[error("line {line}: {message}")]
    Malformed { line: u8, message: String },
    #[error("line {line}: checksum mismatch (expected {expected}, computed {computed})")]
    Checksum { line: u8, expected: u32, computed: u32 },
    #[error("catalog numbers differ between lines ({0} vs {1})")]
    CatalogMismatch(u32, u32),
}

impl TleError {
    pub(crate) fn malformed(line: u8, message: impl Into<String>) -> Self {
        TleError::Malformed {
            line,
            message: message.into(),
        }
    }
}
