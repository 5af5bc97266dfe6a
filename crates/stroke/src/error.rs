use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum StrokeError {
    /// The pose has fewer landmarks than the requested anatomical index needs.
    MissingLandmark { index: usize, len: usize },
    /// A landmark coordinate is NaN or infinite.
    NonFinite { index: usize },
    Io(String),
    Parse(String),
}

impl fmt::Display for StrokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeError::MissingLandmark { index, len } => {
                write!(f, "missing landmark {index} (pose has {len})")
            }
            StrokeError::NonFinite { index } => {
                write!(f, "landmark {index} has a non-finite coordinate")
            }
            StrokeError::Io(msg) => write!(f, "io error: {msg}"),
            StrokeError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for StrokeError {}

impl From<std::io::Error> for StrokeError {
    fn from(err: std::io::Error) -> Self {
        StrokeError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StrokeError {
    fn from(err: serde_json::Error) -> Self {
        StrokeError::Parse(err.to_string())
    }
}
