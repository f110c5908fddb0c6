//! Error types for Evolens operations.
//!
//! Provides structured error handling instead of panics.

use std::error::Error;
use std::fmt;

/// Result type for Evolens operations.
pub type Result<T> = std::result::Result<T, EvolensError>;

/// Errors that can occur during Evolens operations.
#[derive(Debug, Clone)]
pub enum EvolensError {
    /// Snapshot format errors (malformed or incomplete input).
    Format(FormatError),
    /// Specimen selection errors.
    Selection(SelectionError),
    /// Training history analytics errors.
    Analysis(AnalysisError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for EvolensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolensError::Format(e) => write!(f, "Format error: {}", e),
            EvolensError::Selection(e) => write!(f, "Selection error: {}", e),
            EvolensError::Analysis(e) => write!(f, "Analysis error: {}", e),
            EvolensError::Io(msg) => write!(f, "I/O error: {}", msg),
            EvolensError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for EvolensError {}

impl From<std::io::Error> for EvolensError {
    fn from(e: std::io::Error) -> Self {
        EvolensError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for EvolensError {
    fn from(e: serde_json::Error) -> Self {
        EvolensError::Serialization(e.to_string())
    }
}

impl From<FormatError> for EvolensError {
    fn from(e: FormatError) -> Self {
        EvolensError::Format(e)
    }
}

impl From<SelectionError> for EvolensError {
    fn from(e: SelectionError) -> Self {
        EvolensError::Selection(e)
    }
}

impl From<AnalysisError> for EvolensError {
    fn from(e: AnalysisError) -> Self {
        EvolensError::Analysis(e)
    }
}

/// Snapshot format errors.
///
/// Referential problems (a connection naming an absent node) are folded in
/// here: a dangling reference makes the snapshot malformed as a whole.
#[derive(Debug, Clone)]
pub enum FormatError {
    /// A tagged line has fewer tokens than its record requires.
    Truncated { line: usize },
    /// A token that must be numeric failed to parse.
    BadNumber { line: usize, token: String },
    /// The enabled flag was not the literal "True" or "False".
    BadEnabledFlag { line: usize, token: String },
    /// Two nodes share an id.
    DuplicateNode(u32),
    /// Two connections share a (from, to) pair.
    DuplicateConnection(u32, u32),
    /// A connection references a node id that is not in the genome.
    DanglingReference { from: u32, to: u32, missing: u32 },
    /// A structured document failed to deserialize.
    Malformed(String),
    /// A population snapshot is missing its fitness field.
    MissingFitness(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Truncated { line } => {
                write!(f, "line {}: record has too few fields", line)
            }
            FormatError::BadNumber { line, token } => {
                write!(f, "line {}: expected a number, found '{}'", line, token)
            }
            FormatError::BadEnabledFlag { line, token } => {
                write!(f, "line {}: expected 'True' or 'False', found '{}'", line, token)
            }
            FormatError::DuplicateNode(id) => write!(f, "duplicate node id: {}", id),
            FormatError::DuplicateConnection(from, to) => {
                write!(f, "duplicate connection: {} -> {}", from, to)
            }
            FormatError::DanglingReference { from, to, missing } => {
                write!(
                    f,
                    "connection {} -> {} references unknown node {}",
                    from, to, missing
                )
            }
            FormatError::Malformed(msg) => write!(f, "malformed document: {}", msg),
            FormatError::MissingFitness(file) => {
                write!(f, "snapshot '{}' has no fitness field", file)
            }
        }
    }
}

/// Specimen selection errors.
#[derive(Debug, Clone)]
pub enum SelectionError {
    /// No qualifying snapshot files were found in the run directory.
    NoCandidates(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoCandidates(dir) => {
                write!(f, "no qualifying specimen snapshots in '{}'", dir)
            }
        }
    }
}

/// Training history analytics errors.
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Descriptive statistics were requested for an empty sequence.
    EmptySequence,
    /// A generation in the training history contains no fitness values.
    EmptyGeneration(usize),
    /// An analysis needs more generations than the history provides.
    InsufficientData { needed: usize, got: usize },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptySequence => write!(f, "sequence is empty"),
            AnalysisError::EmptyGeneration(index) => {
                write!(f, "generation {} has no fitness values", index)
            }
            AnalysisError::InsufficientData { needed, got } => {
                write!(f, "need at least {} generations, got {}", needed, got)
            }
        }
    }
}

// Convenience constructors
impl EvolensError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        EvolensError::Format(FormatError::Malformed(msg.into()))
    }

    pub fn no_candidates(dir: impl Into<String>) -> Self {
        EvolensError::Selection(SelectionError::NoCandidates(dir.into()))
    }

    pub fn insufficient_data(needed: usize, got: usize) -> Self {
        EvolensError::Analysis(AnalysisError::InsufficientData { needed, got })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_displays_line_numbers() {
        let e = EvolensError::Format(FormatError::BadNumber {
            line: 7,
            token: "x".to_string(),
        });
        assert!(e.to_string().contains("line 7"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: EvolensError = io.into();
        assert!(matches!(e, EvolensError::Io(_)));
    }
}
