//! Graph import and export
//!
//! Two encodings of the same input contract: the line-oriented text file the
//! canvas exports (`text`) and a JSON description (`description`). Both
//! produce a validated `Graph`, so malformed ids or weights are rejected by
//! the Graph Model itself.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod description;
pub mod text;

use thiserror::Error;

use crate::algorithm::traits::AlgorithmError;

pub use self::description::{EdgeDescription, GraphDescription, NodeDescription};
pub use self::text::{from_text, to_text};

/// Import/export failures
#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid graph description: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] AlgorithmError),
}

impl InterchangeError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}
