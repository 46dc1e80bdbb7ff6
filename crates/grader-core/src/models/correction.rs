use serde::{Deserialize, Serialize};

use super::{Block, BlockKind, Cell};

/// Outcome of a correction request.
///
/// Failures keep the original block untouched; the serialised form of
/// `Failed` carries an `error` key, which callers treat as "no usable correction".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Correction {
    Metric {
        metric: String,
        description: String,
    },
    Table {
        table: Vec<Vec<Cell>>,
    },
    Failed {
        error: String,
        original_content: Block,
    },
}

impl Correction {
    pub fn failed(error: impl Into<String>, original: &Block) -> Self {
        Self::Failed {
            error: error.into(),
            original_content: original.clone(),
        }
    }

    pub fn is_usable(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    /// Render as a "Suggested correction" note.
    pub fn render(&self) -> String {
        let mut out = String::from("Suggested correction:\n");
        match self {
            Self::Failed { error, .. } => {
                out.push_str(&format!("Error generating correction: {error}\n"));
            }
            usable => {
                let json = serde_json::to_string_pretty(usable).unwrap_or_default();
                out.push_str(&json);
                out.push('\n');
            }
        }
        out
    }
}

/// A correction requested for a low-scoring block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    /// Position of the block in the evaluated document.
    pub block_index: usize,
    pub block_kind: BlockKind,
    /// The accuracy score that triggered the intervention.
    pub content_score: f64,
    pub correction: Correction,
}
