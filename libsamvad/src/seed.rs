//! Seed data loading for Samvad
//!
//! State starts empty and is populated exactly once from a seed document:
//! a JSON file with optional top-level `questions` and `thoughts` arrays.
//! A default dataset is bundled into the binary for use when no file is
//! configured.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedError};
use crate::types::{Question, Thought};

/// Bundled default dataset
const DEFAULT_SEED: &str = include_str!("../data/seed.json");

/// The seed document shape
///
/// Both collections are optional; `SetData` only replaces the collections
/// that are present. The store applies a seed without validating it (the
/// original contract); `validate` is for boundaries that read untrusted
/// files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<Vec<Thought>>,
}

impl SeedData {
    /// Parse a seed document from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(json).map_err(SeedError::ParseError)?;
        Ok(seed)
    }

    /// Load a seed document from a file, expanding a leading tilde
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).to_string();
        let content = std::fs::read_to_string(Path::new(&expanded)).map_err(SeedError::ReadError)?;
        Self::from_json_str(&content)
    }

    /// The dataset bundled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(DEFAULT_SEED)
    }

    /// Check the invariants a well-formed dataset must hold: unique ids per
    /// collection (answers scoped to their question) and non-empty text.
    pub fn validate(&self) -> Result<()> {
        if let Some(questions) = &self.questions {
            let mut seen = std::collections::HashSet::new();
            for q in questions {
                if !seen.insert(q.id) {
                    return Err(SeedError::DuplicateId {
                        collection: "questions".to_string(),
                        id: q.id,
                    }
                    .into());
                }
                if q.text.trim().is_empty() {
                    return Err(SeedError::EmptyText {
                        collection: "questions".to_string(),
                        id: q.id,
                    }
                    .into());
                }
                let mut answer_ids = std::collections::HashSet::new();
                for a in &q.answers {
                    if !answer_ids.insert(a.id) {
                        return Err(SeedError::DuplicateId {
                            collection: "answers".to_string(),
                            id: a.id,
                        }
                        .into());
                    }
                    if a.text.trim().is_empty() {
                        return Err(SeedError::EmptyText {
                            collection: "answers".to_string(),
                            id: a.id,
                        }
                        .into());
                    }
                }
            }
        }

        if let Some(thoughts) = &self.thoughts {
            let mut seen = std::collections::HashSet::new();
            for t in thoughts {
                if !seen.insert(t.id) {
                    return Err(SeedError::DuplicateId {
                        collection: "thoughts".to_string(),
                        id: t.id,
                    }
                    .into());
                }
                if t.thought.trim().is_empty() {
                    return Err(SeedError::EmptyText {
                        collection: "thoughts".to_string(),
                        id: t.id,
                    }
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Largest id anywhere in the document, for bumping the id allocator
    pub fn max_id(&self) -> u64 {
        let question_max = self
            .questions
            .iter()
            .flatten()
            .flat_map(|q| std::iter::once(q.id).chain(q.answers.iter().map(|a| a.id)))
            .max()
            .unwrap_or(0);
        let thought_max = self
            .thoughts
            .iter()
            .flatten()
            .map(|t| t.id)
            .max()
            .unwrap_or(0);
        question_max.max(thought_max)
    }
}
