//! Content validation service
//!
//! Real-time validation of user-entered text before it is turned into a
//! question or answer: empty-content checks, an absolute size ceiling, and
//! a soft length warning for unwieldy posts. Comments are free-form and
//! skip validation entirely.

/// Maximum content size in bytes (100KB)
const MAX_CONTENT_LENGTH: usize = 100 * 1024;

/// Soft limit: content longer than this draws a warning, not an error
const CONTENT_WARN_LIMIT: usize = 500;

/// What the content is destined to become
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Question,
    Answer,
}

impl ContentKind {
    /// The user-visible rejection message for empty input of this kind
    pub fn empty_message(&self) -> &'static str {
        match self {
            ContentKind::Question => "Please enter a question.",
            ContentKind::Answer => "Please enter an answer.",
        }
    }
}

/// Request to validate a piece of content
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    pub content: String,
    pub kind: ContentKind,
}

/// Response containing validation results
#[derive(Debug, Clone)]
pub struct ValidationResponse {
    /// Whether the content may be submitted
    pub valid: bool,
    /// Blocking problems
    pub errors: Vec<String>,
    /// Non-blocking advisories
    pub warnings: Vec<String>,
    /// Character count of the trimmed content
    pub char_count: usize,
}

/// Service for validating content before submission
///
/// Validation is pure computation; it never touches the store.
#[derive(Debug, Clone, Default)]
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Validate content for submission as `kind`
    pub fn validate(&self, request: &ValidationRequest) -> ValidationResponse {
        let trimmed = request.content.trim();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if trimmed.is_empty() {
            errors.push(request.kind.empty_message().to_string());
        }

        if request.content.len() > MAX_CONTENT_LENGTH {
            errors.push(format!(
                "Content size ({} bytes) exceeds maximum allowed size ({} bytes)",
                request.content.len(),
                MAX_CONTENT_LENGTH
            ));
        }

        let char_count = trimmed.chars().count();
        if char_count > CONTENT_WARN_LIMIT {
            warnings.push(format!(
                "Content is long ({} chars). Consider splitting it up.",
                char_count
            ));
        }

        ValidationResponse {
            valid: errors.is_empty(),
            errors,
            warnings,
            char_count,
        }
    }

    /// Convenience boolean check
    pub fn is_valid(&self, content: &str, kind: ContentKind) -> bool {
        self.validate(&ValidationRequest {
            content: content.to_string(),
            kind,
        })
        .valid
    }
}
