//! Core types for Samvad

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Topical category for forum questions
///
/// The category set is fixed; the serialized form matches the seed document
/// (note the space in "Mental Wellness").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Health,
    Ayurveda,
    Nutrition,
    #[serde(rename = "Mental Wellness")]
    MentalWellness,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Ayurveda,
        Category::Nutrition,
        Category::MentalWellness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Ayurveda => "Ayurveda",
            Category::Nutrition => "Nutrition",
            Category::MentalWellness => "Mental Wellness",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "ayurveda" => Ok(Category::Ayurveda),
            "nutrition" => Ok(Category::Nutrition),
            "mental wellness" | "mental-wellness" | "mentalwellness" => {
                Ok(Category::MentalWellness)
            }
            _ => Err(format!(
                "Invalid category: '{}'. Valid options: health, ayurveda, nutrition, mental-wellness",
                s
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category filter used by the feed views
///
/// `All` is a wildcard that matches every question; it exists only for
/// filtering and never appears on a stored question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a question in `category` passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// Cycle through All -> Health -> ... -> Mental Wellness -> All
    pub fn next(&self) -> CategoryFilter {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(c) => {
                let idx = Category::ALL.iter().position(|x| x == c).unwrap_or(0);
                match Category::ALL.get(idx + 1) {
                    Some(next) => CategoryFilter::Only(*next),
                    None => CategoryFilter::All,
                }
            }
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

/// Which state collection an action targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Questions,
    Thoughts,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Questions => "questions",
            Collection::Thoughts => "thoughts",
        }
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "questions" => Ok(Collection::Questions),
            "thoughts" => Ok(Collection::Thoughts),
            _ => Err(format!(
                "Invalid collection: '{}'. Valid options: questions, thoughts",
                s
            )),
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A community question with its answers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: u64,
    pub category: Category,
    pub text: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub dislikes: u32,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl Question {
    /// Create a fresh question with zeroed counters and no answers
    pub fn new(id: u64, category: Category, text: String) -> Self {
        Self {
            id,
            category,
            text,
            likes: 0,
            dislikes: 0,
            answers: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// An answer attached to a question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub dislikes: u32,
}

impl Answer {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            likes: 0,
            dislikes: 0,
        }
    }
}

/// A short reflection published by a practitioner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thought {
    pub id: u64,
    pub doctor: String,
    pub thought: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Monotonic id source for new questions and answers
///
/// Ids are creation-ordered: the allocator starts at the current Unix
/// millisecond timestamp and every call returns a value strictly greater
/// than the last, so two calls within the same millisecond still yield
/// distinct ids. `bump_past` raises the floor above seed-data ids.
#[derive(Debug)]
pub struct IdAllocator {
    last: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Allocate the next id: max(now_ms, last + 1)
    pub fn next(&self) -> u64 {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }

    /// Ensure future ids are strictly greater than `floor`
    pub fn bump_past(&self, floor: u64) {
        self.last.fetch_max(floor, Ordering::Relaxed);
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
