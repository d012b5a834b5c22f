use serde::{Deserialize, Serialize};
use std::fmt;

/// One applicant on the roster.
///
/// Fields are public and independently settable; nothing ties them together.
/// `primary_language` is only meaningful for technical applicants and is not
/// part of the persisted line format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub cgpa: f64,
    pub experience: u32,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<String>,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        cgpa: f64,
        experience: u32,
        skills: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            cgpa,
            experience,
            skills: skills.into_iter().map(Into::into).collect(),
            primary_language: None,
        }
    }

    pub fn with_primary_language(mut self, language: impl Into<String>) -> Self {
        self.primary_language = Some(language.into());
        self
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Exact, case-sensitive token match.
    pub fn has_skill(&self, token: &str) -> bool {
        self.skills.iter().any(|skill| skill == token)
    }
}

/// Attribute used to order or rank candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Criterion {
    Cgpa,
    Experience,
    #[cfg_attr(feature = "cli", value(name = "skills"))]
    SkillCount,
}

impl Criterion {
    /// Which sort routine reorders the roster for this criterion.
    pub fn strategy(self) -> SortStrategy {
        match self {
            Criterion::Cgpa | Criterion::Experience => SortStrategy::Merge,
            Criterion::SkillCount => SortStrategy::Insertion,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Criterion::Cgpa => "CGPA",
            Criterion::Experience => "Experience",
            Criterion::SkillCount => "Skills Count",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    Merge,
    Insertion,
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStrategy::Merge => f.write_str("Merge Sort"),
            SortStrategy::Insertion => f.write_str("Insertion Sort"),
        }
    }
}

/// Result of an in-place sort request. An empty roster is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    Sorted(SortStrategy),
    Empty,
}

/// Result of reading the data file. A missing file is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    NoExistingData,
}
