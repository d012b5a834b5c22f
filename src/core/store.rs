use crate::core::{codec, rank, search, sort};
use crate::domain::model::{Candidate, Criterion, LoadOutcome, SortOutcome, SortStrategy};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, RosterError};

/// In-memory roster plus the storage it is persisted through.
///
/// Only `add`, `sort_in_place`, `clear` and `load` change the roster; every
/// other operation reads it as-is.
pub struct CandidateStore<S: Storage> {
    candidates: Vec<Candidate>,
    storage: S,
}

impl<S: Storage> CandidateStore<S> {
    pub fn new(storage: S) -> Self {
        Self::from_candidates(storage, Vec::new())
    }

    pub fn from_candidates(storage: S, candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            storage,
        }
    }

    pub fn add(&mut self, candidate: Candidate) {
        tracing::debug!("Adding candidate '{}'", candidate.name);
        self.candidates.push(candidate);
    }

    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
    }

    pub fn sort_in_place(&mut self, criterion: Criterion) -> SortOutcome {
        if self.candidates.is_empty() {
            return SortOutcome::Empty;
        }

        let strategy = criterion.strategy();
        let cmp = sort::comparator_for(criterion);
        match strategy {
            SortStrategy::Merge => sort::merge_sort(&mut self.candidates, &cmp),
            SortStrategy::Insertion => sort::insertion_sort(&mut self.candidates, &cmp),
        }
        tracing::debug!(
            "Sorted {} candidates by {} using {}",
            self.candidates.len(),
            criterion,
            strategy
        );
        SortOutcome::Sorted(strategy)
    }

    pub fn search_by_name(&self, query: &str) -> Option<&Candidate> {
        let view = search::sorted_by_name(&self.candidates);
        let found = search::binary_search_by_name(&view, query);
        tracing::debug!("Name search '{}': found={}", query, found.is_some());
        found
    }

    pub fn search_by_skill(&self, query: &str) -> Vec<&Candidate> {
        let hits = search::linear_search_by_skill(&self.candidates, query);
        tracing::debug!("Skill search '{}': {} match(es)", query, hits.len());
        hits
    }

    pub fn top_k(&self, criterion: Criterion, k: usize) -> Vec<&Candidate> {
        rank::top_k(&self.candidates, criterion, k)
    }

    /// Renders the roster in the line format, one candidate per line.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for candidate in &self.candidates {
            out.push_str(&codec::serialize(candidate));
            out.push('\n');
        }
        out
    }

    /// Overwrites `path` with the current roster and returns how many
    /// candidates were written.
    pub async fn save(&self, path: &str) -> Result<usize> {
        self.storage.write_file(path, self.encode().as_bytes()).await?;
        tracing::info!("Saved {} candidate(s) to {}", self.candidates.len(), path);
        Ok(self.candidates.len())
    }

    /// Replaces the roster with the contents of `path`. On a read or parse
    /// failure the current roster is kept.
    pub async fn load(&mut self, path: &str) -> Result<LoadOutcome> {
        let bytes = match self.storage.read_file(path).await {
            Ok(bytes) => bytes,
            Err(RosterError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("No existing data file at {}, starting fresh", path);
                self.clear();
                return Ok(LoadOutcome::NoExistingData);
            }
            Err(e) => return Err(e),
        };

        let candidates = codec::decode_all(&bytes)?;

        self.candidates = candidates;
        tracing::info!("Loaded {} candidate(s) from {}", self.candidates.len(), path);
        Ok(LoadOutcome::Loaded(self.candidates.len()))
    }
}
