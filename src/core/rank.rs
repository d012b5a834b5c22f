use crate::domain::model::{Candidate, Criterion};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

pub const DEFAULT_TOP_K: usize = 3;

/// Numeric value a candidate is ranked by.
pub fn rank_key(candidate: &Candidate, criterion: Criterion) -> f64 {
    match criterion {
        Criterion::Cgpa => candidate.cgpa,
        Criterion::Experience => f64::from(candidate.experience),
        Criterion::SkillCount => candidate.skill_count() as f64,
    }
}

/// Heap entry ordered by key alone; ties come out in whatever order the heap
/// yields them.
struct Ranked<'a> {
    key: f64,
    candidate: &'a Candidate,
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.total_cmp(&other.key)
    }
}

/// Pushes the whole roster onto a max-heap and pops at most `k` entries,
/// largest key first.
pub fn top_k(candidates: &[Candidate], criterion: Criterion, k: usize) -> Vec<&Candidate> {
    let mut heap: BinaryHeap<Ranked<'_>> = candidates
        .iter()
        .map(|candidate| Ranked {
            key: rank_key(candidate, criterion),
            candidate,
        })
        .collect();

    let mut top = Vec::with_capacity(k.min(heap.len()));
    while top.len() < k {
        match heap.pop() {
            Some(entry) => top.push(entry.candidate),
            None => break,
        }
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Candidate> {
        vec![
            Candidate::new("Alice", 8.5, 3, ["Python", "Go"]),
            Candidate::new("Bob", 9.2, 1, ["Rust"]),
            Candidate::new("Carol", 7.1, 6, ["Java", "SQL", "Go"]),
            Candidate::new("Dave", 6.4, 2, Vec::<String>::new()),
            Candidate::new("Erin", 8.9, 4, ["C"]),
        ]
    }

    fn names<'a>(items: &[&'a Candidate]) -> Vec<&'a str> {
        items.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_top_three_by_cgpa() {
        let roster = roster();
        let top = top_k(&roster, Criterion::Cgpa, DEFAULT_TOP_K);
        assert_eq!(names(&top), vec!["Bob", "Erin", "Alice"]);
    }

    #[test]
    fn test_top_three_by_experience() {
        let roster = roster();
        let top = top_k(&roster, Criterion::Experience, DEFAULT_TOP_K);
        assert_eq!(names(&top), vec!["Carol", "Erin", "Alice"]);
    }

    #[test]
    fn test_top_by_skill_count() {
        let roster = roster();
        let top = top_k(&roster, Criterion::SkillCount, 2);
        assert_eq!(names(&top), vec!["Carol", "Alice"]);
    }

    #[test]
    fn test_fewer_than_k_returns_all() {
        let roster = vec![
            Candidate::new("Alice", 8.5, 3, ["Python"]),
            Candidate::new("Bob", 9.2, 1, ["Rust"]),
        ];
        let top = top_k(&roster, Criterion::Cgpa, 3);
        assert_eq!(names(&top), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_empty_roster_and_zero_k() {
        assert!(top_k(&[], Criterion::Cgpa, 3).is_empty());
        assert!(top_k(&roster(), Criterion::Cgpa, 0).is_empty());
    }

    #[test]
    fn test_ties_yield_any_valid_selection() {
        let roster = vec![
            Candidate::new("A", 9.0, 1, ["x"]),
            Candidate::new("B", 9.0, 1, ["x"]),
            Candidate::new("C", 9.0, 1, ["x"]),
            Candidate::new("D", 5.0, 1, ["x"]),
        ];
        let top = top_k(&roster, Criterion::Cgpa, 3);
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|c| c.cgpa == 9.0));
    }
}
