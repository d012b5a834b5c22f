use crate::core::sort::{by_name_asc, merge_sort};
use crate::domain::model::Candidate;

/// Builds the name-ascending view that binary search runs over. The roster
/// itself is not reordered; only references are sorted.
pub fn sorted_by_name(candidates: &[Candidate]) -> Vec<&Candidate> {
    let mut view: Vec<&Candidate> = candidates.iter().collect();
    merge_sort(&mut view, &|a: &&Candidate, b: &&Candidate| by_name_asc(a, b));
    view
}

/// Midpoint-halving search over a name-ascending slice.
///
/// With duplicate names this returns whichever match the halving reaches
/// first, which is not necessarily the earliest one in roster order.
pub fn binary_search_by_name<'a>(sorted: &[&'a Candidate], name: &str) -> Option<&'a Candidate> {
    let (mut low, mut high) = (0usize, sorted.len());

    while low < high {
        let mid = low + (high - low) / 2;
        let probe = sorted[mid];
        match probe.name.as_str().cmp(name) {
            std::cmp::Ordering::Equal => return Some(probe),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }

    None
}

/// Every candidate listing `skill` exactly, in roster order.
pub fn linear_search_by_skill<'a>(candidates: &'a [Candidate], skill: &str) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|candidate| candidate.has_skill(skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Candidate> {
        vec![
            Candidate::new("Mallory", 6.0, 2, ["Go"]),
            Candidate::new("Alice", 8.5, 3, ["Python", "Go"]),
            Candidate::new("Trent", 7.5, 4, Vec::<String>::new()),
            Candidate::new("Bob", 9.2, 1, ["Rust"]),
        ]
    }

    #[test]
    fn test_sorted_by_name_leaves_roster_untouched() {
        let roster = roster();
        let view = sorted_by_name(&roster);
        let names: Vec<&str> = view.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Mallory", "Trent"]);
        assert_eq!(roster[0].name, "Mallory");
    }

    #[test]
    fn test_binary_search_finds_every_name() {
        let roster = roster();
        let view = sorted_by_name(&roster);
        for candidate in &roster {
            let found = binary_search_by_name(&view, &candidate.name).unwrap();
            assert_eq!(found, candidate);
        }
    }

    #[test]
    fn test_binary_search_misses() {
        let roster = roster();
        let view = sorted_by_name(&roster);
        assert!(binary_search_by_name(&view, "Zoe").is_none());
        assert!(binary_search_by_name(&view, "alice").is_none());
        assert!(binary_search_by_name(&view, "").is_none());
        assert!(binary_search_by_name(&[], "Alice").is_none());
    }

    #[test]
    fn test_binary_search_with_duplicate_names_returns_a_match() {
        let roster = vec![
            Candidate::new("Sam", 6.0, 1, ["A"]),
            Candidate::new("Sam", 7.0, 2, ["B"]),
            Candidate::new("Sam", 8.0, 3, ["C"]),
        ];
        let view = sorted_by_name(&roster);
        let found = binary_search_by_name(&view, "Sam").unwrap();
        assert_eq!(found.name, "Sam");
    }

    #[test]
    fn test_linear_search_by_skill_keeps_roster_order() {
        let roster = roster();
        let hits = linear_search_by_skill(&roster, "Go");
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Mallory", "Alice"]);
    }

    #[test]
    fn test_linear_search_by_skill_miss_is_empty() {
        let roster = roster();
        assert!(linear_search_by_skill(&roster, "COBOL").is_empty());
        assert!(linear_search_by_skill(&roster, "go").is_empty());
        assert!(linear_search_by_skill(&[], "Go").is_empty());
    }
}
