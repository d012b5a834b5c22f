//! Stable sort routines driven by a strict "comes before" predicate.

use crate::domain::model::{Candidate, Criterion};

/// A strict ordering predicate: `comes_before(a, b)` is true only when `a`
/// must be placed ahead of `b`. Equal elements return false both ways.
pub trait Comparator<T: ?Sized> {
    fn comes_before(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn comes_before(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

pub fn by_cgpa_desc(a: &Candidate, b: &Candidate) -> bool {
    a.cgpa > b.cgpa
}

pub fn by_experience_desc(a: &Candidate, b: &Candidate) -> bool {
    a.experience > b.experience
}

pub fn by_skill_count_desc(a: &Candidate, b: &Candidate) -> bool {
    a.skill_count() > b.skill_count()
}

pub fn by_name_asc(a: &Candidate, b: &Candidate) -> bool {
    a.name < b.name
}

/// Comparator used when reordering the roster by `criterion`.
pub fn comparator_for(criterion: Criterion) -> fn(&Candidate, &Candidate) -> bool {
    match criterion {
        Criterion::Cgpa => by_cgpa_desc,
        Criterion::Experience => by_experience_desc,
        Criterion::SkillCount => by_skill_count_desc,
    }
}

/// Top-down merge sort. O(n log n), stable.
pub fn merge_sort<T, C>(items: &mut [T], cmp: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    if items.len() < 2 {
        return;
    }
    let mut scratch = Vec::with_capacity(items.len());
    merge_sort_range(items, &mut scratch, cmp);
}

fn merge_sort_range<T, C>(items: &mut [T], scratch: &mut Vec<T>, cmp: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    if items.len() < 2 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort_range(&mut items[..mid], scratch, cmp);
    merge_sort_range(&mut items[mid..], scratch, cmp);
    merge(items, mid, scratch, cmp);
}

// Right wins only when strictly ahead, which keeps equal elements in order.
fn merge<T, C>(items: &mut [T], mid: usize, scratch: &mut Vec<T>, cmp: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    scratch.clear();
    let (left, right) = items.split_at(mid);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if cmp.comes_before(&right[j], &left[i]) {
            scratch.push(right[j].clone());
            j += 1;
        } else {
            scratch.push(left[i].clone());
            i += 1;
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);

    items.clone_from_slice(&scratch[..]);
}

/// Shift-and-insert sort. O(n²), stable; meant for small rosters.
pub fn insertion_sort<T, C>(items: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp.comes_before(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
