//! Grouping candidates by reveal pattern
//!
//! Groups are kept in order of first appearance so that ties between equally
//! large families always resolve to the family seen first.

use crate::core::{Letter, Pattern, Word};
use log::debug;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Candidates sharing one reveal pattern, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGroup<'a> {
    pub pattern: Pattern,
    pub words: Vec<&'a Word>,
}

impl PatternGroup<'_> {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The family the adversary keeps after a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Pattern shared by every kept word
    pub pattern: Pattern,
    /// Kept words, in their original relative order
    pub words: Vec<&'a Word>,
    /// How many distinct patterns the guess produced
    pub group_count: usize,
}

/// Group candidates by the pattern `letter` produces in each of them
///
/// Group order is the order in which each distinct pattern is first met while
/// scanning `candidates`. Every candidate lands in exactly one group.
#[must_use]
pub fn group_by_pattern(candidates: &[Word], letter: Letter) -> Vec<PatternGroup<'_>> {
    let mut slots: FxHashMap<Pattern, usize> = FxHashMap::default();
    let mut groups: Vec<PatternGroup<'_>> = Vec::new();

    for word in candidates {
        let pattern = Pattern::of(word, letter);

        if let Some(&slot) = slots.get(&pattern) {
            groups[slot].words.push(word);
        } else {
            slots.insert(pattern.clone(), groups.len());
            groups.push(PatternGroup {
                pattern,
                words: vec![word],
            });
        }
    }

    groups
}

/// Pick the strictly largest group, preferring the earliest on ties
///
/// Returns `None` only when there are no groups at all.
#[must_use]
pub fn select_largest(groups: Vec<PatternGroup<'_>>) -> Option<PatternGroup<'_>> {
    // min_by_key keeps the first of several equal minima
    groups.into_iter().min_by_key(|group| Reverse(group.len()))
}

/// Partition `candidates` by `letter` and keep the largest family
///
/// Returns `None` only for an empty candidate list; otherwise the kept family
/// is non-empty and drawn from `candidates`.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Letter, Word};
/// use evil_hangman::engine::partition;
///
/// let words: Vec<Word> = ["code", "cold", "core", "cove"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let kept = partition(&words, Letter::new('d').unwrap()).unwrap();
/// assert_eq!(kept.pattern.to_string(), "----");
/// assert_eq!(kept.words.len(), 2);
/// assert_eq!(kept.group_count, 3);
/// ```
#[must_use]
pub fn partition(candidates: &[Word], letter: Letter) -> Option<Partition<'_>> {
    let groups = group_by_pattern(candidates, letter);
    let group_count = groups.len();
    let chosen = select_largest(groups)?;

    debug!(
        "letter {letter}: {group_count} families over {} candidates, keeping {} ({})",
        candidates.len(),
        chosen.len(),
        chosen.pattern
    );

    Some(Partition {
        pattern: chosen.pattern,
        words: chosen.words,
        group_count,
    })
}
