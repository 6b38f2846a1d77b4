use std::fmt;

use crate::grid::Cell;
use crate::palette::Color;
use crate::words::{WordId, WordList};

/// A target word the player has found, with where they found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: WordId,
    pub text: String,
    pub path: Vec<Cell>,
    pub color: Color,
}

/// The words found so far, in discovery order.
///
/// Entries are never removed or changed once inserted; a new puzzle gets a new
/// `FoundWords`.
#[derive(Debug, Clone, Default)]
pub struct FoundWords {
    entries: Vec<FoundWord>,
    found: Vec<bool>,
}

impl FoundWords {
    /// An empty set for a puzzle with `total` words.
    pub fn new(total: usize) -> Self {
        Self {
            entries: Vec::new(),
            found: vec![false; total],
        }
    }

    pub fn contains(&self, word: WordId) -> bool {
        self.found.get(word.index()).copied().unwrap_or(false)
    }

    /// Record `entry` unless its word was already found.
    ///
    /// Returns the stored entry if it was newly recorded.
    pub fn insert(&mut self, entry: FoundWord) -> Option<&FoundWord> {
        let idx = entry.word.index();
        if idx >= self.found.len() {
            self.found.resize(idx + 1, false);
        }
        if std::mem::replace(&mut self.found[idx], true) {
            return None;
        }
        self.entries.push(entry);
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FoundWord] {
        &self.entries
    }
}

pub const HEADING: &str = "Find these words:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEntry<'a> {
    pub word: &'a str,
    pub found: bool,
}

/// The word panel: every target word, marked found or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListing<'a> {
    pub heading: &'static str,
    pub entries: Vec<ListingEntry<'a>>,
}

impl<'a> WordListing<'a> {
    pub fn new(words: &'a WordList, found: &FoundWords) -> Self {
        let entries = words
            .iter()
            .map(|(id, word)| ListingEntry {
                word,
                found: found.contains(id),
            })
            .collect();
        Self {
            heading: HEADING,
            entries,
        }
    }

    pub fn remaining(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.found).count()
    }
}

impl fmt::Display for WordListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for entry in &self.entries {
            let mark = if entry.found { 'x' } else { ' ' };
            writeln!(f, "[{mark}] {}", entry.word)?;
        }
        Ok(())
    }
}

/// Fires once, the first time every word has been found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionLatch {
    fired: bool,
}

impl CompletionLatch {
    /// `true` exactly once: on the first call where `found == total`.
    pub fn observe(&mut self, found: usize, total: usize) -> bool {
        if self.fired || total == 0 || found < total {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn make_list(words: &str) -> WordList {
        let mut list = WordList::new();
        for word in words.split_ascii_whitespace() {
            list.insert(word.to_owned());
        }
        list
    }

    fn entry(list: &WordList, word: &str) -> FoundWord {
        FoundWord {
            word: list.get(word).unwrap(),
            text: word.to_owned(),
            path: vec![Cell::new(0, 0)],
            color: Color::BLACK,
        }
    }

    #[test]
    fn insert_is_once_per_word() {
        let list = make_list("GOLF RUGBY");
        let mut found = FoundWords::new(list.len());
        assert!(found.insert(entry(&list, "RUGBY")).is_some());
        assert!(found.insert(entry(&list, "RUGBY")).is_none());
        assert_eq!(found.len(), 1);
        assert!(found.contains(list.get("RUGBY").unwrap()));
        assert!(!found.contains(list.get("GOLF").unwrap()));
    }

    #[test]
    fn entries_keep_discovery_order() {
        let list = make_list("GOLF RUGBY TENNIS");
        let mut found = FoundWords::new(list.len());
        found.insert(entry(&list, "TENNIS"));
        found.insert(entry(&list, "GOLF"));
        let texts: Vec<&str> = found.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["TENNIS", "GOLF"]);
    }

    #[test]
    fn listing_marks_found_words_in_display_order() {
        let list = make_list("GOLF RUGBY TENNIS");
        let mut found = FoundWords::new(list.len());
        found.insert(entry(&list, "RUGBY"));
        let listing = WordListing::new(&list, &found);
        assert_eq!(listing.remaining(), 2);
        assert_eq!(
            listing.to_string(),
            "Find these words:\n[ ] GOLF\n[x] RUGBY\n[ ] TENNIS\n"
        );
    }

    #[rstest]
    #[case(&[(0, 2), (1, 2), (2, 2), (2, 2)], &[false, false, true, false])]
    #[case(&[(2, 2), (2, 2)], &[true, false])]
    #[case(&[(0, 0), (0, 0)], &[false, false])]
    fn latch_fires_once(#[case] observations: &[(usize, usize)], #[case] expect: &[bool]) {
        let mut latch = CompletionLatch::default();
        let fired: Vec<bool> = observations
            .iter()
            .map(|&(found, total)| latch.observe(found, total))
            .collect();
        assert_eq!(fired, expect);
    }
}
