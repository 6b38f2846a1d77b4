use std::{borrow::Borrow, ops::Index};

/// A copyable handle to one entry of a [`WordList`].
///
/// Handles are only meaningful for the list that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(usize);

impl WordId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The target words of one puzzle.
///
/// Words keep the order the server sent them in, which is the order they are
/// listed to the player. Lookup goes through a separate sorted index, so that
/// membership is a binary search rather than a scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordList {
    words: Vec<String>,
    // We maintain the invariant that this vector is sorted by the word it points at
    sorted: Vec<WordId>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` unless it is already present.
    ///
    /// Returns the handle of the stored word and whether it was newly inserted.
    pub fn insert(&mut self, word: String) -> (WordId, bool) {
        match self.search(&word) {
            Ok(pos) => (self.sorted[pos], false),
            Err(pos) => {
                let id = WordId(self.words.len());
                self.words.push(word);
                self.sorted.insert(pos, id);
                (id, true)
            }
        }
    }

    fn search<Q>(&self, word: &Q) -> Result<usize, usize>
    where
        String: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.sorted
            .binary_search_by(|id| Borrow::<Q>::borrow(&self.words[id.0]).cmp(word))
    }

    /// Get the handle for `word`, if it is one of the targets.
    pub fn get<Q>(&self, word: &Q) -> Option<WordId>
    where
        String: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(word).ok().map(|pos| self.sorted[pos])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in display order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(idx, word)| (WordId(idx), word.as_str()))
    }
}

impl Index<WordId> for WordList {
    type Output = str;

    fn index(&self, id: WordId) -> &Self::Output {
        &self.words[id.0]
    }
}
