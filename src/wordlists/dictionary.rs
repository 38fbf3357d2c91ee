//! Dictionary of playable words
//!
//! An ordered list of lowercase ASCII words with a length index. Read-only
//! once built, so one instance can back any number of concurrent games.

use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Ordered word list indexed by word length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

/// Normalize a raw dictionary entry
///
/// Trims whitespace and lowercases. Returns `None` for empty entries or
/// anything that is not purely ASCII letters.
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::normalize_word;
///
/// assert_eq!(normalize_word(" Hello "), Some("hello".to_string()));
/// assert_eq!(normalize_word("it's"), None);
/// assert_eq!(normalize_word(""), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}

impl Dictionary {
    /// Build a dictionary, skipping entries `normalize_word` rejects
    ///
    /// Order and duplicates are preserved.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| normalize_word(entry.as_ref()))
            .collect();

        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (idx, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(idx);
        }

        Self { words, by_length }
    }

    /// Build from a static slice such as the embedded list
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(slice.iter().copied())
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

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

    /// Words with exactly `len` letters, in load order
    pub fn of_length(&self, len: usize) -> impl Iterator<Item = &str> + '_ {
        self.by_length
            .get(&len)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&idx| self.words[idx].as_str())
    }

    /// Number of words with exactly `len` letters
    #[must_use]
    pub fn count_of_length(&self, len: usize) -> usize {
        self.by_length.get(&len).map_or(0, Vec::len)
    }

    /// Copy keeping only words whose length is within `min..=max`
    #[must_use]
    pub fn with_length_bounds(&self, min: usize, max: usize) -> Self {
        Self::new(
            self.words
                .iter()
                .filter(|word| (min..=max).contains(&word.len())),
        )
    }

    /// Draw a word uniformly at random
    ///
    /// Returns `None` for an empty dictionary.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_normalizes_and_skips_invalid() {
        let dictionary = Dictionary::new(["Hello", "it's", "", "  yes ", "n0pe", "please"]);
        assert_eq!(dictionary.words(), &["hello", "yes", "please"]);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let dictionary = Dictionary::from_slice(&["b", "a", "b"]);
        assert_eq!(dictionary.words(), &["b", "a", "b"]);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn of_length_filters_in_order() {
        let dictionary = Dictionary::from_slice(&["hello", "hi", "yes", "world", "please"]);
        let five: Vec<&str> = dictionary.of_length(5).collect();
        assert_eq!(five, vec!["hello", "world"]);
        assert_eq!(dictionary.count_of_length(3), 1);
        assert_eq!(dictionary.of_length(9).count(), 0);
        assert_eq!(dictionary.count_of_length(9), 0);
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let dictionary = Dictionary::from_slice(&["a", "hi", "yes", "hello", "please"]);
        let bounded = dictionary.with_length_bounds(2, 5);
        assert_eq!(bounded.words(), &["hi", "yes", "hello"]);
    }

    #[test]
    fn choose_is_seeded() {
        let dictionary = Dictionary::from_slice(&["one", "two", "three", "four", "five"]);
        let a = dictionary.choose(&mut StdRng::seed_from_u64(42)).unwrap().to_string();
        let b = dictionary.choose(&mut StdRng::seed_from_u64(42)).unwrap().to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn choose_from_empty_is_none() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(dictionary.choose(&mut StdRng::seed_from_u64(0)).is_none());
    }
}
