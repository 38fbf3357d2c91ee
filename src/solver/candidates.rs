//! Candidate pool narrowing
//!
//! A `CandidateFilter` keeps the dictionary words still consistent with what
//! the masked word has shown so far. It never sees the oracle: it infers
//! whether its last guess was right by diffing consecutive masked words.

use crate::wordlists::Dictionary;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Rank characters by how often they occur, most frequent first
///
/// Ties keep the order in which characters were first seen.
///
/// # Examples
/// ```
/// use hangman_solver::solver::candidates::rank_chars;
///
/// let ranking = rank_chars("hello".chars());
/// assert_eq!(ranking, vec![('l', 2), ('h', 1), ('e', 1), ('o', 1)]);
/// ```
pub fn rank_chars<I: IntoIterator<Item = char>>(chars: I) -> Vec<(char, usize)> {
    let mut index: FxHashMap<char, usize> = FxHashMap::default();
    let mut ranking: Vec<(char, usize)> = Vec::new();

    for c in chars {
        if let Some(&slot) = index.get(&c) {
            ranking[slot].1 += 1;
        } else {
            index.insert(c, ranking.len());
            ranking.push((c, 1));
        }
    }

    // Stable sort keeps first-seen order among equal counts
    ranking.sort_by(|a, b| b.1.cmp(&a.1));
    ranking
}

/// Shrinking pool of words consistent with every observed masked word
#[derive(Debug, Clone)]
pub struct CandidateFilter<'a> {
    dictionary: &'a Dictionary,
    match_length: bool,
    seed_len: Option<usize>,
    pool: Vec<&'a str>,
    last_guess: Option<char>,
    prior_masked: Option<String>,
}

impl<'a> CandidateFilter<'a> {
    /// Create a filter over the whole dictionary
    ///
    /// With `match_length`, the first observed masked word narrows the pool to
    /// words of the same length, and later resets return to that slice.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, match_length: bool) -> Self {
        Self {
            dictionary,
            match_length,
            seed_len: None,
            pool: dictionary.words().iter().map(String::as_str).collect(),
            last_guess: None,
            prior_masked: None,
        }
    }

    /// Forget everything observed and start a new game
    pub fn reset(&mut self) {
        self.seed_len = None;
        self.last_guess = None;
        self.prior_masked = None;
        self.pool = self.seed();
    }

    /// Refill the pool from the dictionary, keeping the game's history
    ///
    /// Constraints seen so far are forgotten, not re-applied.
    pub fn reset_pool(&mut self) {
        self.pool = self.seed();
        debug!(pool = self.pool.len(), "candidate pool reset");
    }

    fn seed(&self) -> Vec<&'a str> {
        match self.seed_len {
            Some(len) => self.dictionary.of_length(len).collect(),
            None => self.dictionary.words().iter().map(String::as_str).collect(),
        }
    }

    /// Apply what the new masked word says about the last guess
    ///
    /// Returns whether the masked word changed since the previous call. The
    /// first call never counts as a change.
    pub fn observe(&mut self, masked: &str) -> bool {
        let mut changed = false;

        if let Some(prior) = &self.prior_masked {
            changed = prior != masked;

            match self.last_guess {
                Some(letter) if changed && masked.contains(letter) => {
                    self.narrow_to_revealed(letter, masked);
                    self.last_guess = None;
                }
                Some(letter) if !changed => self.exclude(letter),
                _ => {}
            }
        } else if self.match_length {
            let len = masked.chars().count();
            self.seed_len = Some(len);
            self.pool.retain(|word| word.len() == len);
            debug!(len, pool = self.pool.len(), "candidate pool seeded by length");
        }

        self.prior_masked = Some(masked.to_string());
        changed
    }

    /// Keep words containing `letter` at every revealed position
    ///
    /// The final index of each word is not checked.
    fn narrow_to_revealed(&mut self, letter: char, masked: &str) {
        let positions: Vec<usize> = masked
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == letter)
            .map(|(idx, _)| idx)
            .collect();

        let before = self.pool.len();
        self.pool.retain(|word| {
            let bytes = word.as_bytes();
            word.contains(letter)
                && positions
                    .iter()
                    .filter(|&&idx| idx + 1 < bytes.len())
                    .all(|&idx| char::from(bytes[idx]) == letter)
        });

        debug!(%letter, before, after = self.pool.len(), "narrowed to revealed letter");
    }

    /// Drop words containing `letter`
    fn exclude(&mut self, letter: char) {
        let before = self.pool.len();
        self.pool.retain(|word| !word.contains(letter));
        debug!(%letter, before, after = self.pool.len(), "excluded missed letter");
    }

    /// Letter frequency across the current pool, most frequent first
    #[must_use]
    pub fn letter_ranking(&self) -> Vec<(char, usize)> {
        rank_chars(self.pool.iter().flat_map(|word| word.chars()))
    }

    /// Remember the letter the next observation should be judged against
    pub fn set_last_guess(&mut self, letter: char) {
        self.last_guess = Some(letter);
    }

    #[inline]
    #[must_use]
    pub const fn last_guess(&self) -> Option<char> {
        self.last_guess
    }

    /// Words still consistent with every observation
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[&'a str] {
        &self.pool
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&["hello", "hi", "yes", "please"])
    }

    #[test]
    fn rank_chars_breaks_ties_by_first_seen() {
        let ranking = rank_chars("helloyes".chars());
        assert_eq!(ranking[0], ('e', 2));
        assert_eq!(ranking[1], ('l', 2));
        assert_eq!(ranking[2], ('h', 1));
    }

    #[test]
    fn rank_chars_empty() {
        assert!(rank_chars(std::iter::empty()).is_empty());
    }

    #[test]
    fn first_observation_is_not_a_change() {
        let dictionary = dictionary();
        let mut filter = CandidateFilter::new(&dictionary, false);
        filter.set_last_guess('e');

        assert!(!filter.observe("_____"));
        assert_eq!(filter.len(), 4);
    }

    #[test]
    fn revealed_letter_narrows_by_position() {
        let dictionary = dictionary();
        let mut filter = CandidateFilter::new(&dictionary, false);
        filter.observe("_____");
        filter.set_last_guess('e');

        assert!(filter.observe("_e___"));
        assert_eq!(filter.pool(), &["hello", "yes"]);
        assert_eq!(filter.last_guess(), None);
    }

    #[test]
    fn unchanged_mask_excludes_letter() {
        let dictionary = dictionary();
        let mut filter = CandidateFilter::new(&dictionary, false);
        filter.observe("_____");
        filter.set_last_guess('s');

        assert!(!filter.observe("_____"));
        assert_eq!(filter.pool(), &["hello", "hi"]);
        assert_eq!(filter.last_guess(), Some('s'));
    }

    #[test]
    fn final_index_is_not_checked() {
        let dictionary = Dictionary::from_slice(&["abcde", "abcdx"]);
        let mut filter = CandidateFilter::new(&dictionary, false);
        filter.observe("_____");
        filter.set_last_guess('x');

        // "abcde" has no 'x' at all; "abcdx" keeps it only at the unchecked last index
        filter.observe("____x");
        assert_eq!(filter.pool(), &["abcdx"]);

        let dictionary = Dictionary::from_slice(&["xbcde", "abxde"]);
        let mut filter = CandidateFilter::new(&dictionary, false);
        filter.observe("_____");
        filter.set_last_guess('x');

        // Revealed at the last index: any word containing 'x' survives
        filter.observe("____x");
        assert_eq!(filter.pool(), &["xbcde", "abxde"]);
    }

    #[test]
    fn changed_mask_without_letter_keeps_pool() {
        let dictionary = dictionary();
        let mut filter = CandidateFilter::new(&dictionary, false);
        filter.observe("_____");
        filter.set_last_guess('z');

        assert!(filter.observe("h____"));
        assert_eq!(filter.len(), 4);
        assert_eq!(filter.last_guess(), Some('z'));
    }

    #[test]
    fn match_length_seeds_and_resets_to_same_length() {
        let dictionary = Dictionary::from_slice(&["hello", "hi", "world", "please"]);
        let mut filter = CandidateFilter::new(&dictionary, true);

        filter.observe("_____");
        assert_eq!(filter.pool(), &["hello", "world"]);

        filter.set_last_guess('w');
        filter.observe("_____");
        assert_eq!(filter.pool(), &["hello"]);

        filter.reset_pool();
        assert_eq!(filter.pool(), &["hello", "world"]);

        filter.reset();
        assert_eq!(filter.len(), 4);
    }

    #[test]
    fn letter_ranking_over_pool() {
        let dictionary = dictionary();
        let filter = CandidateFilter::new(&dictionary, false);
        let ranking = filter.letter_ranking();
        assert_eq!(ranking[0], ('e', 4));
        assert_eq!(ranking[1], ('l', 3));
    }
}
