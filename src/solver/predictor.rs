//! Letter predictors
//!
//! A predictor is an opaque capability: given a fixed-length, mask-padded
//! window of characters it answers the letter it thinks comes next. The
//! routing strategy builds the windows from the masked word, asks the
//! predictor about each one and tallies the answers.

use super::candidates::rank_chars;
use crate::wordlists::Dictionary;
use rustc_hash::{FxHashMap, FxHashSet};

/// Anything that can name a likely next letter for a context window
///
/// Implementations may answer the mask character (or any non-letter) when
/// they have no opinion; those answers are discarded.
pub trait LetterPredictor {
    fn predict(&self, window: &[char]) -> char;
}

impl<P: LetterPredictor + ?Sized> LetterPredictor for &P {
    fn predict(&self, window: &[char]) -> char {
        (**self).predict(window)
    }
}

/// Adapter turning a plain function or closure into a predictor
#[derive(Debug, Clone, Copy)]
pub struct FnPredictor<F>(pub F);

impl<F: Fn(&[char]) -> char> LetterPredictor for FnPredictor<F> {
    fn predict(&self, window: &[char]) -> char {
        (self.0)(window)
    }
}

/// Shape of the context windows handed to a predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Smallest n-gram taken from the masked word (default: 2)
    pub n_min: usize,
    /// Largest n-gram, exclusive (default: 7)
    pub n_max: usize,
    /// Length every window is padded to (default: 5)
    pub window: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            n_min: 2,
            n_max: 7,
            window: 5,
        }
    }
}

/// Right-pad `context` with `mask` to `window` characters
///
/// Longer contexts keep their last `window` characters.
fn pad(context: &[char], mask: char, window: usize) -> Vec<char> {
    let start = context.len().saturating_sub(window);
    let mut padded = context[start..].to_vec();
    padded.resize(window, mask);
    padded
}

/// Every n-gram of `chars` for sizes `n_min..n_max`, forward grams first and
/// then each one reversed
fn ngrams(chars: &[char], config: &PredictorConfig) -> Vec<Vec<char>> {
    let forward: Vec<Vec<char>> = (config.n_min.max(2)..config.n_max)
        .flat_map(|n| chars.windows(n).map(<[char]>::to_vec))
        .collect();

    let reversed: Vec<Vec<char>> = forward
        .iter()
        .map(|gram| gram.iter().rev().copied().collect())
        .collect();

    forward.into_iter().chain(reversed).collect()
}

/// Padded context windows for a masked word
///
/// Each n-gram minus its last character is a context. Contexts made only of
/// mask characters are dropped, and duplicates keep their first occurrence.
///
/// # Examples
/// ```
/// use hangman_solver::solver::predictor::{PredictorConfig, context_windows};
///
/// let config = PredictorConfig { n_min: 2, n_max: 3, window: 2 };
/// let windows = context_windows("a_", '_', &config);
/// assert_eq!(windows, vec![vec!['a', '_']]);
/// ```
#[must_use]
pub fn context_windows(masked: &str, mask: char, config: &PredictorConfig) -> Vec<Vec<char>> {
    let chars: Vec<char> = masked.chars().collect();
    let mut seen: FxHashSet<Vec<char>> = FxHashSet::default();
    let mut windows = Vec::new();

    for gram in ngrams(&chars, config) {
        let context = &gram[..gram.len() - 1];
        if context.iter().all(|&c| c == mask) {
            continue;
        }

        let padded = pad(context, mask, config.window);
        if seen.insert(padded.clone()) {
            windows.push(padded);
        }
    }

    windows
}

/// Ask `predictor` about every context of `masked` and rank its answers
///
/// Answers that are the mask, not alphabetic, or already in `guessed` are
/// discarded. The rest are ordered by how many windows produced them.
pub fn ranked_predictions<P: LetterPredictor + ?Sized>(
    predictor: &P,
    masked: &str,
    mask: char,
    config: &PredictorConfig,
    guessed: &FxHashSet<char>,
) -> Vec<char> {
    let answers = context_windows(masked, mask, config)
        .iter()
        .map(|window| predictor.predict(window))
        .filter(|&letter| letter != mask && letter.is_alphabetic() && !guessed.contains(&letter))
        .collect::<Vec<_>>();

    rank_chars(answers)
        .into_iter()
        .map(|(letter, _)| letter)
        .collect()
}

/// Table predictor built from dictionary n-gram counts
///
/// For every padded context seen in the dictionary it remembers the letter
/// that most often follows. Unknown contexts back off by dropping their
/// leading character; if nothing matches it answers the mask. Ties between
/// followers go to the alphabetically smallest letter.
#[derive(Debug, Clone)]
pub struct NgramPredictor {
    table: FxHashMap<Vec<char>, char>,
    mask: char,
    window: usize,
}

impl NgramPredictor {
    /// Count context → next-letter pairs across the dictionary
    #[must_use]
    pub fn from_dictionary(dictionary: &Dictionary, mask: char, config: &PredictorConfig) -> Self {
        let mut counts: FxHashMap<Vec<char>, FxHashMap<char, usize>> = FxHashMap::default();

        for word in dictionary.words() {
            let chars: Vec<char> = word.chars().collect();
            for gram in ngrams(&chars, config) {
                let Some((&next, context)) = gram.split_last() else {
                    continue;
                };
                *counts
                    .entry(pad(context, mask, config.window))
                    .or_default()
                    .entry(next)
                    .or_insert(0) += 1;
            }
        }

        let table = counts
            .into_iter()
            .filter_map(|(context, followers)| {
                followers
                    .into_iter()
                    .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then(b.cmp(a)))
                    .map(|(letter, _)| (context, letter))
            })
            .collect();

        Self {
            table,
            mask,
            window: config.window,
        }
    }

    /// Number of distinct contexts the table knows
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl LetterPredictor for NgramPredictor {
    fn predict(&self, window: &[char]) -> char {
        let end = window
            .iter()
            .rposition(|&c| c != self.mask)
            .map_or(0, |idx| idx + 1);

        let mut context = &window[..end];
        while !context.is_empty() {
            if let Some(&letter) = self.table.get(&pad(context, self.mask, self.window)) {
                return letter;
            }
            context = &context[1..];
        }

        self.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PredictorConfig {
        PredictorConfig::default()
    }

    #[test]
    fn pad_right_fills_and_truncates() {
        assert_eq!(pad(&['a'], '_', 3), vec!['a', '_', '_']);
        assert_eq!(pad(&['a', 'b', 'c', 'd'], '_', 2), vec!['c', 'd']);
    }

    #[test]
    fn windows_skip_all_mask_contexts() {
        let windows = context_windows("_____", '_', &config());
        assert!(windows.is_empty());
    }

    #[test]
    fn windows_are_padded_and_unique() {
        let windows = context_windows("_e___", '_', &config());

        assert!(!windows.is_empty());
        assert!(windows.iter().all(|w| w.len() == 5));
        assert!(windows.contains(&vec!['e', '_', '_', '_', '_']));

        let unique: FxHashSet<_> = windows.iter().collect();
        assert_eq!(unique.len(), windows.len());
    }

    #[test]
    fn windows_include_reversed_grams() {
        let small = PredictorConfig {
            n_min: 2,
            n_max: 3,
            window: 1,
        };
        // Forward contexts: 'a', 'b'; reversed: 'b', 'c'
        let windows = context_windows("abc", '_', &small);
        assert_eq!(windows, vec![vec!['a'], vec!['b'], vec!['c']]);
    }

    #[test]
    fn mask_answers_are_filtered() {
        let predictor = FnPredictor(|_: &[char]| '_');
        let ranked =
            ranked_predictions(&predictor, "_e___", '_', &config(), &FxHashSet::default());
        assert!(ranked.is_empty());
    }

    #[test]
    fn guessed_answers_are_filtered() {
        let predictor = FnPredictor(|window: &[char]| if window[0] == 'e' { 'l' } else { 'h' });
        let mut guessed = FxHashSet::default();
        guessed.insert('h');

        let ranked = ranked_predictions(&predictor, "_e___", '_', &config(), &guessed);
        assert_eq!(ranked, vec!['l']);
    }

    #[test]
    fn ngram_predictor_learns_followers() {
        let dictionary = Dictionary::from_slice(&["hello", "help", "held"]);
        let predictor = NgramPredictor::from_dictionary(&dictionary, '_', &config());

        assert!(!predictor.is_empty());
        assert_eq!(predictor.predict(&['h', 'e', '_', '_', '_']), 'l');
        assert_eq!(predictor.predict(&['h', '_', '_', '_', '_']), 'e');
    }

    #[test]
    fn ngram_predictor_backs_off_then_gives_up() {
        let dictionary = Dictionary::from_slice(&["hello"]);
        let predictor = NgramPredictor::from_dictionary(&dictionary, '_', &config());

        // "zh" is unknown, "h" is known
        assert_eq!(predictor.predict(&['z', 'h', '_', '_', '_']), 'e');
        // 'e' is followed by 'l' forwards and 'h' backwards
        assert_eq!(predictor.predict(&['e', '_', '_', '_', '_']), 'h');
        assert_eq!(predictor.predict(&['q', '_', '_', '_', '_']), '_');
        assert_eq!(predictor.predict(&['_', '_', '_', '_', '_']), '_');
    }
}
