//! Secret word selection

use crate::core::Word;
use crate::wordlists::WordList;
use rand::Rng;

/// Pick a word uniformly at random from `words`
///
/// # Examples
/// ```
/// use dashwords::game::pick_word;
/// use dashwords::wordlists::WordList;
/// use dashwords::wordlists::loader::words_from_slice;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = WordList::new(words_from_slice(&["crane", "slate"])).unwrap();
/// let word = pick_word(&words, &mut StdRng::seed_from_u64(7));
/// assert!(word.text() == "CRANE" || word.text() == "SLATE");
/// ```
pub fn pick_word<R: Rng>(words: &WordList, rng: &mut R) -> Word {
    let index = rng.random_range(0..words.len());
    words[index].clone()
}
