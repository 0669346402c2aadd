//! Recovery phrases for locally created and imported wallets.
//!
//! Phrases are 12 (generated) or 24 (importable) words drawn from [`WORDLIST`]. Only the
//! [`Mnemonic::fingerprint`] of a phrase is ever meant to leave memory.

use std::str::FromStr;

use derivative::Derivative;
use itertools::Itertools;
use rand::seq::{index, SliceRandom};
use rand::Rng;

pub const WORD_COUNT: usize = 12;
pub const LONG_WORD_COUNT: usize = 24;
pub const CHALLENGE_SIZE: usize = 3;

pub const WORDLIST: &[&str] = &[
    "abandon", "ability", "able", "about", "above", "absent", "absorb", "abstract", "absurd",
    "abuse", "access", "accident", "account", "accuse", "achieve", "acid", "acoustic", "acquire",
    "across", "act", "action", "actor", "actress", "actual", "adapt", "add", "addict", "address",
    "adjust", "admit", "adult", "advance", "advice", "aerobic", "affair", "afford", "afraid",
    "again", "age", "agent", "agree", "ahead", "aim", "air", "airport", "aisle", "alarm", "album",
    "alcohol", "alert", "alien", "all", "alley", "allow", "almost", "alone", "alpha", "already",
    "also", "alter", "always", "amateur", "amazing", "among", "amount", "amused", "analyst",
    "anchor", "ancient", "anger", "angle", "angry", "animal", "ankle", "announce", "annual",
    "another", "answer", "antenna", "antique", "anxiety", "any", "apart", "apology", "appear",
    "apple", "approve", "april", "arch", "arctic", "area", "arena", "argue", "arm", "armed",
    "armor", "army", "around", "arrange", "arrest", "arrive", "arrow", "art", "artefact", "artist",
    "artwork", "ask", "aspect", "assault", "asset", "assist", "assume", "asthma", "athlete",
    "atom", "attack", "attend", "attitude", "attract", "auction", "audit", "august", "aunt",
    "author", "auto", "autumn", "average", "avocado", "avoid", "awake", "aware", "away", "awesome",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("A recovery phrase has {WORD_COUNT} or {LONG_WORD_COUNT} words, got {0}")]
    WordCount(usize),
    #[error("Word #{position} \"{word}\" is not a recovery word")]
    UnknownWord { position: usize, word: String },
    #[error("Expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },
    #[error("Word #{0} does not match the recovery phrase")]
    Mismatch(usize),
}

#[derive(Clone, Derivative, PartialEq, Eq)]
#[derivative(Debug)]
pub struct Mnemonic {
    #[derivative(Debug = "ignore")]
    words: Vec<&'static str>,
}

impl Mnemonic {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let words = (0..WORD_COUNT)
            .filter_map(|_| WORDLIST.choose(rng).copied())
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    pub fn phrase(&self) -> String {
        self.words.iter().join(" ")
    }

    /// Sorted, distinct, zero-based positions the user has to repeat back.
    pub fn challenge<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        index::sample(rng, self.words.len(), CHALLENGE_SIZE.min(self.words.len()))
            .into_iter()
            .sorted()
            .collect()
    }

    pub fn verify<S: AsRef<str>>(
        &self,
        positions: &[usize],
        answers: &[S],
    ) -> Result<(), MnemonicError> {
        if positions.len() != answers.len() {
            return Err(MnemonicError::AnswerCount {
                expected: positions.len(),
                actual: answers.len(),
            });
        }

        for (&position, answer) in positions.iter().zip(answers) {
            let expected = self.words.get(position).ok_or(MnemonicError::Mismatch(position + 1))?;
            if !answer.as_ref().trim().eq_ignore_ascii_case(expected) {
                return Err(MnemonicError::Mismatch(position + 1));
            }
        }
        Ok(())
    }

    pub fn fingerprint(&self) -> String {
        let digest = md5::compute(self.phrase());
        hex::encode(&digest.0[..4])
    }
}

impl FromStr for Mnemonic {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.split_whitespace().collect_vec();
        if raw.len() != WORD_COUNT && raw.len() != LONG_WORD_COUNT {
            return Err(MnemonicError::WordCount(raw.len()));
        }

        let words = raw
            .into_iter()
            .enumerate()
            .map(|(idx, word)| {
                let lower = word.to_ascii_lowercase();
                WORDLIST.iter().find(|w| **w == lower).copied().ok_or_else(|| {
                    MnemonicError::UnknownWord { position: idx + 1, word: word.to_owned() }
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { words })
    }
}
