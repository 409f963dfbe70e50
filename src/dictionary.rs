//! The word list and its dense integer indices.

use std::path::Path;

use hashbrown::HashMap;
use log::info;

use crate::bitset::CandidateSet;
use crate::error::{InputError, Result};
use crate::index::ConstraintIndex;
use crate::WORD_LENGTH;

/// A word as letter numbers, `0` for 'a' through `25` for 'z'.
pub type Letters = [u8; WORD_LENGTH];

/// Convert a lowercase word to letter numbers.
pub fn letters(word: &str) -> Option<Letters> {
    let bytes = word.as_bytes();
    if bytes.len() != WORD_LENGTH || !bytes.iter().all(u8::is_ascii_lowercase) {
        return None;
    }
    Some(std::array::from_fn(|i| bytes[i] - b'a'))
}

/// Index of a word in its [`Dictionary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(u32);

impl Word {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for Word {
    fn from(i: usize) -> Self {
        Word(i as u32)
    }
}

/// Immutable bijection between word strings and [`Word`] indices.
/// Index assignment is positional: the first word is `Word(0)`.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    letters: Vec<Letters>,
    lookup: HashMap<String, Word>,
    index: ConstraintIndex,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let mut lookup = HashMap::with_capacity(words.len());
        let mut all_letters = Vec::with_capacity(words.len());

        for (i, word) in words.iter().enumerate() {
            let l = letters(word).ok_or_else(|| InputError::MalformedWord {
                word: word.clone(),
                expected: WORD_LENGTH,
            })?;
            if lookup.insert(word.clone(), Word::from(i)).is_some() {
                return Err(InputError::DuplicateWord(word.clone()).into());
            }
            all_letters.push(l);
        }

        let index = ConstraintIndex::build(&all_letters);
        info!("dictionary ready with {} words", words.len());
        Ok(Self {
            words,
            letters: all_letters,
            lookup,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, s: &str) -> Option<Word> {
        self.lookup.get(s).copied()
    }

    /// Like [`Dictionary::word`], reporting unknown words as input errors.
    pub fn lookup(&self, s: &str) -> Result<Word> {
        self.word(s)
            .ok_or_else(|| InputError::UnknownWord(s.to_string()).into())
    }

    pub fn lookup_all<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Word>> {
        words.iter().map(|w| self.lookup(w.as_ref())).collect()
    }

    pub fn string(&self, word: Word) -> &str {
        &self.words[word.index()]
    }

    pub fn letters(&self, word: Word) -> &Letters {
        &self.letters[word.index()]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn constraint_index(&self) -> &ConstraintIndex {
        &self.index
    }

    pub fn all(&self) -> CandidateSet {
        CandidateSet::full(self.len())
    }

    pub fn empty(&self) -> CandidateSet {
        CandidateSet::new(self.len())
    }

    pub fn candidates_from_strings<S: AsRef<str>>(&self, words: &[S]) -> Result<CandidateSet> {
        let mut set = self.empty();
        for w in words {
            set.insert(self.lookup(w.as_ref())?.index());
        }
        Ok(set)
    }

    /// Members of `set` as strings, in index order.
    pub fn strings<'a>(&'a self, set: &CandidateSet) -> Vec<&'a str> {
        set.iter().map(|i| self.words[i].as_str()).collect()
    }

    pub fn to_strings(&self, words: &[Word]) -> Vec<&str> {
        words.iter().map(|&w| self.string(w)).collect()
    }
}

/// Members of a candidate set as words, in index order.
pub fn members(set: &CandidateSet) -> impl Iterator<Item = Word> + '_ {
    set.iter().map(Word::from)
}

/// Read a newline separated word list: trimmed, lowercased, blank lines
/// dropped, sorted and deduplicated.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| InputError::WordList {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let mut words: Vec<String> = text
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    words.sort();
    words.dedup();
    if words.is_empty() {
        return Err(InputError::WordList {
            path: path.display().to_string(),
            message: "no words found".to_string(),
        }
        .into());
    }
    Ok(words)
}
