//! Feedback calculation for guesses.
//!
//! This module computes the per-letter colour pattern a guess receives against
//! a solution, and derives from a (guess, feedback) pair the letter-count
//! constraints the constraint index needs to filter candidates.

use smallvec::SmallVec;

use crate::dictionary::Letters;
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Letter not in the solution, or every occurrence already accounted for
    Absent = 0,
    /// Letter in the solution but at another position
    Present = 1,
    /// Correct letter in correct position
    Correct = 2,
}

impl Color {
    /// Character used at the input/output boundary.
    pub fn to_char(self) -> char {
        match self {
            Color::Correct => 'g',
            Color::Present => 'y',
            Color::Absent => 'r',
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            Color::Correct => '🟩',
            Color::Present => '🟨',
            Color::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, r/b=red/black)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Color::Correct),
            'y' | '1' => Some(Color::Present),
            'r' | 'b' | 'x' | '0' => Some(Color::Absent),
            _ => None,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            2 => Color::Correct,
            1 => Color::Present,
            _ => Color::Absent,
        }
    }
}

/// A complete feedback pattern for one guess.
/// Position `i` is stored in bits `2i..2i+2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback(u16);

impl Feedback {
    /// The pattern indicating all correct (winning)
    pub const ALL_CORRECT: Self = Self(0b10_10_10_10_10);

    pub fn new(colors: [Color; WORD_LENGTH]) -> Self {
        let mut bits = 0u16;
        for (i, color) in colors.into_iter().enumerate() {
            bits |= (color as u16) << (2 * i);
        }
        Self(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn color(self, position: usize) -> Color {
        Color::from_bits(self.0 >> (2 * position))
    }

    pub fn colors(self) -> [Color; WORD_LENGTH] {
        std::array::from_fn(|i| self.color(i))
    }

    /// Classify `guess` against `solution`.
    ///
    /// Exact matches are marked first. The solution letters left over are then
    /// handed out to the remaining guess letters from left to right, so when a
    /// guess repeats a letter more often than the solution holds it, the
    /// leftmost extra occurrences are the ones marked present.
    pub fn classify(solution: &Letters, guess: &Letters) -> Self {
        let mut colors = [Color::Absent; WORD_LENGTH];
        let mut remaining = [0u8; ALPHABET_SIZE];

        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                colors[i] = Color::Correct;
            } else {
                remaining[solution[i] as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if colors[i] != Color::Correct {
                let letter = guess[i] as usize;
                if remaining[letter] > 0 {
                    colors[i] = Color::Present;
                    remaining[letter] -= 1;
                }
            }
        }

        Self::new(colors)
    }

    /// Classify two words given as strings. `None` if either is not a valid
    /// lowercase word of the right length.
    pub fn for_words(solution: &str, guess: &str) -> Option<Self> {
        let solution = crate::dictionary::letters(solution)?;
        let guess = crate::dictionary::letters(guess)?;
        Some(Self::classify(&solution, &guess))
    }

    /// Whether present marks on `guess` sit left of absent marks for the same
    /// letter, as [`Feedback::classify`] always places them. A pattern failing
    /// this can never be the classification of `guess`.
    pub fn is_leftmost_consistent(self, guess: &Letters) -> bool {
        let mut absent = [false; ALPHABET_SIZE];
        for (i, &letter) in guess.iter().enumerate() {
            let l = letter as usize;
            match self.color(i) {
                Color::Absent => absent[l] = true,
                Color::Present if absent[l] => return false,
                _ => {}
            }
        }
        true
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern from a string like "gyrrr", "gybbb" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let mut colors = [Color::Absent; WORD_LENGTH];
        for (slot, c) in colors.iter_mut().zip(s.chars()) {
            *slot = Color::from_char(c)?;
        }
        Some(Self::new(colors))
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.colors().iter().map(|c| c.to_emoji()).collect()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in self.colors() {
            write!(f, "{}", color.to_char())?;
        }
        Ok(())
    }
}

/// A letter (0 = 'a') together with an occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterCount {
    pub letter: u8,
    pub count: u8,
}

/// What a (guess, feedback) pair says about the solution's letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub feedback: Feedback,
    /// Letters marked present at least once: the solution holds at least
    /// `count` of them (every exact and present mark of that letter).
    pub at_least: SmallVec<[LetterCount; WORD_LENGTH]>,
    /// Letters marked absent at least once: the solution holds at most
    /// `count` of them (only the marked occurrences exist).
    pub at_most: SmallVec<[LetterCount; WORD_LENGTH]>,
}

impl Clue {
    pub fn new(guess: &Letters, feedback: Feedback) -> Self {
        let mut marked = [0u8; ALPHABET_SIZE];
        let mut present = [false; ALPHABET_SIZE];
        let mut absent = [false; ALPHABET_SIZE];

        for (i, &letter) in guess.iter().enumerate() {
            let letter = letter as usize;
            match feedback.color(i) {
                Color::Correct => marked[letter] += 1,
                Color::Present => {
                    marked[letter] += 1;
                    present[letter] = true;
                }
                Color::Absent => absent[letter] = true,
            }
        }

        let mut at_least = SmallVec::new();
        let mut at_most = SmallVec::new();
        let mut seen = [false; ALPHABET_SIZE];
        for &letter in guess {
            let l = letter as usize;
            if std::mem::replace(&mut seen[l], true) {
                continue;
            }
            if present[l] {
                at_least.push(LetterCount {
                    letter,
                    count: marked[l],
                });
            }
            if absent[l] {
                at_most.push(LetterCount {
                    letter,
                    count: marked[l],
                });
            }
        }

        Self {
            feedback,
            at_least,
            at_most,
        }
    }
}
