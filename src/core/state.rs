//! Round state machine
//!
//! Owns the secret word, the set of guessed characters, and the
//! remaining-tries counter. Every accepted guess flows through
//! [`GuessState::submit`], which reports what happened as a
//! [`GuessResult`] for the presentation layer to render.

use super::guess::Guess;
use super::word::Word;
use rustc_hash::FxHashSet;

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

/// The effect of one submitted guess
///
/// Variants carry just enough payload for the presentation layer to
/// format a message; the state itself is queried through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// Input was unparseable (or the round is already over); nothing changed
    RejectedInvalid,
    /// Character was guessed before; nothing changed, no try consumed
    AlreadyGuessed(char),
    /// Character is in the word
    CorrectLetter(char),
    /// Character is not in the word; a try was consumed
    WrongLetter(char),
    /// Whole-word guess matched exactly
    CorrectWord,
    /// Whole-word guess missed; a try was consumed
    WrongWord(String),
    /// Whole-word guessing is still locked; nothing changed
    WordGuessLockedOut,
}

/// Per-round behavior configuration
///
/// Collapses the variant behaviors of the game into one implementation:
/// whether a lone space counts as a guessable character, and whether
/// whole-word guesses are locked until enough tries have been spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRules {
    /// Accept a single space as a letter guess (phrases contain spaces)
    pub accept_space: bool,
    /// When `Some(t)`, whole-word guesses are rejected while the
    /// remaining-tries counter is still at or above `t`. Locked-out
    /// guesses never consume a try.
    pub word_guess_unlock_below: Option<u32>,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            accept_space: true,
            word_guess_unlock_below: None,
        }
    }
}

impl RoundRules {
    /// Tries granted at the start of a round
    ///
    /// Short words get more slack: `max(8, 15 - word_len)`.
    #[must_use]
    pub fn initial_tries(word_len: usize) -> u32 {
        let scaled = 15_usize.saturating_sub(word_len).max(8);
        u32::try_from(scaled).unwrap_or(8)
    }
}

/// The guessing state machine for one round
///
/// Created when a word is chosen, mutated by each submitted guess, and
/// discarded when the round ends. The word never changes, the guessed
/// set only grows, and the tries counter never goes below zero.
#[derive(Debug, Clone)]
pub struct GuessState {
    word: Word,
    rules: RoundRules,
    guessed: FxHashSet<char>,
    tries_remaining: u32,
    outcome: GameOutcome,
}

impl GuessState {
    /// Start a round for the given word
    #[must_use]
    pub fn new(word: Word, rules: RoundRules) -> Self {
        let tries_remaining = RoundRules::initial_tries(word.len());
        Self {
            word,
            rules,
            guessed: FxHashSet::default(),
            tries_remaining,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Apply one raw input and report what happened
    ///
    /// Invalid input and repeats never mutate state or consume a try.
    /// Once the round is over, every further submit is a no-op reported
    /// as `RejectedInvalid`.
    pub fn submit(&mut self, input: &str) -> GuessResult {
        if self.outcome != GameOutcome::InProgress {
            return GuessResult::RejectedInvalid;
        }

        let Ok(guess) = Guess::parse(input, self.word.len(), self.rules.accept_space) else {
            return GuessResult::RejectedInvalid;
        };

        match guess {
            Guess::Letter(c) => self.submit_letter(c),
            Guess::Whole(text) => self.submit_whole(&text),
        }
    }

    fn submit_letter(&mut self, c: char) -> GuessResult {
        if self.guessed.contains(&c) {
            return GuessResult::AlreadyGuessed(c);
        }

        self.guessed.insert(c);

        if self.word.has_char(c) {
            if self.word.letters().all(|l| self.guessed.contains(&l)) {
                self.outcome = GameOutcome::Won;
            }
            GuessResult::CorrectLetter(c)
        } else {
            self.spend_try();
            GuessResult::WrongLetter(c)
        }
    }

    fn submit_whole(&mut self, text: &str) -> GuessResult {
        if let Some(threshold) = self.rules.word_guess_unlock_below {
            if self.tries_remaining >= threshold {
                return GuessResult::WordGuessLockedOut;
            }
        }

        if text == self.word.text() {
            self.outcome = GameOutcome::Won;
            GuessResult::CorrectWord
        } else {
            self.spend_try();
            GuessResult::WrongWord(text.to_string())
        }
    }

    fn spend_try(&mut self) {
        self.tries_remaining = self.tries_remaining.saturating_sub(1);
        if self.tries_remaining == 0 {
            self.outcome = GameOutcome::Lost;
        }
    }

    /// The word with unguessed letters hidden
    ///
    /// Alphabetic characters show as `_` until guessed; digits, spaces,
    /// and punctuation are always revealed. Characters are separated by
    /// single spaces.
    #[must_use]
    pub fn render_progress(&self) -> String {
        let shown: Vec<String> = self
            .word
            .text()
            .chars()
            .map(|c| {
                if !c.is_alphabetic() || self.guessed.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        shown.join(" ")
    }

    /// Current outcome of the round
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Whether the round has ended
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != GameOutcome::InProgress
    }

    /// Tries left before the round is lost
    #[inline]
    #[must_use]
    pub const fn tries_remaining(&self) -> u32 {
        self.tries_remaining
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Characters guessed so far, sorted for stable display
    #[must_use]
    pub fn guessed_chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.guessed.iter().copied().collect();
        chars.sort_unstable();
        chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(word: &str) -> GuessState {
        GuessState::new(Word::new(word).unwrap(), RoundRules::default())
    }

    #[test]
    fn initial_tries_policy() {
        assert_eq!(RoundRules::initial_tries(3), 12);
        assert_eq!(RoundRules::initial_tries(7), 8);
        assert_eq!(RoundRules::initial_tries(10), 8); // floor at 8
        assert_eq!(RoundRules::initial_tries(20), 8); // no underflow
    }

    #[test]
    fn correct_letters_win_the_round() {
        // word=CAT starts with max(8, 15-3) = 12 tries
        let mut s = state("cat");
        assert_eq!(s.tries_remaining(), 12);

        assert_eq!(s.submit("z"), GuessResult::WrongLetter('Z'));
        assert_eq!(s.tries_remaining(), 11);

        assert_eq!(s.submit("c"), GuessResult::CorrectLetter('C'));
        assert_eq!(s.submit("a"), GuessResult::CorrectLetter('A'));
        assert_eq!(s.outcome(), GameOutcome::InProgress);

        assert_eq!(s.submit("t"), GuessResult::CorrectLetter('T'));
        assert_eq!(s.outcome(), GameOutcome::Won);
    }

    #[test]
    fn wrong_letters_exhaust_tries_and_lose() {
        let mut s = GuessState::new(Word::new("dog").unwrap(), RoundRules::default());
        // Drain all tries with distinct wrong letters.
        let wrong = ['X', 'Y', 'Z', 'Q', 'W', 'V', 'U', 'N', 'M', 'K', 'J', 'H'];
        assert_eq!(u32::try_from(wrong.len()).unwrap(), s.tries_remaining());

        for (i, c) in wrong.iter().enumerate() {
            assert_eq!(s.submit(&c.to_string()), GuessResult::WrongLetter(*c));
            assert_eq!(s.tries_remaining(), 12 - u32::try_from(i + 1).unwrap());
        }

        assert_eq!(s.outcome(), GameOutcome::Lost);
        assert_eq!(s.tries_remaining(), 0);
    }

    #[test]
    fn repeated_letters_never_repenalized() {
        let mut s = state("cat");
        s.submit("z");
        let tries = s.tries_remaining();

        assert_eq!(s.submit("z"), GuessResult::AlreadyGuessed('Z'));
        assert_eq!(s.tries_remaining(), tries);

        s.submit("c");
        assert_eq!(s.submit("c"), GuessResult::AlreadyGuessed('C'));
        assert_eq!(s.tries_remaining(), tries);
    }

    #[test]
    fn whole_word_match_wins_immediately() {
        let mut s = state("hi");
        assert_eq!(s.submit("hi"), GuessResult::CorrectWord);
        assert_eq!(s.outcome(), GameOutcome::Won);
    }

    #[test]
    fn whole_word_match_is_case_insensitive() {
        let mut s = state("tiger");
        assert_eq!(s.submit("TiGeR"), GuessResult::CorrectWord);
        assert_eq!(s.outcome(), GameOutcome::Won);
    }

    #[test]
    fn whole_word_miss_consumes_a_try() {
        let mut s = state("dog");
        let tries = s.tries_remaining();
        assert_eq!(s.submit("cow"), GuessResult::WrongWord("COW".to_string()));
        assert_eq!(s.tries_remaining(), tries - 1);
        assert_eq!(s.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn wrong_length_input_rejected_without_cost() {
        let mut s = state("hi");
        let tries = s.tries_remaining();
        assert_eq!(s.submit("cat"), GuessResult::RejectedInvalid);
        assert_eq!(s.tries_remaining(), tries);
        assert_eq!(s.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn punctuation_input_rejected_without_cost() {
        let mut s = state("cat");
        let tries = s.tries_remaining();
        assert_eq!(s.submit("?"), GuessResult::RejectedInvalid);
        assert_eq!(s.submit(""), GuessResult::RejectedInvalid);
        assert_eq!(s.tries_remaining(), tries);
    }

    #[test]
    fn tries_never_negative() {
        let mut s = state("dog");
        for c in 'b'..='z' {
            if !"dog".contains(c) {
                s.submit(&c.to_string());
            }
        }
        assert_eq!(s.tries_remaining(), 0);
        assert_eq!(s.outcome(), GameOutcome::Lost);
    }

    #[test]
    fn finished_round_refuses_further_guesses() {
        let mut s = state("hi");
        s.submit("hi");
        assert_eq!(s.outcome(), GameOutcome::Won);

        let guessed = s.guessed_chars();
        assert_eq!(s.submit("h"), GuessResult::RejectedInvalid);
        assert_eq!(s.guessed_chars(), guessed);
        assert_eq!(s.outcome(), GameOutcome::Won);
    }

    #[test]
    fn progress_hides_unguessed_letters() {
        let mut s = state("cat");
        assert_eq!(s.render_progress(), "_ _ _");

        s.submit("a");
        assert_eq!(s.render_progress(), "_ A _");

        s.submit("c");
        s.submit("t");
        assert_eq!(s.render_progress(), "C A T");
    }

    #[test]
    fn progress_always_reveals_non_alphabetic() {
        let s = state("route 66");
        assert_eq!(s.render_progress(), "_ _ _ _ _   6 6");
    }

    #[test]
    fn digits_are_guessable_but_not_required_to_win() {
        let mut s = state("route 66");
        assert_eq!(s.submit("6"), GuessResult::CorrectLetter('6'));

        for c in ['r', 'o', 'u', 't'] {
            s.submit(&c.to_string());
        }
        assert_eq!(s.outcome(), GameOutcome::InProgress);

        assert_eq!(s.submit("e"), GuessResult::CorrectLetter('E'));
        assert_eq!(s.outcome(), GameOutcome::Won);
    }

    #[test]
    fn space_counts_as_a_guessable_character() {
        let mut s = GuessState::new(
            Word::new("io io").unwrap(),
            RoundRules {
                accept_space: true,
                word_guess_unlock_below: None,
            },
        );
        assert_eq!(s.submit(" "), GuessResult::CorrectLetter(' '));

        s.submit("i");
        s.submit("o");
        assert_eq!(s.outcome(), GameOutcome::Won);
    }

    #[test]
    fn locked_word_guess_costs_nothing() {
        let mut s = GuessState::new(
            Word::new("elephant").unwrap(),
            RoundRules {
                accept_space: true,
                word_guess_unlock_below: Some(5),
            },
        );
        let tries = s.tries_remaining();
        assert!(tries >= 5);

        assert_eq!(s.submit("elephant"), GuessResult::WordGuessLockedOut);
        assert_eq!(s.tries_remaining(), tries);
        assert_eq!(s.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn word_guess_unlocks_below_threshold() {
        let mut s = GuessState::new(
            Word::new("elephant").unwrap(),
            RoundRules {
                accept_space: true,
                word_guess_unlock_below: Some(5),
            },
        );
        // 8 tries for an 8-letter word; burn down to 4 remaining.
        for c in ['q', 'w', 'x', 'z'] {
            assert!(matches!(
                s.submit(&c.to_string()),
                GuessResult::WrongLetter(_)
            ));
        }
        assert_eq!(s.tries_remaining(), 4);

        assert_eq!(s.submit("elephant"), GuessResult::CorrectWord);
        assert_eq!(s.outcome(), GameOutcome::Won);
    }

    #[test]
    fn guessed_chars_sorted_for_display() {
        let mut s = state("cat");
        s.submit("t");
        s.submit("a");
        s.submit("z");
        assert_eq!(s.guessed_chars(), vec!['A', 'T', 'Z']);
    }
}
