//! Autocomplete suggestion state machine.
//!
//! # Responsibility
//! - Match user input against the phrase corpus and rank a short list.
//! - Track the keyboard-navigable highlight across the open panel.
//!
//! # Invariants
//! - The panel is open exactly when the match list is non-empty.
//! - Matches keep corpus order and are capped at [`MAX_SUGGESTIONS`].
//! - Navigation never changes the match set; selection stays within
//!   `None ..= last match`.

/// Maximum entries shown in the suggestion panel.
pub const MAX_SUGGESTIONS: usize = 5;

/// Stock phrase corpus offered as autocomplete.
pub const DEFAULT_CORPUS: [&str; 20] = [
    "Buy groceries",
    "Call mom",
    "Go to gym",
    "Study for exam",
    "Finish project",
    "Schedule meeting",
    "Pay bills",
    "Clean the house",
    "Cook dinner",
    "Read a book",
    "Do laundry",
    "Visit doctor",
    "Send email",
    "Plan vacation",
    "Exercise",
    "Write report",
    "Attend meeting",
    "Fix car",
    "Water plants",
    "Walk the dog",
];

/// Keyboard navigation direction inside the open panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Suggestion panel state: match list plus highlight position.
///
/// `selected == None` is the "no highlight" resting position the panel
/// opens in; `Down` from there highlights the first match.
#[derive(Debug)]
pub struct SuggestionEngine {
    corpus: Vec<String>,
    matches: Vec<String>,
    selected: Option<usize>,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::with_corpus(DEFAULT_CORPUS.iter().map(|phrase| phrase.to_string()))
    }
}

impl SuggestionEngine {
    /// Creates an engine over a custom phrase corpus, initially closed.
    pub fn with_corpus(corpus: impl IntoIterator<Item = String>) -> Self {
        Self {
            corpus: corpus.into_iter().collect(),
            matches: Vec::new(),
            selected: None,
        }
    }

    /// Rebuilds the match list from raw input.
    ///
    /// Empty (after trimming) input or zero matches closes the panel;
    /// otherwise the panel opens with the highlight reset.
    pub fn update_input(&mut self, raw: &str) {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            self.close();
            return;
        }

        self.matches = self
            .corpus
            .iter()
            .filter(|phrase| phrase.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect();
        self.selected = None;
    }

    /// Moves the highlight; a no-op while the panel is closed.
    pub fn navigate(&mut self, direction: Direction) {
        if self.matches.is_empty() {
            return;
        }

        self.selected = match (direction, self.selected) {
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(index)) => Some((index + 1).min(self.matches.len() - 1)),
            (Direction::Up, None) | (Direction::Up, Some(0)) => None,
            (Direction::Up, Some(index)) => Some(index - 1),
        };
    }

    /// Accepts the highlighted phrase, closing the panel.
    ///
    /// Returns `None` when nothing is highlighted; the caller then
    /// proceeds with the raw typed text.
    pub fn confirm(&mut self) -> Option<String> {
        let phrase = self
            .selected
            .and_then(|index| self.matches.get(index).cloned());
        if phrase.is_some() {
            self.close();
        }
        phrase
    }

    /// Accepts an explicitly picked phrase (pointer selection), closing
    /// the panel.
    pub fn select(&mut self, phrase: &str) -> String {
        self.close();
        phrase.to_string()
    }

    /// Closes the panel unconditionally (escape, blur outside the input).
    pub fn close(&mut self) {
        self.matches.clear();
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Current ranked matches, in corpus order.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Current highlight position, `None` when nothing is highlighted.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}
