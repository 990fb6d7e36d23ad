//! Quote-aware scanning shared by the property and parameter scanners.

/// Scanner state for double-quote parity.
///
/// A `"` toggles between the two states. Delimiters only split while in
/// [`QuoteState::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    #[default]
    Default,
    InQuotes,
}

impl QuoteState {
    /// Returns the state after consuming `c`.
    #[must_use]
    pub const fn step(self, c: char) -> Self {
        match (self, c) {
            (Self::Default, '"') => Self::InQuotes,
            (Self::InQuotes, '"') => Self::Default,
            (state, _) => state,
        }
    }

    #[must_use]
    pub const fn is_quoted(self) -> bool {
        matches!(self, Self::InQuotes)
    }
}

/// Returns the byte offset of the first `target` outside double quotes.
#[must_use]
pub fn find_unquoted(text: &str, target: char) -> Option<usize> {
    let mut state = QuoteState::Default;
    for (i, c) in text.char_indices() {
        if c == target && !state.is_quoted() {
            return Some(i);
        }
        state = state.step(c);
    }
    None
}

/// Returns the byte offset of the quote that closes the one opening `text`.
///
/// `None` if `text` does not open with `"` or the quote is never closed.
#[must_use]
pub fn closing_quote(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    let mut state = QuoteState::Default.step(chars.next()?.1);
    if !state.is_quoted() {
        return None;
    }
    for (i, c) in chars {
        state = state.step(c);
        if !state.is_quoted() {
            return Some(i);
        }
    }
    None
}
