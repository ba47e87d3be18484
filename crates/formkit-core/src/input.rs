//! Edit buffers for text and number input rows.

/// Parse user-entered text as a whole number.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// (optionally signed) integer is rejected.
pub fn parse_number(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Format a number for display in an input row.
pub fn format_number(value: i64) -> String {
    value.to_string()
}

/// Text buffer for a number field.
///
/// The field edits `text` freely; the bound value only changes on
/// [`NumberDraft::commit`]. A rejected commit reverts the text to the last
/// committed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberDraft {
    text: String,
    committed: i64,
}

impl NumberDraft {
    /// Create a draft showing `value`.
    pub fn new(value: i64) -> Self {
        Self {
            text: format_number(value),
            committed: value,
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable text for the editor.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Last committed value.
    pub fn committed(&self) -> i64 {
        self.committed
    }

    /// Whether the text differs from the committed value's formatting.
    pub fn is_dirty(&self) -> bool {
        self.text != format_number(self.committed)
    }

    /// Pick up an externally changed value. Ignored while the user is editing.
    pub fn sync(&mut self, value: i64, editing: bool) {
        if !editing && value != self.committed {
            *self = Self::new(value);
        }
    }

    /// Parse the text. On success the value is stored and the text normalized;
    /// on failure the text reverts and `None` is returned.
    pub fn commit(&mut self) -> Option<i64> {
        match parse_number(&self.text) {
            Some(value) => {
                *self = Self::new(value);
                Some(value)
            }
            None => {
                log::debug!("Rejected number input {:?}", self.text);
                self.text = format_number(self.committed);
                None
            }
        }
    }
}
