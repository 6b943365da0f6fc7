use crate::config::PageConfig;

pub const REVEAL_CLASS: &str = "fade-in-up";
pub const REVEAL_SELECTOR: &str = ".section, .project, .skill-card";

pub const HOVER_LIFT: &str = "translateY(-4px)";
pub const HOVER_REST: &str = "translateY(0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingStep {
    Append(char),
    HideCursor,
}

/// Typing effect schedule: each step carries the delay to wait before it.
///
/// Yields one `Append` per character of the heading text, in order, then a
/// single `HideCursor`, then ends.
#[derive(Debug, Clone)]
pub struct TypingSequence {
    chars: Vec<char>,
    next: usize,
    cursor_hidden: bool,
    start_delay_ms: u32,
    interval_ms: u32,
    cursor_hide_delay_ms: u32,
}

impl TypingSequence {
    pub fn new(text: &str, config: &PageConfig) -> Self {
        Self {
            chars: text.chars().collect(),
            next: 0,
            cursor_hidden: false,
            start_delay_ms: config.typing_start_delay_ms,
            interval_ms: config.typing_interval_ms,
            cursor_hide_delay_ms: config.cursor_hide_delay_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters revealed so far.
    pub fn typed(&self) -> String {
        self.chars[..self.next].iter().collect()
    }
}

impl Iterator for TypingSequence {
    type Item = (u32, TypingStep);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(ch) = self.chars.get(self.next).copied() {
            let delay = if self.next == 0 {
                self.start_delay_ms
            } else {
                self.interval_ms
            };
            self.next += 1;
            return Some((delay, TypingStep::Append(ch)));
        }

        if self.cursor_hidden {
            return None;
        }
        self.cursor_hidden = true;
        // An empty heading still waits out the start delay before finishing.
        let delay = if self.chars.is_empty() {
            self.start_delay_ms + self.cursor_hide_delay_ms
        } else {
            self.interval_ms + self.cursor_hide_delay_ms
        };
        Some((delay, TypingStep::HideCursor))
    }
}
