//! Type, pause, delete, repeat.
//!
//! The animator is driven by a single external timer: the host asks for
//! [`Typewriter::delay`], waits that long, then calls [`Typewriter::advance`].
//! Durations of zero are allowed and mean "fire on the next tick"; negative
//! durations cannot be expressed.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing(usize),
    PausedBeforeDelete,
    Deleting(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speeds {
    pub type_speed: Duration,
    pub delete_speed: Duration,
    pub pause_time: Duration,
}

impl Default for Speeds {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            pause_time: Duration::from_millis(2000),
        }
    }
}

impl Speeds {
    pub fn from_millis(type_speed: u64, delete_speed: u64, pause_time: u64) -> Self {
        Self {
            type_speed: Duration::from_millis(type_speed),
            delete_speed: Duration::from_millis(delete_speed),
            pause_time: Duration::from_millis(pause_time),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    // length in chars, not bytes
    len: usize,
    phase: Phase,
    speeds: Speeds,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speeds: Speeds) -> Self {
        let text = text.into();
        Self {
            len: text.chars().count(),
            text,
            phase: Phase::Typing(0),
            speeds,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of characters currently revealed.
    pub fn cursor(&self) -> usize {
        match self.phase {
            Phase::Typing(i) | Phase::Deleting(i) => i,
            Phase::PausedBeforeDelete => self.len,
        }
    }

    pub fn displayed(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.cursor())
            .map_or(self.text.len(), |(byte, _)| byte);
        &self.text[..end]
    }

    /// How long the pending timer should wait before the next [`advance`](Self::advance).
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing(i) if i < self.len => self.speeds.type_speed,
            Phase::Typing(_) => self.speeds.pause_time,
            Phase::PausedBeforeDelete => Duration::ZERO,
            Phase::Deleting(0) => Duration::ZERO,
            Phase::Deleting(_) => self.speeds.delete_speed,
        }
    }

    pub fn advance(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Typing(i) if i < self.len => Phase::Typing(i + 1),
            Phase::Typing(_) => Phase::PausedBeforeDelete,
            Phase::PausedBeforeDelete => Phase::Deleting(self.len),
            Phase::Deleting(0) => Phase::Typing(0),
            Phase::Deleting(i) => Phase::Deleting(i - 1),
        };
        self.phase
    }

    /// Swap the target string and start typing it from empty.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.len = self.text.chars().count();
        self.phase = Phase::Typing(0);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn speeds() -> Speeds {
        Speeds::from_millis(100, 50, 2000)
    }

    fn displayed_after(tw: &mut Typewriter, ticks: usize) -> Vec<String> {
        (0..ticks)
            .map(|_| {
                tw.advance();
                tw.displayed().to_string()
            })
            .collect()
    }

    #[test]
    fn test_types_pauses_and_deletes() {
        let mut tw = Typewriter::new("abc", speeds());
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.phase(), Phase::Typing(0));

        assert_eq!(displayed_after(&mut tw, 3), vec!["a", "ab", "abc"]);
        assert_eq!(tw.phase(), Phase::Typing(3));
        assert_eq!(tw.delay(), Duration::from_millis(2000));

        tw.advance();
        assert_eq!(tw.phase(), Phase::PausedBeforeDelete);
        assert_eq!(tw.displayed(), "abc");
        assert_eq!(tw.delay(), Duration::ZERO);

        tw.advance();
        assert_eq!(tw.phase(), Phase::Deleting(3));
        assert_eq!(tw.displayed(), "abc");
        assert_eq!(tw.delay(), Duration::from_millis(50));

        assert_eq!(displayed_after(&mut tw, 3), vec!["ab", "a", ""]);
        assert_eq!(tw.phase(), Phase::Deleting(0));
        assert_eq!(tw.delay(), Duration::ZERO);

        // no pause once empty
        tw.advance();
        assert_eq!(tw.phase(), Phase::Typing(0));
        assert_eq!(displayed_after(&mut tw, 1), vec!["a"]);
    }

    #[test]
    fn test_default_speeds() {
        assert_eq!(Speeds::default(), Speeds::from_millis(100, 50, 2000));
    }

    #[test]
    fn test_delays_per_phase() {
        let mut tw = Typewriter::new("ab", speeds());
        let mut delays = Vec::new();
        for _ in 0..8 {
            delays.push(tw.delay().as_millis());
            tw.advance();
        }
        // Typing(0) Typing(1) Typing(2) Paused Deleting(2) Deleting(1) Deleting(0) Typing(0)
        assert_eq!(delays, vec![100, 100, 2000, 0, 50, 50, 0, 100]);
    }

    #[test]
    fn test_changed_lengths_are_periodic() {
        let text = "hello";
        let n = text.chars().count();
        let mut tw = Typewriter::new(text, speeds());
        let mut lengths = Vec::new();
        let mut last = tw.cursor();
        for _ in 0..100 {
            tw.advance();
            let cursor = tw.cursor();
            if cursor != last {
                lengths.push(cursor);
                last = cursor;
            }
        }
        assert!(lengths.len() > 4 * n);
        for (i, len) in lengths.iter().enumerate().skip(2 * n) {
            assert_eq!(*len, lengths[i - 2 * n], "period broken at {i}");
        }
        assert_eq!(&lengths[..2 * n], &[1, 2, 3, 4, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_text_change_resets() {
        let mut tw = Typewriter::new("abcdef", speeds());
        displayed_after(&mut tw, 4);
        assert_eq!(tw.displayed(), "abcd");

        tw.set_text("xy");
        assert_eq!(tw.phase(), Phase::Typing(0));
        assert_eq!(tw.displayed(), "");
        assert_eq!(displayed_after(&mut tw, 2), vec!["x", "xy"]);
        assert_eq!(tw.delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_multibyte_text_sliced_on_char_boundaries() {
        let mut tw = Typewriter::new("añ✓", speeds());
        assert_eq!(displayed_after(&mut tw, 3), vec!["a", "añ", "añ✓"]);
    }

    #[test]
    fn test_empty_text_still_cycles() {
        let mut tw = Typewriter::new("", speeds());
        assert_eq!(tw.delay(), Duration::from_millis(2000));
        tw.advance();
        assert_eq!(tw.phase(), Phase::PausedBeforeDelete);
        tw.advance();
        assert_eq!(tw.phase(), Phase::Deleting(0));
        tw.advance();
        assert_eq!(tw.phase(), Phase::Typing(0));
        assert_eq!(tw.displayed(), "");
    }
}
