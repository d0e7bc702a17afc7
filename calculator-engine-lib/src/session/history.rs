use log::debug;
use std::collections::VecDeque;
use std::fmt;
use std::fmt::{Display, Formatter};

/// How many evaluations the history remembers.
pub const HISTORY_CAPACITY: usize = 5;

/// A committed evaluation: the expression as it was typed and its formatted result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> HistoryEntry {
        HistoryEntry {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

impl Display for HistoryEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// The most recent evaluations, newest first.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> HistoryLog {
        HistoryLog {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Inserts the entry at the front, evicting the oldest entry once full.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > HISTORY_CAPACITY {
            if let Some(evicted) = self.entries.pop_back() {
                debug!("evicted '{}' from history", evicted);
            }
        }
    }

    /// A copy of the entries, newest first.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(number: usize) -> HistoryEntry {
        HistoryEntry::new(format!("{}+0", number), number.to_string())
    }

    #[test]
    fn new_history_is_empty() {
        let history = HistoryLog::new();

        assert!(history.is_empty());
        assert!(history.snapshot().is_empty());
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut history = HistoryLog::new();

        history.push(entry(1));
        history.push(entry(2));

        assert_eq!(history.snapshot(), vec![entry(2), entry(1)]);
    }

    #[test]
    fn oldest_entry_is_evicted_past_capacity() {
        let mut history = HistoryLog::new();

        for number in 1..=HISTORY_CAPACITY + 1 {
            history.push(entry(number));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(
            history.snapshot(),
            vec![entry(6), entry(5), entry(4), entry(3), entry(2)]
        );
    }

    #[test]
    fn identical_entries_are_not_deduplicated() {
        let mut history = HistoryLog::new();

        history.push(entry(7));
        history.push(entry(7));

        assert_eq!(history.snapshot(), vec![entry(7), entry(7)]);
    }

    #[test]
    fn snapshot_is_detached_from_the_log() {
        let mut history = HistoryLog::new();
        history.push(entry(1));

        let snapshot = history.snapshot();
        history.push(entry(2));

        assert_eq!(snapshot, vec![entry(1)]);
    }

    #[test]
    fn entry_displays_as_equation() {
        assert_eq!(HistoryEntry::new("7×3", "21").to_string(), "7×3 = 21");
    }
}
