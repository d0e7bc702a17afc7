pub mod history;

use crate::error::CalculatorError;
use crate::interpreter;
use crate::session::history::{HistoryEntry, HistoryLog};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

/// The last number of a buffer, optionally negated, e.g. `-12.5` in `3×-12.5`.
static TRAILING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?[0-9]+\.?[0-9]*$").expect("trailing number pattern is valid")
});

/// Inputs that continue from the last result instead of starting over.
const CONTINUATION_OPERATORS: [char; 7] = ['+', '-', '×', '÷', '*', '/', '%'];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    /// The buffer holds an expression being typed.
    Editing,
    /// The buffer holds the result of the last successful evaluation.
    Evaluated,
}

/// The live state of a calculator: the expression being typed, the last result
/// and the history of evaluations.
///
/// Every operation runs to completion; the session is meant to be owned by a single
/// event loop and only read by whatever renders it.
///
/// # Examples
///
/// ```
/// use calculator_engine::ExpressionSession;
///
/// let mut session = ExpressionSession::new();
/// for key in "7×3".chars() {
///     session.input(key);
/// }
/// assert_eq!(session.live_preview(), "21");
///
/// let entry = session.evaluate().unwrap().unwrap();
/// assert_eq!(entry.result, "21");
///
/// // An operator continues from the result, a digit starts over.
/// session.input('+');
/// assert_eq!(session.current_buffer(), "21+");
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionSession {
    buffer: String,
    last_result: String,
    state: State,
    history: HistoryLog,
}

impl Default for ExpressionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionSession {
    pub fn new() -> ExpressionSession {
        ExpressionSession {
            buffer: String::new(),
            last_result: String::new(),
            state: State::Editing,
            history: HistoryLog::new(),
        }
    }

    /// Types a single character.
    ///
    /// Right after an evaluation an operator extends the result, while anything
    /// else replaces it.
    pub fn input(&mut self, character: char) {
        match self.state {
            State::Editing => self.buffer.push(character),
            State::Evaluated => {
                self.buffer = if CONTINUATION_OPERATORS.contains(&character) {
                    format!("{}{}", self.last_result, character)
                } else {
                    character.to_string()
                };
                self.state = State::Editing;
            }
        }
        trace!("input '{}', buffer is now '{}'", character, self.buffer);
    }

    pub fn backspace(&mut self) {
        self.state = State::Editing;
        self.buffer.pop();
        trace!("backspace, buffer is now '{}'", self.buffer);
    }

    /// Forgets the buffer and the last result. The history is kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_result.clear();
        self.state = State::Editing;
        trace!("cleared");
    }

    /// Negates the number at the very end of the buffer, or removes its negation.
    ///
    /// Only the last number can be toggled; a buffer not ending in a number is left as is.
    pub fn toggle_sign(&mut self) {
        self.state = State::Editing;
        let (start, toggled) = match TRAILING_NUMBER.find(&self.buffer) {
            Some(number) => {
                let text = number.as_str();
                let toggled = match text.strip_prefix('-') {
                    Some(unsigned) => unsigned.to_string(),
                    None => format!("-{}", text),
                };
                (number.start(), toggled)
            }
            None => return,
        };
        self.buffer.truncate(start);
        self.buffer.push_str(&toggled);
        trace!("toggled sign, buffer is now '{}'", self.buffer);
    }

    /// Evaluates the buffer.
    ///
    /// On success the result replaces the buffer and is recorded in the history.
    /// On failure nothing changes, so the expression can be corrected.
    ///
    /// returns: The new history entry, or `None` if the buffer is blank.
    pub fn evaluate(&mut self) -> Result<Option<HistoryEntry>, CalculatorError> {
        let expression = self.buffer.trim();
        if expression.is_empty() {
            trace!("nothing to evaluate");
            return Ok(None);
        }

        let result = interpreter::evaluate_expression(expression)?;
        let entry = HistoryEntry::new(expression, result.clone());
        debug!("evaluated {}", entry);

        self.history.push(entry.clone());
        self.buffer = result.clone();
        self.last_result = result;
        self.state = State::Evaluated;
        Ok(Some(entry))
    }

    pub fn current_buffer(&self) -> &str {
        &self.buffer
    }

    /// The result of the buffer as it stands, or an empty string if it does not evaluate.
    pub fn live_preview(&self) -> String {
        interpreter::preview(&self.buffer)
    }

    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    pub fn last_result(&self) -> &str {
        &self.last_result
    }

    /// Whether the buffer holds an untouched result.
    pub fn is_showing_result(&self) -> bool {
        self.state == State::Evaluated
    }
}
