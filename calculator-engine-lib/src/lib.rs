pub mod error;
pub mod interpreter;
pub mod session;

pub use error::CalculatorError;
pub use session::history::{HistoryEntry, HistoryLog, HISTORY_CAPACITY};
pub use session::ExpressionSession;
