//! Turn orchestration: the session state machine above the rules.

pub mod session;

pub use session::{PlayError, Session, SessionBuilder, Turn, TurnEvent};
