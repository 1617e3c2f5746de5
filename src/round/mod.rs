//! One play session: the round state machine
//!
//! A [`Round`] owns the hidden secret, the row being assembled, and the
//! ordered attempt history. It is transient state; finished rounds are
//! discarded and replaced, never resumed.

mod row;
mod state;

pub use row::CurrentRow;
pub use state::{Attempt, MAX_ATTEMPTS, Outcome, Round, SubmitOutcome};
