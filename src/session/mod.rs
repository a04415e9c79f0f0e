//! Search session: term validation, state, and the controller

pub mod controller;
pub mod query;
pub mod state;

pub use controller::SearchSession;
pub use query::SearchQuery;
pub use state::{Phase, SessionState};
