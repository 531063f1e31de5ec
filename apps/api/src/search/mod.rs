// Job search: pure filters over the catalog plus the session that
// publishes delayed results in issue order.

pub mod engine;
pub mod handlers;
pub mod session;

pub use session::{SearchOutcome, SearchQuery, SearchSession, SearchView};
