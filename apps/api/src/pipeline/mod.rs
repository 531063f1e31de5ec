// Application pipeline: status transitions with an append-only history,
// and the timeline / board projections derived from it.

pub mod board;
pub mod handlers;
pub mod timeline;
pub mod transition;

pub use board::{applications_by_status, build_board, PipelineBoard};
pub use timeline::{build_timeline, candidate_overview, ApplicationOverview, Timeline};
pub use transition::{transition, TransitionPolicy};
