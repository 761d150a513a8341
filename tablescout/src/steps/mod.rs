//! The seven steps of the recommendation workflow.
//!
//! Each step owns handles to the collaborators it needs and returns a
//! [`DinerUpdate`](crate::state::DinerUpdate) naming only the fields it
//! changed.

mod detail_fetcher;
mod history_analyst;
mod interviewer;
mod presenter;
mod recommender;
mod search;
mod validator;

pub use detail_fetcher::DetailFetcher;
pub use history_analyst::HistoryAnalyst;
pub use interviewer::Interviewer;
pub use presenter::Presenter;
pub use recommender::Recommender;
pub use search::Search;
pub use validator::Validator;
