//! Query cache and fetch orchestration.
//!
//! Observers get a `tokio::sync::watch` receiver per [`CacheKey`]; every
//! state change of that key is pushed to all of them, and all of them share
//! a single in-flight request.

mod key;
mod orchestrator;
mod result;

pub use key::CacheKey;
pub use orchestrator::{FetchCompletion, QueryOrchestrator};
pub use result::{FetchStatus, QueryResult, ResultData};
