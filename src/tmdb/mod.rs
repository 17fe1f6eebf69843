//! Remote movie search.
//!
//! [`SearchClient`] is the seam the query orchestrator fetches through;
//! [`TmdbClient`] is the real HTTP implementation.

mod client;
mod error;
mod model;

pub use client::{SearchClient, TmdbClient};
pub use error::{FetchError, FetchErrorKind};
pub use model::{Movie, SearchResultPage};
