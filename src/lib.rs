//! Terminal movie search backed by The Movie Database.
//!
//! Layers, leaf first:
//! - [`tmdb`]: HTTP search client and wire types
//! - [`query`]: cached, de-duplicated fetching keyed by `(query, page)`
//! - [`ui`]: application controller (MVI) and the ratatui front end

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod query;
pub mod tmdb;
pub mod ui;
