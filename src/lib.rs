//! carteira — terminal client for a personal investment tracker backend
//!
//! Talks HTTP+JSON to the tracker backend (B3 equities, funds and fixed
//! income) and renders portfolio views, operation history, yield projections
//! and brokerage report imports. The client holds no database: the backend
//! is the single source of truth, quotes are a transient overlay, and every
//! mutation is followed by a reload of the affected list.

pub mod api;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod flows;
pub mod reports;
pub mod utils;
