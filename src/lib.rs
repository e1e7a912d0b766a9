//! Job configuration layer for Gridpump bulk transfer jobs.
//!
//! Gridpump moves relational-database tables in and out of a distributed
//! processing grid by running transfer jobs as map tasks. This crate owns
//! everything those jobs need configured before submission and inspected
//! afterwards:
//!
//! - [`config`] — the typed property map the engine propagates to every task
//! - [`job`] — the submission-side job handle and its read-only context view
//! - [`counters`] — the grouped counter snapshot a running job exposes
//! - [`constants`] / [`db`] — well-known engine and DB-connector property keys
//! - [`options`] — engine-standard generic command-line options
//! - [`adapter`] — one-line named accessors tying the above together, so the
//!   rest of the pipeline never touches raw property strings
//!
//! The crate is a synchronous leaf library: no scheduler, no connector, no
//! runtime. All failures surface immediately as [`error::ConfigError`].

pub mod adapter;
pub mod config;
pub mod constants;
pub mod counters;
pub mod db;
pub mod error;
pub mod job;
pub mod options;

pub use config::JobConfiguration;
pub use counters::Counters;
pub use error::{ConfigError, ConfigResult};
pub use job::{Job, JobContext};
