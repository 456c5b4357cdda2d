pub mod account;
pub mod cli;
pub mod config;
pub mod controller;
pub mod engine; // partition -> group -> rank -> stable order
pub mod error;
pub mod group;
pub mod manage;
pub mod snapshot;

pub use engine::{AggregationEngine, PublishOutcome};
pub use error::{ProbeError, ShellError, ShellResult};
pub use manage::ManageAddress;
