pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod notify;
pub mod output;
pub mod report;
pub mod run;
pub mod summarize;

pub use error::{Error, Result};
