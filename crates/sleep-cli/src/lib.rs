//! Library components of the sleep journal CLI.

pub mod logging;
pub mod pipeline;
pub mod types;
