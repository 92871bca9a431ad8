//! CLI library components for tabconv.

pub mod interactive;
pub mod logging;
pub mod summary;
