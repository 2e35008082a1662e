//! Helpers: constants, DOM glue and the async timer

pub mod constants;
pub mod dom;
pub mod timer;
