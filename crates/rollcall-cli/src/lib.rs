//! Library surface of the rollcall CLI, exposed for integration tests.

pub mod input;
pub mod logging;
