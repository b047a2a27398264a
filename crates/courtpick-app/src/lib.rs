// Library root: re-exports the application modules so integration tests can
// drive a full run.

pub mod pipeline;
pub mod report;
