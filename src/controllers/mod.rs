//! Application layer: the capture pipeline and the session loop that feeds it.

pub mod capture;
pub mod session;
