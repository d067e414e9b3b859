pub mod log;
pub mod punch;
pub mod reconcile;
pub mod session;
pub mod timer;
