pub mod aggregate;
pub mod orchestrator;

pub use orchestrator::Sauce;
