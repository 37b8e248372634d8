pub mod orchestrator;
pub mod state;

pub use orchestrator::{Pipeline, RunReport};
pub use state::RunState;
