use std::path::Path;

use crate::error::RunError;
use crate::simulation::artifact::Artifact;

/// everything a single simulation invocation receives: the populated
/// database, an optional scenario restriction, and the directory where the
/// framework stages its result documents.
#[derive(Debug, Clone)]
pub struct SimulationRequest<'a> {
    pub database_url: &'a str,
    pub scenario: Option<&'a str>,
    pub staging_dir: &'a Path,
}

pub trait SimulationEngine {
    /// runs the external framework against the loaded dataset and returns
    /// the artifacts it staged. implementations hold no state and perform no
    /// retries; framework failures pass through verbatim as
    /// [`RunError::SimulationFailed`].
    fn simulate(&self, request: &SimulationRequest) -> Result<Vec<Artifact>, RunError>;
}
