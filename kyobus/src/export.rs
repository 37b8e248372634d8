use std::path::Path;

use crate::error::RunError;
use crate::pipeline::orchestrator::RunReport;
use crate::simulation::artifact::Artifact;

pub const RUN_REPORT_FILENAME: &str = "run_report.json";

/// copies each artifact to its destination under the output directory,
/// creating directories as needed. a file that already exists is overwritten,
/// so re-running the pipeline is idempotent at the filesystem level.
pub fn export_artifacts(artifacts: &[Artifact], output_dir: &Path) -> Result<usize, RunError> {
    create_dirs(output_dir)?;
    for artifact in artifacts {
        let destination = output_dir.join(&artifact.relative_path);
        if let Some(parent) = destination.parent() {
            create_dirs(parent)?;
        }
        std::fs::copy(&artifact.source, &destination).map_err(|e| RunError::WriteFailed {
            path: destination.clone(),
            message: e.to_string(),
        })?;
        log::debug!("exported {}", destination.display());
    }
    log::info!(
        "exported {} artifacts to '{}'",
        artifacts.len(),
        output_dir.display()
    );
    Ok(artifacts.len())
}

/// writes the run report next to the exported documents. deterministic name,
/// overwritten on every run.
pub fn write_run_report(report: &RunReport, output_dir: &Path) -> Result<(), RunError> {
    create_dirs(output_dir)?;
    let path = output_dir.join(RUN_REPORT_FILENAME);
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| RunError::Internal(format!("failed to serialize run report: {e}")))?;
    std::fs::write(&path, json).map_err(|e| RunError::WriteFailed {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(())
}

/// helper function to "mkdir -p path" - make all directories along a path
fn create_dirs(path: &Path) -> Result<(), RunError> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|e| RunError::WriteFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
