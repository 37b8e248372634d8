use std::path::{Path, PathBuf};

use crate::error::RunError;

/// one result document staged by the simulation framework: where it sits now
/// and where it belongs relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub relative_path: PathBuf,
    pub source: PathBuf,
}

/// walks the staging directory and lists every file the framework produced,
/// sorted by destination path so repeated runs export an identical file set.
pub fn collect_artifacts(staging_dir: &Path) -> Result<Vec<Artifact>, RunError> {
    let mut artifacts = Vec::new();
    collect_into(staging_dir, staging_dir, &mut artifacts)?;
    artifacts.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    if artifacts.is_empty() {
        log::warn!(
            "simulation framework staged no artifacts in '{}'",
            staging_dir.display()
        );
    }
    Ok(artifacts)
}

fn collect_into(root: &Path, dir: &Path, artifacts: &mut Vec<Artifact>) -> Result<(), RunError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        RunError::SimulationFailed(format!(
            "failed reading staged artifacts in '{}': {e}",
            dir.display()
        ))
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| {
            RunError::SimulationFailed(format!(
                "failed reading staged artifacts in '{}': {e}",
                dir.display()
            ))
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_into(root, &path, artifacts)?;
        } else {
            let relative_path = path
                .strip_prefix(root)
                .map_err(|e| {
                    RunError::Internal(format!(
                        "staged file '{}' escapes the staging directory: {e}",
                        path.display()
                    ))
                })?
                .to_path_buf();
            artifacts.push(Artifact {
                relative_path,
                source: path,
            });
        }
    }
    Ok(())
}
