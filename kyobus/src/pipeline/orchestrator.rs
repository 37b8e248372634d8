use std::path::PathBuf;

use serde::Serialize;

use crate::config::AppConfig;
use crate::error::RunError;
use crate::export::{export_artifacts, write_run_report};
use crate::pipeline::state::RunState;
use crate::simulation::engine::{SimulationEngine, SimulationRequest};

/// what one completed run did, written to the output directory as
/// `run_report.json` alongside the exported documents.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: String,
    pub finished_at: String,
    pub tables_cleared: usize,
    pub statements_applied: usize,
    pub rows_loaded: u64,
    pub artifacts_exported: usize,
}

/// sequences one run: reset, load, simulate, export. every stage is
/// synchronous and must fully succeed before the next begins; any failure is
/// fatal and surfaces unmodified to the caller, with the failing stage
/// logged. nothing is retried.
pub struct Pipeline<'a, E: SimulationEngine> {
    config: &'a AppConfig,
    engine: E,
    state: RunState,
}

impl<'a, E: SimulationEngine> Pipeline<'a, E> {
    pub fn new(config: &'a AppConfig, engine: E) -> Pipeline<'a, E> {
        Pipeline {
            config,
            engine,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn run(&mut self) -> Result<RunReport, RunError> {
        match self.execute() {
            Ok(report) => {
                log::info!(
                    "run complete: cleared {} tables, loaded {} rows, exported {} artifacts",
                    report.tables_cleared,
                    report.rows_loaded,
                    report.artifacts_exported
                );
                Ok(report)
            }
            Err(error) => {
                let stage = self.state;
                self.state = RunState::Failed;
                log::error!("run failed during stage '{stage}': {error}");
                Err(error)
            }
        }
    }

    fn execute(&mut self) -> Result<RunReport, RunError> {
        let started_at = chrono::Local::now();
        let database_url = self.config.database.url();

        self.advance()?;
        let mut client = kyobus_db::connect(&database_url)?;
        let tables_cleared =
            kyobus_db::clear_simulation_data(&mut client, &self.config.database.schema)?;

        self.advance()?;
        let load = kyobus_db::load_dump(&mut client, &self.config.paths.input_sql)?;

        self.advance()?;
        let staging_dir = staging_directory();
        std::fs::create_dir_all(&staging_dir).map_err(|e| {
            RunError::SimulationFailed(format!(
                "failed to create artifact staging directory '{}': {e}",
                staging_dir.display()
            ))
        })?;
        let result =
            self.simulate_and_export(&database_url, &staging_dir, tables_cleared, load, started_at);
        if let Err(e) = std::fs::remove_dir_all(&staging_dir) {
            log::warn!(
                "failed to remove staging directory '{}': {e}",
                staging_dir.display()
            );
        }
        result
    }

    fn simulate_and_export(
        &mut self,
        database_url: &str,
        staging_dir: &std::path::Path,
        tables_cleared: usize,
        load: kyobus_db::LoadSummary,
        started_at: chrono::DateTime<chrono::Local>,
    ) -> Result<RunReport, RunError> {
        let request = SimulationRequest {
            database_url,
            scenario: self.config.simulation.scenario.as_deref(),
            staging_dir,
        };
        let artifacts = self.engine.simulate(&request)?;

        self.advance()?;
        let artifacts_exported = export_artifacts(&artifacts, &self.config.paths.output_dir)?;
        let report = RunReport {
            started_at: started_at.to_rfc3339(),
            finished_at: chrono::Local::now().to_rfc3339(),
            tables_cleared,
            statements_applied: load.statements,
            rows_loaded: load.rows_inserted,
            artifacts_exported,
        };
        write_run_report(&report, &self.config.paths.output_dir)?;

        self.advance()?;
        Ok(report)
    }

    /// moves to the successor stage; reached only on success of the stage
    /// being left.
    fn advance(&mut self) -> Result<(), RunError> {
        match self.state.next() {
            Some(next) => {
                log::info!("stage: {next}");
                self.state = next;
                Ok(())
            }
            None => Err(RunError::Internal(format!(
                "cannot advance from terminal state '{}'",
                self.state
            ))),
        }
    }
}

fn staging_directory() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    std::env::temp_dir().join(format!("kyobus-{}-{stamp}", std::process::id()))
}
