use std::path::PathBuf;

use log::{info, warn};

use crate::error::QueryError;
use crate::expression::AggregateOp;

/// Pipeline stage in which an event or failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Filter,
    Aggregate,
    Render,
}

/// Context about one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// The input path of the run.
    pub path: PathBuf,
}

/// Progress reported after each successful stage.
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    Loaded { rows: usize, columns: usize },
    Filtered { before: usize, after: usize },
    Aggregated { column: String, op: AggregateOp, rows: usize },
}

/// Observer interface for pipeline progress and failures.
///
/// Implementors can record metrics or logs. Both methods default to doing nothing.
pub trait PipelineObserver: Send + Sync {
    /// Called after a stage completes.
    fn on_stage(&self, _ctx: &PipelineContext, _event: &StageEvent) {}

    /// Called when a stage fails; the run stops afterwards.
    fn on_failure(&self, _ctx: &PipelineContext, _stage: Stage, _error: &QueryError) {}
}

/// Forwards pipeline events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn on_stage(&self, ctx: &PipelineContext, event: &StageEvent) {
        match event {
            StageEvent::Loaded { rows, columns } => {
                info!("[load] path={} rows={rows} columns={columns}", ctx.path.display())
            }
            StageEvent::Filtered { before, after } => {
                info!("[filter] path={} rows={before}->{after}", ctx.path.display())
            }
            StageEvent::Aggregated { column, op, rows } => {
                info!(
                    "[aggregate] path={} column={column} op={op} rows={rows}",
                    ctx.path.display()
                )
            }
        }
    }

    fn on_failure(&self, ctx: &PipelineContext, stage: Stage, error: &QueryError) {
        warn!("[{stage:?}] path={} err={error}", ctx.path.display());
    }
}
