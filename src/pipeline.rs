//! One query invocation: load → [filter] → [aggregate] → render.
//!
//! Each stage either produces a new [`DataSet`] or stops the run with a [`QueryError`]. Nothing
//! here exits the process; the caller decides what to do with the error.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{QueryError, QueryResult};
use crate::expression::{AggregateExpr, FilterExpr};
use crate::ingestion::{load_from_path, CsvOptions};
use crate::observability::{PipelineContext, PipelineObserver, Stage, StageEvent};
use crate::processing::{aggregate, filter};
use crate::render::render_dataset;
use crate::types::DataSet;

/// Options for one query run.
///
/// Use [`QueryOptions::new`] and struct update syntax for the optional parts.
#[derive(Clone, Default)]
pub struct QueryOptions {
    /// Input CSV file.
    pub path: PathBuf,
    /// Filter expression (`column<op>value`). `None` or `""` skips filtering.
    pub where_expr: Option<String>,
    /// Aggregate expression (`column=min|avg|max`). `None` or `""` skips aggregation.
    pub aggregate_expr: Option<String>,
    /// CSV parsing options.
    pub csv: CsvOptions,
    /// Optional observer for progress and failures.
    pub observer: Option<Arc<dyn PipelineObserver>>,
}

impl QueryOptions {
    /// Options that load and render `path` with no filter or aggregate.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for QueryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOptions")
            .field("path", &self.path)
            .field("where_expr", &self.where_expr)
            .field("aggregate_expr", &self.aggregate_expr)
            .field("csv", &self.csv)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Load the input and apply the filter and aggregate, in that order.
///
/// After aggregation the dataset holds a single one-cell row while the header still lists
/// every input column.
pub fn run_query(options: &QueryOptions) -> QueryResult<DataSet> {
    let ctx = PipelineContext {
        path: options.path.clone(),
    };
    let fail = |stage: Stage, err: QueryError| {
        if let Some(obs) = options.observer.as_ref() {
            obs.on_failure(&ctx, stage, &err);
        }
        err
    };
    let notify = |event: StageEvent| {
        if let Some(obs) = options.observer.as_ref() {
            obs.on_stage(&ctx, &event);
        }
    };

    let mut ds = load_from_path(&options.path, &options.csv).map_err(|e| fail(Stage::Load, e))?;
    notify(StageEvent::Loaded {
        rows: ds.row_count(),
        columns: ds.header.len(),
    });

    if let Some(raw) = non_empty(options.where_expr.as_deref()) {
        let before = ds.row_count();
        ds = FilterExpr::parse(raw)
            .and_then(|expr| filter(&ds, &expr))
            .map_err(|e| fail(Stage::Filter, e))?;
        notify(StageEvent::Filtered {
            before,
            after: ds.row_count(),
        });
    }

    if let Some(raw) = non_empty(options.aggregate_expr.as_deref()) {
        let rows = ds.row_count();
        let expr = AggregateExpr::parse(raw).map_err(|e| fail(Stage::Aggregate, e))?;
        ds = aggregate(&ds, &expr).map_err(|e| fail(Stage::Aggregate, e))?;
        notify(StageEvent::Aggregated {
            column: expr.column,
            op: expr.op,
            rows,
        });
    }

    Ok(ds)
}

/// [`run_query`], then render the result as a grid table.
pub fn run(options: &QueryOptions) -> QueryResult<String> {
    let ds = run_query(options)?;
    render_dataset(&ds).inspect_err(|e| {
        if let Some(obs) = options.observer.as_ref() {
            let ctx = PipelineContext {
                path: options.path.clone(),
            };
            obs.on_failure(&ctx, Stage::Render, e);
        }
    })
}

fn non_empty(expr: Option<&str>) -> Option<&str> {
    expr.filter(|s| !s.is_empty())
}
