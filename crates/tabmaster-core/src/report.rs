//! Batch execution records
//!
//! The interpreter itself never reads a clock. `Executor` brackets one
//! complete synchronous pass with a timer and records the result, in the
//! shape callers persist and aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use tabmaster_session::SessionSnapshot;

use crate::config::Config;
use crate::interpreter::Interpreter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Unique identifier
    pub id: String,
    pub commands: Vec<String>,
    pub results: Vec<String>,
    /// When the batch started
    pub executed_at: DateTime<Utc>,
    /// Wall-clock time of the whole batch
    pub execution_time_ms: u64,
    pub command_count: usize,
    /// Final session state, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<SessionSnapshot>,
}

/// Aggregate figures over a set of reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStats {
    pub total_executions: usize,
    pub average_execution_time_ms: f64,
    pub total_commands: usize,
}

impl ExecutionStats {
    pub fn from_reports(reports: &[ExecutionReport]) -> Self {
        let total_executions = reports.len();
        let total_time: u64 = reports.iter().map(|r| r.execution_time_ms).sum();
        let average_execution_time_ms = if total_executions == 0 {
            0.0
        } else {
            total_time as f64 / total_executions as f64
        };

        Self {
            total_executions,
            average_execution_time_ms,
            total_commands: reports.iter().map(|r| r.command_count).sum(),
        }
    }
}

pub struct Executor {
    config: Config,
    include_snapshot: bool,
}

impl Executor {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            include_snapshot: false,
        }
    }

    /// Attach the final session snapshot to each report
    pub fn with_snapshot(mut self, include_snapshot: bool) -> Self {
        self.include_snapshot = include_snapshot;
        self
    }

    /// Run one batch on a fresh interpreter and record it
    pub fn execute(&self, commands: Vec<String>) -> ExecutionReport {
        let executed_at = Utc::now();
        let started = Instant::now();

        let (results, session) = Interpreter::new(self.config.clone()).run_with_session(&commands);

        let execution_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let snapshot = self.include_snapshot.then(|| session.snapshot());

        let report = ExecutionReport {
            id: Uuid::new_v4().to_string(),
            command_count: commands.len(),
            commands,
            results,
            executed_at,
            execution_time_ms,
            snapshot,
        };

        tracing::info!(
            execution_id = %report.id,
            command_count = report.command_count,
            execution_time_ms = report.execution_time_ms,
            "Recorded execution"
        );

        report
    }
}
