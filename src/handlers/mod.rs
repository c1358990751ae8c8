//! MCP tool handlers
//!
//! Each handler parses its arguments, applies one command to the shared
//! `App` and returns the re-rendered view. Handlers for each tool live in
//! their own file.

pub mod diary;
pub mod theme;
pub mod timetable;

use crate::RozkladServerHandler;
use crate::app::App;
use crate::error::AppError;
use crate::validation::invalid_params;
use mcp_attr::{Result as McpResult, bail};
use std::sync::MutexGuard;

impl RozkladServerHandler {
    pub(crate) fn app(&self) -> McpResult<MutexGuard<'_, App>> {
        match self.app.lock() {
            Ok(guard) => Ok(guard),
            Err(_) => bail!("Application state is unavailable after an earlier failure"),
        }
    }
}

/// Report a failed command: rejected user input becomes `INVALID_PARAMS`
/// with its message, storage failures become internal errors
pub(crate) fn command_error<T>(error: AppError) -> McpResult<T> {
    match error {
        AppError::Storage(e) => {
            tracing::error!(error = %e, "storage failure");
            bail!("Failed to save: {:#}", e)
        }
        rejected => {
            tracing::info!(reason = %rejected, "command rejected");
            Err(invalid_params(rejected.to_string()))
        }
    }
}
