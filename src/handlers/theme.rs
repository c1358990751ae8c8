//! Theme toggle handler

use super::command_error;
use crate::RozkladServerHandler;
use mcp_attr::Result as McpResult;

impl RozkladServerHandler {
    pub async fn handle_toggle_theme(&self) -> McpResult<String> {
        let mut app = self.app()?;
        match app.toggle_theme() {
            Ok(theme) => Ok(format!(
                "Theme set to {} (next toggle: {})",
                theme,
                theme.toggle_label()
            )),
            Err(e) => command_error(e),
        }
    }
}
