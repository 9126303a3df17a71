//! Shared runtime state for CLI interactions and command execution.

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;

use daytally_config::{Config, ConfigManager};
use daytally_core::{CalorieTracker, CashTracker};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub cash: CashTracker,
    pub calories: CalorieTracker,
    /// The session's "today". Captured once at startup; every report keeps
    /// using it until the shell restarts, even across midnight.
    pub reference: NaiveDate,
    pub last_command: Option<String>,
    pub running: bool,
}
