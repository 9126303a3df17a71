//! Core CLI loop, dispatch, and shell context helpers.

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use daytally_config::{Config, ConfigManager};
use daytally_core::{CalorieTracker, CashTracker, Clock, CoreError, ExchangeRates};
use daytally_domain::{Currency, DateFormatError};

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};
use crate::cli::system_clock::SystemClock;
pub use crate::cli::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Per-command failures, reported to the user without leaving the loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("exit requested")]
    ExitRequested,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Date(#[from] DateFormatError),
    #[error(transparent)]
    Config(#[from] daytally_config::ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

/// Failures that abort the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] daytally_config::ConfigError),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::new()?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("failed to load configuration, using defaults: {err}");
                Config::default()
            }
        };

        // The session's "today": captured once, reused for every report.
        let reference = SystemClock.today();
        let rates = ExchangeRates {
            usd: config.usd_rate,
            eur: config.eur_rate,
        };
        let cash = CashTracker::with_rates(config.cash_limit, reference, rates);
        let calories = CalorieTracker::new(config.calorie_limit, reference);

        Ok(ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            cash,
            calories,
            reference,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }

    pub(crate) fn show_config(&self) -> CommandResult {
        cli_io::print_info("Configuration");
        cli_io::print_info(format!("  Currency: {}", self.config.currency));
        cli_io::print_info(format!("  Cash limit: {:.2}", self.config.cash_limit));
        cli_io::print_info(format!("  Calorie limit: {}", self.config.calorie_limit));
        cli_io::print_info(format!("  USD rate: {}", self.config.usd_rate));
        cli_io::print_info(format!("  EUR rate: {}", self.config.eur_rate));
        cli_io::print_info(format!("  Reference date: {}", self.reference));
        Ok(())
    }

    pub(crate) fn set_config_value(&mut self, key: &str, value: &str) -> CommandResult {
        match key.to_lowercase().as_str() {
            "currency" => {
                if Currency::from_code(value).is_none() {
                    return Err(CommandError::InvalidArguments(format!(
                        "currency must be one of rub, usd, eur (got `{}`)",
                        value
                    )));
                }
                self.config.currency = value.to_string();
            }
            "cash_limit" => self.config.cash_limit = parse_positive(key, value)?,
            "calorie_limit" => self.config.calorie_limit = parse_positive(key, value)?,
            "usd_rate" => self.config.usd_rate = parse_positive(key, value)?,
            "eur_rate" => self.config.eur_rate = parse_positive(key, value)?,
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown config key `{}`",
                    other
                )))
            }
        }
        self.persist_config()?;
        cli_io::print_success("Configuration updated.");
        if key != "currency" {
            cli_io::print_info("Limits and rates apply when the next session starts.");
        }
        Ok(())
    }

    fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f64, CommandError> {
    let parsed: f64 = value.parse().map_err(|_| {
        CommandError::InvalidArguments(format!("{} must be numeric", key))
    })?;
    if parsed <= 0.0 {
        return Err(CommandError::InvalidArguments(format!(
            "{} must be greater than 0",
            key
        )));
    }
    Ok(parsed)
}
