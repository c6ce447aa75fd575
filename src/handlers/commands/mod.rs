//! Command handlers module
//!
//! This module contains handlers for all terminal commands like /start, /help, etc.

pub mod start;
pub mod help;
pub mod events;
pub mod admin;

use std::str::FromStr;
use tracing::debug;
use crate::state::{AppContext, FormField};
use crate::utils::errors::{CampusError, Result};

/// All available commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve the session and show the home view
    Start,
    Help,
    /// List upcoming and registered events
    Events,
    Register(String),
    /// Admin dashboard (admin only)
    Admin,
    /// Set a creation form field (admin only)
    Set { field: FormField, value: String },
    /// Show the creation form (admin only)
    Form,
    /// Submit the creation form (admin only)
    Submit,
    Refresh,
    Quit,
}

impl FromStr for Command {
    type Err = CampusError;

    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        let (name, rest) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        let name = name.strip_prefix('/').unwrap_or(name).to_ascii_lowercase();
        let command = match name.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "events" => Command::Events,
            "register" => {
                if rest.is_empty() || rest.contains(char::is_whitespace) {
                    return Err(CampusError::InvalidInput(
                        "Usage: /register <event id>".to_string()
                    ));
                }
                Command::Register(rest.to_string())
            }
            "admin" => Command::Admin,
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CampusError::InvalidInput(
                        "Usage: /set <field> <value>".to_string()
                    ));
                }
                Command::Set {
                    field: field.parse()?,
                    value: value.trim().to_string(),
                }
            }
            "form" => Command::Form,
            "submit" => Command::Submit,
            "refresh" => Command::Refresh,
            "quit" | "exit" => Command::Quit,
            "" => return Err(CampusError::InvalidInput("Type /help to see the commands".to_string())),
            other => {
                return Err(CampusError::InvalidInput(format!(
                    "Unknown command /{}. Type /help to see the commands",
                    other
                )))
            }
        };

        Ok(command)
    }
}

/// Main command dispatcher; returns the text to show
pub async fn handle_command(ctx: &mut AppContext, cmd: Command) -> Result<String> {
    debug!(command = ?cmd, "Handling command");

    match cmd {
        Command::Start => start::handle_start(ctx).await,
        Command::Help => Ok(help::handle_help(ctx)),
        Command::Events => events::handle_events_list(ctx).await,
        Command::Register(event_id) => events::handle_register(ctx, &event_id).await,
        Command::Admin | Command::Form => admin::handle_admin_panel(ctx).await,
        Command::Set { field, value } => admin::handle_set_field(ctx, field, value),
        Command::Submit => admin::handle_submit(ctx).await,
        Command::Refresh => events::handle_refresh(ctx).await,
        // Teardown belongs to the owner of the context once the loop ends
        Command::Quit => Ok("Goodbye!".to_string()),
    }
}
