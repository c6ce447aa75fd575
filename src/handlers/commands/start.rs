//! Start command handler

use tracing::info;
use crate::state::{AppContext, View};
use crate::utils::errors::Result;
use super::{admin, events};

/// Handle /start: resolve the session, load events and show the home view
pub async fn handle_start(ctx: &mut AppContext) -> Result<String> {
    ctx.start().await?;

    if let Some(identity) = ctx.identity() {
        info!(user_id = %identity.user_id, role = ?identity.role, "Session started");
    }

    Ok(render_view(&ctx.view().await))
}

/// Render whichever view the session selects
pub fn render_view(view: &View) -> String {
    match view {
        View::Loading => "Loading...".to_string(),
        View::SignedOut => "You are signed out.\n\
            Sign in with the identity provider, set CAMPUS_IDENTITY__SESSION_TOKEN and run /start again."
            .to_string(),
        View::Browse(browse) => {
            let mut text = navbar(browse.identity.greeting_name());
            text.push_str("\nWelcome to Campus Connector\n");
            text.push_str("Discover and connect with exciting events happening around your campus.\n\n");
            text.push_str(&events::render_browse_view(browse));
            text
        }
        View::Admin(admin_view) => {
            let mut text = navbar(admin_view.identity.greeting_name());
            text.push('\n');
            text.push_str(&admin::render_admin_view(admin_view));
            text
        }
    }
}

fn navbar(name: &str) -> String {
    format!("Campus Connector | Welcome, {}!\n", name)
}
