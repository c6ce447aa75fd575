//! Admin command handlers

use tracing::{debug, info};
use crate::models::event::EventCategory;
use crate::state::{AdminView, AppContext, FormField, View};
use crate::utils::errors::{CampusError, Result};

/// Handle /admin and /form: show the dashboard with the creation form
pub async fn handle_admin_panel(ctx: &mut AppContext) -> Result<String> {
    match ctx.view().await {
        View::Admin(admin_view) => Ok(render_admin_view(&admin_view)),
        View::Loading => Err(CampusError::SessionNotLoaded),
        View::SignedOut => Err(CampusError::NotSignedIn),
        View::Browse(_) => Err(CampusError::PermissionDenied(
            "Admin privileges required".to_string()
        )),
    }
}

/// Handle /set <field> <value>
pub fn handle_set_field(ctx: &mut AppContext, field: FormField, value: String) -> Result<String> {
    debug!(field = %field, "Setting form field");
    ctx.set_form_field(field, value)?;

    let missing = ctx.form().missing_fields();
    if missing.is_empty() {
        Ok(format!("{} set. All fields filled in; /submit to create the event.", field.label()))
    } else {
        let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
        Ok(format!("{} set. Still needed: {}", field.label(), names.join(", ")))
    }
}

/// Handle /submit
pub async fn handle_submit(ctx: &mut AppContext) -> Result<String> {
    let title = ctx.form().title.trim().to_string();
    ctx.submit_event().await?;

    info!(title = %title, "Event created from admin dashboard");
    Ok(format!("Event \"{}\" created. The form has been cleared.", title))
}

/// Render the admin dashboard
pub fn render_admin_view(view: &AdminView) -> String {
    let mut text = String::from("Admin Dashboard\nCreate and manage campus events\n\n");
    text.push_str(&format!("Events currently listed: {}\n\n", view.event_count));
    text.push_str("Create New Event\n");

    for field in FormField::ALL {
        let value = view.form.get(field);
        let shown = if value.is_empty() { "<empty>" } else { value };
        text.push_str(&format!("  {:<12} ({}): {}\n", field.label(), field.name(), shown));
    }

    let categories: Vec<&str> = EventCategory::SELECTABLE.iter().map(|c| c.as_str()).collect();
    text.push_str(&format!("\nCategories: {}\n", categories.join(", ")));
    text.push_str("Use /set <field> <value>, then /submit.\n");
    text
}
