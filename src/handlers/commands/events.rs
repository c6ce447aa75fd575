//! Event command handlers

use tracing::{debug, info};
use crate::models::event::Event;
use crate::state::{AppContext, BrowseView, EventCard};
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::{format_event_date, truncate_text};
use super::start::render_view;

const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Handle /events: show the view for the current role
pub async fn handle_events_list(ctx: &mut AppContext) -> Result<String> {
    Ok(render_view(&ctx.view().await))
}

/// Handle /refresh
pub async fn handle_refresh(ctx: &mut AppContext) -> Result<String> {
    let count = ctx.refresh().await?;
    debug!(count = count, "Events reloaded on request");
    Ok(format!("Loaded {} events.", count))
}

/// Handle /register <id>
pub async fn handle_register(ctx: &mut AppContext, event_id: &str) -> Result<String> {
    let user_id = match ctx.identity() {
        Some(identity) => identity.user_id.clone(),
        None => return Err(CampusError::NotSignedIn),
    };

    let event = ctx.store().find(event_id).await.ok_or_else(|| CampusError::EventNotFound {
        event_id: event_id.to_string(),
    })?;

    // Same as the disabled "Registered" button: nothing is sent
    if event.is_registered(&user_id) {
        return Ok(format!("You are already registered for {}.", event.title));
    }

    ctx.register(event_id).await?;
    info!(user_id = %user_id, event_id = event_id, "User registered for event");

    let confirmed = ctx.registered_events().iter().any(|e| e.id == event_id);
    if confirmed {
        Ok(format!("You're registered for {}!", event.title))
    } else {
        Ok(format!(
            "Registration for {} was sent; it will show up once the event list reloads.",
            event.title
        ))
    }
}

/// Render the browse view: registered section first when non-empty
pub fn render_browse_view(view: &BrowseView) -> String {
    let mut text = String::new();

    if view.shows_registered_section() {
        text.push_str("Your Registered Events\n");
        for event in &view.registered {
            text.push_str(&render_event_card(event, true));
        }
        text.push('\n');
    }

    text.push_str("Upcoming Events\n");
    if view.upcoming.is_empty() {
        text.push_str("  No events yet.\n");
    }
    for EventCard { event, is_registered } in &view.upcoming {
        text.push_str(&render_event_card(event, *is_registered));
    }

    text
}

/// Render a single event card
pub fn render_event_card(event: &Event, is_registered: bool) -> String {
    let action = if is_registered {
        "[Registered]".to_string()
    } else {
        format!("[Register Now: /register {}]", event.id)
    };

    format!(
        "  * {} ({})\n    {} | {}\n    {}\n    {}\n",
        event.title,
        event.category,
        format_event_date(&event.date),
        event.location,
        truncate_text(&event.description, DESCRIPTION_PREVIEW_CHARS),
        action,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::identity::{Identity, Role};
    use crate::state::derive_registered;
    use crate::state::test_support::sample_event;

    #[test]
    fn test_card_shows_register_action() {
        let event = sample_event("e7", &[]);
        let card = render_event_card(&event, false);
        assert!(card.contains("/register e7"));
        assert!(card.contains("Academic"));

        let card = render_event_card(&event, true);
        assert!(card.contains("[Registered]"));
        assert!(!card.contains("/register"));
    }

    #[test]
    fn test_registered_section_hidden_when_empty() {
        let me = Identity::new("u1", None, Role::Regular);
        let events = vec![sample_event("e1", &[])];
        let view = BrowseView::build(&me, &events, &derive_registered(&events, Some(&me)));
        let text = render_browse_view(&view);
        assert!(!text.contains("Your Registered Events"));
        assert!(text.contains("Upcoming Events"));
    }

    #[test]
    fn test_registered_section_listed_first() {
        let me = Identity::new("u1", None, Role::Regular);
        let events = vec![sample_event("e1", &[]), sample_event("e2", &["u1"])];
        let view = BrowseView::build(&me, &events, &derive_registered(&events, Some(&me)));
        let text = render_browse_view(&view);
        let registered_at = text.find("Your Registered Events").unwrap();
        let upcoming_at = text.find("Upcoming Events").unwrap();
        assert!(registered_at < upcoming_at);
    }
}
