//! Help command handler

use crate::state::AppContext;

/// Handle /help; admins also see the dashboard commands
pub fn handle_help(ctx: &AppContext) -> String {
    let mut help_text = String::from(
        "Campus Connector Help\n\n\
        /start - Sign in and show your home view\n\
        /help - Show this help message\n\
        /events - List upcoming events\n\
        /register <id> - Register for an event\n\
        /refresh - Reload events\n\
        /quit - Leave\n",
    );

    if ctx.identity().is_some_and(|identity| identity.is_admin()) {
        help_text.push_str(
            "\nAdmin commands:\n\
            /admin - Show the admin dashboard\n\
            /set <field> <value> - Fill in a form field (title, date, category, location, image, description)\n\
            /form - Show the form\n\
            /submit - Create the event\n",
        );
    }

    help_text
}
