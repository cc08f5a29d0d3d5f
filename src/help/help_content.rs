//! Static keyboard shortcut reference.
//!
//! Entries are (key, description) pairs. An empty key with a non-empty
//! description is a section header; a fully empty pair is a blank spacer
//! line.

pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "Global"),
    ("Ctrl+K", "Toggle the channel switcher"),
    ("Ctrl+T", "Open the team member list"),
    ("Ctrl+E", "Edit the current channel's purpose"),
    ("Ctrl+J", "Quit and print the current channel as JSON"),
    ("F1", "Toggle this help"),
    ("Ctrl+C", "Quit"),
    ("", ""),
    ("", "Switcher"),
    ("↑ / ↓", "Browse suggestions"),
    ("Tab", "Accept the selected suggestion"),
    ("Enter", "Switch to the resolved target"),
    ("Esc", "Dismiss"),
    ("", ""),
    ("", "Member list"),
    ("↑ / ↓", "Select a member"),
    ("PgUp / PgDn", "Previous / next page"),
    ("Enter", "Open a direct message"),
    ("Esc", "Dismiss"),
    ("", ""),
    ("", "Purpose editor"),
    ("Enter", "Save (Ctrl+Enter with send_on_ctrl_enter)"),
    ("Esc", "Cancel"),
];

pub const HELP_FOOTER: &str = "Esc or F1 to close";
