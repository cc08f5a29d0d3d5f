//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI
//! components, add new constants to the appropriate module and reference
//! them as `theme::module::CONSTANT` from render files rather than
//! hardcoding `Color::*` values.
//!
//! Theme: Harbor - teal accents on a slate background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors
    pub const TEXT: Color = Color::Rgb(220, 224, 232);
    pub const TEXT_DIM: Color = Color::Rgb(96, 104, 122);
    pub const TEXT_MUTED: Color = Color::Rgb(140, 148, 166);

    // Background colors
    pub const BG_DARK: Color = Color::Rgb(24, 28, 38);
    pub const BG_SURFACE: Color = Color::Rgb(32, 38, 50);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(120, 200, 140);
    pub const WARNING: Color = Color::Rgb(235, 203, 96);
    pub const ERROR: Color = Color::Rgb(228, 110, 110);

    // Accent colors
    pub const TEAL: Color = Color::Rgb(78, 196, 196);
    pub const BLUE: Color = Color::Rgb(110, 160, 240);
    pub const MAGENTA: Color = Color::Rgb(196, 130, 220);

    // Shared cursor style (used by textarea widgets)
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Home view (current channel + message input)
pub mod home {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const CHANNEL_NAME: Color = palette::TEAL;
    pub const CHANNEL_TYPE: Color = palette::TEXT_MUTED;
    pub const PURPOSE: Color = palette::TEXT;
    pub const HEADER: Color = palette::TEXT_MUTED;
    pub const EMPTY_HINT: Color = palette::TEXT_DIM;
    pub const INPUT_BORDER_FOCUSED: Color = palette::TEAL;
}

/// Switcher surface
pub mod switcher {
    use super::*;

    pub const BORDER: Color = palette::TEAL;
    pub const HINT: Color = palette::TEXT_MUTED;
    pub const ERROR: Color = palette::ERROR;
    pub const CURSOR: Style = palette::CURSOR;
}

/// Suggestion popup
pub mod suggest {
    use super::*;

    pub const BORDER: Color = palette::TEAL;
    pub const TEXT: Color = palette::TEXT;
    pub const SELECTED_FG: Color = palette::BG_DARK;
    pub const SELECTED_BG: Color = palette::TEAL;
    pub const KIND_CHANNEL: Color = palette::BLUE;
    pub const KIND_DM: Color = palette::MAGENTA;
    pub const BG: Color = palette::BG_SURFACE;
}

/// Member list surface
pub mod members {
    use super::*;

    pub const BORDER: Color = palette::BLUE;
    pub const USERNAME: Color = palette::TEXT;
    pub const FULL_NAME: Color = palette::TEXT_MUTED;
    pub const ADMIN_TAG: Color = palette::WARNING;
    pub const SELECTED_FG: Color = palette::BG_DARK;
    pub const SELECTED_BG: Color = palette::BLUE;
    pub const PAGER: Color = palette::TEXT_DIM;
    pub const BG: Color = palette::BG_SURFACE;
}

/// Purpose editor surface
pub mod purpose {
    use super::*;

    pub const BORDER: Color = palette::MAGENTA;
    pub const BODY: Color = palette::TEXT_MUTED;
    pub const ERROR: Color = palette::ERROR;
    pub const COUNTER: Color = palette::TEXT_DIM;
    pub const BG: Color = palette::BG_SURFACE;
}

/// Notification toast
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = palette::BG_SURFACE;
    pub const INFO_BORDER: Color = palette::TEXT_MUTED;
    pub const WARNING_FG: Color = palette::BG_DARK;
    pub const WARNING_BG: Color = palette::WARNING;
    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = palette::ERROR;
}

/// Help popup
pub mod help {
    use super::*;

    pub const BORDER: Color = palette::TEAL;
    pub const KEY: Color = palette::WARNING;
    pub const DESC: Color = palette::TEXT;
    pub const SECTION: Color = palette::TEAL;
    pub const FOOTER: Color = palette::TEXT_DIM;
    pub const BG: Color = palette::BG_SURFACE;
}

/// Bottom help line
pub mod help_line {
    use super::*;

    pub const TEXT: Color = palette::TEXT_DIM;
}
