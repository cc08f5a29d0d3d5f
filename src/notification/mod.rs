//! Transient notification toasts.
//!
//! Any part of the application can surface a short-lived message here; the
//! event loop clears expired ones and the render pass draws the current one
//! in the top-right corner.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
