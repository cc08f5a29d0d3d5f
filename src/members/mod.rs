//! Team member list surface.
//!
//! A searchable, paged list of the workspace team's members. Selecting a
//! member opens a direct message through the same worker and generation
//! guard the switcher uses.

pub mod events;
mod render;
mod state;

pub use render::render_members;
pub use state::{MemberRow, MembersState, USERS_PER_PAGE, build_member_rows};
