mod events;
mod render;
mod state;

// Re-export public types
pub use state::{App, OutputMode, Overlay};

#[cfg(test)]
#[path = "flow_tests.rs"]
mod flow_tests;
