//! Signed-in dashboard screen.

pub mod render;
pub mod update;

pub use render::render;
pub use update::handle_key;
