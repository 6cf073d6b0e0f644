//! Sign-in / sign-up screen: form state, key handling, and rendering.

pub mod render;
pub mod state;
pub mod update;

pub use render::render;
pub use state::{AuthFormsState, AuthTab};
pub use update::handle_main_key;
