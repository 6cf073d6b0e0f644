//! Transient toast notifications.
//!
//! Every auth operation reports its outcome through a toast. Toasts expire on
//! a timer (driven by reducer ticks) rather than requiring dismissal.

pub mod render;
pub mod state;

pub use render::render;
pub use state::{Toast, ToastKind, ToastState};
