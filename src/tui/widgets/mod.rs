//! Reusable TUI widgets

pub mod input;
pub mod notification;

pub use input::TextInput;
pub use notification::{Notification, NotificationType};
