//! Copyable trait for components that provide clipboard content

use super::Component;

/// Trait for components that can provide content for the clipboard
///
/// When the user presses `y`, the active component's `Copyable`
/// implementation determines what gets copied.
pub trait Copyable: Component {
    /// Text for the clipboard, or `None` if there's nothing to copy
    fn copy_text(&self) -> Option<String>;

    /// What will be copied, for the toast message
    fn copy_description(&self) -> String {
        self.id().label().to_string()
    }
}
