//! Terminal output for the command-line tool.
//!
//! - [`UserInterface`] trait so commands can be tested against [`MockUI`]
//! - [`TerminalUI`] for real terminal output
//!
//! # Example
//!
//! ```
//! use item_control::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Item control");
//! ui.success("Loaded 3 items");
//! assert!(ui.has_success("Loaded"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ControlTheme};

/// Output sink used by commands.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a `key: value` line.
    fn key_value(&mut self, key: &str, value: &str) {
        self.message(&format!("{}: {}", key, value));
    }

    /// Write machine-readable output. Never styled or suppressed.
    fn raw(&mut self, text: &str);
}
