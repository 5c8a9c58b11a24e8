//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts.
/// Terminals rarely forward Cmd on macOS, so Ctrl is used everywhere.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display for help text
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Choice toggle display
#[cfg(target_os = "macos")]
pub const TOGGLE_KEY: &str = "Space/Return";

#[cfg(not(target_os = "macos"))]
pub const TOGGLE_KEY: &str = "Space/Enter";
