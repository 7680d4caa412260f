//! Shell state: dark mode and the mobile navigation menu.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Process-wide UI flags, provided as a context signal from `app::App`.
///
/// `dark_mode` is written only by the navigation-bar toggle and read by
/// every view for styling. It intentionally does not persist across reloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
}
