use crate::prefs::Accent;

/// Events produced by the input layer and applied to application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Flip light/dark
    ToggleTheme,
    /// Flip live/paused streaming
    ToggleLive,
    /// Step to the next accent color
    CycleAccent,
    /// Jump to a specific accent
    SelectAccent(Accent),
    /// Move input focus to the search field
    FocusSearch,
    /// Append a character to the search query
    SearchChar(char),
    /// Delete the last character of the search query
    SearchBackspace,
    /// Return focus from the search field
    LeaveSearch,
    Quit,
}
