use ratatui::style::Color;

/// Global colour palette used across the TUI.
/// The values are chosen to be accessible and work in both light & dark terminals.
pub struct Palette;

impl Palette {
    /// Normal (unselected) text colour.
    pub const NORMAL: Color = Color::White;

    /// Selected item in the focused pane.
    pub const SELECTED_BG: Color = Color::Indexed(25); // blue
    pub const SELECTED_FG: Color = Color::White;

    /// Selected row label while the column pane has focus.
    pub const INACTIVE_SELECTED_BG: Color = Color::Indexed(238);

    /// Cell values next to the column names.
    pub const VALUE: Color = Color::Indexed(250);

    /// Pane separator.
    pub const SEPARATOR: Color = Color::Indexed(241);

    /// Header and footer bars (drawn reversed).
    pub const BAR: Color = Color::Indexed(244);

    /// Error banner.
    pub const ERROR_FG: Color = Color::Red;
    pub const ERROR_BG: Color = Color::Black;
}
