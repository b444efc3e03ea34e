//! Color theme constants for the postpager UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Post body text
pub const COLOR_BODY: Color = Color::Gray;

// ============================================================================
// Controls
// ============================================================================

/// Route bar text
pub const COLOR_ROUTE: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Enabled button label
pub const COLOR_BUTTON: Color = Color::White;

/// Hovered button background
pub const COLOR_BUTTON_HOVER_BG: Color = Color::Rgb(40, 40, 60);

/// Current page marker background
pub const COLOR_CURRENT_PAGE_BG: Color = Color::Rgb(0, 122, 204);

/// Disabled button label
pub const COLOR_DISABLED: Color = Color::Rgb(70, 70, 70);

// ============================================================================
// Status Colors
// ============================================================================

/// Loading spinner
pub const COLOR_LOADING: Color = Color::Yellow;

/// End of results marker
pub const COLOR_DONE: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error panel
pub const COLOR_ERROR: Color = Color::Red;

/// Scroll boundary flash
pub const COLOR_BOUNDARY: Color = Color::Cyan;
