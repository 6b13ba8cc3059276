//! Layout constants for folio-tui.
//!
//! Centralizes all layout-related magic numbers for easy tuning and consistency.

/// Main layout constants.
pub mod main {
    /// Status bar height in rows.
    pub const STATUS_BAR_HEIGHT: u16 = 3;

    /// Mobile top bar height in rows.
    pub const TOP_BAR_HEIGHT: u16 = 3;

    /// Event poll interval; also drives scroll animation and notice timers.
    pub const TICK_RATE_MS: u64 = 50;
}

/// Document scrolling.
pub mod scroll {
    /// Rows moved by one mouse wheel notch.
    pub const WHEEL_ROWS: i32 = 3;

    /// Offset (rows) past which the back-to-top control appears.
    pub const BACK_TO_TOP_ROWS: u32 = 10;

    /// Each animation step covers this fraction (1/n) of the remaining distance.
    pub const EASING_DIVISOR: u32 = 4;
}

/// Floating controls.
pub mod controls {
    /// Collapsed drawer button width.
    pub const OPEN_BUTTON_WIDTH: u16 = 7;

    /// Collapsed drawer button height.
    pub const OPEN_BUTTON_HEIGHT: u16 = 3;

    /// Notice toast maximum width.
    pub const NOTICE_MAX_WIDTH: u16 = 48;
}

/// Contact form column widths.
pub mod form {
    /// Label column width.
    pub const LABEL_WIDTH: usize = 10;

    /// Minimum rows reserved for the message field.
    pub const MESSAGE_MIN_ROWS: usize = 3;
}
