//! App palette and spacing. Light/dark selected at runtime from the stored preference.

/// Warm sage/terracotta palette.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#7A5C48";
    pub const LIGHT_ON_PRIMARY: &'static str = "#FFFFFF";
    pub const LIGHT_BACKGROUND: &'static str = "#F7F3EE";
    pub const LIGHT_SURFACE: &'static str = "#FFFFFF";
    pub const LIGHT_ON_SURFACE: &'static str = "#2B2420";
    pub const LIGHT_MUTED: &'static str = "#6F655E";
    pub const LIGHT_SUCCESS: &'static str = "#2E7D5B";
    pub const LIGHT_ERROR: &'static str = "#B3261E";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#E0B9A0";
    pub const DARK_ON_PRIMARY: &'static str = "#3A2417";
    pub const DARK_BACKGROUND: &'static str = "#1B1714";
    pub const DARK_SURFACE: &'static str = "#2A2420";
    pub const DARK_ON_SURFACE: &'static str = "#EFE6DF";
    pub const DARK_MUTED: &'static str = "#B4A79D";
    pub const DARK_SUCCESS: &'static str = "#7FD1A8";
    pub const DARK_ERROR: &'static str = "#FFB4AB";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn on_primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_PRIMARY
        } else {
            Self::LIGHT_ON_PRIMARY
        }
    }
    pub fn background(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BACKGROUND
        } else {
            Self::LIGHT_BACKGROUND
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn muted(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_MUTED
        } else {
            Self::LIGHT_MUTED
        }
    }
    pub fn success(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SUCCESS
        } else {
            Self::LIGHT_SUCCESS
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const XL: &str = "32px";
    pub const CARD_PADDING: &str = "20px";
    pub const SCREEN_PADDING: &str = "24px";
    pub const CONTENT_MAX_WIDTH: &str = "1100px";
}
