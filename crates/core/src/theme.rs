//! Style-token resolution for block-level presentation options.
//!
//! Content authors pick style options from closed enums (background color,
//! padding, column count). Stored values may be absent, or may be strings
//! introduced after this code was written — resolution is total: any
//! unrecognized or missing value maps to the variant's documented default.

/// Section background color option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundColor {
    #[default]
    White,
    LightGray,
    Dark,
    Primary,
}

impl BackgroundColor {
    /// Resolve a stored value to a token. Total over all inputs.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("white") => Self::White,
            Some("light-gray") => Self::LightGray,
            Some("dark") => Self::Dark,
            Some("primary") => Self::Primary,
            _ => Self::default(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::White => "bg-white",
            Self::LightGray => "bg-light-gray",
            Self::Dark => "bg-dark",
            Self::Primary => "bg-primary",
        }
    }
}

/// Vertical section padding option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    Small,
    #[default]
    Medium,
    Large,
}

impl Padding {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("small") => Self::Small,
            Some("medium") => Self::Medium,
            Some("large") => Self::Large,
            _ => Self::default(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Small => "pad-sm",
            Self::Medium => "pad-md",
            Self::Large => "pad-lg",
        }
    }
}

/// Column count for grid-style blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnCount {
    Two,
    #[default]
    Three,
    Four,
}

impl ColumnCount {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("2") | Some("two") => Self::Two,
            Some("3") | Some("three") => Self::Three,
            Some("4") | Some("four") => Self::Four,
            _ => Self::default(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Two => "cols-2",
            Self::Three => "cols-3",
            Self::Four => "cols-4",
        }
    }
}
