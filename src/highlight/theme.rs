//! Built-in highlight themes.
//!
//! Exactly two themes exist, `light` and `dark`. Each is an immutable record
//! (`Palette`) mapping every *styled* token class to a `Style` descriptor;
//! the mapping is resolved once at construction, never looked up dynamically
//! per render. `Ident` and `Other` tokens have no palette field at all: they
//! render as escaped text only.
//!
//! The original console injected a shared stylesheet for these styles; here
//! the palette is plain data and any one-time stylesheet/animation
//! registration belongs to the host UI layer.

use crate::{Error, Result, config};

/// Style descriptor for one token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: &'static str,
    pub bold: bool,
    pub background: Option<&'static str>,
}

impl Style {
    const fn plain(color: &'static str) -> Self {
        Self {
            color,
            bold: false,
            background: None,
        }
    }

    const fn bold(color: &'static str) -> Self {
        Self {
            color,
            bold: true,
            background: None,
        }
    }

    const fn highlighted(color: &'static str, background: &'static str) -> Self {
        Self {
            color,
            bold: true,
            background: Some(background),
        }
    }

    /// Inline CSS for a `style` attribute.
    pub fn css(&self) -> String {
        let mut css = format!("color:{}", self.color);
        if self.bold {
            css.push_str(";font-weight:bold");
        }
        if let Some(bg) = self.background {
            css.push_str(";background:");
            css.push_str(bg);
        }
        css
    }
}

/// Immutable style record for every styled token class.
///
/// There is deliberately no field for identifiers or the `Other` catch-all;
/// those kinds are unstyled by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub keyword: Style,
    pub string: Style,
    pub quoted_ident: Style,
    pub comment: Style,
    pub number: Style,
    pub parameter: Style,
    /// Used when a parameter renders with its substituted test value.
    pub parameter_with_value: Style,
}

static LIGHT: Palette = Palette {
    keyword: Style::bold("#0000cc"),
    string: Style::plain("#a31515"),
    quoted_ident: Style::plain("#795e26"),
    comment: Style::plain("#008000"),
    number: Style::plain("#098658"),
    parameter: Style::bold("#af00db"),
    parameter_with_value: Style::highlighted("#af00db", "#fdf3bf"),
};

static DARK: Palette = Palette {
    keyword: Style::bold("#569cd6"),
    string: Style::plain("#ce9178"),
    quoted_ident: Style::plain("#dcdcaa"),
    comment: Style::plain("#6a9955"),
    number: Style::plain("#b5cea8"),
    parameter: Style::bold("#c586c0"),
    parameter_with_value: Style::highlighted("#c586c0", "#264f78"),
};

/// Closed set of built-in themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Theme {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl Theme {
    /// The resolved style record for this theme.
    pub const fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Theme named by `SQLPANE_DEFAULT_THEME` (falls back to `light`).
    pub fn default_from_config() -> Result<Self> {
        config().default_theme.parse()
    }
}

impl std::str::FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}
