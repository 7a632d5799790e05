//! Theme-driven highlight rendering over the token stream.
//!
//! Modules:
//! - `theme`  : The two built-in themes (`light`, `dark`) and their resolved
//!   style palettes.
//! - `render` : Tokenize → escape → wrap in themed spans, with live
//!   `:param → 'value'` substitution.
//!
//! The de-tagged markup always equals the escaped input (ignoring injected
//! substitution text), so the highlighter can never change what the user
//! reads, only how it is styled.

pub mod render;
pub mod theme;

pub use render::{escape, render, render_or};
pub use theme::{Palette, Style, Theme};
