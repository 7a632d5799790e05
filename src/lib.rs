//! SQL lexical-analysis & presentation engine.
//!
//! `sqlpane` is the text-processing core shared by the admin console's SQL
//! editing surfaces (query definition, ad-hoc runner, test harness). It is
//! deliberately small and synchronous: every entry point is a pure text
//! transformation invoked on a keystroke or a toggle.
//!
//! The engine has four parts:
//! - [`sql`]       : lossless, lenient tokenizer over arbitrary SQL text.
//! - [`highlight`] : theme-driven HTML renderer over the token stream, with
//!   live `:param → 'value'` substitution.
//! - [`format`]    : line-oriented pretty-printer over raw text.
//! - [`params`]    : named-parameter extraction plus the per-session binding
//!   state (test values, cursor-mediated insert/remove edits).
//!
//! Query persistence, execution, routing and all other host concerns live
//! outside this crate; the only integration surface is [`EditorBuffer`].

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        pub mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(sql);
reexport!(highlight);
reexport!(params);
reexport!(format);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};
