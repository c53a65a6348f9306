//! Line-at-a-time SQL indentation.
//!
//! The indenter never parses SQL. Each line's column is derived from the
//! previous non-blank line: its indentation, whether it starts with a
//! recognized keyword, and the parenthesis balance between the two line
//! starts. Text inside string and comment literals is invisible to all of
//! this; the [`LexicalClassifier`] capability is the only authority on what
//! counts as code.
//!
//! ```rust
//! use sqlindent::{Config, SqlScanner, indent_source};
//!
//! let out = indent_source("select a,\nb\nfrom t", &SqlScanner, &Config::default());
//! assert_eq!(out, "select a,\n    b\nfrom t");
//! ```
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
        mod $module;
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
reexport!(logic);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};
