//! The indentation engine.
//!
//! Control flows top-down: `indenter` asks `delta` for a level change, which
//! consults `locator` for the previous non-blank line and `classify` for the
//! shape of both lines. Only `indenter` (and the host default in `mode`)
//! writes to a `Document`.
crate::reexport!(cursor);
crate::reexport!(document);
crate::reexport!(locator);
crate::reexport!(classify);
crate::reexport!(delta);
crate::reexport!(indenter);
crate::reexport!(mode);
