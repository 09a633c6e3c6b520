//! Fluent builders for CSS selector strings.
//!
//! The builder itself lives in the [`selector`] crate; this package re-exports
//! it together with a [`prelude`] for glob imports.
//!
//! ```rust
//! use fluent_selectors::prelude::*;
//!
//! let rule = combine(
//!     &element("nav").class("menu")?,
//!     Combinator::Child,
//!     &element("a").pseudo_class("hover")?,
//! );
//! assert_eq!(rule.to_string(), "nav.menu > a:hover");
//! # Ok::<(), SelectorError>(())
//! ```

pub use selector::*;

pub mod prelude {
    pub use selector::{
        Combinator, SelectorBuilder, SelectorError, attr, class, combine, element, group, id,
        pseudo_class, pseudo_element,
    };
}
