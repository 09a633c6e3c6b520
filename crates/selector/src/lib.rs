//! # selector - fluent CSS selector builder
//!
//! Assembles CSS selector strings from typed fragments while enforcing the
//! ordering and uniqueness rules of a compound selector. Values are taken as
//! already-formed strings: nothing here parses or validates CSS syntax.
//!
//! ## Quick Start
//!
//! ```rust
//! use selector::{combine, element, id, Combinator};
//!
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let main = id("main").class("container")?.class("editable")?;
//! assert_eq!(main.stringify(), "#main.container.editable");
//!
//! let siblings = combine(
//!     &element("div").id("main")?,
//!     Combinator::AdjacentSibling,
//!     &element("table").id("data")?,
//! );
//! assert_eq!(siblings.stringify(), "div#main + table#data");
//! # Ok::<(), selector::SelectorError>(())
//! ```
//!
//! ## Rules
//!
//! Fragments must be appended in this order:
//! element, id, class, attribute, pseudo-class, pseudo-element.
//! Element, id and pseudo-element may occur once; class, attribute and
//! pseudo-class may repeat as long as the order holds, so `.a.b[x]` is
//! accepted and `.a[x].b` is not.
//!
//! ## Modules
//!
//! - [`builder`]: [`SelectorBuilder`], [`combine`] and [`group`]
//! - [`fragment`]: fragment kinds and their fixed order
//! - [`combinator`]: the standard combinator tokens
//! - [`specificity`]: CSS specificity of built selectors
//! - [`error`]: [`SelectorError`]

pub mod builder;
pub mod combinator;
pub mod error;
pub mod fragment;
pub mod specificity;

pub use builder::{SelectorBuilder, combine, group};
pub use combinator::Combinator;
pub use error::{Result, SelectorError};
pub use fragment::{Fragment, FragmentKind, FragmentKinds};
pub use specificity::Specificity;

/// Starts a selector with a type selector, e.g. `div`.
pub fn element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::new(FragmentKind::Element, value))
}

/// Starts a selector with an id, rendered as `#value`.
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::new(FragmentKind::Id, value))
}

/// Starts a selector with a class, rendered as `.value`.
pub fn class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::new(FragmentKind::Class, value))
}

/// Starts a selector with an attribute, rendered as `[value]`.
pub fn attr(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::new(FragmentKind::Attribute, value))
}

/// Starts a selector with a pseudo-class, rendered as `:value`.
pub fn pseudo_class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::new(FragmentKind::PseudoClass, value))
}

/// Starts a selector with a pseudo-element, rendered as `::value`.
pub fn pseudo_element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::new(FragmentKind::PseudoElement, value))
}
