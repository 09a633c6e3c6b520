//! The fluent selector builder.
//!
//! A [`SelectorBuilder`] holds the text rendered so far together with the set
//! of fragment kinds already used. Every append is checked against two rules
//! before the text is touched:
//!
//! 1. Element, id and pseudo-element may appear at most once.
//! 2. A fragment may not follow a fragment of a higher-ranked kind
//!    (element, id, class, attribute, pseudo-class, pseudo-element).
//!
//! Composite selectors built by [`combine`] and [`group`] start with an empty
//! kind set; they are new text values, not extensions of their operands.

use std::fmt;

use crate::error::{Result, SelectorError};
use crate::fragment::{Fragment, FragmentKind, FragmentKinds};
use crate::specificity::Specificity;

/// A selector under construction, or a finished composite selector.
///
/// # Example
///
/// ```
/// use selector::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .element("a")?
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
///
/// assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), selector::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    rendered: String,
    kinds: FragmentKinds,
    specificity: Specificity,
}

impl SelectorBuilder {
    /// Creates an empty builder. It renders as the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding a single fragment.
    ///
    /// A fresh builder accepts any first fragment, so this cannot fail.
    pub(crate) fn seeded(fragment: Fragment) -> Self {
        let mut builder = Self::new();
        builder.append(fragment);
        builder
    }

    /// Creates a composite selector from already rendered text.
    fn composite(rendered: String, specificity: Specificity) -> Self {
        Self {
            rendered,
            kinds: FragmentKinds::empty(),
            specificity,
        }
    }

    /// Appends a fragment in place.
    ///
    /// On error the builder is left exactly as it was.
    pub fn push(&mut self, fragment: Fragment) -> Result<()> {
        if let Err(err) = self.check(fragment.kind) {
            log::debug!(
                "rejected {} fragment {:?} after {:?}: {}",
                fragment.kind,
                fragment.value,
                self.rendered,
                err
            );
            return Err(err);
        }
        self.append(fragment);
        Ok(())
    }

    fn check(&self, kind: FragmentKind) -> Result<()> {
        if kind.is_unique() && self.kinds.contains(kind.into()) {
            return Err(SelectorError::DuplicateFragment { kind });
        }
        if self.kinds.intersects(FragmentKinds::after(kind)) {
            return Err(SelectorError::OrderViolation { kind });
        }
        Ok(())
    }

    fn append(&mut self, fragment: Fragment) {
        log::trace!("appending {} fragment {:?}", fragment.kind, fragment.value);
        self.rendered.push_str(fragment.kind.prefix());
        self.rendered.push_str(&fragment.value);
        self.rendered.push_str(fragment.kind.suffix());
        self.kinds |= FragmentKinds::from(fragment.kind);
        self.specificity += Specificity::of(fragment.kind);
    }

    fn with(mut self, kind: FragmentKind, value: impl Into<String>) -> Result<Self> {
        self.push(Fragment::new(kind, value))?;
        Ok(self)
    }

    /// Appends a type selector, e.g. `div`.
    pub fn element(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::Element, value)
    }

    /// Appends an id selector, rendered as `#value`.
    pub fn id(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::Id, value)
    }

    /// Appends a class selector, rendered as `.value`.
    pub fn class(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::Class, value)
    }

    /// Appends an attribute selector, rendered as `[value]`.
    ///
    /// The value is used verbatim; quoting is the caller's business.
    pub fn attr(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::Attribute, value)
    }

    /// Appends a pseudo-class, rendered as `:value`.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::PseudoClass, value)
    }

    /// Appends a pseudo-element, rendered as `::value`.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::PseudoElement, value)
    }

    /// The selector text accumulated so far.
    pub fn stringify(&self) -> &str {
        &self.rendered
    }

    /// Fragment kinds appended to this builder. Empty for composites.
    pub fn kinds(&self) -> FragmentKinds {
        self.kinds
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    pub fn into_string(self) -> String {
        self.rendered
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl AsRef<str> for SelectorBuilder {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl From<SelectorBuilder> for String {
    fn from(builder: SelectorBuilder) -> Self {
        builder.rendered
    }
}

/// Joins two selectors with a combinator token.
///
/// The token is padded with one space on each side and used verbatim, so the
/// descendant combinator `" "` yields three spaces between the operands.
/// Neither operand is modified.
pub fn combine(
    left: &SelectorBuilder,
    combinator: impl AsRef<str>,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    let combinator = combinator.as_ref();
    log::trace!(
        "combining {:?} {:?} {:?}",
        left.rendered,
        combinator,
        right.rendered
    );
    let rendered = format!("{} {} {}", left.rendered, combinator, right.rendered);
    SelectorBuilder::composite(rendered, left.specificity + right.specificity)
}

/// Joins selectors into a comma separated selector list.
///
/// The specificity of a list is that of its most specific member.
pub fn group<'a>(selectors: impl IntoIterator<Item = &'a SelectorBuilder>) -> SelectorBuilder {
    let mut rendered = String::new();
    let mut specificity = Specificity::ZERO;
    for (i, selector) in selectors.into_iter().enumerate() {
        if i > 0 {
            rendered.push_str(", ");
        }
        rendered.push_str(&selector.rendered);
        specificity = specificity.max(selector.specificity);
    }
    log::trace!("grouped selectors into {:?}", rendered);
    SelectorBuilder::composite(rendered, specificity)
}
