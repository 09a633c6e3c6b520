//! Typed selector fragments and the fixed order between their kinds.

use std::fmt;

use bitflags::bitflags;

/// The kind of a single selector fragment.
///
/// The declaration order is the order CSS requires inside a compound
/// selector, so the derived `Ord` is the ranking the builder enforces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl FragmentKind {
    /// All kinds, lowest rank first.
    pub const ALL: [FragmentKind; 6] = [
        FragmentKind::Element,
        FragmentKind::Id,
        FragmentKind::Class,
        FragmentKind::Attribute,
        FragmentKind::PseudoClass,
        FragmentKind::PseudoElement,
    ];

    /// Position of this kind in the required order, starting at 0.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Whether a selector may contain at most one fragment of this kind.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }

    pub fn prefix(self) -> &'static str {
        match self {
            FragmentKind::Element => "",
            FragmentKind::Id => "#",
            FragmentKind::Class => ".",
            FragmentKind::Attribute => "[",
            FragmentKind::PseudoClass => ":",
            FragmentKind::PseudoElement => "::",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            FragmentKind::Attribute => "]",
            _ => "",
        }
    }

    /// Human readable name, as used in the error messages.
    pub fn name(self) -> &'static str {
        match self {
            FragmentKind::Element => "element",
            FragmentKind::Id => "id",
            FragmentKind::Class => "class",
            FragmentKind::Attribute => "attribute",
            FragmentKind::PseudoClass => "pseudo-class",
            FragmentKind::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of fragment kinds already present in a selector.
    ///
    /// # Example
    ///
    /// ```
    /// use selector::{FragmentKind, FragmentKinds};
    ///
    /// let mut used = FragmentKinds::empty();
    /// used |= FragmentKinds::from(FragmentKind::Class);
    ///
    /// assert!(used.contains(FragmentKinds::CLASS));
    /// assert!(used.intersects(FragmentKinds::after(FragmentKind::Id)));
    /// assert!(!used.intersects(FragmentKinds::after(FragmentKind::Class)));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FragmentKinds: u8 {
        const ELEMENT        = 0b0000_0001;
        const ID             = 0b0000_0010;
        const CLASS          = 0b0000_0100;
        const ATTRIBUTE      = 0b0000_1000;
        const PSEUDO_CLASS   = 0b0001_0000;
        const PSEUDO_ELEMENT = 0b0010_0000;
    }
}

impl FragmentKinds {
    /// Every kind ranked strictly after `kind`.
    pub fn after(kind: FragmentKind) -> FragmentKinds {
        // Flags are laid out by rank, so the higher kinds are the bits above.
        FragmentKinds::from_bits_truncate(!((FragmentKinds::from(kind).bits() << 1) - 1))
    }

    /// The highest-ranked kind in the set, if any.
    pub fn highest(self) -> Option<FragmentKind> {
        FragmentKind::ALL
            .into_iter()
            .rev()
            .find(|kind| self.contains((*kind).into()))
    }
}

impl From<FragmentKind> for FragmentKinds {
    fn from(kind: FragmentKind) -> Self {
        FragmentKinds::from_bits_truncate(1 << kind.rank())
    }
}

/// A single typed piece of a selector, e.g. the class `primary`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub value: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.kind.prefix(),
            self.value,
            self.kind.suffix()
        )
    }
}
