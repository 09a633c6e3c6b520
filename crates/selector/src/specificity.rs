use std::ops::{Add, AddAssign};

use crate::fragment::FragmentKind;

/// CSS specificity of a selector.
///
/// Compares lexicographically: ids first, then classes, then types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            ids,
            classes,
            types,
        }
    }

    /// Specificity contributed by a single fragment of `kind`.
    pub fn of(kind: FragmentKind) -> Self {
        match kind {
            FragmentKind::Id => Self::new(1, 0, 0),
            // Attributes weigh the same as classes and pseudo-classes
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                Self::new(0, 1, 0)
            }
            FragmentKind::Element | FragmentKind::PseudoElement => Self::new(0, 0, 1),
        }
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            ids: self.ids.saturating_add(rhs.ids),
            classes: self.classes.saturating_add(rhs.classes),
            types: self.types.saturating_add(rhs.types),
        }
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order() {
        assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 9, 9));
        assert!(Specificity::new(0, 2, 0) > Specificity::new(0, 1, 5));
        assert!(Specificity::new(0, 0, 2) > Specificity::new(0, 0, 1));
        assert_eq!(Specificity::default(), Specificity::ZERO);
    }

    #[test]
    fn per_kind_weights() {
        assert_eq!(Specificity::of(FragmentKind::Id), Specificity::new(1, 0, 0));
        assert_eq!(
            Specificity::of(FragmentKind::Attribute),
            Specificity::new(0, 1, 0)
        );
        assert_eq!(
            Specificity::of(FragmentKind::PseudoElement),
            Specificity::new(0, 0, 1)
        );
    }

    #[test]
    fn add_saturates() {
        let mut spec = Specificity::new(u32::MAX, 1, 0);
        spec += Specificity::new(1, 1, 1);
        assert_eq!(spec, Specificity::new(u32::MAX, 2, 1));
    }
}
