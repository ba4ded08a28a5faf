use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Which input(s) contributed an aligned node
    ///
    /// `BOTH` is the union of the two single-source flags, so a common node
    /// answers `true` to both `contains(FIRST)` and `contains(SECOND)`.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Membership: u8 {
        const FIRST = 0b01;
        const SECOND = 0b10;
        const BOTH = Self::FIRST.bits() | Self::SECOND.bits();
    }
}

impl Membership {
    pub fn is_first_only(&self) -> bool {
        *self == Membership::FIRST
    }

    pub fn is_second_only(&self) -> bool {
        *self == Membership::SECOND
    }

    pub fn is_both(&self) -> bool {
        self.contains(Membership::BOTH)
    }

    /// Same provenance seen from the other side of the comparison
    pub fn swapped(&self) -> Self {
        let mut swapped = Membership::empty();
        if self.contains(Membership::FIRST) {
            swapped |= Membership::SECOND;
        }
        if self.contains(Membership::SECOND) {
            swapped |= Membership::FIRST;
        }
        swapped
    }
}

impl fmt::Debug for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (
            self.contains(Membership::FIRST),
            self.contains(Membership::SECOND),
        ) {
            (true, true) => write!(f, "BOTH"),
            (true, false) => write!(f, "FIRST"),
            (false, true) => write!(f, "SECOND"),
            (false, false) => write!(f, "NONE"),
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
