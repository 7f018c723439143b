use std::num::NonZero;

/// The length of a list that holds at least one node. Emptiness lives in the list's state enum
/// instead, so a Full list can never claim a length of zero.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(NonZero<usize>);

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Lists run out of memory for their nodes long before a length could saturate.
    pub const fn incremented(self) -> Length {
        Length(self.0.saturating_add(1))
    }

    /// Returns [`None`] once the last node is gone, meaning the list should become Empty.
    pub const fn decremented(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }
}
