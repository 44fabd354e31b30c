use std::iter::FusedIterator;

use super::flags::AdministratorRights;
use super::known::KnownRight;

/// Iterator over the known rights set in an [`AdministratorRights`] mask.
///
/// Yields rights lowest bit first; unknown bits are skipped.
#[derive(Clone, Debug)]
pub struct KnownRightsIter {
    remaining: u32,
}

impl KnownRightsIter {
    pub(super) const fn new(rights: AdministratorRights) -> Self {
        Self {
            remaining: rights.bits() & AdministratorRights::KNOWN_MASK,
        }
    }
}

impl Iterator for KnownRightsIter {
    type Item = KnownRight;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bit = 1u32 << self.remaining.trailing_zeros();
        self.remaining &= !bit;
        KnownRight::from_single_bit(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KnownRightsIter {}

impl FusedIterator for KnownRightsIter {}
