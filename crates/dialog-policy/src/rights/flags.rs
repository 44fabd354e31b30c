use std::fmt;
use std::iter::{Extend, FromIterator};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};

use super::iter::KnownRightsIter;
use super::known::KnownRight;

/// Set of administrator rights held by, or required of, a chat member.
///
/// Unknown bits are preserved verbatim so a mask written by a newer release
/// survives a store/parse cycle through an older one. [`Self::contains`] is the
/// superset test used when validating a candidate chat.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AdministratorRights {
    bits: u32,
}

impl AdministratorRights {
    const fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// No rights.
    pub const EMPTY: Self = Self::new(0);
    /// Access the chat event log, statistics and member lists.
    pub const MANAGE_CHAT: Self = Self::new(1 << 0);
    /// Change the chat title, photo and other settings.
    pub const CHANGE_INFO: Self = Self::new(1 << 1);
    /// Post messages in a broadcast channel.
    pub const POST_MESSAGES: Self = Self::new(1 << 2);
    /// Edit messages of other users and pin messages in a broadcast channel.
    pub const EDIT_MESSAGES: Self = Self::new(1 << 3);
    /// Delete messages of other users.
    pub const DELETE_MESSAGES: Self = Self::new(1 << 4);
    /// Invite new users to the chat.
    pub const INVITE_USERS: Self = Self::new(1 << 5);
    /// Restrict, ban or unban chat members.
    pub const RESTRICT_MEMBERS: Self = Self::new(1 << 6);
    /// Pin messages in a group.
    pub const PIN_MESSAGES: Self = Self::new(1 << 7);
    /// Create, rename, close and reopen forum topics.
    pub const MANAGE_TOPICS: Self = Self::new(1 << 8);
    /// Add new administrators with a subset of the holder's own rights.
    pub const PROMOTE_MEMBERS: Self = Self::new(1 << 9);
    /// Manage video chats.
    pub const MANAGE_VIDEO_CHATS: Self = Self::new(1 << 10);
    /// Remain anonymous when posting in a group.
    pub const IS_ANONYMOUS: Self = Self::new(1 << 11);
    /// Post stories on behalf of the chat.
    pub const POST_STORIES: Self = Self::new(1 << 12);
    /// Edit stories posted by other users.
    pub const EDIT_STORIES: Self = Self::new(1 << 13);
    /// Delete stories posted by other users.
    pub const DELETE_STORIES: Self = Self::new(1 << 14);

    /// Every right recognised by this release.
    pub const ALL_KNOWN: Self = Self::new(Self::KNOWN_MASK);

    pub(super) const KNOWN_MASK: u32 = (1 << 15) - 1;

    /// Builds a mask from raw bits without masking unknown positions.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns `true` when no right is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Bits that this release does not assign a meaning to.
    #[must_use]
    pub const fn unknown_bits(self) -> u32 {
        self.bits & !Self::KNOWN_MASK
    }

    /// Returns the mask with every unknown bit cleared.
    #[must_use]
    pub const fn without_unknown_bits(self) -> Self {
        Self::new(self.bits & Self::KNOWN_MASK)
    }

    /// Returns `true` when every right in `other` is also in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Union of both masks.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.bits | other.bits)
    }

    /// Rights present in both masks.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::new(self.bits & other.bits)
    }

    /// Rights present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::new(self.bits & !other.bits)
    }

    /// Rights required by `self` that `available` does not grant.
    ///
    /// Empty exactly when `available.contains(self)`.
    #[must_use]
    pub const fn missing_from(self, available: Self) -> Self {
        self.difference(available)
    }

    /// Iterates over the known rights in ascending bit order.
    #[must_use]
    pub fn iter_known(self) -> KnownRightsIter {
        KnownRightsIter::new(self)
    }
}

impl FromIterator<KnownRight> for AdministratorRights {
    fn from_iter<I: IntoIterator<Item = KnownRight>>(iter: I) -> Self {
        let mut rights = Self::EMPTY;
        rights.extend(iter);
        rights
    }
}

impl Extend<KnownRight> for AdministratorRights {
    fn extend<I: IntoIterator<Item = KnownRight>>(&mut self, iter: I) {
        for right in iter {
            *self |= right.as_rights();
        }
    }
}

impl IntoIterator for AdministratorRights {
    type Item = KnownRight;
    type IntoIter = KnownRightsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_known()
    }
}

impl fmt::Debug for AdministratorRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdministratorRights")
            .field("bits", &format_args!("0x{:x}", self.bits))
            .finish()
    }
}

impl fmt::Display for AdministratorRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut first = true;
        for right in self.iter_known() {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            fmt::Display::fmt(&right, f)?;
        }

        let unknown = self.unknown_bits();
        if unknown != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "unknown(0x{unknown:x})")?;
        }

        Ok(())
    }
}

impl Not for AdministratorRights {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.bits)
    }
}

impl BitOr for AdministratorRights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for AdministratorRights {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for AdministratorRights {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for AdministratorRights {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl Sub for AdministratorRights {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl From<KnownRight> for AdministratorRights {
    fn from(right: KnownRight) -> Self {
        right.as_rights()
    }
}

impl From<AdministratorRights> for u32 {
    fn from(rights: AdministratorRights) -> Self {
        rights.bits
    }
}
