//! The canonical policy value.
//!
//! A [`Policy`] pairs a [`RequestId`] with a [`PolicyKind`]. The kind is a sum
//! type with one payload struct per variant, so a restriction that does not
//! apply to a variant has no field to live in: a user request cannot carry a
//! username restriction and a channel request cannot carry a forum restriction.
//!
//! Policies are immutable once built. The family structs expose public fields
//! so callers can assemble them with struct-update syntax, but a [`Policy`]
//! itself only hands out shared references to its payload.

mod id;
mod restriction;

pub use id::RequestId;
pub use restriction::Restriction;

use std::fmt;

use crate::rights::AdministratorRights;

/// Discriminant of a [`PolicyKind`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum DialogVariant {
    /// A private chat with a user or bot.
    User = 0,
    /// A basic group or a supergroup.
    Group = 1,
    /// A broadcast channel.
    Channel = 2,
}

impl DialogVariant {
    /// All variants in tag order.
    pub const ALL: [Self; 3] = [Self::User, Self::Group, Self::Channel];

    /// Tag byte used by the persisted form.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Self::tag`].
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::User),
            1 => Some(Self::Group),
            2 => Some(Self::Channel),
            _ => None,
        }
    }

    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Channel => "channel",
        }
    }
}

impl fmt::Display for DialogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Restrictions applicable when requesting a user.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRestrictions {
    /// Whether the shared user must (or must not) be a bot.
    pub is_bot: Restriction<bool>,
    /// Whether the shared user must (or must not) have a premium subscription.
    pub is_premium: Restriction<bool>,
}

/// Restrictions applicable when requesting a basic group or supergroup.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupRestrictions {
    /// Whether the shared group must (or must not) be a forum.
    pub is_forum: Restriction<bool>,
    /// The requesting bot must be a member of the shared group.
    ///
    /// The candidate view cannot answer this; callers check membership
    /// themselves before or after validation.
    pub bot_is_participant: bool,
    /// Whether the shared group must (or must not) have a public username.
    pub has_username: Restriction<bool>,
    /// The shared group must have been created for this request.
    pub is_created: bool,
    /// Rights the requesting user must hold in the shared group.
    pub user_administrator_rights: Restriction<AdministratorRights>,
    /// Rights the requesting bot would receive in the shared group.
    pub bot_administrator_rights: Restriction<AdministratorRights>,
}

/// Restrictions applicable when requesting a broadcast channel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelRestrictions {
    /// Whether the shared channel must (or must not) have a public username.
    pub has_username: Restriction<bool>,
    /// The shared channel must have been created for this request.
    pub is_created: bool,
    /// Rights the requesting user must hold in the shared channel.
    pub user_administrator_rights: Restriction<AdministratorRights>,
    /// Rights the requesting bot would receive in the shared channel.
    pub bot_administrator_rights: Restriction<AdministratorRights>,
}

/// Variant-tagged restriction payload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "variant", rename_all = "snake_case"))]
pub enum PolicyKind {
    /// Request a user.
    User(UserRestrictions),
    /// Request a basic group or supergroup.
    Group(GroupRestrictions),
    /// Request a broadcast channel.
    Channel(ChannelRestrictions),
}

impl PolicyKind {
    /// The active variant.
    #[must_use]
    pub const fn variant(&self) -> DialogVariant {
        match self {
            Self::User(_) => DialogVariant::User,
            Self::Group(_) => DialogVariant::Group,
            Self::Channel(_) => DialogVariant::Channel,
        }
    }
}

impl Default for PolicyKind {
    fn default() -> Self {
        Self::User(UserRestrictions::default())
    }
}

impl From<UserRestrictions> for PolicyKind {
    fn from(restrictions: UserRestrictions) -> Self {
        Self::User(restrictions)
    }
}

impl From<GroupRestrictions> for PolicyKind {
    fn from(restrictions: GroupRestrictions) -> Self {
        Self::Group(restrictions)
    }
}

impl From<ChannelRestrictions> for PolicyKind {
    fn from(restrictions: ChannelRestrictions) -> Self {
        Self::Channel(restrictions)
    }
}

/// Which dialog a peer may share in answer to an interactive request.
///
/// The default value is an unrestricted user request with identifier 0.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Policy {
    request_id: RequestId,
    kind: PolicyKind,
}

impl Policy {
    /// Builds a policy from its parts.
    #[must_use]
    pub fn new(request_id: RequestId, kind: impl Into<PolicyKind>) -> Self {
        Self {
            request_id,
            kind: kind.into(),
        }
    }

    /// Builds a user policy.
    #[must_use]
    pub fn user(request_id: RequestId, restrictions: UserRestrictions) -> Self {
        Self::new(request_id, restrictions)
    }

    /// Builds a group policy.
    #[must_use]
    pub fn group(request_id: RequestId, restrictions: GroupRestrictions) -> Self {
        Self::new(request_id, restrictions)
    }

    /// Builds a channel policy.
    #[must_use]
    pub fn channel(request_id: RequestId, restrictions: ChannelRestrictions) -> Self {
        Self::new(request_id, restrictions)
    }

    /// Identifier carried unchanged since construction.
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Integer tag of the keyboard button that issued the request.
    ///
    /// Same value as [`Self::request_id`], as a plain integer.
    #[must_use]
    pub const fn button_id(&self) -> u32 {
        self.request_id.get()
    }

    /// The active variant.
    #[must_use]
    pub const fn variant(&self) -> DialogVariant {
        self.kind.variant()
    }

    /// The variant-tagged restriction payload.
    #[must_use]
    pub const fn kind(&self) -> &PolicyKind {
        &self.kind
    }

    /// User restrictions, when this is a user policy.
    #[must_use]
    pub const fn as_user(&self) -> Option<&UserRestrictions> {
        match &self.kind {
            PolicyKind::User(restrictions) => Some(restrictions),
            _ => None,
        }
    }

    /// Group restrictions, when this is a group policy.
    #[must_use]
    pub const fn as_group(&self) -> Option<&GroupRestrictions> {
        match &self.kind {
            PolicyKind::Group(restrictions) => Some(restrictions),
            _ => None,
        }
    }

    /// Channel restrictions, when this is a channel policy.
    #[must_use]
    pub const fn as_channel(&self) -> Option<&ChannelRestrictions> {
        match &self.kind {
            PolicyKind::Channel(restrictions) => Some(restrictions),
            _ => None,
        }
    }
}
