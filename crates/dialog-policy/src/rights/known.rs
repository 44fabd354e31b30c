use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::flags::AdministratorRights;

/// A single administrator right recognised by this release.
///
/// [`AdministratorRights::iter_known`] yields variants in ascending bit order,
/// which is also the order of [`Self::ALL`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KnownRight {
    /// [`AdministratorRights::MANAGE_CHAT`].
    ManageChat,
    /// [`AdministratorRights::CHANGE_INFO`].
    ChangeInfo,
    /// [`AdministratorRights::POST_MESSAGES`].
    PostMessages,
    /// [`AdministratorRights::EDIT_MESSAGES`].
    EditMessages,
    /// [`AdministratorRights::DELETE_MESSAGES`].
    DeleteMessages,
    /// [`AdministratorRights::INVITE_USERS`].
    InviteUsers,
    /// [`AdministratorRights::RESTRICT_MEMBERS`].
    RestrictMembers,
    /// [`AdministratorRights::PIN_MESSAGES`].
    PinMessages,
    /// [`AdministratorRights::MANAGE_TOPICS`].
    ManageTopics,
    /// [`AdministratorRights::PROMOTE_MEMBERS`].
    PromoteMembers,
    /// [`AdministratorRights::MANAGE_VIDEO_CHATS`].
    ManageVideoChats,
    /// [`AdministratorRights::IS_ANONYMOUS`].
    IsAnonymous,
    /// [`AdministratorRights::POST_STORIES`].
    PostStories,
    /// [`AdministratorRights::EDIT_STORIES`].
    EditStories,
    /// [`AdministratorRights::DELETE_STORIES`].
    DeleteStories,
}

impl KnownRight {
    /// Every known right in ascending bit order.
    pub const ALL: [Self; 15] = [
        Self::ManageChat,
        Self::ChangeInfo,
        Self::PostMessages,
        Self::EditMessages,
        Self::DeleteMessages,
        Self::InviteUsers,
        Self::RestrictMembers,
        Self::PinMessages,
        Self::ManageTopics,
        Self::PromoteMembers,
        Self::ManageVideoChats,
        Self::IsAnonymous,
        Self::PostStories,
        Self::EditStories,
        Self::DeleteStories,
    ];

    /// Returns the single-bit mask for this right.
    #[must_use]
    pub const fn as_rights(self) -> AdministratorRights {
        AdministratorRights::from_bits(1 << self as u32)
    }

    /// Identifier used in diagnostics, e.g. `can_post_messages`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ManageChat => "can_manage_chat",
            Self::ChangeInfo => "can_change_info",
            Self::PostMessages => "can_post_messages",
            Self::EditMessages => "can_edit_messages",
            Self::DeleteMessages => "can_delete_messages",
            Self::InviteUsers => "can_invite_users",
            Self::RestrictMembers => "can_restrict_members",
            Self::PinMessages => "can_pin_messages",
            Self::ManageTopics => "can_manage_topics",
            Self::PromoteMembers => "can_promote_members",
            Self::ManageVideoChats => "can_manage_video_chats",
            Self::IsAnonymous => "is_anonymous",
            Self::PostStories => "can_post_stories",
            Self::EditStories => "can_edit_stories",
            Self::DeleteStories => "can_delete_stories",
        }
    }

    pub(super) fn from_single_bit(bit: u32) -> Option<Self> {
        if bit.count_ones() != 1 {
            return None;
        }
        Self::ALL.get(bit.trailing_zeros() as usize).copied()
    }
}

impl FromStr for KnownRight {
    type Err = ParseKnownRightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|right| right.name() == s)
            .ok_or_else(|| ParseKnownRightError {
                identifier: s.into(),
            })
    }
}

impl fmt::Display for KnownRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a right identifier is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized administrator right: {identifier:?}")]
pub struct ParseKnownRightError {
    identifier: Box<str>,
}

impl ParseKnownRightError {
    /// The identifier that failed to parse.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}
