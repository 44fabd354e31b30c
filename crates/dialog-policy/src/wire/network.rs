//! Network-facing request descriptor.
//!
//! The server models a peer request as a tagged union with one case per
//! variant. Optional booleans and rights are present only when they restrict
//! the answer, and administrator rights travel as a flags word whose bit
//! positions differ from [`AdministratorRights`].

use crate::policy::{
    ChannelRestrictions, GroupRestrictions, Policy, PolicyKind, RequestId, Restriction,
    UserRestrictions,
};
use crate::rights::AdministratorRights;
use crate::trace::trace_policy_built;

const SOURCE: &str = "network";

/// Administrator rights flags word in the network bit layout.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatAdminRights {
    /// Raw flags word.
    pub flags: u32,
}

impl ChatAdminRights {
    /// `change_info`.
    pub const CHANGE_INFO: u32 = 1 << 0;
    /// `post_messages`.
    pub const POST_MESSAGES: u32 = 1 << 1;
    /// `edit_messages`.
    pub const EDIT_MESSAGES: u32 = 1 << 2;
    /// `delete_messages`.
    pub const DELETE_MESSAGES: u32 = 1 << 3;
    /// `ban_users`.
    pub const BAN_USERS: u32 = 1 << 4;
    /// `invite_users`.
    pub const INVITE_USERS: u32 = 1 << 5;
    /// `pin_messages`.
    pub const PIN_MESSAGES: u32 = 1 << 7;
    /// `add_admins`.
    pub const ADD_ADMINS: u32 = 1 << 9;
    /// `anonymous`.
    pub const ANONYMOUS: u32 = 1 << 10;
    /// `manage_call`.
    pub const MANAGE_CALL: u32 = 1 << 11;
    /// `other`: everything covered by managing the chat.
    pub const OTHER: u32 = 1 << 12;
    /// `manage_topics`.
    pub const MANAGE_TOPICS: u32 = 1 << 13;
    /// `post_stories`.
    pub const POST_STORIES: u32 = 1 << 14;
    /// `edit_stories`.
    pub const EDIT_STORIES: u32 = 1 << 15;
    /// `delete_stories`.
    pub const DELETE_STORIES: u32 = 1 << 16;

    const MAPPING: [(u32, AdministratorRights); 15] = [
        (Self::OTHER, AdministratorRights::MANAGE_CHAT),
        (Self::CHANGE_INFO, AdministratorRights::CHANGE_INFO),
        (Self::POST_MESSAGES, AdministratorRights::POST_MESSAGES),
        (Self::EDIT_MESSAGES, AdministratorRights::EDIT_MESSAGES),
        (Self::DELETE_MESSAGES, AdministratorRights::DELETE_MESSAGES),
        (Self::INVITE_USERS, AdministratorRights::INVITE_USERS),
        (Self::BAN_USERS, AdministratorRights::RESTRICT_MEMBERS),
        (Self::PIN_MESSAGES, AdministratorRights::PIN_MESSAGES),
        (Self::MANAGE_TOPICS, AdministratorRights::MANAGE_TOPICS),
        (Self::ADD_ADMINS, AdministratorRights::PROMOTE_MEMBERS),
        (Self::MANAGE_CALL, AdministratorRights::MANAGE_VIDEO_CHATS),
        (Self::ANONYMOUS, AdministratorRights::IS_ANONYMOUS),
        (Self::POST_STORIES, AdministratorRights::POST_STORIES),
        (Self::EDIT_STORIES, AdministratorRights::EDIT_STORIES),
        (Self::DELETE_STORIES, AdministratorRights::DELETE_STORIES),
    ];

    /// Translates into the crate's rights mask. Unassigned network bits are
    /// dropped.
    #[must_use]
    pub fn to_rights(self) -> AdministratorRights {
        Self::MAPPING
            .into_iter()
            .filter(|(bit, _)| self.flags & bit != 0)
            .fold(AdministratorRights::EMPTY, |acc, (_, right)| acc | right)
    }

    /// Translates from the crate's rights mask. Unknown bits are dropped.
    #[must_use]
    pub fn from_rights(rights: AdministratorRights) -> Self {
        let flags = Self::MAPPING
            .into_iter()
            .filter(|(_, right)| rights.contains(*right))
            .fold(0, |acc, (bit, _)| acc | bit);
        Self { flags }
    }
}

/// Request for a user.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestPeerTypeUser {
    /// Required bot status, if restricted.
    pub bot: Option<bool>,
    /// Required premium status, if restricted.
    pub premium: Option<bool>,
}

/// Request for a basic group or supergroup.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestPeerTypeChat {
    /// The chat must be newly created.
    pub creator: bool,
    /// The bot must be a member.
    pub bot_participant: bool,
    /// Required username presence, if restricted.
    pub has_username: Option<bool>,
    /// Required forum status, if restricted.
    pub forum: Option<bool>,
    /// Rights the requesting user must hold.
    pub user_admin_rights: Option<ChatAdminRights>,
    /// Rights the bot would receive.
    pub bot_admin_rights: Option<ChatAdminRights>,
}

/// Request for a broadcast channel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestPeerTypeBroadcast {
    /// The channel must be newly created.
    pub creator: bool,
    /// Required username presence, if restricted.
    pub has_username: Option<bool>,
    /// Rights the requesting user must hold.
    pub user_admin_rights: Option<ChatAdminRights>,
    /// Rights the bot would receive.
    pub bot_admin_rights: Option<ChatAdminRights>,
}

/// Tagged union exchanged with the server.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "_", rename_all = "camelCase"))]
pub enum RequestPeerType {
    /// `requestPeerTypeUser`.
    User(RequestPeerTypeUser),
    /// `requestPeerTypeChat`.
    Chat(RequestPeerTypeChat),
    /// `requestPeerTypeBroadcast`.
    Broadcast(RequestPeerTypeBroadcast),
}

fn rights_restriction(rights: Option<ChatAdminRights>) -> Restriction<AdministratorRights> {
    Restriction::from_option(rights.map(ChatAdminRights::to_rights))
}

fn rights_option(restriction: Restriction<AdministratorRights>) -> Option<ChatAdminRights> {
    restriction.to_option().map(ChatAdminRights::from_rights)
}

impl Policy {
    /// Builds a policy from the network-facing descriptor.
    ///
    /// The network shape does not carry the request identifier, so the caller
    /// supplies it. Never fails.
    #[must_use]
    pub fn from_network(peer_type: RequestPeerType, request_id: RequestId) -> Self {
        let policy = match peer_type {
            RequestPeerType::User(user) => Self::user(
                request_id,
                UserRestrictions {
                    is_bot: user.bot.into(),
                    is_premium: user.premium.into(),
                },
            ),
            RequestPeerType::Chat(chat) => Self::group(
                request_id,
                GroupRestrictions {
                    is_forum: chat.forum.into(),
                    bot_is_participant: chat.bot_participant,
                    has_username: chat.has_username.into(),
                    is_created: chat.creator,
                    user_administrator_rights: rights_restriction(chat.user_admin_rights),
                    bot_administrator_rights: rights_restriction(chat.bot_admin_rights),
                },
            ),
            RequestPeerType::Broadcast(broadcast) => Self::channel(
                request_id,
                ChannelRestrictions {
                    has_username: broadcast.has_username.into(),
                    is_created: broadcast.creator,
                    user_administrator_rights: rights_restriction(broadcast.user_admin_rights),
                    bot_administrator_rights: rights_restriction(broadcast.bot_admin_rights),
                },
            ),
        };
        trace_policy_built(SOURCE, &policy);
        policy
    }

    /// Re-emits the policy as a network-facing descriptor.
    ///
    /// Inactive restrictions are omitted, so the value they hold is not sent.
    #[must_use]
    pub fn to_network(&self) -> RequestPeerType {
        match self.kind() {
            PolicyKind::User(user) => RequestPeerType::User(RequestPeerTypeUser {
                bot: user.is_bot.to_option(),
                premium: user.is_premium.to_option(),
            }),
            PolicyKind::Group(group) => RequestPeerType::Chat(RequestPeerTypeChat {
                creator: group.is_created,
                bot_participant: group.bot_is_participant,
                has_username: group.has_username.to_option(),
                forum: group.is_forum.to_option(),
                user_admin_rights: rights_option(group.user_administrator_rights),
                bot_admin_rights: rights_option(group.bot_administrator_rights),
            }),
            PolicyKind::Channel(channel) => RequestPeerType::Broadcast(RequestPeerTypeBroadcast {
                creator: channel.is_created,
                has_username: channel.has_username.to_option(),
                user_admin_rights: rights_option(channel.user_administrator_rights),
                bot_admin_rights: rights_option(channel.bot_administrator_rights),
            }),
        }
    }
}
