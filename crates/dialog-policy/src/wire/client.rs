//! Client-facing request descriptor.
//!
//! Applications describe a request button as either "request a user" or
//! "request a chat"; the chat form decides between a group and a channel
//! request through [`RequestChatButton::chat_is_channel`]. Administrator rights
//! are spelled out as named booleans and `None` means "no requirement".

use crate::policy::{
    ChannelRestrictions, DialogVariant, GroupRestrictions, Policy, PolicyKind, RequestId,
    Restriction, UserRestrictions,
};
use crate::rights::AdministratorRights;
use crate::trace::{trace_field_dropped, trace_policy_built};

const SOURCE: &str = "client";

/// Keyboard button type carrying a dialog request.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "@type", rename_all = "camelCase"))]
pub enum ClientButtonType {
    /// Ask the peer to share a user.
    RequestUser(RequestUserButton),
    /// Ask the peer to share a group or channel.
    RequestChat(RequestChatButton),
}

/// Client description of a user request.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RequestUserButton {
    /// Button identifier, echoed back when the peer answers.
    pub id: u32,
    /// Enforce [`Self::user_is_bot`].
    pub restrict_user_is_bot: bool,
    /// Whether the shared user must be a bot.
    pub user_is_bot: bool,
    /// Enforce [`Self::user_is_premium`].
    pub restrict_user_is_premium: bool,
    /// Whether the shared user must have a premium subscription.
    pub user_is_premium: bool,
}

/// Client description of a chat request.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RequestChatButton {
    /// Button identifier, echoed back when the peer answers.
    pub id: u32,
    /// Request a broadcast channel instead of a group.
    pub chat_is_channel: bool,
    /// Enforce [`Self::chat_is_forum`]. Ignored for channel requests.
    pub restrict_chat_is_forum: bool,
    /// Whether the shared group must be a forum. Ignored for channel requests.
    pub chat_is_forum: bool,
    /// Enforce [`Self::chat_has_username`].
    pub restrict_chat_has_username: bool,
    /// Whether the shared chat must have a username.
    pub chat_has_username: bool,
    /// The shared chat must be newly created.
    pub chat_is_created: bool,
    /// Rights the requesting user must hold in the chat.
    pub user_administrator_rights: Option<ChatAdministratorRights>,
    /// Rights the bot would receive in the chat.
    pub bot_administrator_rights: Option<ChatAdministratorRights>,
    /// The bot must be a member of the shared group. Ignored for channel requests.
    pub bot_is_member: bool,
}

/// Administrator rights as named booleans.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChatAdministratorRights {
    /// Access the event log, statistics and member lists. Implied by every
    /// other right.
    pub can_manage_chat: bool,
    /// Change the title, photo and other settings.
    pub can_change_info: bool,
    /// Post in the channel.
    pub can_post_messages: bool,
    /// Edit messages of others in the channel.
    pub can_edit_messages: bool,
    /// Delete messages of others.
    pub can_delete_messages: bool,
    /// Invite new members.
    pub can_invite_users: bool,
    /// Restrict, ban or unban members.
    pub can_restrict_members: bool,
    /// Pin messages.
    pub can_pin_messages: bool,
    /// Create, rename, close and reopen forum topics.
    pub can_manage_topics: bool,
    /// Appoint new administrators with a subset of one's own rights.
    pub can_promote_members: bool,
    /// Start and manage video chats.
    pub can_manage_video_chats: bool,
    /// Post stories on behalf of the chat.
    pub can_post_stories: bool,
    /// Edit stories posted by others.
    pub can_edit_stories: bool,
    /// Delete stories posted by others.
    pub can_delete_stories: bool,
    /// Act anonymously, hidden behind the chat's identity.
    pub is_anonymous: bool,
}

impl ChatAdministratorRights {
    fn pairs(self) -> [(bool, AdministratorRights); 15] {
        [
            (self.can_manage_chat, AdministratorRights::MANAGE_CHAT),
            (self.can_change_info, AdministratorRights::CHANGE_INFO),
            (self.can_post_messages, AdministratorRights::POST_MESSAGES),
            (self.can_edit_messages, AdministratorRights::EDIT_MESSAGES),
            (self.can_delete_messages, AdministratorRights::DELETE_MESSAGES),
            (self.can_invite_users, AdministratorRights::INVITE_USERS),
            (self.can_restrict_members, AdministratorRights::RESTRICT_MEMBERS),
            (self.can_pin_messages, AdministratorRights::PIN_MESSAGES),
            (self.can_manage_topics, AdministratorRights::MANAGE_TOPICS),
            (self.can_promote_members, AdministratorRights::PROMOTE_MEMBERS),
            (self.can_manage_video_chats, AdministratorRights::MANAGE_VIDEO_CHATS),
            (self.can_post_stories, AdministratorRights::POST_STORIES),
            (self.can_edit_stories, AdministratorRights::EDIT_STORIES),
            (self.can_delete_stories, AdministratorRights::DELETE_STORIES),
            (self.is_anonymous, AdministratorRights::IS_ANONYMOUS),
        ]
    }

    /// Converts to a rights mask.
    ///
    /// Holding any right implies being able to manage the chat, so a non-empty
    /// result always includes [`AdministratorRights::MANAGE_CHAT`].
    #[must_use]
    pub fn to_rights(self) -> AdministratorRights {
        let rights = self
            .pairs()
            .into_iter()
            .filter(|(set, _)| *set)
            .fold(AdministratorRights::EMPTY, |acc, (_, right)| acc | right);
        if rights.is_empty() {
            rights
        } else {
            rights | AdministratorRights::MANAGE_CHAT
        }
    }

    /// Converts from a rights mask. Unknown bits have no client spelling and
    /// are not represented.
    #[must_use]
    pub fn from_rights(rights: AdministratorRights) -> Self {
        Self {
            can_manage_chat: rights.contains(AdministratorRights::MANAGE_CHAT),
            can_change_info: rights.contains(AdministratorRights::CHANGE_INFO),
            can_post_messages: rights.contains(AdministratorRights::POST_MESSAGES),
            can_edit_messages: rights.contains(AdministratorRights::EDIT_MESSAGES),
            can_delete_messages: rights.contains(AdministratorRights::DELETE_MESSAGES),
            can_invite_users: rights.contains(AdministratorRights::INVITE_USERS),
            can_restrict_members: rights.contains(AdministratorRights::RESTRICT_MEMBERS),
            can_pin_messages: rights.contains(AdministratorRights::PIN_MESSAGES),
            can_manage_topics: rights.contains(AdministratorRights::MANAGE_TOPICS),
            can_promote_members: rights.contains(AdministratorRights::PROMOTE_MEMBERS),
            can_manage_video_chats: rights.contains(AdministratorRights::MANAGE_VIDEO_CHATS),
            can_post_stories: rights.contains(AdministratorRights::POST_STORIES),
            can_edit_stories: rights.contains(AdministratorRights::EDIT_STORIES),
            can_delete_stories: rights.contains(AdministratorRights::DELETE_STORIES),
            is_anonymous: rights.contains(AdministratorRights::IS_ANONYMOUS),
        }
    }
}

fn rights_restriction(rights: Option<ChatAdministratorRights>) -> Restriction<AdministratorRights> {
    Restriction::from_option(rights.map(ChatAdministratorRights::to_rights))
}

fn rights_option(restriction: Restriction<AdministratorRights>) -> Option<ChatAdministratorRights> {
    restriction
        .to_option()
        .map(ChatAdministratorRights::from_rights)
}

impl Policy {
    /// Builds a policy from the client-facing descriptor.
    ///
    /// Never fails. Group-only fields on a channel request are dropped.
    #[must_use]
    pub fn from_client(button: ClientButtonType) -> Self {
        let policy = match button {
            ClientButtonType::RequestUser(button) => Self::user(
                RequestId::new(button.id),
                UserRestrictions {
                    is_bot: Restriction {
                        restrict: button.restrict_user_is_bot,
                        value: button.user_is_bot,
                    },
                    is_premium: Restriction {
                        restrict: button.restrict_user_is_premium,
                        value: button.user_is_premium,
                    },
                },
            ),
            ClientButtonType::RequestChat(button) => chat_policy(button),
        };
        trace_policy_built(SOURCE, &policy);
        policy
    }

    /// Re-emits the policy as a client-facing descriptor.
    ///
    /// Fields outside the active family take their client defaults.
    #[must_use]
    pub fn to_client(&self) -> ClientButtonType {
        let id = self.button_id();
        match self.kind() {
            PolicyKind::User(user) => ClientButtonType::RequestUser(RequestUserButton {
                id,
                restrict_user_is_bot: user.is_bot.restrict,
                user_is_bot: user.is_bot.value,
                restrict_user_is_premium: user.is_premium.restrict,
                user_is_premium: user.is_premium.value,
            }),
            PolicyKind::Group(group) => ClientButtonType::RequestChat(RequestChatButton {
                id,
                chat_is_channel: false,
                restrict_chat_is_forum: group.is_forum.restrict,
                chat_is_forum: group.is_forum.value,
                restrict_chat_has_username: group.has_username.restrict,
                chat_has_username: group.has_username.value,
                chat_is_created: group.is_created,
                user_administrator_rights: rights_option(group.user_administrator_rights),
                bot_administrator_rights: rights_option(group.bot_administrator_rights),
                bot_is_member: group.bot_is_participant,
            }),
            PolicyKind::Channel(channel) => ClientButtonType::RequestChat(RequestChatButton {
                id,
                chat_is_channel: true,
                restrict_chat_has_username: channel.has_username.restrict,
                chat_has_username: channel.has_username.value,
                chat_is_created: channel.is_created,
                user_administrator_rights: rights_option(channel.user_administrator_rights),
                bot_administrator_rights: rights_option(channel.bot_administrator_rights),
                ..RequestChatButton::default()
            }),
        }
    }
}

fn chat_policy(button: RequestChatButton) -> Policy {
    let request_id = RequestId::new(button.id);
    let has_username = Restriction {
        restrict: button.restrict_chat_has_username,
        value: button.chat_has_username,
    };
    let user_administrator_rights = rights_restriction(button.user_administrator_rights);
    let bot_administrator_rights = rights_restriction(button.bot_administrator_rights);

    if !button.chat_is_channel {
        return Policy::group(
            request_id,
            GroupRestrictions {
                is_forum: Restriction {
                    restrict: button.restrict_chat_is_forum,
                    value: button.chat_is_forum,
                },
                bot_is_participant: button.bot_is_member,
                has_username,
                is_created: button.chat_is_created,
                user_administrator_rights,
                bot_administrator_rights,
            },
        );
    }

    if button.restrict_chat_is_forum || button.chat_is_forum {
        trace_field_dropped(SOURCE, DialogVariant::Channel, "chat_is_forum");
    }
    if button.bot_is_member {
        trace_field_dropped(SOURCE, DialogVariant::Channel, "bot_is_member");
    }

    Policy::channel(
        request_id,
        ChannelRestrictions {
            has_username,
            is_created: button.chat_is_created,
            user_administrator_rights,
            bot_administrator_rights,
        },
    )
}

impl From<ClientButtonType> for Policy {
    fn from(button: ClientButtonType) -> Self {
        Self::from_client(button)
    }
}

impl From<&Policy> for ClientButtonType {
    fn from(policy: &Policy) -> Self {
        policy.to_client()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_button() -> RequestChatButton {
        RequestChatButton {
            id: 9,
            restrict_chat_is_forum: true,
            chat_is_forum: true,
            restrict_chat_has_username: true,
            chat_has_username: false,
            chat_is_created: true,
            user_administrator_rights: Some(ChatAdministratorRights {
                can_manage_chat: true,
                can_pin_messages: true,
                ..ChatAdministratorRights::default()
            }),
            bot_administrator_rights: None,
            bot_is_member: true,
            ..RequestChatButton::default()
        }
    }

    #[test]
    fn user_button_maps_both_restriction_pairs() {
        let policy = Policy::from_client(ClientButtonType::RequestUser(RequestUserButton {
            id: 5,
            restrict_user_is_bot: true,
            user_is_bot: false,
            restrict_user_is_premium: false,
            user_is_premium: true,
        }));

        assert_eq!(policy.request_id(), RequestId::new(5));
        let user = policy.as_user().expect("user policy");
        assert_eq!(user.is_bot, Restriction::require(false));
        assert_eq!(user.is_premium, Restriction { restrict: false, value: true });
    }

    #[test]
    fn chat_button_without_channel_flag_builds_group() {
        let policy = Policy::from_client(ClientButtonType::RequestChat(chat_button()));

        let group = policy.as_group().expect("group policy");
        assert_eq!(group.is_forum, Restriction::require(true));
        assert!(group.bot_is_participant);
        assert_eq!(group.has_username, Restriction::require(false));
        assert!(group.is_created);
        assert_eq!(
            group.user_administrator_rights,
            Restriction::require(AdministratorRights::MANAGE_CHAT | AdministratorRights::PIN_MESSAGES)
        );
        assert_eq!(group.bot_administrator_rights, Restriction::any());
    }

    #[test]
    fn channel_request_drops_group_only_fields() {
        let button = RequestChatButton {
            chat_is_channel: true,
            ..chat_button()
        };
        let policy = Policy::from_client(ClientButtonType::RequestChat(button));

        let channel = policy.as_channel().expect("channel policy");
        assert_eq!(channel.has_username, Restriction::require(false));
        assert!(channel.is_created);

        let ClientButtonType::RequestChat(emitted) = policy.to_client() else {
            panic!("chat request expected");
        };
        assert!(emitted.chat_is_channel);
        assert!(!emitted.restrict_chat_is_forum);
        assert!(!emitted.chat_is_forum);
        assert!(!emitted.bot_is_member);
    }

    #[test]
    fn any_right_implies_manage_chat() {
        let rights = ChatAdministratorRights {
            can_post_messages: true,
            ..ChatAdministratorRights::default()
        };

        assert_eq!(
            rights.to_rights(),
            AdministratorRights::POST_MESSAGES | AdministratorRights::MANAGE_CHAT
        );
        assert!(ChatAdministratorRights::default().to_rights().is_empty());
    }

    #[test]
    fn named_rights_cover_every_known_right() {
        let all = ChatAdministratorRights::from_rights(AdministratorRights::ALL_KNOWN);
        assert_eq!(all.to_rights(), AdministratorRights::ALL_KNOWN);
    }

    #[test]
    fn client_shape_round_trips_through_policy() {
        let buttons = [
            ClientButtonType::RequestUser(RequestUserButton {
                id: 1,
                restrict_user_is_bot: false,
                user_is_bot: true,
                restrict_user_is_premium: true,
                user_is_premium: true,
            }),
            ClientButtonType::RequestChat(chat_button()),
            ClientButtonType::RequestChat(RequestChatButton {
                id: 2,
                chat_is_channel: true,
                restrict_chat_has_username: true,
                chat_has_username: true,
                bot_administrator_rights: Some(ChatAdministratorRights {
                    can_manage_chat: true,
                    can_post_messages: true,
                    can_edit_messages: true,
                    ..ChatAdministratorRights::default()
                }),
                ..RequestChatButton::default()
            }),
        ];

        for button in buttons {
            assert_eq!(Policy::from_client(button.clone()).to_client(), button);
        }
    }
}
