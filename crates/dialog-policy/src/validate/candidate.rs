use std::fmt;

use crate::policy::DialogVariant;
use crate::rights::AdministratorRights;

/// What kind of dialog a candidate is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CandidateKind {
    /// A user or bot account.
    User,
    /// A basic group.
    BasicGroup,
    /// A supergroup, forum or not.
    Supergroup,
    /// A broadcast channel.
    Broadcast,
}

impl CandidateKind {
    /// The policy variant that accepts this kind of dialog.
    #[must_use]
    pub const fn variant(self) -> DialogVariant {
        match self {
            Self::User => DialogVariant::User,
            Self::BasicGroup | Self::Supergroup => DialogVariant::Group,
            Self::Broadcast => DialogVariant::Channel,
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::BasicGroup => "basic group",
            Self::Supergroup => "supergroup",
            Self::Broadcast => "broadcast channel",
        })
    }
}

/// Read-only view of the live attributes of a dialog being shared.
///
/// Implemented by the caller's entity-resolution layer. Attributes that do not
/// exist for a kind of dialog report `false` (a basic group never has a
/// username, a channel is never a forum).
pub trait CandidateView {
    /// Kind of dialog.
    fn kind(&self) -> CandidateKind;

    /// The user is a bot account.
    fn is_bot(&self) -> bool;

    /// The user has a premium subscription.
    fn is_premium(&self) -> bool;

    /// The supergroup is a forum.
    fn is_forum(&self) -> bool;

    /// The chat has a public username.
    fn has_username(&self) -> bool;

    /// The chat was created as part of answering the request.
    fn is_newly_created(&self) -> bool;

    /// The basic group was deactivated, typically by an upgrade to a supergroup.
    fn is_deactivated(&self) -> bool {
        false
    }

    /// Rights the requesting user holds in the chat; empty if none.
    fn user_administrator_rights(&self) -> AdministratorRights;

    /// Rights the bot would hold if promoted in the chat, when known.
    fn bot_administrator_rights(&self) -> Option<AdministratorRights>;
}

impl<T: CandidateView + ?Sized> CandidateView for &T {
    fn kind(&self) -> CandidateKind {
        (**self).kind()
    }

    fn is_bot(&self) -> bool {
        (**self).is_bot()
    }

    fn is_premium(&self) -> bool {
        (**self).is_premium()
    }

    fn is_forum(&self) -> bool {
        (**self).is_forum()
    }

    fn has_username(&self) -> bool {
        (**self).has_username()
    }

    fn is_newly_created(&self) -> bool {
        (**self).is_newly_created()
    }

    fn is_deactivated(&self) -> bool {
        (**self).is_deactivated()
    }

    fn user_administrator_rights(&self) -> AdministratorRights {
        (**self).user_administrator_rights()
    }

    fn bot_administrator_rights(&self) -> Option<AdministratorRights> {
        (**self).bot_administrator_rights()
    }
}

/// Pre-resolved candidate attributes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateSnapshot {
    /// What sort of dialog was picked.
    pub kind: CandidateKind,
    /// The picked user is a bot account.
    pub is_bot: bool,
    /// The picked user holds a premium subscription.
    pub is_premium: bool,
    /// The picked group has topics enabled.
    pub is_forum: bool,
    /// The picked dialog has a public username.
    pub has_username: bool,
    /// The picked chat was created by the user for this request.
    pub is_newly_created: bool,
    /// The picked basic group was migrated away or deactivated.
    pub is_deactivated: bool,
    /// Rights the requesting user holds in the picked chat. Empty when the
    /// user is not an administrator there.
    pub user_administrator_rights: AdministratorRights,
    /// Rights the bot would hold in the picked chat, or `None` when they are
    /// not known at check time.
    pub bot_administrator_rights: Option<AdministratorRights>,
}

impl CandidateSnapshot {
    /// A candidate of `kind` with every attribute false, no user rights and
    /// unreported bot rights.
    #[must_use]
    pub const fn new(kind: CandidateKind) -> Self {
        Self {
            kind,
            is_bot: false,
            is_premium: false,
            is_forum: false,
            has_username: false,
            is_newly_created: false,
            is_deactivated: false,
            user_administrator_rights: AdministratorRights::EMPTY,
            bot_administrator_rights: None,
        }
    }

    /// A regular user account.
    #[must_use]
    pub const fn user() -> Self {
        Self::new(CandidateKind::User)
    }

    /// A bot account.
    #[must_use]
    pub const fn bot() -> Self {
        Self {
            is_bot: true,
            ..Self::new(CandidateKind::User)
        }
    }

    /// A basic group.
    #[must_use]
    pub const fn basic_group() -> Self {
        Self::new(CandidateKind::BasicGroup)
    }

    /// A supergroup.
    #[must_use]
    pub const fn supergroup() -> Self {
        Self::new(CandidateKind::Supergroup)
    }

    /// A broadcast channel.
    #[must_use]
    pub const fn broadcast() -> Self {
        Self::new(CandidateKind::Broadcast)
    }

    /// Sets the premium flag.
    pub const fn with_premium(mut self, is_premium: bool) -> Self {
        self.is_premium = is_premium;
        self
    }

    /// Sets the forum flag.
    pub const fn with_forum(mut self, is_forum: bool) -> Self {
        self.is_forum = is_forum;
        self
    }

    /// Sets the username flag.
    pub const fn with_username(mut self, has_username: bool) -> Self {
        self.has_username = has_username;
        self
    }

    /// Sets the newly-created flag.
    pub const fn with_newly_created(mut self, is_newly_created: bool) -> Self {
        self.is_newly_created = is_newly_created;
        self
    }

    /// Sets the deactivated flag.
    pub const fn with_deactivated(mut self, is_deactivated: bool) -> Self {
        self.is_deactivated = is_deactivated;
        self
    }

    /// Sets the requesting user's rights.
    pub const fn with_user_rights(mut self, rights: AdministratorRights) -> Self {
        self.user_administrator_rights = rights;
        self
    }

    /// Sets the bot's prospective rights.
    pub const fn with_bot_rights(mut self, rights: AdministratorRights) -> Self {
        self.bot_administrator_rights = Some(rights);
        self
    }
}

impl CandidateView for CandidateSnapshot {
    fn kind(&self) -> CandidateKind {
        self.kind
    }

    fn is_bot(&self) -> bool {
        self.is_bot
    }

    fn is_premium(&self) -> bool {
        self.is_premium
    }

    fn is_forum(&self) -> bool {
        self.is_forum
    }

    fn has_username(&self) -> bool {
        self.has_username
    }

    fn is_newly_created(&self) -> bool {
        self.is_newly_created
    }

    fn is_deactivated(&self) -> bool {
        self.is_deactivated
    }

    fn user_administrator_rights(&self) -> AdministratorRights {
        self.user_administrator_rights
    }

    fn bot_administrator_rights(&self) -> Option<AdministratorRights> {
        self.bot_administrator_rights
    }
}
