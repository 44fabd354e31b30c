use thiserror::Error;

use super::CandidateKind;
use crate::policy::DialogVariant;
use crate::rights::AdministratorRights;

/// The first restriction a candidate dialog failed.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PolicyViolation {
    /// The candidate is not the kind of dialog the policy requests.
    #[error("expected a {expected} dialog, got a {actual}")]
    WrongDialogType {
        /// Variant the policy requests.
        expected: DialogVariant,
        /// What the candidate is.
        actual: CandidateKind,
    },
    /// The candidate is a basic group that can no longer be used.
    #[error("basic group is deactivated")]
    Deactivated,
    /// The user's bot status does not match.
    #[error("user {} be a bot", must(.required))]
    IsBotMismatch {
        /// Bot status the policy requires.
        required: bool,
    },
    /// The user's premium status does not match.
    #[error("user {} have a premium subscription", must(.required))]
    IsPremiumMismatch {
        /// Premium status the policy requires.
        required: bool,
    },
    /// The group's forum status does not match.
    #[error("group {} be a forum", must(.required))]
    IsForumMismatch {
        /// Forum status the policy requires.
        required: bool,
    },
    /// The chat's public username status does not match.
    #[error("chat {} have a public username", must(.required))]
    HasUsernameMismatch {
        /// Username status the policy requires.
        required: bool,
    },
    /// The chat existed before the request.
    #[error("chat must be newly created")]
    NotNewlyCreated,
    /// The requesting user lacks required administrator rights.
    #[error("user lacks administrator rights: {}", missing(.required, .available))]
    UserAdministratorRightsInsufficient {
        /// Rights the policy requires.
        required: AdministratorRights,
        /// Rights the user holds.
        available: AdministratorRights,
    },
    /// The bot would lack required administrator rights.
    #[error("bot lacks administrator rights: {}", missing(.required, .available))]
    BotAdministratorRightsInsufficient {
        /// Rights the policy requires.
        required: AdministratorRights,
        /// Rights the bot would receive.
        available: AdministratorRights,
    },
    /// Bot rights are required but the candidate view cannot report them.
    #[error("bot administrator rights cannot be verified")]
    BotAdministratorRightsUnverifiable {
        /// Rights the policy requires.
        required: AdministratorRights,
    },
}

fn must(required: &bool) -> &'static str {
    if *required { "must" } else { "must not" }
}

fn missing(required: &AdministratorRights, available: &AdministratorRights) -> AdministratorRights {
    required.missing_from(*available)
}

impl PolicyViolation {
    /// Name of the restriction that failed.
    #[must_use]
    pub const fn restriction(&self) -> &'static str {
        match self {
            Self::WrongDialogType { .. } => "dialog_type",
            Self::Deactivated => "deactivated",
            Self::IsBotMismatch { .. } => "is_bot",
            Self::IsPremiumMismatch { .. } => "is_premium",
            Self::IsForumMismatch { .. } => "is_forum",
            Self::HasUsernameMismatch { .. } => "has_username",
            Self::NotNewlyCreated => "is_created",
            Self::UserAdministratorRightsInsufficient { .. } => "user_administrator_rights",
            Self::BotAdministratorRightsInsufficient { .. }
            | Self::BotAdministratorRightsUnverifiable { .. } => "bot_administrator_rights",
        }
    }

    /// Rights that were required but not held, for rights violations.
    #[must_use]
    pub const fn missing_rights(&self) -> Option<AdministratorRights> {
        match self {
            Self::UserAdministratorRightsInsufficient {
                required,
                available,
            }
            | Self::BotAdministratorRightsInsufficient {
                required,
                available,
            } => Some(required.missing_from(*available)),
            Self::BotAdministratorRightsUnverifiable { required } => Some(*required),
            _ => None,
        }
    }
}
