//! Validator configuration.

/// How the validator treats a restriction the candidate view cannot answer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Unverifiable {
    /// Accept and leave the check to the caller.
    Skip,
    /// Reject the candidate.
    #[default]
    Reject,
}

/// Options for [`Policy::check_shared_dialog_with`](crate::Policy::check_shared_dialog_with).
///
/// The default fails closed: an active restriction the view cannot answer
/// rejects the candidate.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckOptions {
    /// Applied when a bot-rights restriction is active but the candidate view
    /// reports no prospective bot rights.
    pub unverifiable_bot_rights: Unverifiable,
}

impl CheckOptions {
    /// Options that accept what cannot be verified here, for callers that
    /// check the bot's rights themselves once the dialog is shared.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            unverifiable_bot_rights: Unverifiable::Skip,
        }
    }
}
