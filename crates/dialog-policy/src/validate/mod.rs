//! Checking a shared dialog against the policy it answers.
//!
//! Restrictions are evaluated in a fixed order and the first failure is
//! reported, so a given policy and candidate always produce the same
//! [`PolicyViolation`]:
//!
//! - user: dialog kind, bot status, premium status;
//! - group: dialog kind, deactivation, forum status, username, creation,
//!   user rights, bot rights;
//! - channel: dialog kind, username, creation, user rights, bot rights.
//!
//! Bot membership in a group is not observable through [`CandidateView`] and
//! is left to the caller.

mod candidate;
mod violation;

pub use candidate::{CandidateKind, CandidateSnapshot, CandidateView};
pub use violation::PolicyViolation;

use crate::config::{CheckOptions, Unverifiable};
use crate::policy::{
    ChannelRestrictions, DialogVariant, GroupRestrictions, Policy, PolicyKind, Restriction,
    UserRestrictions,
};
use crate::rights::AdministratorRights;
use crate::trace::{trace_check_deferred, trace_check_failed, trace_check_passed};

impl Policy {
    /// Checks `candidate` against every restriction of this policy using the
    /// default [`CheckOptions`].
    ///
    /// An active bot-rights restriction fails with
    /// [`PolicyViolation::BotAdministratorRightsUnverifiable`] when the view
    /// reports no prospective bot rights. Use
    /// [`CheckOptions::lenient`] with [`Self::check_shared_dialog_with`] to
    /// defer that check instead.
    ///
    /// # Errors
    ///
    /// Returns the first restriction the candidate fails.
    pub fn check_shared_dialog<C>(&self, candidate: &C) -> Result<(), PolicyViolation>
    where
        C: CandidateView + ?Sized,
    {
        self.check_shared_dialog_with(candidate, &CheckOptions::default())
    }

    /// Checks `candidate` against every restriction of this policy.
    ///
    /// # Errors
    ///
    /// Returns the first restriction the candidate fails.
    pub fn check_shared_dialog_with<C>(
        &self,
        candidate: &C,
        options: &CheckOptions,
    ) -> Result<(), PolicyViolation>
    where
        C: CandidateView + ?Sized,
    {
        let result = match self.kind() {
            PolicyKind::User(user) => check_user(user, candidate),
            PolicyKind::Group(group) => check_group(self, group, candidate, options),
            PolicyKind::Channel(channel) => check_channel(self, channel, candidate, options),
        };
        match &result {
            Ok(()) => trace_check_passed(self),
            Err(violation) => trace_check_failed(self, violation),
        }
        result
    }
}

fn check_kind<C>(expected: DialogVariant, candidate: &C) -> Result<(), PolicyViolation>
where
    C: CandidateView + ?Sized,
{
    let actual = candidate.kind();
    if actual.variant() == expected {
        Ok(())
    } else {
        Err(PolicyViolation::WrongDialogType { expected, actual })
    }
}

fn check_user<C>(user: &UserRestrictions, candidate: &C) -> Result<(), PolicyViolation>
where
    C: CandidateView + ?Sized,
{
    check_kind(DialogVariant::User, candidate)?;
    if !user.is_bot.admits(candidate.is_bot()) {
        return Err(PolicyViolation::IsBotMismatch {
            required: user.is_bot.value,
        });
    }
    if !user.is_premium.admits(candidate.is_premium()) {
        return Err(PolicyViolation::IsPremiumMismatch {
            required: user.is_premium.value,
        });
    }
    Ok(())
}

fn check_group<C>(
    policy: &Policy,
    group: &GroupRestrictions,
    candidate: &C,
    options: &CheckOptions,
) -> Result<(), PolicyViolation>
where
    C: CandidateView + ?Sized,
{
    check_kind(DialogVariant::Group, candidate)?;
    if candidate.is_deactivated() {
        return Err(PolicyViolation::Deactivated);
    }
    if !group.is_forum.admits(candidate.is_forum()) {
        return Err(PolicyViolation::IsForumMismatch {
            required: group.is_forum.value,
        });
    }
    if group.bot_is_participant {
        trace_check_deferred(policy, "bot_is_participant");
    }
    check_chat(
        policy,
        ChatRestrictions {
            has_username: group.has_username,
            is_created: group.is_created,
            user_administrator_rights: group.user_administrator_rights,
            bot_administrator_rights: group.bot_administrator_rights,
        },
        candidate,
        options,
    )
}

fn check_channel<C>(
    policy: &Policy,
    channel: &ChannelRestrictions,
    candidate: &C,
    options: &CheckOptions,
) -> Result<(), PolicyViolation>
where
    C: CandidateView + ?Sized,
{
    check_kind(DialogVariant::Channel, candidate)?;
    check_chat(
        policy,
        ChatRestrictions {
            has_username: channel.has_username,
            is_created: channel.is_created,
            user_administrator_rights: channel.user_administrator_rights,
            bot_administrator_rights: channel.bot_administrator_rights,
        },
        candidate,
        options,
    )
}

/// Restrictions shared by group and channel policies.
#[derive(Clone, Copy)]
struct ChatRestrictions {
    has_username: Restriction<bool>,
    is_created: bool,
    user_administrator_rights: Restriction<AdministratorRights>,
    bot_administrator_rights: Restriction<AdministratorRights>,
}

fn check_chat<C>(
    policy: &Policy,
    chat: ChatRestrictions,
    candidate: &C,
    options: &CheckOptions,
) -> Result<(), PolicyViolation>
where
    C: CandidateView + ?Sized,
{
    if !chat.has_username.admits(candidate.has_username()) {
        return Err(PolicyViolation::HasUsernameMismatch {
            required: chat.has_username.value,
        });
    }
    if chat.is_created && !candidate.is_newly_created() {
        return Err(PolicyViolation::NotNewlyCreated);
    }

    let available = candidate.user_administrator_rights();
    if !chat.user_administrator_rights.admits(available) {
        return Err(PolicyViolation::UserAdministratorRightsInsufficient {
            required: chat.user_administrator_rights.value,
            available,
        });
    }

    let Some(&required) = chat.bot_administrator_rights.required() else {
        return Ok(());
    };
    match candidate.bot_administrator_rights() {
        Some(available) if available.contains(required) => Ok(()),
        Some(available) => Err(PolicyViolation::BotAdministratorRightsInsufficient {
            required,
            available,
        }),
        None => match options.unverifiable_bot_rights {
            Unverifiable::Skip => {
                trace_check_deferred(policy, "bot_administrator_rights");
                Ok(())
            }
            Unverifiable::Reject => {
                Err(PolicyViolation::BotAdministratorRightsUnverifiable { required })
            }
        },
    }
}

#[cfg(test)]
mod tests;
