use super::*;
use crate::policy::RequestId;

fn id() -> RequestId {
    RequestId::new(11)
}

fn non_bot_user() -> Policy {
    Policy::user(
        id(),
        UserRestrictions {
            is_bot: Restriction::require(false),
            ..UserRestrictions::default()
        },
    )
}

#[test]
fn unrestricted_user_policy_accepts_any_user() {
    let policy = Policy::default();
    assert_eq!(policy.check_shared_dialog(&CandidateSnapshot::user()), Ok(()));
    assert_eq!(policy.check_shared_dialog(&CandidateSnapshot::bot()), Ok(()));
}

#[test]
fn user_policy_rejects_chats() {
    let err = Policy::default()
        .check_shared_dialog(&CandidateSnapshot::supergroup())
        .unwrap_err();
    assert_eq!(
        err,
        PolicyViolation::WrongDialogType {
            expected: DialogVariant::User,
            actual: CandidateKind::Supergroup,
        }
    );
    assert_eq!(err.to_string(), "expected a user dialog, got a supergroup");
}

#[test]
fn bot_status_checked_before_premium() {
    let policy = Policy::user(
        id(),
        UserRestrictions {
            is_bot: Restriction::require(false),
            is_premium: Restriction::require(true),
        },
    );

    let err = policy
        .check_shared_dialog(&CandidateSnapshot::bot())
        .unwrap_err();
    assert_eq!(err, PolicyViolation::IsBotMismatch { required: false });
    assert_eq!(err.to_string(), "user must not be a bot");

    let err = policy
        .check_shared_dialog(&CandidateSnapshot::user())
        .unwrap_err();
    assert_eq!(err, PolicyViolation::IsPremiumMismatch { required: true });

    let premium = CandidateSnapshot::user().with_premium(true);
    assert_eq!(policy.check_shared_dialog(&premium), Ok(()));
}

#[test]
fn inactive_restriction_values_are_ignored() {
    let policy = Policy::user(
        id(),
        UserRestrictions {
            is_bot: Restriction {
                restrict: false,
                value: true,
            },
            ..UserRestrictions::default()
        },
    );
    assert_eq!(policy.check_shared_dialog(&CandidateSnapshot::user()), Ok(()));
    assert_eq!(non_bot_user().check_shared_dialog(&CandidateSnapshot::user()), Ok(()));
}

#[test]
fn group_policy_accepts_both_group_kinds_only() {
    let policy = Policy::group(id(), GroupRestrictions::default());
    assert_eq!(policy.check_shared_dialog(&CandidateSnapshot::basic_group()), Ok(()));
    assert_eq!(policy.check_shared_dialog(&CandidateSnapshot::supergroup()), Ok(()));
    assert!(matches!(
        policy.check_shared_dialog(&CandidateSnapshot::broadcast()),
        Err(PolicyViolation::WrongDialogType {
            expected: DialogVariant::Group,
            actual: CandidateKind::Broadcast,
        })
    ));
    assert!(matches!(
        policy.check_shared_dialog(&CandidateSnapshot::user()),
        Err(PolicyViolation::WrongDialogType { .. })
    ));
}

#[test]
fn deactivated_basic_group_is_rejected_before_other_checks() {
    let policy = Policy::group(
        id(),
        GroupRestrictions {
            is_forum: Restriction::require(true),
            ..GroupRestrictions::default()
        },
    );
    let candidate = CandidateSnapshot::basic_group().with_deactivated(true);
    assert_eq!(
        policy.check_shared_dialog(&candidate),
        Err(PolicyViolation::Deactivated)
    );
}

#[test]
fn group_checks_run_in_order() {
    let required = AdministratorRights::MANAGE_CHAT | AdministratorRights::PIN_MESSAGES;
    let policy = Policy::group(
        id(),
        GroupRestrictions {
            is_forum: Restriction::require(true),
            bot_is_participant: true,
            has_username: Restriction::require(false),
            is_created: true,
            user_administrator_rights: Restriction::require(required),
            bot_administrator_rights: Restriction::require(AdministratorRights::MANAGE_CHAT),
        },
    );

    let mut candidate = CandidateSnapshot::supergroup().with_username(true);
    assert_eq!(
        policy.check_shared_dialog(&candidate),
        Err(PolicyViolation::IsForumMismatch { required: true })
    );

    candidate = candidate.with_forum(true);
    assert_eq!(
        policy.check_shared_dialog(&candidate),
        Err(PolicyViolation::HasUsernameMismatch { required: false })
    );

    candidate = candidate.with_username(false);
    assert_eq!(
        policy.check_shared_dialog(&candidate),
        Err(PolicyViolation::NotNewlyCreated)
    );

    candidate = candidate
        .with_newly_created(true)
        .with_user_rights(AdministratorRights::MANAGE_CHAT);
    assert_eq!(
        policy.check_shared_dialog(&candidate),
        Err(PolicyViolation::UserAdministratorRightsInsufficient {
            required,
            available: AdministratorRights::MANAGE_CHAT,
        })
    );

    candidate = candidate
        .with_user_rights(AdministratorRights::ALL_KNOWN)
        .with_bot_rights(AdministratorRights::EMPTY);
    assert_eq!(
        policy.check_shared_dialog(&candidate),
        Err(PolicyViolation::BotAdministratorRightsInsufficient {
            required: AdministratorRights::MANAGE_CHAT,
            available: AdministratorRights::EMPTY,
        })
    );

    candidate = candidate.with_bot_rights(AdministratorRights::MANAGE_CHAT);
    assert_eq!(policy.check_shared_dialog(&candidate), Ok(()));
}

#[test]
fn channel_policy_requires_broadcast() {
    let policy = Policy::channel(id(), ChannelRestrictions::default());
    assert_eq!(policy.check_shared_dialog(&CandidateSnapshot::broadcast()), Ok(()));
    assert_eq!(
        policy.check_shared_dialog(&CandidateSnapshot::supergroup()),
        Err(PolicyViolation::WrongDialogType {
            expected: DialogVariant::Channel,
            actual: CandidateKind::Supergroup,
        })
    );
}

#[test]
fn channel_ignores_forum_and_deactivation_attributes() {
    let policy = Policy::channel(id(), ChannelRestrictions::default());
    let candidate = CandidateSnapshot::broadcast()
        .with_forum(true)
        .with_deactivated(true);
    assert_eq!(policy.check_shared_dialog(&candidate), Ok(()));
}

#[test]
fn unverifiable_bot_rights_follow_options() {
    let policy = Policy::channel(
        id(),
        ChannelRestrictions {
            bot_administrator_rights: Restriction::require(AdministratorRights::POST_MESSAGES),
            ..ChannelRestrictions::default()
        },
    );
    let candidate = CandidateSnapshot::broadcast();

    assert_eq!(
        policy.check_shared_dialog(&candidate),
        Err(PolicyViolation::BotAdministratorRightsUnverifiable {
            required: AdministratorRights::POST_MESSAGES,
        })
    );
    assert_eq!(
        policy.check_shared_dialog_with(&candidate, &CheckOptions::default()),
        policy.check_shared_dialog(&candidate)
    );
    assert_eq!(
        policy.check_shared_dialog_with(&candidate, &CheckOptions::lenient()),
        Ok(())
    );
}

#[test]
fn rights_violation_reports_missing_rights() {
    let required = AdministratorRights::POST_MESSAGES | AdministratorRights::EDIT_MESSAGES;
    let violation = PolicyViolation::UserAdministratorRightsInsufficient {
        required,
        available: AdministratorRights::EDIT_MESSAGES,
    };
    assert_eq!(
        violation.missing_rights(),
        Some(AdministratorRights::POST_MESSAGES)
    );
    assert_eq!(violation.restriction(), "user_administrator_rights");
    assert_eq!(
        violation.to_string(),
        "user lacks administrator rights: can_post_messages"
    );
    assert_eq!(PolicyViolation::NotNewlyCreated.missing_rights(), None);
}

struct Dynamic;

impl CandidateView for Dynamic {
    fn kind(&self) -> CandidateKind {
        CandidateKind::User
    }

    fn is_bot(&self) -> bool {
        true
    }

    fn is_premium(&self) -> bool {
        false
    }

    fn is_forum(&self) -> bool {
        false
    }

    fn has_username(&self) -> bool {
        false
    }

    fn is_newly_created(&self) -> bool {
        false
    }

    fn user_administrator_rights(&self) -> AdministratorRights {
        AdministratorRights::EMPTY
    }

    fn bot_administrator_rights(&self) -> Option<AdministratorRights> {
        None
    }
}

#[test]
fn works_through_trait_objects() {
    let view: &dyn CandidateView = &Dynamic;
    assert!(!view.is_deactivated());
    assert_eq!(
        non_bot_user().check_shared_dialog(view),
        Err(PolicyViolation::IsBotMismatch { required: false })
    );
}
