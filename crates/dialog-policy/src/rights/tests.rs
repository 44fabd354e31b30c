use super::*;
use std::str::FromStr;

#[test]
fn known_rights_occupy_consecutive_bits() {
    for (index, right) in KnownRight::ALL.into_iter().enumerate() {
        assert_eq!(right.as_rights().bits(), 1 << index, "{right}");
    }
    assert_eq!(
        AdministratorRights::ALL_KNOWN,
        KnownRight::ALL.into_iter().collect::<AdministratorRights>()
    );
}

#[test]
fn contains_is_a_superset_test() {
    let held = AdministratorRights::POST_MESSAGES
        | AdministratorRights::EDIT_MESSAGES
        | AdministratorRights::MANAGE_CHAT;

    assert!(held.contains(AdministratorRights::EMPTY));
    assert!(held.contains(AdministratorRights::POST_MESSAGES));
    assert!(held.contains(AdministratorRights::POST_MESSAGES | AdministratorRights::MANAGE_CHAT));
    assert!(!held.contains(AdministratorRights::PIN_MESSAGES));
    assert!(!AdministratorRights::EMPTY.contains(AdministratorRights::MANAGE_CHAT));
}

#[test]
fn missing_from_lists_only_absent_rights() {
    let required = AdministratorRights::POST_MESSAGES | AdministratorRights::INVITE_USERS;
    let held = AdministratorRights::INVITE_USERS | AdministratorRights::CHANGE_INFO;

    assert_eq!(required.missing_from(held), AdministratorRights::POST_MESSAGES);
    assert!(required.missing_from(required | held).is_empty());
    assert_eq!(required - held, required.missing_from(held));
}

#[test]
fn iter_known_skips_unknown_bits_in_order() {
    let rights = AdministratorRights::from_bits(
        AdministratorRights::DELETE_STORIES.bits() | AdministratorRights::CHANGE_INFO.bits() | 1 << 30,
    );

    let collected: Vec<_> = rights.iter_known().collect();
    assert_eq!(collected, vec![KnownRight::ChangeInfo, KnownRight::DeleteStories]);
    assert_eq!(rights.iter_known().len(), 2);
    assert_eq!(rights.unknown_bits(), 1 << 30);
    assert_eq!(
        rights.without_unknown_bits(),
        AdministratorRights::CHANGE_INFO | AdministratorRights::DELETE_STORIES
    );
}

#[test]
fn display_lists_names_and_unknown_remainder() {
    assert_eq!(AdministratorRights::EMPTY.to_string(), "none");
    assert_eq!(
        (AdministratorRights::POST_MESSAGES | AdministratorRights::MANAGE_CHAT).to_string(),
        "can_manage_chat | can_post_messages"
    );
    assert_eq!(
        AdministratorRights::from_bits(1 << 20).to_string(),
        "unknown(0x100000)"
    );
}

#[test]
fn names_parse_back_into_rights() {
    for right in KnownRight::ALL {
        assert_eq!(KnownRight::from_str(right.name()), Ok(right));
    }

    let err = KnownRight::from_str("can_fly").expect_err("unknown name");
    assert_eq!(err.identifier(), "can_fly");
    assert!(err.to_string().contains("can_fly"));
}
