//! JSON representation of policies and options.

#![cfg(feature = "serde")]

use dialog_policy::wire::{ClientButtonType, RequestPeerType, RequestPeerTypeUser};
use dialog_policy::{
    AdministratorRights, CheckOptions, GroupRestrictions, Policy, RequestId, Restriction,
    Unverifiable,
};
use serde_json::json;

#[test]
fn policy_serializes_with_variant_tag() {
    let policy = Policy::group(
        RequestId::new(12),
        GroupRestrictions {
            is_forum: Restriction::require(true),
            user_administrator_rights: Restriction::require(
                AdministratorRights::MANAGE_CHAT | AdministratorRights::PIN_MESSAGES,
            ),
            ..GroupRestrictions::default()
        },
    );

    let value = serde_json::to_value(policy).unwrap();
    assert_eq!(value["request_id"], json!(12));
    assert_eq!(value["kind"]["variant"], json!("group"));
    assert_eq!(value["kind"]["is_forum"], json!({ "restrict": true, "value": true }));
    assert_eq!(
        value["kind"]["user_administrator_rights"]["value"],
        json!(0b1000_0001)
    );

    let back: Policy = serde_json::from_value(value).unwrap();
    assert_eq!(back, policy);
}

#[test]
fn check_options_default_missing_fields() {
    let options: CheckOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, CheckOptions::default());
    assert_eq!(options.unverifiable_bot_rights, Unverifiable::Reject);

    let options: CheckOptions =
        serde_json::from_str(r#"{ "unverifiable_bot_rights": "skip" }"#).unwrap();
    assert_eq!(options, CheckOptions::lenient());
}

#[test]
fn client_button_parses_from_json() {
    let button: ClientButtonType = serde_json::from_str(
        r#"{
            "@type": "requestChat",
            "id": 5,
            "chat_is_channel": true,
            "user_administrator_rights": { "can_post_messages": true }
        }"#,
    )
    .unwrap();
    let policy = Policy::from_client(button);
    let channel = policy.as_channel().unwrap();
    assert_eq!(policy.button_id(), 5);
    assert_eq!(
        channel.user_administrator_rights,
        Restriction::require(AdministratorRights::MANAGE_CHAT | AdministratorRights::POST_MESSAGES)
    );
}

#[test]
fn network_shape_round_trips_through_json() {
    let peer = RequestPeerType::User(RequestPeerTypeUser {
        bot: Some(false),
        premium: None,
    });
    let text = serde_json::to_string(&peer).unwrap();
    let back: RequestPeerType = serde_json::from_str(&text).unwrap();
    assert_eq!(back, peer);
}
