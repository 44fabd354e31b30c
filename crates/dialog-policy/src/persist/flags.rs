//! Bit packing of the boolean fields of each restriction family.

use crate::policy::{
    ChannelRestrictions, DialogVariant, GroupRestrictions, Restriction, UserRestrictions,
};
use crate::rights::AdministratorRights;

const USER_RESTRICT_IS_BOT: u32 = 1 << 0;
const USER_IS_BOT: u32 = 1 << 1;
const USER_RESTRICT_IS_PREMIUM: u32 = 1 << 2;
const USER_IS_PREMIUM: u32 = 1 << 3;
const USER_DEFINED: u32 = (1 << 4) - 1;

const GROUP_RESTRICT_IS_FORUM: u32 = 1 << 0;
const GROUP_IS_FORUM: u32 = 1 << 1;
const GROUP_BOT_IS_PARTICIPANT: u32 = 1 << 2;
const GROUP_RESTRICT_HAS_USERNAME: u32 = 1 << 3;
const GROUP_HAS_USERNAME: u32 = 1 << 4;
const GROUP_IS_CREATED: u32 = 1 << 5;
const GROUP_RESTRICT_USER_RIGHTS: u32 = 1 << 6;
const GROUP_RESTRICT_BOT_RIGHTS: u32 = 1 << 7;
const GROUP_DEFINED: u32 = (1 << 8) - 1;

const CHANNEL_RESTRICT_HAS_USERNAME: u32 = 1 << 0;
const CHANNEL_HAS_USERNAME: u32 = 1 << 1;
const CHANNEL_IS_CREATED: u32 = 1 << 2;
const CHANNEL_RESTRICT_USER_RIGHTS: u32 = 1 << 3;
const CHANNEL_RESTRICT_BOT_RIGHTS: u32 = 1 << 4;
const CHANNEL_DEFINED: u32 = (1 << 5) - 1;

/// Flag bits meaningful for `variant`.
pub(super) const fn defined(variant: DialogVariant) -> u32 {
    match variant {
        DialogVariant::User => USER_DEFINED,
        DialogVariant::Group => GROUP_DEFINED,
        DialogVariant::Channel => CHANNEL_DEFINED,
    }
}

const fn set(bits: u32, flag: u32, on: bool) -> u32 {
    if on { bits | flag } else { bits }
}

const fn has(bits: u32, flag: u32) -> bool {
    bits & flag != 0
}

pub(super) const fn pack_user(user: &UserRestrictions) -> u32 {
    let mut bits = set(0, USER_RESTRICT_IS_BOT, user.is_bot.restrict);
    bits = set(bits, USER_IS_BOT, user.is_bot.value);
    bits = set(bits, USER_RESTRICT_IS_PREMIUM, user.is_premium.restrict);
    set(bits, USER_IS_PREMIUM, user.is_premium.value)
}

pub(super) const fn unpack_user(bits: u32) -> UserRestrictions {
    UserRestrictions {
        is_bot: Restriction {
            restrict: has(bits, USER_RESTRICT_IS_BOT),
            value: has(bits, USER_IS_BOT),
        },
        is_premium: Restriction {
            restrict: has(bits, USER_RESTRICT_IS_PREMIUM),
            value: has(bits, USER_IS_PREMIUM),
        },
    }
}

pub(super) const fn pack_group(group: &GroupRestrictions) -> u32 {
    let mut bits = set(0, GROUP_RESTRICT_IS_FORUM, group.is_forum.restrict);
    bits = set(bits, GROUP_IS_FORUM, group.is_forum.value);
    bits = set(bits, GROUP_BOT_IS_PARTICIPANT, group.bot_is_participant);
    bits = set(bits, GROUP_RESTRICT_HAS_USERNAME, group.has_username.restrict);
    bits = set(bits, GROUP_HAS_USERNAME, group.has_username.value);
    bits = set(bits, GROUP_IS_CREATED, group.is_created);
    bits = set(
        bits,
        GROUP_RESTRICT_USER_RIGHTS,
        group.user_administrator_rights.restrict,
    );
    set(
        bits,
        GROUP_RESTRICT_BOT_RIGHTS,
        group.bot_administrator_rights.restrict,
    )
}

pub(super) const fn unpack_group(
    bits: u32,
    user_rights: AdministratorRights,
    bot_rights: AdministratorRights,
) -> GroupRestrictions {
    GroupRestrictions {
        is_forum: Restriction {
            restrict: has(bits, GROUP_RESTRICT_IS_FORUM),
            value: has(bits, GROUP_IS_FORUM),
        },
        bot_is_participant: has(bits, GROUP_BOT_IS_PARTICIPANT),
        has_username: Restriction {
            restrict: has(bits, GROUP_RESTRICT_HAS_USERNAME),
            value: has(bits, GROUP_HAS_USERNAME),
        },
        is_created: has(bits, GROUP_IS_CREATED),
        user_administrator_rights: Restriction {
            restrict: has(bits, GROUP_RESTRICT_USER_RIGHTS),
            value: user_rights,
        },
        bot_administrator_rights: Restriction {
            restrict: has(bits, GROUP_RESTRICT_BOT_RIGHTS),
            value: bot_rights,
        },
    }
}

pub(super) const fn pack_channel(channel: &ChannelRestrictions) -> u32 {
    let mut bits = set(0, CHANNEL_RESTRICT_HAS_USERNAME, channel.has_username.restrict);
    bits = set(bits, CHANNEL_HAS_USERNAME, channel.has_username.value);
    bits = set(bits, CHANNEL_IS_CREATED, channel.is_created);
    bits = set(
        bits,
        CHANNEL_RESTRICT_USER_RIGHTS,
        channel.user_administrator_rights.restrict,
    );
    set(
        bits,
        CHANNEL_RESTRICT_BOT_RIGHTS,
        channel.bot_administrator_rights.restrict,
    )
}

pub(super) const fn unpack_channel(
    bits: u32,
    user_rights: AdministratorRights,
    bot_rights: AdministratorRights,
) -> ChannelRestrictions {
    ChannelRestrictions {
        has_username: Restriction {
            restrict: has(bits, CHANNEL_RESTRICT_HAS_USERNAME),
            value: has(bits, CHANNEL_HAS_USERNAME),
        },
        is_created: has(bits, CHANNEL_IS_CREATED),
        user_administrator_rights: Restriction {
            restrict: has(bits, CHANNEL_RESTRICT_USER_RIGHTS),
            value: user_rights,
        },
        bot_administrator_rights: Restriction {
            restrict: has(bits, CHANNEL_RESTRICT_BOT_RIGHTS),
            value: bot_rights,
        },
    }
}
