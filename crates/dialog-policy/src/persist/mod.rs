//! Compact binary form of a [`Policy`].
//!
//! ```text
//! version    u8      FORMAT_VERSION
//! tag        u8      DialogVariant::tag
//! request_id varint
//! flags      varint  family booleans, one bit each
//! user_rights varint  group and channel only
//! bot_rights  varint  group and channel only
//! ```
//!
//! Only the active family is written. Rights masks are stored verbatim,
//! unknown bits included, so a mask survives a round trip through a release
//! that does not know every right.

mod flags;

use std::io::{self, Read, Write};

use crate::error::CorruptEncoding;
use crate::policy::{DialogVariant, Policy, PolicyKind, RequestId};
use crate::rights::AdministratorRights;
use crate::trace::{trace_decode_failed, trace_policy_parsed, trace_policy_stored};
use crate::varint::{encode_varint_u32_to_vec, read_varint_u32};

/// Version byte written at the start of every persisted policy.
pub const FORMAT_VERSION: u8 = 1;

impl Policy {
    /// Appends the persisted form to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(FORMAT_VERSION);
        out.push(self.variant().tag());
        encode_varint_u32_to_vec(self.button_id(), out);

        let (bits, rights) = match self.kind() {
            PolicyKind::User(user) => (flags::pack_user(user), None),
            PolicyKind::Group(group) => (
                flags::pack_group(group),
                Some((
                    group.user_administrator_rights.value,
                    group.bot_administrator_rights.value,
                )),
            ),
            PolicyKind::Channel(channel) => (
                flags::pack_channel(channel),
                Some((
                    channel.user_administrator_rights.value,
                    channel.bot_administrator_rights.value,
                )),
            ),
        };
        encode_varint_u32_to_vec(bits, out);
        if let Some((user_rights, bot_rights)) = rights {
            encode_varint_u32_to_vec(user_rights.bits(), out);
            encode_varint_u32_to_vec(bot_rights.bits(), out);
        }
        trace_policy_stored(self, bits);
    }

    /// Returns the persisted form as a new buffer.
    #[must_use]
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16);
        self.encode_into(&mut out);
        out
    }

    /// Writes the persisted form to `writer`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `writer`.
    pub fn store<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.encode_to_vec())
    }

    /// Reads one policy written by [`Self::store`].
    ///
    /// Consumes exactly the bytes of one policy; anything after it is left in
    /// `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`CorruptEncoding`] when the bytes are truncated, carry an
    /// unknown version, tag or flag bit, or the reader fails.
    pub fn parse<R: Read + ?Sized>(reader: &mut R) -> Result<Self, CorruptEncoding> {
        match read_policy(reader) {
            Ok(policy) => {
                trace_policy_parsed(&policy);
                Ok(policy)
            }
            Err(error) => {
                trace_decode_failed(&error);
                Err(error)
            }
        }
    }

    /// Decodes a policy from the front of `bytes` and returns the remainder.
    ///
    /// # Errors
    ///
    /// See [`Self::parse`].
    pub fn decode_from_slice(bytes: &[u8]) -> Result<(Self, &[u8]), CorruptEncoding> {
        let mut rest = bytes;
        let policy = Self::decode_from_slice_mut(&mut rest)?;
        Ok((policy, rest))
    }

    /// Decodes a policy from the front of `bytes`, advancing the slice past it.
    ///
    /// On failure the slice position is unspecified.
    ///
    /// # Errors
    ///
    /// See [`Self::parse`].
    pub fn decode_from_slice_mut(bytes: &mut &[u8]) -> Result<Self, CorruptEncoding> {
        Self::parse(bytes)
    }
}

fn read_u8<R: Read + ?Sized>(reader: &mut R) -> io::Result<u8> {
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte)?;
    Ok(byte[0])
}

fn read_rights<R: Read + ?Sized>(reader: &mut R) -> io::Result<AdministratorRights> {
    read_varint_u32(reader).map(AdministratorRights::from_bits)
}

fn read_policy<R: Read + ?Sized>(reader: &mut R) -> Result<Policy, CorruptEncoding> {
    let version = read_u8(reader)?;
    if version != FORMAT_VERSION {
        return Err(CorruptEncoding::UnsupportedVersion(version));
    }

    let tag = read_u8(reader)?;
    let variant = DialogVariant::from_tag(tag).ok_or(CorruptEncoding::UnknownVariant(tag))?;
    let request_id = RequestId::new(read_varint_u32(reader)?);
    let bits = read_varint_u32(reader)?;

    let unknown = bits & !flags::defined(variant);
    if unknown != 0 {
        return Err(CorruptEncoding::UnknownFlags {
            variant,
            bits: unknown,
        });
    }

    let kind = match variant {
        DialogVariant::User => PolicyKind::User(flags::unpack_user(bits)),
        DialogVariant::Group => {
            let user_rights = read_rights(reader)?;
            let bot_rights = read_rights(reader)?;
            PolicyKind::Group(flags::unpack_group(bits, user_rights, bot_rights))
        }
        DialogVariant::Channel => {
            let user_rights = read_rights(reader)?;
            let bot_rights = read_rights(reader)?;
            PolicyKind::Channel(flags::unpack_channel(bits, user_rights, bot_rights))
        }
    };
    Ok(Policy::new(request_id, kind))
}
