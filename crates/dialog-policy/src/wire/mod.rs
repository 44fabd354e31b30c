//! Translation between [`Policy`](crate::Policy) and the two external request
//! descriptors.
//!
//! The [`client`] shape is what an application hands over when it attaches a
//! request button to a keyboard. The [`network`] shape is the tagged union
//! exchanged with the server. The two schemas evolve independently of each
//! other and of the policy model, so each has its own value types and its own
//! `from_*`/`to_*` pair on [`Policy`](crate::Policy). Neither shape shares a
//! field or a bit layout with the policy.
//!
//! Inbound conversion is total. A field that the resolved variant cannot
//! carry, such as a forum restriction on a chat request that turns out to be a
//! channel request, is dropped and reported through the `tracing` feature.

pub mod client;
pub mod network;

pub use client::{ChatAdministratorRights, ClientButtonType, RequestChatButton, RequestUserButton};
pub use network::{
    ChatAdminRights, RequestPeerType, RequestPeerTypeBroadcast, RequestPeerTypeChat,
    RequestPeerTypeUser,
};
