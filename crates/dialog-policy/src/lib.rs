#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Restriction policies for interactive "share a dialog" requests.
//!
//! A bot can ask a user to pick a user, group or channel and share it back.
//! The request carries a [`Policy`] describing which picks are acceptable:
//! whether a user must be a bot or hold a premium subscription, whether a group
//! must be a forum, have a public username or have been created for the
//! request, and which administrator rights the user and the bot must hold.
//!
//! The crate builds policies from the two external request shapes in
//! [`wire`], stores them in a compact versioned binary form, and validates a
//! candidate dialog against them through the [`CandidateView`] trait.
//!
//! # Examples
//!
//! Build a policy from the client button shape and validate a candidate.
//!
//! ```
//! use dialog_policy::wire::{ClientButtonType, RequestUserButton};
//! use dialog_policy::{CandidateSnapshot, Policy, PolicyViolation};
//!
//! let policy = Policy::from_client(ClientButtonType::RequestUser(RequestUserButton {
//!     id: 4,
//!     restrict_user_is_bot: true,
//!     user_is_bot: false,
//!     ..RequestUserButton::default()
//! }));
//!
//! assert_eq!(policy.button_id(), 4);
//! assert!(policy.check_shared_dialog(&CandidateSnapshot::user()).is_ok());
//! assert_eq!(
//!     policy.check_shared_dialog(&CandidateSnapshot::bot()),
//!     Err(PolicyViolation::IsBotMismatch { required: false })
//! );
//! ```
//!
//! Persist it and read it back.
//!
//! ```
//! use dialog_policy::{CorruptEncoding, Policy};
//!
//! let policy = Policy::default();
//! let mut stored = Vec::new();
//! policy.store(&mut stored)?;
//! assert_eq!(Policy::parse(&mut stored.as_slice())?, policy);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod persist;
mod policy;
mod rights;
mod trace;
mod validate;
mod varint;

pub mod wire;

pub use config::{CheckOptions, Unverifiable};
pub use error::{CorruptEncoding, Error};
pub use persist::FORMAT_VERSION;
pub use policy::{
    ChannelRestrictions, DialogVariant, GroupRestrictions, Policy, PolicyKind, RequestId,
    Restriction, UserRestrictions,
};
pub use rights::{AdministratorRights, KnownRight, KnownRightsIter, ParseKnownRightError};
pub use validate::{CandidateKind, CandidateSnapshot, CandidateView, PolicyViolation};
