//! Administrator rights bitfield shared by the two rights restrictions.
//!
//! A policy may require that the requesting user, or a bot that would be
//! promoted in the shared chat, hold a particular set of administrator rights.
//! Both requirements use the same [`AdministratorRights`] representation but
//! are stored as independently named restrictions on the policy.
//!
//! The bit layout is internal to this crate. Each wire shape translates the
//! mask into its own representation (named booleans for the client shape, a
//! flags word with a different layout for the network shape), so neither
//! external schema depends on these bit positions.

mod flags;
mod iter;
mod known;

pub use flags::AdministratorRights;
pub use iter::KnownRightsIter;
pub use known::{KnownRight, ParseKnownRightError};

#[cfg(test)]
mod tests;
