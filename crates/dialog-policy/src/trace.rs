//! Structured tracing for policy construction, persistence and validation.
//!
//! Every function is compiled behind the `tracing` feature and collapses to an
//! inline no-op when the feature is disabled, so call sites never need their
//! own `cfg` guards.

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::error::CorruptEncoding;
use crate::policy::{DialogVariant, Policy};
use crate::validate::PolicyViolation;

#[cfg(feature = "tracing")]
const BUILD_TARGET: &str = "dialog_policy::build";
#[cfg(feature = "tracing")]
const PERSIST_TARGET: &str = "dialog_policy::persist";
#[cfg(feature = "tracing")]
const CHECK_TARGET: &str = "dialog_policy::check";

/// A policy was built from an inbound wire shape.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_policy_built(source: &'static str, policy: &Policy) {
    trace!(
        target: BUILD_TARGET,
        source = source,
        variant = %policy.variant(),
        request_id = policy.button_id(),
        "policy built"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_policy_built(_source: &'static str, _policy: &Policy) {}

/// An inbound field that the resolved variant does not carry was discarded.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_field_dropped(source: &'static str, variant: DialogVariant, field: &'static str) {
    debug!(
        target: BUILD_TARGET,
        source = source,
        variant = %variant,
        field = field,
        "dropping field not applicable to variant"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_field_dropped(_source: &'static str, _variant: DialogVariant, _field: &'static str) {
}

/// A policy was written to a byte sink.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_policy_stored(policy: &Policy, flags: u32) {
    trace!(
        target: PERSIST_TARGET,
        variant = %policy.variant(),
        request_id = policy.button_id(),
        flags = flags,
        "policy stored"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_policy_stored(_policy: &Policy, _flags: u32) {}

/// A policy was read back from a byte source.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_policy_parsed(policy: &Policy) {
    trace!(
        target: PERSIST_TARGET,
        variant = %policy.variant(),
        request_id = policy.button_id(),
        "policy parsed"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_policy_parsed(_policy: &Policy) {}

/// Persisted bytes could not be decoded.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_decode_failed(error: &CorruptEncoding) {
    debug!(target: PERSIST_TARGET, error = %error, "persisted policy is corrupt");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_decode_failed(_error: &CorruptEncoding) {}

/// A candidate satisfied every applicable restriction.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_check_passed(policy: &Policy) {
    trace!(
        target: CHECK_TARGET,
        variant = %policy.variant(),
        request_id = policy.button_id(),
        "shared dialog accepted"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_check_passed(_policy: &Policy) {}

/// A candidate was rejected.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_check_failed(policy: &Policy, violation: &PolicyViolation) {
    debug!(
        target: CHECK_TARGET,
        variant = %policy.variant(),
        request_id = policy.button_id(),
        violation = %violation,
        "shared dialog rejected"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_check_failed(_policy: &Policy, _violation: &PolicyViolation) {}

/// A restriction could not be verified from the candidate view and was left to
/// the caller.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_check_deferred(policy: &Policy, restriction: &'static str) {
    debug!(
        target: CHECK_TARGET,
        variant = %policy.variant(),
        request_id = policy.button_id(),
        restriction = restriction,
        "restriction not verifiable here; deferred to caller"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_check_deferred(_policy: &Policy, _restriction: &'static str) {}
