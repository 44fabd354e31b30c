#![no_main]

//! Fuzz target for the persisted policy form.
//!
//! Arbitrary bytes must either decode to a policy that survives a re-encode,
//! or be rejected without panicking.

use dialog_policy::Policy;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((policy, _)) = Policy::decode_from_slice(data) {
        let reencoded = policy.encode_to_vec();
        let (again, tail) = Policy::decode_from_slice(&reencoded).expect("re-encoded policy decodes");
        assert!(tail.is_empty());
        assert_eq!(again, policy);
    }
});
