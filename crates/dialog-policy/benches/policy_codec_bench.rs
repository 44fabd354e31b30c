//! Benchmarks for policy persistence and validation.
//!
//! Run with: `cargo bench -p dialog-policy`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use dialog_policy::{
    AdministratorRights, CandidateSnapshot, ChannelRestrictions, GroupRestrictions, Policy,
    RequestId, Restriction, UserRestrictions,
};

fn sample_policies() -> Vec<(&'static str, Policy)> {
    let rights = AdministratorRights::MANAGE_CHAT
        | AdministratorRights::POST_MESSAGES
        | AdministratorRights::PIN_MESSAGES;
    vec![
        (
            "user",
            Policy::user(
                RequestId::new(17),
                UserRestrictions {
                    is_bot: Restriction::require(false),
                    is_premium: Restriction::require(true),
                },
            ),
        ),
        (
            "group",
            Policy::group(
                RequestId::new(40_000),
                GroupRestrictions {
                    is_forum: Restriction::require(true),
                    bot_is_participant: true,
                    has_username: Restriction::require(false),
                    is_created: false,
                    user_administrator_rights: Restriction::require(rights),
                    bot_administrator_rights: Restriction::require(AdministratorRights::MANAGE_CHAT),
                },
            ),
        ),
        (
            "channel",
            Policy::channel(
                RequestId::new(u32::MAX),
                ChannelRestrictions {
                    has_username: Restriction::require(true),
                    is_created: true,
                    user_administrator_rights: Restriction::require(rights),
                    bot_administrator_rights: Restriction::any(),
                },
            ),
        ),
    ]
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_encode");
    let mut buffer = Vec::with_capacity(32);

    for (name, policy) in sample_policies() {
        group.throughput(Throughput::Bytes(policy.encode_to_vec().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &policy, |b, policy| {
            b.iter(|| {
                buffer.clear();
                black_box(policy).encode_into(&mut buffer);
                black_box(buffer.len())
            });
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_decode");

    for (name, policy) in sample_policies() {
        let bytes = policy.encode_to_vec();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &bytes, |b, bytes| {
            b.iter(|| Policy::decode_from_slice(black_box(bytes)).map(|(policy, _)| policy));
        });
    }

    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_check");
    let candidate = CandidateSnapshot::supergroup()
        .with_forum(true)
        .with_user_rights(AdministratorRights::ALL_KNOWN)
        .with_bot_rights(AdministratorRights::MANAGE_CHAT);

    for (name, policy) in sample_policies() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &policy, |b, policy| {
            b.iter(|| black_box(policy).check_shared_dialog(black_box(&candidate)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_check);
criterion_main!(benches);
