//! Property-based tests for worker and shard sizing.

use super::policy::SizingPolicy;
use super::probe::{StaticProbe, SystemResourceSnapshot};
use super::sizer::ResourceSizer;
use proptest::prelude::*;

fn snapshot(cpu_count: usize, total_memory_gib: f64) -> SystemResourceSnapshot {
    SystemResourceSnapshot {
        cpu_count,
        total_memory_gib,
        platform_name: "linux".to_string(),
    }
}

fn default_sizer() -> ResourceSizer<StaticProbe> {
    ResourceSizer::with_probe(StaticProbe::new(1, 0, "linux"), SizingPolicy::default()).unwrap()
}

// Strategy for valid policies (min <= max, positive ratios)
fn policy_strategy() -> impl Strategy<Value = SizingPolicy> {
    (1u32..=64, 0u32..=64, 0.05f64..=2.0, 0.25f64..=8.0, 0.05f64..=2.0).prop_map(
        |(min, extra, utilization, per_worker, shard_ratio)| SizingPolicy {
            utilization_fraction: utilization,
            memory_per_worker_gib: per_worker,
            min_workers: min,
            max_workers: min + extra,
            shard_ratio,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // Default policy keeps workers within [2, 16]
    #[test]
    fn workers_within_default_bounds(cpus in 1usize..=1024, memory in 0.0f64..=4096.0) {
        let workers = default_sizer().optimal_workers_for(&snapshot(cpus, memory));
        prop_assert!((2..=16).contains(&workers));
    }

    // Any valid policy keeps workers within its own bounds
    #[test]
    fn workers_within_policy_bounds(
        policy in policy_strategy(),
        cpus in 1usize..=512,
        memory in 0.0f64..=2048.0
    ) {
        let sizer = ResourceSizer::with_probe(StaticProbe::new(1, 0, "linux"), policy).unwrap();
        let workers = sizer.optimal_workers_for(&snapshot(cpus, memory));
        prop_assert!(workers >= policy.min_workers);
        prop_assert!(workers <= policy.max_workers);
    }

    // Same inputs, same answer
    #[test]
    fn workers_deterministic(cpus in 1usize..=256, memory in 0.0f64..=1024.0) {
        let sizer = default_sizer();
        let snap = snapshot(cpus, memory);
        prop_assert_eq!(sizer.optimal_workers_for(&snap), sizer.optimal_workers_for(&snap));
    }

    // More memory never means fewer workers
    #[test]
    fn workers_monotonic_in_memory(cpus in 1usize..=128, memory in 0.0f64..=512.0, extra in 0.0f64..=512.0) {
        let sizer = default_sizer();
        prop_assert!(
            sizer.optimal_workers_for(&snapshot(cpus, memory))
                <= sizer.optimal_workers_for(&snapshot(cpus, memory + extra))
        );
    }

    // Shard count never drops below 1
    #[test]
    fn shards_at_least_one(policy in policy_strategy(), workers in 0u32..=10_000) {
        let sizer = ResourceSizer::with_probe(StaticProbe::new(1, 0, "linux"), policy).unwrap();
        prop_assert!(sizer.optimal_shards_for(workers) >= 1);
    }

    // Default shard ratio halves the workers (rounding down)
    #[test]
    fn default_shards_half_workers(workers in 2u32..=10_000) {
        prop_assert_eq!(default_sizer().optimal_shards_for(workers), workers / 2);
    }
}
