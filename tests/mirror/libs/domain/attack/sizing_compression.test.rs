// [tests/mirror/libs/domain/attack/sizing_compression.test.rs]
/**
 * =================================================================
 * APARATO: SIZING & COMPRESSION AUDIT (V11.0 - CLAW SOVEREIGN)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-ATTACK
 * RESPONSABILIDAD: PLAN DE MEMORIA Y SELECCIÓN DEL FACTOR
 * =================================================================
 */

use goldenclaw_domain_attack::{plan_compression, plan_with_factor};
use goldenclaw_domain_models::directives::{
    AttackDirectives, DEFAULT_BATCH_FILL_RATIO, DEFAULT_MAX_RESULTS,
};

fn directives(bits_n: u64, peer_count: usize, memory_budget_gib: f64) -> AttackDirectives {
    AttackDirectives {
        bits_n,
        ciphertext_c0: 0,
        ciphertext_c1: 0,
        memory_budget_gib,
        peer_count,
        early_exit: false,
        batch_fill_ratio: DEFAULT_BATCH_FILL_RATIO,
        max_results: DEFAULT_MAX_RESULTS,
    }
}

#[test]
fn generous_budget_runs_uncompressed() {
    let plan = plan_compression(&directives(20, 4, 64.0));
    assert_eq!(plan.compress_factor, 0);
    assert_eq!(plan.round_count, 1);
}

#[test]
fn starved_budget_forces_compression() {
    let plan = plan_compression(&directives(20, 2, 1e-6));
    assert!(plan.compress_factor > 0, "un presupuesto de ~1KB exige rondas comprimidas");
    assert_eq!(plan.round_count, 1u64 << plan.compress_factor);
}

#[test]
fn compression_is_monotone_in_the_budget() {
    let roomy = plan_compression(&directives(22, 4, 64.0));
    let tight = plan_compression(&directives(22, 4, 1e-4));
    assert!(tight.compress_factor >= roomy.compress_factor);
}

#[test]
fn shard_partition_is_exact_for_every_factor() {
    let base = directives(18, 8, 8.0);
    for compress_factor in 0..4u32 {
        let plan = plan_with_factor(&base, compress_factor);
        assert_eq!(plan.global_slot_count, plan.local_slot_count * 8);
        assert!(plan.batch_capacity >= 1);

        // Invariante de carga: las inserciones de una ronda caben con
        // holgura estricta en la tabla global.
        let insertions_per_round = (1u64 << 18) >> compress_factor;
        assert!(insertions_per_round < plan.global_slot_count);
    }
}

#[test]
fn headroom_keeps_occupancy_under_ninety_percent() {
    let plan = plan_with_factor(&directives(20, 4, 64.0), 0);
    let worst_occupancy = (1u64 << 20) as f64 / plan.global_slot_count as f64;
    assert!(worst_occupancy <= 0.89, "ocupación máxima {worst_occupancy} fuera de rango");
}
