// [tests/mirror/libs/core/dict/routing_partition.test.rs]
/**
 * =================================================================
 * APARATO: ROUTING PARTITION PROPERTIES (V7.1 - SHARD SOVEREIGN)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-DICT
 * RESPONSABILIDAD: PARTICIÓN TOTAL Y DISYUNCIÓN DE FRAGMENTOS
 *
 * # Mathematical Proof (Partition Uniqueness):
 * Para toda clave, la división euclidiana de mix(k) mod S_global entre
 * S_local produce exactamente un (peer, slot); el determinismo del
 * mezclador garantiza que dos derivaciones jamás divergen.
 * =================================================================
 */

use goldenclaw_core_dict::{murmur64, ShardGeometry};
use proptest::prelude::*;

proptest! {
    /// Propiedad universal: cada clave posee exactamente un destino y
    /// ese destino reconstruye la ranura global de la derivación.
    #[test]
    fn every_key_owns_exactly_one_destination(
        key in any::<u64>(),
        peer_exponent in 0u32..6,
        local_slot_count in 1u64..10_000,
    ) {
        let peer_count = 1usize << peer_exponent;
        let geometry = ShardGeometry::new(local_slot_count, peer_count);
        let route = geometry.route(key);

        prop_assert!(route.peer < peer_count);
        prop_assert!(route.local_slot < local_slot_count);
        prop_assert_eq!(
            route.peer as u64 * local_slot_count + route.local_slot,
            murmur64(key) % geometry.global_slot_count()
        );
    }

    /// Disyunción de fragmentos: la derivación es una función — la
    /// misma clave jamás rutea hacia dos pares distintos.
    #[test]
    fn shards_are_disjoint(key in any::<u64>(), local_slot_count in 1u64..10_000) {
        let geometry = ShardGeometry::new(local_slot_count, 8);
        let first = geometry.route(key);
        let second = geometry.route(key);

        prop_assert_eq!(first.peer, second.peer);
        prop_assert_eq!(first.local_slot, second.local_slot);
    }

    /// El mezclador es una biyección determinista: entradas iguales,
    /// salidas iguales; el barrido secuencial no degenera en un único
    /// fragmento.
    #[test]
    fn mixer_is_stable(key in any::<u64>()) {
        prop_assert_eq!(murmur64(key), murmur64(key));
    }
}

#[test]
fn sequential_keys_spread_across_peers() {
    let geometry = ShardGeometry::new(4096, 8);
    let mut peers_touched = [false; 8];

    for key in 0..4096u64 {
        peers_touched[geometry.route(key).peer] = true;
    }

    assert!(
        peers_touched.iter().all(|&touched| touched),
        "la enumeración secuencial debe alcanzar los 8 fragmentos"
    );
}
