// [tests/mirror/libs/core/dict/slot_padding.test.rs]
/**
 * =================================================================
 * APARATO: SLOT PADDING AUDIT (V7.0 - PACKED SOVEREIGN)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-DICT
 * RESPONSABILIDAD: CERTIFICACIÓN DEL EMPAQUETADO DE 12 BYTES
 *
 * # Mathematical Proof (Sentinel Disjointness):
 * La reducción módulo 2^32 - 5 produce residuos en [0, 2^32 - 5); el
 * centinela 0xFFFFFFFF = 2^32 - 1 queda fuera del rango, luego una
 * ranura ocupada jamás es confundible con una vacía.
 * =================================================================
 */

use std::mem::{align_of, size_of};

use goldenclaw_core_dict::{SlotEntry, EMPTY_SENTINEL, REDUCTION_PRIME};

#[test]
fn slot_entry_is_packed_to_twelve_bytes() {
    println!("Sizeof SlotEntry {}", size_of::<SlotEntry>());
    println!("Sizeof u32 {}", size_of::<u32>());
    println!("Sizeof u64 {}", size_of::<u64>());

    assert_eq!(size_of::<SlotEntry>(), 12, "la ranura debe empaquetar u32 + u64 sin padding");
    assert_eq!(align_of::<SlotEntry>(), 1, "el empaquetado anula la alineación natural");
}

#[test]
fn sentinel_is_unreachable_by_reduction() {
    assert!(u64::from(EMPTY_SENTINEL) > REDUCTION_PRIME - 1);

    // Barrido de residuos extremos: ninguno alcanza el centinela.
    for key in [0u64, 1, REDUCTION_PRIME - 1, REDUCTION_PRIME, REDUCTION_PRIME + 1, u64::MAX] {
        assert_ne!((key % REDUCTION_PRIME) as u32, EMPTY_SENTINEL);
    }
}
