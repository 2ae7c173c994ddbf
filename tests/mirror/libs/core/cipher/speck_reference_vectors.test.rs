// [tests/mirror/libs/core/cipher/speck_reference_vectors.test.rs]
/**
 * =================================================================
 * APARATO: SPECK REFERENCE VECTORS TEST (V4.0 - BIT-PERFECT GOLD)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CIPHER
 * RESPONSABILIDAD: CERTIFICACIÓN DE PARIDAD CON EL VECTOR OFICIAL
 *
 * # Mathematical Proof (Vector Authority):
 * El vector del Apéndice C del paper SPECK fija simultáneamente la
 * orientación de palabras, el orden de consumo de la clave y las 27
 * rondas ARX: una sola igualdad bit-perfecta certifica las tres.
 * =================================================================
 */

use goldenclaw_core_cipher::{decrypt, encrypt, key_schedule, ROUND_COUNT};

/// Vector oficial Speck64/128 (paper SPECK, Apéndice C).
const PAPER_KEY: [u32; 4] = [0x0302_0100, 0x0b0a_0908, 0x1312_1110, 0x1b1a_1918];
const PAPER_PLAINTEXT: [u32; 2] = [0x7475_432d, 0x3b72_6574];
const PAPER_CIPHERTEXT: [u32; 2] = [0x454e_028b, 0x8c6f_a548];

#[test]
fn certify_speck_reference_parity() {
    println!("\n🧠 [PROVING_GROUNDS]: Initiating SPECK-64/128 vector audit...");
    let mut fault_count = 0u32;

    // 1. FASE: AGENDA DE CLAVES (27 subclaves, primera = K[0])
    println!("   🧪 Phase 1: Key schedule geometry...");
    let round_keys = key_schedule(&PAPER_KEY);
    assert_eq!(round_keys.len(), ROUND_COUNT);
    if round_keys[0] != PAPER_KEY[0] {
        fault_count += 1;
        println!("      ❌ ERROR: la primera subclave no es K[0].");
    }

    // 2. FASE: CIFRADO BIT-PERFECTO
    println!("   🧪 Phase 2: Encrypt parity against the official vector...");
    if encrypt(PAPER_PLAINTEXT, &round_keys) == PAPER_CIPHERTEXT {
        println!("      ✅ Cifrado: OK.");
    } else {
        fault_count += 1;
        println!("      ❌ ERROR: el cifrado divergió del vector oficial.");
    }

    // 3. FASE: DESCIFRADO BIT-PERFECTO
    println!("   🧪 Phase 3: Decrypt parity against the official vector...");
    if decrypt(PAPER_CIPHERTEXT, &round_keys) == PAPER_PLAINTEXT {
        println!("      ✅ Descifrado: OK.");
    } else {
        fault_count += 1;
        println!("      ❌ ERROR: el descifrado divergió del vector oficial.");
    }

    // 4. FASE: INVOLUCIÓN SOBRE BLOQUES ARBITRARIOS
    println!("   🧪 Phase 4: Round involution sweep...");
    for seed in 0u64..512 {
        let block = [(seed.wrapping_mul(0x9e37_79b9)) as u32, (seed >> 1) as u32];
        if decrypt(encrypt(block, &round_keys), &round_keys) != block {
            fault_count += 1;
        }
    }

    println!("🏁 [INFORME]: SPECK audit concluded. Faults: {}", fault_count);
    assert_eq!(fault_count, 0, "La paridad SPECK-64/128 ha sido comprometida.");
}
