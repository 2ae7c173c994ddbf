// [tests/mirror/libs/domain/attack/oracle_consistency.test.rs]
/**
 * =================================================================
 * APARATO: ORACLE CONSISTENCY AUDIT (V11.0 - CLAW SOVEREIGN)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-ATTACK
 * RESPONSABILIDAD: COHERENCIA f/g CONTRA EL CIFRADOR Y FILTRO DORADO
 * =================================================================
 */

use goldenclaw_core_cipher::{decrypt, encrypt, key_schedule};
use goldenclaw_domain_attack::ClawOracle;

fn spread(key_half: u64) -> [u32; 4] {
    [(key_half & 0xffff_ffff) as u32, (key_half >> 32) as u32, 0, 0]
}

fn pack(block: [u32; 2]) -> u64 {
    u64::from(block[0]) | (u64::from(block[1]) << 32)
}

/// Doble cifrado de los textos planos fijos con las mitades dadas.
fn seal_ciphertexts(key_half_one: u64, key_half_two: u64) -> (u64, u64) {
    let inner = key_schedule(&spread(key_half_one));
    let outer = key_schedule(&spread(key_half_two));
    (
        pack(encrypt(encrypt(ClawOracle::FIXED_PLAINTEXTS[0], &inner), &outer)),
        pack(encrypt(encrypt(ClawOracle::FIXED_PLAINTEXTS[1], &inner), &outer)),
    )
}

#[test]
fn certify_oracle_against_the_cipher() {
    println!("\n🧠 [PROVING_GROUNDS]: Initiating oracle consistency audit...");
    let bits_n = 12u64;
    let mask = (1u64 << bits_n) - 1;
    let (c0, c1) = seal_ciphertexts(0x0abc, 0x0def);
    let oracle = ClawOracle::new(bits_n, c0, c1);

    // 1. FASE: f CONTRA EL CIFRADOR DESNUDO
    println!("   🧪 Phase 1: f(x) parity against raw encryption...");
    for key_half in [0u64, 1, 0x0abc, 0x07ff, mask] {
        let round_keys = key_schedule(&spread(key_half));
        let expected = pack(encrypt([0, 0], &round_keys)) & mask;
        assert_eq!(oracle.f(key_half), expected);
    }

    // 2. FASE: g CONTRA EL DESCIFRADOR DESNUDO
    println!("   🧪 Phase 2: g(z) parity against raw decryption...");
    let c0_block = [(c0 & 0xffff_ffff) as u32, (c0 >> 32) as u32];
    for key_half in [0u64, 0x0def, mask] {
        let round_keys = key_schedule(&spread(key_half));
        let expected = pack(decrypt(c0_block, &round_keys)) & mask;
        assert_eq!(oracle.g(key_half), expected);
    }

    // 3. FASE: COLISIÓN EN EL PUNTO MEDIO DEL PAR SEMBRADO
    println!("   🧪 Phase 3: middle collision of the seeded pair...");
    assert_eq!(oracle.f(0x0abc), oracle.g(0x0def));
    assert!(oracle.is_good_pair(0x0abc, 0x0def));

    // 4. FASE: EL SEGUNDO PAR FILTRA CANDIDATOS ESPURIOS
    println!("   🧪 Phase 4: spurious candidates die at the golden filter...");
    for wrong_inner in [0x0abd_u64, 0x0001, 0x0fff] {
        assert!(!oracle.is_good_pair(wrong_inner, 0x0def));
    }

    println!("🏁 [INFORME]: Oracle audit concluded. Verdict: GOLD_MASTER");
}
