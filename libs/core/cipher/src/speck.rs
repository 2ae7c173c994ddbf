// [libs/core/cipher/src/speck.rs]
/*!
 * =================================================================
 * APARATO: SPECK-64/128 ROUND ENGINE (V4.0 - BIT-PERFECT GOLD)
 * CLASIFICACIÓN: CORE CIPHER (ESTRATO L1)
 * RESPONSABILIDAD: AGENDA DE CLAVES Y RONDAS ARX DE 27 CICLOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ARX DETERMINISM: Rondas Add-Rotate-Xor con semántica envolvente
 *    explícita ('wrapping_add' / 'wrapping_sub'), inmunes a los panics
 *    de overflow del perfil de depuración.
 * 2. WORD ORIENTATION: Paridad exacta con la implementación de
 *    referencia: la palabra 0 del bloque es la mitad baja y K[0] es la
 *    primera palabra de clave consumida por la agenda.
 * 3. ZERO HEAP: Buffers de ronda en pila, aptos para el Hot-Loop del
 *    oráculo de colisión sin presión sobre el alocador.
 * =================================================================
 */

/// Número de rondas del SPECK-64/128 (bloque de 64 bits, clave de 128).
pub const ROUND_COUNT: usize = 27;

/// Agenda de claves expandida: una subclave de 32 bits por ronda.
pub type RoundKeys = [u32; ROUND_COUNT];

/// Ronda de cifrado ER: `x = rotr(x,8) + y ^ k`, `y = rotl(y,3) ^ x`.
#[inline(always)]
fn encryption_round(x: &mut u32, y: &mut u32, round_key: u32) {
    *x = x.rotate_right(8).wrapping_add(*y) ^ round_key;
    *y = y.rotate_left(3) ^ *x;
}

/// Ronda de descifrado DR: inversa algebraica exacta de ER.
#[inline(always)]
fn decryption_round(x: &mut u32, y: &mut u32, round_key: u32) {
    *y = (*y ^ *x).rotate_right(3);
    *x = ((*x ^ round_key).wrapping_sub(*y)).rotate_left(8);
}

/**
 * Expande una clave de 128 bits en las 27 subclaves de ronda.
 *
 * # Logic:
 * La agenda reutiliza la propia ronda ER sobre las palabras de clave
 * (B, C, D) contra el acumulador A, usando el índice de ronda como
 * subclave intermedia. `key[0]` es la palabra baja de la clave.
 */
#[must_use]
pub fn key_schedule(key: &[u32; 4]) -> RoundKeys {
    let mut round_keys = [0u32; ROUND_COUNT];
    let mut accumulator_a = key[0];
    let mut word_b = key[1];
    let mut word_c = key[2];
    let mut word_d = key[3];

    let mut round_index = 0usize;
    while round_index < ROUND_COUNT {
        round_keys[round_index] = accumulator_a;
        encryption_round(&mut word_b, &mut accumulator_a, round_index as u32);
        round_index += 1;

        round_keys[round_index] = accumulator_a;
        encryption_round(&mut word_c, &mut accumulator_a, round_index as u32);
        round_index += 1;

        round_keys[round_index] = accumulator_a;
        encryption_round(&mut word_d, &mut accumulator_a, round_index as u32);
        round_index += 1;
    }

    round_keys
}

/**
 * Cifra un bloque de 64 bits (dos palabras, palabra 0 = mitad baja).
 *
 * # Performance:
 * 27 rondas ARX sin ramas: el compilador vectoriza el cuerpo completo
 * dentro de la ventana de registros de propósito general.
 */
#[must_use]
pub fn encrypt(plaintext: [u32; 2], round_keys: &RoundKeys) -> [u32; 2] {
    let mut low_word = plaintext[0];
    let mut high_word = plaintext[1];

    for round_key in round_keys.iter() {
        encryption_round(&mut high_word, &mut low_word, *round_key);
    }

    [low_word, high_word]
}

/**
 * Descifra un bloque de 64 bits aplicando las 27 rondas DR en orden
 * inverso. Involución exacta de `encrypt` para la misma agenda.
 */
#[must_use]
pub fn decrypt(ciphertext: [u32; 2], round_keys: &RoundKeys) -> [u32; 2] {
    let mut low_word = ciphertext[0];
    let mut high_word = ciphertext[1];

    for round_key in round_keys.iter().rev() {
        decryption_round(&mut high_word, &mut low_word, *round_key);
    }

    [low_word, high_word]
}
