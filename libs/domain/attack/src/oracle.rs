// [libs/domain/attack/src/oracle.rs]
/*!
 * =================================================================
 * APARATO: MITM ORACLE (V11.0 - CLAW SOVEREIGN)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: FUNCIONES PURAS f, g Y VALIDACIÓN DE PAR DORADO
 *
 * # Mathematical Proof (Claw Relation):
 * Sea C = E_{k2}(E_{k1}(P)) el doble cifrado. Definiendo
 * f(x) = E_x(P0) y g(z) = D_z(C0), toda solución (k1, k2) satisface
 * f(k1) == g(k2): la colisión en el punto medio. El segundo par
 * (P1, C1) filtra las colisiones accidentales de la máscara de n bits
 * y las de la clave reducida del diccionario.
 * =================================================================
 */

use goldenclaw_core_cipher::{decrypt, encrypt, key_schedule};

/// Oráculo puro del ataque: fija los dos pares texto plano/cifrado y la
/// máscara de enumeración, y expone f, g y la validación dorada.
#[derive(Debug, Clone, Copy)]
pub struct ClawOracle {
    /// Pares de texto plano fijos del protocolo.
    plaintext_pair: [[u32; 2]; 2],
    /// Pares de texto cifrado suministrados por las directivas.
    ciphertext_pair: [[u32; 2]; 2],
    /// Máscara de la mitad de clave: `2^n - 1`.
    keyspace_mask: u64,
}

/// Despliega una mitad de clave de 64 bits en las cuatro palabras de
/// clave SPECK (las dos superiores quedan en cero).
#[inline(always)]
fn spread_key_half(key_half: u64) -> [u32; 4] {
    [(key_half & 0xffff_ffff) as u32, (key_half >> 32) as u32, 0, 0]
}

/// Empaqueta un bloque de dos palabras en u64 (palabra 0 = mitad baja).
#[inline(always)]
fn pack_block(block: [u32; 2]) -> u64 {
    u64::from(block[0]) | (u64::from(block[1]) << 32)
}

impl ClawOracle {
    /// Textos planos fijos del protocolo: el bloque nulo y su complemento.
    pub const FIXED_PLAINTEXTS: [[u32; 2]; 2] = [[0, 0], [0xffff_ffff, 0xffff_ffff]];

    /// Construye el oráculo desde los textos cifrados de las directivas
    /// (palabra baja en los 32 bits inferiores de cada u64).
    #[must_use]
    pub fn new(bits_n: u64, ciphertext_c0: u64, ciphertext_c1: u64) -> Self {
        Self {
            plaintext_pair: Self::FIXED_PLAINTEXTS,
            ciphertext_pair: [
                [(ciphertext_c0 & 0xffff_ffff) as u32, (ciphertext_c0 >> 32) as u32],
                [(ciphertext_c1 & 0xffff_ffff) as u32, (ciphertext_c1 >> 32) as u32],
            ],
            keyspace_mask: (1u64 << bits_n) - 1,
        }
    }

    /// Máscara de enumeración del oráculo.
    #[must_use]
    pub fn keyspace_mask(&self) -> u64 {
        self.keyspace_mask
    }

    /**
     * f : {0,1}^n → {0,1}^n. Cifrado SPECK-64/128 de P0 con la mitad de
     * clave `key_half`, restringido a los n bits bajos.
     */
    #[inline]
    #[must_use]
    pub fn f(&self, key_half: u64) -> u64 {
        debug_assert_eq!(key_half & self.keyspace_mask, key_half, "clave fuera de máscara");
        let round_keys = key_schedule(&spread_key_half(key_half));
        pack_block(encrypt(self.plaintext_pair[0], &round_keys)) & self.keyspace_mask
    }

    /**
     * g : {0,1}^n → {0,1}^n. Descifrado SPECK-64/128 de C0 con la mitad
     * de clave `key_half`, restringido a los n bits bajos.
     */
    #[inline]
    #[must_use]
    pub fn g(&self, key_half: u64) -> u64 {
        debug_assert_eq!(key_half & self.keyspace_mask, key_half, "clave fuera de máscara");
        let round_keys = key_schedule(&spread_key_half(key_half));
        pack_block(decrypt(self.ciphertext_pair[0], &round_keys)) & self.keyspace_mask
    }

    /**
     * Veredicto dorado: ¿E_{k2}(E_{k1}(P1)) == C1?
     *
     * Filtra tanto las colisiones accidentales de la máscara de n bits
     * como los falsos positivos de la clave reducida del diccionario.
     */
    #[must_use]
    pub fn is_good_pair(&self, key_half_one: u64, key_half_two: u64) -> bool {
        let round_keys_inner = key_schedule(&spread_key_half(key_half_one));
        let round_keys_outer = key_schedule(&spread_key_half(key_half_two));

        let middle_block = encrypt(self.plaintext_pair[1], &round_keys_inner);
        let final_block = encrypt(middle_block, &round_keys_outer);

        final_block == self.ciphertext_pair[1]
    }
}
