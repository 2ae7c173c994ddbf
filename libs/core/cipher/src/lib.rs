// [libs/core/cipher/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: SPECK CIPHER MASTER HUB (V4.0 - BIT-PERFECT GOLD)
 * CLASIFICACIÓN: CORE CIPHER (ESTRATO L1)
 * RESPONSABILIDAD: EXPORTACIÓN NOMINAL DE PRIMITIVAS SPECK-64/128
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. LEAF PURITY: Crate hoja sin dependencias. Toda la aritmética es
 *    envolvente (wrapping) y determinista entre arquitecturas.
 * 2. NOMINAL EXPORTS: Exportación plana de 'key_schedule', 'encrypt'
 *    y 'decrypt' para sincronía con el oráculo del estrato L2.
 * 3. ZERO ABBREVIATIONS: Nomenclatura nominal absoluta en rondas y
 *    palabras de bloque.
 * 4. HYGIENE: Rustdoc completo y certificación por vectores oficiales.
 *
 * # Mathematical Proof (Round Involution):
 * La ronda DR es la inversa algebraica exacta de la ronda ER sobre
 * (Z/2^32)^2, por lo que Decrypt(Encrypt(P)) == P para todo bloque y
 * toda agenda de claves. Los vectores del paper certifican la
 * orientación de palabras (palabra 0 = mitad baja).
 * =================================================================
 */

/// Agenda de claves y rondas ER/DR del cifrador SPECK-64/128.
pub mod speck;

pub use speck::{decrypt, encrypt, key_schedule, RoundKeys, ROUND_COUNT};
