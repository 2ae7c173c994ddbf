// [apps/claw-hunter/src/main.rs]
/*!
 * =================================================================
 * APARATO: CLAW HUNTER SHELL (V4.1 - ZENITH SHELL)
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: BOOTSTRAP DE ENTORNO E IGNICIÓN DEL LANZADOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ARCHITECTURAL PURITY: El shell sólo parsea directivas, enciende
 *    la torre de observación y delega en el lanzador del enjambre.
 * 2. EXIT DISCIPLINE: Código 0 en éxito, 1 ante error de uso o
 *    validación (emitido antes de forjar la región paralela).
 * 3. ZERO ABBREVIATIONS: Nomenclatura nominal absoluta en argumentos.
 * =================================================================
 */

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::info;

use goldenclaw_domain_models::directives::{
    AttackDirectives, DEFAULT_BATCH_FILL_RATIO, DEFAULT_MAX_RESULTS,
};
use goldenclaw_hunter_lib::launcher::execute_distributed_attack;
use goldenclaw_shared_watchtower::init_tracing;

/**
 * Directivas de mando del cazador de colisiones doradas.
 * Configuración inyectada vía CLI o variables de entorno.
 */
#[derive(Parser, Debug)]
#[command(
    author = "Raz Podesta <metaShark Tech>",
    version = "4.1",
    about = "GoldenClaw Hunter // Encuentro en el medio distribuido contra doble SPECK-64/128"
)]
struct HunterDirectives {
    /// Bits de la mitad de clave bajo búsqueda (máscara 2^n - 1).
    #[arg(long = "n")]
    block_size_bits: u64,

    /// Primer texto cifrado, 16 dígitos hexadecimales.
    #[arg(long = "c0", alias = "C0")]
    ciphertext_c0_hexadecimal: String,

    /// Segundo texto cifrado, 16 dígitos hexadecimales.
    #[arg(long = "c1", alias = "C1")]
    ciphertext_c1_hexadecimal: String,

    /// Presupuesto de memoria de la corrida, en GiB.
    #[arg(long = "mem")]
    memory_budget_gib: f64,

    /// Pares del enjambre (potencia de dos), parámetro del lanzador.
    #[arg(long = "peers", env = "CLAW_PEERS")]
    peer_count: usize,

    /// Retorno inmediato al confirmar la primera colisión dorada.
    #[arg(long = "early-exit", default_value_t = false)]
    early_exit: bool,
}

/// Decodifica un texto cifrado hexadecimal de hasta 16 dígitos en u64
/// (palabra baja en los 32 bits inferiores).
fn parse_ciphertext_hexadecimal(raw_argument: &str) -> Result<u64> {
    let trimmed = raw_argument.trim().trim_start_matches("0x");
    ensure!(
        !trimmed.is_empty() && trimmed.len() <= 16,
        "texto cifrado hexadecimal inválido: '{raw_argument}'"
    );

    let padded = format!("{trimmed:0>16}");
    let mut big_endian_bytes = [0u8; 8];
    hex::decode_to_slice(&padded, &mut big_endian_bytes)
        .with_context(|| format!("dígitos hexadecimales inválidos en '{raw_argument}'"))?;

    Ok(u64::from_be_bytes(big_endian_bytes))
}

/**
 * Punto de ignición del binario del cazador.
 *
 * # Errors:
 * - Error de uso o validación: emitido antes de la región paralela,
 *   código de salida 1.
 * - Violación de invariante en la corrida: aborto del grupo, código
 *   de salida distinto de cero.
 */
fn main() -> Result<()> {
    // 1. PARSEO DE DIRECTIVAS ESTRATÉGICAS (salida 1 ante error de uso)
    let hunter_directives = match HunterDirectives::try_parse() {
        Ok(directives) => directives,
        Err(usage_error) => {
            let _ = usage_error.print();
            let is_informational = matches!(
                usage_error.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            );
            std::process::exit(if is_informational { 0 } else { 1 });
        }
    };

    // 2. IGNICIÓN DE LA TORRE DE OBSERVACIÓN
    init_tracing("goldenclaw");
    info!("💠 [SHELL]: GoldenClaw ignition sequence starting...");

    // 3. TRADUCCIÓN A DIRECTIVAS DE DOMINIO
    let attack_directives = AttackDirectives {
        bits_n: hunter_directives.block_size_bits,
        ciphertext_c0: parse_ciphertext_hexadecimal(&hunter_directives.ciphertext_c0_hexadecimal)?,
        ciphertext_c1: parse_ciphertext_hexadecimal(&hunter_directives.ciphertext_c1_hexadecimal)?,
        memory_budget_gib: hunter_directives.memory_budget_gib,
        peer_count: hunter_directives.peer_count,
        early_exit: hunter_directives.early_exit,
        batch_fill_ratio: DEFAULT_BATCH_FILL_RATIO,
        max_results: DEFAULT_MAX_RESULTS,
    };

    // 4. EJECUCIÓN DEL ENJAMBRE Y EMISIÓN RAÍZ
    let outcome = execute_distributed_attack(attack_directives)?;

    info!(
        "🏁 [SHELL]: Run concluded with {} golden solution(s).",
        outcome.summary.solutions.len()
    );

    Ok(())
}
