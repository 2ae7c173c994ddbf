// [libs/domain/attack/src/sizing.rs]
/*!
 * =================================================================
 * APARATO: MEMORY SIZING & COMPRESSION PLANNER (V11.0 - CLAW SOVEREIGN)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: FACTOR DE COMPRESIÓN Y GEOMETRÍA DE LA CORRIDA
 *
 * # Mathematical Proof (Load Invariant):
 * Con S_local = ceil(1.125 * 2^(n-c) / P), la tabla global satisface
 * S_global >= 1.125 * 2^(n-c) > 2^(n-c) = inserciones por ronda, de
 * modo que toda cadena de sondeo encuentra una ranura vacía y la
 * ocupación máxima queda acotada en ~89%.
 * =================================================================
 */

use goldenclaw_domain_models::{AttackDirectives, CompressionPlan};
use tracing::debug;

/// Bytes de una ranura empaquetada del diccionario.
const SLOT_BYTES: u64 = 12;
/// Bytes de una palabra u64 de lote.
const PAIR_WORD_BYTES: u64 = 8;
/// Palabras u64 por elemento estadiado (clave, valor).
const WORDS_PER_PAIR: u64 = 2;
/// Margen de holgura de la tabla frente a la carga de una ronda.
const TABLE_HEADROOM: f64 = 1.125;
/// Margen de relajación sobre el requisito de memoria estimado.
const RELAXATION_FACTOR: f64 = 1.25;
/// Un GiB en bytes.
const GIB: f64 = 1_073_741_824.0;

/// Capacidad de lote para un fragmento dado: fracción configurada del
/// fragmento, redondeada hacia arriba y acotada por el medio rango de
/// un entero de 32 bits.
#[must_use]
pub fn batch_capacity_for(local_slot_count: u64, batch_fill_ratio: f64) -> u64 {
    let proportional = (batch_fill_ratio * local_slot_count as f64).ceil() as u64;
    proportional.min(i32::MAX as u64 / WORDS_PER_PAIR)
}

/// Selecciona el menor factor de compresión cuyo número de rondas cubre
/// el requisito de memoria de la corrida sin compresión.
fn select_compress_factor(directives: &AttackDirectives) -> u32 {
    let peer_count = directives.peer_count as u64;

    // Estimación de la corrida sin compresión (factor 0).
    let dict_slots =
        (TABLE_HEADROOM * directives.keyspace_size() as f64 / peer_count as f64) as u64;
    let buffer_slots =
        batch_capacity_for(dict_slots, directives.batch_fill_ratio) * WORDS_PER_PAIR * peer_count;
    let memory_required =
        (dict_slots * SLOT_BYTES + buffer_slots * PAIR_WORD_BYTES) * peer_count;

    let minimum_slices = (RELAXATION_FACTOR
        * (memory_required as f64 / (directives.memory_budget_gib * GIB)).ceil())
        as u64;

    let mut compress_factor = 0u32;
    while (1u64 << compress_factor) < minimum_slices {
        compress_factor += 1;
    }

    // Tope útil: la rebanada de una ronda jamás encoge por debajo de
    // una clave por par (2^(n-c) >= P).
    let max_useful_factor =
        (directives.bits_n as u32).saturating_sub(directives.peer_count.trailing_zeros());
    compress_factor.min(max_useful_factor)
}

/**
 * Deriva la geometría de la corrida para un factor de compresión ya
 * decidido: rondas, fragmentos y capacidad de lote.
 */
#[must_use]
pub fn plan_with_factor(directives: &AttackDirectives, compress_factor: u32) -> CompressionPlan {
    let round_count = 1u64 << compress_factor;
    let peer_count = directives.peer_count as u64;

    let slice_size = 1u64 << (directives.bits_n - u64::from(compress_factor));
    let local_slot_count =
        (TABLE_HEADROOM * slice_size as f64 / peer_count as f64).ceil() as u64;
    let global_slot_count = local_slot_count * peer_count;
    let batch_capacity = batch_capacity_for(local_slot_count, directives.batch_fill_ratio);

    debug!(
        "📐 [SIZING]: factor={} rounds={} local_slots={} batch={}",
        compress_factor, round_count, local_slot_count, batch_capacity
    );

    CompressionPlan {
        compress_factor,
        round_count,
        local_slot_count,
        global_slot_count,
        batch_capacity,
    }
}

/**
 * Deriva el plan de compresión completo de la corrida a partir del
 * presupuesto de memoria de las directivas.
 */
#[must_use]
pub fn plan_compression(directives: &AttackDirectives) -> CompressionPlan {
    plan_with_factor(directives, select_compress_factor(directives))
}
