// [libs/core/dict/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: DISTRIBUTED DICTIONARY HUB (V7.0 - SHARD SOVEREIGN)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE RUTEO Y TABLA DE SONDEO LINEAL
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SINGLE SOURCE OF ROUTING: La geometría de fragmentos es la única
 *    autoridad de la derivación mix → peer → slot local, consumida
 *    tanto por los buffers de estadiaje L2 como por la tabla local.
 * 2. PACKED SLOTS: Ranuras de 12 bytes exactos (u32 + u64 empaquetados)
 *    con centinela 0xFFFFFFFF de ranura vacía.
 * 3. REDUCED KEYS: Las claves se almacenan módulo el primo 2^32 - 5;
 *    la reducción jamás colisiona con el centinela.
 * 4. HYGIENE: Catálogo thiserror de fallos fatales de invariante.
 * =================================================================
 */

/// Catálogo de fallos del diccionario distribuido.
pub mod errors;
/// Finalizador Murmur3 de 64 bits para ruteo y selección de ranura.
pub mod mixer;
/// Geometría de fragmentos y derivación determinista de ruteo.
pub mod routing;
/// Tabla local de direccionamiento abierto con sondeo lineal.
pub mod table;

pub use errors::DictFault;
pub use mixer::murmur64;
pub use routing::{ShardGeometry, ShardRoute};
pub use table::{ShardTable, SlotEntry, EMPTY_SENTINEL, PROBE_HITS_MAX, REDUCTION_PRIME};
