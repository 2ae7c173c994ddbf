// [libs/core/dict/src/routing.rs]
/*!
 * =================================================================
 * APARATO: SHARD ROUTING GEOMETRY (V5.2 - DETERMINISTIC GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: DERIVACIÓN CANÓNICA MIX → PEER → RANURA LOCAL
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SINGLE SOURCE OF TRUTH: Esta geometría es la única autoridad del
 *    ruteo; buffers de estadiaje y tabla local consumen exactamente la
 *    misma derivación, eliminando toda divergencia peer/slot.
 * 2. EXACT PARTITION: La tabla global es la concatenación de fragmentos
 *    iguales en orden de rango: S_global = S_local * P, exacto.
 * 3. NO CROSS-SHARD CHAINING: El sondeo envuelve dentro del fragmento
 *    local; una clave jamás se encadena hacia el fragmento vecino.
 *
 * # Mathematical Proof (Partition Totality):
 * Para toda clave k, h = mix(k) mod S_global cae en [0, S_global); la
 * división euclidiana h = peer * S_local + slot con 0 <= slot < S_local
 * existe y es única, luego cada clave pertenece a exactamente un par y
 * exactamente una ranura inicial de su fragmento.
 * =================================================================
 */

use crate::mixer::murmur64;

/// Destino canónico de una clave dentro del diccionario distribuido.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardRoute {
    /// Rango del par propietario del fragmento destino.
    pub peer: usize,
    /// Ranura inicial del sondeo lineal dentro del fragmento local.
    pub local_slot: u64,
}

/// Geometría inmutable del diccionario distribuido.
#[derive(Debug, Clone, Copy)]
pub struct ShardGeometry {
    local_slot_count: u64,
    peer_count: usize,
}

impl ShardGeometry {
    /// Construye la geometría a partir del tamaño de fragmento local y
    /// el número de pares del enjambre.
    #[must_use]
    pub fn new(local_slot_count: u64, peer_count: usize) -> Self {
        debug_assert!(local_slot_count > 0, "fragmento de tamaño cero");
        debug_assert!(peer_count > 0, "enjambre vacío");
        Self { local_slot_count, peer_count }
    }

    /// Ranuras del fragmento de un único par.
    #[inline(always)]
    #[must_use]
    pub fn local_slot_count(&self) -> u64 {
        self.local_slot_count
    }

    /// Ranuras de la tabla lógica global (S_local * P, exacto).
    #[inline(always)]
    #[must_use]
    pub fn global_slot_count(&self) -> u64 {
        self.local_slot_count * self.peer_count as u64
    }

    /// Número de pares del enjambre.
    #[inline(always)]
    #[must_use]
    pub fn peer_count(&self) -> usize {
        self.peer_count
    }

    /**
     * Deriva el destino canónico de una clave.
     *
     * # Logic:
     * 1. h_global = mix(key) mod S_global.
     * 2. peer     = h_global / S_local  (división entera).
     * 3. slot     = h_global mod S_local.
     */
    #[inline(always)]
    #[must_use]
    pub fn route(&self, key: u64) -> ShardRoute {
        let global_slot = murmur64(key) % self.global_slot_count();
        ShardRoute {
            peer: (global_slot / self.local_slot_count) as usize,
            local_slot: global_slot % self.local_slot_count,
        }
    }
}
