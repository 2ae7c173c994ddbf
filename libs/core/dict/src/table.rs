// [libs/core/dict/src/table.rs]
/*!
 * =================================================================
 * APARATO: LINEAR PROBE SHARD TABLE (V7.3 - PACKED SOVEREIGN)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: FRAGMENTO LOCAL DE DIRECCIONAMIENTO ABIERTO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PACKED 12-BYTE SLOTS: Ranura {u32 clave reducida, u64 preimagen}
 *    sin padding, tratada como arreglo plano por el sondeo.
 * 2. SENTINEL DISCIPLINE: 0xFFFFFFFF marca ranura vacía; la reducción
 *    módulo el primo 2^32 - 5 jamás produce ese valor.
 * 3. LOCAL WRAPPING: El sondeo envuelve dentro del fragmento local y
 *    termina siempre — el invariante de carga garantiza al menos una
 *    ranura vacía en cada cadena.
 * 4. FALSE-POSITIVE TOLERANCE: Dos claves de 64 bits distintas pueden
 *    compartir clave reducida; el filtrado ocurre aguas abajo.
 * =================================================================
 */

use crate::errors::DictFault;
use crate::routing::ShardGeometry;
use tracing::debug;

/// Centinela de ranura vacía. La reducción módulo `REDUCTION_PRIME`
/// produce valores en [0, 2^32 - 5), nunca el centinela.
pub const EMPTY_SENTINEL: u32 = 0xffff_ffff;

/// Mayor primo por debajo de 2^32: módulo de reducción de claves.
pub const REDUCTION_PRIME: u64 = 0xffff_fffb;

/// Máximo de coincidencias toleradas por consulta antes de declarar
/// desbordamiento fatal.
pub const PROBE_HITS_MAX: usize = 256;

/// Una ranura del fragmento: clave reducida + preimagen original.
/// Empaquetada a 12 bytes exactos; el sondeo la trata como arreglo plano.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SlotEntry {
    /// Clave reducida (`clave mod REDUCTION_PRIME`) o centinela.
    pub reduced_key: u32,
    /// Preimagen de 64 bits que produjo la entrada.
    pub preimage: u64,
}

/// Fragmento local del diccionario distribuido, propiedad exclusiva de
/// un único par. Se asigna una vez, se vacía entre rondas y se libera
/// al apagado.
pub struct ShardTable {
    slots: Vec<SlotEntry>,
    geometry: ShardGeometry,
    owner_rank: usize,
    occupied_slot_count: u64,
}

impl ShardTable {
    /// Asigna el fragmento con todas las ranuras vacías.
    #[must_use]
    pub fn new(geometry: ShardGeometry, owner_rank: usize) -> Self {
        let local_slot_count = geometry.local_slot_count();
        debug!(
            "⚙️ [SHARD_GENESIS]: Allocating {} packed slots for peer {}.",
            local_slot_count, owner_rank
        );

        Self {
            slots: vec![
                SlotEntry { reduced_key: EMPTY_SENTINEL, preimage: 0 };
                local_slot_count as usize
            ],
            geometry,
            owner_rank,
            occupied_slot_count: 0,
        }
    }

    /**
     * Inserta la ligadura clave → preimagen en el fragmento.
     *
     * Precondición: la clave rutea hacia este par (el intercambio
     * colectivo ya la entregó aquí).
     *
     * # Errors:
     * `DictFault::ShardSaturated` si el sondeo recorre el fragmento
     * completo sin hallar ranura vacía — violación del invariante de
     * carga, irrecuperable.
     */
    pub fn insert(&mut self, key: u64, value: u64) -> Result<(), DictFault> {
        let route = self.geometry.route(key);
        debug_assert_eq!(route.peer, self.owner_rank, "clave ruteada al par equivocado");

        let local_slot_count = self.geometry.local_slot_count();
        let mut slot_index = route.local_slot;

        for _ in 0..local_slot_count {
            if self.slots[slot_index as usize].reduced_key == EMPTY_SENTINEL {
                self.slots[slot_index as usize] = SlotEntry {
                    reduced_key: (key % REDUCTION_PRIME) as u32,
                    preimage: value,
                };
                self.occupied_slot_count += 1;
                return Ok(());
            }
            slot_index += 1;
            if slot_index == local_slot_count {
                slot_index = 0;
            }
        }

        Err(DictFault::ShardSaturated { local_slot_count })
    }

    /**
     * Consulta el fragmento con una clave y acumula las preimagenes de
     * toda coincidencia de clave reducida en `hits` (que se vacía al
     * entrar). El sondeo termina en la primera ranura vacía.
     *
     * # Errors:
     * `DictFault::ProbeOverflow` al acumular más de `max_hits`
     * coincidencias — fatal para el grupo, las claves son degeneradas.
     */
    pub fn probe_into(
        &self,
        key: u64,
        max_hits: usize,
        hits: &mut Vec<u64>,
    ) -> Result<usize, DictFault> {
        hits.clear();

        let reduced_key = (key % REDUCTION_PRIME) as u32;
        let local_slot_count = self.geometry.local_slot_count();
        let route = self.geometry.route(key);
        debug_assert_eq!(route.peer, self.owner_rank, "consulta ruteada al par equivocado");

        let mut slot_index = route.local_slot;
        loop {
            let slot = self.slots[slot_index as usize];
            if slot.reduced_key == EMPTY_SENTINEL {
                return Ok(hits.len());
            }
            if slot.reduced_key == reduced_key {
                if hits.len() == max_hits {
                    return Err(DictFault::ProbeOverflow { key, max_hits });
                }
                hits.push(slot.preimage);
            }
            slot_index += 1;
            if slot_index == local_slot_count {
                slot_index = 0;
            }
        }
    }

    /// Restaura todas las ranuras al centinela vacío para la siguiente
    /// ronda de llenado. Idempotente.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.reduced_key = EMPTY_SENTINEL;
        }
        self.occupied_slot_count = 0;
    }

    /// Ranuras ocupadas del fragmento (diagnóstico de ocupación).
    #[must_use]
    pub fn occupied_slot_count(&self) -> u64 {
        self.occupied_slot_count
    }

    /// Geometría compartida del diccionario.
    #[must_use]
    pub fn geometry(&self) -> ShardGeometry {
        self.geometry
    }
}
