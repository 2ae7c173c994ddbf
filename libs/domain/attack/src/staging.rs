// [libs/domain/attack/src/staging.rs]
/*!
 * =================================================================
 * APARATO: OUTBOUND STAGING BUFFERS (V11.1 - MAGAZINE GOLD)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: LOTES SALIENTES POR PAR DESTINO Y OCUPACIÓN
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FLAT LAYOUT: Un único arreglo plano de P bloques de B pares
 *    (clave, valor) intercalados — exactamente la disposición que el
 *    intercambio total en sitio transporta sin reempaquetado.
 * 2. ROUTING PARITY: El destino se deriva de la misma geometría de
 *    fragmentos que la tabla local; el lote i sólo contiene entradas
 *    cuyo par destino es i.
 * 3. OCCUPANCY TELEMETRY: Antes de cada intercambio se acumula la
 *    ocupación relativa para el promedio diagnóstico de la corrida.
 * =================================================================
 */

use goldenclaw_core_dict::ShardGeometry;

/// Palabras u64 por elemento estadiado: (clave, valor).
const WORDS_PER_PAIR: usize = 2;

/// Lotes salientes de un par: un bloque de capacidad fija por destino.
///
/// Tras cada intercambio colectivo, los mismos arreglos contienen los
/// contadores y pares *recibidos* de cada origen, en idéntica
/// disposición; el drenaje los consume y reinicia los contadores.
pub struct StagingBuffers {
    geometry: ShardGeometry,
    batch_capacity: u64,
    counts: Vec<u64>,
    pairs: Vec<u64>,
    exchange_count: u64,
    cumulative_occupancy: f64,
}

impl StagingBuffers {
    /// Asigna los P lotes vacíos con la capacidad del plan.
    #[must_use]
    pub fn new(geometry: ShardGeometry, batch_capacity: u64) -> Self {
        let peer_count = geometry.peer_count();
        Self {
            geometry,
            batch_capacity,
            counts: vec![0; peer_count],
            pairs: vec![0; peer_count * batch_capacity as usize * WORDS_PER_PAIR],
            exchange_count: 0,
            cumulative_occupancy: 0.0,
        }
    }

    /**
     * Estadía el par (clave, valor) en el lote de su par destino.
     *
     * Retorna `true` si ese lote quedó exactamente a capacidad — señal
     * de que el llamador debe intercambiar y drenar de inmediato. La
     * capacidad jamás se excede.
     */
    #[inline]
    pub fn push(&mut self, key: u64, value: u64) -> bool {
        let destination = self.geometry.route(key).peer;
        let occupancy = self.counts[destination];
        debug_assert!(occupancy < self.batch_capacity, "lote desbordado antes del intercambio");

        let base = (destination * self.batch_capacity as usize + occupancy as usize)
            * WORDS_PER_PAIR;
        self.pairs[base] = key;
        self.pairs[base + 1] = value;
        self.counts[destination] = occupancy + 1;

        self.counts[destination] == self.batch_capacity
    }

    /// Acumula la ocupación relativa de todos los lotes — a invocar
    /// inmediatamente antes de cada intercambio colectivo.
    pub fn accumulate_occupancy_statistics(&mut self) {
        let staged_elements: u64 = self.counts.iter().sum();
        self.exchange_count += 1;
        self.cumulative_occupancy += staged_elements as f64
            / (self.batch_capacity * self.geometry.peer_count() as u64) as f64;
    }

    /**
     * Recorre los pares recibidos tras un intercambio (bloque por
     * origen, `counts[i]` elementos válidos) aplicando `visit` a cada
     * (clave, valor). Aborta en el primer error.
     */
    pub fn try_for_each_received<E>(
        &self,
        mut visit: impl FnMut(u64, u64) -> Result<(), E>,
    ) -> Result<(), E> {
        for source in 0..self.geometry.peer_count() {
            for element in 0..self.counts[source] as usize {
                let base =
                    (source * self.batch_capacity as usize + element) * WORDS_PER_PAIR;
                visit(self.pairs[base], self.pairs[base + 1])?;
            }
        }
        Ok(())
    }

    /// Reinicia todos los contadores tras un drenaje.
    pub fn reset_counts(&mut self) {
        self.counts.fill(0);
    }

    /// Contadores por destino/origen (buffer del colectivo de conteos).
    pub fn counts_mut(&mut self) -> &mut [u64] {
        &mut self.counts
    }

    /// Pares intercalados (buffer del colectivo de carga útil).
    pub fn pairs_mut(&mut self) -> &mut [u64] {
        &mut self.pairs
    }

    /// Palabras u64 de cada bloque de carga útil por par.
    #[must_use]
    pub fn payload_block_len(&self) -> usize {
        self.batch_capacity as usize * WORDS_PER_PAIR
    }

    /// Capacidad de cada lote, en pares.
    #[must_use]
    pub fn batch_capacity(&self) -> u64 {
        self.batch_capacity
    }

    /// Intercambios contabilizados hasta el momento.
    #[must_use]
    pub fn exchange_count(&self) -> u64 {
        self.exchange_count
    }

    /// Suma de ocupaciones relativas acumulada.
    #[must_use]
    pub fn cumulative_occupancy(&self) -> f64 {
        self.cumulative_occupancy
    }
}
