// [libs/infra/transport/src/collective.rs]
/*!
 * =================================================================
 * APARATO: PEER COLLECTIVE CONTRACT (V8.0 - LOCKSTEP SOVEREIGN)
 * CLASIFICACIÓN: INFRA TRANSPORT (ESTRATO L3)
 * RESPONSABILIDAD: CONTRATO DE COLECTIVOS DEL GRUPO DE PARES
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. MINIMAL SURFACE: Exactamente las cuatro capacidades que el motor
 *    consume — rango, intercambio total, reducción y quiescencia.
 * 2. IN-PLACE SEMANTICS: El intercambio total opera sobre el buffer
 *    del llamador, bloque i enviado al par i y reemplazado por el
 *    bloque que el par i envió de vuelta.
 * 3. NON-BLOCKING QUIESCENCE: La barrera separa la llegada (no
 *    bloqueante) del sondeo de completitud, habilitando el bucle de
 *    drenaje de lotes residuales.
 * =================================================================
 */

use crate::errors::TransportFault;

/// Boleto de quiescencia: identifica la generación de barrera a la que
/// el par llegó, para sondeos de completitud posteriores.
#[derive(Debug, Clone, Copy)]
pub struct QuiescenceTicket {
    pub(crate) target_generation: u64,
}

/// Contrato colectivo que el motor de colisión consume.
///
/// Invariante de protocolo: todos los pares invocan los colectivos en
/// idéntico orden global. Cada colectivo corre hasta completarse en
/// todos los pares o el grupo entero aborta — no existe cancelación.
pub trait PeerCollective {
    /// Rango de este par dentro del grupo, en `[0, peer_count)`.
    fn rank(&self) -> usize;

    /// Número fijo de pares del grupo.
    fn peer_count(&self) -> usize;

    /**
     * Intercambio total simétrico en sitio.
     *
     * `buffer` contiene `peer_count` bloques consecutivos de
     * `block_len` palabras; el bloque `i` se envía al par `i` y, al
     * retornar, contiene el bloque que el par `i` envió a este par
     * (el bloque propio queda intacto). Al retornar en todos los
     * pares, ninguna palabra enviada sigue "en vuelo".
     *
     * # Errors:
     * `CollectiveGeometry` si `buffer.len() != peer_count * block_len`;
     * `GroupCollapsed` si el grupo abortó durante la espera.
     */
    fn exchange_all_to_all(
        &self,
        buffer: &mut [u64],
        block_len: usize,
    ) -> Result<(), TransportFault>;

    /// Reducción global por suma: retorna la suma de las contribuciones
    /// de todos los pares (mismo valor en todos).
    fn all_reduce_sum(&self, contribution: u64) -> Result<u64, TransportFault>;

    /// Llegada no bloqueante a la barrera de quiescencia. Cada par
    /// llega exactamente una vez por fase.
    fn begin_quiescence(&self) -> Result<QuiescenceTicket, TransportFault>;

    /// Sondeo no bloqueante: ¿llegaron ya todos los pares a la barrera
    /// del boleto? Una vez verdadero, permanece verdadero.
    fn quiescence_reached(&self, ticket: &QuiescenceTicket) -> Result<bool, TransportFault>;

    /// Declara el colapso del grupo: todo par bloqueado en (o que entre
    /// después a) un colectivo recibe `GroupCollapsed`.
    fn abort_group(&self, reason: &str);
}
