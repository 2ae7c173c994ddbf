// [libs/infra/transport/src/harness.rs]
/*!
 * =================================================================
 * APARATO: THREAD PEER GROUP HARNESS (V8.2 - RENDEZVOUS GOLD)
 * CLASIFICACIÓN: INFRA TRANSPORT (ESTRATO L3)
 * RESPONSABILIDAD: COLECTIVOS EN PROCESO SOBRE CELDAS DE ENCUENTRO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. RENDEZVOUS CELLS: Cada colectivo es una celda de dos fases
 *    (depósito → drenaje) protegida por Mutex + Condvar; ningún par
 *    avanza hasta que los P depósitos están sellados.
 * 2. POISON SHIELD: Gestión explícita de cerrojos envenenados ante
 *    pánicos de hilo, sin interbloqueos silenciosos.
 * 3. COLLAPSE PROPAGATION: El aborto de grupo despierta a todo par
 *    bloqueado con un veredicto terminal, emulando el aborto colectivo
 *    de un lanzador de trabajos por lotes.
 *
 * # Mathematical Proof (Lockstep Sequencing):
 * La celda de intercambio sólo admite una generación a la vez: la fase
 * de depósito de la generación g+1 no abre hasta que los P pares
 * drenaron la generación g. Por inducción, los colectivos quedan
 * totalmente ordenados y cada sondeo de quiescencia posterior a un
 * intercambio observa el mismo estado en todos los pares.
 * =================================================================
 */

use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use tracing::{debug, error};

use crate::collective::{PeerCollective, QuiescenceTicket};
use crate::errors::TransportFault;

/// Fase de depósito/drenaje de una celda de intercambio total.
struct ExchangeState {
    /// Matriz de depósitos P×P: fila = par origen, columna = par destino.
    deposit_matrix: Vec<Vec<u64>>,
    arrived: usize,
    departed: usize,
    collapse_reason: Option<String>,
}

struct ExchangeCell {
    state: Mutex<ExchangeState>,
    all_deposited: Condvar,
    round_drained: Condvar,
}

/// Celda de reducción global por suma, con el mismo protocolo bifásico.
struct ReduceState {
    accumulator: u64,
    sealed_sum: u64,
    arrived: usize,
    departed: usize,
    collapse_reason: Option<String>,
}

struct ReduceCell {
    state: Mutex<ReduceState>,
    all_deposited: Condvar,
    round_drained: Condvar,
}

/// Libro mayor de la barrera de quiescencia: generaciones completadas
/// y llegadas de la generación en curso. Sin esperas bloqueantes.
struct BarrierState {
    completed_generation: u64,
    arrived: usize,
    collapse_reason: Option<String>,
}

/// Núcleo compartido del grupo: celdas colectivas y geometría fija.
struct GroupNucleus {
    peer_count: usize,
    exchange_cell: ExchangeCell,
    reduce_cell: ReduceCell,
    barrier_state: Mutex<BarrierState>,
}

/// Fábrica del arnés de producción: un hilo del SO por par.
pub struct ThreadPeerGroup;

impl ThreadPeerGroup {
    /**
     * Construye el grupo y entrega un extremo por par, en orden de
     * rango. Cada extremo se mueve al hilo de su par; el núcleo es el
     * único estado compartido del enjambre.
     */
    #[must_use]
    pub fn create(peer_count: usize) -> Vec<PeerEndpoint> {
        debug!("⚙️ [GROUP_GENESIS]: Forging rendezvous nucleus for {} peers.", peer_count);

        let nucleus = Arc::new(GroupNucleus {
            peer_count,
            exchange_cell: ExchangeCell {
                state: Mutex::new(ExchangeState {
                    deposit_matrix: vec![Vec::new(); peer_count * peer_count],
                    arrived: 0,
                    departed: 0,
                    collapse_reason: None,
                }),
                all_deposited: Condvar::new(),
                round_drained: Condvar::new(),
            },
            reduce_cell: ReduceCell {
                state: Mutex::new(ReduceState {
                    accumulator: 0,
                    sealed_sum: 0,
                    arrived: 0,
                    departed: 0,
                    collapse_reason: None,
                }),
                all_deposited: Condvar::new(),
                round_drained: Condvar::new(),
            },
            barrier_state: Mutex::new(BarrierState {
                completed_generation: 0,
                arrived: 0,
                collapse_reason: None,
            }),
        });

        (0..peer_count)
            .map(|rank| PeerEndpoint { rank, nucleus: Arc::clone(&nucleus) })
            .collect()
    }
}

/// Extremo de transporte de un único par. Se mueve al hilo del par y
/// materializa el contrato colectivo sobre el núcleo compartido. El
/// clon comparte rango y núcleo — útil como asidero de aborto cuando
/// el extremo principal ya fue consumido por el motor.
#[derive(Clone)]
pub struct PeerEndpoint {
    rank: usize,
    nucleus: Arc<GroupNucleus>,
}

fn collapsed(reason: &str) -> TransportFault {
    TransportFault::GroupCollapsed { reason: reason.to_string() }
}

impl PeerEndpoint {
    fn lock_exchange(&self) -> Result<MutexGuard<'_, ExchangeState>, TransportFault> {
        self.nucleus.exchange_cell.state.lock().map_err(|_| TransportFault::CellPoisoned)
    }

    fn lock_reduce(&self) -> Result<MutexGuard<'_, ReduceState>, TransportFault> {
        self.nucleus.reduce_cell.state.lock().map_err(|_| TransportFault::CellPoisoned)
    }
}

impl PeerCollective for PeerEndpoint {
    fn rank(&self) -> usize {
        self.rank
    }

    fn peer_count(&self) -> usize {
        self.nucleus.peer_count
    }

    fn exchange_all_to_all(
        &self,
        buffer: &mut [u64],
        block_len: usize,
    ) -> Result<(), TransportFault> {
        let peer_count = self.nucleus.peer_count;
        let expected = peer_count * block_len;
        if buffer.len() != expected {
            return Err(TransportFault::CollectiveGeometry { expected, actual: buffer.len() });
        }

        let cell = &self.nucleus.exchange_cell;
        let mut state = self.lock_exchange()?;

        // FASE 0: Esperar a que la generación anterior quede drenada.
        while state.departed != 0 {
            if let Some(reason) = &state.collapse_reason {
                return Err(collapsed(reason));
            }
            state = cell.round_drained.wait(state).map_err(|_| TransportFault::CellPoisoned)?;
        }
        if let Some(reason) = &state.collapse_reason {
            return Err(collapsed(reason));
        }

        // FASE 1: Depósito de los P bloques salientes de este par.
        for destination in 0..peer_count {
            let block = &buffer[destination * block_len..(destination + 1) * block_len];
            state.deposit_matrix[self.rank * peer_count + destination] = block.to_vec();
        }
        state.arrived += 1;
        if state.arrived == peer_count {
            cell.all_deposited.notify_all();
        }

        // FASE 2: Espera del sellado de los P depósitos.
        while state.arrived != peer_count {
            if let Some(reason) = &state.collapse_reason {
                return Err(collapsed(reason));
            }
            state = cell.all_deposited.wait(state).map_err(|_| TransportFault::CellPoisoned)?;
        }

        // FASE 3: Recolección en sitio de la columna propia.
        for source in 0..peer_count {
            buffer[source * block_len..(source + 1) * block_len]
                .copy_from_slice(&state.deposit_matrix[source * peer_count + self.rank]);
        }

        // FASE 4: Drenaje; el último par en salir abre la generación
        // siguiente.
        state.departed += 1;
        if state.departed == peer_count {
            state.arrived = 0;
            state.departed = 0;
            cell.round_drained.notify_all();
        }

        Ok(())
    }

    fn all_reduce_sum(&self, contribution: u64) -> Result<u64, TransportFault> {
        let peer_count = self.nucleus.peer_count;
        let cell = &self.nucleus.reduce_cell;
        let mut state = self.lock_reduce()?;

        while state.departed != 0 {
            if let Some(reason) = &state.collapse_reason {
                return Err(collapsed(reason));
            }
            state = cell.round_drained.wait(state).map_err(|_| TransportFault::CellPoisoned)?;
        }
        if let Some(reason) = &state.collapse_reason {
            return Err(collapsed(reason));
        }

        if state.arrived == 0 {
            state.accumulator = 0;
        }
        state.accumulator = state.accumulator.wrapping_add(contribution);
        state.arrived += 1;
        if state.arrived == peer_count {
            state.sealed_sum = state.accumulator;
            cell.all_deposited.notify_all();
        }

        while state.arrived != peer_count {
            if let Some(reason) = &state.collapse_reason {
                return Err(collapsed(reason));
            }
            state = cell.all_deposited.wait(state).map_err(|_| TransportFault::CellPoisoned)?;
        }

        let global_sum = state.sealed_sum;

        state.departed += 1;
        if state.departed == peer_count {
            state.arrived = 0;
            state.departed = 0;
            cell.round_drained.notify_all();
        }

        Ok(global_sum)
    }

    fn begin_quiescence(&self) -> Result<QuiescenceTicket, TransportFault> {
        let mut state =
            self.nucleus.barrier_state.lock().map_err(|_| TransportFault::CellPoisoned)?;
        if let Some(reason) = &state.collapse_reason {
            return Err(collapsed(reason));
        }

        let target_generation = state.completed_generation + 1;
        state.arrived += 1;
        if state.arrived == self.nucleus.peer_count {
            state.arrived = 0;
            state.completed_generation += 1;
        }

        Ok(QuiescenceTicket { target_generation })
    }

    fn quiescence_reached(&self, ticket: &QuiescenceTicket) -> Result<bool, TransportFault> {
        let state =
            self.nucleus.barrier_state.lock().map_err(|_| TransportFault::CellPoisoned)?;
        if let Some(reason) = &state.collapse_reason {
            return Err(collapsed(reason));
        }

        Ok(state.completed_generation >= ticket.target_generation)
    }

    fn abort_group(&self, reason: &str) {
        error!("💀 [GROUP_COLLAPSE]: Peer {} declared abort: {}", self.rank, reason);

        match self.nucleus.exchange_cell.state.lock() {
            Ok(mut state) => state.collapse_reason = Some(reason.to_string()),
            Err(_) => error!("💀 [CELL_POISONED]: Exchange cell unreachable during abort."),
        }
        self.nucleus.exchange_cell.all_deposited.notify_all();
        self.nucleus.exchange_cell.round_drained.notify_all();

        match self.nucleus.reduce_cell.state.lock() {
            Ok(mut state) => state.collapse_reason = Some(reason.to_string()),
            Err(_) => error!("💀 [CELL_POISONED]: Reduce cell unreachable during abort."),
        }
        self.nucleus.reduce_cell.all_deposited.notify_all();
        self.nucleus.reduce_cell.round_drained.notify_all();

        match self.nucleus.barrier_state.lock() {
            Ok(mut state) => state.collapse_reason = Some(reason.to_string()),
            Err(_) => error!("💀 [CELL_POISONED]: Barrier ledger unreachable during abort."),
        }
    }
}
