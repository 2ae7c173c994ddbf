// [libs/domain/attack/src/engine.rs]
/*!
 * =================================================================
 * APARATO: GOLDEN CLAW ENGINE (V11.3 - LOCKSTEP SOVEREIGN)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: FASES DE LLENADO/SONDEO Y CONDUCTOR DE RONDAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PER-PEER CONTEXT: Todo el estado de la corrida (tabla, lotes,
 *    oráculo, cronómetros, contadores) vive en este valor por par; el
 *    único colaborador externo es el extremo de transporte.
 * 2. INTERLEAVED FILL STRIDE: x = R*rank + ronda + j*(P*R) reparte el
 *    coste de cifrado uniformemente entre rondas y pares.
 * 3. QUIESCENCE DRAIN: Tras la enumeración local, el par llega a la
 *    barrera no bloqueante y sigue intercambiando/drenando hasta que
 *    todos los pares la alcanzan — ningún lote queda en vuelo.
 * 4. EARLY EXIT: Con la señal activa, cada drenaje de sondeo se sella
 *    con una reducción global; una suma positiva retorna de inmediato.
 *
 * # Mathematical Proof (Fill Completeness):
 * La unión de los strides entrelazados sobre rank en [0,P) y ronda en
 * [0,R) es exactamente [0, 2^n): cada x se enumera una única vez en
 * toda la corrida, luego cada (f(x), x) se inserta exactamente una vez
 * en el fragmento de su par destino.
 * =================================================================
 */

use std::time::Instant;

use goldenclaw_core_dict::{ShardGeometry, ShardTable, PROBE_HITS_MAX};
use goldenclaw_domain_models::{
    AttackDirectives, CompressionPlan, GoldenSolution, PeerExecutionReport,
};
use goldenclaw_infra_transport::PeerCollective;
use goldenclaw_shared_watchtower::{arm_peer_beacon, mark_round_in_flight};
use tracing::{debug, info};

use crate::errors::AttackFault;
use crate::oracle::ClawOracle;
use crate::staging::StagingBuffers;

/// Motor de búsqueda de la colisión dorada de un único par.
pub struct ClawEngine<C: PeerCollective> {
    directives: AttackDirectives,
    plan: CompressionPlan,
    oracle: ClawOracle,
    transport: C,
    rank: usize,
    table: ShardTable,
    staging: StagingBuffers,
    solutions: Vec<GoldenSolution>,
    probe_scratch: Vec<u64>,
    candidate_hits: u64,
    fill_seconds: f64,
    probe_seconds: f64,
    communication_seconds: f64,
}

impl<C: PeerCollective> ClawEngine<C> {
    /// Forja el contexto por par: fragmento local, lotes y oráculo.
    #[must_use]
    pub fn new(directives: AttackDirectives, plan: CompressionPlan, transport: C) -> Self {
        let rank = transport.rank();
        let geometry = ShardGeometry::new(plan.local_slot_count, directives.peer_count);

        Self {
            oracle: ClawOracle::new(
                directives.bits_n,
                directives.ciphertext_c0,
                directives.ciphertext_c1,
            ),
            table: ShardTable::new(geometry, rank),
            staging: StagingBuffers::new(geometry, plan.batch_capacity),
            solutions: Vec::with_capacity(directives.max_results),
            probe_scratch: Vec::with_capacity(PROBE_HITS_MAX),
            candidate_hits: 0,
            fill_seconds: 0.0,
            probe_seconds: 0.0,
            communication_seconds: 0.0,
            directives,
            plan,
            transport,
            rank,
        }
    }

    /**
     * Ejecuta la búsqueda completa de la colisión dorada.
     *
     * Consume el motor y retorna el reporte sellado del par. Ante
     * cualquier fallo de invariante declara el colapso del grupo antes
     * de propagar — ningún par queda bloqueado en un colectivo.
     */
    pub fn execute_search(mut self) -> Result<PeerExecutionReport, AttackFault> {
        match self.golden_claw_search() {
            Ok(compute_seconds) => Ok(PeerExecutionReport {
                peer_rank: self.rank,
                solutions: self.solutions,
                candidate_hits: self.candidate_hits,
                exchange_count: self.staging.exchange_count(),
                cumulative_buffer_occupancy: self.staging.cumulative_occupancy(),
                fill_seconds: self.fill_seconds,
                probe_seconds: self.probe_seconds,
                communication_seconds: self.communication_seconds,
                compute_seconds,
            }),
            Err(fault) => {
                self.transport.abort_group(&fault.to_string());
                Err(fault)
            }
        }
    }

    /// Conductor de rondas: llenado → sondeo → reinicio, R veces.
    /// Retorna los segundos de cómputo puro (total menos comunicación).
    fn golden_claw_search(&mut self) -> Result<f64, AttackFault> {
        // Baliza del hilo: el hook de pánico reporta rango y ronda si
        // este par colapsa a mitad de búsqueda.
        arm_peer_beacon(self.rank);

        if self.rank == 0 {
            info!(
                "🚀 [CLAW_IGNITION]: n={} peers={} rounds={} early_exit={}",
                self.directives.bits_n,
                self.directives.peer_count,
                self.plan.round_count,
                self.directives.early_exit
            );
        }

        let run_timer = Instant::now();

        for round in 0..self.plan.round_count {
            mark_round_in_flight(round, self.plan.round_count);
            debug!("🔄 [ROUND]: peer={} round={}/{}", self.rank, round, self.plan.round_count);

            self.fill_phase(round)?;
            let early_exit_confirmed = self.probe_phase()?;
            if early_exit_confirmed {
                if self.rank == 0 {
                    info!("🏁 [EARLY_EXIT]: Golden collision confirmed across the swarm.");
                }
                return Ok(run_timer.elapsed().as_secs_f64() - self.communication_seconds);
            }

            // La tabla se dimensiona para una ronda: la siguiente parte
            // de un fragmento limpio.
            self.table.reset();
        }

        Ok(run_timer.elapsed().as_secs_f64() - self.communication_seconds)
    }

    /**
     * Fase de llenado de la ronda: enumera el stride entrelazado
     * propio, rutea (f(x), x) hacia su fragmento y drena hasta la
     * quiescencia del enjambre.
     */
    fn fill_phase(&mut self, round: u64) -> Result<(), AttackFault> {
        let phase_timer = Instant::now();

        let peer_count = self.directives.peer_count as u64;
        let round_count = self.plan.round_count;
        let keys_per_peer = (self.directives.keyspace_size() >> self.plan.compress_factor)
            / peer_count;
        let stride = peer_count * round_count;

        let mut key_half = round_count * self.rank as u64 + round;
        for _ in 0..keys_per_peer {
            let middle_value = self.oracle.f(key_half);
            if self.staging.push(middle_value, key_half) {
                self.exchange()?;
                self.drain_inserts()?;
            }
            key_half += stride;
        }

        // Quiescencia: drenar lotes residuales hasta que todos los
        // pares completen su enumeración local.
        let ticket = self.transport.begin_quiescence()?;
        loop {
            self.exchange()?;
            self.drain_inserts()?;
            if self.transport.quiescence_reached(&ticket)? {
                break;
            }
        }

        self.fill_seconds += phase_timer.elapsed().as_secs_f64();
        Ok(())
    }

    /**
     * Fase de sondeo de la ronda: barre el rango [0, 2^n) completo con
     * stride cíclico, consulta los fragmentos remotos vía lotes y
     * valida cada candidato con el segundo par texto plano/cifrado.
     *
     * Retorna `true` si la salida temprana confirmó una colisión
     * dorada global.
     */
    fn probe_phase(&mut self) -> Result<bool, AttackFault> {
        let phase_timer = Instant::now();

        let peer_count = self.directives.peer_count as u64;
        let keys_per_peer = self.directives.keyspace_size() / peer_count;

        let mut key_half = self.rank as u64;
        for _ in 0..keys_per_peer {
            let middle_value = self.oracle.g(key_half);
            if self.staging.push(middle_value, key_half) {
                self.exchange()?;
                self.drain_probes()?;
                if self.early_exit_confirmed()? {
                    self.probe_seconds += phase_timer.elapsed().as_secs_f64();
                    return Ok(true);
                }
            }
            key_half += peer_count;
        }

        let ticket = self.transport.begin_quiescence()?;
        loop {
            self.exchange()?;
            self.drain_probes()?;
            if self.early_exit_confirmed()? {
                self.probe_seconds += phase_timer.elapsed().as_secs_f64();
                return Ok(true);
            }
            if self.transport.quiescence_reached(&ticket)? {
                break;
            }
        }

        self.probe_seconds += phase_timer.elapsed().as_secs_f64();
        Ok(false)
    }

    /// Intercambio colectivo completo: ocupación, conteos y carga útil.
    fn exchange(&mut self) -> Result<(), AttackFault> {
        self.staging.accumulate_occupancy_statistics();

        let communication_timer = Instant::now();
        let payload_block_len = self.staging.payload_block_len();
        self.transport.exchange_all_to_all(self.staging.counts_mut(), 1)?;
        self.transport.exchange_all_to_all(self.staging.pairs_mut(), payload_block_len)?;
        self.communication_seconds += communication_timer.elapsed().as_secs_f64();

        Ok(())
    }

    /// Drena los pares recibidos hacia el fragmento local (llenado).
    fn drain_inserts(&mut self) -> Result<(), AttackFault> {
        let Self { staging, table, .. } = self;

        staging.try_for_each_received(|middle_value, key_half| {
            table.insert(middle_value, key_half).map_err(AttackFault::from)
        })?;
        staging.reset_counts();

        Ok(())
    }

    /// Drena los pares recibidos consultando el fragmento local y
    /// validando cada preimagen candidata (sondeo).
    fn drain_probes(&mut self) -> Result<(), AttackFault> {
        let Self {
            staging,
            table,
            oracle,
            solutions,
            probe_scratch,
            candidate_hits,
            directives,
            rank,
            ..
        } = self;

        staging.try_for_each_received(|middle_value, key_half_two| {
            table.probe_into(middle_value, PROBE_HITS_MAX, probe_scratch)?;
            *candidate_hits += probe_scratch.len() as u64;

            for &key_half_one in probe_scratch.iter() {
                if oracle.is_good_pair(key_half_one, key_half_two) {
                    if solutions.len() == directives.max_results {
                        return Err(AttackFault::SolutionOverflow {
                            max_results: directives.max_results,
                        });
                    }
                    info!(
                        "🎯 [GOLDEN_CLAW]: peer={} pair=({:#x}, {:#x})",
                        rank, key_half_one, key_half_two
                    );
                    solutions.push(GoldenSolution::seal(key_half_one, key_half_two, *rank));
                }
            }

            Ok(())
        })?;
        staging.reset_counts();

        Ok(())
    }

    /// Reducción global de la salida temprana: suma de soluciones
    /// locales de todo el enjambre. Sólo se ejecuta con la señal
    /// activa — idéntica en todos los pares por construcción.
    fn early_exit_confirmed(&mut self) -> Result<bool, AttackFault> {
        if !self.directives.early_exit {
            return Ok(false);
        }

        let global_solution_count =
            self.transport.all_reduce_sum(self.solutions.len() as u64)?;
        Ok(global_solution_count > 0)
    }
}
