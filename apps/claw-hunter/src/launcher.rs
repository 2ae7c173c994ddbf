// [apps/claw-hunter/src/launcher.rs]
/*!
 * =================================================================
 * APARATO: SWARM LAUNCHER (V4.1 - ZENITH SHELL)
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L5)
 * RESPONSABILIDAD: FORJA DEL ENJAMBRE, VALIDACIÓN Y AGREGADO RAÍZ
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ATOMIC RUN: El lanzador forja P hilos de par en lock-step; un
 *    fallo en cualquiera aborta el grupo y la corrida entera.
 * 2. ROOT EMISSION: Las soluciones y la fila estructurada se emiten
 *    una única vez, del lado raíz, tras reunir todos los reportes.
 * 3. DOUBLE CHECK: Toda solución se revalida con f(k1) == g(k2) y con
 *    el segundo par texto plano/cifrado antes de emitirse — el camino
 *    de falsos positivos de la clave reducida muere aquí.
 * 4. PANIC SHIELD: Un pánico en un hilo de par declara el colapso del
 *    grupo en lugar de dejar a los demás pares bloqueados en una
 *    celda colectiva.
 * =================================================================
 */

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

use anyhow::{bail, ensure, Context, Result};
use tracing::{info, warn};

use goldenclaw_domain_attack::{plan_compression, AttackFault, ClawEngine, ClawOracle};
use goldenclaw_domain_models::{
    AttackDirectives, AttackSummary, CompressionPlan, PeerExecutionReport,
};
use goldenclaw_infra_transport::{PeerCollective, ThreadPeerGroup, TransportFault};
use goldenclaw_shared_watchtower::human_format;

/// Bytes de una ranura empaquetada del diccionario (banner de memoria).
const SLOT_BYTES: u64 = 12;
/// Bytes de un elemento estadiado (clave + valor, dos palabras u64).
const STAGED_PAIR_BYTES: u64 = 16;

/// Resultado sellado de una corrida completa del enjambre.
pub struct AttackOutcome {
    /// Agregado raíz: soluciones, cronómetros y ocupación media.
    pub summary: AttackSummary,
    /// Reportes individuales, en orden de rango.
    pub peer_reports: Vec<PeerExecutionReport>,
}

/// Valida las directivas antes de forjar el enjambre. Todo rechazo
/// ocurre aquí, antes de que exista región paralela alguna.
fn validate_directives(directives: &AttackDirectives) -> Result<()> {
    ensure!(
        (1..=40).contains(&directives.bits_n),
        "el tamaño de bloque n debe estar en [1, 40], llegó {}",
        directives.bits_n
    );
    ensure!(
        directives.peer_count > 0 && directives.peer_count.is_power_of_two(),
        "el número de pares debe ser potencia de dos, llegó {}",
        directives.peer_count
    );
    ensure!(
        directives.peer_count as u64 <= directives.keyspace_size(),
        "más pares ({}) que claves enumerables (2^{})",
        directives.peer_count,
        directives.bits_n
    );
    ensure!(
        directives.memory_budget_gib > 0.0,
        "el presupuesto de memoria debe ser positivo"
    );
    ensure!(
        directives.batch_fill_ratio > 0.0 && directives.batch_fill_ratio <= 1.0,
        "la fracción de lote debe estar en (0, 1]"
    );
    ensure!(directives.max_results > 0, "el tope de soluciones debe ser positivo");
    Ok(())
}

/// Banner de diagnóstico raíz previo a la búsqueda.
fn emit_execution_banner(directives: &AttackDirectives, plan: &CompressionPlan) {
    info!(
        "🧭 [RUN_INFO]: n={} C0=({:08x}, {:08x}) C1=({:08x}, {:08x})",
        directives.bits_n,
        directives.ciphertext_c0 & 0xffff_ffff,
        directives.ciphertext_c0 >> 32,
        directives.ciphertext_c1 & 0xffff_ffff,
        directives.ciphertext_c1 >> 32,
    );
    info!(
        "🧭 [RUN_INFO]: peers={} compression={} ({} rounds)",
        directives.peer_count, plan.compress_factor, plan.round_count
    );
    info!(
        "🧭 [RUN_INFO]: global dictionary {}B ({}B per peer)",
        human_format(plan.global_slot_count * SLOT_BYTES),
        human_format(plan.local_slot_count * SLOT_BYTES),
    );

    let per_peer_buffer_bytes =
        plan.batch_capacity * STAGED_PAIR_BYTES * directives.peer_count as u64;
    info!(
        "🧭 [RUN_INFO]: total buffers {}B ({}B per peer)",
        human_format(per_peer_buffer_bytes * directives.peer_count as u64),
        human_format(per_peer_buffer_bytes),
    );

    let silicon_units = num_cpus::get();
    if directives.peer_count > silicon_units {
        warn!(
            "⚠️ [CAPACITY]: {} peers over {} silicon units — lock-step will timeshare.",
            directives.peer_count, silicon_units
        );
    }
}

/**
 * Ejecuta la corrida completa con el plan de compresión derivado del
 * presupuesto de memoria de las directivas.
 */
pub fn execute_distributed_attack(directives: AttackDirectives) -> Result<AttackOutcome> {
    validate_directives(&directives)?;
    let plan = plan_compression(&directives);
    execute_with_validated_plan(directives, plan)
}

/**
 * Ejecuta la corrida con un plan explícito (pruebas de paridad de
 * compresión y corridas de calibración).
 */
pub fn execute_distributed_attack_with_plan(
    directives: AttackDirectives,
    plan: CompressionPlan,
) -> Result<AttackOutcome> {
    validate_directives(&directives)?;
    execute_with_validated_plan(directives, plan)
}

fn execute_with_validated_plan(
    directives: AttackDirectives,
    plan: CompressionPlan,
) -> Result<AttackOutcome> {
    emit_execution_banner(&directives, &plan);

    // 1. FORJA DEL ENJAMBRE: un hilo del SO por par, en orden de rango.
    let endpoints = ThreadPeerGroup::create(directives.peer_count);
    let mut joined: Vec<std::result::Result<PeerExecutionReport, AttackFault>> =
        Vec::with_capacity(directives.peer_count);

    thread::scope(|scope| {
        let handles: Vec<_> = endpoints
            .into_iter()
            .map(|endpoint| {
                let peer_directives = directives.clone();
                let abort_handle = endpoint.clone();
                scope.spawn(move || {
                    let search_verdict = catch_unwind(AssertUnwindSafe(move || {
                        ClawEngine::new(peer_directives, plan, endpoint).execute_search()
                    }));

                    search_verdict.unwrap_or_else(|_| {
                        abort_handle.abort_group("panic in peer thread");
                        Err(AttackFault::Transport(TransportFault::GroupCollapsed {
                            reason: "panic in peer thread".to_string(),
                        }))
                    })
                })
            })
            .collect();

        for handle in handles {
            joined.push(handle.join().unwrap_or_else(|_| {
                Err(AttackFault::Transport(TransportFault::GroupCollapsed {
                    reason: "peer thread unjoinable".to_string(),
                }))
            }));
        }
    });

    // 2. TRIAJE: privilegiar la causa raíz sobre los colapsos en cascada.
    let mut peer_reports = Vec::with_capacity(directives.peer_count);
    let mut cascade_fault: Option<AttackFault> = None;
    let mut root_cause_fault: Option<AttackFault> = None;

    for verdict in joined {
        match verdict {
            Ok(report) => peer_reports.push(report),
            Err(fault @ AttackFault::Transport(TransportFault::GroupCollapsed { .. })) => {
                cascade_fault.get_or_insert(fault);
            }
            Err(fault) => {
                root_cause_fault.get_or_insert(fault);
            }
        }
    }

    if let Some(fault) = root_cause_fault.or(cascade_fault) {
        bail!("colapso del enjambre: {fault}");
    }

    // 3. DOBLE VERIFICACIÓN RAÍZ: f(k1) == g(k2) y par dorado.
    let oracle = ClawOracle::new(
        directives.bits_n,
        directives.ciphertext_c0,
        directives.ciphertext_c1,
    );
    for report in &peer_reports {
        for solution in &report.solutions {
            ensure!(
                oracle.f(solution.key_half_one) == oracle.g(solution.key_half_two)
                    && oracle.is_good_pair(solution.key_half_one, solution.key_half_two),
                "solución corrupta emitida por el par {}: ({:x}, {:x})",
                report.peer_rank,
                solution.key_half_one,
                solution.key_half_two
            );
        }
    }

    // 4. AGREGADO RAÍZ: ocupación media, cronómetros del par raíz.
    let root_report = &peer_reports[0];
    let cumulative_occupancy: f64 =
        peer_reports.iter().map(|report| report.cumulative_buffer_occupancy).sum();
    let average_buffer_occupancy_percent = cumulative_occupancy
        / (root_report.exchange_count * directives.peer_count as u64) as f64
        * 100.0;

    let summary = AttackSummary {
        bits_n: directives.bits_n,
        peer_count: directives.peer_count,
        compress_factor: plan.compress_factor,
        compute_seconds: root_report.compute_seconds,
        communication_seconds: root_report.communication_seconds,
        fill_seconds: root_report.fill_seconds,
        probe_seconds: root_report.probe_seconds,
        average_buffer_occupancy_percent,
        total_candidate_hits: peer_reports.iter().map(|report| report.candidate_hits).sum(),
        solutions: peer_reports
            .iter()
            .flat_map(|report| report.solutions.iter().cloned())
            .collect(),
    };

    // 5. EMISIÓN RAÍZ: soluciones, diagnósticos y fila estructurada.
    for solution in &summary.solutions {
        println!(
            "Solution found: ({:x}, {:x}) [checked OK]",
            solution.key_half_one, solution.key_half_two
        );
    }

    info!(
        "📦 [OCCUPANCY]: average buffer occupancy {:.2}%",
        summary.average_buffer_occupancy_percent
    );
    info!(
        "⏱️  [TIMERS]: compute={:.2}s comm={:.2}s fill={:.2}s probe={:.2}s",
        summary.compute_seconds,
        summary.communication_seconds,
        summary.fill_seconds,
        summary.probe_seconds
    );

    println!("{}", summary.structured_row());
    info!(
        "📊 [SUMMARY_JSON]: {}",
        serde_json::to_string(&summary).context("sellado JSON del agregado raíz")?
    );

    Ok(AttackOutcome { summary, peer_reports })
}
