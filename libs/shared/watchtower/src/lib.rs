// [libs/shared/watchtower/src/lib.rs]
/*!
 * =================================================================
 * APARATO: WATCHTOWER SWARM OBSERVER (V6.0 - BEACON GOLD)
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L4)
 * RESPONSABILIDAD: TELEMETRÍA, BALIZAS DE PAR Y CAPTURA DE PÁNICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PEER BEACONS: Cada hilo de par arma una baliza local (rango y
 *    ronda en vuelo); el hook de pánico la lee en el hilo que colapsa
 *    y sella el rastro con coordenadas del ataque, no con genéricos.
 * 2. DUAL MODE: Logs compactos en desarrollo; tramas JSON aplanadas
 *    en producción para ingesta estructurada.
 * 3. HUMAN MAGNITUDES: Formateador de magnitudes (K/M/G/T) para los
 *    banners de diagnóstico del diccionario y los lotes.
 *
 * # Mathematical Proof (Collapse Traceability):
 * La baliza vive en almacenamiento local del hilo y el hook de pánico
 * se ejecuta en el hilo que colapsa: la lectura es siempre coherente
 * sin cerrojos, y el rastro identifica al par y la ronda exactos en
 * los que murió la búsqueda antes de que el desenrollado alcance al
 * lanzador y éste decrete el aborto de grupo.
 * =================================================================
 */

use std::cell::Cell;
use std::panic;

use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Baliza de contexto de un hilo de par: quién es y qué ronda volaba
/// cuando el mundo se detuvo.
#[derive(Debug, Clone, Copy)]
pub struct PeerBeacon {
    /// Rango del par dentro del enjambre.
    pub peer_rank: usize,
    /// Ronda en vuelo en el momento de la última marca.
    pub round_in_flight: u64,
    /// Rondas totales del plan de compresión.
    pub round_count: u64,
}

thread_local! {
    static PEER_BEACON: Cell<Option<PeerBeacon>> = Cell::new(None);
}

/// Arma la baliza del hilo actual con el rango del par. A invocar al
/// inicio de la búsqueda, antes de la primera ronda.
pub fn arm_peer_beacon(peer_rank: usize) {
    PEER_BEACON.with(|cell| {
        cell.set(Some(PeerBeacon { peer_rank, round_in_flight: 0, round_count: 0 }));
    });
}

/// Actualiza la ronda en vuelo de la baliza ya armada del hilo actual.
/// Sin baliza armada, la marca se descarta.
pub fn mark_round_in_flight(round_in_flight: u64, round_count: u64) {
    PEER_BEACON.with(|cell| {
        if let Some(mut beacon) = cell.get() {
            beacon.round_in_flight = round_in_flight;
            beacon.round_count = round_count;
            cell.set(Some(beacon));
        }
    });
}

/// Lectura diagnóstica de la baliza del hilo actual.
#[must_use]
pub fn current_peer_beacon() -> Option<PeerBeacon> {
    PEER_BEACON.with(Cell::get)
}

/// Inicializa el sistema de trazas y el hook de pánico del enjambre.
///
/// # Comportamiento:
/// - Desarrollo: logs compactos, estrato del servicio en depuración.
/// - Producción: tramas JSON planas con eventos aplanados.
///
/// # Errors:
/// Provoca pánico si otro suscriptor global ya fue inicializado en el
/// runtime (una sola torre por proceso).
pub fn init_tracing(service_nominal_identifier: &str) {
    // 1. FILTRO DINÁMICO: nivel global informativo, con el estrato del
    // servicio elevado a depuración durante el desarrollo.
    let telemetry_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            format!("info,{service_nominal_identifier}=debug").into()
        } else {
            "info".into()
        }
    });

    // 2. ARQUITECTURA DE SUSCRIPCIÓN (Dual Mode)
    if cfg!(debug_assertions) {
        tracing_subscriber::registry()
            .with(telemetry_filter)
            .with(tracing_subscriber::fmt::layer().compact().with_target(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(telemetry_filter)
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    }

    // 3. HOOK DE PÁNICO DEL ENJAMBRE: lee la baliza del hilo que
    // colapsa y sella el rastro con rango y ronda antes de que el
    // desenrollado llegue al lanzador.
    let service_seal = service_nominal_identifier.to_string();

    panic::set_hook(Box::new(move |panic_trace| {
        let collapse_site = panic_trace
            .location()
            .map(|site| format!("{}:{}:{}", site.file(), site.line(), site.column()))
            .unwrap_or_else(|| "UNMAPPED_COLLAPSE_SITE".to_string());

        let collapse_payload = panic_trace
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_trace.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("OPAQUE_COLLAPSE_PAYLOAD");

        match current_peer_beacon() {
            Some(beacon) => error!(
                target: "panic_monitor",
                service = %service_seal,
                peer = beacon.peer_rank,
                round = beacon.round_in_flight,
                rounds = beacon.round_count,
                site = %collapse_site,
                "🔥 [PEER_COLLAPSE]: Peer {} went down mid-round {}/{}: {}",
                beacon.peer_rank,
                beacon.round_in_flight,
                beacon.round_count,
                collapse_payload
            ),
            None => error!(
                target: "panic_monitor",
                service = %service_seal,
                site = %collapse_site,
                "🔥 [HOST_COLLAPSE]: Unbeaconed thread went down: {}",
                collapse_payload
            ),
        }
    }));

    info!(
        "👁️  [WATCHTOWER_ONLINE]: Swarm telemetry levelized for [{}]. Peer beacons armed-ready.",
        service_nominal_identifier
    );
}

/**
 * Representa una magnitud en notación humana compacta (máximo ~4
 * caracteres significativos): 512, 1.5K, 3.2M, 1.1G, 2.0T.
 */
#[must_use]
pub fn human_format(magnitude: u64) -> String {
    if magnitude < 1024 {
        return format!("{magnitude}");
    }
    if magnitude < 1_048_576 {
        return format!("{:.1}K", magnitude as f64 / 1e3);
    }
    if magnitude < 1_073_741_824 {
        return format!("{:.1}M", magnitude as f64 / 1e6);
    }
    if magnitude < 1_099_511_627_776 {
        return format!("{:.1}G", magnitude as f64 / 1e9);
    }
    if magnitude < 1_125_899_906_842_624 {
        return format!("{:.1}T", magnitude as f64 / 1e12);
    }
    format!("{:.1}P", magnitude as f64 / 1e15)
}
