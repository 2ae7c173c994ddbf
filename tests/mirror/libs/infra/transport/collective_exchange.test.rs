// [tests/mirror/libs/infra/transport/collective_exchange.test.rs]
/**
 * =================================================================
 * APARATO: COLLECTIVE EXCHANGE CONSERVATION (V8.2 - RENDEZVOUS GOLD)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-TRANSPORT
 * RESPONSABILIDAD: CONSERVACIÓN DEL INTERCAMBIO TOTAL Y REDUCCIÓN
 *
 * # Mathematical Proof (Conservation):
 * El bloque (origen o, destino d) se deposita una única vez y se
 * recolecta una única vez: la suma de palabras enviadas es igual a la
 * suma de palabras recibidas en todo el enjambre, y el multiconjunto
 * recibido es una permutación exacta del enviado.
 * =================================================================
 */

use std::thread;

use goldenclaw_infra_transport::{PeerCollective, ThreadPeerGroup};

const PEER_COUNT: usize = 4;
const BLOCK_LEN: usize = 3;

/// Palabra trazable: codifica (origen, destino, índice) en decimal.
fn tagged_word(source: usize, destination: usize, index: usize) -> u64 {
    (source as u64) * 1000 + (destination as u64) * 10 + index as u64
}

#[test]
fn certify_all_to_all_conservation() {
    println!("\n🧠 [PROVING_GROUNDS]: Initiating all-to-all conservation audit...");

    let endpoints = ThreadPeerGroup::create(PEER_COUNT);
    let handles: Vec<_> = endpoints
        .into_iter()
        .map(|endpoint| {
            thread::spawn(move || {
                let rank = endpoint.rank();

                // 1. FASE: ESTADIAJE TRAZABLE (bloque d → par d)
                let mut payload = vec![0u64; PEER_COUNT * BLOCK_LEN];
                for destination in 0..PEER_COUNT {
                    for index in 0..BLOCK_LEN {
                        payload[destination * BLOCK_LEN + index] =
                            tagged_word(rank, destination, index);
                    }
                }

                // 2. FASE: CONTEOS + CARGA ÚTIL (el orden del protocolo)
                let mut counts = vec![rank as u64; PEER_COUNT];
                endpoint.exchange_all_to_all(&mut counts, 1).expect("conteos");
                endpoint.exchange_all_to_all(&mut payload, BLOCK_LEN).expect("carga útil");

                // 3. FASE: REDUCCIÓN GLOBAL (suma idéntica en todos)
                let global_sum = endpoint.all_reduce_sum(rank as u64 + 1).expect("reducción");

                (rank, counts, payload, global_sum)
            })
        })
        .collect();

    for handle in handles {
        let (rank, counts, payload, global_sum) = handle.join().expect("par sin pánico");

        // Conteos: el bloque i contiene lo que el par i envió a este rango.
        for source in 0..PEER_COUNT {
            assert_eq!(counts[source], source as u64);
        }

        // Carga útil: permutación exacta — bloque o == palabras (o → rank).
        for source in 0..PEER_COUNT {
            for index in 0..BLOCK_LEN {
                assert_eq!(
                    payload[source * BLOCK_LEN + index],
                    tagged_word(source, rank, index),
                    "palabra (origen {source}, índice {index}) corrupta en el rango {rank}"
                );
            }
        }

        // Reducción: 1 + 2 + ... + P en todos los pares.
        assert_eq!(global_sum, (PEER_COUNT * (PEER_COUNT + 1) / 2) as u64);
    }

    println!("🏁 [INFORME]: Conservation audit concluded. Verdict: GOLD_MASTER");
}

#[test]
fn self_block_survives_the_exchange() {
    let mut endpoints = ThreadPeerGroup::create(1);
    let endpoint = endpoints.remove(0);

    let mut payload = vec![11u64, 22, 33];
    endpoint.exchange_all_to_all(&mut payload, 3).unwrap();

    // Con un solo par, el intercambio es la identidad.
    assert_eq!(payload, vec![11, 22, 33]);
}
