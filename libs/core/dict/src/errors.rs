// libs/core/dict/src/errors.rs
// =================================================================
// APARATO: DICTIONARY ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS FATALES DEL DICCIONARIO
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Define los fallos de invariante posibles durante la operación del
/// diccionario distribuido.
///
/// Ninguna variante es recuperable: cada una señala una violación de
/// invariante que obliga a abortar el grupo de pares completo, tal como
/// el protocolo de ejecución atómica exige.
#[derive(Error, Debug)]
pub enum DictFault {
    /// El sondeo lineal recorrió el fragmento completo sin hallar una
    /// ranura vacía.
    ///
    /// Bajo el invariante de carga (inserciones por ronda estrictamente
    /// menores que las ranuras globales) esto es inalcanzable; su
    /// aparición indica un dimensionamiento corrupto.
    #[error("fragmento saturado: las {local_slot_count} ranuras locales están ocupadas")]
    ShardSaturated {
        /// Ranuras del fragmento local en el momento del colapso.
        local_slot_count: u64,
    },

    /// Una consulta acumuló más coincidencias de clave reducida que el
    /// máximo tolerado.
    ///
    /// Para los tamaños de búsqueda soportados la probabilidad de este
    /// evento es despreciable; su aparición indica claves degeneradas.
    #[error("desbordamiento de sondeo: más de {max_hits} coincidencias para la clave {key:#018x}")]
    ProbeOverflow {
        /// Clave de 64 bits consultada.
        key: u64,
        /// Límite de coincidencias configurado para la consulta.
        max_hits: usize,
    },
}
