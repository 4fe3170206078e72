use thiserror::Error;

/// Conditions d'échec attendues du moteur, toujours retournées comme
/// valeurs, jamais comme panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Ligne d'historique invalide ; ignorée à l'import, jamais remontée
    /// individuellement à l'appelant.
    #[error("enregistrement invalide : {0}")]
    MalformedRecord(String),

    #[error("aucun tirage valide chargé")]
    EmptyDataset,

    #[error("aucune combinaison générée")]
    NoCombinations,

    #[error("pool insuffisant après exclusions : {available} numéros disponibles, 6 requis")]
    InsufficientPool { available: usize },

    #[error("tirage n°{round} introuvable")]
    RoundNotFound { round: u32 },
}
