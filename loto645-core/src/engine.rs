use crate::error::EngineError;
use crate::evaluator::{aggregate, evaluate_all, evaluate_round, AggregateReport, RoundReport};
use crate::frequency::FrequencyTable;
use crate::generator::{generate, GenerationOutcome};
use crate::models::{Combination, Draw, GenerationRequest, Strategy};
use crate::parser::{parse_draws, ImportSummary};

/// Moteur de session. Seul propriétaire de l'état mutable : l'historique
/// courant et le lot de combinaisons courant, chacun remplacé en bloc par
/// l'opération correspondante (jamais fusionné).
#[derive(Debug, Default)]
pub struct Engine {
    draws: Vec<Draw>,
    batch: Vec<Combination>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charge un historique depuis un blob texte. Remplace intégralement
    /// l'historique précédent ; zéro ligne valide laisse l'ancien en place.
    pub fn load_draws(&mut self, text: &str) -> Result<ImportSummary, EngineError> {
        let (draws, summary) = parse_draws(text);
        if draws.is_empty() {
            return Err(EngineError::EmptyDataset);
        }
        self.draws = draws;
        Ok(summary)
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.batch
    }

    /// Premier tirage portant ce numéro, dans l'ordre d'insertion (les
    /// doublons de numéro de tirage cohabitent).
    pub fn find_round(&self, round: u32) -> Option<&Draw> {
        self.draws.iter().find(|d| d.round == round)
    }

    /// Fréquences recalculées à la demande, jamais mises en cache.
    pub fn frequencies(&self) -> FrequencyTable {
        FrequencyTable::compute(&self.draws)
    }

    /// Génère un nouveau lot et remplace intégralement le précédent. La
    /// stratégie pondérée exige un historique chargé.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
        seed: Option<u64>,
    ) -> Result<GenerationOutcome, EngineError> {
        if request.strategy == Strategy::Weighted && self.draws.is_empty() {
            return Err(EngineError::EmptyDataset);
        }
        let outcome = generate(request, &self.frequencies(), seed)?;
        self.batch = outcome.combinations.clone();
        Ok(outcome)
    }

    /// Bilan du lot courant face à un tirage ciblé.
    pub fn compare_round(&self, round: u32) -> Result<RoundReport, EngineError> {
        self.require_session()?;
        let draw = self
            .find_round(round)
            .ok_or(EngineError::RoundNotFound { round })?;
        Ok(evaluate_round(&self.batch, draw))
    }

    /// Bilan du lot courant face à chaque tirage de l'historique.
    pub fn backtest(&self) -> Result<Vec<RoundReport>, EngineError> {
        self.require_session()?;
        Ok(evaluate_all(&self.batch, &self.draws))
    }

    /// Analyse croisée du lot courant contre tout l'historique.
    pub fn analyze(&self) -> Result<AggregateReport, EngineError> {
        self.require_session()?;
        Ok(aggregate(&self.batch, &self.draws))
    }

    fn require_session(&self) -> Result<(), EngineError> {
        if self.draws.is_empty() {
            return Err(EngineError::EmptyDataset);
        }
        if self.batch.is_empty() {
            return Err(EngineError::NoCombinations);
        }
        Ok(())
    }
}
