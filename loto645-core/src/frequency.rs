use crate::models::{Draw, POOL_MAX};

/// Fréquences d'apparition des numéros principaux sur l'historique chargé.
/// Le bonus n'est jamais compté. Recalculée en entier à chaque changement
/// de l'historique, jamais mise à jour incrémentalement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; POOL_MAX as usize],
}

impl FrequencyTable {
    pub fn compute(draws: &[Draw]) -> Self {
        let mut counts = [0u32; POOL_MAX as usize];
        for draw in draws {
            for &n in &draw.numbers {
                counts[(n - 1) as usize] += 1;
            }
        }
        Self { counts }
    }

    pub fn count(&self, number: u8) -> u32 {
        if number < 1 || number > POOL_MAX {
            return 0;
        }
        self.counts[(number - 1) as usize]
    }
}
