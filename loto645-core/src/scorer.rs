use crate::models::{Combination, Draw, PrizeRank};

/// Résultat brut d'une comparaison combinaison / tirage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonResult {
    pub main_matches: u8,
    pub bonus_hit: bool,
}

/// Compare une combinaison à un tirage historique. Fonction pure et
/// déterministe, sans effet de bord.
pub fn compare(combo: &Combination, draw: &Draw) -> ComparisonResult {
    let main_matches = combo
        .iter()
        .filter(|n| draw.numbers.contains(n))
        .count() as u8;
    let bonus_hit = combo.contains(&draw.bonus);
    ComparisonResult {
        main_matches,
        bonus_hit,
    }
}

/// Barème des rangs : 6 numéros = 1er rang ; 5 + bonus = 2e ; 5 = 3e ;
/// 4 = 4e ; 3 = 5e ; 2 ou moins = sans gain.
pub fn prize_rank(result: ComparisonResult) -> PrizeRank {
    match (result.main_matches, result.bonus_hit) {
        (6, _) => PrizeRank::First,
        (5, true) => PrizeRank::Second,
        (5, false) => PrizeRank::Third,
        (4, _) => PrizeRank::Fourth,
        (3, _) => PrizeRank::Fifth,
        _ => PrizeRank::None,
    }
}
