use crate::models::{Combination, Draw, PrizeRank, PICK_COUNT};
use crate::scorer::{compare, prize_rank};

/// Décompte des combinaisons gagnantes par rang.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankTally {
    pub first: u32,
    pub second: u32,
    pub third: u32,
    pub fourth: u32,
    pub fifth: u32,
}

impl RankTally {
    pub fn record(&mut self, rank: PrizeRank) {
        match rank {
            PrizeRank::First => self.first += 1,
            PrizeRank::Second => self.second += 1,
            PrizeRank::Third => self.third += 1,
            PrizeRank::Fourth => self.fourth += 1,
            PrizeRank::Fifth => self.fifth += 1,
            PrizeRank::None => {}
        }
    }

    pub fn total_wins(&self) -> u32 {
        self.first + self.second + self.third + self.fourth + self.fifth
    }

    /// Paires (rang, décompte) dans l'ordre des rangs, pour l'affichage.
    pub fn entries(&self) -> [(PrizeRank, u32); 5] {
        [
            (PrizeRank::First, self.first),
            (PrizeRank::Second, self.second),
            (PrizeRank::Third, self.third),
            (PrizeRank::Fourth, self.fourth),
            (PrizeRank::Fifth, self.fifth),
        ]
    }
}

/// Bilan d'un lot de combinaisons face à un tirage donné.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub round: u32,
    pub numbers: [u8; PICK_COUNT],
    pub bonus: u8,
    pub tally: RankTally,
    pub total_wins: u32,
    pub hit_rate: f64,
}

/// Taux de réussite en pourcentage. Zéro combinaison : 0, jamais de
/// division par zéro.
pub fn hit_rate(wins: u32, combination_count: usize) -> f64 {
    if combination_count == 0 {
        0.0
    } else {
        f64::from(wins) / combination_count as f64 * 100.0
    }
}

pub fn evaluate_round(combinations: &[Combination], draw: &Draw) -> RoundReport {
    let mut tally = RankTally::default();
    for combo in combinations {
        tally.record(prize_rank(compare(combo, draw)));
    }
    let total_wins = tally.total_wins();
    RoundReport {
        round: draw.round,
        numbers: draw.numbers,
        bonus: draw.bonus,
        tally,
        total_wins,
        hit_rate: hit_rate(total_wins, combinations.len()),
    }
}

/// Un bilan par tirage historique, dans l'ordre d'insertion.
pub fn evaluate_all(combinations: &[Combination], draws: &[Draw]) -> Vec<RoundReport> {
    draws
        .iter()
        .map(|draw| evaluate_round(combinations, draw))
        .collect()
}

/// Analyse croisée : toutes les combinaisons contre tous les tirages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateReport {
    pub tally: RankTally,
    /// Paires sans gain, comptées pour les pourcentages.
    pub losses: u64,
    pub total_pairings: u64,
}

impl AggregateReport {
    /// Part d'un décompte dans l'ensemble des paires, en pourcentage.
    pub fn share(&self, count: u64) -> f64 {
        if self.total_pairings == 0 {
            0.0
        } else {
            count as f64 / self.total_pairings as f64 * 100.0
        }
    }
}

pub fn aggregate(combinations: &[Combination], draws: &[Draw]) -> AggregateReport {
    let mut report = AggregateReport::default();
    for combo in combinations {
        for draw in draws {
            let rank = prize_rank(compare(combo, draw));
            if rank.is_win() {
                report.tally.record(rank);
            } else {
                report.losses += 1;
            }
            report.total_pairings += 1;
        }
    }
    report
}
