use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::EngineError;
use crate::frequency::FrequencyTable;
use crate::models::{Combination, GenerationRequest, Strategy, MAX_COMBINATIONS, PICK_COUNT, POOL_MAX};
use crate::tiers::{categorize, NumberTiers};

/// Profils (chaud, neutre, froid) appliqués en rotation selon l'indice de
/// la combinaison dans le lot. Heuristique de répartition, pas un modèle
/// prédictif.
const PROFILES: [[usize; 3]; 5] = [
    [2, 2, 2], // équilibré
    [4, 1, 1], // dominante chaude
    [1, 4, 1], // dominante neutre
    [1, 1, 4], // dominante froide
    [3, 3, 0], // chaud + neutre
];

/// Essais consécutifs autorisés avant abandon du lot pondéré.
const RETRY_BUDGET: u32 = 10;

/// Résultat d'une génération. `truncated` signale un lot écourté par
/// épuisement du budget anti-doublons : dégradé mais pas fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub combinations: Vec<Combination>,
    pub requested: usize,
    pub truncated: bool,
}

/// Pool éligible : 1-45 moins les exclusions. Les exclusions hors plage
/// sont ignorées, pas rejetées.
pub fn eligible_pool(excluded: &[u8]) -> Vec<u8> {
    (1..=POOL_MAX).filter(|n| !excluded.contains(n)).collect()
}

pub fn generate(
    request: &GenerationRequest,
    freq: &FrequencyTable,
    seed: Option<u64>,
) -> Result<GenerationOutcome, EngineError> {
    let pool = eligible_pool(&request.excluded);
    if pool.len() < PICK_COUNT {
        return Err(EngineError::InsufficientPool {
            available: pool.len(),
        });
    }

    let count = request.count.min(MAX_COMBINATIONS);
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let outcome = match request.strategy {
        Strategy::Random => random_batch(&pool, count, &mut rng),
        Strategy::Weighted => weighted_batch(&pool, freq, count, &mut rng),
    };
    Ok(outcome)
}

/// Stratégie aléatoire : les doublons entre combinaisons du lot sont permis.
fn random_batch(pool: &[u8], count: usize, rng: &mut StdRng) -> GenerationOutcome {
    let combinations = (0..count).map(|_| random_combination(pool, rng)).collect();
    GenerationOutcome {
        combinations,
        requested: count,
        truncated: false,
    }
}

/// Mélange de Fisher-Yates du pool, préfixe de 6, tri croissant.
fn random_combination(pool: &[u8], rng: &mut StdRng) -> Combination {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    let mut combo = [0u8; PICK_COUNT];
    combo.copy_from_slice(&shuffled[..PICK_COUNT]);
    combo.sort();
    combo
}

/// Stratégie pondérée : unicité garantie au sein du lot, dans la limite du
/// budget d'essais. Budget épuisé : le lot est tronqué et signalé.
fn weighted_batch(
    pool: &[u8],
    freq: &FrequencyTable,
    count: usize,
    rng: &mut StdRng,
) -> GenerationOutcome {
    let tiers = categorize(pool, freq);
    let mut combinations: Vec<Combination> = Vec::with_capacity(count);
    let mut truncated = false;

    'batch: for i in 0..count {
        let profile = PROFILES[i % PROFILES.len()];
        let mut attempts = 0u32;
        loop {
            let combo = weighted_combination(&tiers, pool, profile, rng);
            if !combinations.contains(&combo) {
                combinations.push(combo);
                break;
            }
            attempts += 1;
            if attempts >= RETRY_BUDGET {
                truncated = true;
                break 'batch;
            }
        }
    }

    GenerationOutcome {
        combinations,
        requested: count,
        truncated,
    }
}

/// Ajuste un profil aux tailles réelles des groupes : chaque demande est
/// plafonnée à la taille du groupe, le déficit est reporté sur neutre puis
/// froid puis chaud, et un éventuel reliquat est comblé en préférant chaud
/// puis neutre puis froid.
fn resolve_profile(profile: [usize; 3], sizes: [usize; 3]) -> [usize; 3] {
    let mut take = [
        profile[0].min(sizes[0]),
        profile[1].min(sizes[1]),
        profile[2].min(sizes[2]),
    ];

    for idx in [1, 2, 0] {
        while take.iter().sum::<usize>() < PICK_COUNT && take[idx] < sizes[idx] {
            take[idx] += 1;
        }
    }
    for idx in [0, 1, 2] {
        while take.iter().sum::<usize>() < PICK_COUNT && take[idx] < sizes[idx] {
            take[idx] += 1;
        }
    }

    take
}

fn weighted_combination(
    tiers: &NumberTiers,
    pool: &[u8],
    profile: [usize; 3],
    rng: &mut StdRng,
) -> Combination {
    let sizes = [tiers.hot.len(), tiers.neutral.len(), tiers.cold.len()];
    let take = resolve_profile(profile, sizes);

    let mut picked: Vec<u8> = Vec::with_capacity(PICK_COUNT);
    for (group, &wanted) in [&tiers.hot, &tiers.neutral, &tiers.cold]
        .iter()
        .zip(take.iter())
    {
        let mut shuffled = group.to_vec();
        shuffled.shuffle(rng);
        for &num in shuffled.iter().take(wanted) {
            if picked.len() < PICK_COUNT && !picked.contains(&num) {
                picked.push(num);
            }
        }
    }

    // Échappatoire documentée : si le profil ajusté n'atteint pas 6 numéros,
    // repli sur un tirage aléatoire pur dans le pool complet
    if picked.len() < PICK_COUNT {
        return random_combination(pool, rng);
    }

    let mut combo = [0u8; PICK_COUNT];
    combo.copy_from_slice(&picked[..PICK_COUNT]);
    combo.sort();
    combo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Draw;

    fn request(excluded: Vec<u8>, count: usize, strategy: Strategy) -> GenerationRequest {
        GenerationRequest {
            excluded,
            count,
            strategy,
        }
    }

    fn empty_freq() -> FrequencyTable {
        FrequencyTable::compute(&[])
    }

    fn assert_valid_combination(combo: &Combination, excluded: &[u8]) {
        for w in combo.windows(2) {
            assert!(w[0] < w[1], "combinaison non triée ou avec doublon : {:?}", combo);
        }
        for &n in combo {
            assert!((1..=POOL_MAX).contains(&n), "numéro hors plage : {}", n);
            assert!(!excluded.contains(&n), "numéro exclu présent : {}", n);
        }
    }

    #[test]
    fn test_eligible_pool_excludes() {
        let pool = eligible_pool(&[1, 2, 3]);
        assert_eq!(pool.len(), 42);
        assert!(!pool.contains(&1));
        assert!(pool.contains(&4));
    }

    #[test]
    fn test_eligible_pool_ignores_out_of_range() {
        let pool = eligible_pool(&[0, 46, 200]);
        assert_eq!(pool.len(), 45);
    }

    #[test]
    fn test_insufficient_pool_rejected() {
        let excluded: Vec<u8> = (1..=40).collect();
        let req = request(excluded, 5, Strategy::Random);
        let err = generate(&req, &empty_freq(), Some(1)).unwrap_err();
        assert_eq!(err, EngineError::InsufficientPool { available: 5 });
    }

    #[test]
    fn test_random_combinations_valid() {
        let excluded = vec![10, 20, 30];
        let req = request(excluded.clone(), 10, Strategy::Random);
        let outcome = generate(&req, &empty_freq(), Some(42)).unwrap();
        assert_eq!(outcome.combinations.len(), 10);
        assert!(!outcome.truncated);
        for combo in &outcome.combinations {
            assert_valid_combination(combo, &excluded);
        }
    }

    #[test]
    fn test_pool_of_exactly_six_forced() {
        // 39 exclusions : le pool restant est utilisé tel quel à chaque fois
        let excluded: Vec<u8> = (1..=39).collect();
        let req = request(excluded, 5, Strategy::Random);
        let outcome = generate(&req, &empty_freq(), Some(7)).unwrap();
        for combo in &outcome.combinations {
            assert_eq!(combo, &[40, 41, 42, 43, 44, 45]);
        }
    }

    #[test]
    fn test_random_allows_duplicate_combinations() {
        // Pool réduit à 6 numéros : toutes les combinaisons sont identiques
        let excluded: Vec<u8> = (1..=39).collect();
        let req = request(excluded, 50, Strategy::Random);
        let outcome = generate(&req, &empty_freq(), Some(3)).unwrap();
        assert_eq!(outcome.combinations.len(), 50);
    }

    #[test]
    fn test_weighted_no_duplicate_combinations() {
        let req = request(vec![], 50, Strategy::Weighted);
        let outcome = generate(&req, &empty_freq(), Some(11)).unwrap();
        for i in 0..outcome.combinations.len() {
            for j in (i + 1)..outcome.combinations.len() {
                assert_ne!(
                    outcome.combinations[i], outcome.combinations[j],
                    "doublon aux indices {} et {}",
                    i, j
                );
            }
        }
        for combo in &outcome.combinations {
            assert_valid_combination(combo, &[]);
        }
    }

    #[test]
    fn test_weighted_truncates_on_exhausted_budget() {
        // Pool de 6 : une seule combinaison possible, le budget s'épuise
        let excluded: Vec<u8> = (1..=39).collect();
        let req = request(excluded, 5, Strategy::Weighted);
        let outcome = generate(&req, &empty_freq(), Some(5)).unwrap();
        assert!(outcome.truncated);
        assert_eq!(outcome.combinations.len(), 1);
        assert_eq!(outcome.requested, 5);
    }

    #[test]
    fn test_count_capped_at_maximum() {
        let req = request(vec![], 500, Strategy::Random);
        let outcome = generate(&req, &empty_freq(), Some(1)).unwrap();
        assert_eq!(outcome.combinations.len(), MAX_COMBINATIONS);
    }

    #[test]
    fn test_seed_determinism() {
        let req = request(vec![5, 6], 8, Strategy::Weighted);
        let a = generate(&req, &empty_freq(), Some(99)).unwrap();
        let b = generate(&req, &empty_freq(), Some(99)).unwrap();
        assert_eq!(a.combinations, b.combinations);
    }

    #[test]
    fn test_weighted_draws_from_all_tiers_with_balanced_profile() {
        let draws = vec![
            Draw {
                round: 1,
                numbers: [1, 2, 3, 4, 5, 6],
                bonus: 7,
            },
            Draw {
                round: 2,
                numbers: [1, 2, 3, 4, 5, 6],
                bonus: 8,
            },
        ];
        let freq = FrequencyTable::compute(&draws);
        let pool = eligible_pool(&[]);
        let tiers = categorize(&pool, &freq);
        let mut rng = StdRng::seed_from_u64(21);
        // Premier profil de la rotation : 2 chauds, 2 neutres, 2 froids
        let combo = weighted_combination(&tiers, &pool, [2, 2, 2], &mut rng);
        let hot = combo.iter().filter(|&&n| tiers.hot.contains(&n)).count();
        let neutral = combo.iter().filter(|&&n| tiers.neutral.contains(&n)).count();
        let cold = combo.iter().filter(|&&n| tiers.cold.contains(&n)).count();
        assert_eq!((hot, neutral, cold), (2, 2, 2));
    }

    #[test]
    fn test_resolve_profile_no_adjustment_needed() {
        assert_eq!(resolve_profile([2, 2, 2], [15, 15, 15]), [2, 2, 2]);
        assert_eq!(resolve_profile([4, 1, 1], [15, 15, 15]), [4, 1, 1]);
    }

    #[test]
    fn test_resolve_profile_deficit_shifts_to_neutral_first() {
        // 4 chauds demandés mais 2 disponibles : le déficit part sur neutre
        assert_eq!(resolve_profile([4, 1, 1], [2, 10, 10]), [2, 3, 1]);
    }

    #[test]
    fn test_resolve_profile_deficit_cascades_to_cold() {
        // Neutre saturé : le reste du déficit tombe sur froid
        assert_eq!(resolve_profile([4, 1, 1], [2, 1, 10]), [2, 1, 3]);
    }

    #[test]
    fn test_resolve_profile_empty_tier() {
        // Profil 3/3/0 avec neutre vide : le déficit va sur froid
        assert_eq!(resolve_profile([3, 3, 0], [3, 0, 10]), [3, 0, 3]);
    }

    #[test]
    fn test_resolve_profile_total_six_when_pool_allows() {
        let take = resolve_profile([1, 1, 4], [2, 2, 2]);
        assert_eq!(take.iter().sum::<usize>(), PICK_COUNT);
    }

    #[test]
    fn test_resolve_profile_short_pool_stays_short() {
        // 5 numéros en tout : impossible d'atteindre 6
        let take = resolve_profile([2, 2, 2], [2, 2, 1]);
        assert_eq!(take, [2, 2, 1]);
    }
}
