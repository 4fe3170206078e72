use crate::error::EngineError;

/// Plus grand numéro jouable.
pub const POOL_MAX: u8 = 45;
/// Nombre de numéros par combinaison.
pub const PICK_COUNT: usize = 6;
/// Nombre maximal de combinaisons par génération.
pub const MAX_COMBINATIONS: usize = 50;
/// Nombre de combinaisons généré par défaut.
pub const DEFAULT_COMBINATIONS: usize = 5;

/// Une combinaison de 6 numéros distincts, triée par ordre croissant.
pub type Combination = [u8; PICK_COUNT];

/// Un tirage historique : numéro de tirage, 6 numéros principaux et un
/// numéro bonus. Immuable une fois parsé.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub round: u32,
    pub numbers: [u8; PICK_COUNT],
    pub bonus: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Weighted,
}

/// Paramètres d'une demande de génération.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Numéros à exclure du pool ; les valeurs hors 1-45 sont ignorées.
    pub excluded: Vec<u8>,
    pub count: usize,
    pub strategy: Strategy,
}

/// Rang de gain d'une combinaison face à un tirage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrizeRank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    None,
}

impl PrizeRank {
    pub fn is_win(&self) -> bool {
        !matches!(self, PrizeRank::None)
    }
}

impl std::fmt::Display for PrizeRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrizeRank::First => write!(f, "1er rang"),
            PrizeRank::Second => write!(f, "2e rang"),
            PrizeRank::Third => write!(f, "3e rang"),
            PrizeRank::Fourth => write!(f, "4e rang"),
            PrizeRank::Fifth => write!(f, "5e rang"),
            PrizeRank::None => write!(f, "Sans gain"),
        }
    }
}

pub fn validate_draw(numbers: &[u8; PICK_COUNT], bonus: u8) -> Result<(), EngineError> {
    for &n in numbers {
        if n < 1 || n > POOL_MAX {
            return Err(EngineError::MalformedRecord(format!(
                "numéro {} hors limites (1-{})",
                n, POOL_MAX
            )));
        }
    }
    if bonus < 1 || bonus > POOL_MAX {
        return Err(EngineError::MalformedRecord(format!(
            "bonus {} hors limites (1-{})",
            bonus, POOL_MAX
        )));
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                return Err(EngineError::MalformedRecord(format!(
                    "numéro en double : {}",
                    numbers[i]
                )));
            }
        }
    }
    if numbers.contains(&bonus) {
        return Err(EngineError::MalformedRecord(format!(
            "bonus {} déjà parmi les numéros principaux",
            bonus
        )));
    }
    Ok(())
}
