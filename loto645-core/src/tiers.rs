use crate::frequency::FrequencyTable;

/// Groupe de fréquence d'un numéro au sein d'un pool éligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Hot,
    Neutral,
    Cold,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Hot => write!(f, "CHAUD"),
            Tier::Neutral => write!(f, "NEUTRE"),
            Tier::Cold => write!(f, "FROID"),
        }
    }
}

/// Partition d'un pool éligible en trois groupes de fréquence. Chaque numéro
/// du pool apparaît dans exactement un groupe. Recalculée à chaque demande
/// de génération, jamais mise en cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberTiers {
    pub hot: Vec<u8>,
    pub neutral: Vec<u8>,
    pub cold: Vec<u8>,
}

impl NumberTiers {
    pub fn tier_of(&self, number: u8) -> Option<Tier> {
        if self.hot.contains(&number) {
            Some(Tier::Hot)
        } else if self.neutral.contains(&number) {
            Some(Tier::Neutral)
        } else if self.cold.contains(&number) {
            Some(Tier::Cold)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.hot.len() + self.neutral.len() + self.cold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trie le pool par fréquence décroissante (tri stable : à fréquence égale
/// l'ordre du pool est conservé) puis le découpe en tête (chaud), milieu
/// (neutre) et queue (froid). `group_size = len / 3` : le reste de la
/// division tombe dans le groupe neutre. Moins de 3 numéros : tout en chaud.
pub fn categorize(pool: &[u8], freq: &FrequencyTable) -> NumberTiers {
    if pool.is_empty() {
        return NumberTiers::default();
    }

    let mut sorted = pool.to_vec();
    sorted.sort_by(|a, b| freq.count(*b).cmp(&freq.count(*a)));

    if sorted.len() < 3 {
        return NumberTiers {
            hot: sorted,
            neutral: Vec::new(),
            cold: Vec::new(),
        };
    }

    let group_size = sorted.len() / 3;
    let cold = sorted.split_off(sorted.len() - group_size);
    let neutral = sorted.split_off(group_size);

    NumberTiers {
        hot: sorted,
        neutral,
        cold,
    }
}
