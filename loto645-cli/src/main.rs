mod display;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use loto645_core::models::{
    GenerationRequest, Strategy, DEFAULT_COMBINATIONS, MAX_COMBINATIONS, POOL_MAX,
};
use loto645_core::tiers::{categorize, Tier};
use loto645_core::{Engine, EngineError};

use crate::display::{
    display_aggregate, display_combinations, display_frequencies, display_import_summary,
    display_round_reports,
};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum StrategyArg {
    /// Tirage uniforme (mélange de Fisher-Yates)
    #[default]
    Aleatoire,
    /// Pondération chaud/neutre/froid sur les fréquences historiques
    Pondere,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Aleatoire => Strategy::Random,
            StrategyArg::Pondere => Strategy::Weighted,
        }
    }
}

#[derive(Parser)]
#[command(name = "loto645", about = "Générateur et backtester de combinaisons Loto 6/45")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct GenArgs {
    /// Nombre de combinaisons à générer (1-50, défaut si hors plage)
    #[arg(short, long, default_value = "5")]
    count: i64,

    /// Stratégie de génération
    #[arg(short, long, default_value = "aleatoire")]
    strategie: StrategyArg,

    /// Numéros à exclure, séparés par des virgules (hors 1-45 : ignorés)
    #[arg(short = 'x', long, value_delimiter = ',')]
    exclure: Vec<u8>,

    /// Seed pour la reproductibilité
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Afficher les fréquences et groupes chaud/neutre/froid
    Stats {
        /// Fichier CSV des tirages historiques
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Générer des combinaisons et les simuler sur tout l'historique
    Generer {
        /// Fichier CSV des tirages historiques
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        gen: GenArgs,
    },

    /// Comparer un lot généré à un tirage précis
    Comparer {
        /// Fichier CSV des tirages historiques
        #[arg(short, long)]
        file: PathBuf,

        /// Numéro du tirage ciblé
        #[arg(short, long)]
        round: u32,

        #[command(flatten)]
        gen: GenArgs,
    },

    /// Analyse croisée : toutes les combinaisons contre tous les tirages
    Analyse {
        /// Fichier CSV des tirages historiques
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        gen: GenArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Stats { file } => cmd_stats(&file),
        Command::Generer { file, gen } => cmd_generer(&file, &gen),
        Command::Comparer { file, round, gen } => cmd_comparer(&file, round, &gen),
        Command::Analyse { file, gen } => cmd_analyse(&file, &gen),
    }
}

/// Hors plage ou négatif : retour au défaut, conformément à la validation
/// de bordure (le moteur n'est jamais saisi d'un nombre invalide).
fn clamp_count(raw: i64) -> usize {
    if (1..=MAX_COMBINATIONS as i64).contains(&raw) {
        raw as usize
    } else {
        DEFAULT_COMBINATIONS
    }
}

fn load_engine(file: &PathBuf) -> Result<Engine> {
    let text =
        fs::read_to_string(file).with_context(|| format!("Impossible de lire {:?}", file))?;
    let mut engine = Engine::new();
    let summary = engine.load_draws(&text)?;
    display_import_summary(&summary);
    Ok(engine)
}

fn generate_batch(engine: &mut Engine, gen: &GenArgs) -> Result<bool> {
    let request = GenerationRequest {
        excluded: gen.exclure.clone(),
        count: clamp_count(gen.count),
        strategy: gen.strategie.into(),
    };

    let outcome = match engine.generate(&request, gen.seed) {
        Ok(outcome) => outcome,
        Err(EngineError::InsufficientPool { available }) => {
            println!(
                "Trop d'exclusions : {} numéros restants, 6 requis. Aucune combinaison générée.",
                available
            );
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    display_combinations(&outcome.combinations);
    if outcome.truncated {
        println!(
            "Budget anti-doublons épuisé : {} combinaisons générées sur {} demandées.",
            outcome.combinations.len(),
            outcome.requested
        );
    }
    Ok(true)
}

fn cmd_stats(file: &PathBuf) -> Result<()> {
    let engine = load_engine(file)?;
    let freq = engine.frequencies();

    let pool: Vec<u8> = (1..=POOL_MAX).collect();
    let tiers = categorize(&pool, &freq);

    let mut rows: Vec<(u8, u32, Tier)> = pool
        .iter()
        .map(|&n| (n, freq.count(n), tiers.tier_of(n).unwrap_or(Tier::Neutral)))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    display_frequencies(&rows);
    Ok(())
}

fn cmd_generer(file: &PathBuf, gen: &GenArgs) -> Result<()> {
    let mut engine = load_engine(file)?;
    if !generate_batch(&mut engine, gen)? {
        return Ok(());
    }
    display_round_reports(&engine.backtest()?);
    Ok(())
}

fn cmd_comparer(file: &PathBuf, round: u32, gen: &GenArgs) -> Result<()> {
    let mut engine = load_engine(file)?;
    if !generate_batch(&mut engine, gen)? {
        return Ok(());
    }

    match engine.compare_round(round) {
        Ok(report) => {
            println!("\n🔍 Comparaison avec le tirage n°{}\n", round);
            display_round_reports(std::slice::from_ref(&report));
        }
        Err(EngineError::RoundNotFound { round }) => {
            println!("Tirage n°{} introuvable dans l'historique.", round);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn cmd_analyse(file: &PathBuf, gen: &GenArgs) -> Result<()> {
    let mut engine = load_engine(file)?;
    if !generate_batch(&mut engine, gen)? {
        return Ok(());
    }

    let report = engine.analyze()?;
    display_aggregate(&report, engine.combinations().len(), engine.draws().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_count_in_range() {
        assert_eq!(clamp_count(1), 1);
        assert_eq!(clamp_count(50), 50);
        assert_eq!(clamp_count(17), 17);
    }

    #[test]
    fn test_clamp_count_out_of_range_falls_back_to_default() {
        assert_eq!(clamp_count(0), DEFAULT_COMBINATIONS);
        assert_eq!(clamp_count(-3), DEFAULT_COMBINATIONS);
        assert_eq!(clamp_count(51), DEFAULT_COMBINATIONS);
    }

    #[test]
    fn test_strategy_arg_mapping() {
        assert_eq!(Strategy::from(StrategyArg::Aleatoire), Strategy::Random);
        assert_eq!(Strategy::from(StrategyArg::Pondere), Strategy::Weighted);
    }
}
