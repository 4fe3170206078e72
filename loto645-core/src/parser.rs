use csv::{ReaderBuilder, StringRecord};

use crate::error::EngineError;
use crate::models::{validate_draw, Draw, PICK_COUNT};

/// Bilan d'un import : seules les lignes acceptées deviennent des tirages,
/// les lignes invalides sont comptées mais jamais détaillées.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub total_rows: u32,
    pub accepted: u32,
    pub dropped: u32,
}

/// Parse un blob texte délimité par des virgules : la première ligne est un
/// en-tête ignoré, chaque ligne suivante est `tirage,n1..n6,bonus`. Les
/// lignes à moins de 8 champs ou à champ non entier sont ignorées en silence.
pub fn parse_draws(text: &str) -> (Vec<Draw>, ImportSummary) {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut draws = Vec::new();
    let mut summary = ImportSummary::default();

    for record in reader.records() {
        summary.total_rows += 1;
        let parsed = record
            .map_err(|e| EngineError::MalformedRecord(e.to_string()))
            .and_then(|r| parse_record(&r));
        match parsed {
            Ok(draw) => {
                draws.push(draw);
                summary.accepted += 1;
            }
            Err(_) => summary.dropped += 1,
        }
    }

    (draws, summary)
}

fn parse_record(record: &StringRecord) -> Result<Draw, EngineError> {
    if record.len() < 8 {
        return Err(EngineError::MalformedRecord(format!(
            "{} champs, 8 requis",
            record.len()
        )));
    }

    let get_u8 = |idx: usize| -> Result<u8, EngineError> {
        record
            .get(idx)
            .and_then(|s| s.trim().parse::<u8>().ok())
            .ok_or_else(|| EngineError::MalformedRecord(format!("champ {} non entier", idx)))
    };

    let round = record
        .get(0)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&r| r > 0)
        .ok_or_else(|| EngineError::MalformedRecord("numéro de tirage invalide".to_string()))?;

    let mut numbers = [0u8; PICK_COUNT];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = get_u8(i + 1)?;
    }
    let bonus = get_u8(7)?;

    validate_draw(&numbers, bonus)?;
    numbers.sort();

    Ok(Draw {
        round,
        numbers,
        bonus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "tirage,n1,n2,n3,n4,n5,n6,bonus\n";

    #[test]
    fn test_parse_valid_rows() {
        let text = format!("{HEADER}1,3,7,15,22,31,40,9\n2,1,2,3,4,5,6,7\n");
        let (draws, summary) = parse_draws(&text);
        assert_eq!(draws.len(), 2);
        assert_eq!(summary.total_rows, 2);
        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.dropped, 0);
        assert_eq!(draws[0].round, 1);
        assert_eq!(draws[0].numbers, [3, 7, 15, 22, 31, 40]);
        assert_eq!(draws[0].bonus, 9);
    }

    #[test]
    fn test_non_integer_field_dropped() {
        // La ligne au champ « x » est ignorée, seule la première survit
        let text = format!("{HEADER}1,3,7,15,22,31,40,9\n2,x,2,3,4,5,6,7\n");
        let (draws, summary) = parse_draws(&text);
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].round, 1);
        assert_eq!(summary.dropped, 1);
    }

    #[test]
    fn test_short_row_dropped() {
        let text = format!("{HEADER}1,3,7,15,22,31,40\n2,1,2,3,4,5,6,7\n");
        let (draws, summary) = parse_draws(&text);
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].round, 2);
        assert_eq!(summary.dropped, 1);
    }

    #[test]
    fn test_out_of_range_number_dropped() {
        let text = format!("{HEADER}1,3,7,15,22,31,46,9\n");
        let (draws, _) = parse_draws(&text);
        assert!(draws.is_empty());
    }

    #[test]
    fn test_bonus_among_numbers_dropped() {
        let text = format!("{HEADER}1,3,7,15,22,31,40,40\n");
        let (draws, _) = parse_draws(&text);
        assert!(draws.is_empty());
    }

    #[test]
    fn test_round_zero_dropped() {
        let text = format!("{HEADER}0,3,7,15,22,31,40,9\n");
        let (draws, _) = parse_draws(&text);
        assert!(draws.is_empty());
    }

    #[test]
    fn test_numbers_normalized_ascending() {
        let text = format!("{HEADER}1,40,31,22,15,7,3,9\n");
        let (draws, _) = parse_draws(&text);
        assert_eq!(draws[0].numbers, [3, 7, 15, 22, 31, 40]);
    }

    #[test]
    fn test_duplicate_rounds_coexist() {
        // Pas de déduplication : deux enregistrements du même tirage cohabitent
        let text = format!("{HEADER}5,1,2,3,4,5,6,7\n5,10,11,12,13,14,15,16\n");
        let (draws, summary) = parse_draws(&text);
        assert_eq!(draws.len(), 2);
        assert_eq!(summary.accepted, 2);
        assert_eq!(draws[0].round, draws[1].round);
    }

    #[test]
    fn test_extra_fields_tolerated() {
        let text = format!("{HEADER}1,3,7,15,22,31,40,9,extra,champs\n");
        let (draws, _) = parse_draws(&text);
        assert_eq!(draws.len(), 1);
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let (draws, summary) = parse_draws(HEADER);
        assert!(draws.is_empty());
        assert_eq!(summary.total_rows, 0);
    }
}
