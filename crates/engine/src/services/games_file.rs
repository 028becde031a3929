use std::collections::BTreeSet;

use crate::models::{Combination, format_numbers, is_valid_number};

/// One `Jogo N: [01, 02, ...] (label)` line per game.
pub fn format_games(games: &[Combination], label: &str) -> String {
    games
        .iter()
        .enumerate()
        .map(|(idx, game)| {
            format!(
                "Jogo {}: [{}] ({})\n",
                idx + 1,
                format_numbers(game.numbers()),
                label
            )
        })
        .collect()
}

/// Reads every line holding a bracketed number list. Numbers outside 1..=25 are
/// ignored; lines that do not end up with 15 to 20 distinct numbers are skipped.
pub fn parse_games(text: &str) -> Vec<Combination> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Combination> {
    let start = line.find('[')?;
    let end = start + line[start..].find(']')?;

    let numbers: BTreeSet<u8> = line[start + 1..end]
        .split(',')
        .filter_map(|token| token.trim().parse::<u8>().ok())
        .filter(|n| is_valid_number(*n))
        .collect();

    Combination::new(numbers).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_games() {
        let games = vec![
            Combination::new(1..=15).unwrap(),
            Combination::new(6..=25).unwrap(),
        ];
        let text = format_games(&games, "Gerado");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Jogo 1: [01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14, 15] (Gerado)"
        );
        assert!(lines[1].starts_with("Jogo 2: [06, 07,"));
    }

    #[test]
    fn test_parse_games_reads_exported_text() {
        let games = vec![
            Combination::new(1..=15).unwrap(),
            Combination::new(3..=20).unwrap(),
        ];
        let text = format!(
            "=== BACKUP ===\n\n{}\nSorteados: 1, 2, 3\n",
            format_games(&games, "Gerado")
        );

        assert_eq!(parse_games(&text), games);
    }

    #[test]
    fn test_parse_games_skips_invalid_lines() {
        let text = "\
Jogo 18 numbers: [01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14, 15, 16, 17, 18]
too short: [1, 2, 3]
too long: [1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20,21]
out of range dropped: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 99]
unclosed [1, 2
no brackets at all
";
        let games = parse_games(text);

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].len(), 18);
        assert_eq!(games[1].numbers(), (1..=15).collect::<Vec<u8>>().as_slice());
    }
}
