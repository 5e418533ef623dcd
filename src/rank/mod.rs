//! Ranking: score-descending order, dense ranks, medals.

use crate::domain::{Medal, RankedRecord, ScoreRecord};

/// Rank records by score descending and annotate the podium.
///
/// Ties keep their relative input order (`sort_by` is stable), which decides
/// both who appears first and who nominally takes a medal. Ranks are dense and
/// 1-based by output position: two groups sharing a score still get distinct
/// consecutive ranks. Medals go to positions 1..=3 only; fewer than three
/// records simply award fewer medals.
pub fn rank_records(records: Vec<ScoreRecord>) -> Vec<RankedRecord> {
    let mut sorted = records;
    sorted.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    sorted
        .into_iter()
        .enumerate()
        .map(|(pos, record)| {
            let rank = pos + 1;
            RankedRecord {
                group: record.group,
                score: record.score,
                rank,
                medal: Medal::for_rank(rank),
                extras: record.extras,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(group: &str, score: f64) -> ScoreRecord {
        ScoreRecord {
            group: group.to_string(),
            score,
            extras: Vec::new(),
        }
    }

    #[test]
    fn orders_by_score_descending() {
        let board = rank_records(vec![
            record("low", 0.2),
            record("high", 0.9),
            record("mid", 0.5),
        ]);
        let groups: Vec<&str> = board.iter().map(|r| r.group.as_str()).collect();
        assert_eq!(groups, vec!["high", "mid", "low"]);
        for pair in board.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn ties_keep_input_order_and_take_distinct_ranks() {
        // A and B share a score; A came first in the input, so A outranks B
        // and takes the gold.
        let board = rank_records(vec![
            record("A", 0.9),
            record("B", 0.9),
            record("C", 0.5),
        ]);

        assert_eq!(board[0].group, "A");
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].medal, Some(Medal::Gold));

        assert_eq!(board[1].group, "B");
        assert_eq!(board[1].rank, 2);
        assert_eq!(board[1].medal, Some(Medal::Silver));

        assert_eq!(board[2].group, "C");
        assert_eq!(board[2].rank, 3);
        assert_eq!(board[2].medal, Some(Medal::Bronze));
    }

    #[test]
    fn medals_are_min_three_or_n() {
        let two = rank_records(vec![record("A", 0.9), record("B", 0.8)]);
        assert_eq!(two[0].medal, Some(Medal::Gold));
        assert_eq!(two[1].medal, Some(Medal::Silver));

        let five = rank_records(vec![
            record("A", 0.9),
            record("B", 0.8),
            record("C", 0.7),
            record("D", 0.6),
            record("E", 0.5),
        ]);
        let medals = five.iter().filter(|r| r.medal.is_some()).count();
        assert_eq!(medals, 3);
        assert_eq!(five[3].medal, None);
        assert_eq!(five[4].medal, None);
    }

    #[test]
    fn ranks_are_a_permutation_of_positions() {
        let board = rank_records(vec![
            record("A", 0.3),
            record("B", 0.7),
            record("C", 0.3),
            record("D", 0.1),
        ]);
        let mut ranks: Vec<usize> = board.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_input_yields_empty_board() {
        assert!(rank_records(Vec::new()).is_empty());
    }
}
