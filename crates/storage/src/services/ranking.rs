use crate::dto::leaderboard::LeaderboardEntry;
use crate::models::{LeaderboardRecord, compare_sort_keys, format_time_display, result_sort_key};

/// Orders records fastest first and renders their results.
///
/// Ranks are positional: tied results get consecutive ranks in the order the
/// records were given.
pub fn rank_records(records: Vec<LeaderboardRecord>) -> Vec<LeaderboardEntry> {
    let mut keyed: Vec<(f64, LeaderboardRecord)> = records
        .into_iter()
        .map(|record| (result_sort_key(&record.result), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_sort_keys(*a, *b));

    keyed
        .into_iter()
        .zip(1..)
        .map(|((_, record), rank)| LeaderboardEntry {
            rank,
            display: format_time_display(&record.result),
            name: record.name,
            method: record.method,
            result: record.result,
        })
        .collect()
}
