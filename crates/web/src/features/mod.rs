pub mod leaderboard;
pub mod records;
pub mod seed;
