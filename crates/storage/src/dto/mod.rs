pub mod leaderboard;
pub mod record;
pub mod seed;
