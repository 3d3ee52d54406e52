// HTTP handlers grouped by resource

pub mod health;
pub mod players;
pub mod shuffle;
