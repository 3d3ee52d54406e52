// Team shuffle domain module
// Splits a squad of sixteen into two position- and point-balanced teams

pub mod balancer;
pub mod errors;
pub mod lineup;
pub mod service;

pub use balancer::{BalanceStrategy, TeamBalancer, SQUAD_SIZE, TEAM_SIZE};
pub use errors::{SelectionError, ShuffleError};
pub use lineup::{Formation, TeamSheet, TeamSplit};
pub use service::ShuffleService;
