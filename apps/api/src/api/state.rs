use std::sync::Arc;

use crate::domain::repositories::PlayerRepository;
use crate::domain::shuffle::{ShuffleService, TeamBalancer};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<dyn PlayerRepository>,
    pub balancer: TeamBalancer,
}

impl AppState {
    pub fn new(players: Arc<dyn PlayerRepository>, balancer: TeamBalancer) -> Self {
        Self { players, balancer }
    }

    pub fn shuffle_service(&self) -> ShuffleService {
        ShuffleService::new(self.players.clone(), self.balancer)
    }
}
