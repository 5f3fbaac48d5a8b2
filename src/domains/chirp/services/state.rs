// Chirp domain state
// Chirp 도메인 상태
use std::sync::Arc;
use crate::shared::config::Config;
use crate::shared::database::ChirpRepository;
use crate::domains::chirp::services::{ChirpService, ProfanityFilter};

/// Chirp domain state
#[derive(Clone)]
pub struct ChirpState {
    pub chirp_service: ChirpService,
}

impl ChirpState {
    pub fn new(config: &Config, chirps: Arc<dyn ChirpRepository>) -> Self {
        Self {
            chirp_service: ChirpService::new(chirps, ProfanityFilter::new(&config.profane_words)),
        }
    }
}
