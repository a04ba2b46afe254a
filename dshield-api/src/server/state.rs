// App state for Axum server
use std::sync::Arc;

use dshield_repository::MockDataService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MockDataService>,
}

impl AppState {
    pub fn new(service: Arc<MockDataService>) -> Self {
        Self { service }
    }
}
