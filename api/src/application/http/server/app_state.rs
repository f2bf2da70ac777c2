use std::sync::Arc;

use kitchenwise_core::application::KitchenwiseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: KitchenwiseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: KitchenwiseService) -> Self {
        Self { args, service }
    }
}
