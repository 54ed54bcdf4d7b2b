//! Shared handler state.

use spindle_core::Service;

pub struct AppContext {
    pub service: Service,
}

impl AppContext {
    pub fn new(service: Service) -> Self {
        Self { service }
    }
}
