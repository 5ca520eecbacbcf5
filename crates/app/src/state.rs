use services::{BankService, SessionRegistry};

/// Shared handler state. Cloning is cheap; everything inside is `Arc`-backed.
#[derive(Clone)]
pub struct AppState {
    registry: SessionRegistry,
}

impl AppState {
    #[must_use]
    pub fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn banks(&self) -> &BankService {
        self.registry.banks()
    }
}
