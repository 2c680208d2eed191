use std::sync::Arc;
use lodge_store::app_config::BusinessRules;
use lodge_store::{ReservationDesk, ReservationRepository};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ReservationRepository>,
    pub business_rules: BusinessRules,
}

impl AppState {
    pub fn new(repo: Arc<dyn ReservationRepository>, business_rules: BusinessRules) -> Self {
        Self { repo, business_rules }
    }

    /// Fresh state over the built-in catalog with an empty booking ledger.
    pub fn in_memory(business_rules: BusinessRules) -> Self {
        Self::new(Arc::new(ReservationDesk::default()), business_rules)
    }
}
