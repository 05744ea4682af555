//! In-memory resource store.
//!
//! One lock per resource kind. Identifier assignment and append happen under
//! the same write guard, so concurrent creates never share an id.

use parking_lot::RwLock;

use loadboard_types::{AiIntegration, NewUpgradeRequest, UpgradeRequest};

#[derive(Debug, Default)]
struct UpgradeRequestTable {
    records: Vec<UpgradeRequest>,
    last_id: u64,
}

/// Process-lifetime storage for both resource kinds, in insertion order.
#[derive(Debug, Default)]
pub struct ResourceStore {
    upgrade_requests: RwLock<UpgradeRequestTable>,
    ai_integrations: RwLock<Vec<AiIntegration>>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with existing records.
    ///
    /// The id counter continues from the number of upgrade requests given.
    pub fn from_records(
        upgrade_requests: Vec<UpgradeRequest>,
        ai_integrations: Vec<AiIntegration>,
    ) -> Self {
        let last_id = upgrade_requests.len() as u64;
        Self {
            upgrade_requests: RwLock::new(UpgradeRequestTable { records: upgrade_requests, last_id }),
            ai_integrations: RwLock::new(ai_integrations),
        }
    }

    /// Store holding the demo records from [`crate::seed`].
    pub fn seeded() -> Self {
        Self::from_records(crate::seed::upgrade_requests(), crate::seed::ai_integrations())
    }

    pub fn list_upgrade_requests(&self) -> Vec<UpgradeRequest> {
        self.upgrade_requests.read().records.clone()
    }

    /// Append a new upgrade request and return it with its assigned id.
    pub fn create_upgrade_request(&self, request: NewUpgradeRequest) -> UpgradeRequest {
        let mut table = self.upgrade_requests.write();
        table.last_id += 1;
        let record = request.into_record(table.last_id.to_string());
        table.records.push(record.clone());
        drop(table);

        tracing::debug!(id = %record.id, title = %record.title, "upgrade request created");
        record
    }

    pub fn upgrade_request_count(&self) -> usize {
        self.upgrade_requests.read().records.len()
    }

    pub fn list_ai_integrations(&self) -> Vec<AiIntegration> {
        self.ai_integrations.read().clone()
    }

    pub fn create_ai_integration(&self, integration: AiIntegration) -> AiIntegration {
        self.ai_integrations.write().push(integration.clone());
        tracing::debug!(name = %integration.name, "AI integration registered");
        integration
    }

    pub fn ai_integration_count(&self) -> usize {
        self.ai_integrations.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.upgrade_request_count() == 0 && self.ai_integration_count() == 0
    }
}
