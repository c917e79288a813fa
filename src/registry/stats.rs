use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryMetrics {
    pub total_routes_registered: usize,
    pub targets_replaced: usize,
}

impl RegistryMetrics {
    pub fn record_insert(&mut self, replaced: bool) {
        self.total_routes_registered += 1;
        if replaced {
            self.targets_replaced += 1;
        }
    }
}
