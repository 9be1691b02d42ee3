use crate::hints::HintSet;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Context for one optimization run. Owns the hint set and hands out the
/// shared read-only handle every planning component consults; the hints live
/// exactly as long as the session.
pub struct OptimizerSession {
    id: String,
    hints: Arc<HintSet>,
}

impl OptimizerSession {
    pub fn new(hints: HintSet) -> Self {
        let id = Uuid::new_v4().to_string();
        debug!(
            "optimizer session {} created (join order dp limit {}, broadcast threshold {}, dop caps i/u/s/d {}/{}/{}/{})",
            id,
            hints.join_order_dp_limit(),
            hints.broadcast_threshold(),
            hints.insert_dop_cap(),
            hints.update_dop_cap(),
            hints.select_dop_cap(),
            hints.delete_dop_cap(),
        );
        Self {
            id,
            hints: Arc::new(hints),
        }
    }

    /// Session with the baseline hint configuration, for callers that supply
    /// no explicit hints.
    pub fn with_default_hints() -> Self {
        Self::new(HintSet::default())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Shared handle to this session's hints. Clone the `Arc` to pass it into
    /// a planning component.
    pub fn hints(&self) -> &Arc<HintSet> {
        &self.hints
    }
}
