use serde::{Deserialize, Serialize};

/// Sentinel for thresholds with no limit. Consumers compare `count > threshold`,
/// and no representable count exceeds the maximum, so an unbounded threshold
/// never trips. Kept as a sentinel rather than an `Option` so the comparison
/// stays a plain integer compare.
pub const UNBOUNDED: u64 = u64::MAX;

// Baseline thresholds used by the default hint set
pub const JOIN_ORDER_DP_LIMIT: u64 = 10;
pub const BROADCAST_THRESHOLD: u64 = 10_000_000;
pub const PUSH_GROUPBY_BELOW_SETOP_THRESHOLD: u64 = 10;

// Default per-statement degree-of-parallelism caps
pub const MAX_INSERT_DOP: u64 = 128;
pub const MAX_UPDATE_DOP: u64 = 128;
pub const MAX_SELECT_DOP: u64 = 128;
pub const MAX_DELETE_DOP: u64 = 128;

/// Tunable thresholds and policy switches consulted by the planner during
/// plan search and transformation application. Built once per optimization
/// session and shared read-only; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSet {
    min_partitions_for_sorted_insert: u64,
    join_arity_for_assoc_commute: u64,
    array_expansion_threshold: u64,
    join_order_dp_limit: u64,
    broadcast_threshold: u64,
    enforce_constraints_on_dml: bool,
    push_groupby_below_setop_threshold: u64,
    insert_dop_cap: u64,
    update_dop_cap: u64,
    select_dop_cap: u64,
    delete_dop_cap: u64,
    remove_update_redundant_motion: bool,
    remove_delete_redundant_motion: bool,
}

impl HintSet {
    /// Builds a hint set with every field supplied explicitly. Any combination
    /// of well-typed values is accepted, including zeros and `false`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        min_partitions_for_sorted_insert: u64,
        join_arity_for_assoc_commute: u64,
        array_expansion_threshold: u64,
        join_order_dp_limit: u64,
        broadcast_threshold: u64,
        enforce_constraints_on_dml: bool,
        push_groupby_below_setop_threshold: u64,
        insert_dop_cap: u64,
        update_dop_cap: u64,
        select_dop_cap: u64,
        delete_dop_cap: u64,
        remove_update_redundant_motion: bool,
        remove_delete_redundant_motion: bool,
    ) -> Self {
        Self {
            min_partitions_for_sorted_insert,
            join_arity_for_assoc_commute,
            array_expansion_threshold,
            join_order_dp_limit,
            broadcast_threshold,
            enforce_constraints_on_dml,
            push_groupby_below_setop_threshold,
            insert_dop_cap,
            update_dop_cap,
            select_dop_cap,
            delete_dop_cap,
            remove_update_redundant_motion,
            remove_delete_redundant_motion,
        }
    }

    /// Minimum number of partitions an append-only row-oriented partitioned
    /// table must have before inserts into it get a sort step.
    pub fn min_partitions_for_sorted_insert(&self) -> u64 {
        self.min_partitions_for_sorted_insert
    }

    /// Maximum number of relations in an n-ary join for which join
    /// associativity and commutativity are still explored. Above this the
    /// search space is pruned by skipping both transformations.
    pub fn join_arity_for_assoc_commute(&self) -> u64 {
        self.join_arity_for_assoc_commute
    }

    /// Maximum number of elements in the constant array of a
    /// `(expr) op ANY/ALL (array)` predicate that constraint derivation will
    /// expand. Larger arrays are left unexpanded since expansion cost grows
    /// with the element count in both memory and optimization time.
    pub fn array_expansion_threshold(&self) -> u64 {
        self.array_expansion_threshold
    }

    /// Maximum number of relations in an n-ary join for which join ordering
    /// is searched via dynamic programming.
    pub fn join_order_dp_limit(&self) -> u64 {
        self.join_order_dp_limit
    }

    /// Maximum number of rows the planner may choose to broadcast across
    /// execution nodes.
    pub fn broadcast_threshold(&self) -> u64 {
        self.broadcast_threshold
    }

    /// If true, the planner adds assertion nodes enforcing CHECK and NOT NULL
    /// constraints on inserted/updated values. Otherwise enforcement is left
    /// to the executor.
    pub fn enforce_constraints_on_dml(&self) -> bool {
        self.enforce_constraints_on_dml
    }

    /// Skip pushing group-by below a set operation when the set-op arity is
    /// greater than this.
    pub fn push_groupby_below_setop_threshold(&self) -> u64 {
        self.push_groupby_below_setop_threshold
    }

    pub fn insert_dop_cap(&self) -> u64 {
        self.insert_dop_cap
    }

    pub fn update_dop_cap(&self) -> u64 {
        self.update_dop_cap
    }

    pub fn select_dop_cap(&self) -> u64 {
        self.select_dop_cap
    }

    pub fn delete_dop_cap(&self) -> u64 {
        self.delete_dop_cap
    }

    /// Whether redundant motion nodes are elided from UPDATE plans.
    pub fn remove_update_redundant_motion(&self) -> bool {
        self.remove_update_redundant_motion
    }

    /// Whether redundant motion nodes are elided from DELETE plans.
    pub fn remove_delete_redundant_motion(&self) -> bool {
        self.remove_delete_redundant_motion
    }
}

impl Default for HintSet {
    /// Baseline hint configuration. Leaves sort-on-insert for partitioned
    /// tables disabled by keeping its partition-count trigger unbounded.
    fn default() -> Self {
        Self::new(
            UNBOUNDED, // min_partitions_for_sorted_insert
            UNBOUNDED, // join_arity_for_assoc_commute
            UNBOUNDED, // array_expansion_threshold
            JOIN_ORDER_DP_LIMIT,
            BROADCAST_THRESHOLD,
            true, // enforce_constraints_on_dml
            PUSH_GROUPBY_BELOW_SETOP_THRESHOLD,
            MAX_INSERT_DOP,
            MAX_UPDATE_DOP,
            MAX_SELECT_DOP,
            MAX_DELETE_DOP,
            true, // remove_update_redundant_motion
            true, // remove_delete_redundant_motion
        )
    }
}
