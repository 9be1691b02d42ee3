//! Immutable hint configuration consumed by a cost-based distributed query
//! planner to bound search-space exploration and switch plan policies.

pub mod hints;
pub mod session;
