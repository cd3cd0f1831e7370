//! Proof search over the fact store
//!
//! Two independent strategies share the pool:
//!
//! - **Forward** ([`saturate`]): modus ponens to a fixed point, recording
//!   provenance for every derived fact.
//! - **Backward** ([`BackwardProver`]): depth-bounded goal reduction with
//!   scoped hypotheses, used when forward saturation misses the goal. It
//!   answers yes/no and never writes to the pool.

pub mod backward;
pub mod forward;


pub use backward::{Assumptions, BackwardProver, BackwardStats, DEFAULT_MAX_DEPTH};
pub use forward::{saturate, SaturationConfig, SaturationResult};
