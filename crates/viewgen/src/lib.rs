//! ## Crate layout
//! - `events`: runtime event aggregator for loosely coupled viewmodels.
//! - `inspect`: member inspection: markers, argument resolution, naming,
//!   and the two-pass model build.
//! - `schema`: the serializable generation model handed to emission.
//!
//! The `prelude` module mirrors the surface a driver needs to hand member
//! views in and get a generation model back.

pub use viewgen_events as events;
pub use viewgen_inspect as inspect;
pub use viewgen_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use viewgen_inspect::inspect as inspect_members;

///
/// Prelude
///

pub mod prelude {
    pub use crate::events::{EventAggregator, Subscriber};
    pub use crate::inspect::prelude::*;
}
