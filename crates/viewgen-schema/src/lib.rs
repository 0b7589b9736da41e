//! Generation model for viewmodel binding output.
//!
//! Everything in this crate is plain, owned, serializable data: the result of
//! inspecting one annotated type, handed to the emission layer unmutated. The
//! emission layer must not re-derive names, defaults, or invalidation sets;
//! they are final here.

pub mod node;

use crate::node::NodeError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, node::*};
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    NodeError(#[from] NodeError),
}
