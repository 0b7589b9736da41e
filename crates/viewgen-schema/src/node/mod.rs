mod command;
mod event;
mod method;
mod model;
mod property;

pub use self::command::*;
pub use self::event::*;
pub use self::method::*;
pub use self::model::*;
pub use self::property::*;

use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("generated command name for method '{0}' is empty")]
    EmptyCommandName(String),

    #[error("property name for backing field '{0}' is empty")]
    EmptyPropertyName(String),
}

///
/// ValidateNode
///
/// Structural checks on a built node. Builders uphold these invariants;
/// validation exists for consumers that assemble models by hand.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), NodeError> {
        Ok(())
    }
}
