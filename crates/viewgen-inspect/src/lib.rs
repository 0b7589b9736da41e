//! Member inspection for viewmodel binding generation.
//!
//! Input is an ordered, read-only view of one type's members: fields and
//! methods carrying declarative markers with positional and named arguments.
//! Output is the generation model from `viewgen-schema`: properties with
//! their on-change hooks, and commands with their resolved
//! availability-affecting property sets.
//!
//! Inspection is a pure, synchronous transformation. It never aborts:
//! unusable declarations drop the single artifact they describe and leave
//! the rest of the model intact.

pub mod command;
pub(crate) mod helper;
pub mod inspect;
pub mod invalidate;
pub mod marker;
pub mod member;
pub mod naming;
pub mod property;

pub use crate::inspect::inspect;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        inspect::inspect,
        invalidate::InvalidationIndex,
        marker::{Marker, MarkerArg, MarkerKind},
        member::{Member, MemberKind},
    };
    pub(crate) use darling::Error as DarlingError;
    pub use viewgen_schema::prelude::*;
}
