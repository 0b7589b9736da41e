use crate::{helper::token_text, prelude::*};
use syn::Type;

///
/// MemberKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemberKind {
    Field,
    Method,
}

///
/// Member
///
/// One entry of the read-only member view handed in by the symbol provider.
/// Markers appear in declaration order.
///

#[derive(Clone, Debug)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,

    /// Declared type, fields only. Opaque to inspection.
    pub ty: Option<Type>,

    pub markers: Vec<Marker>,
}

impl Member {
    #[must_use]
    pub fn field(name: impl Into<String>, ty: Type, markers: Vec<Marker>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            ty: Some(ty),
            markers,
        }
    }

    #[must_use]
    pub fn method(name: impl Into<String>, markers: Vec<Marker>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Method,
            ty: None,
            markers,
        }
    }

    /// First marker of the given kind, for the non-repeatable kinds.
    #[must_use]
    pub fn first_marker(&self, kind: MarkerKind) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == kind)
    }

    /// All markers of the given kind, in declaration order.
    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |m| m.kind == kind)
    }

    /// Rendered declared type, the opaque reference carried into the model.
    #[must_use]
    pub fn type_text(&self) -> Option<String> {
        self.ty.as_ref().map(token_text)
    }
}
