use crate::{helper::token_text, prelude::*};
use darling::ast::NestedMeta;
use derive_more::Display;
use syn::{Attribute, Expr, ExprLit, ExprPath, Lit, Meta, Path};

///
/// MarkerKind
///
/// The closed set of recognized markers. Attributes outside this set are
/// foreign and skipped at the boundary.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum MarkerKind {
    Command,
    CommandInvalidate,
    OnChangeCallMethod,
    OnChangePublishEvent,
    Property,
}

impl MarkerKind {
    /// Matches an attribute path against the closed kind set.
    ///
    /// Bare paths (`#[property]`) and crate-qualified paths
    /// (`#[viewgen::property]`) are recognized; any other qualifier is
    /// foreign.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.segments.len() > 2 {
            return None;
        }
        if path.segments.len() == 2 && path.segments[0].ident != "viewgen" {
            return None;
        }

        let ident = path.segments.last()?.ident.to_string();

        match ident.as_str() {
            "command" => Some(Self::Command),
            "command_invalidate" => Some(Self::CommandInvalidate),
            "on_change_call_method" => Some(Self::OnChangeCallMethod),
            "on_change_publish_event" => Some(Self::OnChangePublishEvent),
            "property" => Some(Self::Property),
            _ => None,
        }
    }

    /// Whether more than one marker of this kind may appear on one member.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(
            self,
            Self::CommandInvalidate | Self::OnChangeCallMethod | Self::OnChangePublishEvent
        )
    }
}

///
/// MarkerArg
///
/// One argument expression from a marker's argument list, kept verbatim.
///
/// Two resolution strategies exist, selected by call site. `value` resolves
/// symbolically and only succeeds for string literals. `source_text` renders
/// the expression's own tokens, so a bare path naming a property this same
/// generation pass produces later (a forward reference with no symbol to
/// look up yet) still resolves to its spelled-out name.
///

#[derive(Clone, Debug)]
pub struct MarkerArg {
    pub expr: Expr,
}

impl MarkerArg {
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr }
    }

    /// Symbolic resolution.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        match &self.expr {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => Some(s.value()),
            _ => None,
        }
    }

    /// Source-text resolution. A string literal yields its content; any
    /// other expression yields its verbatim token text.
    #[must_use]
    pub fn source_text(&self) -> String {
        match &self.expr {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => s.value(),
            expr => token_text(expr),
        }
    }
}

///
/// Marker
///
/// One recognized marker instance: kind, ordered positional arguments, and
/// named arguments in declaration order.
///

#[derive(Clone, Debug)]
pub struct Marker {
    pub kind: MarkerKind,
    pub positional: Vec<MarkerArg>,
    pub named: Vec<(String, MarkerArg)>,
}

impl Marker {
    #[must_use]
    pub const fn new(kind: MarkerKind) -> Self {
        Self {
            kind,
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    /// Parses one attribute at the input boundary.
    ///
    /// Returns `Ok(None)` for foreign attributes. Malformed argument syntax
    /// on a recognized marker is a spanned error for the driver to surface;
    /// it never reaches inspection.
    pub fn from_attribute(attr: &Attribute) -> Result<Option<Self>, DarlingError> {
        let Some(kind) = MarkerKind::from_path(attr.path()) else {
            return Ok(None);
        };

        let mut marker = Self::new(kind);

        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(list) => {
                let nested = NestedMeta::parse_meta_list(list.tokens.clone())
                    .map_err(DarlingError::from)?;

                for item in nested {
                    marker.push_nested(item)?;
                }
            }
            Meta::NameValue(nv) => {
                return Err(DarlingError::custom(format!(
                    "{kind} marker takes a parenthesized argument list"
                ))
                .with_span(nv));
            }
        }

        Ok(Some(marker))
    }

    fn push_nested(&mut self, item: NestedMeta) -> Result<(), DarlingError> {
        match item {
            // positional literal
            NestedMeta::Lit(lit) => {
                self.positional.push(MarkerArg::new(Expr::Lit(ExprLit {
                    attrs: Vec::new(),
                    lit,
                })));
            }
            // positional path, e.g. a forward reference to a generated name
            NestedMeta::Meta(Meta::Path(path)) => {
                self.positional.push(MarkerArg::new(Expr::Path(ExprPath {
                    attrs: Vec::new(),
                    qself: None,
                    path,
                })));
            }
            // named argument
            NestedMeta::Meta(Meta::NameValue(nv)) => {
                let Some(ident) = nv.path.get_ident() else {
                    return Err(
                        DarlingError::custom("named argument key must be an identifier")
                            .with_span(&nv.path),
                    );
                };

                self.named
                    .push((ident.to_string(), MarkerArg::new(nv.value)));
            }
            NestedMeta::Meta(Meta::List(list)) => {
                return Err(DarlingError::custom(format!(
                    "{} marker does not take list arguments",
                    self.kind
                ))
                .with_span(&list));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn first_positional(&self) -> Option<&MarkerArg> {
        self.positional.first()
    }

    /// Last named argument with the given key wins, matching declaration
    /// order semantics for overrides.
    #[must_use]
    pub fn named(&self, key: &str) -> Option<&MarkerArg> {
        self.named
            .iter()
            .rev()
            .find_map(|(k, arg)| (k == key).then_some(arg))
    }
}
