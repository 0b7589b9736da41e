use proc_macro2::TokenStream;
use quote::ToTokens;

// Token rendering helpers

/// Render a syntax node's tokens back to text.
///
/// This is how names written as unresolvable expressions (forward
/// references) and opaque type references cross into the string-based
/// generation model.
pub fn token_text<T: ToTokens>(t: &T) -> String {
    let tokens: TokenStream = t.to_token_stream();

    tokens.to_string()
}
