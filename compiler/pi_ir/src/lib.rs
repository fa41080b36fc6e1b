//! π IR - shared value types for the π language tools.
//!
//! This crate holds the plain data that flows out of the tokenizer:
//! - [`Span`] for source locations
//! - [`TokenKind`], [`Token`] and [`TokenList`] for lexer output
//!
//! It has no dependencies beyond an optional `serde` feature, so renderers
//! and tests can depend on it without pulling in the scanner.
//!
//! Every type is `Clone + Eq + Hash + Debug` and `Send + Sync`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
