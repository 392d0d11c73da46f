//! Value construction seam between the grammar and its output.
//!
//! The recursive-descent parser only knows the grammar. What it produces for
//! each scalar and container is decided by a [`ValueCtx`]: [`RustContext`]
//! materializes a [`Value`](crate::Value) tree, [`ValidateContext`] checks
//! the same input without allocating anything.

mod rust;
mod validate;

pub(crate) use rust::RustContext;
pub(crate) use validate::ValidateContext;

use crate::{
    error::Fault,
    parser::{NumberLexeme, StringLexeme},
};

pub(crate) trait ValueCtx {
    type Value;
    type Array;
    type Object;
    type Key;

    fn value_null(&mut self) -> Self::Value;
    fn value_bool(&mut self, b: bool) -> Self::Value;
    /// `offset` is where the lexeme starts, for error reporting.
    fn value_num(&mut self, offset: usize, n: NumberLexeme<'_>) -> Result<Self::Value, Fault>;
    fn value_str(&mut self, s: StringLexeme<'_>) -> Result<Self::Value, Fault>;

    fn array_new(&mut self) -> Self::Array;
    fn array_push(&mut self, arr: &mut Self::Array, v: Self::Value);
    fn array_finish(&mut self, arr: Self::Array) -> Self::Value;

    fn object_new(&mut self) -> Self::Object;
    fn object_key(&mut self, key: StringLexeme<'_>) -> Result<Self::Key, Fault>;
    /// Inserting an existing key replaces its value.
    fn object_insert(&mut self, obj: &mut Self::Object, key: Self::Key, v: Self::Value);
    fn object_finish(&mut self, obj: Self::Object) -> Self::Value;
}
