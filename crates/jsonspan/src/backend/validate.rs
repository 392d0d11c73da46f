use crate::{
    backend::ValueCtx,
    error::Fault,
    parser::{NumberLexeme, StringLexeme, strings},
};

/// Accepts exactly what [`RustContext`](super::RustContext) accepts, without
/// building anything. Number lexemes are fully checked by the scanner, so
/// only string escapes need a second look.
#[derive(Debug, Default, PartialEq, Clone)]
pub(crate) struct ValidateContext;

impl ValueCtx for ValidateContext {
    type Value = ();
    type Array = ();
    type Object = ();
    type Key = ();

    fn value_null(&mut self) {}

    fn value_bool(&mut self, _: bool) {}

    fn value_num(&mut self, _: usize, _: NumberLexeme<'_>) -> Result<(), Fault> {
        Ok(())
    }

    fn value_str(&mut self, s: StringLexeme<'_>) -> Result<(), Fault> {
        strings::validate(s)
    }

    fn array_new(&mut self) {}

    fn array_push(&mut self, (): &mut (), (): ()) {}

    fn array_finish(&mut self, (): ()) {}

    fn object_new(&mut self) {}

    fn object_key(&mut self, key: StringLexeme<'_>) -> Result<(), Fault> {
        strings::validate(key)
    }

    fn object_insert(&mut self, (): &mut (), (): (), (): ()) {}

    fn object_finish(&mut self, (): ()) {}
}
