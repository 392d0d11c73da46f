/// Configuration options for the decoder.
///
/// # Examples
///
/// ```rust
/// use jsonspan::{ErrorKind, ParserOptions, parse_with_options};
///
/// let options = ParserOptions { max_depth: 2 };
/// assert!(parse_with_options(b"[[1]]", &options).is_ok());
///
/// let err = parse_with_options(b"[[[1]]]", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of unclosed `{`/`[` containers.
    ///
    /// The decoder recurses once per nesting level, so this bounds stack
    /// usage. Opening a container beyond this depth fails with
    /// [`ErrorKind::NestingTooDeep`](crate::ErrorKind::NestingTooDeep).
    ///
    /// # Default
    ///
    /// `512`
    pub max_depth: usize,
}

impl ParserOptions {
    /// Default value of [`ParserOptions::max_depth`].
    pub const DEFAULT_MAX_DEPTH: usize = 512;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
