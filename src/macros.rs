// Used instead of `?` on the parser's hot paths. The `?` operator goes
// through `From::from`, which costs compile time for no benefit here since
// every error is already a `crate::Error`.
macro_rules! tri {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}
