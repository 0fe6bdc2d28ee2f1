/*!
Macro helpers for the lexer and parser.

These macros check internal contracts in tests or when the `checked` cfg is enabled
so broken invariants surface as panics there instead of as quiet `Unreachable` errors.
*/

macro_rules! test_assert {
    ($($tokens:tt)*) => {{
        #[cfg(test)]
        {
            debug_assert!($($tokens)*);
        }
    }};
}

macro_rules! test_unreachable {
    ($($tokens:tt)*) => {
        #[cfg(any(all(debug, test), checked))]
        {
            unreachable!($($tokens)*);
        }
    };
}
