// src/macros.rs
//
// Small string shorthands used across the crate.

/// Owned `String` from anything `String: From<_>`; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-ish parts into one `String`, e.g.
/// `join!(ACCOUNT_PREFIX, id)` or `join!(group, ".", key)`.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {
        [$(::core::convert::AsRef::<str>::as_ref(&$part)),+].concat()
    };
}

/// Ordered `(key, value)` query pairs; values go through `ToString`.
#[macro_export]
macro_rules! pairs {
    ($($key:expr => $val:expr),* $(,)?) => {
        ::std::vec![$( ($key, ::std::string::ToString::to_string(&$val)) ),*]
    };
}
