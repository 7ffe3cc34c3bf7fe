//! Formatting constructors. Nodes built through these macros also record the
//! path of the enclosing function in their origin.

/// Path of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        $crate::origin::trim_closures(name)
    }};
}

/// Build a plain failure from a format string.
///
/// ```
/// let id = 42;
/// let err = faultline::fail!("user {} not found", id);
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        $crate::Error::new_at(
            ::std::format!($($arg)+),
            $crate::Origin::capture_in($crate::__function_name!()),
        )
    };
}

/// Annotate an optional failure with a formatted prefix. An absent failure
/// stays absent.
///
/// ```
/// let err = faultline::annotatef!(Some(faultline::fail!("no rows")), "while user {}", 123);
/// assert_eq!(err.unwrap().to_string(), "while user 123: no rows");
/// ```
#[macro_export]
macro_rules! annotatef {
    ($cause:expr, $($arg:tt)+) => {
        $crate::__private::annotate_at(
            $cause,
            ::std::format!($($arg)+),
            $crate::Origin::capture_in($crate::__function_name!()),
        )
    };
}

/// Build a boundary error around an optional cause with a formatted public
/// message. The message is used as given, even when empty.
///
/// ```
/// let err = faultline::boundaryf!(None::<faultline::Error>, 404, "document {} not found", "doc123");
/// assert_eq!(err.to_string(), "code=404, message=document doc123 not found");
/// ```
#[macro_export]
macro_rules! boundaryf {
    ($cause:expr, $code:expr, $($arg:tt)+) => {
        $crate::__private::boundary_at(
            $cause,
            $code,
            ::std::format!($($arg)+),
            $crate::Origin::capture_in($crate::__function_name!()),
        )
    };
}
