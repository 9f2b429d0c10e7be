//! Convenience macros for format-style logging and field-set literals.

/// Build a [`Fields`](crate::Fields) map literal.
///
/// ```
/// use logbridge_ports::fields;
///
/// let set = fields! { "k1" => "v1", "count" => 3i64 };
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Fields::new();
        $(
            map.insert(::std::string::String::from($key), $crate::FieldValue::from($value));
        )+
        map
    }};
}

/// Log a debug-level message with format arguments.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

/// Log an info-level message with format arguments.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

/// Log a warn-level message with format arguments.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

/// Log an error-level message with format arguments.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}
