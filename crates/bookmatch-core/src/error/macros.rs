//! Error macros for bookmatch

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::BookmatchError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::BookmatchError::UsageError($msg.to_string()))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::BookmatchError::unsupported(
            $context, $value, $supported,
        ))
    };
}
