//! Error macros for digraph

/// Macro for creating invalid argument errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $reason:expr) => {
        return Err($crate::error::GraphError::invalid_argument(
            $context, $reason,
        ))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}

/// Macro for operations this graph deliberately does not provide
#[macro_export]
macro_rules! bail_not_implemented {
    ($operation:expr) => {
        return Err($crate::error::GraphError::not_implemented($operation))
    };
}
