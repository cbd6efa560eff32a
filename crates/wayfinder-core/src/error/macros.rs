//! Error macros for wayfinder

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WayfinderError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WayfinderError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting an edge before it reaches the graph
#[macro_export]
macro_rules! bail_edge {
    ($from:expr, $to:expr, $reason:expr) => {
        return Err($crate::error::WayfinderError::invalid_edge(
            $from, $to, $reason,
        ))
    };
}
