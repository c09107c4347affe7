//! Error macros for gradebook

/// Macro for rejecting a command-line value
#[macro_export]
macro_rules! bail_invalid {
    ($flag:expr, $value:expr) => {
        return Err($crate::error::GradebookError::InvalidArgument {
            flag: $flag,
            value: $value.to_string(),
        })
    };
}
