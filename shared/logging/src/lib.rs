#[cfg(feature = "binary")]
mod init;
#[cfg(feature = "binary")]
mod tests;

#[cfg(feature = "binary")]
pub use init::{LogError, Logger, LoggerBuilder};
#[cfg(feature = "binary")]
pub use tests::for_tests;

pub mod prelude {
    pub use slog::{
        self, b, o, Drain as SlogDrain, FnValue, Key, Level as MyLevel, Record,
        Result as SlogResult, Serializer,
    };

    pub use slog_scope::{self, logger};
}

#[macro_export]
macro_rules! crit {
    ($($args:tt)+) => {
        $crate::prelude::slog::crit!($crate::prelude::slog_scope::logger(), $($args)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($args:tt)+) => {
        $crate::prelude::slog::error!($crate::prelude::slog_scope::logger(), $($args)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($args:tt)+) => {
        $crate::prelude::slog::warn!($crate::prelude::slog_scope::logger(), $($args)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($args:tt)+) => {
        $crate::prelude::slog::info!($crate::prelude::slog_scope::logger(), $($args)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($args:tt)+) => {
        $crate::prelude::slog::debug!($crate::prelude::slog_scope::logger(), $($args)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($($args:tt)+) => {
        $crate::prelude::slog::trace!($crate::prelude::slog_scope::logger(), $($args)+)
    };
}

#[macro_export]
macro_rules! slog_value_debug {
    ($ty:ident) => {
        impl $crate::prelude::slog::Value for $ty {
            fn serialize(
                &self,
                _: &$crate::prelude::slog::Record,
                key: $crate::prelude::slog::Key,
                serializer: &mut dyn $crate::prelude::slog::Serializer,
            ) -> $crate::prelude::slog::Result<()> {
                serializer.emit_arguments(key, &format_args!("{:?}", self))
            }
        }
    };
}

#[macro_export]
macro_rules! slog_value_display {
    ($ty:ident) => {
        impl $crate::prelude::slog::Value for $ty {
            fn serialize(
                &self,
                _: &$crate::prelude::slog::Record,
                key: $crate::prelude::slog::Key,
                serializer: &mut dyn $crate::prelude::slog::Serializer,
            ) -> $crate::prelude::slog::Result<()> {
                serializer.emit_arguments(key, &format_args!("{}", self))
            }
        }
    };
}
