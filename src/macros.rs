//! Call-site capturing macros.
//!
//! Each level macro takes either an explicit logger, `info!(logger => a, b)`, or logs
//! through the shared instance, `info!(a, b)`. Items only need `Display`. A trailing
//! `; separator = "-", terminator = "\n"` overrides the configured delimiters.

/// Name of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::logger::call_site::trim_function_path(__type_name_of(__here))
    }};
}

/// [`CallSite`](crate::CallSite) for the location of the macro call.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::std::file!(), $crate::function_name!(), ::std::line!())
    };
}

/// Log at an explicit level. Threshold-checked; error always passes.
#[macro_export]
macro_rules! log {
    ($logger:expr => $level:expr, $($item:expr),* $(,)?) => {
        $logger.log($level, &[$(&$item as &dyn ::std::fmt::Display),*], &$crate::call_site!())
    };
    ($level:expr, $($item:expr),* $(,)?) => {
        $crate::shared().log(
            $level,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            &$crate::call_site!(),
        )
    };
}

/// Info line; dropped in release build mode.
#[macro_export]
macro_rules! info {
    ($logger:expr => $($item:expr),* ; separator = $sep:expr, terminator = $term:expr $(,)?) => {
        $logger.info_with(
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $term,
            &$crate::call_site!(),
        )
    };
    ($logger:expr => $($item:expr),* $(,)?) => {
        $logger.info(&[$(&$item as &dyn ::std::fmt::Display),*], &$crate::call_site!())
    };
    ($($item:expr),* ; separator = $sep:expr, terminator = $term:expr $(,)?) => {
        $crate::shared().info_with(
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $term,
            &$crate::call_site!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::shared().info(&[$(&$item as &dyn ::std::fmt::Display),*], &$crate::call_site!())
    };
}

/// Debug line; dropped in release build mode.
#[macro_export]
macro_rules! debug {
    ($logger:expr => $($item:expr),* ; separator = $sep:expr, terminator = $term:expr $(,)?) => {
        $logger.debug_with(
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $term,
            &$crate::call_site!(),
        )
    };
    ($logger:expr => $($item:expr),* $(,)?) => {
        $logger.debug(&[$(&$item as &dyn ::std::fmt::Display),*], &$crate::call_site!())
    };
    ($($item:expr),* ; separator = $sep:expr, terminator = $term:expr $(,)?) => {
        $crate::shared().debug_with(
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $term,
            &$crate::call_site!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::shared().debug(&[$(&$item as &dyn ::std::fmt::Display),*], &$crate::call_site!())
    };
}

/// Warning line; dropped in release build mode.
#[macro_export]
macro_rules! warning {
    ($logger:expr => $($item:expr),* ; separator = $sep:expr, terminator = $term:expr $(,)?) => {
        $logger.warning_with(
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $term,
            &$crate::call_site!(),
        )
    };
    ($logger:expr => $($item:expr),* $(,)?) => {
        $logger.warning(&[$(&$item as &dyn ::std::fmt::Display),*], &$crate::call_site!())
    };
    ($($item:expr),* ; separator = $sep:expr, terminator = $term:expr $(,)?) => {
        $crate::shared().warning_with(
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $term,
            &$crate::call_site!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::shared().warning(&[$(&$item as &dyn ::std::fmt::Display),*], &$crate::call_site!())
    };
}

/// Error line; always emitted.
#[macro_export]
macro_rules! error {
    ($logger:expr => $($item:expr),* ; separator = $sep:expr, terminator = $term:expr $(,)?) => {
        $logger.error_with(
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $term,
            &$crate::call_site!(),
        )
    };
    ($logger:expr => $($item:expr),* $(,)?) => {
        $logger.error(&[$(&$item as &dyn ::std::fmt::Display),*], &$crate::call_site!())
    };
    ($($item:expr),* ; separator = $sep:expr, terminator = $term:expr $(,)?) => {
        $crate::shared().error_with(
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $term,
            &$crate::call_site!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::shared().error(&[$(&$item as &dyn ::std::fmt::Display),*], &$crate::call_site!())
    };
}
