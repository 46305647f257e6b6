/*
Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Call-site macros.
//!
//! Every macro evaluates its gate inside a `const` block. When the gate is
//! closed the formatting, the sink call and all argument expressions sit in a
//! branch that is statically dead, so nothing is evaluated at runtime.
//!
//! Each leveled macro comes in two forms:
//!
//! ```
//! use gated_log::{log_error, sink::MemorySink};
//!
//! // Writes to the process-wide sink (stderr unless one was installed).
//! log_error!("disk {} is full", "/dev/sda1");
//!
//! // Writes to an explicit sink.
//! let sink = MemorySink::new();
//! log_error!(sink: sink, "disk {} is full", "/dev/sda1");
//! ```

/// Gates and emits a tagged message against an explicit threshold.
///
/// `threshold` and the level must be constant expressions. The leveled
/// macros are this macro applied to [`THRESHOLD`](crate::THRESHOLD).
///
/// ```
/// use gated_log::{log_gated, sink::MemorySink, SeverityLevel, Threshold};
///
/// const QUIET: Threshold = Threshold::at(SeverityLevel::Warning);
///
/// let sink = MemorySink::new();
/// log_gated!(threshold: QUIET, sink: sink, SeverityLevel::Info, "dropped");
/// log_gated!(threshold: QUIET, sink: sink, SeverityLevel::Error, "kept");
/// assert_eq!(sink.len(), 1);
/// ```
#[macro_export]
macro_rules! log_gated {
    (threshold: $threshold:expr, sink: $sink:expr, $level:expr, $($arg:tt)+) => {{
        if const { $crate::gate::is_active($level, $threshold) } {
            let message = $crate::render::RenderedMessage::compose(
                &$crate::render::CallSite::new(::core::file!(), ::core::line!()),
                $level,
                ::core::format_args!($($arg)+),
            );
            use $crate::sink::Sink as _;
            (&$sink).write(&message);
        }
    }};
    (threshold: $threshold:expr, $level:expr, $($arg:tt)+) => {{
        if const { $crate::gate::is_active($level, $threshold) } {
            $crate::__private::emit($crate::render::RenderedMessage::compose(
                &$crate::render::CallSite::new(::core::file!(), ::core::line!()),
                $level,
                ::core::format_args!($($arg)+),
            ));
        }
    }};
}

/// Logs at a level given as a constant expression.
///
/// ```
/// use gated_log::{log_at, SeverityLevel};
///
/// const LEVEL: SeverityLevel = SeverityLevel::Notice;
/// log_at!(LEVEL, "cache warmed in {}ms", 12);
/// ```
#[macro_export]
macro_rules! log_at {
    (sink: $sink:expr, $level:expr, $($arg:tt)+) => {
        $crate::log_gated!(threshold: $crate::THRESHOLD, sink: $sink, $level, $($arg)+)
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log_gated!(threshold: $crate::THRESHOLD, $level, $($arg)+)
    };
}

/// Logs with a custom tag in place of the level's own tag.
///
/// The level still decides whether the call site is compiled in.
#[macro_export]
macro_rules! log_tagged {
    (sink: $sink:expr, $level:expr, tag: $tag:expr, $($arg:tt)+) => {{
        if const { $crate::gate::enabled($level) } {
            let message = $crate::render::RenderedMessage::compose_tagged(
                &$crate::render::CallSite::new(::core::file!(), ::core::line!()),
                $level,
                $tag,
                ::core::format_args!($($arg)+),
            );
            use $crate::sink::Sink as _;
            (&$sink).write(&message);
        }
    }};
    ($level:expr, tag: $tag:expr, $($arg:tt)+) => {{
        if const { $crate::gate::enabled($level) } {
            $crate::__private::emit($crate::render::RenderedMessage::compose_tagged(
                &$crate::render::CallSite::new(::core::file!(), ::core::line!()),
                $level,
                $tag,
                ::core::format_args!($($arg)+),
            ));
        }
    }};
}

/// Gated emission of the formatted text alone, without the location and tag frame.
#[macro_export]
macro_rules! log_controlled {
    (sink: $sink:expr, $level:expr, $($arg:tt)+) => {{
        if const { $crate::gate::enabled($level) } {
            let message =
                $crate::render::RenderedMessage::raw($level, ::core::format_args!($($arg)+));
            use $crate::sink::Sink as _;
            (&$sink).write(&message);
        }
    }};
    ($level:expr, $($arg:tt)+) => {{
        if const { $crate::gate::enabled($level) } {
            $crate::__private::emit($crate::render::RenderedMessage::raw(
                $level,
                ::core::format_args!($($arg)+),
            ));
        }
    }};
}

/// The compile-time gate decision for a level, as a `bool` constant.
///
/// ```
/// use gated_log::{log_enabled, SeverityLevel};
///
/// if log_enabled!(SeverityLevel::Debug) {
///     // build an expensive report only when it can be logged
/// }
/// ```
#[macro_export]
macro_rules! log_enabled {
    ($level:expr) => {
        const { $crate::gate::enabled($level) }
    };
}

/// Logs an error. Compiled in unless the threshold is above `ERROR`.
#[macro_export]
macro_rules! log_error {
    (sink: $sink:expr, $($arg:tt)+) => {
        $crate::log_gated!(
            threshold: $crate::THRESHOLD,
            sink: $sink,
            $crate::SeverityLevel::Error,
            $($arg)+
        )
    };
    ($($arg:tt)+) => {
        $crate::log_gated!(threshold: $crate::THRESHOLD, $crate::SeverityLevel::Error, $($arg)+)
    };
}

/// Logs an event that can lead to an error.
#[macro_export]
macro_rules! log_warning {
    (sink: $sink:expr, $($arg:tt)+) => {
        $crate::log_gated!(
            threshold: $crate::THRESHOLD,
            sink: $sink,
            $crate::SeverityLevel::Warning,
            $($arg)+
        )
    };
    ($($arg:tt)+) => {
        $crate::log_gated!(threshold: $crate::THRESHOLD, $crate::SeverityLevel::Warning, $($arg)+)
    };
}

/// Logs an event the user should notice.
#[macro_export]
macro_rules! log_notice {
    (sink: $sink:expr, $($arg:tt)+) => {
        $crate::log_gated!(
            threshold: $crate::THRESHOLD,
            sink: $sink,
            $crate::SeverityLevel::Notice,
            $($arg)+
        )
    };
    ($($arg:tt)+) => {
        $crate::log_gated!(threshold: $crate::THRESHOLD, $crate::SeverityLevel::Notice, $($arg)+)
    };
}

/// Logs a normal event of interest.
#[macro_export]
macro_rules! log_info {
    (sink: $sink:expr, $($arg:tt)+) => {
        $crate::log_gated!(
            threshold: $crate::THRESHOLD,
            sink: $sink,
            $crate::SeverityLevel::Info,
            $($arg)+
        )
    };
    ($($arg:tt)+) => {
        $crate::log_gated!(threshold: $crate::THRESHOLD, $crate::SeverityLevel::Info, $($arg)+)
    };
}

/// Logs debugging information. Compiled out of optimized builds by default.
#[macro_export]
macro_rules! log_debug {
    (sink: $sink:expr, $($arg:tt)+) => {
        $crate::log_gated!(
            threshold: $crate::THRESHOLD,
            sink: $sink,
            $crate::SeverityLevel::Debug,
            $($arg)+
        )
    };
    ($($arg:tt)+) => {
        $crate::log_gated!(threshold: $crate::THRESHOLD, $crate::SeverityLevel::Debug, $($arg)+)
    };
}

/// Logs anything at all. Compiled out unless the threshold is `VERBOSE`.
#[macro_export]
macro_rules! log_verbose {
    (sink: $sink:expr, $($arg:tt)+) => {
        $crate::log_gated!(
            threshold: $crate::THRESHOLD,
            sink: $sink,
            $crate::SeverityLevel::Verbose,
            $($arg)+
        )
    };
    ($($arg:tt)+) => {
        $crate::log_gated!(threshold: $crate::THRESHOLD, $crate::SeverityLevel::Verbose, $($arg)+)
    };
}
