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

//! # Gated Log
//!
//! Leveled, tagged logging whose suppressed levels are removed from the build
//! instead of being filtered at runtime.
//!
//! ## How it works
//!
//! - **Severity scale**: six ordered levels, [`SeverityLevel::Verbose`] through
//!   [`SeverityLevel::Error`], each with a rank and a display tag.
//! - **Threshold**: a single [`THRESHOLD`] constant per build. Development
//!   builds use `DEBUG`, optimized builds use `WARNING`; the `threshold_*` and
//!   `release_threshold_*` cargo features override either.
//! - **Gate**: every call site compares its level with the threshold inside a
//!   `const` block. A closed gate compiles to nothing, arguments included.
//! - **Emitter**: an open gate renders
//!   `"[<file> Line:<line>]\n<TAG>: <message>\n\n"` and writes it to a
//!   [`sink::Sink`].
//!
//! ## Usage
//!
//! ```
//! use gated_log::{log_debug, log_error, log_warning};
//!
//! let attempts = 3;
//! log_warning!("connection reset, attempt {}", attempts);
//! log_error!("giving up after {} attempts", attempts);
//! log_debug!("state dump: {:?}", vec![1, 2, 3]);
//! ```
//!
//! Messages go to standard error until a sink is installed with
//! [`sink::set_sink`].
//!

#[macro_use]
mod macros;
pub mod config;
pub mod errors;
pub mod gate;
pub mod level;
pub mod render;
pub mod sink;
pub mod threshold;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use config::{BuildConfig, Profile, THRESHOLD};
pub use errors::{ParseLevelError, SinkError};
pub use gate::{enabled, is_active, GateState};
pub use level::SeverityLevel;
pub use render::{CallSite, RenderedMessage};
pub use threshold::Threshold;

#[doc(hidden)]
pub mod __private {
    use crate::render::RenderedMessage;
    use crate::sink::Sink;

    #[inline]
    pub fn emit(message: RenderedMessage) {
        crate::sink::installed().write(&message);
    }
}
