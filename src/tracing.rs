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

//! Bridge from rendered messages into the `tracing` ecosystem.
//!
//! Enabled by the `tracing` feature. Install [`TracingSink`] with
//! [`crate::sink::set_sink`] to route every emitted message through whatever
//! `tracing` subscriber the application runs.

use crate::level::SeverityLevel;
use crate::render::RenderedMessage;
use crate::sink::Sink;

/// Target attached to every event produced by [`TracingSink`].
pub const TARGET: &str = "gated_log";

/// Forwards messages as `tracing` events.
///
/// Levels map onto `tracing` levels as follows: `Verbose` to `TRACE`,
/// `Debug` to `DEBUG`, `Info` and `Notice` to `INFO`, `Warning` to `WARN` and
/// `Error` to `ERROR`. The trailing blank line of the rendered message is
/// dropped since subscribers terminate events themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub const fn level_for(level: SeverityLevel) -> ::tracing::Level {
        match level {
            SeverityLevel::Verbose => ::tracing::Level::TRACE,
            SeverityLevel::Debug => ::tracing::Level::DEBUG,
            SeverityLevel::Info | SeverityLevel::Notice => ::tracing::Level::INFO,
            SeverityLevel::Warning => ::tracing::Level::WARN,
            SeverityLevel::Error => ::tracing::Level::ERROR,
        }
    }
}

impl Sink for TracingSink {
    fn write(&self, message: &RenderedMessage) {
        let text = message.as_str().trim_end();
        let tag = message.level().tag();
        // `event!` needs its level as a constant.
        match message.level() {
            SeverityLevel::Verbose => ::tracing::trace!(target: TARGET, tag, "{}", text),
            SeverityLevel::Debug => ::tracing::debug!(target: TARGET, tag, "{}", text),
            SeverityLevel::Info | SeverityLevel::Notice => {
                ::tracing::info!(target: TARGET, tag, "{}", text)
            }
            SeverityLevel::Warning => ::tracing::warn!(target: TARGET, tag, "{}", text),
            SeverityLevel::Error => ::tracing::error!(target: TARGET, tag, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CallSite;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(
            TracingSink::level_for(SeverityLevel::Verbose),
            ::tracing::Level::TRACE
        );
        assert_eq!(
            TracingSink::level_for(SeverityLevel::Notice),
            ::tracing::Level::INFO
        );
        assert_eq!(
            TracingSink::level_for(SeverityLevel::Error),
            ::tracing::Level::ERROR
        );
    }

    #[test]
    fn test_forwards_to_subscriber() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(::tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .finish();

        let message = RenderedMessage::compose(
            &CallSite::new("src/net.rs", 12),
            SeverityLevel::Warning,
            format_args!("retrying in {}s", 5),
        );
        ::tracing::subscriber::with_default(subscriber, || TracingSink.write(&message));

        let output = capture.contents();
        assert!(output.contains("WARN"), "{}", output);
        assert!(output.contains("gated_log"), "{}", output);
        assert!(output.contains("[net.rs Line:12]"), "{}", output);
        assert!(output.contains("WARNING: retrying in 5s"), "{}", output);
    }
}
