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

use crate::errors::SinkError;
use crate::render::RenderedMessage;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

/// A destination for rendered log messages.
///
/// The logging core calls [`Sink::write`] once per emitted message,
/// synchronously, on the thread that reached the call site. It does no
/// locking or buffering of its own, so implementations must be safe to call
/// from any thread.
///
/// Any `Fn(&str) + Send + Sync` closure is a sink.
pub trait Sink: Send + Sync {
    fn write(&self, message: &RenderedMessage);
}

impl<F> Sink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn write(&self, message: &RenderedMessage) {
        self(message.as_str())
    }
}

/// Writes messages to standard error. Used when no sink is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, message: &RenderedMessage) {
        let mut stderr = io::stderr().lock();
        // Nowhere left to report a failing stderr.
        let _ = stderr.write_all(message.as_str().as_bytes());
        let _ = stderr.flush();
    }
}

/// Keeps every message in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the messages written so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Removes and returns the messages written so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Sink for MemorySink {
    fn write(&self, message: &RenderedMessage) {
        self.lock().push(message.as_str().to_string());
    }
}

static INSTALLED: OnceLock<Box<dyn Sink>> = OnceLock::new();

/// Installs the process-wide sink used by the logging macros.
///
/// Can only succeed once. Messages emitted before installation go to
/// [`StderrSink`].
pub fn set_sink<S>(sink: S) -> Result<(), SinkError>
where
    S: Sink + 'static,
{
    INSTALLED
        .set(Box::new(sink))
        .map_err(|_| SinkError::AlreadyInstalled)
}

/// The installed sink, or [`StderrSink`] if none was installed.
pub fn installed() -> &'static dyn Sink {
    static FALLBACK: StderrSink = StderrSink;
    match INSTALLED.get() {
        Some(sink) => sink.as_ref(),
        None => &FALLBACK,
    }
}
