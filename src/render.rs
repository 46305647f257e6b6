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

use crate::level::SeverityLevel;
use std::fmt;

/// Source location of a log call site, captured with `file!()` and `line!()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// A call site at `file` (as given by `file!()`) and `line`.
    pub const fn new(file: &'static str, line: u32) -> Self {
        CallSite { file, line }
    }

    /// The full path as the compiler reported it.
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The final path component, without any directory.
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }

    /// The 1-based line number.
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// A message ready for the sink.
///
/// Tagged messages have the layout
///
/// ```text
/// [<file> Line:<line>]
/// <TAG>: <message>
///
/// ```
///
/// i.e. `"[<file> Line:<line>]\n<TAG>: <message>\n\n"`. A rendered message is
/// created at the moment of emission and handed straight to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    level: SeverityLevel,
    text: String,
}

impl RenderedMessage {
    /// Renders `args` framed by the call site and the level's tag.
    pub fn compose(site: &CallSite, level: SeverityLevel, args: fmt::Arguments<'_>) -> Self {
        Self::compose_tagged(site, level, level.tag(), args)
    }

    /// Like [`RenderedMessage::compose`], printing `tag` instead of the level's own tag.
    pub fn compose_tagged(
        site: &CallSite,
        level: SeverityLevel,
        tag: &str,
        args: fmt::Arguments<'_>,
    ) -> Self {
        RenderedMessage {
            level,
            text: format!(
                "[{} Line:{}]\n{}: {}\n\n",
                site.short_file(),
                site.line(),
                tag,
                args
            ),
        }
    }

    /// The user's text as is, with no location or tag frame.
    pub fn raw(level: SeverityLevel, args: fmt::Arguments<'_>) -> Self {
        RenderedMessage {
            level,
            text: fmt::format(args),
        }
    }

    pub fn level(&self) -> SeverityLevel {
        self.level
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for RenderedMessage {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RenderedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
