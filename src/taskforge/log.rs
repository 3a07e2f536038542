// Copyright (c) 2018 Jason White
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

/// Diagnostic logging capability consumed by the engine and the task runner.
///
/// Never used for control flow -- only to narrate what the engine is doing.
/// A host that wants colorized output, a progress bar, or a structured event
/// sink supplies its own implementation; [`DefaultLog`] is the crate's
/// baseline, forwarding to the `log` crate's global logger.
pub trait Log: Send + Sync {
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Forwards to `log::error!`/`log::info!`. Whatever logger implementation a
/// host installs (env_logger, a structured subscriber, ...) picks these up
/// for free.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLog;

impl Log for DefaultLog {
    fn error(&self, message: &str) {
        log::error!("{}", message);
    }

    fn info(&self, message: &str) {
        log::info!("{}", message);
    }
}
