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
use std::sync::Mutex;
use std::time::Duration;

/// One task's contribution to a [`Report`]: its name and how long it took.
/// Skipped tasks contribute a zero duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub duration: Duration,
}

/// An ordered record of `(task name, elapsed duration)` in task-completion
/// order.
///
/// Appends are guarded by a single mutex so the parallel executor can push
/// entries from multiple worker threads without torn writes; entries within
/// one group may land in any order relative to each other, but groups
/// contribute their entries in group order because the executor waits for an
/// entire group to finish before starting the next one.
#[derive(Debug, Default)]
pub struct Report {
    entries: Mutex<Vec<ReportEntry>>,
}

impl Report {
    pub fn new() -> Report {
        Report::default()
    }

    pub fn push(&self, name: impl Into<String>, duration: Duration) {
        self.entries.lock().unwrap().push(ReportEntry {
            name: name.into(),
            duration,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshots the entries recorded so far, in the order they were
    /// appended.
    pub fn entries(&self) -> Vec<ReportEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_push_order() {
        let report = Report::new();
        report.push("a", Duration::from_millis(1));
        report.push("b", Duration::from_millis(0));

        let entries = report.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a");
        assert_eq!(entries[1].name, "b");
        assert_eq!(entries[1].duration, Duration::from_millis(0));
    }
}
