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
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A task name that compares, hashes, and orders case-insensitively while
/// still remembering how it was originally spelled.
///
/// The graph and the engine both key on this instead of on a bare `String` so
/// that `"Build"` and `"build"` are the same node everywhere, but error
/// messages and reports still show whatever casing the caller registered the
/// task with.
#[derive(Debug, Clone)]
pub struct CanonicalName {
    display: String,
    key: String,
}

impl CanonicalName {
    pub fn new<S: Into<String>>(name: S) -> CanonicalName {
        let display = name.into();
        let key = display.to_lowercase();
        CanonicalName { display, key }
    }

    /// The name as originally given.
    pub fn as_str(&self) -> &str {
        &self.display
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl PartialEq for CanonicalName {
    fn eq(&self, other: &CanonicalName) -> bool {
        self.key == other.key
    }
}

impl Eq for CanonicalName {}

impl Hash for CanonicalName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Ord for CanonicalName {
    fn cmp(&self, other: &CanonicalName) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for CanonicalName {
    fn partial_cmp(&self, other: &CanonicalName) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> From<&'a str> for CanonicalName {
    fn from(s: &'a str) -> CanonicalName {
        CanonicalName::new(s)
    }
}

impl From<String> for CanonicalName {
    fn from(s: String) -> CanonicalName {
        CanonicalName::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_ignoring_case() {
        assert_eq!(CanonicalName::new("Build"), CanonicalName::new("build"));
        assert_eq!(CanonicalName::new("BUILD"), CanonicalName::new("build"));
    }

    #[test]
    fn display_preserves_original_casing() {
        let name = CanonicalName::new("Build");
        assert_eq!(name.as_str(), "Build");
        assert_eq!(name.to_string(), "Build");
    }

    #[test]
    fn orders_by_lowercase_key() {
        let a = CanonicalName::new("a");
        let b = CanonicalName::new("B");
        assert!(a < b);
    }
}
