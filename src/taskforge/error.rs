// Copyright (c) 2017 Jason White
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
use std::fmt;

use failure::Fail;

/// The single error kind returned by every fallible operation in this crate.
///
/// All other errors trickle down into this one. Structural errors (bad
/// registration, a malformed graph) are raised before any user code runs;
/// execution errors wrap whatever a user-supplied action, hook, or handler
/// raised.
#[derive(Fail, Debug, PartialEq)]
pub enum Error {
    /// A task with this name is already registered (case-insensitively).
    #[fail(display = "a task named '{}' is already registered", _0)]
    DuplicateTask(String),

    /// A node with this name is already present in the graph.
    #[fail(display = "node '{}' already exists in the graph", _0)]
    DuplicateNode(String),

    /// An edge from a node to itself was attempted.
    #[fail(display = "'{}' cannot depend on itself", _0)]
    ReflexiveEdge(String),

    /// The inverse of an existing edge was attempted.
    #[fail(
        display = "cannot connect '{}' -> '{}': the inverse edge already exists",
        _0, _1
    )]
    InverseEdge(String, String),

    /// A back-edge was encountered during traversal.
    #[fail(display = "cycle detected while traversing from '{}'", _0)]
    CyclicGraph(String),

    /// A task declared a dependency on a name that was never registered.
    #[fail(
        display = "task '{}' depends on unknown task '{}'",
        task, dependency
    )]
    UnknownDependency { task: String, dependency: String },

    /// `run_target` was given a target that is not a registered task.
    #[fail(display = "unknown target '{}'", _0)]
    UnknownTarget(String),

    /// A required argument was missing or empty.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    /// The target's own criteria denied it from running.
    #[fail(display = "target '{}' was skipped by its own criteria", _0)]
    TargetSkipped(String),

    /// A user-supplied action, hook, or handler failed. This is the catch-all
    /// used by a host `ExecutionStrategy` to lift a foreign error into this
    /// crate's error type.
    #[fail(display = "{}", _0)]
    UserActionFailure(String),
}

impl Error {
    /// Convenience constructor for wrapping an arbitrary user error.
    pub fn user<E: fmt::Display>(err: E) -> Error {
        Error::UserActionFailure(err.to_string())
    }
}
