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

//! A task graph execution engine: register named tasks with dependencies,
//! criteria, and lifecycle hooks, then run a chosen target through either a
//! serial or a grouped-parallel executor.

pub mod engine;
pub mod error;
pub mod graph;
pub mod hooks;
pub mod log;
mod name;
pub mod report;
mod runner;
pub mod strategy;
pub mod task;

pub use crate::engine::{Engine, Executor};
pub use crate::error::Error;
pub use crate::graph::{Graph, GraphBuilder};
pub use crate::hooks::{TaskSetupContext, TaskTeardownContext};
pub use crate::log::{DefaultLog, Log};
pub use crate::name::CanonicalName;
pub use crate::report::{Report, ReportEntry};
pub use crate::strategy::{DefaultStrategy, ExecutionStrategy};
pub use crate::task::{Task, TaskBuilder, TaskInfo};
