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
use std::time::Duration;

use crate::error::Error;
use crate::task::TaskInfo;

/// Build-level setup, registered once per engine; single-valued, replaced on
/// re-registration.
pub type SetupAction<C> = Box<dyn Fn(&C) -> Result<(), Error> + Send + Sync>;

/// Build-level teardown. Always invoked once task execution has finished (or
/// been skipped entirely because setup failed); told whether an exception is
/// already flying.
pub type TeardownAction<C> = Box<dyn Fn(&C, bool) -> Result<(), Error> + Send + Sync>;

/// Per-task setup, run before a task's action.
pub type TaskSetupAction<C> =
    Box<dyn Fn(&C, &TaskSetupContext) -> Result<(), Error> + Send + Sync>;

/// Per-task teardown, run after a task's action/handler/finally.
pub type TaskTeardownAction<C> =
    Box<dyn Fn(&C, &TaskTeardownContext) -> Result<(), Error> + Send + Sync>;

/// Passed to the task-setup hook.
#[derive(Debug, Clone)]
pub struct TaskSetupContext {
    pub task_info: TaskInfo,
}

/// Passed to the task-teardown hook.
#[derive(Debug, Clone)]
pub struct TaskTeardownContext {
    pub task_info: TaskInfo,
    pub duration: Duration,
    pub skipped: bool,
}
