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
use crate::error::Error;
use crate::hooks::{SetupAction, TaskSetupAction, TaskSetupContext, TaskTeardownAction, TaskTeardownContext, TeardownAction};
use crate::task::{Action, ErrorHandler, ErrorReporter, FinallyHandler, TaskInfo};

/// The seam through which the engine invokes any user-supplied callable.
///
/// The engine never calls a task's action, a hook, or an error handler
/// directly -- every call is routed through whichever `ExecutionStrategy` the
/// caller supplied to `run_target`. This is what lets a host compose
/// cross-cutting behavior (logging, tracing, a dry-run mode that no-ops
/// every action) without touching the engine itself. Strategies must
/// preserve a failure raised by user code unchanged.
pub trait ExecutionStrategy<C>: Send + Sync {
    fn perform_setup(&self, action: &SetupAction<C>, context: &C) -> Result<(), Error> {
        action(context)
    }

    fn perform_teardown(
        &self,
        action: &TeardownAction<C>,
        context: &C,
        exception_was_thrown: bool,
    ) -> Result<(), Error> {
        action(context, exception_was_thrown)
    }

    fn perform_task_setup(
        &self,
        action: &TaskSetupAction<C>,
        context: &C,
        setup_context: &TaskSetupContext,
    ) -> Result<(), Error> {
        action(context, setup_context)
    }

    fn perform_task_teardown(
        &self,
        action: &TaskTeardownAction<C>,
        context: &C,
        teardown_context: &TaskTeardownContext,
    ) -> Result<(), Error> {
        action(context, teardown_context)
    }

    fn execute(&self, action: &Action<C>, context: &C) -> Result<(), Error> {
        action(context)
    }

    fn skip(&self, _task: &TaskInfo) {}

    fn report_error(&self, reporter: &ErrorReporter<C>, context: &C, error: &Error) -> Result<(), Error> {
        reporter(context, error)
    }

    fn handle_error(
        &self,
        handler: &ErrorHandler<C>,
        context: &C,
        error: &Error,
    ) -> Result<(), Error> {
        handler(context, error)
    }

    fn invoke_finally(&self, handler: &FinallyHandler<C>, context: &C) -> Result<(), Error> {
        handler(context)
    }
}

/// The crate's baseline strategy: calls straight through with no
/// instrumentation, on whatever thread the engine is driving traversal from.
/// Every default method on [`ExecutionStrategy`] already does exactly this,
/// so `DefaultStrategy` is just a marker type a caller can reach for without
/// writing its own impl.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStrategy;

impl<C> ExecutionStrategy<C> for DefaultStrategy {}
