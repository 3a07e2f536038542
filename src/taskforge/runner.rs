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
use std::time::Instant;

use crate::error::Error;
use crate::hooks::{TaskSetupAction, TaskSetupContext, TaskTeardownAction, TaskTeardownContext};
use crate::log::Log;
use crate::report::Report;
use crate::strategy::ExecutionStrategy;
use crate::task::Task;

/// Runs a single task to completion against a [`Report`], per the criteria /
/// setup / action / finally / teardown sequence shared by every executor.
///
/// Borrows everything it needs for one `run` call; a fresh `TaskRunner` is
/// cheap to build per node, the way the teacher builds a fresh traversal
/// closure per node rather than threading mutable state between them.
pub struct TaskRunner<'a, C, S: 'a, L: 'a> {
    strategy: &'a S,
    log: &'a L,
    task_setup: Option<&'a TaskSetupAction<C>>,
    task_teardown: Option<&'a TaskTeardownAction<C>>,
    report: &'a Report,
}

impl<'a, C, S, L> TaskRunner<'a, C, S, L>
where
    S: ExecutionStrategy<C>,
    L: Log,
{
    pub fn new(
        strategy: &'a S,
        log: &'a L,
        task_setup: Option<&'a TaskSetupAction<C>>,
        task_teardown: Option<&'a TaskTeardownAction<C>>,
        report: &'a Report,
    ) -> TaskRunner<'a, C, S, L> {
        TaskRunner {
            strategy,
            log,
            task_setup,
            task_teardown,
            report,
        }
    }

    /// Runs `task`, which is the traversal's `target` when `is_target` is
    /// set. Appends a report entry on every path except a propagating
    /// failure.
    pub fn run(&self, task: &Task<C>, context: &C, is_target: bool) -> Result<(), Error> {
        let info = task.info();

        // Step 1: criteria gate.
        if !task.criteria().iter().all(|c| c()) {
            if is_target {
                return Err(Error::TargetSkipped(info.name));
            }

            self.run_task_setup(context, &info)?;
            self.strategy.skip(&info);
            self.run_teardown(context, &info, std::time::Duration::from_secs(0), true, None)?;
            self.report.push(info.name, std::time::Duration::from_secs(0));
            return Ok(());
        }

        // Step 2: clock start.
        let start = Instant::now();

        // Step 3: task setup.
        if let Err(err) = self.run_task_setup(context, &info) {
            self.run_teardown(context, &info, start.elapsed(), false, Some(&err))
                .ok();
            return Err(err);
        }

        // Step 4: action execution, with reporter/handler.
        let outcome = match task.action() {
            Some(action) => self.strategy.execute(action, context),
            None => Ok(()),
        };

        let mut pending = if let Err(err) = outcome {
            self.log.error(&format!("task '{}' failed: {}", info.name, err));

            if let Some(reporter) = task.error_reporter() {
                // Reporter failures are always swallowed.
                let _ = self.strategy.report_error(reporter, context, &err);
            }

            match task.error_handler() {
                Some(handler) => match self.strategy.handle_error(handler, context, &err) {
                    Ok(()) => None,
                    Err(handler_err) => {
                        if handler_err != err {
                            self.log.error(&format!(
                                "task '{}' original failure: {}",
                                info.name, err
                            ));
                        }
                        Some(handler_err)
                    }
                },
                None => Some(err),
            }
        } else {
            None
        };

        // Step 5: finally.
        if let Some(finally) = task.finally_handler() {
            if let Err(finally_err) = self.strategy.invoke_finally(finally, context) {
                pending = Some(finally_err);
            }
        }

        let duration = start.elapsed();
        let had_failure = pending.is_some();

        // Step 6: task teardown.
        let teardown_result = self.run_teardown(context, &info, duration, false, pending.as_ref());

        if let Some(err) = pending {
            return Err(err);
        }
        teardown_result?;

        // Step 7: report.
        if !had_failure {
            self.report.push(info.name, duration);
        }
        Ok(())
    }

    fn run_task_setup(&self, context: &C, info: &crate::task::TaskInfo) -> Result<(), Error> {
        match self.task_setup {
            Some(setup) => {
                let setup_context = TaskSetupContext {
                    task_info: info.clone(),
                };
                self.strategy.perform_task_setup(setup, context, &setup_context)
            }
            None => Ok(()),
        }
    }

    /// Runs the task-teardown hook, if any. `pending` is the failure (if
    /// any) already propagating from the action/handler/finally sequence; a
    /// teardown failure is suppressed and logged when one is already
    /// flying, and propagates otherwise.
    fn run_teardown(
        &self,
        context: &C,
        info: &crate::task::TaskInfo,
        duration: std::time::Duration,
        skipped: bool,
        pending: Option<&Error>,
    ) -> Result<(), Error> {
        let teardown = match self.task_teardown {
            Some(teardown) => teardown,
            None => return Ok(()),
        };

        let teardown_context = TaskTeardownContext {
            task_info: info.clone(),
            duration,
            skipped,
        };

        if let Err(err) = self
            .strategy
            .perform_task_teardown(teardown, context, &teardown_context)
        {
            if pending.is_some() {
                self.log
                    .error(&format!("task '{}' teardown failed: {}", info.name, err));
                Ok(())
            } else {
                Err(err)
            }
        } else {
            Ok(())
        }
    }
}
