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
mod executor;

pub use self::executor::Executor;

use std::collections::HashMap;

use crate::error::Error;
use crate::graph::GraphBuilder;
use crate::hooks::{SetupAction, TaskSetupAction, TaskTeardownAction, TeardownAction};
use crate::log::{DefaultLog, Log};
use crate::name::CanonicalName;
use crate::report::Report;
use crate::strategy::ExecutionStrategy;
use crate::task::{Task, TaskBuilder};

/// Registers tasks and drives their execution for a chosen target.
///
/// Generic over the opaque build context `C` a host's tasks and hooks need
/// (the engine never inspects it, the same way the teacher's `Build` type
/// never interprets what a rule's command line actually does) and over the
/// diagnostic log `L` it narrates its progress through.
pub struct Engine<C, L = DefaultLog> {
    tasks: HashMap<CanonicalName, Task<C>>,
    order: Vec<CanonicalName>,
    executor: Executor,
    log: L,
    setup: Option<SetupAction<C>>,
    teardown: Option<TeardownAction<C>>,
    task_setup: Option<TaskSetupAction<C>>,
    task_teardown: Option<TaskTeardownAction<C>>,
}

impl<C> Engine<C, DefaultLog> {
    /// Creates an engine that runs tasks with the given executor, logging
    /// diagnostics through the `log` crate's global logger.
    pub fn new(executor: Executor) -> Engine<C, DefaultLog> {
        Engine::with_log(executor, DefaultLog)
    }
}

impl<C, L: Log> Engine<C, L> {
    /// Creates an engine with an explicit [`Log`] implementation, for a host
    /// that wants its own diagnostic narration instead of `DefaultLog`.
    pub fn with_log(executor: Executor, log: L) -> Engine<C, L> {
        Engine {
            tasks: HashMap::new(),
            order: Vec::new(),
            executor,
            log,
            setup: None,
            teardown: None,
            task_setup: None,
            task_teardown: None,
        }
    }

    /// Starts building a task named `name`. Fails with
    /// [`Error::DuplicateTask`] if a task with this name (case-insensitively)
    /// is already registered -- the same check [`Engine::add_task`] makes,
    /// performed up front so the spec-named registration step itself rejects
    /// a collision instead of only catching it once the builder is finished.
    /// The resulting `Task` is not registered until it is handed to
    /// [`Engine::add_task`] -- `TaskBuilder` has no engine handle to register
    /// itself against.
    pub fn register_task<S: Into<String>>(&self, name: S) -> Result<TaskBuilder<C>, Error> {
        let name = name.into();
        let canonical = CanonicalName::new(name.clone());
        if self.tasks.contains_key(&canonical) {
            return Err(Error::DuplicateTask(name));
        }
        Ok(TaskBuilder::new(name))
    }

    /// Adds a fully-built task to the engine. Fails with
    /// [`Error::DuplicateTask`] if a task with this name (case-insensitively)
    /// is already registered.
    pub fn add_task(&mut self, task: Task<C>) -> Result<(), Error> {
        let name = task.name().clone();
        if self.tasks.contains_key(&name) {
            return Err(Error::DuplicateTask(name.to_string()));
        }
        self.order.push(name.clone());
        self.tasks.insert(name, task);
        Ok(())
    }

    pub fn register_setup_action(&mut self, action: SetupAction<C>) {
        self.setup = Some(action);
    }

    pub fn register_teardown_action(&mut self, action: TeardownAction<C>) {
        self.teardown = Some(action);
    }

    pub fn register_task_setup_action(&mut self, action: TaskSetupAction<C>) {
        self.task_setup = Some(action);
    }

    pub fn register_task_teardown_action(&mut self, action: TaskTeardownAction<C>) {
        self.task_teardown = Some(action);
    }

    /// Builds the graph, resolves `target`, and drives execution through the
    /// engine's configured executor. Build setup/teardown always bracket the
    /// run; setup failure skips task execution entirely but teardown is
    /// still invoked, with `exception_was_thrown = true`.
    pub fn run_target<S>(&self, context: &C, strategy: &S, target: &str) -> Result<Report, Error>
    where
        C: Send + Sync,
        S: ExecutionStrategy<C>,
    {
        if target.trim().is_empty() {
            return Err(Error::InvalidArgument("target must not be empty".into()));
        }

        let target = CanonicalName::new(target);
        let report = Report::new();

        let task_list: Vec<&Task<C>> = self
            .order
            .iter()
            .map(|name| self.tasks.get(name).expect("order/tasks out of sync"))
            .collect();

        let graph = GraphBuilder::build_from_refs(&task_list)?;

        if !graph.exists(&target) {
            return Err(Error::UnknownTarget(target.to_string()));
        }

        let mut setup_failure = None;
        if let Some(setup) = &self.setup {
            if let Err(err) = strategy.perform_setup(setup, context) {
                self.log.error(&format!("build setup failed: {}", err));
                setup_failure = Some(err);
            }
        }

        let run_result = if setup_failure.is_none() {
            self.executor.run(
                &graph,
                &target,
                &self.tasks,
                context,
                strategy,
                &self.log,
                self.task_setup.as_ref(),
                self.task_teardown.as_ref(),
                &report,
            )
        } else {
            Ok(())
        };

        let exception_was_thrown = setup_failure.is_some() || run_result.is_err();

        if let Some(teardown) = &self.teardown {
            if let Err(teardown_err) =
                strategy.perform_teardown(teardown, context, exception_was_thrown)
            {
                if !exception_was_thrown {
                    return Err(teardown_err);
                }
                self.log
                    .error(&format!("build teardown failed: {}", teardown_err));
            }
        }

        if let Some(err) = setup_failure {
            return Err(err);
        }
        run_result?;

        Ok(report)
    }
}
