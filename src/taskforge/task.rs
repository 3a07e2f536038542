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
use std::fmt;

use crate::error::Error;
use crate::name::CanonicalName;

/// The routine a task performs. Invoked with the caller's opaque build
/// context. Only ever called through an [`crate::strategy::ExecutionStrategy`]
/// -- never directly by the engine.
pub type Action<C> = Box<dyn Fn(&C) -> Result<(), Error> + Send + Sync>;

/// A no-argument predicate deciding whether a task may run.
pub type Criterion = Box<dyn Fn() -> bool + Send + Sync>;

/// Observes a task failure. Its own failure is always swallowed by the
/// runner.
pub type ErrorReporter<C> = Box<dyn Fn(&C, &Error) -> Result<(), Error> + Send + Sync>;

/// Attempts to recover from a task failure. Success converts the failure
/// into a recovery; failure re-surfaces (possibly a different) error.
pub type ErrorHandler<C> = Box<dyn Fn(&C, &Error) -> Result<(), Error> + Send + Sync>;

/// Always invoked after the action/handler, before task teardown.
pub type FinallyHandler<C> = Box<dyn Fn(&C) -> Result<(), Error> + Send + Sync>;

/// Lightweight, cloneable identity of a task, handed to setup/teardown hooks
/// so they don't need to borrow the full [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    pub name: String,
}

/// A named unit of work with optional dependencies, criteria, and error
/// hooks.
pub struct Task<C> {
    name: CanonicalName,
    dependencies: Vec<CanonicalName>,
    criteria: Vec<Criterion>,
    action: Option<Action<C>>,
    error_reporter: Option<ErrorReporter<C>>,
    error_handler: Option<ErrorHandler<C>>,
    finally_handler: Option<FinallyHandler<C>>,
}

impl<C> fmt::Debug for Task<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("dependencies", &self.dependencies)
            .field("criteria", &self.criteria.len())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

impl<C> Task<C> {
    pub fn name(&self) -> &CanonicalName {
        &self.name
    }

    pub fn info(&self) -> TaskInfo {
        TaskInfo {
            name: self.name.to_string(),
        }
    }

    pub fn dependencies(&self) -> &[CanonicalName] {
        &self.dependencies
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn action(&self) -> Option<&Action<C>> {
        self.action.as_ref()
    }

    pub fn error_reporter(&self) -> Option<&ErrorReporter<C>> {
        self.error_reporter.as_ref()
    }

    pub fn error_handler(&self) -> Option<&ErrorHandler<C>> {
        self.error_handler.as_ref()
    }

    pub fn finally_handler(&self) -> Option<&FinallyHandler<C>> {
        self.finally_handler.as_ref()
    }
}

/// Fluent builder returned by `Engine::register_task`.
pub struct TaskBuilder<C> {
    task: Task<C>,
}

impl<C> TaskBuilder<C> {
    pub fn new<S: Into<String>>(name: S) -> TaskBuilder<C> {
        TaskBuilder {
            task: Task {
                name: CanonicalName::new(name.into()),
                dependencies: Vec::new(),
                criteria: Vec::new(),
                action: None,
                error_reporter: None,
                error_handler: None,
                finally_handler: None,
            },
        }
    }

    /// Declares that this task depends on `name`. The name need not be a
    /// registered task yet -- it must exist by the time `run_target` is
    /// invoked.
    pub fn depends_on<S: Into<String>>(mut self, name: S) -> Self {
        self.task.dependencies.push(CanonicalName::new(name.into()));
        self
    }

    /// Adds a predicate that must hold for this task to execute. All
    /// criteria must hold; they are evaluated in the order added.
    pub fn with_criteria<F>(mut self, criterion: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.task.criteria.push(Box::new(criterion));
        self
    }

    /// Sets the task's action.
    pub fn does<F>(mut self, action: F) -> Self
    where
        F: Fn(&C) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.task.action = Some(Box::new(action));
        self
    }

    /// Sets the error handler. A successful handler turns a failing action
    /// into a recovery.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&C, &Error) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.task.error_handler = Some(Box::new(handler));
        self
    }

    /// Sets the error reporter, invoked before the error handler. Its
    /// failures are always swallowed.
    pub fn report_error<F>(mut self, reporter: F) -> Self
    where
        F: Fn(&C, &Error) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.task.error_reporter = Some(Box::new(reporter));
        self
    }

    /// Sets the handler always invoked after the action/handler, before task
    /// teardown.
    pub fn finally<F>(mut self, handler: F) -> Self
    where
        F: Fn(&C) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.task.finally_handler = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> Task<C> {
        self.task
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_dependencies_in_order() {
        let task: Task<()> = TaskBuilder::new("build")
            .depends_on("fetch")
            .depends_on("generate")
            .does(|_| Ok(()))
            .build();

        assert_eq!(task.name().as_str(), "build");
        let deps: Vec<&str> = task.dependencies().iter().map(|d| d.as_str()).collect();
        assert_eq!(deps, vec!["fetch", "generate"]);
    }

    #[test]
    fn criteria_and_hooks_are_stored() {
        let task: Task<()> = TaskBuilder::new("build")
            .with_criteria(|| true)
            .does(|_| Ok(()))
            .report_error(|_, _| Ok(()))
            .on_error(|_, _| Ok(()))
            .finally(|_| Ok(()))
            .build();

        assert_eq!(task.criteria().len(), 1);
        assert!(task.action().is_some());
        assert!(task.error_reporter().is_some());
        assert!(task.error_handler().is_some());
        assert!(task.finally_handler().is_some());
    }
}
