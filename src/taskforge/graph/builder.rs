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
use crate::name::CanonicalName;
use crate::task::Task;

use super::Graph;

/// Translates a flat task list into a [`Graph`].
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds a graph from the given tasks. For each task, adds its name,
    /// then connects each of its dependencies to it. Fails with
    /// [`Error::UnknownDependency`] if a dependency names a task that isn't
    /// in `tasks`.
    pub fn build<C>(tasks: &[Task<C>]) -> Result<Graph<CanonicalName>, Error> {
        Self::build_from_refs(&tasks.iter().collect::<Vec<_>>())
    }

    /// Same as [`GraphBuilder::build`], but over a list of borrowed tasks --
    /// what the engine has on hand, since its task table owns the tasks.
    pub fn build_from_refs<C>(tasks: &[&Task<C>]) -> Result<Graph<CanonicalName>, Error> {
        let mut graph = Graph::new();

        for task in tasks {
            graph.add(task.name().clone())?;
        }

        for task in tasks {
            for dep in task.dependencies() {
                if !graph.exists(dep) {
                    return Err(Error::UnknownDependency {
                        task: task.name().to_string(),
                        dependency: dep.to_string(),
                    });
                }
                graph.connect(dep.clone(), task.name().clone())?;
            }
        }

        Ok(graph)
    }
}
