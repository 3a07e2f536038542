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

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use taskforge::{DefaultStrategy, Engine, Error, Executor, TaskBuilder};

fn init() {
    let _ = pretty_env_logger::try_init();
}

fn add_chain(engine: &mut Engine<()>, seen: &Arc<Mutex<Vec<String>>>, names: &[(&str, &[&str])]) {
    for (name, deps) in names {
        let mut builder = TaskBuilder::new(*name);
        for d in *deps {
            builder = builder.depends_on(*d);
        }
        let seen = seen.clone();
        let name = name.to_string();
        builder = builder.does(move |_| {
            seen.lock().unwrap().push(name.clone());
            Ok(())
        });
        engine.add_task(builder.build()).unwrap();
    }
}

#[test]
fn linear_chain_runs_leaf_to_root_in_order() {
    init();
    let mut engine: Engine<()> = Engine::new(Executor::Sequential);
    let seen = Arc::new(Mutex::new(Vec::new()));
    add_chain(&mut engine, &seen, &[("a", &[]), ("b", &["a"]), ("c", &["b"])]);

    let report = engine
        .run_target(&(), &DefaultStrategy, "c")
        .expect("run_target should succeed");

    assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "c"]);
    let names: Vec<String> = report.entries().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn diamond_runs_shared_dependency_once_before_both_branches() {
    init();
    let mut engine: Engine<()> = Engine::new(Executor::Sequential);
    let seen = Arc::new(Mutex::new(Vec::new()));
    add_chain(
        &mut engine,
        &seen,
        &[
            ("a", &[]),
            ("b", &["a"]),
            ("c", &["a"]),
            ("d", &["b", "c"]),
        ],
    );

    let report = engine.run_target(&(), &DefaultStrategy, "d").unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], "a");
    assert_eq!(seen[3], "d");
    assert_eq!(report.len(), 4);
}

#[test]
fn diamond_parallel_groups_independent_middle_nodes() {
    init();
    let mut engine: Engine<()> = Engine::new(Executor::GroupedParallel { workers: 4 });
    let seen = Arc::new(Mutex::new(Vec::new()));
    add_chain(
        &mut engine,
        &seen,
        &[
            ("a", &[]),
            ("b", &["a"]),
            ("c", &["a"]),
            ("d", &["b", "c"]),
        ],
    );

    let report = engine.run_target(&(), &DefaultStrategy, "d").unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.first().unwrap(), "a");
    assert_eq!(seen.last().unwrap(), "d");
    // b and c may land in either order relative to each other.
    let middle: std::collections::HashSet<_> = seen[1..3].iter().cloned().collect();
    let expected: std::collections::HashSet<_> =
        ["b".to_string(), "c".to_string()].into_iter().collect();
    assert_eq!(middle, expected);
    assert_eq!(report.len(), 4);
}

#[test]
fn criterion_skipped_non_target_still_runs_its_dependents() {
    init();
    let mut engine: Engine<()> = Engine::new(Executor::Sequential);

    engine
        .add_task(TaskBuilder::new("a").does(|_| Ok(())).build())
        .unwrap();
    engine
        .add_task(
            TaskBuilder::new("b")
                .depends_on("a")
                .with_criteria(|| false)
                .does(|_| Ok(()))
                .build(),
        )
        .unwrap();
    engine
        .add_task(TaskBuilder::new("c").depends_on("b").does(|_| Ok(())).build())
        .unwrap();

    let report = engine.run_target(&(), &DefaultStrategy, "c").unwrap();

    assert_eq!(report.len(), 3);
    let b = report.entries().into_iter().find(|e| e.name == "b").unwrap();
    assert_eq!(b.duration, std::time::Duration::from_secs(0));
}

#[test]
fn criterion_skipped_target_fails_with_target_skipped() {
    init();
    let mut engine: Engine<()> = Engine::new(Executor::Sequential);

    engine
        .add_task(TaskBuilder::new("a").does(|_| Ok(())).build())
        .unwrap();
    engine
        .add_task(
            TaskBuilder::new("b")
                .depends_on("a")
                .with_criteria(|| false)
                .does(|_| Ok(()))
                .build(),
        )
        .unwrap();

    let teardown_calls = Arc::new(AtomicUsize::new(0));
    let inner = teardown_calls.clone();
    engine.register_teardown_action(Box::new(move |_: &(), exception_was_thrown: bool| {
        assert!(exception_was_thrown);
        inner.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }));

    let err = engine.run_target(&(), &DefaultStrategy, "b").unwrap_err();
    match err {
        Error::TargetSkipped(name) => assert_eq!(name, "b"),
        other => panic!("expected TargetSkipped, got {:?}", other),
    }
    assert_eq!(teardown_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn handled_action_failure_recovers_and_runs_reporter_before_handler() {
    init();
    let mut engine: Engine<()> = Engine::new(Executor::Sequential);

    let order = Arc::new(Mutex::new(Vec::new()));
    let reporter_order = order.clone();
    let handler_order = order.clone();
    let finally_ran = Arc::new(AtomicUsize::new(0));
    let finally_inner = finally_ran.clone();

    engine
        .add_task(
            TaskBuilder::new("a")
                .does(|_| Err(Error::user("boom")))
                .report_error(move |_, _| {
                    reporter_order.lock().unwrap().push("reporter");
                    Ok(())
                })
                .on_error(move |_, _| {
                    handler_order.lock().unwrap().push("handler");
                    Ok(())
                })
                .finally(move |_| {
                    finally_inner.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
                .build(),
        )
        .unwrap();

    let report = engine
        .run_target(&(), &DefaultStrategy, "a")
        .expect("recovered run should succeed");

    assert_eq!(*order.lock().unwrap(), vec!["reporter", "handler"]);
    assert_eq!(finally_ran.load(Ordering::SeqCst), 1);
    assert_eq!(report.len(), 1);
    assert_eq!(report.entries()[0].name, "a");
}

#[test]
fn cycle_fails_and_still_runs_build_teardown() {
    init();
    let mut engine: Engine<()> = Engine::new(Executor::Sequential);

    engine
        .add_task(TaskBuilder::new("a").depends_on("b").does(|_| Ok(())).build())
        .unwrap();
    engine
        .add_task(TaskBuilder::new("b").depends_on("a").does(|_| Ok(())).build())
        .unwrap();

    let teardown_calls = Arc::new(AtomicUsize::new(0));
    let inner = teardown_calls.clone();
    engine.register_teardown_action(Box::new(move |_: &(), exception_was_thrown: bool| {
        assert!(exception_was_thrown);
        inner.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }));

    let err = engine.run_target(&(), &DefaultStrategy, "a").unwrap_err();
    match err {
        Error::CyclicGraph(_) => {}
        other => panic!("expected CyclicGraph, got {:?}", other),
    }
    assert_eq!(teardown_calls.load(Ordering::SeqCst), 1);
}
