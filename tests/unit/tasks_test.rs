//! Unit tests for the TaskRunner.
//!
//! Work closures run off-thread while completions are drained on this test
//! thread via `poll`/`run_next`. Timing-sensitive interleavings are pinned
//! down with channel gates instead of sleeps.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::bounded;
use parking_lot::Mutex;

use driftbrowser::tasks::{CancellationToken, TaskRunner};

/// A completed result is handed to the completion on the draining thread.
#[test]
fn test_submit_delivers_result_to_completion() {
    let runner = TaskRunner::new();
    let received = Arc::new(Mutex::new(None));

    let sink = received.clone();
    runner.submit(
        || Ok::<u32, String>(41 + 1),
        move |result| *sink.lock() = Some(result),
    );

    assert!(runner.run_next(Duration::from_secs(5)));
    assert_eq!(*received.lock(), Some(Ok(42)));
}

/// Errors travel the same path as successes.
#[test]
fn test_submit_delivers_errors() {
    let runner = TaskRunner::new();
    let received = Arc::new(Mutex::new(None));

    let sink = received.clone();
    runner.submit(
        || Err::<u32, String>("boom".to_string()),
        move |result| *sink.lock() = Some(result),
    );

    assert!(runner.run_next(Duration::from_secs(5)));
    assert_eq!(*received.lock(), Some(Err("boom".to_string())));
}

/// Work runs on a background thread; the completion runs on the thread
/// that drains it.
#[test]
fn test_threading_contract() {
    let runner = TaskRunner::new();
    let main_thread = thread::current().id();

    let work_thread = Arc::new(Mutex::new(None));
    let completion_thread = Arc::new(Mutex::new(None));

    let work_sink = work_thread.clone();
    let completion_sink = completion_thread.clone();
    runner.submit(
        move || {
            *work_sink.lock() = Some(thread::current().id());
            Ok::<(), ()>(())
        },
        move |_| *completion_sink.lock() = Some(thread::current().id()),
    );

    assert!(runner.run_next(Duration::from_secs(5)));
    assert_ne!(
        work_thread.lock().expect("work should have run"),
        main_thread,
        "Work must not run on the submitting thread"
    );
    assert_eq!(
        completion_thread.lock().expect("completion should have run"),
        main_thread,
        "Completion must run on the draining thread"
    );
}

/// run_next times out quietly when nothing is queued.
#[test]
fn test_run_next_times_out_when_idle() {
    let runner = TaskRunner::new();
    assert!(!runner.run_next(Duration::from_millis(50)));
    assert_eq!(runner.poll(), 0);
}

/// A token cancelled before the worker starts suppresses both the work and
/// the completion.
#[test]
fn test_cancel_before_work_skips_everything() {
    let runner = TaskRunner::new();
    let work_ran = Arc::new(AtomicBool::new(false));
    let completed = Arc::new(AtomicBool::new(false));

    let token = CancellationToken::new();
    token.cancel();

    let work_flag = work_ran.clone();
    let completion_flag = completed.clone();
    runner.submit_cancellable(
        token,
        move || {
            work_flag.store(true, Ordering::SeqCst);
            Ok::<(), ()>(())
        },
        move |_| completion_flag.store(true, Ordering::SeqCst),
    );

    assert!(!runner.run_next(Duration::from_millis(300)));
    assert!(!work_ran.load(Ordering::SeqCst));
    assert!(!completed.load(Ordering::SeqCst));
}

/// Cancelling while the work is in flight lets the work finish but never
/// runs the completion.
#[test]
fn test_cancel_in_flight_suppresses_completion() {
    let runner = TaskRunner::new();
    let (started_tx, started_rx) = bounded::<()>(1);
    let (gate_tx, gate_rx) = bounded::<()>(1);
    let completed = Arc::new(AtomicBool::new(false));

    let completion_flag = completed.clone();
    let token = runner.submit(
        move || {
            started_tx.send(()).unwrap();
            gate_rx.recv().unwrap();
            Ok::<u32, ()>(7)
        },
        move |_| completion_flag.store(true, Ordering::SeqCst),
    );

    started_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("work should have started");
    token.cancel();
    gate_tx.send(()).unwrap();

    // Whether the worker or the drain suppresses it, the callback never runs
    let _ = runner.run_next(Duration::from_millis(500));
    assert!(!completed.load(Ordering::SeqCst));
}

/// An ordered lane runs work and delivers completions in submission order.
#[test]
fn test_ordered_lane_preserves_order() {
    let runner = TaskRunner::new();
    let work_log = Arc::new(Mutex::new(Vec::new()));
    let completion_log = Arc::new(Mutex::new(Vec::new()));

    for i in 0..5u32 {
        let work_sink = work_log.clone();
        let completion_sink = completion_log.clone();
        runner.submit_ordered(
            "lane:test",
            move || {
                work_sink.lock().push(i);
                Ok::<u32, ()>(i)
            },
            move |result| completion_sink.lock().push(result.unwrap()),
        );
    }

    for _ in 0..5 {
        assert!(runner.run_next(Duration::from_secs(5)));
    }
    assert_eq!(*work_log.lock(), vec![0, 1, 2, 3, 4]);
    assert_eq!(*completion_log.lock(), vec![0, 1, 2, 3, 4]);
}

/// A blocked lane does not stall other lanes.
#[test]
fn test_lanes_are_independent() {
    let runner = TaskRunner::new();
    let (gate_tx, gate_rx) = bounded::<()>(1);
    let order = Arc::new(Mutex::new(Vec::new()));

    let slow_sink = order.clone();
    runner.submit_ordered(
        "lane:slow",
        move || {
            gate_rx.recv().unwrap();
            Ok::<&str, ()>("slow")
        },
        move |result| slow_sink.lock().push(result.unwrap()),
    );

    let fast_sink = order.clone();
    runner.submit_ordered(
        "lane:fast",
        move || Ok::<&str, ()>("fast"),
        move |result| fast_sink.lock().push(result.unwrap()),
    );

    // The fast lane's completion arrives while the slow lane is still blocked
    assert!(runner.run_next(Duration::from_secs(5)));
    assert_eq!(*order.lock(), vec!["fast"]);

    gate_tx.send(()).unwrap();
    assert!(runner.run_next(Duration::from_secs(5)));
    assert_eq!(*order.lock(), vec!["fast", "slow"]);
}

/// poll drains everything already queued and reports the count.
#[test]
fn test_poll_drains_queued_completions() {
    let runner = TaskRunner::new();
    let delivered = Arc::new(AtomicUsize::new(0));
    let (done_tx, done_rx) = bounded::<()>(1);

    // Three jobs on one lane, then a flush job; when the flush work runs,
    // the three completions before it are already queued.
    for _ in 0..3 {
        let counter = delivered.clone();
        runner.submit_ordered(
            "lane:poll",
            || Ok::<(), ()>(()),
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
    }
    runner.submit_ordered(
        "lane:poll",
        move || {
            done_tx.send(()).unwrap();
            Ok::<(), ()>(())
        },
        |_| {},
    );

    done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("flush job should run");
    let polled = runner.poll();
    assert!(polled >= 3, "poll should drain the queued completions");
    assert_eq!(delivered.load(Ordering::SeqCst), 3);

    // Drain the flush completion if it was not picked up above
    while runner.run_next(Duration::from_millis(200)) {}
    assert_eq!(runner.poll(), 0);
}

/// A completion bound to a dropped target is skipped without running.
#[test]
fn test_weak_target_dropped_skips_completion() {
    let runner = TaskRunner::new();
    let (gate_tx, gate_rx) = bounded::<()>(1);
    let acked = Arc::new(AtomicBool::new(false));

    let target = Arc::new(AtomicUsize::new(0));
    let ack_flag = acked.clone();
    runner.submit_with_target(
        &target,
        move || {
            gate_rx.recv().unwrap();
            Ok::<u32, ()>(9)
        },
        move |target: &AtomicUsize, result| {
            target.store(result.unwrap() as usize, Ordering::SeqCst);
            ack_flag.store(true, Ordering::SeqCst);
        },
    );

    // Tear the target down before the work can finish
    drop(target);
    gate_tx.send(()).unwrap();

    let _ = runner.run_next(Duration::from_secs(5));
    assert!(!acked.load(Ordering::SeqCst));
}

/// A live target receives the completion.
#[test]
fn test_weak_target_alive_receives_completion() {
    let runner = TaskRunner::new();
    let target = Arc::new(AtomicUsize::new(0));

    runner.submit_with_target(
        &target,
        || Ok::<u32, ()>(9),
        |target: &AtomicUsize, result| target.store(result.unwrap() as usize, Ordering::SeqCst),
    );

    assert!(runner.run_next(Duration::from_secs(5)));
    assert_eq!(target.load(Ordering::SeqCst), 9);
}

/// Dropping the runner joins every worker and lane thread.
#[test]
fn test_drop_joins_outstanding_work() {
    let runner = TaskRunner::new();
    let (gate_tx, gate_rx) = bounded::<()>(1);

    runner.submit(
        move || {
            gate_rx.recv().unwrap();
            Ok::<(), ()>(())
        },
        |_| {},
    );
    runner.submit_ordered("lane:drop", || Ok::<(), ()>(()), |_| {});

    gate_tx.send(()).unwrap();
    // Returning from drop proves the threads were joined
    drop(runner);
}
