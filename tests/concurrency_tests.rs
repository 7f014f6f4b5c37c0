// ============================================================================
// Concurrency Tests
// A single Calculator shared across threads without coordination
// ============================================================================

use calculator::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Default)]
struct CountingEventHandler {
    evaluated: AtomicUsize,
    rejected: AtomicUsize,
}

impl EventHandler for CountingEventHandler {
    fn on_event(&self, event: OperationEvent) {
        if event.is_rejection() {
            self.rejected.fetch_add(1, Ordering::Relaxed);
        } else {
            self.evaluated.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[test]
fn shared_calculator_across_threads() {
    const THREADS: usize = 8;
    const ITERATIONS: usize = 1_000;

    let handler = Arc::new(CountingEventHandler::default());
    let calc = Arc::new(
        CalculatorBuilder::new("shared")
            .build(handler.clone())
            .unwrap(),
    );

    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let calc = Arc::clone(&calc);
            thread::spawn(move || {
                for i in 0..ITERATIONS {
                    let a = (t * ITERATIONS + i) as f64;
                    assert_eq!(calc.add(a, 1.0), a + 1.0);
                    assert_eq!(calc.divide(a, 2.0), Ok(a / 2.0));
                    assert_eq!(calc.divide(a, 0.0), Err(ArithmeticError::InvalidOperation));
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(handler.evaluated.load(Ordering::Relaxed), THREADS * ITERATIONS * 2);
    assert_eq!(handler.rejected.load(Ordering::Relaxed), THREADS * ITERATIONS);
}

#[test]
fn calculator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Calculator>();
    assert_send_sync::<ArithmeticError>();
    assert_send_sync::<Operation>();
}
