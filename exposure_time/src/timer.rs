// timer.rs - Periodic tick that wakes the UI thread

use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Anything that can be asked to run another UI frame.
pub trait Repaint: Send + 'static {
    fn request_repaint(&self);
}

impl Repaint for egui::Context {
    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Posts a repaint request every `period` until dropped. The tick work itself
/// runs on the UI thread when the frame is drawn.
pub struct TimerDriver {
    runtime: Runtime,
    task: JoinHandle<()>,
}

impl TimerDriver {
    pub fn start(runtime: Runtime, period: Duration, target: impl Repaint) -> Self {
        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                target.request_repaint();
            }
        });
        log::debug!("timer started, period {period:?}");
        Self { runtime, task }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    #[cfg(test)]
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        self.task.abort();
        log::debug!("timer stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct Counter(Arc<AtomicUsize>);

    impl Repaint for Counter {
        fn request_repaint(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn ticks_until_dropped() {
        let runtime = Runtime::new().unwrap();
        let counter = Counter::default();
        let driver = TimerDriver::start(runtime, Duration::from_millis(1), counter.clone());
        assert!(driver.is_running());

        driver.runtime().block_on(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
        });
        assert!(counter.0.load(Ordering::SeqCst) > 1);

        drop(driver);
        let after_drop = counter.0.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(counter.0.load(Ordering::SeqCst), after_drop);
    }
}
