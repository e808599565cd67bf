//! Recurring autoplay timer.
//!
//! The timer is a tokio task owned by an [`AutoplayTimer`] handle. Dropping
//! or stopping the handle ends the task, and every tick is checked against
//! the playback epoch the timer was started for.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::{
    runtime::Handle,
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, trace};

use super::controller::SlideIndexController;

/// Shortest period a timer will run at. Shorter requests, zero included,
/// are raised to it.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct AutoplayTimer {
    epoch: u64,
    period: Duration,
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl AutoplayTimer {
    /// Start a timer for playback period `epoch` on `runtime`. The first tick
    /// lands one full `period` after the call. `period` is raised to
    /// [`MIN_PERIOD`] when shorter.
    pub fn spawn(
        runtime: &Handle,
        controller: Arc<Mutex<SlideIndexController>>,
        epoch: u64,
        period: Duration,
    ) -> Self {
        let period = period.max(MIN_PERIOD);
        let (stop_tx, stop_rx) = watch::channel(false);
        let task =
            runtime.spawn(autoplay_loop(controller, epoch, period, stop_rx));
        debug!(
            epoch,
            period_ms = period.as_millis() as u64,
            "autoplay timer started"
        );

        Self {
            epoch,
            period,
            stop_tx,
            task,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the timer. Equivalent to dropping it.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(true);
        self.task.abort();
        trace!(epoch = self.epoch, "autoplay timer released");
    }
}

async fn autoplay_loop(
    controller: Arc<Mutex<SlideIndexController>>,
    epoch: u64,
    period: Duration,
    mut stop_rx: watch::Receiver<bool>,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
            }
            _ = ticker.tick() => {
                let advanced = controller.lock().tick(epoch);
                if advanced.is_none() {
                    trace!(epoch, "autoplay period ended");
                    break;
                }
            }
        }
    }
}
