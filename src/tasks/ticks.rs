//! Tick sources driving the countdown

use std::{future::Future, time::Duration};

use tokio::{
    sync::mpsc,
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};

/// Period between two ticks of a running countdown
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Periodic scheduler that can be armed and disarmed.
///
/// `tick` resolves once per period while armed and never resolves while
/// disarmed.
pub trait TickSource {
    fn arm(&mut self);
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;
    fn tick(&mut self) -> impl Future<Output = ()> + Send;
}

/// Wall-clock ticks backed by a tokio interval
#[derive(Debug)]
pub struct IntervalTicks {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTicks {
    pub fn new(period: Duration) -> Self {
        Self { period, interval: None }
    }
}

impl Default for IntervalTicks {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl TickSource for IntervalTicks {
    fn arm(&mut self) {
        // First fire lands one full period after arming
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending().await,
        }
    }
}

/// Ticks injected by hand through a [`ManualTickTrigger`].
///
/// Ticks triggered while disarmed are dropped.
#[derive(Debug)]
pub struct ManualTicks {
    rx: mpsc::UnboundedReceiver<()>,
    armed: bool,
}

#[derive(Debug, Clone)]
pub struct ManualTickTrigger {
    tx: mpsc::UnboundedSender<()>,
}

pub fn manual_ticks() -> (ManualTicks, ManualTickTrigger) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ManualTicks { rx, armed: false }, ManualTickTrigger { tx })
}

impl ManualTicks {
    fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

impl ManualTickTrigger {
    /// Returns false once the tick source is gone
    pub fn tick(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

impl TickSource for ManualTicks {
    fn arm(&mut self) {
        self.drain();
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.drain();
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }

    async fn tick(&mut self) {
        if !self.armed {
            return std::future::pending().await;
        }
        match self.rx.recv().await {
            Some(()) => {}
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_interval_fires_one_period_after_arming() {
        let mut ticks = IntervalTicks::default();
        assert!(!ticks.is_armed());

        ticks.arm();
        let armed_at = Instant::now();
        ticks.tick().await;
        assert_eq!(armed_at.elapsed(), TICK_PERIOD);

        ticks.tick().await;
        assert_eq!(armed_at.elapsed(), TICK_PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_interval_never_fires() {
        let mut ticks = IntervalTicks::default();
        ticks.arm();
        ticks.disarm();

        let fired = tokio::time::timeout(TICK_PERIOD * 5, ticks.tick()).await;
        assert!(fired.is_err());
    }

    #[tokio::test]
    async fn test_manual_ticks_drop_while_disarmed() {
        let (mut ticks, trigger) = manual_ticks();
        assert!(trigger.tick());

        ticks.arm();
        let stale = tokio::time::timeout(Duration::from_millis(20), ticks.tick()).await;
        assert!(stale.is_err());

        trigger.tick();
        tokio::time::timeout(Duration::from_millis(100), ticks.tick())
            .await
            .expect("armed tick was not delivered");
    }
}
