use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel as channel;

/// ### English
/// Runs a tick closure on a dedicated thread at a fixed interval.
///
/// The closure owns everything that must stay on the render thread (GL context, controller). It
/// returns `false` to stop the loop. Missed deadlines are not caught up: a slow tick simply delays
/// the next one.
///
/// ### 中文
/// 在独立线程上以固定间隔运行 tick 闭包。
///
/// 闭包持有所有必须留在 render 线程上的对象（GL 上下文、控制器）。返回 `false` 即停止循环。
/// 错过的截止时间不会补跑：慢 tick 只会推迟下一次 tick。
pub struct FixedIntervalTickDriver {
    /// ### English
    /// Stop channel; `recv_timeout` on the other end doubles as the inter-tick sleep.
    ///
    /// ### 中文
    /// 停止通道；另一端的 `recv_timeout` 同时充当 tick 之间的睡眠。
    stop_tx: channel::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    ticks: Arc<AtomicU64>,
}

impl FixedIntervalTickDriver {
    /// ### English
    /// Spawns the tick thread. The first tick runs immediately.
    ///
    /// ### 中文
    /// 启动 tick 线程。第一次 tick 立即执行。
    pub fn spawn<F>(interval: Duration, tick: F) -> io::Result<Self>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let (stop_tx, stop_rx) = channel::bounded::<()>(1);
        let ticks = Arc::new(AtomicU64::new(0));
        let thread_ticks = ticks.clone();
        let thread = thread::Builder::new()
            .name("CamSurfaceTick".to_string())
            .spawn(move || run_ticks(interval, stop_rx, tick, thread_ticks))?;

        Ok(Self {
            stop_tx,
            thread: Some(thread),
            ticks,
        })
    }

    /// ### English
    /// Convenience constructor from a target frame rate (`0` is treated as `1`).
    ///
    /// ### 中文
    /// 按目标帧率构造的便捷方法（`0` 视为 `1`）。
    pub fn with_fps<F>(target_fps: u32, tick: F) -> io::Result<Self>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let fps = u64::from(target_fps.max(1));
        let nanos = (1_000_000_000u64 / fps).max(1);
        Self::spawn(Duration::from_nanos(nanos), tick)
    }

    /// ### English
    /// Number of ticks completed so far.
    ///
    /// ### 中文
    /// 目前已完成的 tick 数。
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    pub fn is_finished(&self) -> bool {
        self.thread
            .as_ref()
            .is_none_or(|thread| thread.is_finished())
    }

    /// ### English
    /// Stops the loop and joins the thread. Also performed on drop.
    ///
    /// ### 中文
    /// 停止循环并 join 线程。Drop 时也会执行。
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = self.stop_tx.try_send(());
            if thread.join().is_err() {
                log::error!("tick thread panicked");
            }
        }
    }
}

impl Drop for FixedIntervalTickDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_ticks<F>(interval: Duration, stop_rx: channel::Receiver<()>, mut tick: F, ticks: Arc<AtomicU64>)
where
    F: FnMut() -> bool,
{
    let mut deadline = Instant::now();
    loop {
        if !tick() {
            log::debug!("tick closure requested stop");
            return;
        }
        ticks.fetch_add(1, Ordering::Release);

        deadline += interval;
        let now = Instant::now();
        if deadline < now {
            deadline = now;
        }

        match stop_rx.recv_timeout(deadline - now) {
            Err(channel::RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(channel::RecvTimeoutError::Disconnected) => return,
        }
    }
}

#[cfg(test)]
#[path = "fixed_interval_tests.rs"]
mod tests;
