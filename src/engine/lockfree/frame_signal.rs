use std::sync::atomic::{AtomicBool, Ordering};

/// ### English
/// Coalescing "new frame is ready" flag (dirty-since-last-consume).
///
/// - Multi-producer friendly: any thread may `signal()`.
/// - Single consumer: the render-tick thread `consume()`s with one atomic swap.
/// - Bursts collapse: N signals between two consumes are observed exactly once.
///
/// ### 中文
/// 可合并的“新帧就绪”标记（自上次 consume 以来是否变脏）。
///
/// - 支持多生产者：任意线程都可以 `signal()`。
/// - 单消费者：render tick 线程通过一次原子 swap 执行 `consume()`。
/// - 突发合并：两次 consume 之间的 N 次 signal 只会被观察到一次。
#[derive(Debug, Default)]
pub struct FrameSignal {
    /// ### English
    /// `true` between a producer's set and the next consumer test-and-clear.
    ///
    /// ### 中文
    /// 从生产者置位到下一次消费者 test-and-clear 之间为 `true`。
    dirty: AtomicBool,
}

impl FrameSignal {
    pub const fn new() -> Self {
        Self {
            dirty: AtomicBool::new(false),
        }
    }

    /// ### English
    /// Marks a new frame as available. Idempotent while a notification is already pending.
    ///
    /// The `Release` store pairs with the `Acquire` half of `consume()`, so everything the producer
    /// wrote before signalling is visible to the consumer that observes `true`.
    ///
    /// ### 中文
    /// 标记有新帧可用。若已有待处理通知，则为幂等的 no-op。
    ///
    /// `Release` 写入与 `consume()` 的 `Acquire` 半部配对，消费者观察到 `true` 时能看到生产者此前的写入。
    #[inline]
    pub fn signal(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// ### English
    /// Atomically reads and clears the flag, returning the prior value (consumer thread only).
    ///
    /// ### 中文
    /// 原子地读取并清除标记，返回之前的值（仅消费者线程调用）。
    #[inline]
    pub fn consume(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    /// ### English
    /// Returns whether a notification is pending without clearing it.
    ///
    /// ### 中文
    /// 返回是否有待处理通知（不清除）。
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// ### English
    /// Drops any pending notification (surface teardown).
    ///
    /// ### 中文
    /// 丢弃待处理通知（surface 销毁时使用）。
    #[inline]
    pub(crate) fn clear(&self) {
        self.dirty.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "frame_signal_tests.rs"]
mod tests;
