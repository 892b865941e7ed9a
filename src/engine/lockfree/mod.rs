//! ### English
//! Lock-free primitives shared between the producer (camera) and consumer (render tick) threads.
//!
//! ### 中文
//! 生产者（相机）线程与消费者（render tick）线程之间共享的无锁原语。
mod frame_signal;

pub use frame_signal::FrameSignal;
