/// ### English
/// Engine internal modules (frame signal, surface lifecycle, GL texture allocation, tick driving).
///
/// ### 中文
/// 引擎内部模块（帧信号、surface 生命周期、GL 纹理分配、tick 驱动等）。
pub mod bridge;
pub mod controller;
pub mod flags;
pub mod frame;
pub mod lockfree;
pub mod platform;
pub mod refresh;
pub mod rendering;

#[cfg(test)]
pub(crate) mod testing;
