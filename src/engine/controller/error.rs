use thiserror::Error;

use crate::engine::platform::PlatformError;

/// ### English
/// Failures surfaced to the caller of a lifecycle method. Nothing is retried or swallowed.
///
/// ### 中文
/// 返回给生命周期方法调用方的失败。不做重试，也不吞掉错误。
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    /// ### English
    /// Resize/draw issued while no surface generation is live.
    ///
    /// ### 中文
    /// 在没有存活 surface generation 时调用了 resize/draw。
    #[error("{operation} requires a live surface")]
    NoSurface { operation: &'static str },
    /// ### English
    /// Draw requested before the first resize of the generation (ordering contract).
    ///
    /// ### 中文
    /// 在该 generation 第一次 resize 之前请求 draw（违反调用顺序契约）。
    #[error("draw tick before first resize of surface generation {generation}")]
    DrawBeforeResize { generation: u64 },
    #[error("surface generation {generation} is still live and recreation is rejected")]
    AlreadyCreated { generation: u64 },
}
