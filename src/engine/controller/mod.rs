//! ### English
//! `RenderSurfaceController`: owns the external texture, the platform surface bound to it and the
//! current sampling transform, and drives the created / resized / draw / destroyed lifecycle calls
//! on the render-tick thread.
//!
//! ### 中文
//! `RenderSurfaceController`：持有外部纹理、与之绑定的平台 surface 以及当前采样变换矩阵，
//! 并在 render tick 线程上驱动 created / resized / draw / destroyed 生命周期调用。

mod create;
mod draw;
mod error;
mod state;
mod teardown;

use std::sync::Arc;

use dpi::PhysicalSize;

use crate::engine::bridge::RenderModuleBridge;
use crate::engine::frame::{ExternalTexture, SamplingTransform, SurfaceHandle};
use crate::engine::lockfree::FrameSignal;
use crate::engine::platform::{PlatformSurface, SurfaceHost, TextureAllocator};

pub use error::ControllerError;
pub use state::{FrameStats, SurfaceState};

/// ### English
/// What `on_surface_created` does while a generation is still live (GL context loss/recreation
/// reported without an intervening destroy).
///
/// ### 中文
/// 当仍有存活 generation 时 `on_surface_created` 的行为（GL 上下文丢失/重建且中间没有 destroy）。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecreatePolicy {
    /// ### English
    /// Tear the live generation down (listener, surface, texture), then create a new one.
    ///
    /// ### 中文
    /// 先销毁存活的 generation（监听器、surface、纹理），再创建新的。
    #[default]
    Replace,
    /// ### English
    /// Fail with `ControllerError::AlreadyCreated` and keep the live generation.
    ///
    /// ### 中文
    /// 返回 `ControllerError::AlreadyCreated` 并保留存活的 generation。
    Reject,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ControllerConfig {
    pub recreate: RecreatePolicy,
}

/// ### English
/// Resources of one created → destroyed surface lifetime. Created and invalidated together.
///
/// ### 中文
/// 一次 created → destroyed surface 生命周期内的资源。一同创建、一同失效。
struct SurfaceGeneration<S> {
    id: u64,
    texture: ExternalTexture,
    surface: S,
    /// ### English
    /// Signal set by this generation's producer listener. Never shared with another generation.
    ///
    /// ### 中文
    /// 由本 generation 的生产者监听器置位的信号。绝不与其它 generation 共享。
    signal: Arc<FrameSignal>,
    /// ### English
    /// Only written on the render-tick thread, so it is never observed half-updated.
    ///
    /// ### 中文
    /// 只在 render tick 线程写入，因此不会被观察到写了一半的状态。
    transform: SamplingTransform,
    /// ### English
    /// Last size forwarded in this generation; `None` until the first resize.
    ///
    /// ### 中文
    /// 本 generation 最近一次转发的尺寸；首次 resize 前为 `None`。
    size: Option<PhysicalSize<u32>>,
}

/// ### English
/// Bridges asynchronous frame notifications to the synchronous render tick.
///
/// All methods must be called on the thread that owns the GL context. The only object shared with
/// the producer thread is the per-generation `FrameSignal`.
///
/// ### 中文
/// 将异步的帧通知桥接到同步的 render tick。
///
/// 所有方法都必须在持有 GL 上下文的线程调用。与生产者线程共享的唯一对象是每个 generation 的 `FrameSignal`。
pub struct RenderSurfaceController<A, H, B>
where
    A: TextureAllocator,
    H: SurfaceHost,
    B: RenderModuleBridge,
{
    allocator: A,
    host: H,
    bridge: B,
    config: ControllerConfig,
    state: SurfaceState,
    generation: Option<SurfaceGeneration<H::Surface>>,
    stats: FrameStats,
}

impl<A, H, B> RenderSurfaceController<A, H, B>
where
    A: TextureAllocator,
    H: SurfaceHost,
    B: RenderModuleBridge,
{
    /// ### English
    /// Creates a controller in `Uninitialized`. No GL work happens until `on_surface_created`.
    ///
    /// ### 中文
    /// 创建处于 `Uninitialized` 状态的控制器。在 `on_surface_created` 之前不会进行任何 GL 操作。
    pub fn new(allocator: A, host: H, bridge: B, config: ControllerConfig) -> Self {
        Self {
            allocator,
            host,
            bridge,
            config,
            state: SurfaceState::Uninitialized,
            generation: None,
            stats: FrameStats::default(),
        }
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn texture(&self) -> Option<ExternalTexture> {
        self.generation.as_ref().map(|generation| generation.texture)
    }

    pub fn surface_handle(&self) -> Option<SurfaceHandle> {
        self.generation
            .as_ref()
            .map(|generation| generation.surface.handle())
    }

    pub fn size(&self) -> Option<PhysicalSize<u32>> {
        self.generation.as_ref().and_then(|generation| generation.size)
    }

    /// ### English
    /// Transform that the next draw will forward (unless a pending frame refreshes it first).
    ///
    /// ### 中文
    /// 下一次 draw 将转发的变换矩阵（除非待处理帧先刷新了它）。
    pub fn transform(&self) -> Option<&SamplingTransform> {
        self.generation
            .as_ref()
            .map(|generation| &generation.transform)
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    #[cfg(test)]
    pub(crate) fn frame_signal(&self) -> Option<&Arc<FrameSignal>> {
        self.generation.as_ref().map(|generation| &generation.signal)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
