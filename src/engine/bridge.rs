//! ### English
//! Contract toward the externally supplied rendering module.
//!
//! ### 中文
//! 面向外部渲染模块的调用契约。
use dpi::PhysicalSize;

use crate::engine::frame::{ExternalTexture, SurfaceHandle};

/// ### English
/// One-way calls into the rendering module, injected into `RenderSurfaceController` at
/// construction. All calls happen on the render-tick thread.
///
/// Call order per surface generation: `on_created` exactly once, then at least one `on_resized`,
/// then any mix of `on_resized` and `on_draw` (one `on_draw` per tick).
///
/// ### 中文
/// 对渲染模块的单向调用，在构造 `RenderSurfaceController` 时注入。所有调用都发生在 render tick 线程。
///
/// 每个 surface generation 的调用顺序：`on_created` 恰好一次，随后至少一次 `on_resized`，
/// 之后 `on_resized` 与 `on_draw` 任意交替（每个 tick 一次 `on_draw`）。
pub trait RenderModuleBridge {
    fn on_created(&mut self, texture: ExternalTexture, surface: SurfaceHandle);

    fn on_resized(&mut self, size: PhysicalSize<u32>);

    /// ### English
    /// `transform` is borrowed for the duration of the call only.
    ///
    /// ### 中文
    /// `transform` 仅在调用期间被借用。
    fn on_draw(&mut self, transform: &[f32; 16]);
}

impl<B: RenderModuleBridge + ?Sized> RenderModuleBridge for Box<B> {
    fn on_created(&mut self, texture: ExternalTexture, surface: SurfaceHandle) {
        (**self).on_created(texture, surface);
    }

    fn on_resized(&mut self, size: PhysicalSize<u32>) {
        (**self).on_resized(size);
    }

    fn on_draw(&mut self, transform: &[f32; 16]) {
        (**self).on_draw(transform);
    }
}
