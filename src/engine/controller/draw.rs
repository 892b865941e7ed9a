//! ### English
//! Per-tick work: resize forwarding and the coalesced texture refresh + draw.
//!
//! ### 中文
//! 每个 tick 的工作：转发 resize，以及合并后的纹理刷新 + draw。

use dpi::PhysicalSize;

use crate::engine::bridge::RenderModuleBridge;
use crate::engine::platform::{PlatformSurface, SurfaceHost, TextureAllocator};

use super::{ControllerError, RenderSurfaceController, SurfaceState};

impl<A, H, B> RenderSurfaceController<A, H, B>
where
    A: TextureAllocator,
    H: SurfaceHost,
    B: RenderModuleBridge,
{
    /// ### English
    /// Records the new surface size and forwards it to `RenderModuleBridge::on_resized`.
    ///
    /// ### 中文
    /// 记录新的 surface 尺寸并转发给 `RenderModuleBridge::on_resized`。
    pub fn on_surface_resized(&mut self, size: PhysicalSize<u32>) -> Result<(), ControllerError> {
        let Some(generation) = self.generation.as_mut() else {
            return Err(ControllerError::NoSurface {
                operation: "on_surface_resized",
            });
        };

        log::debug!(
            "surface generation {} resized to {}x{}",
            generation.id,
            size.width,
            size.height
        );
        generation.size = Some(size);
        self.bridge.on_resized(size);
        Ok(())
    }

    /// ### English
    /// One render tick.
    ///
    /// If the producer signalled since the previous tick, latches the newest frame into the texture
    /// and re-reads the transform (once, however many signals arrived). Then always forwards the
    /// current transform to `RenderModuleBridge::on_draw`, so the loop keeps drawing when no new
    /// frame arrived.
    ///
    /// Returns whether a refresh happened. Drawing before the first resize of the generation is
    /// rejected without calling `on_draw`. A failed refresh re-arms the signal, so the next tick
    /// retries it instead of waiting for the producer's next frame.
    ///
    /// ### 中文
    /// 一次 render tick。
    ///
    /// 若生产者自上个 tick 起发过信号，则把最新帧锁存到纹理并重新读取变换矩阵（无论收到多少次信号都只做一次）。
    /// 之后总是把当前变换矩阵转发给 `RenderModuleBridge::on_draw`，因此没有新帧时循环仍会继续绘制。
    ///
    /// 返回是否发生了刷新。在本 generation 第一次 resize 之前 draw 会被拒绝，且不会调用 `on_draw`。
    /// 刷新失败会重新置位信号，下一个 tick 会重试，而不是等待生产者的下一帧。
    pub fn on_draw_tick(&mut self) -> Result<bool, ControllerError> {
        let Some(generation) = self.generation.as_mut() else {
            return Err(ControllerError::NoSurface {
                operation: "on_draw_tick",
            });
        };

        if generation.size.is_none() {
            return Err(ControllerError::DrawBeforeResize {
                generation: generation.id,
            });
        }

        let refreshed = generation.signal.consume();
        if refreshed {
            if let Err(err) = generation.surface.update_tex_image() {
                generation.signal.signal();
                return Err(err.into());
            }
            generation
                .surface
                .transform_matrix(&mut generation.transform);
            self.stats.refreshes += 1;
            log::trace!("frame available, texture refreshed (generation {})", generation.id);
        }

        self.bridge.on_draw(generation.transform.as_array());
        self.stats.ticks += 1;
        self.state = SurfaceState::Ready;
        Ok(refreshed)
    }
}
