use crate::engine::bridge::RenderModuleBridge;
use crate::engine::platform::{PlatformSurface, SurfaceHost, TextureAllocator};

use super::{RenderSurfaceController, SurfaceGeneration, SurfaceState};

impl<A, H, B> RenderSurfaceController<A, H, B>
where
    A: TextureAllocator,
    H: SurfaceHost,
    B: RenderModuleBridge,
{
    /// ### English
    /// Tears down the live generation (idempotent).
    ///
    /// Order: unregister the producer listener, clear the signal, release the surface, delete the
    /// texture. If unregistration fails, a late callback can still only reach this generation's
    /// signal, which is dropped here.
    ///
    /// ### 中文
    /// 销毁存活的 generation（幂等）。
    ///
    /// 顺序：注销生产者监听器、清除信号、释放 surface、删除纹理。若注销失败，迟到的回调也只能触达本
    /// generation 的信号，而该信号在此处被丢弃。
    pub fn on_surface_destroyed(&mut self) {
        if let Some(generation) = self.generation.take() {
            self.release_generation(generation);
        }

        self.state = SurfaceState::Destroyed;
    }

    pub(super) fn release_generation(&mut self, generation: SurfaceGeneration<H::Surface>) {
        let SurfaceGeneration {
            id,
            texture,
            mut surface,
            signal,
            ..
        } = generation;

        if let Err(err) = surface.set_frame_listener(None) {
            log::warn!("generation {id}: failed to unregister frame listener: {err}");
        }
        signal.clear();
        surface.release();
        self.allocator.delete_external_texture(texture);

        log::debug!("surface generation {id} destroyed");
    }
}

impl<A, H, B> Drop for RenderSurfaceController<A, H, B>
where
    A: TextureAllocator,
    H: SurfaceHost,
    B: RenderModuleBridge,
{
    fn drop(&mut self) {
        if self.generation.is_some() {
            self.on_surface_destroyed();
        }
    }
}
