//! ### English
//! Surface creation: builds a generation and announces it to the rendering module.
//!
//! ### 中文
//! Surface 创建：构建一个 generation 并通知渲染模块。

use std::sync::Arc;

use crate::engine::bridge::RenderModuleBridge;
use crate::engine::frame::SamplingTransform;
use crate::engine::lockfree::FrameSignal;
use crate::engine::platform::{FrameListener, PlatformSurface, SurfaceHost, TextureAllocator};

use super::{
    ControllerError, RecreatePolicy, RenderSurfaceController, SurfaceGeneration, SurfaceState,
};

impl<A, H, B> RenderSurfaceController<A, H, B>
where
    A: TextureAllocator,
    H: SurfaceHost,
    B: RenderModuleBridge,
{
    /// ### English
    /// Allocates the external texture, creates the platform surface bound to it, registers the
    /// producer listener and only then calls `RenderModuleBridge::on_created`.
    ///
    /// The listener is installed before anyone outside this controller sees the surface handle, so
    /// no frame can land in an unobserved window. On failure every resource acquired so far is
    /// released and the controller keeps its previous state. Under `RecreatePolicy::Replace` this
    /// includes the live generation, which is only torn down once its replacement is built.
    ///
    /// ### 中文
    /// 分配外部纹理，创建与之绑定的平台 surface，注册生产者监听器，然后才调用
    /// `RenderModuleBridge::on_created`。
    ///
    /// 监听器在控制器之外的任何人拿到 surface 句柄之前就已安装，因此不存在帧落入无人监听窗口的情况。
    /// 失败时会释放已获取的全部资源，控制器保持原有状态。在 `RecreatePolicy::Replace` 下这也包括存活的
    /// generation：只有在替代者构建成功后才会销毁它。
    pub fn on_surface_created(&mut self) -> Result<(), ControllerError> {
        if let Some(live) = self.generation.as_ref() {
            match self.config.recreate {
                RecreatePolicy::Reject => {
                    return Err(ControllerError::AlreadyCreated {
                        generation: live.id,
                    });
                }
                RecreatePolicy::Replace => {
                    log::warn!(
                        "surface recreated while generation {} is live; replacing it",
                        live.id
                    );
                }
            }
        }

        let generation = self.build_generation()?;
        let texture = generation.texture;
        let surface = generation.surface.handle();

        self.stats.generation = generation.id;
        if let Some(previous) = self.generation.replace(generation) {
            self.release_generation(previous);
        }
        self.state = SurfaceState::Created;

        log::debug!(
            "surface generation {} created (texture {}, surface {:#x})",
            self.stats.generation,
            texture.id(),
            surface.raw()
        );
        self.bridge.on_created(texture, surface);
        Ok(())
    }

    fn build_generation(&mut self) -> Result<SurfaceGeneration<H::Surface>, ControllerError> {
        let texture = self.allocator.create_external_texture()?;

        let mut surface = match self.host.create_surface(texture) {
            Ok(surface) => surface,
            Err(err) => {
                self.allocator.delete_external_texture(texture);
                return Err(err.into());
            }
        };

        let signal = Arc::new(FrameSignal::new());
        let listener: FrameListener = {
            let signal = Arc::clone(&signal);
            Arc::new(move || signal.signal())
        };
        if let Err(err) = surface.set_frame_listener(Some(listener)) {
            surface.release();
            self.allocator.delete_external_texture(texture);
            return Err(err.into());
        }

        Ok(SurfaceGeneration {
            id: self.stats.generation + 1,
            texture,
            surface,
            signal,
            transform: SamplingTransform::IDENTITY,
            size: None,
        })
    }
}
