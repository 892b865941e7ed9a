//! ### English
//! Platform seam: GPU texture allocation and the producer-side surface object.
//!
//! The controller is generic over these traits so the same lifecycle logic runs against the real GL
//! allocator plus a JNI/C surface host, or against in-process test doubles.
//!
//! ### 中文
//! 平台接缝：GPU 纹理分配与生产者侧的 surface 对象。
//!
//! 控制器对这些 trait 泛型化，同一套生命周期逻辑既可运行在真实 GL 分配器 + JNI/C surface host 上，
//! 也可运行在进程内测试替身上。
use std::sync::Arc;

use thiserror::Error;

use crate::engine::frame::{ExternalTexture, SamplingTransform, SurfaceHandle};

/// ### English
/// Producer-side callback: invoked with no arguments whenever new frame data has been written into
/// the bound surface. May fire on any thread.
///
/// ### 中文
/// 生产者侧回调：每当新帧数据写入绑定的 surface 时以无参形式调用，可在任意线程触发。
pub type FrameListener = Arc<dyn Fn() + Send + Sync + 'static>;

/// ### English
/// Platform/resource failures. Each one is fatal to the surface generation being built.
///
/// ### 中文
/// 平台/资源失败。任何一种都会使正在构建的 surface generation 失败。
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("external texture allocation failed: {0}")]
    TextureAllocation(String),
    #[error("platform surface creation failed: {0}")]
    SurfaceCreation(String),
    #[error("frame listener registration failed: {0}")]
    ListenerRegistration(String),
    #[error("texture image update failed: {0}")]
    TexImageUpdate(String),
}

/// ### English
/// Allocates and deletes external-image textures. Must be used on the thread that owns the GL
/// context (the render-tick thread).
///
/// ### 中文
/// 分配与删除外部图像纹理。必须在持有 GL 上下文的线程（render tick 线程）上使用。
pub trait TextureAllocator {
    fn create_external_texture(&mut self) -> Result<ExternalTexture, PlatformError>;

    fn delete_external_texture(&mut self, texture: ExternalTexture);
}

/// ### English
/// Creates platform surfaces bound to an external texture (e.g. an Android `SurfaceTexture`).
///
/// ### 中文
/// 创建绑定到外部纹理的平台 surface（例如 Android `SurfaceTexture`）。
pub trait SurfaceHost {
    type Surface: PlatformSurface;

    fn create_surface(&mut self, texture: ExternalTexture) -> Result<Self::Surface, PlatformError>;
}

/// ### English
/// One platform surface: the object the camera subsystem writes frames into.
///
/// ### 中文
/// 单个平台 surface：相机子系统写入帧的对象。
pub trait PlatformSurface {
    /// ### English
    /// Opaque handle forwarded to the rendering module.
    ///
    /// ### 中文
    /// 转交给渲染模块的不透明句柄。
    fn handle(&self) -> SurfaceHandle;

    /// ### English
    /// Installs (`Some`) or removes (`None`) the frame-available listener.
    ///
    /// After `set_frame_listener(None)` returns `Ok`, the previous listener must never be invoked
    /// again.
    ///
    /// ### 中文
    /// 安装（`Some`）或移除（`None`）帧可用监听器。
    ///
    /// `set_frame_listener(None)` 返回 `Ok` 之后，之前的监听器不得再被调用。
    fn set_frame_listener(&mut self, listener: Option<FrameListener>) -> Result<(), PlatformError>;

    /// ### English
    /// Latches the most recent frame into the bound texture (`updateTexImage`).
    ///
    /// ### 中文
    /// 将最新一帧锁存到绑定纹理中（`updateTexImage`）。
    fn update_tex_image(&mut self) -> Result<(), PlatformError>;

    /// ### English
    /// Writes the transform of the most recently latched frame into `out`.
    ///
    /// ### 中文
    /// 将最近一次锁存帧的变换矩阵写入 `out`。
    fn transform_matrix(&self, out: &mut SamplingTransform);

    /// ### English
    /// Releases the surface. The listener has already been removed when this is called.
    ///
    /// ### 中文
    /// 释放 surface。调用时监听器已被移除。
    fn release(self);
}
