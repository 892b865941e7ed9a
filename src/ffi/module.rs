//! ### English
//! Rendering module supplied by the embedder as a C function table.
//!
//! ### 中文
//! 宿主以 C 函数表形式提供的渲染模块。

use std::ffi::c_void;

use dpi::PhysicalSize;

use crate::engine::bridge::RenderModuleBridge;
use crate::engine::frame::{ExternalTexture, SurfaceHandle};

#[repr(C)]
#[derive(Clone, Copy)]
/// ### English
/// Entry points of the external rendering module. All three must be non-NULL.
///
/// - `on_created(user_data, texture_id, surface)`: once per surface generation; `texture_id` is a
///   `GL_TEXTURE_EXTERNAL_OES` texture name.
/// - `on_resized(user_data, width, height)`: at least once before the first draw.
/// - `on_draw(user_data, transform)`: once per tick; `transform` points to 16 column-major floats
///   that are only valid for the duration of the call.
///
/// All calls happen on the render thread.
///
/// ### 中文
/// 外部渲染模块的入口。三个函数都必须非 NULL。
///
/// - `on_created(user_data, texture_id, surface)`：每个 surface generation 一次；`texture_id` 为
///   `GL_TEXTURE_EXTERNAL_OES` 纹理名。
/// - `on_resized(user_data, width, height)`：第一次 draw 之前至少一次。
/// - `on_draw(user_data, transform)`：每个 tick 一次；`transform` 指向 16 个列主序 float，仅在调用期间有效。
///
/// 所有调用都发生在 render 线程。
pub struct CamSurfaceBridgeRenderModule {
    pub user_data: *mut c_void,
    pub on_created: Option<unsafe extern "C" fn(user_data: *mut c_void, texture_id: u32, surface: u64)>,
    pub on_resized: Option<unsafe extern "C" fn(user_data: *mut c_void, width: u32, height: u32)>,
    pub on_draw: Option<unsafe extern "C" fn(user_data: *mut c_void, transform: *const f32)>,
}

/// ### English
/// Validated `CamSurfaceBridgeRenderModule` adapted to `RenderModuleBridge`.
///
/// ### 中文
/// 经过校验、适配为 `RenderModuleBridge` 的 `CamSurfaceBridgeRenderModule`。
pub(crate) struct ForeignRenderModule {
    user_data: *mut c_void,
    on_created: unsafe extern "C" fn(*mut c_void, u32, u64),
    on_resized: unsafe extern "C" fn(*mut c_void, u32, u32),
    on_draw: unsafe extern "C" fn(*mut c_void, *const f32),
}

impl ForeignRenderModule {
    pub(crate) fn new(table: CamSurfaceBridgeRenderModule) -> Option<Self> {
        Some(Self {
            user_data: table.user_data,
            on_created: table.on_created?,
            on_resized: table.on_resized?,
            on_draw: table.on_draw?,
        })
    }
}

impl RenderModuleBridge for ForeignRenderModule {
    fn on_created(&mut self, texture: ExternalTexture, surface: SurfaceHandle) {
        unsafe { (self.on_created)(self.user_data, texture.id(), surface.raw()) };
    }

    fn on_resized(&mut self, size: PhysicalSize<u32>) {
        unsafe { (self.on_resized)(self.user_data, size.width, size.height) };
    }

    fn on_draw(&mut self, transform: &[f32; 16]) {
        unsafe { (self.on_draw)(self.user_data, transform.as_ptr()) };
    }
}
