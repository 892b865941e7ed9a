//! ### English
//! C ABI bindings for the render-surface lifecycle (create / changed / draw / destroyed).
//!
//! Every function must be called on the thread that owns the GL context (the
//! `GLSurfaceView.Renderer` thread on Android).
//!
//! ### 中文
//! 渲染 surface 生命周期（create / changed / draw / destroyed）的 C ABI 绑定。
//!
//! 所有函数都必须在持有 GL 上下文的线程上调用（Android 上即 `GLSurfaceView.Renderer` 线程）。

use std::ffi::{CString, c_char, c_void};
use std::sync::Arc;

use dpi::PhysicalSize;

use crate::engine::controller::RenderSurfaceController;
use crate::engine::flags;
use crate::engine::rendering::GlExternalTextureAllocator;

use super::host::ForeignSurfaceHost;
use super::module::ForeignRenderModule;
use super::{
    CamSurfaceBridgeRenderModule, CamSurfaceBridgeStats, CamSurfaceBridgeSurfaceHost,
    state_to_abi,
};

/// ### English
/// GL proc-address loader (`eglGetProcAddress`, `glfwGetProcAddress`, ...).
///
/// ### 中文
/// GL 函数地址加载器（`eglGetProcAddress`、`glfwGetProcAddress` 等）。
pub type CamSurfaceBridgeGetProcAddress = unsafe extern "C" fn(name: *const c_char) -> *const c_void;

type ForeignController =
    RenderSurfaceController<GlExternalTextureAllocator, ForeignSurfaceHost, ForeignRenderModule>;

/// ### English
/// Opaque controller handle (render-thread only).
///
/// ### 中文
/// 不透明控制器句柄（仅限 render 线程使用）。
pub struct CamSurfaceBridgeController {
    controller: ForeignController,
}

#[unsafe(no_mangle)]
/// ### English
/// Creates a controller on the calling (GL) thread.
///
/// `host` and `module` are copied; their `user_data` pointers must outlive the controller.
/// `flags` is a bitmask of `CAM_SURFACE_BRIDGE_FLAG_*`.
///
/// Returns NULL if any pointer/entry point is missing.
///
/// ### 中文
/// 在调用线程（GL 线程）上创建控制器。
///
/// `host` 与 `module` 会被拷贝；其 `user_data` 指针的生命周期必须长于控制器。
/// `flags` 为 `CAM_SURFACE_BRIDGE_FLAG_*` 位掩码。
///
/// 任何指针/入口缺失时返回 NULL。
pub unsafe extern "C" fn cam_surface_bridge_controller_create(
    get_proc_address: Option<CamSurfaceBridgeGetProcAddress>,
    host: *const CamSurfaceBridgeSurfaceHost,
    module: *const CamSurfaceBridgeRenderModule,
    flags: u32,
) -> *mut CamSurfaceBridgeController {
    let Some(get_proc_address) = get_proc_address else {
        log::error!("cam_surface_bridge_controller_create: missing GL loader");
        return std::ptr::null_mut();
    };
    if host.is_null() || module.is_null() {
        log::error!("cam_surface_bridge_controller_create: NULL host or module");
        return std::ptr::null_mut();
    }

    let Some(host) = ForeignSurfaceHost::new(unsafe { *host }) else {
        log::error!("cam_surface_bridge_controller_create: incomplete surface host table");
        return std::ptr::null_mut();
    };
    let Some(module) = ForeignRenderModule::new(unsafe { *module }) else {
        log::error!("cam_surface_bridge_controller_create: incomplete render module table");
        return std::ptr::null_mut();
    };

    let gl = unsafe {
        glow::Context::from_loader_function(|name| match CString::new(name) {
            Ok(name) => get_proc_address(name.as_ptr()),
            Err(_) => std::ptr::null(),
        })
    };
    let allocator = GlExternalTextureAllocator::new(Arc::new(gl), flags::texture_filter(flags));
    let controller =
        RenderSurfaceController::new(allocator, host, module, flags::controller_config(flags));

    Box::into_raw(Box::new(CamSurfaceBridgeController { controller }))
}

#[unsafe(no_mangle)]
/// ### English
/// Destroys a controller, tearing down any live surface generation first.
///
/// ### 中文
/// 销毁控制器；若有存活的 surface generation 会先将其销毁。
pub unsafe extern "C" fn cam_surface_bridge_controller_destroy(
    controller: *mut CamSurfaceBridgeController,
) {
    if controller.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(controller));
    }
}

#[unsafe(no_mangle)]
/// ### English
/// `GLSurfaceView.Renderer.onSurfaceCreated`: allocates the external texture and surface,
/// registers the frame listener and calls the module's `on_created`. Returns `false` on failure.
///
/// ### 中文
/// `GLSurfaceView.Renderer.onSurfaceCreated`：分配外部纹理与 surface，注册帧监听器并调用模块的
/// `on_created`。失败返回 `false`。
pub unsafe extern "C" fn cam_surface_bridge_on_surface_created(
    controller: *mut CamSurfaceBridgeController,
) -> bool {
    let Some(controller) = (unsafe { controller.as_mut() }) else {
        return false;
    };
    match controller.controller.on_surface_created() {
        Ok(()) => true,
        Err(err) => {
            log::error!("on_surface_created failed: {err}");
            false
        }
    }
}

#[unsafe(no_mangle)]
/// ### English
/// `GLSurfaceView.Renderer.onSurfaceChanged`: forwards the new size. Negative sizes are rejected.
///
/// ### 中文
/// `GLSurfaceView.Renderer.onSurfaceChanged`：转发新尺寸。负数尺寸会被拒绝。
pub unsafe extern "C" fn cam_surface_bridge_on_surface_changed(
    controller: *mut CamSurfaceBridgeController,
    width: i32,
    height: i32,
) -> bool {
    let Some(controller) = (unsafe { controller.as_mut() }) else {
        return false;
    };
    let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
        log::error!("on_surface_changed: invalid size {width}x{height}");
        return false;
    };
    match controller
        .controller
        .on_surface_resized(PhysicalSize::new(width, height))
    {
        Ok(()) => true,
        Err(err) => {
            log::error!("on_surface_changed failed: {err}");
            false
        }
    }
}

#[unsafe(no_mangle)]
/// ### English
/// `GLSurfaceView.Renderer.onDrawFrame`: one render tick. Returns `false` if the tick was rejected
/// (no surface, no size yet, or the texture refresh failed); the module's `on_draw` was not called
/// in that case.
///
/// ### 中文
/// `GLSurfaceView.Renderer.onDrawFrame`：一次 render tick。若 tick 被拒绝（没有 surface、尚无尺寸或纹理刷新失败）
/// 返回 `false`，此时不会调用模块的 `on_draw`。
pub unsafe extern "C" fn cam_surface_bridge_on_draw_frame(
    controller: *mut CamSurfaceBridgeController,
) -> bool {
    let Some(controller) = (unsafe { controller.as_mut() }) else {
        return false;
    };
    match controller.controller.on_draw_tick() {
        Ok(_) => true,
        Err(err) => {
            log::error!("on_draw_frame failed: {err}");
            false
        }
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Tears down the live surface generation (idempotent).
///
/// ### 中文
/// 销毁存活的 surface generation（幂等）。
pub unsafe extern "C" fn cam_surface_bridge_on_surface_destroyed(
    controller: *mut CamSurfaceBridgeController,
) {
    if let Some(controller) = unsafe { controller.as_mut() } {
        controller.controller.on_surface_destroyed();
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Returns the lifecycle state (`CAM_SURFACE_BRIDGE_STATE_*`); NULL reads as uninitialized.
///
/// ### 中文
/// 返回生命周期状态（`CAM_SURFACE_BRIDGE_STATE_*`）；NULL 视为未初始化。
pub unsafe extern "C" fn cam_surface_bridge_controller_state(
    controller: *const CamSurfaceBridgeController,
) -> u32 {
    match unsafe { controller.as_ref() } {
        Some(controller) => state_to_abi(controller.controller.state()),
        None => super::CAM_SURFACE_BRIDGE_STATE_UNINITIALIZED,
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Writes the controller counters into `out`. Returns `false` on NULL arguments.
///
/// ### 中文
/// 将控制器计数器写入 `out`。参数为 NULL 时返回 `false`。
pub unsafe extern "C" fn cam_surface_bridge_controller_stats(
    controller: *const CamSurfaceBridgeController,
    out: *mut CamSurfaceBridgeStats,
) -> bool {
    let Some(controller) = (unsafe { controller.as_ref() }) else {
        return false;
    };
    if out.is_null() {
        return false;
    }
    unsafe { out.write(controller.controller.stats().into()) };
    true
}

