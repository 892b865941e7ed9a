//! ### English
//! Platform surface host supplied by the embedder as a C function table (e.g. JNI glue around an
//! Android `SurfaceTexture`).
//!
//! ### 中文
//! 宿主以 C 函数表形式提供的平台 surface host（例如包装 Android `SurfaceTexture` 的 JNI 胶水代码）。

use std::ffi::c_void;

use crate::engine::frame::{ExternalTexture, SamplingTransform, SurfaceHandle};
use crate::engine::platform::{FrameListener, PlatformError, PlatformSurface, SurfaceHost};

/// ### English
/// Callback the host invokes (from any thread) when a new frame landed in a surface, passing back
/// the `listener` context it was registered with. This is `cam_surface_bridge_frame_available`.
///
/// ### 中文
/// 当新帧写入 surface 时宿主（可在任意线程）调用的回调，需传回注册时给出的 `listener` 上下文。
/// 即 `cam_surface_bridge_frame_available`。
pub type CamSurfaceBridgeFrameCallback = unsafe extern "C" fn(listener: *const c_void);

#[repr(C)]
#[derive(Clone, Copy)]
/// ### English
/// Entry points of the platform surface host. All must be non-NULL.
///
/// - `create_surface(user_data, texture_id)`: creates a surface bound to the external texture and
///   returns an opaque non-zero handle (0 = failure).
/// - `set_frame_listener(user_data, surface, callback, listener)`: registers `callback(listener)`
///   as the frame-available listener, or unregisters when `callback` is NULL. Returns `false` on
///   failure. Once an unregistration returns `true`, the previous `listener` must never be passed
///   to the callback again.
/// - `update_tex_image(user_data, surface)`: latches the newest frame into the texture.
/// - `get_transform_matrix(user_data, surface, out)`: writes 16 column-major floats.
/// - `release_surface(user_data, surface)`: releases the surface.
///
/// ### 中文
/// 平台 surface host 的入口。全部必须非 NULL。
///
/// - `create_surface(user_data, texture_id)`：创建与外部纹理绑定的 surface，返回非 0 的不透明句柄（0 = 失败）。
/// - `set_frame_listener(user_data, surface, callback, listener)`：把 `callback(listener)` 注册为帧可用监听器；
///   `callback` 为 NULL 时表示注销。失败返回 `false`。注销返回 `true` 之后，不得再把之前的 `listener` 传给回调。
/// - `update_tex_image(user_data, surface)`：将最新帧锁存到纹理。
/// - `get_transform_matrix(user_data, surface, out)`：写入 16 个列主序 float。
/// - `release_surface(user_data, surface)`：释放 surface。
pub struct CamSurfaceBridgeSurfaceHost {
    pub user_data: *mut c_void,
    pub create_surface: Option<unsafe extern "C" fn(user_data: *mut c_void, texture_id: u32) -> u64>,
    pub set_frame_listener: Option<
        unsafe extern "C" fn(
            user_data: *mut c_void,
            surface: u64,
            callback: Option<CamSurfaceBridgeFrameCallback>,
            listener: *const c_void,
        ) -> bool,
    >,
    pub update_tex_image: Option<unsafe extern "C" fn(user_data: *mut c_void, surface: u64) -> bool>,
    pub get_transform_matrix:
        Option<unsafe extern "C" fn(user_data: *mut c_void, surface: u64, out: *mut f32)>,
    pub release_surface: Option<unsafe extern "C" fn(user_data: *mut c_void, surface: u64)>,
}

#[derive(Clone, Copy)]
struct HostFns {
    user_data: *mut c_void,
    create_surface: unsafe extern "C" fn(*mut c_void, u32) -> u64,
    set_frame_listener: unsafe extern "C" fn(
        *mut c_void,
        u64,
        Option<CamSurfaceBridgeFrameCallback>,
        *const c_void,
    ) -> bool,
    update_tex_image: unsafe extern "C" fn(*mut c_void, u64) -> bool,
    get_transform_matrix: unsafe extern "C" fn(*mut c_void, u64, *mut f32),
    release_surface: unsafe extern "C" fn(*mut c_void, u64),
}

/// ### English
/// Validated `CamSurfaceBridgeSurfaceHost` adapted to `SurfaceHost`.
///
/// ### 中文
/// 经过校验、适配为 `SurfaceHost` 的 `CamSurfaceBridgeSurfaceHost`。
pub(crate) struct ForeignSurfaceHost {
    fns: HostFns,
}

impl ForeignSurfaceHost {
    pub(crate) fn new(table: CamSurfaceBridgeSurfaceHost) -> Option<Self> {
        Some(Self {
            fns: HostFns {
                user_data: table.user_data,
                create_surface: table.create_surface?,
                set_frame_listener: table.set_frame_listener?,
                update_tex_image: table.update_tex_image?,
                get_transform_matrix: table.get_transform_matrix?,
                release_surface: table.release_surface?,
            },
        })
    }
}

impl SurfaceHost for ForeignSurfaceHost {
    type Surface = ForeignSurface;

    fn create_surface(&mut self, texture: ExternalTexture) -> Result<ForeignSurface, PlatformError> {
        let surface = unsafe { (self.fns.create_surface)(self.fns.user_data, texture.id()) };
        if surface == 0 {
            return Err(PlatformError::SurfaceCreation(format!(
                "host returned no surface for texture {}",
                texture.id()
            )));
        }

        Ok(ForeignSurface {
            fns: self.fns,
            surface,
            listener: None,
        })
    }
}

pub(crate) struct ForeignSurface {
    fns: HostFns,
    surface: u64,
    /// ### English
    /// Listener context handed to the host. Its address must stay stable until the host has
    /// acknowledged unregistration, hence the box.
    ///
    /// ### 中文
    /// 交给宿主的监听器上下文。在宿主确认注销之前其地址必须保持稳定，因此使用 Box。
    listener: Option<Box<FrameListener>>,
}

impl PlatformSurface for ForeignSurface {
    fn handle(&self) -> SurfaceHandle {
        SurfaceHandle(self.surface)
    }

    fn set_frame_listener(&mut self, listener: Option<FrameListener>) -> Result<(), PlatformError> {
        let next = listener.map(Box::new);
        let (callback, context) = match next.as_deref() {
            Some(listener) => (
                Some(cam_surface_bridge_frame_available as CamSurfaceBridgeFrameCallback),
                listener as *const FrameListener as *const c_void,
            ),
            None => (None, std::ptr::null()),
        };

        let ok = unsafe {
            (self.fns.set_frame_listener)(self.fns.user_data, self.surface, callback, context)
        };
        if !ok {
            return Err(PlatformError::ListenerRegistration(format!(
                "host refused to {} the listener of surface {:#x}",
                if next.is_some() { "register" } else { "unregister" },
                self.surface
            )));
        }

        self.listener = next;
        Ok(())
    }

    fn update_tex_image(&mut self) -> Result<(), PlatformError> {
        if unsafe { (self.fns.update_tex_image)(self.fns.user_data, self.surface) } {
            Ok(())
        } else {
            Err(PlatformError::TexImageUpdate(format!(
                "host failed to update surface {:#x}",
                self.surface
            )))
        }
    }

    fn transform_matrix(&self, out: &mut SamplingTransform) {
        unsafe {
            (self.fns.get_transform_matrix)(
                self.fns.user_data,
                self.surface,
                out.as_mut_array().as_mut_ptr(),
            )
        };
    }

    fn release(mut self) {
        if let Some(listener) = self.listener.take() {
            /*
            ### English
            The host never acknowledged unregistration, so it may still call back with this context.
            Leak it rather than free memory the host can still reach.

            ### 中文
            宿主从未确认注销，仍可能携带该上下文回调。宁可泄漏，也不释放宿主仍可访问的内存。
            */
            log::warn!(
                "surface {:#x} released with a registered listener; leaking its context",
                self.surface
            );
            let _ = Box::leak(listener);
        }
        unsafe { (self.fns.release_surface)(self.fns.user_data, self.surface) };
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Frame-available callback: the host calls this (from any thread) with the `listener` context it
/// received in `set_frame_listener`. NULL is ignored.
///
/// ### 中文
/// 帧可用回调：宿主（可在任意线程）以 `set_frame_listener` 中收到的 `listener` 上下文调用它。NULL 会被忽略。
pub unsafe extern "C" fn cam_surface_bridge_frame_available(listener: *const c_void) {
    if listener.is_null() {
        return;
    }
    let listener = unsafe { &*(listener as *const FrameListener) };
    listener();
}
