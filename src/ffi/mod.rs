//! ### English
//! C ABI surface for `cam_surface_bridge`.
//!
//! All exported symbols are `extern "C"` functions; structs are `#[repr(C)]`.
//! The rendering module and the platform surface host are supplied by the embedder as tables of
//! function pointers, so no symbol of theirs is linked by name.
//!
//! ### 中文
//! `cam_surface_bridge` 的 C ABI 接口层。
//!
//! 所有导出符号均为 `extern "C"` 函数；结构体使用 `#[repr(C)]`。
//! 渲染模块与平台 surface host 由宿主以函数指针表的形式提供，因此不会按名字链接它们的任何符号。
mod abi;
mod controller;
mod host;
mod module;

use crate::engine::controller::{FrameStats, SurfaceState};

pub use controller::{CamSurfaceBridgeController, CamSurfaceBridgeGetProcAddress};
pub use host::{CamSurfaceBridgeFrameCallback, CamSurfaceBridgeSurfaceHost};
pub use module::CamSurfaceBridgeRenderModule;

/// ### English
/// C ABI version for `cam_surface_bridge`.
///
/// ### 中文
/// `cam_surface_bridge` 的 C ABI 版本号。
const CAM_SURFACE_BRIDGE_ABI_VERSION: u32 = 1;

pub const CAM_SURFACE_BRIDGE_STATE_UNINITIALIZED: u32 = 0;
pub const CAM_SURFACE_BRIDGE_STATE_CREATED: u32 = 1;
pub const CAM_SURFACE_BRIDGE_STATE_READY: u32 = 2;
pub const CAM_SURFACE_BRIDGE_STATE_DESTROYED: u32 = 3;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// ### English
/// Controller counters returned to the embedder.
///
/// ### 中文
/// 返回给宿主的控制器计数器。
pub struct CamSurfaceBridgeStats {
    pub generation: u64,
    pub ticks: u64,
    pub refreshes: u64,
}

impl From<FrameStats> for CamSurfaceBridgeStats {
    fn from(value: FrameStats) -> Self {
        Self {
            generation: value.generation,
            ticks: value.ticks,
            refreshes: value.refreshes,
        }
    }
}

fn state_to_abi(state: SurfaceState) -> u32 {
    match state {
        SurfaceState::Uninitialized => CAM_SURFACE_BRIDGE_STATE_UNINITIALIZED,
        SurfaceState::Created => CAM_SURFACE_BRIDGE_STATE_CREATED,
        SurfaceState::Ready => CAM_SURFACE_BRIDGE_STATE_READY,
        SurfaceState::Destroyed => CAM_SURFACE_BRIDGE_STATE_DESTROYED,
    }
}

#[cfg(test)]
#[path = "ffi_tests.rs"]
mod tests;
