//! ### English
//! Bitflags controlling optional controller behaviors.
//!
//! These are passed through the C ABI as a `u32` bitmask.
//!
//! ### 中文
//! 控制控制器可选行为的位标志（bitflags）。
//!
//! 通过 C ABI 以 `u32` 位掩码传入。
use crate::engine::controller::{ControllerConfig, RecreatePolicy};
use crate::engine::rendering::TextureFilter;

/// ### English
/// Sample the external texture with `GL_NEAREST` instead of `GL_LINEAR`.
///
/// ### 中文
/// 以 `GL_NEAREST` 而非 `GL_LINEAR` 采样外部纹理。
pub const CAM_SURFACE_BRIDGE_FLAG_NEAREST_FILTER: u32 = 1 << 0;

/// ### English
/// Reject `on_surface_created` while a generation is still live instead of replacing it.
///
/// ### 中文
/// 当仍有存活的 generation 时拒绝 `on_surface_created`，而不是替换它。
pub const CAM_SURFACE_BRIDGE_FLAG_REJECT_RECREATE: u32 = 1 << 1;

pub(crate) fn texture_filter(flags: u32) -> TextureFilter {
    if flags & CAM_SURFACE_BRIDGE_FLAG_NEAREST_FILTER != 0 {
        TextureFilter::Nearest
    } else {
        TextureFilter::Linear
    }
}

pub(crate) fn controller_config(flags: u32) -> ControllerConfig {
    let recreate = if flags & CAM_SURFACE_BRIDGE_FLAG_REJECT_RECREATE != 0 {
        RecreatePolicy::Reject
    } else {
        RecreatePolicy::Replace
    };
    ControllerConfig { recreate }
}
