use crate::engine::flags;

#[unsafe(no_mangle)]
/// ### English
/// Returns the C ABI version.
///
/// ### 中文
/// 返回 C ABI 版本号。
pub extern "C" fn cam_surface_bridge_abi_version() -> u32 {
    super::CAM_SURFACE_BRIDGE_ABI_VERSION
}

#[unsafe(no_mangle)]
/// ### English
/// Returns `CAM_SURFACE_BRIDGE_FLAG_NEAREST_FILTER`.
/// (Panama-friendly constant getter; avoids relying on C headers.)
///
/// ### 中文
/// 返回 `CAM_SURFACE_BRIDGE_FLAG_NEAREST_FILTER`。
/// （Panama 友好的常量获取函数；避免依赖 C 头文件。）
pub extern "C" fn cam_surface_bridge_flag_nearest_filter() -> u32 {
    flags::CAM_SURFACE_BRIDGE_FLAG_NEAREST_FILTER
}

#[unsafe(no_mangle)]
/// ### English
/// Returns `CAM_SURFACE_BRIDGE_FLAG_REJECT_RECREATE`.
///
/// ### 中文
/// 返回 `CAM_SURFACE_BRIDGE_FLAG_REJECT_RECREATE`。
pub extern "C" fn cam_surface_bridge_flag_reject_recreate() -> u32 {
    flags::CAM_SURFACE_BRIDGE_FLAG_REJECT_RECREATE
}
