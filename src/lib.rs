/// ### English
/// `cam_surface_bridge` crate root.
/// Exposes the C ABI via `ffi`; the frame signal, surface lifecycle and render-module contract live
/// under `engine`.
///
/// ### 中文
/// `cam_surface_bridge` 的 crate 根。
/// 通过 `ffi` 导出 C ABI；帧信号、surface 生命周期与渲染模块契约位于 `engine` 模块。
pub mod engine;
pub mod ffi;

pub use engine::bridge::RenderModuleBridge;
pub use engine::controller::{
    ControllerConfig, ControllerError, FrameStats, RecreatePolicy, RenderSurfaceController,
    SurfaceState,
};
pub use engine::frame::{ExternalTexture, SamplingTransform, SurfaceHandle};
pub use engine::lockfree::FrameSignal;
pub use engine::platform::{
    FrameListener, PlatformError, PlatformSurface, SurfaceHost, TextureAllocator,
};
pub use engine::refresh::FixedIntervalTickDriver;
pub use engine::rendering::{GlExternalTextureAllocator, TextureFilter};
