//! ### English
//! Render-tick drivers.
//!
//! Platforms with a compositor-driven loop (e.g. `GLSurfaceView`) call the controller directly; the
//! fixed-interval driver is for hosts that have no such loop.
//!
//! ### 中文
//! Render tick 驱动器。
//!
//! 拥有合成器驱动循环的平台（例如 `GLSurfaceView`）直接调用控制器；固定间隔驱动器用于没有这种循环的宿主。
mod fixed_interval;

pub use fixed_interval::FixedIntervalTickDriver;
