/// ### English
/// Lifecycle state of the render surface.
///
/// `Uninitialized`/`Destroyed` → `Created` on surface creation, `Created` → `Ready` on the first
/// forwarded draw, any → `Destroyed` on teardown. Resizes keep the current state.
///
/// ### 中文
/// 渲染 surface 的生命周期状态。
///
/// 创建 surface 时 `Uninitialized`/`Destroyed` → `Created`；第一次转发 draw 时 `Created` → `Ready`；
/// 销毁时任意状态 → `Destroyed`。resize 不改变当前状态。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceState {
    Uninitialized,
    Created,
    Ready,
    Destroyed,
}

/// ### English
/// Counters for diagnostics and tests.
///
/// ### 中文
/// 用于诊断与测试的计数器。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// ### English
    /// Id of the current (or last) surface generation; 0 before the first creation.
    ///
    /// ### 中文
    /// 当前（或最近一次）surface generation 的 id；首次创建之前为 0。
    pub generation: u64,
    /// ### English
    /// Draw calls forwarded to the rendering module (all generations).
    ///
    /// ### 中文
    /// 转发给渲染模块的 draw 次数（所有 generation 累计）。
    pub ticks: u64,
    /// ### English
    /// Texture refreshes performed (all generations).
    ///
    /// ### 中文
    /// 执行过的纹理刷新次数（所有 generation 累计）。
    pub refreshes: u64,
}
