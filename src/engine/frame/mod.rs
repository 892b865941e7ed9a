//! ### English
//! Per-generation frame resources handed to the rendering module: the external-image texture name,
//! the opaque platform surface handle, and the sampling transform.
//!
//! ### 中文
//! 每个 generation 交给渲染模块的帧资源：外部图像纹理名、不透明的平台 surface 句柄以及采样变换矩阵。
mod transform;

use std::fmt;
use std::num::NonZeroU32;

pub use transform::SamplingTransform;

/// ### English
/// GL name of a texture bound to the external-image target (`GL_TEXTURE_EXTERNAL_OES`).
///
/// The name is never 0; a zero name is how GL reports "no texture".
///
/// ### 中文
/// 绑定到外部图像目标（`GL_TEXTURE_EXTERNAL_OES`）的 GL 纹理名。
///
/// 纹理名永远不为 0；GL 以 0 表示“无纹理”。
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExternalTexture(NonZeroU32);

impl ExternalTexture {
    /// ### English
    /// Wraps a raw GL texture name, returning `None` for 0.
    ///
    /// ### 中文
    /// 包装原始 GL 纹理名；传入 0 时返回 `None`。
    pub fn from_raw(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    pub(crate) fn from_non_zero(id: NonZeroU32) -> Self {
        Self(id)
    }

    /// ### English
    /// Raw GL texture name (the integer handle passed across the module boundary).
    ///
    /// ### 中文
    /// 原始 GL 纹理名（跨模块边界传递的整数句柄）。
    #[inline]
    pub fn id(self) -> u32 {
        self.0.get()
    }

    pub(crate) fn non_zero(self) -> NonZeroU32 {
        self.0
    }
}

impl fmt::Debug for ExternalTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExternalTexture({})", self.0)
    }
}

/// ### English
/// Opaque handle of the platform surface the producer writes into (pointer/JNI ref cast to `u64`).
///
/// This core never dereferences it; it is only forwarded to the rendering module.
///
/// ### 中文
/// 生产者写入的平台 surface 的不透明句柄（指针/JNI 引用转为 `u64`）。
///
/// 本核心从不解引用该句柄，只把它转交给渲染模块。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

impl SurfaceHandle {
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}
