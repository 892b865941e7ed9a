/// ### English
/// 4x4 texture-coordinate transform for sampling the external-image texture.
///
/// Stored as 16 `f32` in column-major order, the layout returned by the platform's
/// `getTransformMatrix` and accepted by `glUniformMatrix4fv(.., transpose = false, ..)`.
///
/// ### 中文
/// 采样外部图像纹理用的 4x4 纹理坐标变换矩阵。
///
/// 以列主序存储 16 个 `f32`，与平台 `getTransformMatrix` 返回的布局一致，
/// 可直接传给 `glUniformMatrix4fv(.., transpose = false, ..)`。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingTransform([f32; 16]);

impl SamplingTransform {
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    #[inline]
    pub const fn from_cols_array(values: [f32; 16]) -> Self {
        Self(values)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// ### English
    /// Mutable storage, overwritten in place by `PlatformSurface::transform_matrix`.
    ///
    /// ### 中文
    /// 可变存储区，由 `PlatformSurface::transform_matrix` 原地覆盖。
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 16] {
        &mut self.0
    }

    /// ### English
    /// Maps a `(u, v)` texture coordinate (z = 0, w = 1) through the matrix.
    ///
    /// ### 中文
    /// 用该矩阵变换 `(u, v)` 纹理坐标（z = 0，w = 1）。
    pub fn map_uv(&self, u: f32, v: f32) -> (f32, f32) {
        let m = &self.0;
        (m[0] * u + m[4] * v + m[12], m[1] * u + m[5] * v + m[13])
    }
}

impl Default for SamplingTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
