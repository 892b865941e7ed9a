//! ### English
//! `glow`-backed allocator for textures bound to `GL_TEXTURE_EXTERNAL_OES`.
//! Camera frames are color-converted into such textures by the platform, so they are never given
//! storage here; only the name and sampling state are set up.
//!
//! ### 中文
//! 基于 `glow` 的 `GL_TEXTURE_EXTERNAL_OES` 纹理分配器。
//! 相机帧由平台做颜色转换后写入此类纹理，因此这里从不分配存储，只创建纹理名并设置采样状态。

use std::sync::Arc;

use glow::HasContext as _;

use crate::engine::frame::ExternalTexture;
use crate::engine::platform::{PlatformError, TextureAllocator};

/// ### English
/// `GL_OES_EGL_image_external` sampling target.
///
/// ### 中文
/// `GL_OES_EGL_image_external` 的采样目标。
pub const GL_TEXTURE_EXTERNAL_OES: u32 = 0x8D65;

/// ### English
/// Upper bound on pending errors discarded before allocation (some drivers keep one flag per
/// error kind; a broken context may never report `NO_ERROR`).
///
/// ### 中文
/// 分配前最多丢弃的待处理错误数（部分驱动为每类错误各保留一个标志；损坏的上下文可能永远不返回 `NO_ERROR`）。
const MAX_STALE_GL_ERRORS: usize = 32;

/// ### English
/// Min/mag filter applied to the external texture (external images support no mipmaps).
///
/// ### 中文
/// 应用于外部纹理的 min/mag 过滤方式（外部图像不支持 mipmap）。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureFilter {
    #[default]
    Linear,
    Nearest,
}

impl TextureFilter {
    fn gl_enum(self) -> i32 {
        match self {
            TextureFilter::Linear => glow::LINEAR as i32,
            TextureFilter::Nearest => glow::NEAREST as i32,
        }
    }
}

/// ### English
/// Creates/deletes external-image textures on the GL context current on the render thread.
///
/// ### 中文
/// 在 render 线程当前的 GL 上下文上创建/删除外部图像纹理。
pub struct GlExternalTextureAllocator {
    /// ### English
    /// glow GL API loaded from the host's proc-address function.
    ///
    /// ### 中文
    /// 由宿主 proc-address 函数加载的 glow GL API。
    gl: Arc<glow::Context>,
    filter: TextureFilter,
}

impl GlExternalTextureAllocator {
    pub fn new(gl: Arc<glow::Context>, filter: TextureFilter) -> Self {
        Self { gl, filter }
    }
}

impl TextureAllocator for GlExternalTextureAllocator {
    fn create_external_texture(&mut self) -> Result<ExternalTexture, PlatformError> {
        let gl = &self.gl;

        // Errors left by earlier GL work on this context (the module's draws, the host) are not ours.
        let stale = drain_gl_errors(|| unsafe { gl.get_error() });
        if stale > 0 {
            log::warn!("discarded {stale} pending GL error(s) before allocating external texture");
        }

        let texture = unsafe { gl.create_texture() }.map_err(PlatformError::TextureAllocation)?;

        unsafe {
            gl.bind_texture(GL_TEXTURE_EXTERNAL_OES, Some(texture));
            let filter = self.filter.gl_enum();
            gl.tex_parameter_i32(GL_TEXTURE_EXTERNAL_OES, glow::TEXTURE_MIN_FILTER, filter);
            gl.tex_parameter_i32(GL_TEXTURE_EXTERNAL_OES, glow::TEXTURE_MAG_FILTER, filter);
            gl.tex_parameter_i32(
                GL_TEXTURE_EXTERNAL_OES,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                GL_TEXTURE_EXTERNAL_OES,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.bind_texture(GL_TEXTURE_EXTERNAL_OES, None);
        }

        let error = unsafe { gl.get_error() };
        if error != glow::NO_ERROR {
            unsafe { gl.delete_texture(texture) };
            return Err(PlatformError::TextureAllocation(format!(
                "GL error 0x{error:04X} while configuring GL_TEXTURE_EXTERNAL_OES \
                 (is GL_OES_EGL_image_external supported?)"
            )));
        }

        log::debug!("allocated external texture {}", texture.0);
        Ok(ExternalTexture::from_non_zero(texture.0))
    }

    fn delete_external_texture(&mut self, texture: ExternalTexture) {
        unsafe {
            self.gl.delete_texture(glow::NativeTexture(texture.non_zero()));
        }
        log::debug!("deleted external texture {}", texture.id());
    }
}

/// ### English
/// Pops pending GL error flags until `NO_ERROR` (or the bound is hit); returns how many were
/// discarded.
///
/// ### 中文
/// 依次取出待处理的 GL 错误标志直到 `NO_ERROR`（或达到上限），返回丢弃的数量。
fn drain_gl_errors(mut next_error: impl FnMut() -> u32) -> usize {
    let mut drained = 0;
    while drained < MAX_STALE_GL_ERRORS && next_error() != glow::NO_ERROR {
        drained += 1;
    }
    drained
}
