//! ### English
//! Rendering module entry point: GL allocation of the external-image texture.
//!
//! ### 中文
//! 渲染模块入口：外部图像纹理的 GL 分配。

mod external_texture;

pub use external_texture::{GL_TEXTURE_EXTERNAL_OES, GlExternalTextureAllocator, TextureFilter};
