//! Test doubles for the platform seam and the rendering module (no GPU required).
//!
//! The allocator, host and surfaces share one `MockPlatformState` so tests can inspect which
//! textures/surfaces are alive and fire the producer listener like a camera would.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use dpi::PhysicalSize;

use crate::engine::bridge::RenderModuleBridge;
use crate::engine::controller::{ControllerConfig, RenderSurfaceController};
use crate::engine::frame::{ExternalTexture, SamplingTransform, SurfaceHandle};
use crate::engine::platform::{
    FrameListener, PlatformError, PlatformSurface, SurfaceHost, TextureAllocator,
};

// ============================================================================
// Shared platform state
// ============================================================================

#[derive(Default)]
pub(crate) struct MockPlatformState {
    pub next_texture: u32,
    pub live_textures: Vec<u32>,
    pub deleted_textures: Vec<u32>,
    pub next_surface: u64,
    pub live_surfaces: Vec<u64>,
    pub released_surfaces: Vec<u64>,
    /// Currently registered listener per surface.
    pub listeners: HashMap<u64, FrameListener>,
    /// Every listener ever registered, so tests can invoke one after it was unregistered.
    pub registered: Vec<(u64, FrameListener)>,
    pub fail_texture: bool,
    pub fail_surface: bool,
    pub fail_listener: bool,
    pub fail_update: bool,
    pub updates: u64,
    /// Transform of the frame the "camera" wrote most recently.
    pub produced_transform: SamplingTransform,
    /// Transform of the frame latched by the last `update_tex_image`.
    pub latched_transform: SamplingTransform,
}

#[derive(Clone, Default)]
pub(crate) struct MockPlatform(Arc<Mutex<MockPlatformState>>);

impl MockPlatform {
    pub fn state(&self) -> MutexGuard<'_, MockPlatformState> {
        self.0.lock().unwrap()
    }

    pub fn allocator(&self) -> MockAllocator {
        MockAllocator(self.clone())
    }

    pub fn host(&self) -> MockHost {
        MockHost(self.clone())
    }

    /// Simulates the camera writing a frame into `surface` and notifying its listener.
    pub fn produce(&self, surface: u64, transform: SamplingTransform) {
        let listener = {
            let mut state = self.state();
            state.produced_transform = transform;
            state.listeners.get(&surface).cloned()
        };
        if let Some(listener) = listener {
            listener();
        }
    }

    /// Invokes the listener registered as the `index`-th registration, even if it was removed.
    pub fn invoke_stale(&self, index: usize) {
        let listener = self.state().registered[index].1.clone();
        listener();
    }
}

// ============================================================================
// Allocator / host / surface
// ============================================================================

pub(crate) struct MockAllocator(MockPlatform);

impl TextureAllocator for MockAllocator {
    fn create_external_texture(&mut self) -> Result<ExternalTexture, PlatformError> {
        let mut state = self.0.state();
        if state.fail_texture {
            return Err(PlatformError::TextureAllocation("mock failure".to_string()));
        }
        state.next_texture += 1;
        let id = state.next_texture;
        state.live_textures.push(id);
        Ok(ExternalTexture::from_raw(id).unwrap())
    }

    fn delete_external_texture(&mut self, texture: ExternalTexture) {
        let mut state = self.0.state();
        state.live_textures.retain(|&id| id != texture.id());
        state.deleted_textures.push(texture.id());
    }
}

pub(crate) struct MockHost(MockPlatform);

impl SurfaceHost for MockHost {
    type Surface = MockSurface;

    fn create_surface(&mut self, _texture: ExternalTexture) -> Result<MockSurface, PlatformError> {
        let mut state = self.0.state();
        if state.fail_surface {
            return Err(PlatformError::SurfaceCreation("mock failure".to_string()));
        }
        state.next_surface += 1;
        let handle = 0x1000 + state.next_surface;
        state.live_surfaces.push(handle);
        Ok(MockSurface {
            handle,
            platform: self.0.clone(),
        })
    }
}

pub(crate) struct MockSurface {
    handle: u64,
    platform: MockPlatform,
}

impl PlatformSurface for MockSurface {
    fn handle(&self) -> SurfaceHandle {
        SurfaceHandle(self.handle)
    }

    fn set_frame_listener(&mut self, listener: Option<FrameListener>) -> Result<(), PlatformError> {
        let mut state = self.platform.state();
        match listener {
            Some(listener) => {
                if state.fail_listener {
                    return Err(PlatformError::ListenerRegistration(
                        "mock failure".to_string(),
                    ));
                }
                state.registered.push((self.handle, listener.clone()));
                state.listeners.insert(self.handle, listener);
            }
            None => {
                state.listeners.remove(&self.handle);
            }
        }
        Ok(())
    }

    fn update_tex_image(&mut self) -> Result<(), PlatformError> {
        let mut state = self.platform.state();
        if state.fail_update {
            return Err(PlatformError::TexImageUpdate("mock failure".to_string()));
        }
        state.updates += 1;
        state.latched_transform = state.produced_transform;
        Ok(())
    }

    fn transform_matrix(&self, out: &mut SamplingTransform) {
        *out = self.platform.state().latched_transform;
    }

    fn release(self) {
        let mut state = self.platform.state();
        state.live_surfaces.retain(|&handle| handle != self.handle);
        state.released_surfaces.push(self.handle);
    }
}

// ============================================================================
// Recording rendering module
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum BridgeCall {
    Created { texture: u32, surface: u64 },
    Resized { width: u32, height: u32 },
    Draw([f32; 16]),
}

#[derive(Clone, Default)]
pub(crate) struct RecordingBridge {
    calls: Arc<Mutex<Vec<BridgeCall>>>,
}

impl RecordingBridge {
    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn draws(&self) -> Vec<[f32; 16]> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                BridgeCall::Draw(transform) => Some(transform),
                _ => None,
            })
            .collect()
    }
}

impl RenderModuleBridge for RecordingBridge {
    fn on_created(&mut self, texture: ExternalTexture, surface: SurfaceHandle) {
        self.calls.lock().unwrap().push(BridgeCall::Created {
            texture: texture.id(),
            surface: surface.raw(),
        });
    }

    fn on_resized(&mut self, size: PhysicalSize<u32>) {
        self.calls.lock().unwrap().push(BridgeCall::Resized {
            width: size.width,
            height: size.height,
        });
    }

    fn on_draw(&mut self, transform: &[f32; 16]) {
        self.calls.lock().unwrap().push(BridgeCall::Draw(*transform));
    }
}

pub(crate) type MockController = RenderSurfaceController<MockAllocator, MockHost, RecordingBridge>;

pub(crate) fn mock_controller(config: ControllerConfig) -> (MockController, MockPlatform, RecordingBridge) {
    let _ = env_logger::builder().is_test(true).try_init();

    let platform = MockPlatform::default();
    let bridge = RecordingBridge::default();
    let controller = RenderSurfaceController::new(
        platform.allocator(),
        platform.host(),
        bridge.clone(),
        config,
    );
    (controller, platform, bridge)
}

/// A recognisable non-identity transform; `seed` shifts the translation column.
pub(crate) fn sample_transform(seed: f32) -> SamplingTransform {
    SamplingTransform::from_cols_array([
        0.0, -1.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        seed, 1.0, 0.0, 1.0,
    ])
}
