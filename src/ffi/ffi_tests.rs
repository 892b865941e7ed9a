//! C ABI tests: the function-table host/module adapters driven through a real controller (mock GL
//! allocator), plus NULL handling of the exported entry points.

use std::ffi::c_void;
use std::sync::Mutex;

use dpi::PhysicalSize;

use super::controller::{
    cam_surface_bridge_controller_create, cam_surface_bridge_controller_state,
    cam_surface_bridge_controller_stats, cam_surface_bridge_on_draw_frame,
    cam_surface_bridge_on_surface_changed, cam_surface_bridge_on_surface_created,
    cam_surface_bridge_on_surface_destroyed,
};
use super::host::{ForeignSurfaceHost, cam_surface_bridge_frame_available};
use super::module::ForeignRenderModule;
use super::{
    CAM_SURFACE_BRIDGE_STATE_UNINITIALIZED, CamSurfaceBridgeFrameCallback,
    CamSurfaceBridgeRenderModule, CamSurfaceBridgeStats, CamSurfaceBridgeSurfaceHost,
};
use crate::engine::controller::{ControllerConfig, RenderSurfaceController, SurfaceState};
use crate::engine::testing::MockPlatform;

// ============================================================================
// C-style host
// ============================================================================

#[derive(Default)]
struct CHostState {
    next_surface: u64,
    fail_create: bool,
    refuse_unregister: bool,
    callback: Option<CamSurfaceBridgeFrameCallback>,
    listener: usize,
    updates: u32,
    released: Vec<u64>,
    transform: [f32; 16],
}

fn host_state<'a>(user_data: *mut c_void) -> &'a Mutex<CHostState> {
    unsafe { &*(user_data as *const Mutex<CHostState>) }
}

unsafe extern "C" fn c_create_surface(user_data: *mut c_void, texture_id: u32) -> u64 {
    let mut state = host_state(user_data).lock().unwrap();
    if state.fail_create {
        return 0;
    }
    state.next_surface += 1;
    (u64::from(texture_id) << 32) | state.next_surface
}

unsafe extern "C" fn c_set_frame_listener(
    user_data: *mut c_void,
    _surface: u64,
    callback: Option<CamSurfaceBridgeFrameCallback>,
    listener: *const c_void,
) -> bool {
    let mut state = host_state(user_data).lock().unwrap();
    if callback.is_none() && state.refuse_unregister {
        return false;
    }
    state.callback = callback;
    state.listener = listener as usize;
    true
}

unsafe extern "C" fn c_update_tex_image(user_data: *mut c_void, _surface: u64) -> bool {
    host_state(user_data).lock().unwrap().updates += 1;
    true
}

unsafe extern "C" fn c_get_transform_matrix(user_data: *mut c_void, _surface: u64, out: *mut f32) {
    let state = host_state(user_data).lock().unwrap();
    unsafe { std::ptr::copy_nonoverlapping(state.transform.as_ptr(), out, 16) };
}

unsafe extern "C" fn c_release_surface(user_data: *mut c_void, surface: u64) {
    host_state(user_data).lock().unwrap().released.push(surface);
}

fn c_host(state: &Mutex<CHostState>) -> CamSurfaceBridgeSurfaceHost {
    CamSurfaceBridgeSurfaceHost {
        user_data: state as *const Mutex<CHostState> as *mut c_void,
        create_surface: Some(c_create_surface),
        set_frame_listener: Some(c_set_frame_listener),
        update_tex_image: Some(c_update_tex_image),
        get_transform_matrix: Some(c_get_transform_matrix),
        release_surface: Some(c_release_surface),
    }
}

/// Fires the registered callback the way a camera thread would.
fn fire(state: &Mutex<CHostState>) -> bool {
    let (callback, listener) = {
        let state = state.lock().unwrap();
        (state.callback, state.listener)
    };
    match callback {
        Some(callback) => {
            unsafe { callback(listener as *const c_void) };
            true
        }
        None => false,
    }
}

// ============================================================================
// C-style rendering module
// ============================================================================

#[derive(Default)]
struct CModuleState {
    created: Vec<(u32, u64)>,
    resized: Vec<(u32, u32)>,
    draws: Vec<[f32; 16]>,
}

fn module_state<'a>(user_data: *mut c_void) -> &'a Mutex<CModuleState> {
    unsafe { &*(user_data as *const Mutex<CModuleState>) }
}

unsafe extern "C" fn c_on_created(user_data: *mut c_void, texture_id: u32, surface: u64) {
    module_state(user_data)
        .lock()
        .unwrap()
        .created
        .push((texture_id, surface));
}

unsafe extern "C" fn c_on_resized(user_data: *mut c_void, width: u32, height: u32) {
    module_state(user_data)
        .lock()
        .unwrap()
        .resized
        .push((width, height));
}

unsafe extern "C" fn c_on_draw(user_data: *mut c_void, transform: *const f32) {
    let mut values = [0.0f32; 16];
    unsafe { std::ptr::copy_nonoverlapping(transform, values.as_mut_ptr(), 16) };
    module_state(user_data).lock().unwrap().draws.push(values);
}

fn c_module(state: &Mutex<CModuleState>) -> CamSurfaceBridgeRenderModule {
    CamSurfaceBridgeRenderModule {
        user_data: state as *const Mutex<CModuleState> as *mut c_void,
        on_created: Some(c_on_created),
        on_resized: Some(c_on_resized),
        on_draw: Some(c_on_draw),
    }
}

fn rotated() -> [f32; 16] {
    [
        0.0, 1.0, 0.0, 0.0, //
        -1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        1.0, 0.0, 0.0, 1.0,
    ]
}

// ============================================================================
// Adapters through a controller
// ============================================================================

#[test]
fn test_function_tables_drive_full_lifecycle() {
    let host_state = Mutex::new(CHostState::default());
    host_state.lock().unwrap().transform = rotated();
    let module_state = Mutex::new(CModuleState::default());
    let platform = MockPlatform::default();

    let mut controller = RenderSurfaceController::new(
        platform.allocator(),
        ForeignSurfaceHost::new(c_host(&host_state)).unwrap(),
        ForeignRenderModule::new(c_module(&module_state)).unwrap(),
        ControllerConfig::default(),
    );

    controller.on_surface_created().unwrap();
    let surface = controller.surface_handle().unwrap().raw();
    assert_eq!(module_state.lock().unwrap().created, vec![(1, surface)]);
    assert_eq!(surface >> 32, 1);

    controller
        .on_surface_resized(PhysicalSize::new(1920, 1080))
        .unwrap();
    assert!(fire(&host_state));
    assert!(fire(&host_state));
    assert!(controller.on_draw_tick().unwrap());
    assert!(!controller.on_draw_tick().unwrap());

    {
        let module = module_state.lock().unwrap();
        assert_eq!(module.resized, vec![(1920, 1080)]);
        assert_eq!(module.draws, vec![rotated(), rotated()]);
    }
    assert_eq!(host_state.lock().unwrap().updates, 1);

    controller.on_surface_destroyed();
    {
        let host = host_state.lock().unwrap();
        assert!(host.callback.is_none());
        assert_eq!(host.listener, 0);
        assert_eq!(host.released, vec![surface]);
    }
    assert!(!fire(&host_state));
    assert!(platform.state().live_textures.is_empty());
}

#[test]
fn test_host_surface_failure_aborts_creation() {
    let host_state = Mutex::new(CHostState {
        fail_create: true,
        ..CHostState::default()
    });
    let module_state = Mutex::new(CModuleState::default());
    let platform = MockPlatform::default();

    let mut controller = RenderSurfaceController::new(
        platform.allocator(),
        ForeignSurfaceHost::new(c_host(&host_state)).unwrap(),
        ForeignRenderModule::new(c_module(&module_state)).unwrap(),
        ControllerConfig::default(),
    );

    assert!(controller.on_surface_created().is_err());
    assert_eq!(controller.state(), SurfaceState::Uninitialized);
    assert!(module_state.lock().unwrap().created.is_empty());
    assert_eq!(platform.state().deleted_textures, vec![1]);
}

#[test]
fn test_refused_unregister_keeps_listener_context_alive() {
    let host_state = Mutex::new(CHostState::default());
    let module_state = Mutex::new(CModuleState::default());
    let platform = MockPlatform::default();

    let mut controller = RenderSurfaceController::new(
        platform.allocator(),
        ForeignSurfaceHost::new(c_host(&host_state)).unwrap(),
        ForeignRenderModule::new(c_module(&module_state)).unwrap(),
        ControllerConfig::default(),
    );
    controller.on_surface_created().unwrap();
    host_state.lock().unwrap().refuse_unregister = true;
    controller.on_surface_destroyed();

    // The host still holds the old context; calling it must stay memory-safe and inert.
    assert!(fire(&host_state));
    assert_eq!(controller.state(), SurfaceState::Destroyed);
}

#[test]
fn test_incomplete_tables_are_rejected() {
    let host_state = Mutex::new(CHostState::default());
    let module_state = Mutex::new(CModuleState::default());

    let mut host = c_host(&host_state);
    host.update_tex_image = None;
    assert!(ForeignSurfaceHost::new(host).is_none());

    let mut module = c_module(&module_state);
    module.on_draw = None;
    assert!(ForeignRenderModule::new(module).is_none());
}

// ============================================================================
// Exported entry points
// ============================================================================

unsafe extern "C" fn null_loader(_name: *const std::ffi::c_char) -> *const c_void {
    std::ptr::null()
}

#[test]
fn test_exports_tolerate_null_controller() {
    let null = std::ptr::null_mut();
    unsafe {
        assert!(!cam_surface_bridge_on_surface_created(null));
        assert!(!cam_surface_bridge_on_surface_changed(null, 640, 480));
        assert!(!cam_surface_bridge_on_draw_frame(null));
        cam_surface_bridge_on_surface_destroyed(null);
        assert_eq!(
            cam_surface_bridge_controller_state(null),
            CAM_SURFACE_BRIDGE_STATE_UNINITIALIZED
        );
        let mut stats = CamSurfaceBridgeStats::default();
        assert!(!cam_surface_bridge_controller_stats(null, &mut stats));
        cam_surface_bridge_frame_available(std::ptr::null());
    }
}

#[test]
fn test_create_rejects_missing_arguments() {
    let host_state = Mutex::new(CHostState::default());
    let module_state = Mutex::new(CModuleState::default());
    let host = c_host(&host_state);
    let module = c_module(&module_state);
    let mut incomplete = c_module(&module_state);
    incomplete.on_created = None;

    unsafe {
        assert!(cam_surface_bridge_controller_create(None, &host, &module, 0).is_null());
        assert!(
            cam_surface_bridge_controller_create(Some(null_loader), std::ptr::null(), &module, 0)
                .is_null()
        );
        assert!(
            cam_surface_bridge_controller_create(Some(null_loader), &host, &incomplete, 0)
                .is_null()
        );
    }
}

#[test]
fn test_abi_constants() {
    assert_eq!(super::abi::cam_surface_bridge_abi_version(), 1);
    assert_eq!(super::abi::cam_surface_bridge_flag_nearest_filter(), 1);
    assert_eq!(super::abi::cam_surface_bridge_flag_reject_recreate(), 2);
}
