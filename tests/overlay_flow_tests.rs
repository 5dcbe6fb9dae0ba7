use approx::assert_relative_eq;
use glam::{Quat, Vec2, Vec3};
use size_references::app::ToolbarAction;
use size_references::{
    FilePreferenceStore, HostSelection, MemoryPreferenceStore, OverlayCommand, OverlayController,
    OverlayEvent, OverlayOptions, OverlayState, PointerButton, PreferenceStore, ReferenceContext,
    ReferenceItem, ReferenceSet, ScreenRect, StaticScene, ViewportCamera, VisualHandle,
    WidgetMode,
};
use std::cell::RefCell;
use std::rc::Rc;

fn items(count: u64) -> Vec<ReferenceItem> {
    (0..count)
        .map(|i| ReferenceItem::new(format!("Ref {i}"), VisualHandle(i)))
        .collect()
}

fn state_with(store: Box<dyn PreferenceStore>, count: u64) -> OverlayState {
    let options = OverlayOptions::default();
    let references =
        ReferenceContext::new(ReferenceSet::new(items(count)), store, "scene_a", &options);
    OverlayState::new(references, options)
}

fn state(count: u64) -> OverlayState {
    state_with(Box::new(MemoryPreferenceStore::new()), count)
}

fn scene() -> StaticScene {
    StaticScene::with_ground(ViewportCamera::new(Vec2::new(800.0, 600.0)))
}

fn tick() -> OverlayEvent {
    OverlayEvent::Tick {
        viewport: ScreenRect::new(0.0, 0.0, 800.0, 600.0),
    }
}

fn button_center(state: &mut OverlayState, action: ToolbarAction) -> Vec2 {
    let button = state
        .toolbar_buttons()
        .into_iter()
        .find(|b| b.action == action)
        .expect("Button sollte im Layout sein");
    button.rect.min + button.rect.size * 0.5
}

fn click(
    controller: &mut OverlayController,
    state: &mut OverlayState,
    scene: &StaticScene,
    action: ToolbarAction,
    button: PointerButton,
) {
    let pos = button_center(state, action);
    controller
        .handle_events(
            state,
            scene,
            [
                OverlayEvent::PointerDown { button, pos },
                OverlayEvent::PointerUp { button, pos },
            ],
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
}

fn mode(state: &OverlayState) -> WidgetMode {
    state.widget().expect("Toolbar sollte angelegt sein").mode()
}

#[test]
fn test_picking_moves_reference_to_raycast_hit() {
    let mut controller = OverlayController::new();
    let mut state = state(3);
    let scene = scene();

    controller
        .handle_event(&mut state, &scene, tick())
        .expect("Tick sollte ohne Fehler durchlaufen");
    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::PlacePosition,
        PointerButton::Primary,
    );
    assert_eq!(mode(&state), WidgetMode::PickingPosition);

    let target = Vec3::new(1.0, 0.0, -2.0);
    let screen = scene
        .camera
        .world_to_screen(target)
        .expect("Zielpunkt sollte vor der Kamera liegen");

    let outcome = controller
        .handle_event(&mut state, &scene, OverlayEvent::PointerMoved { pos: screen })
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    assert!(outcome.consumed);

    let position = state.references.position();
    assert_relative_eq!(position.x, target.x, epsilon = 1e-3);
    assert_relative_eq!(position.y, 0.0, epsilon = 1e-3);
    assert_relative_eq!(position.z, target.z, epsilon = 1e-3);

    match state.command_log.entries().last() {
        Some(OverlayCommand::PickPositionAt { screen_pos }) => assert_eq!(*screen_pos, screen),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }

    controller
        .handle_event(
            &mut state,
            &scene,
            OverlayEvent::PointerUp {
                button: PointerButton::Primary,
                pos: screen,
            },
        )
        .expect("PointerUp sollte ohne Fehler durchlaufen");
    assert_eq!(mode(&state), WidgetMode::Idle);
    assert_relative_eq!(state.references.position().x, target.x, epsilon = 1e-3);
}

#[test]
fn test_picking_right_click_restores_previous_position() {
    let mut controller = OverlayController::new();
    let mut state = state(3);
    let scene = scene();
    let p0 = Vec3::new(-2.0, 0.0, 1.0);
    state.references.set_position(p0);

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::PlacePosition,
        PointerButton::Primary,
    );
    let center = Vec2::new(400.0, 300.0);
    controller
        .handle_events(
            &mut state,
            &scene,
            [
                OverlayEvent::PointerMoved { pos: center },
                OverlayEvent::PointerDown {
                    button: PointerButton::Secondary,
                    pos: center,
                },
            ],
        )
        .expect("Picking sollte ohne Fehler durchlaufen");
    assert_ne!(state.references.position(), p0);

    controller
        .handle_event(
            &mut state,
            &scene,
            OverlayEvent::PointerUp {
                button: PointerButton::Secondary,
                pos: center,
            },
        )
        .expect("Abbruch sollte ohne Fehler durchlaufen");

    assert_eq!(mode(&state), WidgetMode::Idle);
    assert_eq!(state.references.position(), p0);
}

#[test]
fn test_raycast_miss_keeps_position() {
    let mut controller = OverlayController::new();
    let mut state = state(2);
    let scene = scene();
    state.references.set_position(Vec3::new(0.5, 0.0, 0.5));

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::PlacePosition,
        PointerButton::Primary,
    );
    // Oberer Bildrand zeigt über den Horizont
    controller
        .handle_event(
            &mut state,
            &scene,
            OverlayEvent::PointerMoved {
                pos: Vec2::new(400.0, 0.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    assert_eq!(state.references.position(), Vec3::new(0.5, 0.0, 0.5));
    assert!(matches!(
        state.command_log.entries().last(),
        Some(OverlayCommand::PickPositionAt { .. })
    ));
}

#[test]
fn test_window_outside_viewport_snaps_back_and_persists() {
    let mut store = MemoryPreferenceStore::new();
    store.set_vec2(
        "size_references.editor.window_position",
        Vec2::new(-50.0, -50.0),
    );
    let mut controller = OverlayController::new();
    let mut state = state_with(Box::new(store), 3);
    let scene = scene();

    let outcome = controller
        .handle_event(&mut state, &scene, tick())
        .expect("Tick sollte ohne Fehler durchlaufen");

    assert!(outcome.changed);
    assert!(!outcome.consumed);
    let widget = state.widget().expect("Toolbar sollte angelegt sein");
    assert_eq!(widget.window_position, Vec2::new(10.0, 10.0));
    assert_eq!(
        state
            .references
            .store()
            .get_vec2("size_references.editor.window_position", Vec2::ZERO),
        Vec2::new(10.0, 10.0)
    );
}

#[test]
fn test_navigation_wraps_and_persists_selection() {
    let mut controller = OverlayController::new();
    let mut state = state(3);
    let scene = scene();
    assert_eq!(state.references.selected_index(), 2);

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::Next,
        PointerButton::Primary,
    );
    assert_eq!(state.references.selected_index(), 0);
    assert_eq!(state.references.set().enabled_count(), 1);
    assert!(state.references.set().items()[0].is_enabled());

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::Previous,
        PointerButton::Primary,
    );
    assert_eq!(state.references.selected_index(), 2);
    assert_eq!(
        state.command_log.entries(),
        &[OverlayCommand::SelectNext, OverlayCommand::SelectPrevious]
    );
}

#[test]
fn test_visibility_toggle_disables_all_references() {
    let mut controller = OverlayController::new();
    let mut state = state(3);
    let scene = scene();

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::ToggleVisibility,
        PointerButton::Primary,
    );
    assert!(!state.references.is_visible());
    assert_eq!(state.references.set().enabled_count(), 0);

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::ToggleVisibility,
        PointerButton::Primary,
    );
    assert!(state.references.is_visible());
    assert_eq!(state.references.set().enabled_count(), 1);
}

#[test]
fn test_empty_set_navigation_emits_no_commands() {
    let mut controller = OverlayController::new();
    let mut state = state(0);
    let scene = scene();

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::Next,
        PointerButton::Primary,
    );
    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::CurrentLabel,
        PointerButton::Primary,
    );

    assert!(state.command_log.is_empty());
}

#[test]
fn test_select_command_on_empty_set_returns_error() {
    let mut controller = OverlayController::new();
    let mut state = state(0);
    let scene = scene();

    let result = controller.handle_command(&mut state, &scene, OverlayCommand::SelectNext);
    assert!(result.is_err());
}

struct RecordingHost(Rc<RefCell<Vec<String>>>);

impl HostSelection for RecordingHost {
    fn frame(&mut self, item: &ReferenceItem) {
        self.0.borrow_mut().push(item.name().to_owned());
    }
}

#[test]
fn test_label_click_frames_current_reference_in_host() {
    let framed = Rc::new(RefCell::new(Vec::new()));
    let mut controller =
        OverlayController::with_host_selection(Box::new(RecordingHost(framed.clone())));
    let mut state = state(3);
    let scene = scene();

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::CurrentLabel,
        PointerButton::Primary,
    );

    assert_eq!(*framed.borrow(), vec!["Ref 2".to_owned()]);
    assert_eq!(
        state.command_log.last(),
        Some(&OverlayCommand::FocusCurrentReference)
    );
}

#[test]
fn test_rotation_gizmo_flow() {
    let mut controller = OverlayController::new();
    let mut state = state(1);
    let scene = scene();
    let rotation = Quat::from_rotation_y(0.5);

    // Ohne Gizmo wird die Rotation ignoriert
    controller
        .handle_event(&mut state, &scene, OverlayEvent::GizmoRotated { rotation })
        .expect("GizmoRotated sollte ohne Fehler durchlaufen");
    assert_eq!(state.references.rotation(), Quat::IDENTITY);

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::ToggleRotation,
        PointerButton::Primary,
    );
    assert_eq!(mode(&state), WidgetMode::RotatingViaGizmo);

    controller
        .handle_event(&mut state, &scene, OverlayEvent::GizmoRotated { rotation })
        .expect("GizmoRotated sollte ohne Fehler durchlaufen");
    assert_eq!(state.references.rotation(), rotation);
    assert_eq!(state.references.transform().rotation, rotation);

    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::ToggleRotation,
        PointerButton::Secondary,
    );
    assert_eq!(mode(&state), WidgetMode::Idle);
    assert_eq!(state.references.rotation(), Quat::IDENTITY);
}

#[test]
fn test_scene_switch_keeps_positions_apart() {
    let mut controller = OverlayController::new();
    let mut state = state(2);
    let scene = scene();

    state.references.set_position(Vec3::new(3.0, 0.0, 3.0));
    state.references.switch_scene("scene_b");
    assert_eq!(state.references.position(), Vec3::ZERO);

    // Reset per Rechtsklick betrifft nur die aktive Szene
    state.references.set_position(Vec3::new(1.0, 0.0, 0.0));
    click(
        &mut controller,
        &mut state,
        &scene,
        ToolbarAction::PlacePosition,
        PointerButton::Secondary,
    );
    assert_eq!(state.references.position(), Vec3::ZERO);

    state.references.switch_scene("scene_a");
    assert_eq!(state.references.position(), Vec3::new(3.0, 0.0, 3.0));
}

#[test]
fn test_file_store_restores_session() {
    let path = std::env::temp_dir().join(format!(
        "size_references_flow_{}.toml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let scene = scene();

    {
        let mut controller = OverlayController::new();
        let mut state = state_with(Box::new(FilePreferenceStore::open(&path)), 3);
        state.references.set_position(Vec3::new(2.0, 0.0, -1.0));
        click(
            &mut controller,
            &mut state,
            &scene,
            ToolbarAction::Next,
            PointerButton::Primary,
        );
        click(
            &mut controller,
            &mut state,
            &scene,
            ToolbarAction::ToggleSubControls,
            PointerButton::Primary,
        );
    }

    let mut state = state_with(Box::new(FilePreferenceStore::open(&path)), 3);
    assert_eq!(state.references.position(), Vec3::new(2.0, 0.0, -1.0));
    assert_eq!(state.references.set().selected_index(), 0);
    assert!(!state.ensure_widget().show_sub_controls);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_hdr_color_survives_file_store() {
    let path = std::env::temp_dir().join(format!(
        "size_references_hdr_{}.toml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let scene = scene();
    let hdr = [6.0, 3.0, 1.5, 1.0];

    {
        let mut controller = OverlayController::new();
        let mut state = state_with(Box::new(FilePreferenceStore::open(&path)), 2);
        let outcome = controller
            .handle_event(&mut state, &scene, OverlayEvent::ColorChanged { color: hdr })
            .expect("Farbwechsel sollte durchlaufen");
        assert!(outcome.consumed);
        assert_eq!(state.references.transform().color, hdr);
    }

    let state = state_with(Box::new(FilePreferenceStore::open(&path)), 2);
    assert_eq!(state.references.color(), hdr);

    let _ = std::fs::remove_file(&path);
}
