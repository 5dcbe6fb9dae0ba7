//! Size References Demo-Host.
//!
//! Minimaler eframe-Host mit Wireframe-Szene: zeigt die Overlay-Toolbar,
//! leitet Maus-Events an den Controller und nutzt freie Eingaben für die
//! Kamera (Ziehen = Orbit, Mausrad = Zoom).

use eframe::egui;
use glam::{Vec2, Vec3};
use size_references::core::Aabb;
use size_references::ui::{self, ReferenceDimensions};
use size_references::{
    FilePreferenceStore, HostSelection, OverlayController, OverlayEvent, OverlayOptions,
    OverlayState, ReferenceContext, ReferenceItem, RenderPipeline, StaticCatalog, StaticScene,
    ViewportCamera, VisualHandle,
};
use std::cell::Cell;
use std::rc::Rc;

/// Orbit-Geschwindigkeit (Radiant pro Pixel)
const ORBIT_SPEED: f32 = 0.008;
/// Zoom-Empfindlichkeit pro Scroll-Pixel
const ZOOM_SPEED: f32 = 0.002;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Size References Demo v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Size References Demo"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Size References Demo",
            options,
            Box::new(|_cc| Ok(Box::new(DemoApp::new()?))),
        )
    }
}

/// Leitet Fokus-Anfragen der Toolbar an die Kamera des Hosts weiter.
struct FocusRequest(Rc<Cell<Option<VisualHandle>>>);

impl HostSelection for FocusRequest {
    fn frame(&mut self, item: &ReferenceItem) {
        log::info!("Host fokussiert '{}'", item.name());
        self.0.set(Some(item.visual()));
    }
}

/// Eine auswählbare Demo-Szene
struct DemoScene {
    id: &'static str,
    label: &'static str,
    scene: StaticScene,
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    state: OverlayState,
    controller: OverlayController,
    scenes: Vec<DemoScene>,
    active_scene: usize,
    dimensions: ReferenceDimensions,
    focus_request: Rc<Cell<Option<VisualHandle>>>,
    /// Letzter Pointer-Down wurde vom Overlay verbraucht
    overlay_captured: bool,
}

impl DemoApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = OverlayOptions::config_path();
        let options = OverlayOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Erster Start: Standardwerte als editierbare Vorlage ablegen
            if let Err(e) = options.save_to_file(&config_path) {
                log::warn!("Optionen-Vorlage nicht geschrieben: {:#}", e);
            }
        }

        let store = FilePreferenceStore::open(options.preferences_path());
        log::info!("Präferenzen: {}", store.path().display());
        let scenes = demo_scenes();
        let references = ReferenceContext::from_catalog(
            &demo_catalog(),
            Box::new(store),
            scenes[0].id,
            &options,
        )?;

        let focus_request = Rc::new(Cell::new(None));
        let controller =
            OverlayController::with_host_selection(Box::new(FocusRequest(focus_request.clone())));

        Ok(Self {
            state: OverlayState::new(references, options),
            controller,
            scenes,
            active_scene: 0,
            dimensions: demo_dimensions(),
            focus_request,
            overlay_captured: false,
        })
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_scene_panel(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(24)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                self.scene_mut().camera.viewport_size = Vec2::new(rect.width(), rect.height());

                let widget = self.state.ensure_widget();
                let events = ui::collect_overlay_events(
                    ui,
                    rect,
                    &widget,
                    self.state.references.rotation(),
                );
                let changed = self.process_events(events);

                self.handle_camera_input(ui, &response);
                self.apply_focus_request();

                ui::paint_scene(
                    ui.painter(),
                    rect,
                    &self.scenes[self.active_scene].scene,
                    &self.state.references,
                    self.state.widget(),
                    &self.dimensions,
                );
                let color_events = ui::render_toolbar(ui, rect, &mut self.state);
                let color_changed = self.process_events(color_events);

                if changed || color_changed || ctx.input(|i| i.pointer.is_moving()) {
                    ctx.request_repaint();
                }
            });
    }
}

impl DemoApp {
    fn scene_mut(&mut self) -> &mut StaticScene {
        &mut self.scenes[self.active_scene].scene
    }

    /// Gibt `true` zurück, wenn sich etwas geändert hat.
    fn process_events(&mut self, events: Vec<OverlayEvent>) -> bool {
        let mut changed = false;
        for event in events {
            let is_down = matches!(event, OverlayEvent::PointerDown { .. });
            let scene = &self.scenes[self.active_scene].scene;
            match self.controller.handle_event(&mut self.state, scene, event) {
                Ok(outcome) => {
                    if is_down {
                        self.overlay_captured = outcome.consumed;
                    }
                    changed |= outcome.changed;
                }
                Err(e) => log::error!("Event handling failed: {:#}", e),
            }
        }
        changed
    }

    /// Freie Maus-Eingaben steuern die Kamera.
    fn handle_camera_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let picking = self.state.widget().is_some_and(|w| w.is_picking());
        if !self.overlay_captured && !picking && response.dragged_by(egui::PointerButton::Primary)
        {
            let delta = response.drag_delta();
            self.scene_mut()
                .camera
                .orbit(-delta.x * ORBIT_SPEED, delta.y * ORBIT_SPEED);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.scene_mut().camera.dolly((-scroll * ZOOM_SPEED).exp());
            }
        }
    }

    /// Setzt eine angefragte Fokussierung um: Kamera blickt auf die Referenz.
    fn apply_focus_request(&mut self) {
        if self.focus_request.take().is_none() {
            return;
        }
        let target = self.state.references.transform().position;
        let camera = &mut self.scene_mut().camera;
        let offset = camera.position - camera.target;
        camera.look_at(target);
        camera.position = target + offset;
    }

    fn render_scene_panel(&mut self, ctx: &egui::Context) {
        let mut switch_to = None;

        egui::SidePanel::right("scene_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Szenen");
                for (index, scene) in self.scenes.iter().enumerate() {
                    if ui
                        .selectable_label(index == self.active_scene, scene.label)
                        .clicked()
                        && index != self.active_scene
                    {
                        switch_to = Some(index);
                    }
                }

                ui.separator();
                let references = &self.state.references;
                ui.label(format!("Pipeline: {}", references.pipeline().tag()));
                ui.label(format!("Referenzen: {}", references.set().len()));
                for (index, name) in references.set().names().enumerate() {
                    let marker = if index == references.set().selected_index() {
                        "▶"
                    } else {
                        " "
                    };
                    ui.monospace(format!("{marker} {name}"));
                }

                ui.separator();
                let position = references.position();
                ui.label(format!(
                    "Position: {:.2} / {:.2} / {:.2}",
                    position.x, position.y, position.z
                ));
                if let Some(widget) = self.state.widget() {
                    ui.label(format!("Modus: {:?}", widget.mode()));
                }
                ui.label(format!(
                    "Commands: {}",
                    self.state.command_log.len()
                ));

                ui.separator();
                ui.small("Ziehen: Kamera drehen · Mausrad: Zoom · Q/E: Gizmo drehen");
            });

        if let Some(index) = switch_to {
            self.active_scene = index;
            let id = self.scenes[index].id;
            self.state.references.switch_scene(id);
        }
    }
}

fn demo_catalog() -> StaticCatalog {
    let items = || {
        vec![
            ReferenceItem::new("Kind 1,20 m", VisualHandle(1)),
            ReferenceItem::new("Mensch 1,80 m", VisualHandle(2)),
            ReferenceItem::new("Tür 2,00 m", VisualHandle(3)),
            ReferenceItem::new("Auto 4,50 m", VisualHandle(4)),
        ]
    };
    StaticCatalog::new()
        .with(RenderPipeline::Standard, items())
        .with(RenderPipeline::Universal, items())
        .with(RenderPipeline::HighDefinition, items())
}

fn demo_dimensions() -> ReferenceDimensions {
    ReferenceDimensions::new()
        .with(VisualHandle(1), Vec3::new(0.35, 1.2, 0.25))
        .with(VisualHandle(2), Vec3::new(0.5, 1.8, 0.3))
        .with(VisualHandle(3), Vec3::new(0.9, 2.0, 0.1))
        .with(VisualHandle(4), Vec3::new(1.8, 1.5, 4.5))
}

fn demo_scenes() -> Vec<DemoScene> {
    let mut hall = StaticScene::with_ground(ViewportCamera::default());
    hall.add_box(Aabb::standing(Vec3::new(-3.0, 0.0, -2.0), Vec3::new(2.0, 1.0, 2.0)));
    hall.add_box(Aabb::standing(Vec3::new(3.0, 0.0, -4.0), Vec3::new(1.5, 3.0, 1.5)));

    let mut yard = StaticScene::with_ground(ViewportCamera::default());
    yard.add_box(Aabb::standing(Vec3::new(0.0, 0.0, -6.0), Vec3::new(8.0, 4.0, 1.0)));
    yard.add_box(Aabb::standing(Vec3::new(4.0, 0.0, 0.0), Vec3::new(1.0, 0.8, 1.0)));

    vec![
        DemoScene {
            id: "hall",
            label: "Halle",
            scene: hall,
        },
        DemoScene {
            id: "yard",
            label: "Hof",
            scene: yard,
        },
    ]
}
