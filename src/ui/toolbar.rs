//! Zeichnet die Overlay-Toolbar im Viewport.
//!
//! Das Layout kommt aus dem App-Layer; hier wird nur gemalt. Einzige
//! Ausnahme ist das Farbfeld: dessen Farbwähler ist ein egui-Widget und
//! meldet Änderungen als `ColorChanged`. In HDR-Pipelines steht neben dem
//! Farbwähler ein Intensitäts-Regler, mit dem RGB über 1.0 gehen kann.

use super::input::to_screen;
use crate::app::{OverlayEvent, OverlayState, ToolbarAction, ToolbarButton, WidgetState};
use crate::shared::ScreenRect;

/// Obergrenze des HDR-Intensitätsreglers
const MAX_HDR_INTENSITY: f32 = 16.0;

/// Farbe des Aktiv-Indikators
const INDICATOR_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 150, 190, 200);

/// Zustand, den die Buttons zum Beschriften brauchen.
struct ToolbarContext<'a> {
    widget: WidgetState,
    label: &'a str,
    visible: bool,
}

/// Rendert die Toolbar und gibt Farbänderungen als Events zurück.
pub fn render_toolbar(
    ui: &mut egui::Ui,
    viewport: egui::Rect,
    state: &mut OverlayState,
) -> Vec<OverlayEvent> {
    let mut events = Vec::new();

    let buttons = state.toolbar_buttons();
    let widget = state.ensure_widget();
    let indicator_scale = state.options.toolbar.indicator_scale;
    let label = state
        .references
        .current_item()
        .map(|item| item.name().to_owned())
        .unwrap_or_else(|_| "—".to_owned());
    let ctx = ToolbarContext {
        widget,
        label: &label,
        visible: state.references.is_visible(),
    };

    let hover = ui.input(|i| i.pointer.hover_pos());
    for button in &buttons {
        let rect = to_egui_rect(button.rect, viewport);
        let hovered = button.enabled && hover.is_some_and(|p| rect.contains(p));

        if button.action == ToolbarAction::Color {
            let mut color = state.references.color();
            if color_field(ui, rect, &mut color, state.references.hdr_color()) {
                events.push(OverlayEvent::ColorChanged { color });
            }
            continue;
        }

        paint_button(ui, rect, button, &ctx, hovered);
        if is_active(button.action, &ctx) {
            let indicator = to_egui_rect(button.indicator_rect(indicator_scale), viewport);
            ui.painter().rect_filled(
                indicator,
                egui::CornerRadius::same(1),
                INDICATOR_COLOR.gamma_multiply(0.35),
            );
        }
    }

    events
}

fn paint_button(
    ui: &egui::Ui,
    rect: egui::Rect,
    button: &ToolbarButton,
    ctx: &ToolbarContext<'_>,
    hovered: bool,
) {
    let visuals = ui.visuals();
    let pressed = ctx
        .widget
        .pressed
        .is_some_and(|p| p.action == button.action);

    let fill = if pressed {
        visuals.widgets.active.bg_fill
    } else if hovered {
        visuals.widgets.hovered.bg_fill
    } else {
        visuals.widgets.inactive.bg_fill
    };
    let stroke = egui::Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);

    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(2), fill);
    painter.rect_stroke(
        rect,
        egui::CornerRadius::same(2),
        stroke,
        egui::StrokeKind::Inside,
    );

    let text_color = if button.enabled {
        visuals.text_color()
    } else {
        visuals.weak_text_color()
    };
    let font_id = egui::TextStyle::Button.resolve(ui.style());
    let text = button_text(button.action, ctx);
    painter.with_clip_rect(rect.shrink(1.0)).text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        font_id,
        text_color,
    );
}

fn button_text<'a>(action: ToolbarAction, ctx: &ToolbarContext<'a>) -> &'a str {
    match action {
        ToolbarAction::DragHandle => "⋮",
        ToolbarAction::ToggleSubControls if ctx.widget.show_sub_controls => "◂",
        ToolbarAction::ToggleSubControls => "▸",
        ToolbarAction::ToggleVisibility if ctx.visible => "👁",
        ToolbarAction::ToggleVisibility => "◌",
        ToolbarAction::Previous => "◀",
        ToolbarAction::CurrentLabel => ctx.label,
        ToolbarAction::Next => "▶",
        ToolbarAction::PlacePosition => "✥",
        ToolbarAction::ToggleRotation => "⟳",
        ToolbarAction::Color => "",
    }
}

/// Ob der Modus eines Buttons gerade aktiv ist (Indikator zeichnen).
fn is_active(action: ToolbarAction, ctx: &ToolbarContext<'_>) -> bool {
    match action {
        ToolbarAction::ToggleVisibility => ctx.visible,
        ToolbarAction::PlacePosition => ctx.widget.is_picking(),
        ToolbarAction::ToggleRotation => ctx.widget.gizmo_active(),
        _ => false,
    }
}

/// Farbwähler im Farbfeld. Gibt `true` zurück, wenn sich die Farbe geändert hat.
fn color_field(ui: &mut egui::Ui, rect: egui::Rect, color: &mut [f32; 4], hdr: bool) -> bool {
    let layout = if hdr {
        egui::Layout::left_to_right(egui::Align::Center)
    } else {
        egui::Layout::centered_and_justified(egui::Direction::LeftToRight)
    };
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect.shrink(2.0))
            .layout(layout),
    );

    if !hdr {
        return child.color_edit_button_rgba_unmultiplied(color).changed();
    }

    child.spacing_mut().item_spacing.x = 1.0;
    let (mut base, mut intensity) = split_intensity(*color);
    let picked = child
        .color_edit_button_rgba_unmultiplied(&mut base)
        .on_hover_text("Farbe (lineare HDR-Pipeline)")
        .changed();
    let scaled = child
        .add(
            egui::DragValue::new(&mut intensity)
                .speed(0.05)
                .range(1.0..=MAX_HDR_INTENSITY)
                .max_decimals(1),
        )
        .on_hover_text("HDR-Intensität")
        .changed();

    if picked || scaled {
        *color = with_intensity(base, intensity);
        return true;
    }
    false
}

/// Zerlegt eine HDR-Farbe in Grundfarbe (RGB in 0..1) und Intensität (>= 1).
fn split_intensity(color: [f32; 4]) -> ([f32; 4], f32) {
    let intensity = color[0].max(color[1]).max(color[2]).max(1.0);
    let base = [
        color[0] / intensity,
        color[1] / intensity,
        color[2] / intensity,
        color[3],
    ];
    (base, intensity)
}

/// Skaliert RGB einer Grundfarbe mit der Intensität; Alpha bleibt.
fn with_intensity(base: [f32; 4], intensity: f32) -> [f32; 4] {
    [
        base[0] * intensity,
        base[1] * intensity,
        base[2] * intensity,
        base[3],
    ]
}

fn to_egui_rect(rect: ScreenRect, viewport: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_max(to_screen(rect.min, viewport), to_screen(rect.max(), viewport))
}
