use squish_core::consts::WHEEL_NOTCH_UNITS;
use squish_core::format::format_file_size;
use squish_core::view::{Axis, Pane, PointerButton, Vec2, WheelEvent, WheelModifiers};

use crate::app::SquishApp;
use crate::convert::{from_vec2, to_vec2};

/// Horizontal gap between the two panes.
const PANE_SPACING: f32 = 20.0;
/// Height reserved under each pane for its size label.
const LABEL_HEIGHT: f32 = 28.0;
const SCROLLBAR_THICKNESS: f32 = 6.0;
const MIN_THUMB_LENGTH: f32 = 16.0;
/// egui reports pixel-precise wheels in points; this many make one notch.
const POINTS_PER_NOTCH: f32 = 40.0;
/// Page-unit wheels move one full page, i.e. this many notches.
const NOTCHES_PER_PAGE: f32 = 7.0;

pub fn show(ctx: &egui::Context, app: &mut SquishApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        let half = ((rect.width() - PANE_SPACING) / 2.0).max(0.0);

        let left = egui::Rect::from_min_size(rect.min, egui::vec2(half, rect.height()));
        let right = egui::Rect::from_min_size(
            egui::pos2(rect.max.x - half, rect.min.y),
            egui::vec2(half, rect.height()),
        );

        show_pane(ui, app, Pane::Original, left);
        show_pane(ui, app, Pane::Compressed, right);

        ui.advance_cursor_after_rect(rect);
    });
}

fn show_pane(ui: &mut egui::Ui, app: &mut SquishApp, pane: Pane, area: egui::Rect) {
    let image_rect = egui::Rect::from_min_max(
        area.min,
        egui::pos2(area.max.x, (area.max.y - LABEL_HEIGHT).max(area.min.y)),
    );
    let label_rect = egui::Rect::from_min_max(egui::pos2(area.min.x, image_rect.max.y), area.max);

    app.viewer
        .dual
        .set_viewport_size(pane, Vec2::new(image_rect.width(), image_rect.height()));
    paint_background(ui, image_rect);

    let texture_id = app.viewer.texture(pane).map(|t| t.id());
    if let Some(texture_id) = texture_id {
        let response = ui.interact(image_rect, ui.id().with(pane), egui::Sense::click_and_drag());

        handle_pan(ui, &response, app, pane);
        handle_wheel(ui, &response, app, pane);

        if response.double_clicked() {
            app.viewer.dual.fit_to_viewport();
        }

        draw_image(ui, app, pane, texture_id, image_rect);
        draw_scrollbars(ui, app, pane, image_rect);
    } else {
        show_placeholder(ui, app, pane, image_rect);
    }

    draw_pane_title(ui, image_rect, pane);
    draw_size_label(ui, app, pane, label_rect);
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut SquishApp, pane: Pane) {
    let viewer = &mut app.viewer;

    if response.drag_started_by(egui::PointerButton::Primary) {
        let press = ui
            .input(|i| i.pointer.press_origin())
            .or(response.interact_pointer_pos());
        if let Some(pos) = press {
            let target = viewer.dual.driver(pane);
            let scroll = viewer.dual.scroll_offset(target);
            if viewer.pan.press(PointerButton::Primary, to_vec2(pos.to_vec2()), scroll) {
                viewer.pan_target = Some(target);
            }
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let (Some(target), Some(pos)) = (viewer.pan_target, response.interact_pointer_pos()) {
            let accelerate = ui.input(|i| i.modifiers.shift);
            if let Some(offset) = viewer.pan.drag(to_vec2(pos.to_vec2()), accelerate) {
                viewer.dual.set_scroll_offset(target, offset);
            }
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary)
        && viewer.pan.release(PointerButton::Primary)
    {
        viewer.pan_target = None;
    }
}

fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut SquishApp, pane: Pane) {
    if !response.contains_pointer() {
        return;
    }

    let events: Vec<WheelEvent> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::MouseWheel {
                    unit,
                    delta,
                    modifiers,
                    ..
                } => Some(WheelEvent {
                    delta: raw_wheel_delta(*unit, *delta),
                    modifiers: WheelModifiers {
                        zoom: modifiers.command,
                        horizontal: modifiers.shift,
                    },
                }),
                _ => None,
            })
            .collect()
    });

    for event in events {
        let driver = app.viewer.dual.pane(app.viewer.dual.driver(pane));
        let page_step = Vec2::new(
            driver.bar(Axis::Horizontal).page_step(),
            driver.bar(Axis::Vertical).page_step(),
        );
        for action in app.viewer.wheel.dispatch(event, page_step) {
            app.viewer.dual.apply_wheel(pane, action);
        }
    }
}

/// Wheel delta in raw units of 120 per notch.
fn raw_wheel_delta(unit: egui::MouseWheelUnit, delta: egui::Vec2) -> Vec2 {
    let per_unit = match unit {
        egui::MouseWheelUnit::Point => WHEEL_NOTCH_UNITS / POINTS_PER_NOTCH,
        egui::MouseWheelUnit::Line => WHEEL_NOTCH_UNITS,
        egui::MouseWheelUnit::Page => WHEEL_NOTCH_UNITS * NOTCHES_PER_PAGE,
    };
    to_vec2(delta * per_unit)
}

fn draw_image(
    ui: &egui::Ui,
    app: &SquishApp,
    pane: Pane,
    texture_id: egui::TextureId,
    image_rect: egui::Rect,
) {
    let state = app.viewer.dual.pane(pane);
    let displayed = from_vec2(state.displayed_size());
    let offset = from_vec2(state.scroll_offset());

    // Content smaller than the pane is centered.
    let padding = ((image_rect.size() - displayed) / 2.0).max(egui::Vec2::ZERO);
    let img_rect = egui::Rect::from_min_size(image_rect.min + padding - offset, displayed);

    ui.painter_at(image_rect).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_scrollbars(ui: &egui::Ui, app: &SquishApp, pane: Pane, image_rect: egui::Rect) {
    let painter = ui.painter_at(image_rect);
    let state = app.viewer.dual.pane(pane);
    let color = egui::Color32::from_white_alpha(90);

    for axis in Axis::BOTH {
        let bar = state.bar(axis);
        let span = bar.max() - bar.min();
        if span <= 0.0 {
            continue;
        }

        let track = match axis {
            Axis::Horizontal => image_rect.width(),
            Axis::Vertical => image_rect.height(),
        };
        let length = (track * bar.page_step() / (bar.page_step() + span))
            .clamp(MIN_THUMB_LENGTH.min(track), track);
        let start = bar.normalized() * (track - length);

        let thumb = match axis {
            Axis::Horizontal => egui::Rect::from_min_size(
                egui::pos2(image_rect.min.x + start, image_rect.max.y - SCROLLBAR_THICKNESS),
                egui::vec2(length, SCROLLBAR_THICKNESS),
            ),
            Axis::Vertical => egui::Rect::from_min_size(
                egui::pos2(image_rect.max.x - SCROLLBAR_THICKNESS, image_rect.min.y + start),
                egui::vec2(SCROLLBAR_THICKNESS, length),
            ),
        };
        painter.rect_filled(thumb, 3.0, color);
    }
}

fn show_placeholder(ui: &egui::Ui, app: &SquishApp, pane: Pane, rect: egui::Rect) {
    let text = match pane {
        Pane::Original => "Open an image to begin",
        Pane::Compressed if app.ui_state.is_busy() => "Compressing...",
        Pane::Compressed => "",
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}

fn draw_pane_title(ui: &egui::Ui, rect: egui::Rect, pane: Pane) {
    ui.painter().text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        pane.to_string(),
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn draw_size_label(ui: &egui::Ui, app: &SquishApp, pane: Pane, rect: egui::Rect) {
    let text = match pane {
        Pane::Original => app.ui_state.input_size_bytes.map(format_file_size),
        Pane::Compressed => app.ui_state.result.as_ref().map(|r| r.size_label()),
    };
    let Some(text) = text else {
        return;
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(16.0),
        ui.visuals().text_color(),
    );
}
