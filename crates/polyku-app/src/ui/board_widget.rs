//! The interactive board widget.
//!
//! Collects pointer gestures into [`GestureEvent`]s, hands them to the
//! shared [`BoardInput`] mapper, then replays the renderer's draw commands
//! onto the egui painter with the zoom/pan transform applied.

use eframe::egui::{
    Align2, Context, FontId, Pos2, Rect as UiRect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use polyku_board::{
    BoardAction, BoardGeometry, BoardInput, BoardPaints, BoardView, DrawCmd, FontSizes,
    GestureEvent, GlyphExtents, Point, Rect, ScreenTransform, TextMetrics, render,
};

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
    ui::theme,
};

/// Fraction of a font's line height a digit glyph actually covers.
const CAP_HEIGHT_RATIO: f32 = 0.72;
/// Board side length at which fonts render at their nominal point size.
const REFERENCE_SIDE: f32 = 480.0;

struct EguiTextMetrics<'a> {
    ctx: &'a Context,
}

impl TextMetrics for EguiTextMetrics<'_> {
    fn measure(&self, glyph: char, font_px: f32) -> GlyphExtents {
        let font_id = FontId::proportional(font_px);
        self.ctx.fonts_mut(|fonts| GlyphExtents {
            width: fonts.glyph_width(&font_id, glyph),
            height: fonts.row_height(&font_id) * CAP_HEIGHT_RATIO,
        })
    }
}

/// Shows the board, feeding resolved gestures into the action queue.
pub fn show(ui: &mut Ui, state: &AppState, input: &mut BoardInput, queue: &mut ActionRequestQueue) {
    let side = ui.available_size().min_elem().max(1.0);
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());

    input.set_zoomable(state.settings.zoomable);
    // A finished board stops taking gestures; the transform snaps back so
    // the whole solution is visible.
    input.set_enabled(!state.board.is_solved());
    let geometry = BoardGeometry::new(state.board.size(), side);

    // Gestures first, so this frame paints with the updated transform.
    let zoom_delta = ui.input(|i| i.zoom_delta());
    if zoom_delta != 1.0
        && let Some(pos) = response.hover_pos()
    {
        input.handle(
            GestureEvent::Pinch {
                centroid: to_point(pos - rect.min),
                pan: Point::ZERO,
                zoom: zoom_delta,
            },
            &geometry,
        );
    }
    if response.dragged() {
        let drag = response.drag_delta();
        let centroid = response
            .interact_pointer_pos()
            .map_or(Point::ZERO, |p| to_point(p - rect.min));
        input.handle(
            GestureEvent::Pinch {
                centroid,
                pan: Point::new(drag.x, drag.y),
                zoom: 1.0,
            },
            &geometry,
        );
    }
    if let Some(pointer) = response.interact_pointer_pos() {
        let point = to_point(pointer - rect.min);
        if response.long_touched() || response.secondary_clicked() {
            dispatch(input.handle(GestureEvent::LongPress(point), &geometry), queue);
        } else if response.clicked() {
            dispatch(input.handle(GestureEvent::Tap(point), &geometry), queue);
        }
    }

    let view = match BoardView::with_flags(
        state.board.size(),
        state.board.cells(),
        state.board.notes(),
        state.selected,
        &[],
        state.settings.board_flags(),
    ) {
        Ok(view) => view,
        Err(err) => {
            log::error!("board state rejected by renderer: {err}");
            return;
        }
    };
    let metrics = EguiTextMetrics { ctx: ui.ctx() };
    let paints = BoardPaints::new(
        FontSizes::defaults_for(state.board.size()),
        side / REFERENCE_SIDE,
        &metrics,
    );
    let palette = theme::board_palette(ui.visuals());
    let commands = render(&view, &geometry, &paints, &palette);
    paint(ui, rect, input.screen_transform(), &commands);
}

fn dispatch(action: Option<BoardAction>, queue: &mut ActionRequestQueue) {
    match action {
        Some(BoardAction::Tap(pos)) => queue.request(Action::SelectCell(pos)),
        Some(BoardAction::LongPress(pos)) => queue.request(Action::EraseCell(pos)),
        None => {}
    }
}

fn paint(ui: &Ui, rect: UiRect, transform: ScreenTransform, commands: &[DrawCmd]) {
    let painter = ui.painter().with_clip_rect(rect);
    for command in commands {
        match *command {
            DrawCmd::FillRect { rect: area, color } => {
                painter.rect_filled(map_rect(rect.min, transform, area), 0.0, theme::to_color32(color));
            }
            DrawCmd::StrokeRoundRect {
                rect: area,
                corner_radius,
                stroke_width,
                color,
            } => {
                painter.rect_stroke(
                    map_rect(rect.min, transform, area),
                    corner_radius * transform.scale,
                    Stroke::new(stroke_width * transform.scale, theme::to_color32(color)),
                    StrokeKind::Inside,
                );
            }
            DrawCmd::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment(
                    [map_point(rect.min, transform, from), map_point(rect.min, transform, to)],
                    Stroke::new(width * transform.scale, theme::to_color32(color)),
                );
            }
            DrawCmd::Glyph {
                baseline,
                glyph,
                font_px,
                color,
            } => {
                painter.text(
                    map_point(rect.min, transform, baseline),
                    Align2::LEFT_BOTTOM,
                    glyph,
                    FontId::proportional(font_px * transform.scale),
                    theme::to_color32(color),
                );
            }
        }
    }
}

fn to_point(v: Vec2) -> Point {
    Point::new(v.x, v.y)
}

fn map_point(origin: Pos2, transform: ScreenTransform, p: Point) -> Pos2 {
    Pos2::new(
        origin.x + p.x * transform.scale + transform.translation.x,
        origin.y + p.y * transform.scale + transform.translation.y,
    )
}

fn map_rect(origin: Pos2, transform: ScreenTransform, area: Rect) -> UiRect {
    UiRect::from_min_size(
        map_point(origin, transform, area.min),
        Vec2::new(area.width * transform.scale, area.height * transform.scale),
    )
}
