use egui::Pos2;
use sticker_sketchpad::surface::{DrawOp, RecordingSurface};
use sticker_sketchpad::{InputEvent, Preview, Sketchpad, SketchpadConfig, ToolKind};

fn sketchpad() -> Sketchpad {
    Sketchpad::without_fonts(&SketchpadConfig::default())
}

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown { pos: Pos2::new(x, y) }
}

fn mv(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove { pos: Pos2::new(x, y) }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp { pos: Pos2::new(x, y) }
}

#[test]
fn test_click_commits_single_point_stroke() {
    let mut pad = sketchpad();
    pad.handle_events(&[down(12.0, 34.0), up(12.0, 34.0)]);

    assert_eq!(pad.history_len(), 1);
    let stroke = pad.commands()[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[Pos2::new(12.0, 34.0)]);
    assert_eq!(stroke.thickness(), 2.0);
}

#[test]
fn test_drag_accumulates_points_in_order() {
    let mut pad = sketchpad();
    pad.select_marker(6.0);

    let moves: Vec<Pos2> = (1..=5).map(|i| Pos2::new(i as f32 * 10.0, 5.0)).collect();
    pad.handle_event(&down(0.0, 5.0));
    for pos in &moves {
        pad.handle_event(&InputEvent::PointerMove { pos: *pos });
    }
    pad.handle_event(&up(50.0, 5.0));

    assert_eq!(pad.history_len(), 1);
    let stroke = pad.commands()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), moves.len() + 1);
    assert_eq!(stroke.points()[0], Pos2::new(0.0, 5.0));
    assert_eq!(&stroke.points()[1..], moves.as_slice());
    assert_eq!(stroke.thickness(), 6.0);
}

#[test]
fn test_sticker_follows_drag_to_last_move() {
    let mut pad = sketchpad();
    pad.select_sticker("🐢");
    assert_eq!(pad.tools().kind(), ToolKind::Sticker);

    pad.handle_events(&[down(10.0, 10.0), mv(20.0, 25.0), mv(40.0, 45.0), up(40.0, 45.0)]);

    assert_eq!(pad.history_len(), 1);
    let sticker = pad.commands()[0].as_sticker().unwrap();
    assert_eq!(sticker.position(), Pos2::new(40.0, 45.0));
    assert_eq!(sticker.glyph(), "🐢");
}

#[test]
fn test_moves_after_release_do_not_extend_stroke() {
    let mut pad = sketchpad();
    pad.handle_events(&[down(1.0, 1.0), mv(2.0, 2.0), up(2.0, 2.0), mv(3.0, 3.0)]);

    assert_eq!(pad.commands()[0].as_stroke().unwrap().points().len(), 2);
    assert!(pad.preview().is_some());
}

#[test]
fn test_no_preview_while_drawing() {
    let mut pad = sketchpad();
    pad.handle_events(&[mv(5.0, 5.0), down(5.0, 5.0), mv(6.0, 6.0)]);

    assert!(pad.is_drawing());
    let mut surface = RecordingSurface::new();
    pad.render(&mut surface);
    assert!(!surface.ops().iter().any(|op| matches!(op, DrawOp::Circle { .. })));
}

#[test]
fn test_release_and_leave_leave_at_most_one_preview() {
    let mut pad = sketchpad();
    pad.handle_events(&[mv(5.0, 5.0), down(5.0, 5.0), mv(6.0, 6.0), up(6.0, 6.0)]);
    assert!(pad.preview().is_none());

    pad.handle_events(&[mv(7.0, 7.0), mv(8.0, 8.0)]);
    assert_eq!(
        pad.preview(),
        Some(&Preview::Marker {
            position: Pos2::new(8.0, 8.0),
            thickness: 2.0
        })
    );
    let mut surface = RecordingSurface::new();
    pad.render(&mut surface);
    let previews = surface
        .frame()
        .iter()
        .filter(|op| matches!(op, DrawOp::Circle { .. }))
        .count();
    assert_eq!(previews, 1);

    pad.handle_event(&InputEvent::PointerLeave);
    assert!(pad.preview().is_none());
}

#[test]
fn test_leave_ends_drawing_like_release() {
    let mut pad = sketchpad();
    pad.handle_events(&[down(1.0, 1.0), mv(2.0, 2.0)]);
    assert!(pad.handle_event(&InputEvent::PointerLeave));

    assert!(!pad.is_drawing());
    assert!(pad.preview().is_none());

    // Coming back without a press must not keep drawing.
    pad.handle_event(&mv(3.0, 3.0));
    assert_eq!(pad.commands()[0].as_stroke().unwrap().points().len(), 2);
}

#[test]
fn test_sticker_tool_without_glyph_commits_nothing() {
    let mut pad = sketchpad();
    pad.select_tool(ToolKind::Sticker);
    assert!(pad.tools().glyph().is_none());

    pad.handle_events(&[mv(4.0, 4.0), down(5.0, 5.0), mv(6.0, 6.0), up(6.0, 6.0)]);

    assert_eq!(pad.history_len(), 0);
    assert!(pad.preview().is_none());
    assert!(!pad.is_drawing());
}

#[test]
fn test_press_without_glyph_still_tracks_button() {
    let mut pad = sketchpad();
    pad.select_tool(ToolKind::Sticker);
    pad.handle_event(&down(5.0, 5.0));
    assert!(pad.is_drawing());

    // Picking a sticker mid-press does not retroactively start a command.
    pad.select_sticker("🎵");
    pad.handle_event(&mv(6.0, 6.0));
    assert_eq!(pad.history_len(), 0);
}

#[test]
fn test_undo_during_press_detaches_drag() {
    let mut pad = sketchpad();
    pad.handle_events(&[down(1.0, 1.0), mv(2.0, 2.0)]);
    pad.undo();
    pad.handle_events(&[mv(3.0, 3.0), up(3.0, 3.0)]);

    assert_eq!(pad.history_len(), 0);
    pad.redo();
    assert_eq!(pad.commands()[0].as_stroke().unwrap().points().len(), 2);
}

#[test]
fn test_sticker_size_change_resizes_placed_stickers() {
    let mut pad = sketchpad();
    pad.select_sticker("🌸");
    pad.handle_events(&[down(30.0, 30.0), up(30.0, 30.0)]);

    let text_size = |pad: &Sketchpad| {
        let mut surface = RecordingSurface::new();
        pad.render(&mut surface);
        surface
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { size, .. } => Some(*size),
                _ => None,
            })
            .unwrap()
    };

    assert_eq!(text_size(&pad), 24.0);
    pad.set_sticker_render_size(32.0);
    assert_eq!(text_size(&pad), 32.0);
}

#[test]
fn test_custom_sticker_palette_boundary() {
    let mut pad = sketchpad();
    let before = pad.palette().glyphs().len();
    pad.commit_custom_sticker("  ");
    assert_eq!(pad.palette().glyphs().len(), before);

    pad.commit_custom_sticker("🔥");
    assert_eq!(pad.palette().glyphs().last().map(String::as_str), Some("🔥"));

    pad.choose_sticker_set("animals");
    assert_eq!(pad.palette().glyphs()[0], "🐱");
}

#[test]
fn test_click_on_window_over_canvas_keeps_history() {
    use sticker_sketchpad::input::{CanvasInput, PointerFrame};

    let mut pad = sketchpad();
    pad.handle_events(&[down(10.0, 10.0), up(10.0, 10.0)]);
    pad.undo();
    assert!(pad.can_redo());

    let canvas = egui::Rect::from_min_size(Pos2::new(50.0, 50.0), egui::vec2(256.0, 256.0));
    let mut input = CanvasInput::new(canvas);
    let events = input.translate(PointerFrame {
        hover_pos: Some(Pos2::new(178.0, 178.0)),
        canvas_hovered: false,
        primary_pressed: true,
        primary_released: true,
    });
    pad.handle_events(&events);

    assert_eq!(pad.history_len(), 0);
    assert!(pad.can_redo());
    assert!(pad.preview().is_none());
}
