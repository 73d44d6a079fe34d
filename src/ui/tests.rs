use super::state::CardRef;
use super::*;
use crate::catalog::Catalog;
use crate::constants::WHEEL_LINE_HEIGHT;
use crate::roam::roam_delta;
use crate::transition::DetailPhase;
use crate::types::*;
use eframe::egui;

/// Builtin catalog without image URLs, so no fetch threads are started.
fn offline_catalog() -> Catalog {
    let mut works = Catalog::builtin().unwrap().works().to_vec();
    for work in &mut works {
        work.image = None;
    }
    Catalog::new(works).unwrap()
}

/// A gallery with a deterministic pan offset of zero.
fn test_app() -> GalleryApp {
    let mut app = GalleryApp::with_catalog(offline_catalog());
    app.canvas.position = Position::ZERO;
    app
}

/// Run one headless frame at `time` with the provided input events.
fn run_frame(
    ctx: &egui::Context,
    app: &mut GalleryApp,
    time: f64,
    events: Vec<egui::Event>,
) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.time = Some(time);
    raw.events = events;
    ctx.run(raw, |ctx| app.show(ctx))
}

fn key(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: Some(key),
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    }
}

fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    }
}

fn click(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        button(pos, true),
        button(pos, false),
    ]
}

fn wheel_lines_down(lines: f32) -> egui::Event {
    // egui reports content motion: scrolling down moves content up.
    egui::Event::MouseWheel {
        unit: egui::MouseWheelUnit::Line,
        delta: egui::vec2(0.0, -lines),
        modifiers: egui::Modifiers::default(),
    }
}

/// Center of the first cell of the central tile when the offset is zero.
const FIRST_CARD: egui::Pos2 = egui::pos2(145.0, 145.0);

/// Opens the first card and runs frames until it is fully grown (t = 2.0).
fn open_first_card(ctx: &egui::Context, app: &mut GalleryApp) {
    run_frame(ctx, app, 0.0, vec![]);
    run_frame(ctx, app, 1.0, click(FIRST_CARD));
    run_frame(ctx, app, 1.02, vec![]);
    run_frame(ctx, app, 2.0, vec![]);
    assert_eq!(app.detail.phase(), DetailPhase::Open);
}

/// Clicks at `pos` over two frames starting at `time`.
fn click_over_frames(ctx: &egui::Context, app: &mut GalleryApp, pos: egui::Pos2, time: f64) {
    run_frame(
        ctx,
        app,
        time,
        vec![egui::Event::PointerMoved(pos), button(pos, true)],
    );
    run_frame(ctx, app, time + 0.05, vec![button(pos, false)]);
}

#[test]
fn s_key_toggles_settings_panel() {
    let ctx = egui::Context::default();
    let mut app = test_app();

    run_frame(&ctx, &mut app, 0.0, vec![key(egui::Key::S)]);
    assert!(app.show_settings);

    run_frame(&ctx, &mut app, 0.1, vec![key(egui::Key::S)]);
    assert!(!app.show_settings);
}

#[test]
fn dragging_pans_by_pointer_delta_without_opening() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    run_frame(&ctx, &mut app, 0.0, vec![]);

    let events = vec![
        egui::Event::PointerMoved(egui::pos2(100.0, 100.0)),
        button(egui::pos2(100.0, 100.0), true),
        egui::Event::PointerMoved(egui::pos2(150.0, 130.0)),
        button(egui::pos2(150.0, 130.0), false),
    ];
    run_frame(&ctx, &mut app, 0.5, events);

    assert_eq!(app.canvas.position, Position::new(50.0, 30.0));
    assert!(!app.pan.is_dragging());
    assert_eq!(app.detail.phase(), DetailPhase::Closed);
}

#[test]
fn clicking_a_card_opens_it_from_its_tile() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    run_frame(&ctx, &mut app, 0.0, vec![]);

    run_frame(&ctx, &mut app, 1.0, click(FIRST_CARD));
    assert_eq!(app.detail.phase(), DetailPhase::Opening);
    let selected = app.detail.selected().expect("a card should be selected");
    assert_eq!(selected.data.id, app.catalog.works()[0].id);
    assert_eq!(
        selected.initial_styles,
        InitialStyles {
            x: -454.5,
            y: -254.5,
            scale: 0.2,
        }
    );

    run_frame(&ctx, &mut app, 1.02, vec![]);
    assert_eq!(app.detail.phase(), DetailPhase::Open);
}

#[test]
fn clicking_a_gap_opens_nothing() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    run_frame(&ctx, &mut app, 0.0, vec![]);

    // Cells are 291px wide with a 12px gap after them.
    run_frame(&ctx, &mut app, 1.0, click(egui::pos2(296.0, 145.0)));
    assert_eq!(app.detail.phase(), DetailPhase::Closed);
}

#[test]
fn escape_closes_then_disposes_detail_view() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    run_frame(&ctx, &mut app, 0.0, vec![]);
    run_frame(&ctx, &mut app, 1.0, click(FIRST_CARD));
    run_frame(&ctx, &mut app, 1.02, vec![]);

    run_frame(&ctx, &mut app, 2.0, vec![key(egui::Key::Escape)]);
    assert_eq!(app.detail.phase(), DetailPhase::Closing);
    assert!(app.detail.selected().is_some());

    run_frame(&ctx, &mut app, 2.41, vec![]);
    assert_eq!(app.detail.phase(), DetailPhase::Closed);
    assert!(app.detail.selected().is_none());
}

#[test]
fn canvas_roams_after_idle_period() {
    let ctx = egui::Context::default();
    let mut app = test_app();

    run_frame(&ctx, &mut app, 0.0, vec![]);
    assert_eq!(app.canvas.position, Position::ZERO);

    run_frame(&ctx, &mut app, 3.0, vec![]);
    assert_eq!(app.canvas.position, roam_delta(3.0));
}

#[test]
fn roam_is_blocked_while_settings_are_open() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    app.show_settings = true;

    run_frame(&ctx, &mut app, 0.0, vec![]);
    run_frame(&ctx, &mut app, 3.0, vec![]);
    assert_eq!(app.canvas.position, Position::ZERO);
}

#[test]
fn key_press_resets_idle_timer() {
    let ctx = egui::Context::default();
    let mut app = test_app();

    run_frame(&ctx, &mut app, 0.0, vec![]);
    run_frame(&ctx, &mut app, 2.5, vec![key(egui::Key::A)]);
    assert_eq!(app.canvas.position, Position::ZERO);
    assert!(app.roam.idle_seconds(2.5) < 1e-9);
}

#[test]
fn teardown_stops_roaming() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    app.teardown();

    run_frame(&ctx, &mut app, 0.0, vec![]);
    run_frame(&ctx, &mut app, 5.0, vec![]);
    assert!(!app.roam.is_running());
    assert_eq!(app.canvas.position, Position::ZERO);
}

#[test]
fn hovering_a_card_marks_it() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    run_frame(&ctx, &mut app, 0.0, vec![]);

    run_frame(&ctx, &mut app, 0.1, vec![egui::Event::PointerMoved(FIRST_CARD)]);
    assert_eq!(
        app.canvas.hovered,
        Some(CardRef {
            tile_key: "0-0".into(),
            index: 0,
        })
    );
}

#[test]
fn wheel_and_pointer_down_are_ignored_while_detail_is_showing() {
    let mut app = test_app();
    app.canvas.viewport = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1200.0, 800.0));

    app.on_wheel(Position::new(0.0, 40.0), 0.0);
    assert_eq!(app.canvas.position, Position::new(0.0, 40.0));

    let card = app.card_at(FIRST_CARD).expect("a card under the pointer");
    app.open_card(&card, 1.0);
    app.on_wheel(Position::new(0.0, 40.0), 1.1);
    app.on_pointer_down(FIRST_CARD, true, 1.1);

    assert_eq!(app.canvas.position, Position::new(0.0, 40.0));
    assert!(!app.pan.is_dragging());
}

#[test]
fn pointer_down_off_canvas_does_not_drag() {
    let mut app = test_app();
    app.on_pointer_down(egui::pos2(10.0, 10.0), false, 0.0);
    app.on_pointer_move(egui::pos2(60.0, 60.0), 0.1);
    assert!(!app.pan.is_dragging());
    assert_eq!(app.canvas.position, Position::ZERO);
}

#[test]
fn zoom_is_applied_about_viewport_center() {
    let mut app = test_app();
    app.canvas.viewport = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1200.0, 800.0));
    app.canvas.zoom = 2.0;

    assert_eq!(app.canvas_to_screen(Position::new(600.0, 400.0)), egui::pos2(600.0, 400.0));
    assert_eq!(app.canvas_to_screen(Position::new(500.0, 400.0)), egui::pos2(400.0, 400.0));
    assert_eq!(app.screen_to_canvas(egui::pos2(400.0, 400.0)), Position::new(500.0, 400.0));
}

#[test]
fn saved_settings_are_clamped_on_restore() {
    let json = r#"{"config":{"gap":500.0,"base_scale":0.01,"viewport_zoom":9.0}}"#;
    let app = GalleryApp::from_json(json).unwrap();
    assert_eq!(app.config.gap, 50.0);
    assert_eq!(app.config.base_scale, 0.1);
    assert_eq!(app.config.viewport_zoom, 2.0);
}

#[test]
fn settings_survive_a_json_round_trip() {
    let mut app = test_app();
    app.config.set_gap(20.0);
    app.config.set_base_scale(0.6);
    app.config.zoom_in();

    let restored = GalleryApp::from_json(&app.to_json().unwrap()).unwrap();
    assert_eq!(restored.config, app.config);
    // View state is not persisted.
    assert_eq!(restored.canvas.position, Position::new(-100.0, -100.0));
}

#[test]
fn backdrop_click_closes_then_disposes_detail_view() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    open_first_card(&ctx, &mut app);

    click_over_frames(&ctx, &mut app, egui::pos2(20.0, 20.0), 2.1);
    assert_eq!(app.detail.phase(), DetailPhase::Closing);

    run_frame(&ctx, &mut app, 2.6, vec![]);
    assert_eq!(app.detail.phase(), DetailPhase::Closed);
}

#[test]
fn clicking_the_card_body_keeps_it_open() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    open_first_card(&ctx, &mut app);

    // The full card spans (152, 80)..(1048, 720) in a 1200x800 viewport.
    click_over_frames(&ctx, &mut app, egui::pos2(600.0, 600.0), 2.1);
    assert_eq!(app.detail.phase(), DetailPhase::Open);
}

#[test]
fn close_button_closes_detail_view() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    open_first_card(&ctx, &mut app);

    // 40px button inset 24px from the card's top-right corner.
    click_over_frames(&ctx, &mut app, egui::pos2(1004.0, 124.0), 2.1);
    assert_eq!(app.detail.phase(), DetailPhase::Closing);
}

#[test]
fn wheel_line_scrolls_content_down() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    run_frame(&ctx, &mut app, 0.0, vec![]);

    run_frame(&ctx, &mut app, 0.1, vec![wheel_lines_down(1.0)]);
    assert_eq!(
        app.canvas.position,
        Position::new(0.0, f64::from(WHEEL_LINE_HEIGHT))
    );
}

#[test]
fn wheel_events_are_ignored_while_detail_is_showing() {
    let ctx = egui::Context::default();
    let mut app = test_app();
    open_first_card(&ctx, &mut app);

    run_frame(&ctx, &mut app, 2.1, vec![wheel_lines_down(3.0)]);
    assert_eq!(app.canvas.position, Position::ZERO);
}
