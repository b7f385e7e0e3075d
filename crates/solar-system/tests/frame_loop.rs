use glam::{Vec2, Vec3};
use orrery_engine::{GameEvent, InputEvent};
use orrery_web::GameRunner;
use solar_system::game::SolarSystem;
use solar_system::picking;
use solar_system::selection::Focus;
use solar_system::sim::{CUSTOM_RESET_SPEEDS, CUSTOM_SET_SPEED, CUSTOM_TOGGLE_PAUSE};

const EVENT_TOOLTIP: f32 = 1.0;
const EVENT_SELECTION: f32 = 2.0;
const EVENT_SPEED: f32 = 3.0;
const EVENT_PAUSE: f32 = 4.0;

fn runner() -> GameRunner<SolarSystem> {
    let mut runner = GameRunner::new(SolarSystem::new());
    runner.init();
    runner
}

fn events(runner: &GameRunner<SolarSystem>) -> Vec<GameEvent> {
    runner.context().events.clone()
}

fn of_kind(events: &[GameEvent], kind: f32) -> Vec<GameEvent> {
    events.iter().filter(|e| e.kind == kind).copied().collect()
}

fn screen_of(runner: &GameRunner<SolarSystem>, name: &str) -> Vec2 {
    let sim = runner.game().sim();
    let body = sim.body_by_name(name).unwrap();
    sim.camera().project(body.position).unwrap().pos
}

/// First pixel on a coarse grid whose ray misses every planet.
fn empty_pixel(runner: &GameRunner<SolarSystem>) -> Vec2 {
    let sim = runner.game().sim();
    let cam = sim.camera();
    (0..=16)
        .flat_map(|row| (0..=16).map(move |col| (row, col)))
        .map(|(row, col)| Vec2::new(cam.viewport_width * col as f32 / 16.0, cam.viewport_height * row as f32 / 16.0))
        .find(|&px| picking::pick(cam.screen_to_ndc(px), cam, sim.bodies()).is_none())
        .unwrap()
}

fn click(runner: &mut GameRunner<SolarSystem>, pos: Vec2) {
    runner.push_input(InputEvent::PointerMove { x: pos.x, y: pos.y });
    runner.push_input(InputEvent::PointerDown { x: pos.x, y: pos.y });
    runner.push_input(InputEvent::PointerUp { x: pos.x, y: pos.y });
}

#[test]
fn first_frame_announces_every_speed() {
    let mut r = runner();
    r.frame(0.0);

    let evs = events(&r);
    let speeds = of_kind(&evs, EVENT_SPEED);
    assert_eq!(speeds.len(), 8);
    assert_eq!(speeds[2].a, 2.0);
    assert_eq!(speeds[2].b, 0.01);
    assert_eq!(of_kind(&evs, EVENT_TOOLTIP).len(), 1);
    assert_eq!(of_kind(&evs, EVENT_SELECTION)[0].a, -1.0);

    r.frame(16.0);
    assert!(of_kind(&events(&r), EVENT_SPEED).is_empty());
}

#[test]
fn frame_renders_every_sphere() {
    let mut r = runner();
    r.frame(0.0);
    let sim = r.game().sim();
    let rocks = sim.belt().map(|b| b.rocks.len()).unwrap_or(0);

    // Everything sits well inside the default view.
    assert_eq!(r.sdf_instance_count() as usize, 1 + sim.bodies().len() + rocks);
    assert_eq!(r.light_count(), 1);
    assert!(r.vector_vertex_count() > 0);

    let instances = r.sdf_buffer().instances();
    assert!(instances.windows(2).all(|w| w[0].depth >= w[1].depth));
}

#[test]
fn clicking_mars_frames_it_and_reports_selection() {
    let mut r = runner();
    r.frame(0.0);

    let pos = screen_of(&r, "Mars");
    click(&mut r, pos);
    r.tick(0.0);

    let sim = r.game().sim();
    let mars = sim.body_by_name("Mars").unwrap();
    assert_eq!(sim.focus(), Focus::Focused(mars.id));
    assert_eq!(sim.camera().position, mars.position + Vec3::new(0.0, 5.0, 10.0));
    assert_eq!(sim.info_panel().unwrap().to_string(), "Mars, Distance: 35, Size: 2.8");
    assert_eq!(r.context().camera.target, mars.position);

    let selection = of_kind(&events(&r), EVENT_SELECTION)[0];
    assert_eq!(selection.a, mars.id.0 as f32);
    assert_eq!(selection.b, 35.0);
    assert_eq!(selection.c, 2.8);

    // Empty space: back to the overview.
    let empty = empty_pixel(&r);
    click(&mut r, empty);
    r.tick(0.0);
    let sim = r.game().sim();
    assert_eq!(sim.focus(), Focus::Unfocused);
    assert_eq!(sim.camera().position, Vec3::new(0.0, 100.0, 150.0));
    assert_eq!(of_kind(&events(&r), EVENT_SELECTION)[0].a, -1.0);
}

#[test]
fn hover_tooltip_tracks_pointer_even_while_paused() {
    let mut r = runner();
    r.frame(0.0);

    r.push_input(InputEvent::Custom { kind: CUSTOM_TOGGLE_PAUSE, a: 0.0, b: 0.0, c: 0.0 });
    r.tick(0.016);
    let pause = of_kind(&events(&r), EVENT_PAUSE);
    assert_eq!(pause.len(), 1);
    assert_eq!(pause[0].a, 1.0);

    let pos = screen_of(&r, "Neptune");
    r.push_input(InputEvent::PointerMove { x: pos.x, y: pos.y });
    r.tick(0.016);

    let tip = r.game().sim().tooltip();
    assert!(tip.visible);
    assert_eq!(tip.text, "Neptune");
    let ev = of_kind(&events(&r), EVENT_TOOLTIP)[0];
    assert_eq!(ev.a, 7.0);
    assert_eq!(ev.b, pos.x + 5.0);
    assert_eq!(ev.c, pos.y + 5.0);
}

#[test]
fn paused_frames_do_not_move_bodies() {
    let mut r = runner();
    r.frame(0.0);
    r.push_input(InputEvent::KeyDown { key_code: 32 });
    r.frame(100.0);
    let before: Vec<f32> = r.game().sim().bodies().iter().map(|b| b.angle).collect();

    r.frame(200.0);
    r.frame(300.0);
    let after: Vec<f32> = r.game().sim().bodies().iter().map(|b| b.angle).collect();
    assert_eq!(before, after);
}

#[test]
fn slider_and_reset_round_trip() {
    let mut r = runner();
    r.frame(0.0);

    r.push_input(InputEvent::Custom { kind: CUSTOM_SET_SPEED, a: 2.0, b: 0.03, c: 0.0 });
    r.tick(0.016);
    let speeds = of_kind(&events(&r), EVENT_SPEED);
    assert_eq!(speeds.len(), 1);
    assert_eq!(speeds[0].a, 2.0);
    assert!((speeds[0].b - 0.03).abs() < 1e-6);
    assert!((r.game().sim().speeds().get_by_name("Earth").unwrap() - 0.03).abs() < 1e-6);
    assert_eq!(r.game().sim().speeds().get_by_name("Venus"), Some(0.015));

    r.push_input(InputEvent::Custom { kind: CUSTOM_RESET_SPEEDS, a: 0.0, b: 0.0, c: 0.0 });
    r.tick(0.016);
    assert_eq!(of_kind(&events(&r), EVENT_SPEED).len(), 8);
    assert_eq!(r.game().sim().speeds().get_by_name("Earth"), Some(0.01));
}

#[test]
fn one_second_frame_advances_by_wall_clock_time() {
    let mut r = runner();
    r.frame(0.0);
    let before = r.game().sim().body_by_name("Earth").unwrap().angle;
    r.frame(1000.0);
    let earth = r.game().sim().body_by_name("Earth").unwrap();
    // 0.01 * 1 s * 60.
    assert!((earth.angle - before - 0.6).abs() < 1e-5);
    assert!((earth.position.x - 27.0 * earth.angle.cos()).abs() < 1e-3);
    assert!((earth.position.z - 27.0 * earth.angle.sin()).abs() < 1e-3);
}

#[test]
fn burst_of_resets_keeps_tooltip_and_selection() {
    let mut r = runner();
    r.frame(0.0);
    for _ in 0..10 {
        r.push_input(InputEvent::Custom { kind: CUSTOM_RESET_SPEEDS, a: 0.0, b: 0.0, c: 0.0 });
    }
    r.tick(0.016);

    let evs = events(&r);
    assert_eq!(evs.len(), r.max_events() as usize);
    assert_eq!(evs[0].kind, EVENT_TOOLTIP);
    assert_eq!(evs[1].kind, EVENT_SELECTION);
}

#[test]
fn resize_reaches_camera() {
    let mut r = runner();
    r.push_input(InputEvent::Resize { width: 1280.0, height: 720.0 });
    r.frame(0.0);
    assert_eq!(r.viewport_width(), 1280.0);
    assert_eq!(r.viewport_height(), 720.0);
}

#[test]
fn catalog_json_lists_planets() {
    let r = runner();
    let json = r.game().catalog_json();
    assert!(json.contains("\"Mercury\""));
    assert!(json.contains("\"belt\""));
}
