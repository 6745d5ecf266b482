use modal_stack::config::ModalConfig;
use modal_stack::countdown::StartCountdown;
use modal_stack::gui::{LobbyScreen, ModalPanel};
use modal_stack::input_system::{HostAction, InputSystem};
use modal_stack::modal::{ModalAction, ModalEngine, Request, SubstatePayload, priority};
use modal_stack::route::{RouteSource, SharedRoute};
use modal_stack::session::JsonLineSink;
use modal_stack::text::draw_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::time::{Duration, Instant};

// Game resolution constants
const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;
const WINDOW_SCALE: u32 = 2;
const PLAYER_SIZE: u32 = 16;
const PLAYER_SPEED: i32 = 8;

/// Screens the demo cycles through with Tab
const ROUTES: [&str; 3] = ["lobby", "room", "game"];

fn next_route(current: Option<&str>) -> &'static str {
    let index = current
        .and_then(|route| ROUTES.iter().position(|r| *r == route))
        .map_or(0, |i| (i + 1) % ROUTES.len());
    ROUTES[index]
}

fn background_for(route: Option<&str>) -> Color {
    match route {
        Some("lobby") => Color::RGB(20, 24, 32),
        Some("room") => Color::RGB(32, 24, 40),
        _ => Color::RGB(34, 68, 40),
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = ModalConfig::default_path();
    let config = ModalConfig::load_or_default(config_path.as_deref());

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Modal Stack", GAME_WIDTH * WINDOW_SCALE, GAME_HEIGHT * WINDOW_SCALE)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    // Outbound selections go to stdout, one JSON object per line
    let route = SharedRoute::new(config.start_route.clone());
    let mut engine = ModalEngine::new(
        config.active_route.clone(),
        Box::new(route.clone()),
        Box::new(JsonLineSink::new(std::io::stdout())),
    );
    engine.on_gate_change(Box::new(|allowed| {
        log::info!("gameplay input {}", if allowed { "enabled" } else { "disabled" });
    }));

    let panel = ModalPanel::new(config.panel.clone());
    let mut lobby = LobbyScreen::new();
    lobby.set_players(vec!["PLAYER ONE".to_string(), "PLAYER TWO".to_string()]);
    if route.current_route().as_deref() == Some("lobby") {
        lobby.mount(&mut engine);
    }

    let mut countdown = StartCountdown::new(Duration::from_secs(config.countdown_seconds));
    let mut input = InputSystem::new();
    let mut player = (
        (GAME_WIDTH / 2) as i32,
        (GAME_HEIGHT / 2) as i32,
    );

    log::info!("Controls:");
    log::info!("  Tab - next screen (lobby / room / game)");
    log::info!("  WASD - move (only while input is allowed)");
    log::info!("  1-9, Y, N - answer the visible modal");
    log::info!("  F1 shutdown, F2 kicked, F3 dead, F4 disconnected");
    log::info!("  F5 waiting on start, F6 quest window, F7 countdown, F8 start confirm");
    log::info!("  Esc - quit");

    'running: loop {
        input.update_context(engine.input_allowed());
        let actions = input.poll_events(&mut event_pump, |key| engine.handle_key(key));
        let mut countdown_expired = false;

        for action in actions {
            match action {
                HostAction::Quit => break 'running,
                HostAction::Move(dx, dy) => {
                    // Consult the gate right before sending gameplay input
                    if engine.input_allowed() {
                        player.0 = (player.0 + dx * PLAYER_SPEED)
                            .clamp(0, (GAME_WIDTH - PLAYER_SIZE) as i32);
                        player.1 = (player.1 + dy * PLAYER_SPEED)
                            .clamp(0, (GAME_HEIGHT - PLAYER_SIZE) as i32);
                    }
                }
                HostAction::NextRoute => {
                    let next = next_route(route.current_route().as_deref());
                    route.set(next);
                    engine.on_route_changed();

                    if next == "lobby" && !lobby.is_mounted() {
                        lobby.mount(&mut engine);
                    } else if next != "lobby" && lobby.is_mounted() {
                        lobby.unmount(&mut engine);
                    }
                }
                HostAction::Click(x, y) => {
                    let native_on_top = engine.top().is_some_and(|top| !top.is_external());
                    let hit = engine.surface().and_then(|area| {
                        panel.hit_test(area, native_on_top, (GAME_WIDTH, GAME_HEIGHT), x, y)
                    });
                    if let Some(index) = hit {
                        engine.activate_control(index);
                    }
                }
                HostAction::Substate(substate) => {
                    engine.present_substate(&substate, SubstatePayload::default());
                }
                HostAction::StartCountdown => {
                    countdown_expired |= countdown.start(&mut engine, Instant::now());
                }
                HostAction::ConfirmStart => engine.present(Request::native(
                    "start_game",
                    priority::MEDIUM,
                    "Start the game?",
                    vec![ModalAction::new("yes", "Yes"), ModalAction::new("no", "No")],
                )),
            }
        }

        if countdown.tick(&mut engine, Instant::now()) || countdown_expired {
            if lobby.is_mounted() {
                lobby.unmount(&mut engine);
            }
            route.set("game");
            engine.on_route_changed();
        }

        // Render
        let current = route.current_route();
        canvas.set_draw_color(background_for(current.as_deref()));
        canvas.clear();

        if current.as_deref() == Some(engine.active_route()) {
            canvas.set_draw_color(Color::RGB(240, 200, 80));
            canvas.fill_rect(Rect::new(player.0, player.1, PLAYER_SIZE, PLAYER_SIZE))?;
        }

        lobby.render(&mut canvas, &engine)?;
        if let Some(area) = engine.surface() {
            let native_on_top = engine.top().is_some_and(|top| !top.is_external());
            panel.render(&mut canvas, area, native_on_top)?;
        }

        let status = format!(
            "{}  INPUT {}",
            current.as_deref().unwrap_or("-"),
            if engine.input_allowed() { "ON" } else { "OFF" }
        );
        draw_text(&mut canvas, &status, 6, 6, Color::RGB(200, 200, 200), 1)?;

        canvas.present();
        std::thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
