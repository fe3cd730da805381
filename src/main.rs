use sdl2::event::{Event, WindowEvent};
use sdl2::mouse::MouseButton;

use practice3d::abs::App;
use practice3d::config::Config;
use practice3d::render::{Renderer, input::ButtonAction};

fn load_config() -> (Config, Option<String>) {
    match Config::locate() {
        None => (Config::default(), None),
        Some(path) => match Config::from_file(&path) {
            Ok(config) => (config, Some(format!("loaded config from {}", path.display()))),
            Err(e) => (Config::default(), Some(format!("{}; using defaults", e))),
        },
    }
}

/// Feeds one event to the renderer. Returns `false` when the window should close.
fn dispatch(renderer: &mut Renderer, window: &sdl2::video::Window, event: Event) -> bool {
    match event {
        Event::Quit { .. } => return false,
        Event::Window {
            win_event: WindowEvent::SizeChanged(..),
            ..
        } => {
            let (width, height) = window.drawable_size();
            renderer.resize(width, height);
        }
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            ..
        } => renderer.handle_left_button(ButtonAction::Press),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            ..
        } => renderer.handle_left_button(ButtonAction::Release),
        Event::MouseMotion { x, y, .. } => renderer.handle_mouse_motion(x as f64, y as f64),
        _ => {}
    }
    true
}

fn main() {
    let (config, config_note) = load_config();
    if let Err(e) = practice3d::logging::init(config.level_filter()) {
        eprintln!("{}", e);
    }
    if let Some(note) = config_note {
        log::info!("{}", note);
    }

    let mut app = match App::new(
        &config.window.title,
        config.window.width,
        config.window.height,
    ) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let (width, height) = app.drawable_size();
    let mut renderer = match Renderer::new(&app.gl, width, height, &config.textures) {
        Ok(renderer) => renderer,
        Err(e) => {
            log::error!("failed to set up renderer: {}", e);
            std::process::exit(1);
        }
    };

    'running: loop {
        if let Err(e) = renderer.draw_frame() {
            log::error!("frame {} failed: {}", renderer.frames(), e);
        }
        app.window.gl_swap_window();

        // Redraw only once something happens.
        let event = app.event_pump.wait_event();
        if !dispatch(&mut renderer, &app.window, event) {
            break 'running;
        }
        for event in app.event_pump.poll_iter() {
            if !dispatch(&mut renderer, &app.window, event) {
                break 'running;
            }
        }
    }

    log::info!("exiting after {} frames", renderer.frames());
}
