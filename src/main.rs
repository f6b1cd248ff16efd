use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortvis::input;
use sortvis::prelude::*;
use sortvis::AppError;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), AppError> {
    init_tracing();

    let config = Config::parse();
    config.validate()?;
    info!(?config, "starting");

    let mut vis = Visualizer::new(&config);
    let mut window = Window::new(&vis.title(), config.width, config.height)?;
    let mut limiter = FrameLimiter::new(&window, config.frame_time_ms());
    let mut title = vis.title();

    'running: loop {
        limiter.wait_and_get_delta(&window);

        // Input
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h)?;
                    vis.resize(w, h);
                }
                WindowEvent::Key(key) => match input::route(key) {
                    Command::Quit => break 'running,
                    command => {
                        vis.handle(command);
                    }
                },
            }
        }

        // Update
        vis.update()?;

        // Render
        vis.render();
        window.present(vis.frame_buffer())?;

        let next_title = vis.title();
        if next_title != title {
            window.set_title(&next_title)?;
            title = next_title;
        }
    }

    info!("shutting down");
    Ok(())
}
