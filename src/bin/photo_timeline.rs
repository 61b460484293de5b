use std::process::ExitCode;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use photo_timeline::api::{TimelineEngine, load_catalog, load_config_from_env, parse_args};
use photo_timeline::error::{TimelineError, TimelineResult};
use photo_timeline::metadata::ExifTimestampSource;
use photo_timeline::platform_gtk::GtkTimelineAdapter;
use photo_timeline::render::CairoRenderer;

const APPLICATION_ID: &str = "io.github.photo_timeline";

fn main() -> ExitCode {
    let _ = photo_timeline::telemetry::init_default_tracing();

    match run() {
        Ok(code) => code,
        Err(err) if err.is_clean_exit() => {
            eprintln!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> TimelineResult<ExitCode> {
    let directory = parse_args(std::env::args())?;
    let config = load_config_from_env()?;
    let catalog = load_catalog(
        &directory,
        &ExifTimestampSource::new(),
        config.style.time_label_policy,
    )?;

    gtk::init()
        .map_err(|err| TimelineError::Platform(format!("failed to initialize GTK: {err}")))?;

    // Drawing goes to the widget's context; the offscreen surface stays minimal.
    let renderer = CairoRenderer::new(1, 1)?;
    let engine = TimelineEngine::new(renderer, catalog, &config)?;
    let adapter = Rc::new(GtkTimelineAdapter::new(
        engine,
        config.key_bindings.clone(),
    ));

    let app = gtk::Application::builder()
        .application_id(APPLICATION_ID)
        .build();
    app.connect_activate(move |app| {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title(config.window_title.as_str())
            .default_width(config.window_width)
            .default_height(config.window_height)
            .child(adapter.drawing_area())
            .build();
        window.present();
        adapter.drawing_area().grab_focus();
    });

    // The directory argument is ours; GTK must not try to open it.
    let status = app.run_with_args::<&str>(&[]);
    Ok(if status == gtk::glib::ExitCode::SUCCESS {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
