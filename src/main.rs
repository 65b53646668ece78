use anyhow::{Context as _, Result};
use clap::Parser;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Align, Application, ApplicationWindow, Orientation};
use log::{error, info, warn};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use hls_ring::config::AppConfig;
use hls_ring::ui::{apply_palette_color_scheme, load_css, RingWidget};
use hls_ring::{Color, TailPolicy};

const APP_ID: &str = "com.github.hls_ring.hls_ring";

/// Values the preset buttons jump to
const PRESETS: [f64; 4] = [0.0, 30.0, 80.0, 100.0];

/// hls-ring - animated progress ring with a fading tail
#[derive(Parser, Debug, Clone)]
#[command(name = "hls-ring")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Value shown at startup (0-100, out of range values are clamped)
    #[arg(short = 'v', long = "value")]
    value: Option<f64>,

    /// Ring size in pixels
    #[arg(short = 's', long = "size")]
    size: Option<f64>,

    /// Stroke width in pixels
    #[arg(long = "stroke")]
    stroke: Option<f64>,

    /// Animation duration in milliseconds
    #[arg(long = "duration")]
    duration: Option<u64>,

    /// Tail length as a fraction of the circle (0.0-1.0)
    #[arg(long = "tail-fraction")]
    tail_fraction: Option<f64>,

    /// Accent color as #RRGGBB or #RRGGBBAA
    #[arg(long = "accent", value_name = "HEX")]
    accent: Option<String>,

    /// Secondary accent blended into the tail, as #RRGGBB or #RRGGBBAA
    #[arg(long = "accent2", value_name = "HEX")]
    accent2: Option<String>,

    /// Write the effective configuration back to the config file
    #[arg(long = "save")]
    save: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Configuration file to load instead of the default one
    #[arg(value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command line overrides on top of a loaded configuration
    fn apply_to(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(value) = self.value {
            config.initial_value = value;
        }
        if let Some(size) = self.size {
            config.ring.size = size;
        }
        if let Some(stroke) = self.stroke {
            config.ring.stroke_width = stroke;
        }
        if let Some(duration) = self.duration {
            config.ring.duration_ms = duration;
        }
        if let Some(tail_fraction) = self.tail_fraction {
            config.ring.tail_fraction = tail_fraction;
        }
        if let Some(ref hex) = self.accent {
            config.palette.accent =
                Color::from_hex(hex).with_context(|| format!("Invalid --accent {:?}", hex))?;
        }
        if let Some(ref hex) = self.accent2 {
            config.palette.accent2 =
                Some(Color::from_hex(hex).with_context(|| format!("Invalid --accent2 {:?}", hex))?);
        }
        Ok(())
    }
}

/// Load the configuration file named on the command line, or the default one
fn load_config(cli: &Cli) -> AppConfig {
    if let Some(ref path) = cli.config_file {
        match AppConfig::load_from_path(path) {
            Ok(config) => {
                info!("Loaded config from: {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load config file '{}': {}", path.display(), e);
            }
        }
    }

    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            AppConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting hls-ring v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&cli);
    cli.apply_to(&mut config)?;

    if cli.save {
        match cli.config_file {
            Some(ref path) => config.save_to_path(path)?,
            None => config.save()?,
        }
        info!("Configuration saved");
    }

    let config = Rc::new(config);
    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| build_ui(app, &config));

    // Arguments were parsed by clap already
    let status = app.run_with_args(&["hls-ring"]);
    if status != glib::ExitCode::SUCCESS {
        error!("GTK application exited with {:?}", status);
    }
    Ok(())
}

fn build_ui(app: &Application, config: &AppConfig) {
    info!("Building UI");

    load_css(&config.palette);
    apply_palette_color_scheme(&config.palette);

    let ring = Rc::new(RingWidget::new(
        config.ring.clone(),
        config.palette.clone(),
        config.initial_value,
    ));

    let content = gtk4::Box::new(Orientation::Vertical, 12);
    content.set_margin_top(16);
    content.set_margin_bottom(16);
    content.set_margin_start(16);
    content.set_margin_end(16);

    let ring_widget = ring.widget();
    ring_widget.set_halign(Align::Center);
    ring_widget.set_vexpand(true);
    content.append(&ring_widget);

    // Slider retargets continuously while dragged
    let slider = gtk4::Scale::with_range(Orientation::Horizontal, 0.0, 100.0, 1.0);
    slider.set_value(ring.target().percent());
    let ring_for_slider = ring.clone();
    slider.connect_value_changed(move |scale| {
        ring_for_slider.set_value(scale.value());
    });
    content.append(&slider);

    let presets = gtk4::Box::new(Orientation::Horizontal, 8);
    presets.set_halign(Align::Center);
    for preset in PRESETS {
        let button = gtk4::Button::with_label(&format!("{}", preset as i64));
        let slider = slider.clone();
        button.connect_clicked(move |_| {
            // The slider handler forwards the value to the ring
            slider.set_value(preset);
        });
        presets.append(&button);
    }
    content.append(&presets);

    let toggles = gtk4::Box::new(Orientation::Horizontal, 8);
    toggles.set_halign(Align::Center);

    let arc_fade = gtk4::CheckButton::with_label("Fade over arc");
    arc_fade.set_active(config.ring.tail_policy == TailPolicy::FractionOfArc);
    let ring_for_policy = ring.clone();
    arc_fade.connect_toggled(move |check| {
        let mut options = ring_for_policy.options();
        options.tail_policy = if check.is_active() {
            TailPolicy::FractionOfArc
        } else {
            TailPolicy::FractionOfCircle
        };
        ring_for_policy.set_options(options);
    });
    toggles.append(&arc_fade);

    // Only offered when a secondary accent is configured
    if let Some(accent2) = config.palette.accent2 {
        let swap = gtk4::Button::with_label("Swap accents");
        let ring_for_palette = ring.clone();
        let palette = Rc::new(RefCell::new(config.palette.clone()));
        swap.connect_clicked(move |_| {
            let mut palette = palette.borrow_mut();
            let accent = palette.accent;
            palette.accent = palette.accent2.unwrap_or(accent2);
            palette.accent2 = Some(accent);
            ring_for_palette.set_palette(palette.clone());
        });
        toggles.append(&swap);
    }
    content.append(&toggles);

    let window = ApplicationWindow::builder()
        .application(app)
        .title("HLS")
        .default_width(config.window.width)
        .default_height(config.window.height)
        .child(&content)
        .build();
    window.add_css_class("hls-ring");
    window.present();
}
