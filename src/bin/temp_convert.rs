// deskbits - temp_convert.rs
//
// Temperature Conversion entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use deskbits::app::state::ConverterState;
use deskbits::ui::panels;
use deskbits::util;

/// Temperature Conversion - convert between Fahrenheit and Celsius.
#[derive(Parser, Debug)]
#[command(name = "temp-convert", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

struct TempConvertApp {
    state: ConverterState,
}

impl eframe::App for TempConvertApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::converter::render(ui, &mut self.state);
        });

        // Invalid-input dialog, centred over the window while active.
        panels::converter::render_error_dialog(ctx, &mut self.state);
    }
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        "Temperature Conversion starting"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::CONVERTER_TITLE)
            .with_inner_size(util::constants::CONVERTER_WINDOW_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::CONVERTER_TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(TempConvertApp {
            state: ConverterState::new(),
        }))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: failed to launch Temperature Conversion: {e}");
        std::process::exit(1);
    }
}
