// deskbits - push_counter.rs
//
// Push Counter entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use deskbits::app::state::CounterState;
use deskbits::ui::panels;
use deskbits::util;

/// Push Counter - a button and a running count of how often it was pushed.
#[derive(Parser, Debug)]
#[command(name = "push-counter", version, about)]
struct Cli {
    /// Initial counter value.
    #[arg(long = "start", default_value_t = 0)]
    start: u64,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

struct PushCounterApp {
    state: CounterState,
}

impl eframe::App for PushCounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::counter::render(ui, &mut self.state);
        });
    }
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        start = cli.start,
        "Push Counter starting"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::COUNTER_TITLE)
            .with_inner_size(util::constants::COUNTER_WINDOW_SIZE),
        ..Default::default()
    };

    let state = CounterState::new(cli.start);
    let result = eframe::run_native(
        util::constants::COUNTER_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(PushCounterApp { state }))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: failed to launch Push Counter: {e}");
        std::process::exit(1);
    }
}
