#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use ggez::{event, ContextBuilder};
use log::{error, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::app::App;
use crate::error::{ErrorConversion, Result};
use crate::prefs::Prefs;

mod app;
mod basic;
mod color;
mod error;
mod food;
mod game;
mod grid;
mod input;
mod palette;
mod particles;
mod prefs;
mod rendering;
mod screen;
mod snake;

fn start(prefs: Prefs) -> Result {
    let (mut ctx, event_loop) = ContextBuilder::new("tile_snake", "gorilskij")
        .window_mode(prefs.window_mode())
        .window_setup(prefs.window_setup())
        .build()?;

    let app = App::new(&mut ctx, prefs).with_trace_step("start")?;
    event::run(ctx, event_loop, app)
}

fn main() {
    let prefs = Prefs::from_env();

    let config = ConfigBuilder::new().add_filter_allow_str("tile_snake").build();
    if let Err(e) = TermLogger::init(prefs.log_level, config, TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to initialize logging: {}", e);
    }
    info!("starting tile snake");

    if let Err(e) = start(prefs) {
        error!("{}", e);
        std::process::exit(1);
    }
}
