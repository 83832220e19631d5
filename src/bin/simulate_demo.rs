use despike::config::load_simulate_config;
use despike::image::io::{load_rgba_image, save_raw_image};
use despike::inject_noise;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_simulate_config(Path::new(&config_path))?;

    let clean = load_rgba_image(&config.input).map_err(|e| e.to_string())?;
    let params = config.params.sanitized();
    let events = params.event_count(clean.w, clean.h);
    let noisy = inject_noise(&clean, &params);

    save_raw_image(&noisy, &config.output.noisy_image).map_err(|e| e.to_string())?;
    println!(
        "Injected {} artifact events into {}x{} image, saved to {}",
        events,
        clean.w,
        clean.h,
        config.output.noisy_image.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: simulate_demo <config.json>".to_string()
}
