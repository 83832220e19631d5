use despike::config::load_despike_config;
use despike::image::io::{load_rgba_image, save_raw_image, write_json_file};
use despike::{Despiker, PipelineStage, ProcessingResult};
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
    let config = load_despike_config(Path::new(&config_path))?;

    let image = load_rgba_image(&config.input).map_err(|e| e.to_string())?;
    let despiker = Despiker::new(config.params.clone());
    let result = despiker
        .process_with_progress(&image, &mut |stage: PipelineStage| {
            println!("[{stage}]");
        })
        .map_err(|e| e.to_string())?;

    save_raw_image(&result.denoised, &config.output.denoised_image).map_err(|e| e.to_string())?;
    println!(
        "Saved denoised image to {}",
        config.output.denoised_image.display()
    );

    if let Some(path) = &config.output.mask_image {
        save_raw_image(&result.mask_image, path).map_err(|e| e.to_string())?;
        println!("Saved noise mask to {}", path.display());
    }

    if let Some(path) = &config.output.enhanced_image {
        match &result.enhanced {
            Some(enhanced) => {
                save_raw_image(enhanced, path).map_err(|e| e.to_string())?;
                println!("Saved enhanced image to {}", path.display());
            }
            None => eprintln!("enhanced output requested but enhancement is disabled"),
        }
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &result).map_err(|e| e.to_string())?;
        println!("JSON report written to {}", path.display());
    }

    print_summary(&result);
    Ok(())
}

fn print_summary(result: &ProcessingResult) {
    println!("\nDespike summary");
    println!("  noise pixels: {}", result.stats.noise_pixels);
    println!("  reduction ratio: {:.5}", result.stats.reduction_ratio);
    println!("  elapsed_ms: {:.3}", result.stats.elapsed_ms);
    for stage in &result.timings.stages {
        println!("  {}: {:.3} ms", stage.label, stage.elapsed_ms);
    }
}

fn usage() -> String {
    "Usage: despike_demo <config.json>".to_string()
}
