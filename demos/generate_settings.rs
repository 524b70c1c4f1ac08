//! Generate default accessibility settings file
//!
//! Creates a JSON file with every setting at its default

use std::{env, path::Path, process};
use wcag_contrast::AccessibilitySettings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_settings.json>", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let settings = AccessibilitySettings::default();

    match settings.to_json_file(output_path) {
        Ok(()) => {
            let caption = settings.caption_contrast();
            eprintln!("Settings saved to {}", output_path.display());
            eprintln!();
            eprintln!("Settings summary:");
            eprintln!("  Font size: {:?}, contrast: {:?}", settings.font_size, settings.contrast);
            eprintln!(
                "  Speech: rate {:.1}x, pitch {:.1}",
                settings.speech_rate, settings.speech_pitch
            );
            eprintln!(
                "  Captions: {} on {} ({}, {})",
                settings.caption_color,
                settings.caption_background,
                caption.formatted_ratio(),
                caption.tier
            );
        }
        Err(e) => {
            eprintln!("Error saving settings: {}", e);
            process::exit(1);
        }
    }
}
