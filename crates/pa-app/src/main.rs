use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod drawing;
pub mod present;
pub mod preview;
pub mod source;
pub mod store;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre la configuration (preset invalide = erreur fatale)
    let config = cli.resolve_config()?;
    if let Some(glyphs) = &cli.charset {
        let listed = glyphs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("Using custom character set: {listed}");
    }

    // 4. Obtenir le bitmap (stdin, argument, ou prompt interactif)
    let image = source::obtain_image(cli.image.clone())?;

    // 5. Mode black-yellow : aperçu quantifié, pas de texte
    if config.black_yellow {
        preview::show_black_yellow(&image)?;
        return Ok(());
    }

    // 6. Pipeline glyphes
    let mut art = pa_art::render_ascii(&image, &config);
    if config.fix_aspect_ratio {
        art = pa_art::mapper::fix_aspect_ratio(&art);
    }
    if let Some(glyph) = config.single_char {
        art = pa_art::silhouette::collapse(&art, glyph);
    }

    // 7. Présentation
    if config.drawing {
        drawing::draw_animated(&art)?;
        println!();
        return Ok(());
    }
    present::welcome()?;
    present::hype()?;
    present::print_art(&art, config.color)?;

    // 8. Persistance optionnelle (seule l'extension invalide est non fatale)
    if let Some(path) = &config.store {
        match store::store_art(path, &art, config.color) {
            Ok(()) => {}
            Err(store::StoreError::UnsupportedExtension(err)) => {
                log::debug!("{err}");
                println!(
                    "Oops, you have chosen the wrong file extension. Please give a svg or txt file name e.g., output.txt"
                );
            }
            // A failed write must be distinguishable from success.
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
