use image::RgbaImage;
use tracing::{info, warn};

use iconforge::api::{generate_base_artwork_to_path, generate_icon_set_from_image};
use iconforge::core::params::PipelineParams;
use iconforge::core::processing::mask::BODY_RATIO_HIG;
use iconforge::io::load_source_image;
use iconforge::types::IconVariant;

use super::args::CliArgs;
use super::errors::AppError;

fn parse_body_ratio(raw: &str) -> Result<f64, AppError> {
    match raw {
        "full" => Ok(1.0),
        "hig" => Ok(BODY_RATIO_HIG),
        _ => {
            let value = raw.parse::<f64>().map_err(|_| AppError::InvalidBodyRatio {
                value: raw.to_string(),
            })?;
            if value > 0.0 && value <= 1.0 {
                Ok(value)
            } else {
                Err(AppError::InvalidBodyRatio {
                    value: raw.to_string(),
                })
            }
        }
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
        arg: "--output-dir".to_string(),
    })?;
    let body_ratio = parse_body_ratio(&args.body)?;

    // Resolve the source raster: synthesized artwork or an input file.
    // A missing input file aborts before any output is produced.
    let (source, source_label): (RgbaImage, String) = if let Some(variant) = args.generate {
        let base_path = output_dir.join("base-icon.png");
        let artwork = generate_base_artwork_to_path(variant, args.mask, &base_path)?;
        (artwork, format!("generated:{}", variant))
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let label = input.display().to_string();
        (load_source_image(&input)?, label)
    };

    let mut params = PipelineParams {
        variant: args.variant,
        algorithm: args.mask,
        body_ratio,
        background: args.background,
        pack_icns: args.pack,
        packer: args.packer.clone(),
        write_manifest: args.manifest,
    };

    if args.all_variants {
        info!("Generating all variants into: {:?}", output_dir);

        let mut processed = 0;
        let mut errors = 0;

        for variant in [IconVariant::Masked, IconVariant::FullBleed] {
            params.variant = variant;
            let variant_dir = output_dir.join(variant.dir_name());

            info!("Processing variant: {} -> {:?}", variant, variant_dir);

            match generate_icon_set_from_image(&source, &source_label, &variant_dir, &params) {
                Ok(set) => {
                    info!(
                        "Successfully generated {} files for variant {}\n",
                        set.written.len(),
                        variant
                    );
                    processed += 1;
                }
                Err(e) => {
                    warn!("Error generating variant {}: {}", variant, e);
                    errors += 1;
                }
            }
        }

        info!("All-variants run complete!");
        info!("Processed: {}", processed);
        info!("Errors: {}", errors);
    } else {
        let set = generate_icon_set_from_image(&source, &source_label, &output_dir, &params)?;
        info!(
            "Successfully generated: {} files -> {:?}\n",
            set.written.len(),
            output_dir
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_ratio_keywords() {
        assert_eq!(parse_body_ratio("full").unwrap(), 1.0);
        assert_eq!(parse_body_ratio("hig").unwrap(), BODY_RATIO_HIG);
    }

    #[test]
    fn test_parse_body_ratio_custom() {
        assert_eq!(parse_body_ratio("0.9").unwrap(), 0.9);
    }

    #[test]
    fn test_parse_body_ratio_rejects_out_of_range() {
        assert!(parse_body_ratio("0").is_err());
        assert!(parse_body_ratio("1.5").is_err());
        assert!(parse_body_ratio("squircle").is_err());
    }
}
