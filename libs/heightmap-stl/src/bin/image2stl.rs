// image2stl - Turn a heightmap image into a printable STL relief
//
// Prints the path actually written (which may carry a _N suffix when the
// output already exists). Exits with status 1 when the conversion fails.
// Malformed or unknown arguments are rejected before any work is done.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use config::constants::{HEIGHT_SCALE_DEFAULT, STL_EXTENSION, XY_SCALE_DEFAULT};
use heightmap_stl::{convert_with_params, ConversionParams, RasterImage, StlFormat};

/// Turn a heightmap image into a printable STL relief.
#[derive(Parser, Debug)]
#[command(name = "image2stl", version)]
struct Cli {
    /// Heightmap image (png, jpeg or bmp).
    image: PathBuf,

    /// Output STL path; `.stl` is appended when there is no extension.
    output: PathBuf,

    /// Height of a white pixel, in millimetres.
    #[arg(long, default_value_t = HEIGHT_SCALE_DEFAULT)]
    height_scale: f64,

    /// Width of one pixel along X, in millimetres.
    #[arg(long, default_value_t = XY_SCALE_DEFAULT)]
    x_scale: f64,

    /// Depth of one pixel along Y, in millimetres.
    #[arg(long, default_value_t = XY_SCALE_DEFAULT)]
    y_scale: f64,

    /// Write ASCII STL instead of binary.
    #[arg(long)]
    ascii: bool,
}

impl Cli {
    fn params(&self) -> ConversionParams {
        let format = if self.ascii {
            StlFormat::Ascii
        } else {
            StlFormat::Binary
        };
        ConversionParams {
            height_scale: self.height_scale,
            x_scale: self.x_scale,
            y_scale: self.y_scale,
            ..ConversionParams::default()
        }
        .with_format(format)
    }

    fn output_path(&self) -> PathBuf {
        let mut path = self.output.clone();
        if path.extension().is_none() {
            path.set_extension(STL_EXTENSION);
        }
        path
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let output_path = cli.output_path();
    let Some(output) = output_path.to_str() else {
        log::error!("output path is not valid UTF-8: {}", output_path.display());
        process::exit(1);
    };

    let decoded = match image::open(&cli.image) {
        Ok(decoded) => decoded,
        Err(err) => {
            log::error!("failed to open {}: {}", cli.image.display(), err);
            process::exit(1);
        }
    };
    let image = RasterImage::from_dynamic(&decoded);
    log::info!(
        "loaded {} ({}x{}, {} channels)",
        cli.image.display(),
        image.width(),
        image.height(),
        image.channels()
    );

    let written = convert_with_params(&image, output, &cli.params());
    if written.is_empty() {
        process::exit(1);
    }
    println!("{}", written);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_flags_are_absent() {
        let cli = Cli::try_parse_from(["image2stl", "in.png", "out.stl"]).unwrap();
        let params = cli.params();
        assert_eq!(params.height_scale, HEIGHT_SCALE_DEFAULT);
        assert_eq!(params.x_scale, XY_SCALE_DEFAULT);
        assert_eq!(params.y_scale, XY_SCALE_DEFAULT);
        assert_eq!(params.format, StlFormat::Binary);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "image2stl",
            "in.png",
            "out",
            "--height-scale",
            "35",
            "--x-scale",
            "0.5",
            "--y-scale=2",
            "--ascii",
        ])
        .unwrap();
        let params = cli.params();
        assert_eq!(params.height_scale, 35.0);
        assert_eq!(params.x_scale, 0.5);
        assert_eq!(params.y_scale, 2.0);
        assert_eq!(params.format, StlFormat::Ascii);
        assert_eq!(cli.output_path(), PathBuf::from("out.stl"));
    }

    #[test]
    fn malformed_number_is_rejected() {
        let result = Cli::try_parse_from(["image2stl", "in.png", "out.stl", "--height-scale", "5x"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_value_is_rejected() {
        let result = Cli::try_parse_from(["image2stl", "in.png", "out.stl", "--x-scale"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = Cli::try_parse_from(["image2stl", "in.png", "out.stl", "--hieght-scale", "30"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_output_is_rejected() {
        assert!(Cli::try_parse_from(["image2stl", "in.png"]).is_err());
    }

    #[test]
    fn existing_extension_is_kept() {
        let cli = Cli::try_parse_from(["image2stl", "in.png", "relief.STL"]).unwrap();
        assert_eq!(cli.output_path(), PathBuf::from("relief.STL"));
    }
}
