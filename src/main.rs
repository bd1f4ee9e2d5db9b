//! asciify CLI - Convert images to ASCII art

use asciify::{export, render, ConversionOptions, ConversionResult, Converter, AsciifyError, DecodedImage, Palette};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "asciify", about = "Convert images to ASCII art")]
struct Args {
    /// Input image files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output width in characters
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,
    /// Character set
    #[arg(short, long, value_enum)]
    charset: Option<Palette>,
    /// Swap dark and light characters
    #[arg(short, long)]
    invert: bool,
    /// Colorize each character with its source pixel
    #[arg(long)]
    color: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
    /// Output file (single input only)
    #[arg(short, long, conflicts_with = "out_dir")]
    output: Option<PathBuf>,
    /// Output directory for batch conversion
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Copy the plain text result to the clipboard (on Linux, waits until
    /// another program takes the clipboard over)
    #[arg(long)]
    copy: bool,
    /// JSON file with conversion options; flags override it
    #[arg(long)]
    options: Option<PathBuf>,
    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Ansi,
    Html,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Ansi => "ans",
            Format::Html => "html",
            Format::Json => "json",
        }
    }

    fn render(self, result: &ConversionResult, grayscale: bool) -> Result<String, AsciifyError> {
        Ok(match self {
            Format::Text => result.text().to_string(),
            Format::Ansi => render::to_ansi(result, grayscale),
            Format::Html => render::to_html(result, grayscale),
            Format::Json => serde_json::to_string_pretty(result)? + "\n",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), AsciifyError> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .init();

    let options = resolve_options(&args)?;
    let converter = Converter::with_options(options);

    if args.inputs.len() == 1 && args.out_dir.is_none() {
        return convert_single(&args, &converter, &args.inputs[0]);
    }

    if args.output.is_some() {
        log::warn!("--output is ignored for multiple inputs, use --out-dir");
    }
    convert_batch(&args, &converter)
}

fn resolve_options(args: &Args) -> Result<ConversionOptions, AsciifyError> {
    let mut options = match &args.options {
        Some(path) => ConversionOptions::load(path)?,
        None => ConversionOptions::default(),
    };
    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(palette) = args.charset {
        options.palette = palette;
    }
    options.invert |= args.invert;
    if args.color {
        options.grayscale = false;
    }
    Ok(options)
}

fn convert_single(args: &Args, converter: &Converter, input: &Path) -> Result<(), AsciifyError> {
    let image = DecodedImage::open(input)?;
    let result = converter.convert(&image);
    if result.is_empty() {
        log::warn!("{}: no rows at width {}", input.display(), converter.options().width);
    }

    let rendered = args.format.render(&result, converter.options().grayscale)?;
    match &args.output {
        Some(path) => std::fs::write(path, &rendered)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    if args.copy {
        export::copy_to_clipboard(result.text())?;
    }
    Ok(())
}

fn convert_batch(args: &Args, converter: &Converter) -> Result<(), AsciifyError> {
    let out_dir = args.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    let names = output_names(&args.inputs, args.format.extension());
    let failures: Vec<(PathBuf, AsciifyError)> = args
        .inputs
        .par_iter()
        .zip(names.par_iter())
        .filter_map(|(input, name)| {
            convert_to_file(args.format, converter, input, &out_dir.join(name))
                .err()
                .map(|e| (input.clone(), e))
        })
        .collect();

    for (input, err) in &failures {
        log::error!("{}: {}", input.display(), err);
    }
    log::info!(
        "converted {} of {} images into {}",
        args.inputs.len() - failures.len(),
        args.inputs.len(),
        out_dir.display()
    );

    match failures.into_iter().next() {
        Some((_, err)) => Err(err),
        None => Ok(()),
    }
}

/// One distinct output file name per input.
///
/// Inputs are named after their stem (`cat.txt`). Inputs sharing a stem keep
/// their source extension (`cat.png.txt`, `cat.jpg.txt`), and any name that
/// is still taken gets a numeric suffix (`cat.png-2.txt`).
fn output_names(inputs: &[PathBuf], ext: &str) -> Vec<String> {
    let stem_of = |path: &PathBuf| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ascii-art".to_string())
    };

    let mut stem_counts: HashMap<String, usize> = HashMap::new();
    for input in inputs {
        *stem_counts.entry(stem_of(input)).or_default() += 1;
    }

    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = stem_of(input);
            let base = if stem_counts[&stem] > 1 {
                input
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or(stem)
            } else {
                stem
            };
            let mut name = format!("{base}.{ext}");
            let mut n = 2;
            while !taken.insert(name.clone()) {
                name = format!("{base}-{n}.{ext}");
                n += 1;
            }
            name
        })
        .collect()
}

fn convert_to_file(format: Format, converter: &Converter, input: &Path, path: &Path) -> Result<(), AsciifyError> {
    let image = DecodedImage::open(input)?;
    let result = converter.convert(&image);

    match format {
        Format::Text => export::save_text(&result, path)?,
        Format::Json => export::save_json(&result, path)?,
        format => std::fs::write(path, format.render(&result, converter.options().grayscale)?)?,
    }
    log::debug!("{} -> {}", input.display(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn write_png(path: &Path, color: [u8; 4]) {
        RgbaImage::from_pixel(8, 4, Rgba(color))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("asciify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let opts = dir.path().join("opts.json");
        std::fs::write(&opts, r#"{"width": 60, "palette": "block", "invert": true}"#).unwrap();

        let args = parse(&["--options", opts.to_str().unwrap(), "--width", "120", "--color", "in.png"]);
        let options = resolve_options(&args).unwrap();
        assert_eq!(options.width, 120);
        assert_eq!(options.palette, Palette::Block);
        assert!(options.invert);
        assert!(!options.grayscale);
    }

    #[test]
    fn defaults_without_flags() {
        let options = resolve_options(&parse(&["in.png"])).unwrap();
        assert_eq!(options, ConversionOptions::default());
    }

    #[test]
    fn charset_and_invert_flags() {
        let options = resolve_options(&parse(&["-c", "minimal", "-i", "in.png"])).unwrap();
        assert_eq!(options.palette, Palette::Minimal);
        assert!(options.invert);
        assert!(options.grayscale);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Args::try_parse_from(["asciify", "--log-level", "loud", "in.png"]).is_err());
        assert!(Args::try_parse_from(["asciify", "--width", "0", "in.png"]).is_err());
        assert!(Args::try_parse_from(["asciify", "--charset", "emoji", "in.png"]).is_err());
        assert!(Args::try_parse_from(["asciify"]).is_err());
    }

    #[test]
    fn log_level_maps_to_filter() {
        let args = parse(&["--log-level", "debug", "in.png"]);
        assert_eq!(log::LevelFilter::from(args.log_level), log::LevelFilter::Debug);
        let args = parse(&["in.png"]);
        assert_eq!(log::LevelFilter::from(args.log_level), log::LevelFilter::Warn);
    }

    #[test]
    fn format_extension_and_render() {
        let image = DecodedImage::from(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])));
        let result = Converter::new().with_width(4).convert(&image);

        assert_eq!(Format::Text.extension(), "txt");
        assert_eq!(Format::Ansi.extension(), "ans");
        assert_eq!(Format::Html.extension(), "html");
        assert_eq!(Format::Json.extension(), "json");

        assert_eq!(Format::Text.render(&result, false).unwrap(), "    \n    \n");
        assert!(Format::Ansi.render(&result, false).unwrap().starts_with("\x1b[38;2;255;255;255m "));
        assert_eq!(Format::Ansi.render(&result, true).unwrap(), result.text());
        assert!(Format::Html.render(&result, false).unwrap().contains("rgb(255, 255, 255)"));
        let json: serde_json::Value = serde_json::from_str(&Format::Json.render(&result, true).unwrap()).unwrap();
        assert_eq!(json["text"], "    \n    \n");
    }

    #[test]
    fn output_names_are_distinct() {
        let inputs: Vec<PathBuf> = ["a/cat.png", "b/cat.jpg", "dog.png", "c/x.png", "d/x.png"]
            .iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(
            output_names(&inputs, "txt"),
            vec!["cat.png.txt", "cat.jpg.txt", "dog.txt", "x.png.txt", "x.png-2.txt"]
        );
    }

    #[test]
    fn batch_keeps_same_stem_inputs_apart() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("a")).unwrap();
        std::fs::create_dir(dir.path().join("b")).unwrap();
        let black = dir.path().join("a").join("x.png");
        let white = dir.path().join("b").join("x.png");
        write_png(&black, [0, 0, 0, 255]);
        write_png(&white, [255, 255, 255, 255]);
        let out = dir.path().join("out");

        let args = parse(&[
            black.to_str().unwrap(),
            white.to_str().unwrap(),
            "--out-dir",
            out.to_str().unwrap(),
            "--width",
            "4",
        ]);
        let converter = Converter::with_options(resolve_options(&args).unwrap());
        convert_batch(&args, &converter).unwrap();

        assert_eq!(std::fs::read_to_string(out.join("x.png.txt")).unwrap(), "@@@@\n");
        assert_eq!(std::fs::read_to_string(out.join("x.png-2.txt")).unwrap(), "    \n");
    }

    #[test]
    fn batch_reports_failure_but_writes_good_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        let bad = dir.path().join("bad.png");
        write_png(&good, [0, 0, 0, 255]);
        std::fs::write(&bad, "definitely not pixels").unwrap();
        let out = dir.path().join("out");

        let args = parse(&[
            good.to_str().unwrap(),
            bad.to_str().unwrap(),
            "--out-dir",
            out.to_str().unwrap(),
            "--format",
            "json",
            "--width",
            "4",
        ]);
        let converter = Converter::with_options(resolve_options(&args).unwrap());
        let err = convert_batch(&args, &converter).unwrap_err();

        assert!(matches!(err, AsciifyError::NotAnImage(_)));
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join("good.json")).unwrap()).unwrap();
        assert_eq!(json["text"], "@@@@\n");
        assert!(!out.join("bad.json").exists());
    }
}
