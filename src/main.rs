//! illuscribe CLI
//!
//! Usage:
//!   illuscribe [OPTIONS] <FILE> [WIDTH HEIGHT]
//!
//! Options:
//!   -o, --out <DIR>      Output directory for the SVG frames (default: slides)
//!   -t, --theme <FILE>   Theme file for fonts and colors (TOML format)
//!   -d, --debug          Outline boxes and print the laid-out tree
//!   -g, --grammar        Show language grammar reference
//!   -h, --help           Print help

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use illuscribe::logging::{init_logging, LoggingConfig};
use illuscribe::{FileDecoder, RenderConfig, Slideshow, Theme};

#[derive(Parser)]
#[command(name = "illuscribe")]
#[command(about = "Plaintext slideshows rendered to SVG")]
struct Cli {
    /// Slideshow source file
    input: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(requires = "height", value_parser = parse_size)]
    width: Option<f64>,

    /// Viewport height in pixels
    #[arg(value_parser = parse_size)]
    height: Option<f64>,

    /// Output directory for the rendered frames
    #[arg(short, long, default_value = "slides")]
    out: PathBuf,

    /// Theme file for fonts, colors and spacing (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Debug mode: outline boxes and print the laid-out tree
    #[arg(short, long)]
    debug: bool,

    /// Show language grammar reference
    #[arg(short, long)]
    grammar: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(LoggingConfig::default());

    if cli.grammar {
        print_grammar();
        return;
    }

    let Some(input) = &cli.input else {
        print_intro();
        std::process::exit(1);
    };

    // Load theme
    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let source = match fs::read_to_string(input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input.display(), e);
            std::process::exit(1);
        }
    };

    let base_dir = input.parent().unwrap_or_else(|| Path::new("."));
    let images = FileDecoder::new().with_base_dir(base_dir);
    let (width, height) = match (cli.width, cli.height) {
        (Some(w), Some(h)) => (w, h),
        _ => (854.0, 480.0),
    };
    let config = RenderConfig::new()
        .with_viewport(width, height)
        .with_theme(theme)
        .with_debug(cli.debug);

    let filename = input.display().to_string();
    let show = match Slideshow::from_source(&source, &images, config) {
        Ok(show) => show,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    if let Err(e) = write_frames(&show, &cli.out) {
        eprintln!("Error writing to '{}': {}", cli.out.display(), e);
        std::process::exit(1);
    }
}

/// Viewport sizes must be finite and positive
fn parse_size(arg: &str) -> Result<f64, String> {
    let size: f64 = arg
        .parse()
        .map_err(|_| format!("'{}' is not a number", arg))?;
    if !size.is_finite() || size <= 0.0 {
        return Err(format!("'{}' is not a positive size in pixels", arg));
    }
    Ok(size)
}

/// Write every frame of the show into `dir` and list their titles
fn write_frames(show: &Slideshow, dir: &Path) -> std::io::Result<()> {
    let rendered = show.render_all();
    fs::create_dir_all(dir)?;
    for (i, slide) in rendered.slides.iter().enumerate() {
        let path = dir.join(format!("slide-{:03}.svg", i + 1));
        fs::write(&path, &slide.svg)?;
        println!("{}: {}", path.display(), slide.title);
    }
    let path = dir.join("end.svg");
    fs::write(&path, &rendered.end.svg)?;
    println!("{}: {}", path.display(), rendered.end.title);
    Ok(())
}

fn print_intro() {
    eprintln!(
        r#"illuscribe - plaintext slideshows rendered to SVG

USAGE:
    illuscribe [OPTIONS] <FILE> [WIDTH HEIGHT]

OPTIONS:
    -o, --out <DIR>     Output directory (default: slides)
    -t, --theme <FILE>  Fonts, colors and spacing (TOML file)
    -d, --debug         Outline boxes and print the laid-out tree
    -g, --grammar       Show language grammar reference
    -h, --help          Print help

QUICK START:
    illuscribe talk.ill 1280 720 --out talk

Writes talk/slide-001.svg, talk/slide-002.svg, ... and talk/end.svg.
Run --grammar for the syntax reference."#
    );
}

fn print_grammar() {
    println!(
        r#"ILLUSCRIBE GRAMMAR
==================

One statement per line. Arguments are separated by spaces, commas or
colons; quote any argument containing them. Blank lines are ignored.

SLIDES
------
slide "name"        Open a slide, shown in the presentation
template "name"     Open a template, only reachable through uses
end                 Close the focused box, or else the open slide

BOXES
-----
box "name", <stack>, <align>
    stack:  stack-vertical | stack-horizontal
    align:  align-left | align-center | align-right

Vertical boxes span the full width and are as tall as their content.
Consecutive horizontal boxes share a row and the height that is left.

CONTENT
-------
define "name"           Focus a box of the open slide (or of a used template)
text <size> "content"   Add a line of text to the focused box
    size:   huge | title | normal | small
image "file"            Add an image to the focused box

Text that does not fit its box is wrapped at word boundaries.

TEMPLATES
---------
uses "name"     Copy a previously defined slide or template into this slide

EXAMPLE
-------
template "Titled"
box "Title", stack-vertical, align-center
box "Body", stack-vertical, align-left
end

slide "Intro"
uses "Titled"
define "Title"
text title "Welcome"
end
define "Body"
text normal "First point"
image "diagram.png"
end
end"#
    );
}
