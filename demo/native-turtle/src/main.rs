// rasterturtle/demo/native-turtle/src/main.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Renders a turtle program file to a cropped PNG.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use image::RgbaImage;
use rasterturtle::{BuiltTurtle, DispatchPolicy, RenderOptions, DEFAULT_CANVAS_SIZE};
use rasterturtle_renderer::{BoundsPolicy, CroppedImage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uturtle::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let input = matches.get_one::<PathBuf>("INPUT").context("missing input path")?;
    let options = render_options(&matches);

    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let program = Parser::new().parse(&source);
    let built = BuiltTurtle::from_ast(&program, &options)
        .with_context(|| format!("failed to render {}", input.display()))?;
    let image = built.crop().context("nothing to export")?;

    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| input.with_extension("png"));
    save_png(&image, &output)?;
    info!("wrote {}x{} image to {}", image.width, image.height, output.display());

    if matches.get_flag("debug-text") {
        let debug_path = input.with_extension("debug.txt");
        fs::write(&debug_path, image.to_debug_text())
            .with_context(|| format!("failed to write {}", debug_path.display()))?;
        info!("wrote debug dump to {}", debug_path.display());
    }

    if !built.result_flags.is_empty() {
        println!("Flagged lines {:?}: {}", built.flagged_lines, built.result_flags);
    }
    Ok(())
}

fn cli() -> Command {
    Command::new("turtle-demo")
        .about("Draws a turtle program onto a fixed canvas and saves the cropped result")
        .arg(
            Arg::new("INPUT")
                .help("Turtle program, one command per line")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("PNG path [default: INPUT with a .png extension]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("canvas-size")
                .short('s')
                .long("canvas-size")
                .help("Side of the square canvas in pixels [default: 1000]")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("clip")
                .long("clip")
                .help("Drop pixels that fall off the canvas instead of failing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on malformed or unknown commands")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug-text")
                .short('d')
                .long("debug-text")
                .help("Also write an X/space dump of the image next to INPUT")
                .action(ArgAction::SetTrue),
        )
}

fn render_options(matches: &ArgMatches) -> RenderOptions {
    RenderOptions {
        canvas_size: matches.get_one::<u32>("canvas-size").copied().unwrap_or(DEFAULT_CANVAS_SIZE),
        bounds_policy: if matches.get_flag("clip") {
            BoundsPolicy::Clip
        } else {
            BoundsPolicy::Fail
        },
        dispatch_policy: if matches.get_flag("strict") {
            DispatchPolicy::Strict
        } else {
            DispatchPolicy::Lenient
        },
    }
}

fn to_rgba_image(image: &CroppedImage) -> Result<RgbaImage> {
    RgbaImage::from_raw(image.width, image.height, image.to_rgba_bytes())
        .context("pixel buffer does not match the image size")
}

fn save_png(image: &CroppedImage, path: &Path) -> Result<()> {
    to_rgba_image(image)?
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))
}
