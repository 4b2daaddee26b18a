use std::io::Write;
use std::{fs, io, process};

use anyhow::{Context, Result, bail};

mod options;
mod stats;

use ppmlife::engine::GameOfLife;
use ppmlife::ppm::{ImageCodec, PlainPpm};
use ppmlife::Image;

fn load_reference(args: &options::Args, codec: &PlainPpm) -> Result<Image> {
    if let Some(list_file) = args.list_file() {
        // the argument names a file whose first token is the image path
        let list = fs::read_to_string(list_file)
            .with_context(|| format!("could not open input file '{list_file}'"))?;
        let image_path = list
            .split_whitespace()
            .next()
            .with_context(|| format!("input file '{list_file}' does not name an image"))?;
        let text = fs::read_to_string(image_path)
            .with_context(|| format!("unable to open file '{image_path}'"))?;
        return codec
            .decode(&text)
            .with_context(|| format!("error loading '{image_path}'"));
    }

    if let Some(fill) = args.fill_mode() {
        let (width, height) = args.grid_size();
        return Ok(fill.create_image(width, height));
    }

    bail!("missing path to input file");
}

fn run() -> Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let codec = PlainPpm::default().strict_pixel_count(args.strict());
    let reference = load_reference(&args, &codec)?;

    let mut game = GameOfLife::from_image(reference);
    let timer = stats::StepTimer::start();
    if args.parallel() {
        game.next_generation_parallel();
    } else {
        game.next_generation();
    }
    let elapsed = timer.finish();

    let encoded = codec.encode(game.image());
    match args.output_file() {
        Some(path) => fs::write(&path, encoded)
            .with_context(|| format!("could not write output file '{path}'"))?,
        None => io::stdout()
            .write_all(encoded.as_bytes())
            .context("could not write image to stdout")?,
    }
    eprintln!("{elapsed:.6}");

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
