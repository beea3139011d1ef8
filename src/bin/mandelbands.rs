extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbands;
extern crate num;
extern crate num_cpus;

use clap::{App, AppSettings, Arg};
use num::Complex;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use mandelbands::consts::{
    CX_MAX, CX_MIN, CY_MAX, CY_MIN, HEIGHT, ITERATION_MAX, OUTPUT_FILE, WIDTH,
};
use mandelbands::{parse_thread_count, write_pixmap, BandRenderer, RenderError};

const PARALLELISM: &str = "parallelism";
const OUTPUT: &str = "output";
const IGNORED: &str = "ignored";

// Anything that is not -P<N> still renders with one thread, so there
// are no help or version flags, and trailing words are swallowed.
fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("mandelbands")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Banded, multi-threaded Mandelbrot renderer")
        .setting(AppSettings::AllowLeadingHyphen)
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name(PARALLELISM)
                .required(true)
                .index(1)
                .allow_hyphen_values(true)
                .help("Thread count, written -P<N>; clamped to 1 through 6"),
        )
        .arg(
            Arg::with_name(IGNORED)
                .required(false)
                .index(2)
                .multiple(true)
                .allow_hyphen_values(true)
                .hidden(true),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(OUTPUT_FILE)
                .help("Output file"),
        )
}

fn run(threads: usize, outfile: &str) -> Result<(), RenderError> {
    let renderer = BandRenderer::new(
        WIDTH,
        HEIGHT,
        Complex::new(CX_MIN, CY_MIN),
        Complex::new(CX_MAX, CY_MAX),
        ITERATION_MAX,
    )?;

    // Fail on a bad path before the render starts.
    let output = File::create(outfile)?;

    let mut image = renderer.blank_image();
    let start = Instant::now();
    renderer.render_into(&mut image, threads)?;
    let elapsed = start.elapsed();
    println!(
        "Elapsed time: {}.{:06} s",
        elapsed.as_secs(),
        elapsed.subsec_micros()
    );

    debug!("writing {}x{} image to {}", WIDTH, HEIGHT, outfile);
    write_pixmap(BufWriter::new(output), &image)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = app().get_matches();
    let threads = parse_thread_count(matches.value_of(PARALLELISM).unwrap_or(""));
    let cpus = num_cpus::get();
    if threads > cpus {
        warn!("{} threads requested, but only {} CPUs are available", threads, cpus);
    }
    info!("rendering with {} thread(s)", threads);

    if let Err(e) = run(threads, matches.value_of(OUTPUT).unwrap_or(OUTPUT_FILE)) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
