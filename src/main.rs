use std::io::{self, BufWriter};
use std::sync::Mutex;
use std::time::Instant;

use log::{debug, info};
use pbr::ProgressBar;
use structopt::StructOpt;

pub mod camera;
pub mod config;
pub mod error;
pub mod film;
pub mod geometry;
pub mod integrator;
pub mod material;
pub mod math;
pub mod output;
pub mod renderer;
pub mod scene;

use config::{Opt, Target};
use error::Result;
use film::Film;
use math::RGBColor;
use output::{push_terminal, write_png};
use renderer::{render, render_with};
use scene::Scene;

fn run(opt: &Opt) -> Result<()> {
    let settings = opt.settings()?;
    let threads = opt.threads();
    info!(
        "render target {} at {}x{} on {} threads",
        opt.target, settings.width(), settings.height(), threads
    );

    let scene = Scene::reference(settings.aspect_ratio());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;

    let render_start = Instant::now();
    let film: Film<RGBColor> = if opt.progress {
        let progress = Mutex::new(ProgressBar::on(io::stderr(), settings.height() as u64));
        let film = pool.install(|| {
            render_with(&scene, &settings, |_| {
                if let Ok(mut bar) = progress.lock() {
                    bar.inc();
                }
            })
        });
        if let Ok(mut bar) = progress.lock() {
            bar.finish();
        }
        film
    } else {
        pool.install(|| render(&scene, &settings))
    };
    let render_duration = render_start.elapsed();

    let push_start = Instant::now();
    match &opt.target {
        Target::Terminal => push_terminal(&film, &mut BufWriter::new(io::stdout().lock()))?,
        Target::Png(path) => write_png(&film, path)?,
    }
    let push_duration = push_start.elapsed();
    debug!("render took {:?}, push took {:?}", render_duration, push_duration);

    println!(
        "render: {} push: {}",
        render_duration.as_millis(),
        push_duration.as_millis()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();
    if let Err(e) = run(&opt) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
