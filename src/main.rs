use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sightline_fov::{Algorithm, VisibleSet};
use sightline_geom::Coord;
use sightline_map::{GridMap, caves};

mod config;

use config::{AppConfig, MapSource, Overrides, Settings, parse_coord};

/// Field-of-view explorer for tile maps
#[derive(Parser, Debug)]
#[command(name = "sightline", version, about, long_about = None)]
struct Cli {
    /// Text or TOML map to load
    #[arg(long, conflicts_with = "generate")]
    map: Option<PathBuf>,
    /// Generate a noise cave instead of loading a map
    #[arg(long)]
    generate: bool,
    /// Cave seed used with --generate
    #[arg(long, requires = "generate")]
    seed: Option<i32>,
    /// shadow-cast, diamond-walls, milazzo or ray-cast
    #[arg(long, short)]
    algorithm: Option<Algorithm>,
    /// Sight radius; negative is unbounded
    #[arg(long, short, allow_hyphen_values = true)]
    radius: Option<i32>,
    /// Observer position as X,Y
    #[arg(long, value_parser = parse_coord, allow_hyphen_values = true)]
    at: Option<Coord>,
    /// Settings file (defaults to ./sightline.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Compare visible counts across every algorithm
    #[arg(long)]
    all: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let cfg = AppConfig::discover(cli.config.as_deref())?;
    let settings = Settings::resolve(
        cfg,
        Overrides {
            map: cli.map,
            generate: cli.generate,
            seed: cli.seed,
            algorithm: cli.algorithm,
            radius: cli.radius,
            at: cli.at,
        },
    );

    let map = match &settings.source {
        MapSource::File(path) => GridMap::load(path)?,
        MapSource::Caves(params) => caves::generate(params),
    };
    let origin = settings
        .at
        .or(map.marked_origin())
        .unwrap_or(Coord::new(map.width() / 2, map.height() / 2));
    if map.is_wall(origin) {
        log::warn!("observer at {} stands inside a wall or off the map", origin);
    }

    let visible = settings.algorithm.compute(&map, origin, settings.radius);
    print!(
        "{}",
        map.render_visibility(&visible, origin, &settings.legend)
    );
    println!("{}", summary(settings.algorithm, &visible, origin, settings.radius));

    if cli.all {
        for alg in Algorithm::ALL {
            let set = alg.compute(&map, origin, settings.radius);
            println!("{:>14}: {:>6} cells", alg, set.len());
        }
    }
    Ok(())
}

fn summary(algorithm: Algorithm, visible: &VisibleSet, origin: Coord, radius: i32) -> String {
    let reach = if radius < 0 {
        "unbounded".to_string()
    } else {
        format!("radius {}", radius)
    };
    format!(
        "{}: {} visible cells from {} ({})",
        algorithm,
        visible.len(),
        origin,
        reach
    )
}
