mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use common::{get_env_u64, ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use ladders::{Board, Catalog, Engine, Options, Tier};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let config = load_config(&args.config, "play")?;
            let options = load_options(&config)?;
            let game = build_engine(&options)?;

            let mode = match args.mode {
                Some(mode) => mode.into(),
                None => play::choose_mode()?,
            };

            let mut rng = seeded_rng(args.seed);
            let state = play::run(&game, mode, &mut rng)?;
            info!(
                "final positions: {} and {}",
                state.player_position(0),
                state.player_position(1)
            );
        }
        Commands::Simulate(args) => {
            let config = load_config(&args.config, "simulate")?;
            let options = load_options(&config)?;
            let game = build_engine(&options)?;

            let games = args
                .games
                .or_else(|| {
                    config
                        .as_ref()
                        .and_then(|c| c.get("games"))
                        .and_then(|v| v.as_usize())
                })
                .unwrap_or(1000);

            let mut rng = seeded_rng(args.seed);
            let report = play::simulate(&game, games, &mut rng)?;
            println!("{}", report);
        }
    }

    Ok(())
}

fn load_config(path: &str, scope: &str) -> Result<Option<ConfigLoader>> {
    let path = path.relative_to_cwd()?;

    if !path.is_file() {
        info!("no config file at {:?}, using default options", path);
        return Ok(None);
    }

    Ok(Some(ConfigLoader::new(path, scope.to_string())?))
}

fn load_options(config: &Option<ConfigLoader>) -> Result<Options> {
    match config {
        Some(loader) => loader.load(),
        None => Ok(Options::default()),
    }
}

fn build_engine(options: &Options) -> Result<Engine<Catalog>> {
    let catalog = match &options.questions_file {
        Some(path) => Catalog::from_path(path.relative_to_cwd()?, options.hard_sample_size)?,
        None => Catalog::builtin(options.hard_sample_size)?,
    };

    info!(
        "loaded {} easy and {} hard questions",
        catalog.tier_len(Tier::Easy),
        catalog.tier_len(Tier::Hard)
    );

    Ok(Engine::new(Board::standard(), catalog, options))
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed.or_else(|| get_env_u64("LADDERS_SEED")) {
        Some(seed) => {
            info!("seeding games with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
