use clap::{Args, Parser, Subcommand, ValueEnum};
use ladders::Mode;

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Brainy Ladders")]
#[clap(about = "A trivia gated snakes and ladders game", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Play(PlayCommand),
    Simulate(SimulateCommand),
}

#[derive(Args)]
#[clap(about = "Runs an interactive game on the terminal", long_about = None)]
pub struct PlayCommand {
    #[clap(short, long, default_value_t = String::from("ladders.conf"))]
    pub config: String,

    #[clap(short, long, value_enum)]
    pub mode: Option<CliMode>,

    #[clap(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
#[clap(about = "Plays automated games and reports win statistics", long_about = None)]
pub struct SimulateCommand {
    #[clap(short, long, default_value_t = String::from("ladders.conf"))]
    pub config: String,

    #[clap(short, long)]
    pub games: Option<usize>,

    #[clap(short, long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CliMode {
    /// One human against the automated opponent.
    Ai,
    /// Two humans sharing the keyboard.
    Pvp,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Ai => Mode::VersusAi,
            CliMode::Pvp => Mode::TwoPlayer,
        }
    }
}
