use crate::algorithms::Algorithm;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Indoor navigation service for a hospital floor plan", long_about = None)]
pub struct Config {
    /// Walkability matrix, one row per line of 0/1 cells
    #[arg(long, default_value = "walkability_matrix.csv")]
    pub grid_file: PathBuf,

    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// TOML file with `[[rooms]]` and `[[blocks]]` tables; built-in hospital tables otherwise
    #[arg(long)]
    pub rooms_file: Option<PathBuf>,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Restrict CORS to one origin; any origin is accepted when unset
    #[arg(long)]
    pub allow_origin: Option<String>,

    #[arg(long, value_enum, default_value_t = Algorithm::AStar)]
    pub algorithm: Algorithm,
}
