//! Command-line interface for tileset generation and grid classification

use crate::codec::configuration::{Configuration, TextureIndex};
use crate::compose::texture::compose_index;
use crate::io::configuration::{
    DEFAULT_DENSITY, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, EMPTY_CELL_MARKER, MASK_ALPHA_THRESHOLD,
    TEXTURE_COUNT,
};
use crate::io::error::Result;
use crate::io::image::{SourcePaths, load_mask, load_sources, save_tile, tile_path};
use crate::io::progress::TilesetProgress;
use crate::spatial::grid::TileGrid;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use ndarray::Array2;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "blobtile")]
#[command(author, version, about = "47-tile blob autotiling toolkit")]
/// Command-line arguments for the autotiling tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Compose all 47 tiles of a tileset from five source images
    Generate(GenerateArgs),

    /// Print the texture index of every cell of a mask image
    Classify {
        /// Mask PNG; every distinct opaque colour is one tile class
        #[arg(value_name = "MASK")]
        mask: PathBuf,

        /// Minimum alpha for a pixel to count as painted
        #[arg(short, long, default_value_t = MASK_ALPHA_THRESHOLD)]
        threshold: u8,
    },

    /// Print the texture indices of a seeded random grid
    Scatter {
        /// Number of rows
        #[arg(short, long)]
        rows: usize,

        /// Number of columns
        #[arg(short, long)]
        cols: usize,

        /// Probability that a cell is painted
        #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
        density: f64,

        /// Random seed for reproducible grids
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Print the configuration and corner slices of a texture index
    Inspect {
        /// Texture index in 0..=46
        #[arg(value_name = "INDEX")]
        index: u8,
    },
}

/// Arguments of the `generate` operation
#[derive(Args)]
pub struct GenerateArgs {
    /// Tile with no neighbours
    #[arg(long)]
    pub isolated: PathBuf,

    /// Tile with all eight neighbours
    #[arg(long)]
    pub surrounded: PathBuf,

    /// Strip running left to right
    #[arg(long)]
    pub horizontal: PathBuf,

    /// Strip running top to bottom
    #[arg(long)]
    pub vertical: PathBuf,

    /// Junction with empty diagonals
    #[arg(long)]
    pub crossing: PathBuf,

    /// Tileset name, used as the output filename prefix
    #[arg(short, long)]
    pub name: String,

    /// Directory the tiles are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Regenerate even if every tile already exists
    #[arg(long)]
    pub no_skip: bool,
}

impl GenerateArgs {
    /// Source image paths
    pub fn source_paths(&self) -> SourcePaths {
        SourcePaths {
            isolated: self.isolated.clone(),
            surrounded: self.surrounded.clone(),
            horizontal_edge: self.horizontal.clone(),
            vertical_edge: self.vertical.clone(),
            crossing: self.crossing.clone(),
        }
    }

    /// Output path of every tile, in index order
    pub fn output_paths(&self) -> Vec<PathBuf> {
        TextureIndex::all()
            .map(|index| tile_path(&self.output, &self.name, index))
            .collect()
    }

    /// Whether every tile of the tileset already exists
    pub fn outputs_exist(&self) -> bool {
        self.output_paths().iter().all(|path| path.exists())
    }
}

/// Dispatches a parsed command line
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected operation
    ///
    /// # Errors
    ///
    /// Returns an error if loading, classification, composition or saving fails
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Generate(args) => self.generate(args),
            Command::Classify { mask, threshold } => {
                let grid = load_mask(mask, *threshold)?;
                info!(
                    "classifying {}x{} mask {}",
                    grid.cols(),
                    grid.rows(),
                    mask.display()
                );
                print_grid(&grid)
            }
            Command::Scatter {
                rows,
                cols,
                density,
                seed,
            } => print_grid(&TileGrid::scatter(*rows, *cols, *density, *seed)?),
            Command::Inspect { index } => {
                let index = TextureIndex::new(*index)?;
                #[allow(clippy::print_stdout)]
                {
                    println!("{}", describe_index(index));
                }
                Ok(())
            }
        }
    }

    // Allow print for user feedback when skipping existing output
    #[allow(clippy::print_stderr)]
    fn generate(&self, args: &GenerateArgs) -> Result<()> {
        if !args.no_skip && args.outputs_exist() {
            warn!("skipping {}: all tiles exist in {}", args.name, args.output.display());
            if !self.cli.quiet {
                eprintln!("Skipping: {} (all tiles exist)", args.name);
            }
            return Ok(());
        }

        let start_time = Instant::now();
        let sources = load_sources(&args.source_paths())?;
        let progress = TilesetProgress::new(&args.name, u64::from(TEXTURE_COUNT), self.cli.quiet);

        for index in TextureIndex::all() {
            let tile = compose_index(index, &sources)?;
            let path = tile_path(&args.output, &args.name, index);
            save_tile(&tile, &path)?;
            progress.advance(path.display().to_string());
        }

        progress.finish(format!("done in {:.2?}", start_time.elapsed()));
        info!(
            "wrote {} tiles to {}",
            progress.position(),
            args.output.display()
        );
        Ok(())
    }
}

/// Render an index grid as text, one row per line
pub fn format_indices(indices: &Array2<Option<TextureIndex>>) -> String {
    indices
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    cell.map_or_else(|| EMPTY_CELL_MARKER.to_string(), |index| index.to_string())
                })
                .map(|cell| format!("{cell:>2}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line description of a texture index and its corner slices
pub fn describe_index(index: TextureIndex) -> String {
    format!("{index}: {}", Configuration::from_index(index))
}

fn print_grid(grid: &TileGrid) -> Result<()> {
    let indices = grid.texture_indices()?;
    #[allow(clippy::print_stdout)]
    {
        println!("{}", format_indices(&indices));
    }
    Ok(())
}
