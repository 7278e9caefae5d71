//! Terramesh CLI - seeded grid mesh shaping.
//!
//! Builds a flat grid mesh, runs the displace/smooth/flat-shade pipeline
//! over it and reports the result.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use terramesh::geometry::{HeightField, Mesh};
use terramesh::pipeline::{MeshConfig, Pipeline};
use terramesh::sequence::SeedSequence;
use terramesh::smoothing::GaussianKernel;

/// Seeded height displacement and smoothing for grid meshes.
#[derive(Parser)]
#[command(name = "terramesh")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shape a generated grid mesh.
    Generate {
        /// Vertices per row (also used as the grid dimension).
        #[arg(short, long, default_value = "11")]
        columns: usize,

        /// Number of rows (defaults to `columns`).
        #[arg(short, long)]
        rows: Option<usize>,

        /// Distance between neighboring grid vertices.
        #[arg(long, default_value = "1.0")]
        spacing: f32,

        /// JSON configuration file; flags below are ignored when given.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed string for displacement.
        #[arg(short, long, default_value = "test")]
        seed: String,

        /// Displacement modulus (must be > 0).
        #[arg(long, default_value = "0.5234")]
        salt: f32,

        /// Skip seeded displacement.
        #[arg(long)]
        no_terraform: bool,

        /// Smoothing filter.
        #[arg(long, default_value = "gauss")]
        smoothing: SmoothingArg,

        /// Gaussian spread (0.2-0.3 roughens, 0.3-2.0 smooths).
        #[arg(long, default_value = "0.4")]
        sigma: f32,

        /// Box filter half-width (1-4 typical).
        #[arg(long, default_value = "1")]
        smooth_width: usize,

        /// Keep shared vertices instead of splitting per triangle.
        #[arg(long)]
        no_flatshade: bool,

        /// Print the height grid before flat shading.
        #[arg(long)]
        print_heights: bool,
    },

    /// Print the Gaussian kernel for a sigma.
    Kernel {
        #[arg(long, default_value = "0.4")]
        sigma: f32,
    },

    /// Print the hash-chain sequence for a seed.
    Sequence {
        #[arg(short, long, default_value = "test")]
        seed: String,

        #[arg(short, long, default_value = "32")]
        length: usize,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SmoothingArg {
    /// No smoothing.
    None,
    /// Cross-shaped box filter.
    Mean,
    /// Separable Gaussian blur.
    Gauss,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            columns,
            rows,
            spacing,
            config,
            seed,
            salt,
            no_terraform,
            smoothing,
            sigma,
            smooth_width,
            no_flatshade,
            print_heights,
        } => {
            let mesh_config = match config {
                Some(path) => MeshConfig::from_json_file(&path).unwrap_or_else(|e| {
                    eprintln!("Error loading config {}: {}", path.display(), e);
                    std::process::exit(1);
                }),
                None => MeshConfig {
                    seed,
                    salt,
                    terraforming: !no_terraform,
                    smoothing: smoothing != SmoothingArg::None,
                    gauss: smoothing == SmoothingArg::Gauss,
                    sigma,
                    dimensions: columns,
                    smooth_width,
                    flatshading: !no_flatshade,
                },
            };
            run_generate(columns, rows.unwrap_or(columns), spacing, mesh_config, print_heights);
        }
        Commands::Kernel { sigma } => run_kernel(sigma),
        Commands::Sequence { seed, length } => run_sequence(&seed, length),
    }
}

fn run_generate(columns: usize, rows: usize, spacing: f32, config: MeshConfig, print_heights: bool) {
    if columns < 2 || rows < 2 {
        eprintln!("Error: Grid must be at least 2x2");
        std::process::exit(1);
    }
    if config.dimensions != columns {
        println!(
            "Warning: grid dimension {} does not match the generated row width {}",
            config.dimensions, columns
        );
    }

    println!("Terramesh - Grid Mesh Shaping");
    println!("=============================");
    println!("Grid: {}x{} (spacing {})", columns, rows, spacing);
    println!("Seed: {:?}", config.seed);
    println!("Smoothing: {}", config.smoothing_mode().name());

    let pipeline = Pipeline::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let start = Instant::now();
    let mut mesh = Mesh::grid(columns, rows, spacing);

    pipeline
        .run_with_callbacks(
            &mut mesh,
            |name, i, total| {
                println!("  [{}/{}] Starting: {}", i + 1, total, name);
            },
            |name, i, total| {
                println!("  [{}/{}] Completed: {}", i + 1, total, name);
            },
        )
        .unwrap_or_else(|e| {
            eprintln!("Error during generation: {}", e);
            std::process::exit(1);
        });

    // Flat shading reorders vertices, so rerun without it to print the grid.
    let grid_heights = if print_heights {
        let grid_config = MeshConfig {
            flatshading: false,
            ..config
        };
        let mut grid = Mesh::grid(columns, rows, spacing);
        Pipeline::from_config(&grid_config)
            .and_then(|p| p.run(&mut grid))
            .ok()
            .map(|_| HeightField::from_vertices(&grid.vertices, columns))
    } else {
        None
    };

    println!("Generation completed in {:.2?}", start.elapsed());
    println!("Vertices:  {}", mesh.vertex_count());
    println!("Triangles: {}", mesh.triangle_count());
    let (min_h, max_h) = mesh.height_range();
    println!("Height range: [{:.4}, {:.4}]", min_h, max_h);

    if let Some(field) = grid_heights {
        println!();
        for row in 0..field.layout().rows() {
            let line: Vec<String> = field.row(row).iter().map(|h| format!("{:8.4}", h)).collect();
            println!("{}", line.join(" "));
        }
    }
}

fn run_kernel(sigma: f32) {
    if !(sigma.is_finite() && sigma > 0.0) {
        eprintln!("Error: Sigma must be positive");
        std::process::exit(1);
    }

    let kernel = GaussianKernel::new(sigma);
    println!("Sigma: {}", kernel.sigma());
    println!("Width: {} ({} taps)", kernel.width(), kernel.weights().len());
    println!("Mass:  {:.6}", kernel.mass());
    let w = kernel.width() as isize;
    for t in -w..=w {
        println!("  {:>3}: {:.6}", t, kernel.weight(t));
    }
}

fn run_sequence(seed: &str, length: usize) {
    let sequence = SeedSequence::generate(seed, length);
    println!("{}", sequence.as_str());
}
