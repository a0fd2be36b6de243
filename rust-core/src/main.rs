use anyhow::{Context, ensure};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info, warn};
use qmc_lattice::Result;
use qmc_lattice::interfaces::OutputStyle;
use qmc_lattice::lattice::{
    Compression, Gf2Poly, IntegerLattice, LatticeRing, NoCompression, PolynomialLattice, SizeParam, Storage,
    SymmetricCompression,
};
use qmc_lattice::net::{AbstractDigitalNet, DigitalNet, Polynomial, Sobol, SobolSize, primitive_polynomial};

#[derive(Parser)]
#[command(name = "qmc-lattice")]
#[command(about = "Index views over lattice rules and construction of digital nets in base 2")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a digital net and print its description
    Net {
        #[command(subcommand)]
        method: NetMethod,

        /// Output style: terminal or net
        #[arg(short, long, default_value = "terminal")]
        style: OutputStyle,

        /// Interlacing factor
        #[arg(short, long, default_value_t = 1)]
        interlacing: usize,
    },
    /// Print the unpermuted and strided indices of an integration lattice
    Stride {
        /// Number of points
        #[arg(short = 'n', long)]
        points: u64,

        /// Stride a, applied as i -> a i mod n
        #[arg(short = 'a', long)]
        stride: u64,

        /// Fold i and n - i together
        #[arg(long)]
        symmetric: bool,
    },
    /// Print the unpermuted and strided indices of a polynomial lattice rule
    PolyStride {
        /// Modulus P(z) as binary digits, coefficient of z^0 first
        #[arg(short, long)]
        modulus: Gf2Poly,

        /// Stride q(z) as binary digits, coefficient of z^0 first
        #[arg(short = 'q', long)]
        stride: Gf2Poly,

        /// Fold i and n - i together
        #[arg(long)]
        symmetric: bool,
    },
}

#[derive(Subcommand)]
enum NetMethod {
    /// Sobol net
    Sobol {
        /// Number of columns of the generating matrices
        #[arg(short = 'm', long)]
        cols: usize,

        /// Number of coordinates
        #[arg(short, long)]
        dimension: usize,

        /// Initial direction numbers of coordinates 2, 3, ... as comma-separated lists (default: all ones)
        #[arg(long = "direction-numbers")]
        direction_numbers: Vec<String>,
    },
    /// Polynomial lattice rule seen as a digital net
    Polynomial {
        /// Modulus P(z) as binary digits, coefficient of z^0 first
        #[arg(long)]
        modulus: Gf2Poly,

        /// Generating polynomials, one per coordinate
        #[arg(long = "gen", required = true, num_args = 1..)]
        gen_values: Vec<Gf2Poly>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .map_err(|e| anyhow::anyhow!("Failed to set thread pool size: {}", e))?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting qmc-lattice v{}", qmc_lattice::VERSION);

    match cli.command {
        Commands::Net {
            method,
            style,
            interlacing,
        } => {
            ensure!(interlacing >= 1, "Interlacing factor must be at least 1");
            let net = build_net(method)?;
            println!("{}", net.format(style, interlacing));
            Ok(())
        }
        Commands::Stride {
            points,
            stride,
            symmetric,
        } => {
            let size_param = SizeParam::integration(points)?;
            info!("Integration lattice with {} points, stride {}", points, stride);
            if symmetric {
                print_index_tables(&Storage::<IntegerLattice, SymmetricCompression>::new(size_param), stride);
            } else {
                print_index_tables(&Storage::<IntegerLattice, NoCompression>::new(size_param), stride);
            }
            Ok(())
        }
        Commands::PolyStride {
            modulus,
            stride,
            symmetric,
        } => {
            let size_param = SizeParam::polynomial(modulus)?;
            info!("Polynomial lattice with modulus {}, stride {}", modulus, stride);
            if symmetric {
                print_index_tables(&Storage::<PolynomialLattice, SymmetricCompression>::new(size_param), stride);
            } else {
                print_index_tables(&Storage::<PolynomialLattice, NoCompression>::new(size_param), stride);
            }
            Ok(())
        }
    }
}

fn build_net(method: NetMethod) -> Result<Box<dyn AbstractDigitalNet>> {
    match method {
        NetMethod::Sobol {
            cols,
            dimension,
            direction_numbers,
        } => {
            let mut gen_values = vec![Vec::new()];
            for coord in 1..dimension {
                let numbers = match direction_numbers.get(coord - 1) {
                    Some(list) => parse_direction_numbers(list)?,
                    None => {
                        let (degree, _) = primitive_polynomial(coord)
                            .with_context(|| format!("No primitive polynomial for coordinate {}", coord + 1))?;
                        vec![1; degree as usize]
                    }
                };
                debug!("Coordinate {}: direction numbers {:?}", coord + 1, numbers);
                gen_values.push(numbers);
            }
            gen_values.truncate(dimension);
            let net = DigitalNet::<Sobol>::new(SobolSize::new(cols)?, gen_values)?;
            Ok(Box::new(net))
        }
        NetMethod::Polynomial { modulus, gen_values } => {
            let net = DigitalNet::<Polynomial>::new(modulus, gen_values)?;
            Ok(Box::new(net))
        }
    }
}

fn parse_direction_numbers(list: &str) -> Result<Vec<u64>> {
    list.split(',')
        .map(|s| {
            s.trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid direction number '{}' in '{}'", s, list))
        })
        .collect()
}

fn print_index_tables<L: LatticeRing, C: Compression>(storage: &Storage<L, C>, stride: L::Element) {
    let unpermute = storage.unpermute();
    let strided = storage.stride(stride);
    println!(
        "# {} points, {} compressed values ({} compression)",
        storage.num_points(),
        storage.virtual_size(),
        C::TAG
    );
    println!("# i  unpermute  stride");
    for (i, (u, s)) in unpermute.iter().zip(strided.iter()).enumerate() {
        println!("{}  {}  {}", i, u, s);
    }
}
