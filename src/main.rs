use chaps::{AppError, TestOptions};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chaps")]
#[command(version)]
#[command(
    about = "Relative-directory wrapper for the Pants build system",
    long_about = None
)]
struct Cli {
    /// Suppress chaps' own log output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a binary for targets in the current directory
    Binary {
        /// Bare targets (`:name`) relative to the current directory
        targets: Vec<String>,
    },
    /// Fix common format issues via the fmt goal
    Fmt {
        /// Bare targets (`:name`) relative to the current directory
        targets: Vec<String>,
    },
    /// List targets under the current directory as bare `:name` references
    List,
    /// Drop into an iPython REPL with targets loaded
    Repl {
        /// Bare targets (`:name`) relative to the current directory
        targets: Vec<String>,
    },
    /// Run a target, forwarding trailing arguments to it
    Run {
        /// Bare target (`:name`) to run
        target: String,
        /// Arguments passed through to the target
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Run tests through the test.pytest goal
    Test {
        /// Bare targets (`:name`) relative to the current directory
        targets: Vec<String>,
        /// Test every target under the tests/ mirror of the current path
        #[arg(long)]
        all: bool,
        /// Collect Python test coverage
        #[arg(long)]
        coverage: bool,
        /// Stop on the first failing test
        #[arg(long)]
        failfast: bool,
        /// Pytest verbosity (-v, -vv, -vvv)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
}

fn init_tracing(quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default = if quiet { "chaps=error" } else { "chaps=info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(env_filter).with_target(false).with_writer(std::io::stderr).init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Binary { targets } => chaps::binary(&targets),
        Commands::Fmt { targets } => chaps::fmt(&targets),
        Commands::List => chaps::list(),
        Commands::Repl { targets } => chaps::repl(&targets),
        Commands::Run { target, args } => chaps::run(&target, &args),
        Commands::Test { targets, all, coverage, failfast, verbose } => {
            chaps::test(&targets, &TestOptions { all, coverage, failfast, verbose })
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
