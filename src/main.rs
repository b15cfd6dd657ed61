use clap::Parser;
use tracing_subscriber::EnvFilter;
use whilelang::{
    run_source,
    util::source::{join_path_args, load_source},
};

/// whilelang runs programs written in a minimal LOOP/WHILE-style teaching
/// language and prints every variable's final value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the arguments as program text instead of a file path.
    #[arg(short, long)]
    eval: bool,

    /// Log more detail to stderr (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the source file. Words split by the shell are joined back with
    /// spaces.
    #[arg(required = true, num_args = 1..)]
    contents: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let contents = join_path_args(&args.contents);
    let script = if args.eval {
        contents
    } else {
        load_source(&contents).unwrap_or_else(|e| {
                                  eprintln!("{e}");
                                  std::process::exit(1);
                              })
    };

    match run_source(&script) {
        Ok(state) => {
            for diagnostic in state.diagnostics() {
                eprintln!("{diagnostic}");
            }
            print!("{state}");
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        },
    }
}
