use clap::Parser;

use src_ana::cli::{Cli, Commands};
use src_ana::commands::{init_tracing, run_count, run_replace};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Count(args) => run_count(args, &cli),
        Commands::Replace(args) => run_replace(args, &cli),
    };

    std::process::exit(exit_code);
}
