use clap::Parser;
use miette::Result;
use stockmaster::cli::commands::{
    apply, ask, completions, init, list, log, report, seed, shell, stock,
};
use stockmaster::cli::{logging, Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    logging::init(cli.global.verbose, cli.global.quiet);

    let global = &cli.global;
    match cli.command {
        Commands::Init(args) => init::run(args, global),
        Commands::Receive(args) => stock::run_receive(args, global),
        Commands::Deliver(args) => stock::run_deliver(args, global),
        Commands::Move(args) => stock::run_move(args, global),
        Commands::Adjust(args) => stock::run_adjust(args, global),
        Commands::List(args) => list::run(args, global),
        Commands::Log(args) => log::run(args, global),
        Commands::Report(args) => report::run(args, global),
        Commands::Ask(args) => ask::run(args, global),
        Commands::Apply(args) => apply::run(args, global),
        Commands::Shell(args) => shell::run(args, global),
        Commands::Seed => seed::run(global),
        Commands::Completions(args) => completions::run(args),
    }
}
