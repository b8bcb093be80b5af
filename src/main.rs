use clap::Parser;
use collateral::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
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
    let global = cli.global;

    match cli.command {
        Commands::Models(args) => collateral::cli::commands::models::run(args, &global),
        Commands::Parts(args) => collateral::cli::commands::parts::run(args, &global),
        Commands::Mro(args) => collateral::cli::commands::mro::run(args, &global),
        Commands::Generate(args) => collateral::cli::commands::generate::run(args, &global),
        Commands::Check(args) => collateral::cli::commands::check::run(args, &global),
        Commands::Template(cmd) => collateral::cli::commands::template::run(cmd, &global),
        Commands::Completions(args) => collateral::cli::commands::completions::run(args),
    }
}
