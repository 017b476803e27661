//! CLI entrypoint for `rule-compose`.

use clap::Parser;

use rule_compose_cli::cli::Args;
use rule_compose_cli::error::CliError;
use rule_compose_cli::settings::Settings;

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    rule_compose_cli::init_tracing(args.is_verbose);
    let settings = Settings::load(&args)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    rule_compose_cli::run(&args, &settings, &mut out)
}
