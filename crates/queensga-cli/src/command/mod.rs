use clap::Parser;

use self::evolve::EvolveArg;

mod evolve;

/// Evolve a placement of queens on an 8×8 board with a genetic algorithm.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    evolve: EvolveArg,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    evolve::run(&args.evolve)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }
}
