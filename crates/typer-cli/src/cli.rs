use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "atomtyper CLI - assign OPLS-aa atom types to built-in demo molecules and print the per-atom label sets."
)]
pub struct Cli {
    /// Name of the built-in molecule to type (see --list)
    #[arg(value_name = "MOLECULE", required_unless_present = "list")]
    pub molecule: Option<String>,

    /// List the built-in demo molecules and exit
    #[arg(short, long)]
    pub list: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
