use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ios_diff::areas::comparison::Comparison;
use ios_diff::areas::output::OutputTarget;
use ios_diff::areas::workspace::Workspace;
use ios_diff::artifacts::patch::DEFAULT_NEGATION_MARKER;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ios-diff",
    version = "0.1.0",
    about = "Structural comparison of IOS style configurations",
    long_about = "Compares two indentation-structured device configurations section by section. \
    Lines are matched within their enclosing section, so a change nested under an interface \
    is reported together with that interface.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Files {
    #[arg(value_name = "FIRST_FILE", help = "The first configuration")]
    first: PathBuf,
    #[arg(value_name = "SECOND_FILE", help = "The second configuration")]
    second: PathBuf,
    #[arg(
        short,
        long = "output-file",
        alias = "outputFile",
        value_name = "FILE",
        help = "Write the output to a file instead of the terminal"
    )]
    output_file: Option<PathBuf>,
}

#[derive(Args)]
struct Formatting {
    #[arg(short, long, help = "Output the configuration without line prefixes")]
    raw: bool,
    #[arg(short = 'c', long, help = "Do not colorize lines")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "first",
        about = "Show lines unique to the first file",
        long_about = "Shows the lines only the first configuration has, \
        together with the sections that enclose them."
    )]
    First {
        #[command(flatten)]
        files: Files,
        #[command(flatten)]
        formatting: Formatting,
    },
    #[command(
        name = "second",
        about = "Show lines unique to the second file",
        long_about = "Shows the lines only the second configuration has, \
        together with the sections that enclose them."
    )]
    Second {
        #[command(flatten)]
        files: Files,
        #[command(flatten)]
        formatting: Formatting,
    },
    #[command(name = "common", about = "Show lines common to both files")]
    Common {
        #[command(flatten)]
        files: Files,
    },
    #[command(
        name = "diff",
        about = "Show differences between the first and second file"
    )]
    Diff {
        #[command(flatten)]
        files: Files,
        #[command(flatten)]
        formatting: Formatting,
    },
    #[command(name = "merge", about = "Generate a configuration merge")]
    Merge {
        #[command(flatten)]
        files: Files,
        #[command(flatten)]
        formatting: Formatting,
    },
    #[command(
        name = "patch",
        about = "Generate commands to transform the first configuration into the second",
        long_about = "Generates the commands that turn the first configuration into the second. \
        Removed lines are negated with the negation marker, added lines are issued as they are, \
        and both are nested under the sections that must be entered first."
    )]
    Patch {
        #[command(flatten)]
        files: Files,
        #[command(flatten)]
        formatting: Formatting,
        #[arg(
            long,
            value_name = "TEXT",
            default_value = DEFAULT_NEGATION_MARKER,
            help = "Text prepended to a line to remove it"
        )]
        negation_marker: String,
    },
}

impl Commands {
    fn files(&self) -> &Files {
        match self {
            Commands::First { files, .. }
            | Commands::Second { files, .. }
            | Commands::Common { files }
            | Commands::Diff { files, .. }
            | Commands::Merge { files, .. }
            | Commands::Patch { files, .. } => files,
        }
    }

    fn formatting(&self) -> Option<&Formatting> {
        match self {
            Commands::First { formatting, .. }
            | Commands::Second { formatting, .. }
            | Commands::Diff { formatting, .. }
            | Commands::Merge { formatting, .. }
            | Commands::Patch { formatting, .. } => Some(formatting),
            Commands::Common { .. } => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let files = cli.command.files();

    let pwd = std::env::current_dir()?;
    let workspace = Workspace::new(pwd.into_boxed_path());
    let first = workspace.parse_config(&files.first)?;
    let second = workspace.parse_config(&files.second)?;

    let target = OutputTarget::detect(files.output_file.as_deref());
    let color = cli
        .command
        .formatting()
        .is_some_and(|formatting| !formatting.no_color)
        && target.supports_color();
    let mut output = target.open()?;

    let comparison = Comparison::new(&first, &second, output.writer(), color);

    match &cli.command {
        Commands::First { formatting, .. } => comparison.first(formatting.raw)?,
        Commands::Second { formatting, .. } => comparison.second(formatting.raw)?,
        Commands::Common { .. } => comparison.common()?,
        Commands::Diff { formatting, .. } => comparison.diff(formatting.raw)?,
        Commands::Merge { formatting, .. } => comparison.merge(formatting.raw)?,
        Commands::Patch {
            formatting,
            negation_marker,
            ..
        } => comparison.patch(formatting.raw, negation_marker)?,
    }

    drop(comparison);
    output.finish()
}
