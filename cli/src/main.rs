use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use alifba_cli::{CliContext, commands, logging};
use alifba_types::FormPosition;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "alifba")]
#[command(about = "Inspect the Alifba letter dataset and audio assets")]
#[command(version)]
struct Cli {
    /// Path to an alphabet TOML file (defaults to the built-in alphabet)
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormArg {
    Initial,
    Medial,
    Final,
}

impl From<FormArg> for FormPosition {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Initial => FormPosition::Initial,
            FormArg::Medial => FormPosition::Medial,
            FormArg::Final => FormPosition::Final,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every letter with its identifiers and forms
    Letters,
    /// Report inconsistent dataset entries
    Validate,
    /// Check that every name and sound clip exists under a site root
    CheckAssets {
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
    /// Print the rendered grid as HTML
    Preview,
    /// Click a letter and print the playback requests
    Click {
        /// Letter name, e.g. "ba"
        name: String,
        /// Click a form instead of the main glyph
        #[arg(short, long, value_enum)]
        form: Option<FormArg>,
        #[arg(short, long, default_value_t = 1)]
        times: u32,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    logging::init();

    let cli = Cli::parse();
    let ctx = CliContext::load(cli.dataset.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    let success = match &cli.command {
        Commands::Letters => {
            commands::list_letters(&ctx, &mut stdout)?;
            true
        }
        Commands::Validate => commands::validate(&ctx, &mut stdout)?,
        Commands::CheckAssets { root } => commands::check_assets(&ctx, root, &mut stdout)?,
        Commands::Preview => {
            commands::preview(&ctx, &mut stdout)?;
            true
        }
        Commands::Click { name, form, times } => {
            let requests =
                commands::simulate_clicks(&ctx, name, form.map(FormPosition::from), *times)?;
            for path in requests {
                writeln!(stdout, "play {path}")?;
            }
            true
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_form_accepts_position_names() {
        let cli = Cli::try_parse_from(["alifba", "click", "ba", "--form", "medial"]).unwrap();
        match cli.command {
            Commands::Click { form, times, .. } => {
                assert_eq!(form.map(FormPosition::from), Some(FormPosition::Medial));
                assert_eq!(times, 1);
            }
            _ => panic!("expected click command"),
        }
    }

    #[test]
    fn test_click_form_rejects_numbers() {
        assert!(Cli::try_parse_from(["alifba", "click", "ba", "--form", "2"]).is_err());
    }
}
