use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

const BIN_NAME: &str = "signpost";

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build release artifacts for the signpost CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Shells to generate completions for. Defaults to all supported
    /// shells.
    #[arg(long, value_enum, action = clap::ArgAction::Append)]
    shell: Vec<Shell>,

    /// Skip shell completions.
    #[arg(long, conflicts_with = "no_manpages")]
    no_completions: bool,

    /// Skip manpages.
    #[arg(long)]
    no_manpages: bool,
  },
}

fn main() -> Result<()> {
  let xtask = Xtask::parse();

  match xtask.command {
    Commands::Dist {
      output_dir,
      shell,
      no_completions,
      no_manpages,
    } => {
      if !no_completions {
        let shells = if shell.is_empty() {
          vec![Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell]
        } else {
          shell
        };
        generate_completions(&output_dir, &shells)?;
      }
      if !no_manpages {
        generate_manpages(&output_dir)?;
      }
    },
  }

  Ok(())
}

fn generate_completions(output_dir: &Path, shells: &[Shell]) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;

  let mut cmd = signpost::cli::Cli::command();
  for shell in shells {
    generate_to(*shell, &mut cmd, BIN_NAME, &completions_dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
  }

  println!(
    "Shell completions generated in {}",
    completions_dir.display()
  );
  Ok(())
}

fn render_manpage(man: Man, path: &Path) -> Result<()> {
  let mut file = fs::File::create(path).with_context(|| {
    format!("Failed to create manpage file at {}", path.display())
  })?;
  man
    .render(&mut file)
    .with_context(|| format!("Failed to render {}", path.display()))
}

/// One page for the CLI and one per subcommand (`signpost-nav.1`, ...).
fn generate_manpages(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;

  let cmd = signpost::cli::Cli::command();
  for sub in cmd.get_subcommands() {
    let name = format!("{BIN_NAME}-{}", sub.get_name());
    let man = Man::new(sub.clone()).title(name.to_uppercase());
    render_manpage(man, &man_dir.join(format!("{name}.1")))?;
  }
  render_manpage(Man::new(cmd), &man_dir.join(format!("{BIN_NAME}.1")))?;

  println!("Manpages generated in {}", man_dir.display());
  Ok(())
}
