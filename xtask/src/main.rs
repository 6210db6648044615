//! Developer tasks: man page and shell completion generation.

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Developer tasks for seoscope")]
struct XtaskCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the man page
    Man {
        /// Output directory
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
    /// Generate shell completions for bash, zsh, and fish
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
}

fn main() -> io::Result<()> {
    let cli = XtaskCli::parse();

    match cli.command {
        Commands::Man { out_dir } => man(&out_dir),
        Commands::Completions { out_dir } => completions(&out_dir),
    }
}

fn man(out_dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(out_dir)?;

    let man = clap_mangen::Man::new(seoscope::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = out_dir.join("seoscope.1");
    std::fs::write(&path, buffer)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn completions(out_dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(out_dir)?;

    let mut cmd = seoscope::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let path = clap_complete::generate_to(shell, &mut cmd, "seoscope", out_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
