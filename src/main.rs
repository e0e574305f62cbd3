use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use sint::{Config, Document};

#[derive(Parser)]
#[command(name = "sint")]
#[command(about = "Convert SINT markup files to LaTeX")]
struct Cli {
    /// Input SINT file
    input: Option<PathBuf>,

    /// Output file (defaults to the input name with a _tex.txt suffix)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to sint.toml next to the input)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        println!("PROPER USAGE: sint path/to/markup/file");
        std::process::exit(1);
    };

    // Read input file
    let source = match fs::read_to_string(&input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", input.display(), e);
            std::process::exit(1);
        }
    };

    let config_path = cli
        .config
        .unwrap_or_else(|| input.with_file_name("sint.toml"));
    let config = Config::load(&config_path);

    // Determine output path
    let output = cli.output.unwrap_or_else(|| tex_path(&input));

    println!("(1) Begin Document Shell");
    let mut doc = Document::new(&config);
    println!("(2) Completed Document Shell");

    println!("(3) Begin Parse File");
    let parsed = sint::parse(&source);
    doc.append(&parsed.blocks);
    println!("(4) Completed Parse File");

    println!("(5) Begin Finalize");
    let (latex, render_diagnostics) = doc.finish();
    if let Err(e) = fs::write(&output, latex) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }
    println!("(6) Completed Finalize");

    if config.diagnostics.report {
        for diagnostic in parsed.diagnostics.iter().chain(&render_diagnostics) {
            eprintln!("warning: {diagnostic}");
        }
    }

    println!(
        "\nSUCCESS!\nYour generated TEX file can be found at {}",
        output.display()
    );
}

/// Strip the input extension, append the fixed suffix, keep the directory.
fn tex_path(input: &Path) -> PathBuf {
    let stem = match input.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => String::new(),
    };
    input.with_file_name(format!("{stem}_tex.txt"))
}
