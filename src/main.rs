//! Fomor CLI - Command-line tool for Vindictus HFS archives.
//!
//! This is the main entry point for the Fomor command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use fomor_hfs::{HfsArchive, HfsEntry, Preset};

/// Fomor - Vindictus HFS archive extraction and packing tool
#[derive(Parser)]
#[command(name = "fomor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the contents of an archive
    List {
        /// Path to the archive file
        #[arg(short, long, env = "INPUT_HFS")]
        archive: PathBuf,

        /// Path to the XOR key file (enables the HFS preset)
        #[arg(short, long, env = "HFS_KEY_FILE")]
        key: Option<PathBuf>,

        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Extract files from an archive
    Extract {
        /// Path to the archive file
        #[arg(short, long, env = "INPUT_HFS")]
        archive: PathBuf,

        /// Output directory
        #[arg(short, long, env = "OUTPUT_FOLDER")]
        output: PathBuf,

        /// Path to the XOR key file (enables the HFS preset)
        #[arg(short, long, env = "HFS_KEY_FILE")]
        key: Option<PathBuf>,
    },

    /// Pack a directory tree into a ZIP-layout archive
    Pack {
        /// Input directory
        #[arg(short, long)]
        input: PathBuf,

        /// Output archive file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            archive,
            key,
            detailed,
        } => cmd_list(&archive, key.as_deref(), detailed)?,
        Commands::Extract {
            archive,
            output,
            key,
        } => cmd_extract(&archive, &output, key.as_deref())?,
        Commands::Pack { input, output } => cmd_pack(&input, &output)?,
    }

    Ok(())
}

/// Build the preset for the given key file: HFS when a key is supplied,
/// plain ZIP otherwise.
fn load_preset(key: Option<&Path>) -> Result<Preset> {
    match key {
        Some(path) => {
            let key = fs::read(path).context("Failed to read XOR key file")?;
            Ok(Preset::hfs(key))
        }
        None => Ok(Preset::zip()),
    }
}

fn cmd_list(path: &Path, key: Option<&Path>, detailed: bool) -> Result<()> {
    let preset = load_preset(key)?;
    let archive = HfsArchive::open(path, &preset).context("Failed to open archive")?;

    for entry in archive.iter() {
        if detailed {
            let (year, month, day) = entry.mod_date();
            let (hour, minute, _) = entry.mod_time();
            println!(
                "{:>12} {:>12} {:08x} {:04}-{:02}-{:02} {:02}:{:02} {}",
                entry.content.len(),
                entry.file_content.len(),
                entry.crc32,
                year,
                month,
                day,
                hour,
                minute,
                entry.filename()
            );
        } else {
            println!("{}", entry.filename());
        }
    }

    println!("\nTotal: {} entries", archive.entry_count());

    Ok(())
}

fn cmd_extract(path: &Path, output: &Path, key: Option<&Path>) -> Result<()> {
    println!("Opening archive: {}", path.display());

    let preset = load_preset(key)?;
    let start = Instant::now();
    let archive = HfsArchive::open(path, &preset).context("Failed to open archive")?;

    println!(
        "Loaded {} entries in {:?}",
        archive.entry_count(),
        start.elapsed()
    );

    let pb = ProgressBar::new(archive.entry_count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    fs::create_dir_all(output)?;

    let start = Instant::now();
    for entry in archive.iter() {
        if !entry.is_dir() {
            let output_path = output.join(entry.filename().replace('\\', "/"));

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::write(&output_path, &entry.file_content)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!("Extraction completed in {:?}", start.elapsed());

    Ok(())
}

fn cmd_pack(input: &Path, output: &Path) -> Result<()> {
    println!("Packing: {} -> {}", input.display(), output.display());

    let mut entries = Vec::new();

    for file in WalkDir::new(input)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let data = fs::read(file.path())
            .with_context(|| format!("Failed to read {}", file.path().display()))?;

        let name = file
            .path()
            .strip_prefix(input)?
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/");

        let mut entry = HfsEntry {
            version_needed: 10,
            name: name.into_bytes(),
            compressed_size: data.len() as u32,
            uncompressed_size: data.len() as u32,
            content: data.clone(),
            file_content: data,
            ..Default::default()
        };
        entry.update_crc32();

        entries.push(entry);
    }

    let mut archive = HfsArchive::from_entries(entries);
    let buffer = archive.to_bytes(&Preset::zip())?;

    fs::write(output, buffer).context("Failed to write output archive")?;

    println!("Packed {} entries", archive.entry_count());

    Ok(())
}
