//! topdf CLI - HTML report to PDF conversion tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use topdf::{
    convert_file, derive_output_path, to_document, ConversionProfile, ConvertOptions, Error,
};

#[derive(Parser)]
#[command(name = "topdf")]
#[command(version)]
#[command(about = "Convert semi-structured HTML reports into paginated PDF files", long_about = None)]
struct Cli {
    /// Directory to load the TTF font family from
    #[arg(long, global = true, env = "TOPDF_FONT_DIR", value_name = "DIR")]
    font_dir: Option<PathBuf>,

    /// Font family base name (e.g. "LiberationSans")
    #[arg(long, global = true, env = "TOPDF_FONT_FAMILY", value_name = "NAME")]
    font_family: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the short report using its conventional file names
    Basic {
        /// Directory holding the report documents
        #[arg(long, value_name = "DIR", default_value = "docs")]
        dir: PathBuf,
    },

    /// Convert the full report using its conventional file names
    Full {
        /// Directory holding the report documents
        #[arg(long, value_name = "DIR", default_value = "docs")]
        dir: PathBuf,
    },

    /// Convert an HTML file to PDF
    Convert {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (input with a .pdf extension if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Conversion profile
        #[arg(long, value_enum, default_value = "basic")]
        profile: Profile,
    },

    /// Print the classified block sequence as JSON
    Blocks {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Conversion profile
        #[arg(long, value_enum, default_value = "full")]
        profile: Profile,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Profile {
    /// Title-plus-body conversion
    Basic,
    /// Full-document conversion with heading detection
    Full,
}

impl From<Profile> for ConversionProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Basic => ConversionProfile::Basic,
            Profile::Full => ConversionProfile::Full,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let overrides = FontOverrides {
        dir: cli.font_dir.clone(),
        family: cli.font_family.clone(),
    };

    let result = match cli.command {
        Commands::Basic { dir } => cmd_profile(ConversionProfile::Basic, &dir, &overrides),
        Commands::Full { dir } => cmd_profile(ConversionProfile::Full, &dir, &overrides),
        Commands::Convert {
            input,
            output,
            profile,
        } => {
            let output = output.unwrap_or_else(|| derive_output_path(&input));
            cmd_convert(&input, &output, profile.into(), &overrides)
        }
        Commands::Blocks {
            input,
            profile,
            compact,
        } => cmd_blocks(&input, profile.into(), compact),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

struct FontOverrides {
    dir: Option<PathBuf>,
    family: Option<String>,
}

impl FontOverrides {
    fn apply(&self, mut options: ConvertOptions) -> ConvertOptions {
        if let Some(ref dir) = self.dir {
            options.render = options.render.with_font_dir(dir.clone());
        }
        if let Some(ref family) = self.family {
            options.render = options.render.with_font_family(family.clone());
        }
        options
    }
}

fn cmd_profile(
    profile: ConversionProfile,
    dir: &Path,
    overrides: &FontOverrides,
) -> topdf::Result<()> {
    let input = profile.input_path(dir);
    let output = derive_output_path(&input);
    run_conversion(&input, &output, overrides.apply(profile.options()))
}

fn cmd_convert(
    input: &Path,
    output: &Path,
    profile: ConversionProfile,
    overrides: &FontOverrides,
) -> topdf::Result<()> {
    run_conversion(input, output, overrides.apply(profile.options()))
}

fn run_conversion(input: &Path, output: &Path, options: ConvertOptions) -> topdf::Result<()> {
    match convert_file(input, output, &options) {
        Ok(summary) => {
            println!(
                "{} {}",
                "PDF generated:".green().bold(),
                summary.output.display()
            );
            Ok(())
        }
        // The conversion is an operator utility: a missing source document
        // is reported on stdout and the process still exits successfully.
        Err(Error::MissingInput(path)) => {
            println!(
                "{} {}",
                "Source HTML file not found:".yellow().bold(),
                path.display()
            );
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn cmd_blocks(input: &Path, profile: ConversionProfile, compact: bool) -> topdf::Result<()> {
    if !input.exists() {
        println!(
            "{} {}",
            "Source HTML file not found:".yellow().bold(),
            input.display()
        );
        return Ok(());
    }

    let html = std::fs::read_to_string(input)?;
    let document = to_document(&html, &profile.options());
    log::debug!("classified {} blocks from {}", document.block_count(), input.display());

    let json = if compact {
        serde_json::to_string(&document.blocks)?
    } else {
        serde_json::to_string_pretty(&document.blocks)?
    };
    println!("{}", json);
    Ok(())
}
