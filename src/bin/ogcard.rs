use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "ogcard", version, about = "Render the Open Graph card PNG")]
struct Cli {
    /// Output PNG path (defaults to webshare-og.png in the crate root under `cargo run`,
    /// otherwise in the current directory).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Card spec JSON; omitted fields keep their built-in values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra font file to try before the system list (repeatable, in order).
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Print diagnostics about the resolved fonts (source + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut spec = match &cli.config {
        Some(path) => ogcard::CardSpec::from_json_file(path)
            .with_context(|| format!("load card spec '{}'", path.display()))?,
        None => ogcard::CardSpec::default(),
    };
    let mut candidates = cli.fonts.clone();
    candidates.append(&mut spec.fonts.candidates);
    spec.fonts.candidates = candidates;
    spec.validate()?;

    let fonts = ogcard::CardFonts::resolve(&spec);
    if cli.dump_fonts {
        dump_font_diagnostics(&fonts);
    }

    let canvas = ogcard::render_card(&spec, &fonts)?;

    let out = cli.out.unwrap_or_else(default_output_path);
    let bytes = ogcard::save_png(&canvas, &out)?;

    println!("{}", ogcard::saved_report(&out, bytes));
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Cargo exports CARGO_MANIFEST_DIR to `cargo run`; installed binaries use the working dir.
fn default_output_path() -> PathBuf {
    std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(ogcard::DEFAULT_OUTPUT_NAME)
}

fn dump_font_diagnostics(fonts: &ogcard::CardFonts) {
    eprintln!("font diagnostics:");
    for (role, font) in [("title", &fonts.title), ("subtitle", &fonts.subtitle)] {
        eprintln!("  {role}:");
        eprintln!("    source:  {}", font.source);
        eprintln!("    px:      {}", font.px);
        match &font.font_bytes {
            Some(bytes) => eprintln!("    sha256:  {}", sha256_hex(bytes)),
            None => eprintln!("    sha256:  -"),
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
