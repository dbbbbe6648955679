// CLI host for the MAD gallery dataset.
//
// Runs the one-shot initialization the page depends on: read the list
// document (or the embedded sample), build the `Dataset`, and write it to
// stdout as a JSON array of records. Logs go to stderr so stdout stays
// machine-readable. See `mad_gallery_db` for the pipeline itself.
//
// Usage:
//   mad-gallery [DOCUMENT] [OPTIONS]
//     --config <FILE>          Gallery config JSON (default: built-in defaults)
//     --base <PATH>            Deployment base path for image URLs
//     --convention <a|b>       Sub-entry layout of the document (default: b)
//     --seed <N>               Seed for placeholder choices (default: clock)
//     --image-root <DIR>       Check title-derived covers against this directory
//     --search <KEYWORD>       Emit only records whose title or author match
//     --text                   Human-readable listing instead of JSON
//     --pretty                 Indent JSON output

use std::io::{self, Write};
use std::path::PathBuf;

use mad_gallery_db::view::{SearchView, nav_marks, rank_label};
use mad_gallery_db::{
    AlwaysPresent, Convention, Dataset, DirectoryProbe, GalleryConfig, ImageProbe, Record,
    default_document,
};
use mad_gallery_prng::GalleryRng;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    document: Option<PathBuf>,
    config: Option<PathBuf>,
    base: Option<String>,
    convention: Option<Convention>,
    seed: Option<u64>,
    image_root: Option<PathBuf>,
    search: Option<String>,
    text: bool,
    pretty: bool,
}

fn main() {
    init_logging();
    let args = parse_args();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => GalleryRng::new(seed),
        None => GalleryRng::from_clock(),
    };
    let probe: Box<dyn ImageProbe> = match &args.image_root {
        Some(root) => Box::new(DirectoryProbe::new(root)),
        None => Box::new(AlwaysPresent),
    };

    let dataset = match &args.document {
        Some(path) => Dataset::load_path(path, &config, &mut rng, probe.as_ref()),
        None => Dataset::from_document(default_document(), &config, &mut rng, probe.as_ref()),
    };
    tracing::info!(
        records = dataset.len(),
        origin = ?dataset.origin(),
        "gallery dataset ready"
    );

    let records: Vec<&Record> = match &args.search {
        Some(keyword) => SearchView::new(&dataset, keyword).records().to_vec(),
        None => dataset.iter().collect(),
    };

    let result = if args.text {
        write_text(&records, dataset.len())
    } else {
        write_json(&records, args.pretty)
    };
    if let Err(e) = result {
        eprintln!("Failed to write output: {e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Config file (if any) with command-line overrides applied on top.
fn load_config(args: &Args) -> Result<GalleryConfig, mad_gallery_db::GalleryError> {
    let mut config = match &args.config {
        Some(path) => GalleryConfig::load(path)?,
        None => GalleryConfig::default(),
    };
    if let Some(base) = &args.base {
        config.base_path = base.clone();
    }
    if let Some(convention) = args.convention {
        config.convention = convention;
    }
    Ok(config)
}

fn write_json(records: &[&Record], pretty: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, records)?;
    } else {
        serde_json::to_writer(&mut out, records)?;
    }
    writeln!(out)
}

fn write_text(records: &[&Record], total: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in records {
        writeln!(
            out,
            "{}  {}  [{}]  {}",
            rank_label(record.rank),
            record.title,
            record.author,
            record.cover_url
        )?;
        writeln!(out, "    {}", record.comment)?;
        if !record.tags.is_empty() {
            writeln!(out, "    #{}", record.tags.join(" #"))?;
        }
    }
    let ruler: Vec<String> = nav_marks(total).iter().map(|m| m.to_string()).collect();
    writeln!(out, "-- {} of {total} shown | ruler: {}", records.len(), ruler.join(" "))
}

/// Parse command-line arguments. Plain `std::env::args()` matching.
fn parse_args() -> Args {
    let mut parsed = Args::default();
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                parsed.config = Some(PathBuf::from(require_value(&args, i, "--config")));
            }
            "--base" => {
                i += 1;
                parsed.base = Some(require_value(&args, i, "--base"));
            }
            "--convention" => {
                i += 1;
                let value = require_value(&args, i, "--convention");
                parsed.convention = Some(value.parse().unwrap_or_else(|e: String| {
                    eprintln!("{e}");
                    std::process::exit(1);
                }));
            }
            "--seed" => {
                i += 1;
                parsed.seed = Some(
                    require_value(&args, i, "--seed")
                        .parse()
                        .unwrap_or_else(|_| {
                            eprintln!("--seed requires a valid number");
                            std::process::exit(1);
                        }),
                );
            }
            "--image-root" => {
                i += 1;
                parsed.image_root = Some(PathBuf::from(require_value(&args, i, "--image-root")));
            }
            "--search" => {
                i += 1;
                parsed.search = Some(require_value(&args, i, "--search"));
            }
            "--text" => parsed.text = true,
            "--pretty" => parsed.pretty = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if !other.starts_with("--") && parsed.document.is_none() => {
                parsed.document = Some(PathBuf::from(other));
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    parsed
}

fn require_value(args: &[String], i: usize, flag: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{flag} requires a value");
        std::process::exit(1);
    })
}

fn print_usage() {
    println!("Usage: mad-gallery [DOCUMENT] [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <FILE>        Gallery config JSON");
    println!("  --base <PATH>          Deployment base path for image URLs (default: /)");
    println!("  --convention <a|b>     Sub-entry layout of the document (default: b)");
    println!("  --seed <N>             Seed for placeholder choices (default: clock)");
    println!("  --image-root <DIR>     Check covers against this directory");
    println!("  --search <KEYWORD>     Only records whose title or author match");
    println!("  --text                 Human-readable listing instead of JSON");
    println!("  --pretty               Indent JSON output");
    println!("  --help, -h             Show this help");
}
