use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Photo catalog tools and masonry column packing")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a catalog.
    Validate(ValidateArgs),
    /// Pack one collection into columns.
    Pack(PackArgs),
    /// Pack every collection for a list of column counts and write JSON.
    Layout(LayoutArgs),
    /// Build a catalog entry by reading image sizes from a directory.
    Probe(ProbeArgs),
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Catalog JSON.
    #[arg(long)]
    catalog: PathBuf,
}

#[derive(Args, Debug)]
struct PackArgs {
    /// Catalog JSON.
    #[arg(long)]
    catalog: PathBuf,

    /// Collection name.
    #[arg(long)]
    collection: String,

    /// Column count (values below 1 mean a single column).
    #[arg(long, allow_negative_numbers = true, conflicts_with = "width")]
    columns: Option<i64>,

    /// Container width in pixels; the column count comes from the config breakpoints.
    #[arg(long)]
    width: Option<f64>,

    /// Gallery config JSON (breakpoints, gap).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the packed layout as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Catalog JSON.
    #[arg(long)]
    catalog: PathBuf,

    /// Column counts to lay out, comma separated.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "1,2,3,4"
    )]
    columns: Vec<i64>,

    /// Worker threads (defaults to the config value, then to rayon's default).
    #[arg(long)]
    threads: Option<usize>,

    /// Gallery config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ProbeArgs {
    /// Directory holding the collection's images.
    #[arg(long)]
    dir: PathBuf,

    /// Collection name.
    #[arg(long)]
    name: String,

    /// First day of the collection (YYYY-MM-DD).
    #[arg(long)]
    start: NaiveDate,

    /// Last day of the collection (YYYY-MM-DD).
    #[arg(long)]
    end: NaiveDate,

    /// Prefix prepended to each file name to form `src`.
    #[arg(long, default_value = "")]
    url_prefix: String,

    /// Output catalog JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let res = match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Pack(args) => cmd_pack(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Probe(args) => cmd_probe(args),
    };
    if let Err(err) = res {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn read_catalog(path: &Path) -> anyhow::Result<folio::Catalog> {
    let catalog = folio::Catalog::from_path(path)
        .with_context(|| format!("load catalog '{}'", path.display()))?;
    catalog
        .validate()
        .with_context(|| format!("validate catalog '{}'", path.display()))?;
    Ok(catalog)
}

fn read_config(path: Option<&Path>) -> anyhow::Result<folio::GalleryConfig> {
    let config = match path {
        Some(p) => folio::GalleryConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => folio::GalleryConfig::default(),
    };
    config.validate().context("validate config")?;
    Ok(config)
}

fn write_output(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("write stdout")?;
        }
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog)?;
    println!(
        "ok: {} collections, {} photos",
        catalog.collections().len(),
        catalog.photo_count()
    );
    Ok(())
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct PackOutput<'a> {
    collection: &'a str,
    columns: folio::ColumnCount,
    buckets: &'a [folio::ColumnBucket],
    balance: folio::BalanceReport,
    fingerprint: String,
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog)?;
    let config = read_config(args.config.as_deref())?;
    let collection = catalog
        .get(&args.collection)
        .with_context(|| format!("collection '{}' not found", args.collection))?;

    let columns = match (args.columns, args.width) {
        (Some(n), _) => folio::ColumnCount::clamped(n),
        (None, Some(w)) => config.breakpoints.columns_for_width(w),
        (None, None) => config.breakpoints.fallback,
    };
    let buckets = folio::pack_buckets(&collection.photos, columns);
    let balance = folio::BalanceReport::of(&buckets);
    let fingerprint = folio::fingerprint_buckets(&buckets);

    if args.json {
        let out = PackOutput {
            collection: &collection.name,
            columns,
            buckets: &buckets,
            balance,
            fingerprint: fingerprint.to_string(),
        };
        let text = serde_json::to_string_pretty(&out).context("serialize pack output")?;
        return write_output(None, &text);
    }

    println!(
        "{} in {columns} columns (target {:.3}, spread {:.3})",
        collection.name,
        balance.target,
        balance.spread()
    );
    for (idx, bucket) in buckets.iter().enumerate() {
        let srcs: Vec<&str> = bucket.photos.iter().map(|p| p.src.as_str()).collect();
        println!(
            "  column {idx} [{:.3}]: {}",
            bucket.total_aspect_ratio,
            srcs.join(", ")
        );
    }
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog)?;
    let config = read_config(args.config.as_deref())?;

    let mut threading = config.threading();
    if args.threads.is_some() {
        threading.threads = args.threads;
    }

    let layout = folio::layout_catalog(&catalog, &args.columns, &threading)?;
    let text = serde_json::to_string_pretty(&layout).context("serialize catalog layout")?;
    write_output(args.out.as_deref(), &text)
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let collection = folio::probe_dir(
        &args.dir,
        &args.name,
        args.start,
        args.end,
        &args.url_prefix,
    )
    .with_context(|| format!("probe '{}'", args.dir.display()))?;
    let catalog = folio::Catalog::from_collections(vec![collection])?;
    let text = catalog.to_json_pretty()?;
    write_output(args.out.as_deref(), &text)
}
