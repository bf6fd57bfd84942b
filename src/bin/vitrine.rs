use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vitrine", version)]
struct Cli {
    /// Log debug events.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write index.html and style.css into an output directory.
    Build(BuildArgs),
    /// Rasterize the page at one viewport, scroll offset and time as a PNG.
    Preview(PreviewArgs),
    /// Print the render descriptor chosen for a viewport width as JSON.
    Describe(DescribeArgs),
    /// Check a portfolio JSON file without writing anything.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input portfolio JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Rewrite files even when unchanged.
    #[arg(long)]
    force: bool,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input portfolio JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport width in pixels.
    #[arg(long)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long)]
    height: u32,

    /// Vertical scroll offset in pixels.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Seconds since the page was first displayed.
    #[arg(long, default_value_t = 10.0)]
    time: f64,

    /// Panel height in pixels (defaults to four viewport heights).
    #[arg(long)]
    panel_height: Option<f64>,

    /// Directory page asset paths resolve against (defaults to the JSON's directory).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    /// Input portfolio JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport width in pixels.
    #[arg(long)]
    width: u32,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input portfolio JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Describe(args) => cmd_describe(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VITRINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn read_portfolio(path: &Path) -> anyhow::Result<vitrine::Portfolio> {
    let portfolio = vitrine::Portfolio::from_path(path)
        .with_context(|| format!("load portfolio '{}'", path.display()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let portfolio = read_portfolio(&args.in_path)?;
    let opts = vitrine::BuildOptions {
        force: args.force,
        year: None,
    };
    let report = vitrine::build_site(&portfolio, &args.out, &opts)?;
    eprintln!(
        "built {} ({} written, {} unchanged)",
        args.out.display(),
        report.written.len(),
        report.unchanged.len()
    );
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let portfolio = read_portfolio(&args.in_path)?;
    let viewport = vitrine::Viewport::new(args.width, args.height)?;

    let mut req = vitrine::PreviewRequest::new(viewport)
        .scroll(args.scroll)
        .time(args.time);
    if let Some(h) = args.panel_height {
        req = req.panel_height(h);
    }

    let root = match args.assets {
        Some(dir) => dir,
        None => args
            .in_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let assets = vitrine::AssetRoot::new(root);

    let frame = vitrine::render_preview(&portfolio, &req, &assets)?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let portfolio = read_portfolio(&args.in_path)?;
    let descriptor = vitrine::describe_for_width(args.width, &portfolio.config);
    let json = serde_json::to_string_pretty(&descriptor).context("serialize descriptor")?;
    println!("{json}");
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let portfolio = read_portfolio(&args.in_path)?;
    eprintln!(
        "ok: {} ({} publications, {} projects, {} resume entries)",
        portfolio.page_title(),
        portfolio.publications.len(),
        portfolio.projects.len(),
        portfolio.resume_entries().count()
    );
    Ok(())
}
