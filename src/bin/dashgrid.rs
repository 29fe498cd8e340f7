use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgGroup, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dashgrid", version)]
struct Cli {
    /// Log engine decisions (demotions, clamps) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out the dashboard's enabled widgets and print the grid items.
    Layout(LayoutArgs),
    /// Move one card of a card tray and print the updated dashboard.
    Reorder(ReorderArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("grid_width").required(true).args(["columns", "viewport_width"])))]
struct LayoutArgs {
    /// Input dashboard JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Grid width in cells.
    #[arg(long)]
    columns: Option<u32>,

    /// Viewport width in pixels; the column count follows the default breakpoints.
    #[arg(long)]
    viewport_width: Option<u32>,

    /// Placement steps per cell (2 = half-cell placement).
    #[arg(long, default_value_t = 2)]
    resolution: u32,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ReorderArgs {
    /// Input dashboard JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Id of the card-tray widget.
    #[arg(long)]
    tray: String,

    /// Index of the dragged card.
    #[arg(long, allow_negative_numbers = true)]
    from: isize,

    /// Index of the drop slot.
    #[arg(long, allow_negative_numbers = true)]
    to: isize,

    /// Number of slots in the tray.
    #[arg(long, default_value_t = 4)]
    capacity: usize,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Reorder(args) => cmd_reorder(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "dashgrid=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_dashboard(path: &Path) -> anyhow::Result<dashgrid::Dashboard> {
    let dashboard = dashgrid::Dashboard::from_path(path)
        .with_context(|| format!("load dashboard '{}'", path.display()))?;
    dashboard.validate()?;
    Ok(dashboard)
}

fn write_output(out: Option<&Path>, json: &str) -> anyhow::Result<()> {
    let Some(path) = out else {
        println!("{json}");
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let dashboard = read_dashboard(&args.in_path)?;

    let columns = match (args.columns, args.viewport_width) {
        (Some(columns), _) => columns,
        (None, Some(width)) => dashgrid::ColumnBreakpoints::default().columns_for_width(width),
        (None, None) => anyhow::bail!("either --columns or --viewport-width is required"),
    };
    let opts = dashgrid::LayoutOpts::new(columns)
        .with_resolution(dashgrid::GridResolution::new(args.resolution)?);

    let layout = dashboard.layout(&opts);
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
    write_output(args.out.as_deref(), &json)
}

fn cmd_reorder(args: ReorderArgs) -> anyhow::Result<()> {
    let dashboard = read_dashboard(&args.in_path)?;
    let next = dashboard.reorder_tray(&args.tray, args.from, args.to, args.capacity)?;
    write_output(args.out.as_deref(), &next.to_json_pretty()?)
}
