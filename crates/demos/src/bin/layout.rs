//! Lay out a JSON tree description and print the result.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use arbor::{LayoutTree, dump, dump_plain, geom::Size};
use arbor_demos::TreeSpec;
use clap::{ArgAction, Parser};
use tracing::{Level, debug};

/// CLI flags for arbor-layout.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// JSON tree file. Reads stdin when omitted or "-".
    path: Option<PathBuf>,

    /// Available width for the root.
    #[clap(long, default_value_t = 80.0)]
    width: f32,

    /// Available height for the root.
    #[clap(long, default_value_t = 24.0)]
    height: f32,

    /// Print the computed rects as JSON instead of a tree dump.
    #[clap(long)]
    json: bool,

    /// Disable colors in the tree dump.
    #[clap(long)]
    no_color: bool,

    /// Log verbosity; repeat for more detail.
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Read the tree description from a file or stdin.
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// Run the layout driver.
fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .without_time()
        .compact()
        .init();

    let text = read_input(args.path.as_ref())?;
    let spec = TreeSpec::from_json(&text).context("parsing tree description")?;

    let mut tree = LayoutTree::new();
    let root = spec.build(&mut tree)?;
    debug!(nodes = tree.len(), "built tree");
    tree.compute_layout(root, Size::new(args.width, args.height))?;

    if args.json {
        let snapshot = tree.snapshot(root)?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else if args.no_color {
        print!("{}", dump_plain(&tree, root)?);
    } else {
        print!("{}", dump(&tree, root)?);
    }
    Ok(())
}
