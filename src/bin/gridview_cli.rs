//! CLI tool for gridview - renders grids and tiles clipboard text
//!
//! Usage:
//!   gridview_cli tile <rows> <cols>            # Tile TSV from stdin to rows x cols
//!   gridview_cli render <grid.json>            # Print the row markup of a grid document
//!   gridview_cli render <grid.json> -o out.html
//!
//! A grid document is `{ "config"?: {...}, "columns": [...], "rows": [...] }`.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Read, Write};

use gridview::config::GridConfig;
use gridview::model::RowInput;
use gridview::render::RenderedRow;
use gridview::types::ColumnDef;
use gridview::view::GridCore;
use serde::Deserialize;

#[derive(Deserialize)]
struct GridDocument {
    #[serde(default)]
    config: GridConfig,
    columns: Vec<ColumnDef>,
    #[serde(default)]
    rows: Vec<RowInput>,
}

fn usage() -> ! {
    eprintln!("Usage: gridview_cli tile <rows> <cols> < input.tsv");
    eprintln!("       gridview_cli render <grid.json> [-o output.html]");
    std::process::exit(1);
}

fn parse_extent(arg: &str) -> usize {
    match arg.parse() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Invalid extent {}: {}", arg, e);
            std::process::exit(1);
        }
    }
}

fn tile(args: &[String]) {
    if args.len() < 4 {
        usage();
    }
    let rows = parse_extent(&args[2]);
    let cols = parse_extent(&args[3]);

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error reading stdin: {}", e);
        std::process::exit(1);
    }

    let output = gridview::tile_text(&input, rows, cols);
    io::stdout().write_all(output.as_bytes()).unwrap();
    println!();
}

fn render(args: &[String]) {
    if args.len() < 3 {
        usage();
    }
    let input_path = &args[2];
    let output_path = if args.len() > 4 && args[3] == "-o" {
        Some(&args[4])
    } else {
        None
    };

    let json = match fs::read_to_string(input_path) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let document: GridDocument = match serde_json::from_str(&json) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error parsing grid document: {}", e);
            std::process::exit(1);
        }
    };

    let mut grid: GridCore<RenderedRow> = match GridCore::new(&document.config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    let row_count = document.rows.len();
    grid.set_columns(document.columns);
    grid.load_rows(document.rows);
    let html = grid.render_body();

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {} ({} rows)", path, row_count);
        }
        None => {
            io::stdout().write_all(html.as_bytes()).unwrap();
            println!();
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("tile") => tile(&args),
        Some("render") => render(&args),
        _ => usage(),
    }
}
