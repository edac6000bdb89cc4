// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `cuebar-scope-css`: scopes a stylesheet under a theme class.
//!
//! ```text
//! cuebar-scope-css static/css/dark.css
//! cuebar-scope-css --scope .night in.css -o out.css
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cuebar_css::{DEFAULT_SCOPE, scope_stylesheet};

#[derive(Debug, Parser)]
#[command(name = "cuebar-scope-css", version, about = "Prefix every selector in a stylesheet with a theme scope")]
struct Args {
    /// Stylesheet to rewrite.
    input: PathBuf,

    /// Where to write the result; defaults to rewriting the input in place.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Selector every rule is nested under.
    #[arg(long, default_value = DEFAULT_SCOPE)]
    scope: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let css = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let scoped = scope_stylesheet(&css, &args.scope)
        .with_context(|| format!("failed to scope {}", args.input.display()))?;

    let output = args.output.as_ref().unwrap_or(&args.input);
    fs::write(output, scoped).with_context(|| format!("failed to write {}", output.display()))?;

    eprintln!("scoped {} under {}", output.display(), args.scope);
    Ok(())
}
