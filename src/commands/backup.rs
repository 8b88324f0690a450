// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::Local;
use std::fs;
use std::path::Path;

use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("now", _)) => backup_now(store),
        Some(("restore", sub)) => restore(store, sub),
        _ => Ok(()),
    }
}

/// Copy the live store file to a timestamped sibling.
fn backup_now(store: &Store) -> Result<()> {
    let src = store
        .path()
        .context("Store is not file-backed; nothing to copy")?;
    let dest = backup_path(src);
    fs::copy(src, &dest).with_context(|| format!("Backup to {}", dest.display()))?;
    println!("Backed up store to {}", dest.display());
    Ok(())
}

/// Overwrite the live store with a previous backup. The process should
/// reopen the store afterwards; we only do the file-level copy here.
fn restore(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let file = sub.get_one::<String>("file").unwrap();
    if !sub.get_flag("yes") {
        bail!("Refusing to overwrite the live store without --yes");
    }
    let dest = store
        .path()
        .context("Store is not file-backed; nothing to restore over")?;
    fs::copy(file, dest).with_context(|| format!("Restore from {}", file))?;
    println!("Restored store from {}", file);
    Ok(())
}

fn backup_path(src: &Path) -> std::path::PathBuf {
    let stem = src
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("moneybook");
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    src.with_file_name(format!("{}_backup_{}.sqlite", stem, stamp))
}
