// src/runner.rs

use std::path::PathBuf;

use crate::config::consts::{FUNCTIONS_URL, OUT_FILE};
use crate::core::net;
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::{file, pygen, scrape};

/// Summary of what was produced.
pub struct RunSummary {
    pub out_path: PathBuf,
    pub count: usize,
}

/// The whole pipeline: fetch → extract → render → write.
/// `progress` can be None (no console output) or Some(&mut impl Progress).
pub fn run(mut progress: Option<&mut dyn Progress>) -> Result<RunSummary, ScrapeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("downloading list");
    }
    let html_doc = net::http_get(FUNCTIONS_URL)?;
    logf!("fetched {} bytes from {}", html_doc.len(), FUNCTIONS_URL);

    if let Some(p) = progress.as_deref_mut() {
        p.log("parsing");
    }
    let set = scrape::extract(&html_doc)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("found {} functions", set.len()));
    }

    let source = pygen::render(&set);
    let out_path = PathBuf::from(OUT_FILE);
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("writing to {}", out_path.display()));
    }
    file::write_atomic(&out_path, &source)?;
    logf!("wrote {} ({} functions)", out_path.display(), set.len());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RunSummary {
        out_path,
        count: set.len(),
    })
}
