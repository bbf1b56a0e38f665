// src/scrape/functions.rs

use crate::config::consts::{CONTENT_CLASS, CONTENT_TAG, FUNCTIONS_URL, SLEEP_BUILTINS};
use crate::core::html::{
    find_block_with_class_ci, inner_after_open_tag, next_balanced_block_ci, next_tag_block_ci,
    open_tag_end, strip_tags,
};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::error::ScrapeError;

/// One function destined to become one generated wrapper. `doc` is a
/// ready-made comment block: one `# `-prefixed line per source line.
/// `name` is the raw page label and may carry characters a Python
/// identifier can't (the page names some functions "-is64" style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    pub name: String,
    pub doc: Option<String>,
}

/// Extracted functions in page order. Names are unique; setting a known
/// name updates that entry in place rather than re-appending it.
#[derive(Debug, Default)]
pub struct FunctionSet {
    entries: Vec<FunctionEntry>,
}

impl FunctionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, doc: Option<String>) {
        if let Some(e) = self.entries.iter_mut().find(|e| e.name == name) {
            e.doc = doc;
        } else {
            self.entries.push(FunctionEntry { name: s!(name), doc });
        }
    }

    pub fn get(&self, name: &str) -> Option<&FunctionEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FunctionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Download the function reference page and extract the full table.
pub fn fetch() -> Result<FunctionSet, ScrapeError> {
    let html_doc = net::http_get(FUNCTIONS_URL)?;
    extract(&html_doc)
}

pub fn extract(html_doc: &str) -> Result<FunctionSet, ScrapeError> {
    extract_with_builtins(html_doc, SLEEP_BUILTINS)
}

/// `builtins` are emitted without documentation and win over any
/// same-named entry scraped off the page (the entry keeps its page
/// position, its doc is dropped).
pub fn extract_with_builtins(
    html_doc: &str,
    builtins: &[&str],
) -> Result<FunctionSet, ScrapeError> {
    let (c_s, c_e) = find_block_with_class_ci(html_doc, CONTENT_TAG, CONTENT_CLASS).ok_or_else(
        || {
            ScrapeError::Structure(format!(
                "content container <{CONTENT_TAG} class=\"{CONTENT_CLASS}\"> not found"
            ))
        },
    )?;
    let container = inner_after_open_tag(&html_doc[c_s..c_e]);

    let names = heading_names(&container);
    let docs = doc_blocks(&container);

    // Pairing is positional: heading i documents block i. If the page
    // layout drifts, refuse to emit mis-paired stubs.
    if names.len() != docs.len() {
        return Err(ScrapeError::Structure(format!(
            "headings and doc blocks out of step: {} names vs {} blocks",
            names.len(),
            docs.len()
        )));
    }

    let mut set = FunctionSet::new();
    for (name, doc) in names.into_iter().zip(docs) {
        set.set(&name, Some(doc));
    }
    for b in builtins {
        set.set(b, None);
    }

    logd!("extracted {} entries ({} builtin)", set.len(), builtins.len());
    Ok(set)
}

/* ---------- helpers ---------- */

/// `<h2><a href="#-is64">-is64</a></h2>` → "-is64", page order.
/// Every link in every heading counts.
fn heading_names(container: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut pos = 0usize;
    while let Some((h_s, h_e)) = next_tag_block_ci(container, "h2", pos) {
        let h2 = &container[h_s..h_e];
        pos = h_e;

        let mut a_pos = 0usize;
        while let Some((a_s, a_e)) = next_tag_block_ci(h2, "a", a_pos) {
            let inner = inner_after_open_tag(&h2[a_s..a_e]);
            names.push(normalize_entities(&strip_tags(&inner)));
            a_pos = a_e;
        }
    }
    names
}

/// Every `<div>` under the container in page order, nested ones
/// included, rendered as a comment block.
fn doc_blocks(container: &str) -> Vec<String> {
    let mut docs = Vec::new();
    let mut pos = 0usize;
    while let Some((d_s, d_e)) = next_balanced_block_ci(container, "div", pos) {
        let block = &container[d_s..d_e];
        let text = normalize_entities(&strip_tags(&inner_after_open_tag(block)));
        docs.push(comment_block(&text));

        // step just past the open tag so nested divs are visited too
        pos = open_tag_end(container, d_s).unwrap_or(d_e);
    }
    docs
}

/// Right-trim each line and prefix it with `# `.
fn comment_block(text: &str) -> String {
    text.lines()
        .map(|line| format!("# {}", line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}
