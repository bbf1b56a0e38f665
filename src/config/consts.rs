// src/config/consts.rs

// Net config
pub const FUNCTIONS_URL: &str = "https://www.cobaltstrike.com/aggressor-script/functions.html";
pub const USER_AGENT: &str = "ag_scrape/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Page structure. The whole function reference sits in one bootstrap
// column div; names are <a> texts inside <h2> headings.
pub const CONTENT_TAG: &str = "div";
pub const CONTENT_CLASS: &str = "col-lg-12";

// Provided by the Sleep host itself, not documented on the page.
// Emitted without doc comments; wins over any same-named page entry.
pub const SLEEP_BUILTINS: &[&str] = &["print", "println"];

// Output
pub const OUT_FILE: &str = "aggressor.py";

// Log
pub const LOG_FILE: &str = "ag_scrape.log";
