// src/main.rs
use ag_scrape::loge;
use ag_scrape::progress::CliProgress;
use ag_scrape::runner;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut progress = CliProgress;
    match runner::run(Some(&mut progress)) {
        Ok(_) => Ok(()),
        Err(e) => {
            loge!("run failed: {e}");
            Err(e.into())
        }
    }
}
