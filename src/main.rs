use allrecipes_scrape::{handle, Request, ScrapeError, Scraper, ScraperConfig};
use log::debug;
use std::io::{self, Read, Write};

// Reads one request event from stdin and writes the response envelope to stdout.
fn main() -> Result<(), ScrapeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ScraperConfig::load()?;
    debug!("{:#?}", config);

    let mut event = String::new();
    io::stdin().read_to_string(&mut event)?;
    let request: Request = serde_json::from_str(&event)?;

    let scraper = Scraper::from_config(&config)?;
    let response = handle(&request, &scraper, &config);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    Ok(())
}
