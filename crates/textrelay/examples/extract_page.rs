//! Example: Fetch a page and print its visible text
//!
//! Run with: cargo run -p textrelay --example extract_page -- <URL>
//!
//! Fetches one URL with the default configuration and prints the normalized
//! text the pipeline would deliver, without posting anything.

use textrelay::{extract_visible_text, Config, Fetcher};

#[tokio::main]
async fn main() {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com".to_string());

    let config = Config::default();
    let fetcher = match Fetcher::new(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match fetcher.fetch(&url).await {
        Ok(page) => {
            let text = extract_visible_text(&page.body);
            println!("URL: {}", page.url);
            println!("HTML bytes: {}", page.body.len());
            println!("Text chars: {}", text.chars().count());
            println!();
            println!("{}", text);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
