//! Line-driven search form.
//!
//! Each line is one submission: `email [number]`. Lines may be entered while
//! a search is still running; the newer one cancels the older one.
//! `:cancel` aborts the outstanding search, `:quit` exits.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use user_search::app_system::{setup_tracing, Config};
use user_search::client::{normalize_live, validate, ResultsView, SearchSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::load()?;
    let session = SearchSession::new(&config.server_url);
    let view = Arc::new(Mutex::new(ResultsView::default()));
    info!(endpoint = %session.endpoint(), "The search form");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            ":quit" => break,
            ":cancel" => {
                if !session.cancel() {
                    println!("Nothing to cancel");
                }
                continue;
            }
            _ => {}
        }

        let mut fields = line.split_whitespace();
        let email = fields.next().unwrap_or_default();
        let number = fields.next().unwrap_or_default();

        let form = match validate(email, number) {
            Ok(form) => form,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        view.lock().unwrap_or_else(PoisonError::into_inner).clear();
        match form.number() {
            Some(number) => println!("Searching {} / {} ...", form.email(), normalize_live(number)),
            None => println!("Searching {} ...", form.email()),
        }

        let session = session.clone();
        let view = Arc::clone(&view);
        tokio::spawn(async move {
            let outcome = session.submit(&form).await;
            debug!(?outcome, "Search finished");

            let mut view = view.lock().unwrap_or_else(PoisonError::into_inner);
            view.apply(&outcome);
            let lines = view.lines();
            if !lines.is_empty() {
                println!("Query results:");
                for line in lines {
                    println!("{line}");
                }
            }
        });
    }

    session.cancel();
    Ok(())
}
