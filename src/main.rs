use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use leetscraper::{catalog, fetch, merge, table};
use reqwest::Client;
use std::{env, fs, path::PathBuf, process};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // ─── 2) resolve the selection ────────────────────────────────────
    let args: Vec<String> = env::args().skip(1).collect();
    let company = match args.first() {
        Some(company) => company.as_str(),
        None => {
            eprintln!("usage: leetscraper <company> [duration] [prior-export.csv]");
            eprintln!("companies: {}", catalog::COMPANIES.join(", "));
            eprintln!("durations: {} (default thirty-days)", catalog::DURATIONS.join(", "));
            process::exit(2);
        }
    };
    let duration = args.get(1).map(String::as_str).unwrap_or("thirty-days");
    let prior_path = args.get(2).map(PathBuf::from);

    let favorite_slug = match catalog::favorite_slug(company, duration) {
        Some(slug) => slug,
        None => bail!(
            "unknown selection {}/{}; companies: {}; durations: {}",
            company,
            duration,
            catalog::COMPANIES.join(", "),
            catalog::DURATIONS.join(", ")
        ),
    };
    info!(company, duration, favorite_slug, "startup");

    // ─── 3) read the prior export, if one was supplied ───────────────
    let prior = prior_path.as_deref().and_then(|path| {
        match fs::read_to_string(path) {
            Ok(text) => {
                let parsed = table::parse::parse_table(&text);
                info!(rows = parsed.rows.len(), path = %path.display(), "loaded prior export");
                Some(parsed)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read prior export; merging without it");
                None
            }
        }
    });

    // ─── 4) fetch the current question list ──────────────────────────
    let session_file = env::var("LEETCODE_SESSION_FILE").ok().map(PathBuf::from);
    let session = fetch::session::resolve_session(session_file.as_deref())?;

    let client = Client::new();
    info!("fetching questions from LeetCode");
    let questions = fetch::fetch_favorite_questions(&client, favorite_slug, &session).await?;
    if questions.is_empty() {
        bail!(
            "no questions found for `{favorite_slug}`; \
             LeetCode Premium and access to the list are required"
        );
    }
    info!(count = questions.len(), "fetched questions");

    // ─── 5) reconcile + serialize ────────────────────────────────────
    let merged = merge::reconcile(&questions, prior.as_ref());
    let csv = table::write::write_table(&merged);

    // ─── 6) write the export ─────────────────────────────────────────
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap_or_else(|_| ".".to_string()));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let out_path = out_dir.join(export_filename(favorite_slug, Local::now().date_naive()));
    fs::write(&out_path, csv).with_context(|| format!("writing {}", out_path.display()))?;

    info!(rows = merged.rows.len(), path = %out_path.display(), "export written");
    Ok(())
}

/// `leetcode_<slug>_<MMDDYYYY>.csv`, matching the exports users already
/// have on disk.
fn export_filename(favorite_slug: &str, date: NaiveDate) -> String {
    format!("leetcode_{}_{}.csv", favorite_slug, date.format("%m%d%Y"))
}
