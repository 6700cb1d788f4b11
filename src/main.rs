//! Gitfolio — a GitHub portfolio dashboard in the terminal.
//!
//! Entry point: resolves the account identity (first argument, remembered
//! across runs; otherwise the stored one), pulls the account's data and
//! renders the profile, stats, activity and project views as text.

use std::env;

use gitfolio::app::PortfolioApp;
use gitfolio::managers::bookmark_manager::BookmarkManagerTrait;
use gitfolio::managers::session_manager::{PortfolioData, ViewState};
use gitfolio::types::activity::ActivitySeries;
use gitfolio::types::github::Repository;
use gitfolio::types::stats::StatsSummary;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gitfolio=info".into()),
        )
        .init();

    let mut app = match PortfolioApp::new(None) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("Failed to start: {}", err);
            std::process::exit(1);
        }
    };

    // An explicit argument wins and is remembered for subsequent runs;
    // `--reset` forgets the stored identity instead.
    if let Some(login) = env::args().nth(1) {
        if login == "--reset" {
            if let Err(err) = app.session.clear_identity() {
                eprintln!("Failed to reset identity: {}", err);
                std::process::exit(1);
            }
            println!("Stored identity cleared.");
            return;
        }
        if let Err(err) = app.session.set_identity(&login) {
            eprintln!("Failed to remember identity: {}", err);
            std::process::exit(1);
        }
    }

    if app.session.identity().is_none() {
        eprintln!("Usage: gitfolio <github-login>");
        eprintln!("The login is remembered; later runs can omit it.");
        std::process::exit(2);
    }

    app.session.load().await;

    match app.session.state() {
        ViewState::Ready(data) => {
            render_dashboard(data);
            render_projects(&app.session.visible_projects(), data.repositories.len());
            let bookmarked = app.session.bookmarks().len();
            if bookmarked > 0 {
                println!("  ({} bookmarked)", bookmarked);
            }
        }
        ViewState::Failed(message) => {
            eprintln!("Failed to load dashboard: {}", message);
            eprintln!("Please check your connection and try again.");
            std::process::exit(1);
        }
        state => {
            eprintln!("Unexpected view state after load: {:?}", state);
            std::process::exit(1);
        }
    }
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn render_dashboard(data: &PortfolioData) {
    let profile = &data.profile;
    section(&format!(
        "{} (@{})",
        profile.name.as_deref().unwrap_or(&profile.login),
        profile.login
    ));
    if let Some(bio) = &profile.bio {
        println!("  {}", bio);
    }
    if let Some(location) = &profile.location {
        println!("  📍 {}", location);
    }
    println!(
        "  {} public repos · {} followers · {} following",
        profile.public_repos, profile.followers, profile.following
    );
    println!("  {}", profile.html_url);
    println!();

    render_stats(&data.stats);
    render_activity(&data.activity);
}

fn render_stats(stats: &StatsSummary) {
    section("Stats");
    println!(
        "  ⭐ {} stars   ⑂ {} forks   👁 {} watchers",
        stats.total_stars, stats.total_forks, stats.total_watchers
    );

    let languages = stats.languages_by_count();
    if !languages.is_empty() {
        let line: Vec<String> = languages
            .iter()
            .map(|(lang, count)| format!("{} ({})", lang, count))
            .collect();
        println!("  Languages: {}", line.join(", "));
    }

    for rank in stats.stars_per_repo.iter().take(5) {
        println!("    {:>6} ★  {}", rank.stars, rank.name);
    }
    println!();
}

fn render_activity(activity: &ActivitySeries) {
    section(&format!("Activity ({} events fetched)", activity.total_events));

    let peak = activity.daily.iter().map(|b| b.count).max().unwrap_or(0);
    if peak == 0 {
        println!("  No activity in the last {} days", activity.daily.len());
    } else {
        for bucket in &activity.daily {
            if bucket.count == 0 {
                continue;
            }
            let bar = "█".repeat(((bucket.count * 40) / peak.max(1)) as usize);
            println!("  {} {:>3} {}", bucket.label(), bucket.count, bar);
        }
    }

    for entry in &activity.event_types {
        println!("    {:>4}  {}", entry.count, entry.kind);
    }
    println!();
}

fn render_projects(visible: &[Repository], total: usize) {
    section(&format!("Projects — showing {} of {}", visible.len(), total));
    for repo in visible {
        let language = repo.language.as_deref().unwrap_or("-");
        let fork_marker = if repo.is_fork { " (fork)" } else { "" };
        let archived_marker = if repo.archived { " [archived]" } else { "" };
        println!("  {}{}{}", repo.name, fork_marker, archived_marker);
        if let Some(description) = &repo.description {
            println!("      {}", description);
        }
        println!(
            "      {} · ⭐ {} · {} · updated {}",
            language,
            repo.stars,
            repo.visibility,
            repo.updated_at.format("%Y-%m-%d")
        );
        println!("      {}", repo.html_url);
        if let Some(homepage) = &repo.homepage {
            println!("      ↗ {}", homepage);
        }
    }
}
