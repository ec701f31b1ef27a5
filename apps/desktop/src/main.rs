mod config;

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    apply_effects,
    effects::{FetchErrorNotifier, TracingEffectSink},
    FilterPatch, HttpEmployeeRepository, Route, RosterFilters, RosterSession, RosterView, Screen,
    SubmitOutcome,
};
use shared::validation::EmployeeForm;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    /// Path to a TOML settings file (defaults to ./roster.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    server_url: Option<String>,
    /// Role filter: cook, waiter, driver, or empty for all.
    #[arg(long, default_value = "")]
    role: String,
    #[arg(long)]
    archived: bool,
    /// View to open: `/`, `/add` or `/edit/{id}`.
    #[arg(long, default_value = "/")]
    route: String,
    /// JSON form values to submit when the route opens a form.
    #[arg(long)]
    submit: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    let role = RosterFilters::parse_role(&args.role)?;
    let route: Route = args.route.parse()?;

    let repository =
        HttpEmployeeRepository::with_timeout(&settings.server_url, settings.request_timeout())
            .with_context(|| format!("invalid server url '{}'", settings.server_url))?;
    tracing::info!(server_url = %repository.base_url(), "roster: session starting");
    let session = RosterSession::new(Arc::new(repository));
    session.set_filters(
        FilterPatch::default()
            .with_role(role)
            .with_archive(args.archived),
    );

    let mut sink = TracingEffectSink::default();
    let mut screen = session.open(route).await;
    if let Screen::Redirect(effects) = &screen {
        apply_effects(&mut sink, effects);
        let fallback = sink.current_route.unwrap_or(Route::Roster);
        screen = session.open(fallback).await;
    }

    match screen {
        Screen::Roster(view) => {
            let mut notifier = FetchErrorNotifier::default();
            if let Some(effect) = notifier.observe(&session.store().snapshot()) {
                apply_effects(&mut sink, &[effect]);
            }
            print_roster(&view);
        }
        Screen::Form { mode, form } => match args.submit {
            Some(path) => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read form values '{}'", path.display()))?;
                let values: EmployeeForm = serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse form values '{}'", path.display()))?;
                let outcome = session.submit(&values, mode).await;
                apply_effects(&mut sink, &outcome.effects());
                match outcome {
                    SubmitOutcome::Saved { .. } => print_roster(&session.view()),
                    SubmitOutcome::Invalid(errors) => {
                        for err in errors {
                            println!("{:?}: {}", err.field(), err.field_message());
                        }
                    }
                    SubmitOutcome::Failed { .. } => {}
                }
            }
            None => {
                println!("{mode:?}");
                println!("{}", serde_json::to_string_pretty(&form)?);
            }
        },
        Screen::Redirect(effects) => apply_effects(&mut sink, &effects),
    }

    Ok(())
}

fn print_roster(view: &RosterView) {
    let role = match view.filters.role_value() {
        "" => "all",
        role => role,
    };
    println!(
        "role={role} archived={} ({} shown)",
        view.filters.is_archive,
        view.rows.len()
    );
    for employee in view.rows.iter() {
        println!(
            "{:>5}  {:<24} {:<8} {}  {}",
            employee.id.0,
            employee.name,
            employee.role.as_str(),
            employee.birthday,
            employee.phone
        );
    }
}
