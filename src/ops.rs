use crate::config::DemoConfig;
use crate::runner::{CommandRunner, Readiness};
use crate::{compose, db, volume};
use anyhow::{Context, Result};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(
        "PostgreSQL was not ready after {attempts} attempts ({waited:?}){}",
        describe_reason(.reason)
    )]
    NotReady {
        attempts: u32,
        waited: Duration,
        reason: String,
    },
}

fn describe_reason(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!(": {}", reason)
    }
}

/// Bring the compose services up and wait until PostgreSQL accepts connections
pub fn start<R: CommandRunner>(runner: &R, config: &DemoConfig) -> Result<()> {
    println!("Starting PostgreSQL container...");
    runner
        .run(&compose::up(config))
        .context("Failed to start PostgreSQL container")?;

    println!(
        "Waiting for PostgreSQL to be ready (up to {:?})...",
        config.readiness_budget()
    );
    wait_until_ready(runner, config)?;

    println!("PostgreSQL is running!");
    println!();
    Ok(())
}

/// Poll `pg_isready` until it succeeds or the attempt budget runs out
pub fn wait_until_ready<R: CommandRunner>(runner: &R, config: &DemoConfig) -> Result<()> {
    let probe = db::readiness_probe(config);
    let attempts = config.readiness_attempts.max(1);

    let mut last_reason = String::new();
    for attempt in 1..=attempts {
        let readiness = runner
            .probe(&probe)
            .context("Failed to check PostgreSQL readiness")?;
        match readiness {
            Readiness::Ready => {
                info!(attempt, "postgres is ready");
                return Ok(());
            }
            Readiness::NotReady(reason) => {
                debug!(attempt, attempts, reason = %reason, "postgres not ready yet");
                last_reason = reason;
            }
        }
        if attempt < attempts {
            thread::sleep(config.readiness_interval);
        }
    }

    Err(LifecycleError::NotReady {
        attempts,
        waited: config.readiness_interval * (attempts - 1),
        reason: last_reason,
    }
    .into())
}

/// Tear the compose services down; the named volume survives
pub fn stop<R: CommandRunner>(runner: &R, config: &DemoConfig) -> Result<()> {
    println!("Stopping and removing PostgreSQL container...");
    runner
        .run(&compose::down(config))
        .context("Failed to stop PostgreSQL container")?;
    println!(
        "The PostgreSQL container has been removed, but the volume `{}` persists!",
        config.volume
    );
    println!();
    Ok(())
}

/// Create the `users` table if needed, then insert the three seed rows
pub fn create_data<R: CommandRunner>(runner: &R, config: &DemoConfig) -> Result<()> {
    println!("Creating synthetic data in database...");

    runner
        .run(&db::create_table(config))
        .with_context(|| format!("Failed to create table `{}`", config.table))?;
    info!(table = %config.table, "table ensured");

    runner
        .run(&db::insert_seed_rows(config))
        .with_context(|| format!("Failed to insert rows into `{}`", config.table))?;
    info!(table = %config.table, rows = db::sql::SEED_ROWS.len(), "rows inserted");

    println!("Synthetic data created!");
    println!();
    Ok(())
}

/// Print every row of the `users` table as psql renders it
pub fn view_data<R: CommandRunner>(runner: &R, config: &DemoConfig) -> Result<()> {
    println!("Current data in database:");
    runner
        .run(&db::select_all(config))
        .with_context(|| format!("Failed to read table `{}`", config.table))?;
    println!();
    Ok(())
}

/// Print `docker volume inspect` output unchanged and return it
pub fn volume_info<R: CommandRunner>(runner: &R, config: &DemoConfig) -> Result<String> {
    println!("Docker volume information:");
    let output = runner
        .capture(&volume::inspect(config))
        .with_context(|| format!("Failed to inspect volume `{}`", config.volume))?;

    match volume::parse_inspect(&output) {
        Ok(volumes) => {
            for v in &volumes {
                debug!(
                    name = %v.name,
                    driver = %v.driver,
                    mountpoint = %v.mountpoint,
                    scope = %v.scope,
                    created_at = v.created_at.as_deref().unwrap_or("-"),
                    "volume"
                );
            }
        }
        Err(e) => warn!(error = %e, "volume inspect output is not JSON"),
    }

    println!("{}", output);
    println!();
    Ok(output)
}

/// Full walkthrough: seed, tear down, start again and show the rows survived
pub fn demo<R: CommandRunner>(runner: &R, config: &DemoConfig) -> Result<()> {
    start(runner, config)?;
    create_data(runner, config)?;
    view_data(runner, config)?;
    volume_info(runner, config)?;
    stop(runner, config)?;

    info!("restarting to check persistence");
    start(runner, config)?;
    view_data(runner, config)?;
    println!("Rows above were read back after the container was recreated.");
    Ok(())
}
