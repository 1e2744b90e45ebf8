pub mod sql;

use crate::config::DemoConfig;
use crate::runner::CommandSpec;

/// `psql -c <statement>` executed inside the database container.
///
/// The statement travels as a single argv entry, so it never passes through a
/// shell. `ON_ERROR_STOP` makes psql exit non-zero when the statement fails.
pub fn psql(config: &DemoConfig, statement: &str) -> CommandSpec {
    CommandSpec::new(&config.runtime_program)
        .args(["exec", "-i", config.container.as_str()])
        .args(["psql", "-v", "ON_ERROR_STOP=1"])
        .args(["-U", config.user.as_str(), "-d", config.database.as_str()])
        .args(["-c", statement])
}

/// `pg_isready` inside the container; exits 0 once the server accepts connections.
///
/// Goes over TCP: on first boot the image runs a temporary socket-only server
/// while it initialises the data directory, then restarts.
pub fn readiness_probe(config: &DemoConfig) -> CommandSpec {
    CommandSpec::new(&config.runtime_program)
        .args(["exec", config.container.as_str(), "pg_isready"])
        .args(["-h", "localhost"])
        .args(["-U", config.user.as_str(), "-d", config.database.as_str()])
}

pub fn create_table(config: &DemoConfig) -> CommandSpec {
    psql(config, &sql::create_table(&config.table))
}

pub fn insert_seed_rows(config: &DemoConfig) -> CommandSpec {
    psql(config, &sql::insert_seed_rows(&config.table))
}

pub fn select_all(config: &DemoConfig) -> CommandSpec {
    psql(config, &sql::select_all(&config.table))
}
