use std::time::Duration;

/// Fixed names and readiness policy shared by every operation
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub compose_program: String,
    pub runtime_program: String,
    pub container: String,
    pub volume: String,
    pub database: String,
    pub user: String,
    pub table: String,
    pub readiness_attempts: u32,
    pub readiness_interval: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            compose_program: "docker-compose".to_string(),
            runtime_program: "docker".to_string(),
            container: "postgres-persistent".to_string(),
            volume: "postgres_volume".to_string(),
            database: "testdb".to_string(),
            user: "dbuser".to_string(),
            table: "users".to_string(),
            readiness_attempts: 30,
            readiness_interval: Duration::from_secs(1),
        }
    }
}

impl DemoConfig {
    /// Upper bound on how long `start` waits for the database
    pub fn readiness_budget(&self) -> Duration {
        self.readiness_interval * self.readiness_attempts
    }
}
