use crate::config::DemoConfig;
use crate::runner::CommandSpec;

/// `docker-compose up -d`
pub fn up(config: &DemoConfig) -> CommandSpec {
    CommandSpec::new(&config.compose_program).args(["up", "-d"])
}

/// `docker-compose down`, leaving named volumes in place
pub fn down(config: &DemoConfig) -> CommandSpec {
    CommandSpec::new(&config.compose_program).arg("down")
}
