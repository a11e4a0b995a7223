use std::env;
use std::fmt;

/// Running environment of the application. Drives the verbosity of the error
/// responses and whether requests are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Environment {
        match value.to_lowercase().as_str() {
            "production" => Environment::Production,
            "test" => Environment::Test,
            _ => Environment::Development,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Test => f.write_str("test"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// # Application configuration
///
/// Read once from the process environment in `main` and injected everywhere
/// else. Handlers never look at environment variables themselves.
#[derive(Debug, Clone)]
pub struct ApplicationConfiguration {
    pub environment: Environment,
    pub database_url: String,
    pub listen_on: String,
}

impl ApplicationConfiguration {
    pub fn from_env() -> ApplicationConfiguration {
        let environment = env::var("APP_ENVIRONMENT")
            .map(|value| Environment::parse(&value))
            .unwrap_or(Environment::Development);

        let database_url =
            env::var("DATABASE_URL").expect("DATABASE_URL env variable should be set");

        let listen_on =
            env::var("BLOGFUL_LISTEN_ON").unwrap_or_else(|_| String::from("0.0.0.0:8080"));

        ApplicationConfiguration {
            environment,
            database_url,
            listen_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn unknown_environment_defaults_to_development() {
        assert_that!(Environment::parse("staging")).is_equal_to(Environment::Development);
        assert_that!(Environment::parse("PRODUCTION")).is_equal_to(Environment::Production);
        assert_that!(Environment::parse("test")).is_equal_to(Environment::Test);
    }
}
