//! Database settings, read from flags or the environment.
//!
//! The discrete `DB*` variables match what existing deployments already
//! export. `DATABASE_URL`, when set, wins over all of them.

use clap::Args;
use sqlx::postgres::PgConnectOptions;

#[derive(Clone, Args)]
pub struct DatabaseArgs {
    /// Full connection URL; overrides the individual `--db-*` settings.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    pub database_url: Option<String>,

    #[arg(long, env = "DBUSER", default_value = "postgres", global = true)]
    pub db_user: String,

    #[arg(long, env = "DBHOST", default_value = "localhost", global = true)]
    pub db_host: String,

    #[arg(long, env = "DBNAME", default_value = "postgres", global = true)]
    pub db_name: String,

    #[arg(long, env = "DB_PASSWORD", hide_env_values = true, global = true)]
    pub db_password: Option<String>,

    #[arg(long, env = "DBPORT", default_value_t = 5432, global = true)]
    pub db_port: u16,

    /// Upper bound on pooled connections.
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10, global = true)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.database_url {
            return url.parse();
        }

        let options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .database(&self.db_name);

        Ok(match &self.db_password {
            Some(password) => options.password(password),
            None => options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        db: DatabaseArgs,
    }

    fn parse(args: &[&str]) -> DatabaseArgs {
        Harness::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap()
            .db
    }

    #[test]
    fn discrete_settings_build_options() {
        let db = DatabaseArgs {
            database_url: None,
            db_user: "board".into(),
            db_host: "db.internal".into(),
            db_name: "jobs".into(),
            db_password: Some("pw".into()),
            db_port: 6543,
            max_connections: 4,
        };
        let options = db.connect_options().unwrap();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "board");
        assert_eq!(options.get_database(), Some("jobs"));
    }

    #[test]
    fn database_url_overrides_discrete_settings() {
        let db = parse(&[
            "--db-host", "ignored",
            "--database-url", "postgres://app:pw@url-host:7000/urldb",
        ]);
        let options = db.connect_options().unwrap();

        assert_eq!(options.get_host(), "url-host");
        assert_eq!(options.get_port(), 7000);
        assert_eq!(options.get_database(), Some("urldb"));
    }

    #[test]
    fn malformed_url_is_an_error() {
        let db = parse(&["--database-url", "not a url"]);
        assert!(db.connect_options().is_err());
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let args = ["test", "--db-port", "five"];
        assert!(Harness::try_parse_from(args).is_err());
    }
}
