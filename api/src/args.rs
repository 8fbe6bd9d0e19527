use clap::Parser;
use larder_core::domain::common::{AuthConfig, DatabaseConfig, LarderConfig};

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[clap(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(long, env = "SERVER_PORT", default_value = "4000")]
    pub port: u16,

    /// Prefix for every route, e.g. "/api".
    #[clap(long, env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[clap(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[clap(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[clap(long, env = "DATABASE_PORT", default_value = "5432")]
    pub port: u16,

    #[clap(long, env = "DATABASE_USER", default_value = "larder")]
    pub username: String,

    #[clap(long, env = "DATABASE_PASSWORD", default_value = "larder")]
    pub password: String,

    #[clap(long, env = "DATABASE_NAME", default_value = "larder")]
    pub name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct AuthArgs {
    #[clap(long, env = "JWT_SECRET")]
    pub jwt_secret: String,

    #[clap(long, env = "TOKEN_TTL_SECONDS", default_value = "3600")]
    pub token_ttl_seconds: i64,
}

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Household recipe and meal planning service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[clap(long, env = "LOG_JSON", default_value = "false")]
    pub log_json: bool,
}

impl From<Args> for LarderConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                token_ttl_seconds: args.auth.token_ttl_seconds,
            },
        }
    }
}
