use chrono_tz::Tz;
use clap::Parser;
use room_conditions::{config::DEFAULT_TIMEZONE, nature_remo::DEFAULT_BASE_URL};

/// Read from the function's environment; Lambda passes no arguments.
#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    // Lambda reserves TZ for the runtime, hence the prefixed name.
    #[arg(long, env = "COLLECTOR_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    pub timezone: Tz,

    #[arg(long, env = "NATURE_REMO_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,
}
