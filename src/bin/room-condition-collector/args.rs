use chrono_tz::Tz;
use clap::Parser;
use room_conditions::{config::DEFAULT_TIMEZONE, nature_remo::DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    pub timezone: Tz,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Apply the bundled schema before collecting.
    #[arg(long)]
    pub migrate: bool,
}
