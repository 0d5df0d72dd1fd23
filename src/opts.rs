//! CLI options.

use std::path::PathBuf;

use clap::Parser;

use crate::prelude::StdResult;

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Opts {
    /// Sentry DSN
    #[clap(long, env = "DIABETES_DASHBOARD_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance tracing sample rate
    #[clap(long, default_value_t = 0.0)]
    pub traces_sample_rate: f32,

    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Train(TrainOpts),
    Web(WebOpts),
}

/// Trains the regression model and saves the artifact
#[derive(clap::Args)]
pub struct TrainOpts {
    /// Model artifact path
    #[clap(long = "model", default_value = "results/model.mp")]
    pub model_path: PathBuf,

    /// Held-out test partition ratio
    #[clap(long, default_value_t = 0.2, value_parser = parse_test_ratio)]
    pub test_ratio: f64,

    /// Train/test split seed
    #[clap(long, default_value_t = 42)]
    pub seed: u64,
}

fn parse_test_ratio(value: &str) -> StdResult<f64, String> {
    let ratio: f64 = value.parse().map_err(|_| format!("`{value}` is not a number"))?;
    if (0.0..1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("expected a ratio within [0, 1), got {ratio}"))
    }
}

/// Runs the web application
#[derive(clap::Args)]
pub struct WebOpts {
    /// Model artifact path
    #[clap(long = "model", default_value = "results/model.mp")]
    pub model_path: PathBuf,

    /// Web application bind host
    #[clap(long, default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[clap(short, long, default_value_t = 8081)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_bounds_ok() {
        assert!(parse_test_ratio("0.2").is_ok());
        assert!(parse_test_ratio("1.0").is_err());
        assert!(parse_test_ratio("-0.1").is_err());
        assert!(parse_test_ratio("fifth").is_err());
    }
}
