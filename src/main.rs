use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod dataset;
mod math;
mod model;
mod opts;
mod prelude;
mod store;
mod tracing;
mod trainer;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    info!(version = clap::crate_version!());
    match opts.subcommand {
        Subcommand::Train(opts) => trainer::run(opts),
        Subcommand::Web(opts) => web::run(opts).await,
    }
}
