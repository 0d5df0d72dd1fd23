//! Web application.

pub mod middleware;
pub mod state;
pub mod views;

use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, EndpointExt, Route, Server};

use crate::dataset::{Dataset, FEATURE_COUNT};
use crate::opts::WebOpts;
use crate::prelude::*;
use crate::store;
use crate::web::middleware::{ErrorMiddleware, SecurityHeaders};
use crate::web::state::State;

/// Loads the model and the dataset, then serves the application.
///
/// A failure to load either is fatal: the listener is never bound.
pub async fn run(opts: WebOpts) -> Result {
    let model = store::load(&opts.model_path)
        .with_context(|| format!("failed to load the model artifact from `{}`", opts.model_path.display()))?;
    if model.coefficients.len() != FEATURE_COUNT {
        return Err(anyhow!(
            "the model artifact carries {} coefficients, expected {FEATURE_COUNT}",
            model.coefficients.len(),
        ));
    }
    let dataset = Dataset::load().context("failed to load the bundled dataset")?;
    let state = State::new(model, dataset);

    info!(host = opts.host.as_str(), port = opts.port, "listening");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(
            create_app(state),
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            None,
        )
        .await?;
    Ok(())
}

pub fn create_app(state: State) -> impl poem::Endpoint {
    Route::new()
        .at("/", get(views::index::get))
        .at("/predict", post(views::predict::post))
        .at("/regression-line", get(views::regression::get))
        .at("/dataset", get(views::dataset::get))
        .data(state)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeaders)
}
