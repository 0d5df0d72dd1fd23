use maud::{html, DOCTYPE};
use poem::handler;
use poem::web::Html;

use crate::dataset::FEATURE_NAMES;
use crate::prelude::*;

/// Landing page describing the service.
#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get() -> Html<String> {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Diabetes Dashboard" }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";
            }
            body {
                section.hero.is-fullheight {
                    div.hero-body {
                        div.container {
                            h1.title { "Diabetes disease progression" }
                            p.subtitle {
                                "Ordinary least squares over the bundled corpus"
                            }
                            div.content {
                                ul {
                                    li {
                                        code { "POST /predict" }
                                        " — progression score for the features "
                                        code { (FEATURE_NAMES.join(", ")) }
                                    }
                                    li {
                                        code { "GET /regression-line" }
                                        " — intercept and coefficients of the fitted model"
                                    }
                                    li {
                                        code { "GET /dataset" }
                                        " — the full corpus"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    Html(markup.into_string())
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn index_ok() -> Result {
        let client = create_test_client()?;
        let response = client.get("/").send().await;
        response.assert_status_is_ok();
        Ok(())
    }
}
