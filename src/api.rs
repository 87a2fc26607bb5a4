//! Mock JSON API mirroring the data the page shows. Stands in for the
//! analysis service and community store until they exist.

use actix_web::{web, HttpResponse};
use leptos::logging::{log, warn};
use serde::{Deserialize, Serialize};

use crate::analyzer::validate_item_url;
use crate::data::{mock_analysis, seeded_alternatives, seeded_posts};

#[derive(Serialize, Deserialize, Debug)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub title: String,
    pub description: String,
}

pub async fn analyze_item(request: web::Json<AnalyzeRequest>) -> HttpResponse {
    log!("[API] Analyze request for URL: {}", request.url);

    match validate_item_url(&request.url) {
        Ok(url) => {
            let item = mock_analysis();
            log!("[API] Returning mock analysis '{}' for {}", item.name, url);
            HttpResponse::Ok().json(item)
        }
        Err(err) => {
            warn!("[API] Rejected analyze request: {}", err);
            HttpResponse::BadRequest().json(ErrorBody {
                title: err.title().to_string(),
                description: err.description().to_string(),
            })
        }
    }
}

pub async fn get_alternatives() -> HttpResponse {
    let alternatives = seeded_alternatives();
    log!("[API] Returning {} alternatives", alternatives.len());
    HttpResponse::Ok().json(alternatives)
}

pub async fn get_posts() -> HttpResponse {
    let posts = seeded_posts();
    log!("[API] Returning {} community posts", posts.len());
    HttpResponse::Ok().json(posts)
}

/// Registers the API routes under the current scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/analyze", web::post().to(analyze_item))
        .route("/alternatives", web::get().to(get_alternatives))
        .route("/posts", web::get().to(get_posts));
}
