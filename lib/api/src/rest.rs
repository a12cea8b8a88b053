use crate::error::ApiError;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde::{Deserialize, Serialize};
use shaker_core::Catalog;
use shaker_similarity::{
    DistanceBreakdown, ExplorerQuery, MatchResponse, RankOptions, Ranker, DEFAULT_TWIST_LIMIT,
};
use std::sync::Arc;
use tracing::debug;

/// Shared, read-only state behind every request
pub struct AppState {
    pub catalog: Catalog,
    pub ranker: Ranker,
}

impl AppState {
    pub fn new(catalog: Catalog, ranker: Ranker) -> Self {
        Self { catalog, ranker }
    }
}

#[derive(Deserialize)]
struct TwistParams {
    limit: Option<usize>,
    #[serde(default)]
    include_cocktail: bool,
}

#[derive(Deserialize)]
struct ExploreRequest {
    #[serde(flatten)]
    query: ExplorerQuery,
    limit: Option<usize>,
    max_distance: Option<f64>,
    #[serde(default)]
    include_cocktail: bool,
}

#[derive(Deserialize)]
struct DistanceRequest {
    a: String,
    b: String,
}

#[derive(Serialize)]
struct DistanceResponse {
    a: String,
    b: String,
    distance: f64,
    breakdown: DistanceBreakdown,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<AppState>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .configure(routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register the API routes on an app or scope
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/cocktails", web::get().to(list_cocktails))
        .route("/cocktails/{name}", web::get().to(get_cocktail))
        .route("/cocktails/{name}/twists", web::get().to(find_twists))
        .route("/explore", web::post().to(explore))
        .route("/distance", web::post().to(distance));
}

async fn health(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "cocktails": state.catalog.len(),
    }))
}

async fn list_cocktails(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "result": state.catalog.cocktails()
    }))
}

async fn get_cocktail(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();
    let cocktail = state.catalog.get(&name)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": cocktail
    })))
}

async fn find_twists(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    params: web::Query<TwistParams>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();
    let reference = state.catalog.get(&name)?;
    let limit = params.limit.unwrap_or(DEFAULT_TWIST_LIMIT);

    let cocktails = state.catalog.cocktails();
    let candidates = cocktails
        .iter()
        .filter(|c| !c.name.same_identity(&reference.name))
        .count();
    let ranked = state.ranker.rank(cocktails, reference, &RankOptions::top(limit));
    debug!("Twists for '{}': {} results", name, ranked.len());

    Ok(HttpResponse::Ok().json(MatchResponse::from_ranked(
        ranked,
        candidates,
        params.include_cocktail,
    )))
}

async fn explore(
    state: web::Data<Arc<AppState>>,
    req: web::Json<ExploreRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    if let Some(max_distance) = req.max_distance {
        if max_distance < 0.0 {
            return Err(ApiError::BadRequest(
                "'max_distance' must not be negative".to_string(),
            ));
        }
    }

    let options = RankOptions {
        limit: req.limit,
        max_distance: req.max_distance,
    };
    let cocktails = state.catalog.cocktails();
    let ranked = state.ranker.explore(cocktails, &req.query, &options);

    Ok(HttpResponse::Ok().json(MatchResponse::from_ranked(
        ranked,
        cocktails.len(),
        req.include_cocktail,
    )))
}

async fn distance(
    state: web::Data<Arc<AppState>>,
    req: web::Json<DistanceRequest>,
) -> Result<HttpResponse, ApiError> {
    let a = state.catalog.get(&req.a)?;
    let b = state.catalog.get(&req.b)?;
    let breakdown = state.ranker.scorer().breakdown(a, b);

    Ok(HttpResponse::Ok().json(DistanceResponse {
        a: a.name.to_string(),
        b: b.name.to_string(),
        distance: breakdown.total,
        breakdown,
    }))
}
