use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use larder_core::{
    domain::{auth::services::TokenService, common::LarderConfig},
    infrastructure::{
        db::postgres::Postgres,
        ingredient::repositories::{
            ingredient_repository::PostgresIngredientRepository,
            stock_repository::PostgresStockRepository,
        },
        meal_plan::repositories::meal_plan_repository::PostgresMealPlanRepository,
        nutrition::repositories::nutrition_repository::PostgresNutritionRepository,
        recipe::repositories::recipe_repository::PostgresRecipeRepository,
        shopping_list::repositories::shopping_list_repository::PostgresShoppingListRepository,
        user::repositories::user_repository::PostgresUserRepository,
    },
};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    auth::router::auth_routes, health::router::health_routes,
    ingredient::router::ingredient_routes, meal_plan::router::meal_plan_routes,
    nutrition::router::nutrition_routes, recipe::router::recipe_routes,
    server::app_state::AppState, server::openapi::ApiDoc,
    shopping_list::router::shopping_list_routes, user::router::user_routes,
};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = LarderConfig::from(args.as_ref().clone());

    let postgres = Postgres::new(&config.database).await?;
    let token_service = TokenService::new(&config.auth);

    let user_repository = PostgresUserRepository::new(postgres.get_db());
    let recipe_repository = PostgresRecipeRepository::new(postgres.get_db());
    let ingredient_repository = PostgresIngredientRepository::new(postgres.get_db());
    let stock_repository = PostgresStockRepository::new(postgres.get_db());
    let meal_plan_repository = PostgresMealPlanRepository::new(postgres.get_db());
    let shopping_list_repository = PostgresShoppingListRepository::new(postgres.get_db());
    let nutrition_repository = PostgresNutritionRepository::new(postgres.get_db());

    Ok(AppState::new(
        args,
        token_service,
        user_repository,
        recipe_repository,
        ingredient_repository,
        stock_repository,
        meal_plan_repository,
        shopping_list_repository,
        nutrition_repository,
    ))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(auth_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(ingredient_routes(state.clone()))
        .merge(meal_plan_routes(state.clone()))
        .merge(shopping_list_routes(state.clone()))
        .merge(nutrition_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}
