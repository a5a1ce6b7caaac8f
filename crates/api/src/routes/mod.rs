pub mod brands;
pub mod colors;
pub mod formulations;
pub mod root;

use crate::routes::brands::handlers::{
    create_brand, delete_brand, get_brand, get_brands, update_brand,
};
use crate::routes::colors::handlers::{
    create_color, delete_color, get_color, get_colors, update_color,
};
use crate::routes::formulations::handlers::{
    calculate_formulation, delete_formulation, get_formulation, get_formulations,
};
use crate::routes::root::handlers::root;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use common_formulator::settings;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::{trace::TraceLayer, LatencyUnit};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        // Brand handlers
        brands::handlers::get_brands,
        brands::handlers::get_brand,
        brands::handlers::create_brand,
        brands::handlers::update_brand,
        brands::handlers::delete_brand,
        // Color handlers
        colors::handlers::get_colors,
        colors::handlers::get_color,
        colors::handlers::create_color,
        colors::handlers::update_color,
        colors::handlers::delete_color,
        // Formulation handlers
        formulations::handlers::get_formulations,
        formulations::handlers::get_formulation,
        formulations::handlers::calculate_formulation,
        formulations::handlers::delete_formulation,
    ),
    components(
        schemas(
            // Shared model schemas
            common_formulator::Brand,
            common_formulator::ColorLine,
            common_formulator::BrandWithLines,
            common_formulator::Color,
            common_formulator::ColorAttributes,
            common_formulator::ToneCategory,
            common_formulator::CorrectiveProperties,
            // Brand schemas
            brands::interfaces::ColorLinePayload,
            brands::interfaces::CreateBrandPayload,
            brands::interfaces::UpdateBrandPayload,
            // Color schemas
            colors::interfaces::CreateColorPayload,
            colors::interfaces::UpdateColorPayload,
            // Formulation schemas
            formulations::interfaces::CalculateFormulationPayload,
            formulations::interfaces::FormulationDto,
            formulations::interfaces::FormulaDto,
            formulations::interfaces::PrimaryPortionDto,
            formulations::interfaces::CorrectivePortionDto,
            formulations::interfaces::DeveloperDto,
            formulations::interfaces::BrandRefDto,
            formulations::interfaces::ColorRefDto,
        ),
    ),
    tags(
        (name = "Brands", description = "Color brand directory"),
        (name = "Colors", description = "The shade catalog"),
        (name = "Formulations", description = "Formula calculation and history")
    )
)]
struct ApiDoc;

// --- Router Construction ---
pub fn create_router(pool: PgPool) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .merge(Scalar::with_url("/docs", openapi))
        .merge(api_routes())
        .with_state(pool)
        .layer(cors_layer())
        .layer(
            TraceLayer::new_for_http().on_response(
                tower_http::trace::DefaultOnResponse::new()
                    .level(tracing::Level::INFO)
                    .latency_unit(LatencyUnit::Micros),
            ),
        )
}

fn api_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(root))
        .route("/brands", get(get_brands).post(create_brand))
        .route(
            "/brands/{id}",
            get(get_brand).put(update_brand).delete(delete_brand),
        )
        .route("/colors", get(get_colors).post(create_color))
        .route(
            "/colors/{id}",
            get(get_color).put(update_color).delete(delete_color),
        )
        .route("/formulations", get(get_formulations))
        .route("/formulations/calculate", post(calculate_formulation))
        .route(
            "/formulations/{id}",
            get(get_formulation).delete(delete_formulation),
        )
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = settings()
        .api
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
