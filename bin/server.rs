// Vitt Sikho - Web Server
// Read-only JSON API over the learning content, plus a single-page front end
// with the classic in-page anchors (#home ... #quiz)

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use vitt_sikho::content::tips;
use vitt_sikho::{
    compute, GlossaryCatalog, GlossaryTerm, InvestmentGuide, InvestmentOption, LoanInput,
    LoanResult, QuestionBank, QuizQuestion, SavingsTip, TipCatalog,
};

/// Shared application state
#[derive(Clone)]
struct AppState {
    content: Arc<Content>,
}

/// All catalogs, built once at startup
struct Content {
    glossary: GlossaryCatalog,
    tips: TipCatalog,
    guide: InvestmentGuide,
    questions: QuestionBank,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl<T: Default> ApiResponse<T> {
    fn fail(message: String) -> Self {
        Self {
            success: false,
            data: T::default(),
            error: Some(message),
        }
    }
}

/// GET /api/emi query parameters
#[derive(Deserialize)]
struct EmiQuery {
    principal: f64,
    rate: f64,
    tenure: u32,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/glossary - All glossary terms
async fn get_glossary(State(state): State<AppState>) -> impl IntoResponse {
    let terms: Vec<GlossaryTerm> = state.content.glossary.terms().to_vec();
    Json(ApiResponse::ok(terms))
}

/// GET /api/tips - All savings tips
async fn get_tips(State(state): State<AppState>) -> impl IntoResponse {
    let tips: Vec<SavingsTip> = state.content.tips.tips().to_vec();
    Json(ApiResponse::ok(tips))
}

/// GET /api/daily-tips - The rotating one-liners
async fn get_daily_tips() -> impl IntoResponse {
    Json(ApiResponse::ok(tips::daily_tips()))
}

/// GET /api/investments - The investment guide
async fn get_investments(State(state): State<AppState>) -> impl IntoResponse {
    let options: Vec<InvestmentOption> = state.content.guide.options().to_vec();
    Json(ApiResponse::ok(options))
}

/// GET /api/quiz - All quiz questions
async fn get_quiz(State(state): State<AppState>) -> impl IntoResponse {
    let questions: Vec<QuizQuestion> = state.content.questions.questions().to_vec();
    Json(ApiResponse::ok(questions))
}

/// GET /api/emi?principal=500000&rate=8.5&tenure=20 - Installment figures
async fn get_emi(Query(query): Query<EmiQuery>) -> impl IntoResponse {
    let input = LoanInput {
        principal: query.principal,
        annual_rate: query.rate,
        tenure_years: query.tenure,
    };

    match compute(&input) {
        Ok(result) => (StatusCode::OK, Json(ApiResponse::ok(Some(result)))).into_response(),
        Err(errors) => {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Option<LoanResult>>::fail(message)),
            )
                .into_response()
        }
    }
}

/// GET / - Serve the single page
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 Vitt Sikho - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let state = AppState {
        content: Arc::new(Content {
            glossary: GlossaryCatalog::new(),
            tips: TipCatalog::new(),
            guide: InvestmentGuide::new(),
            questions: QuestionBank::new(),
        }),
    };
    println!("✓ Content catalogs loaded");

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/glossary", get(get_glossary))
        .route("/tips", get(get_tips))
        .route("/daily-tips", get(get_daily_tips))
        .route("/investments", get(get_investments))
        .route("/quiz", get(get_quiz))
        .route("/emi", get(get_emi))
        .with_state(state);

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   API: http://localhost:3000/api/glossary");
    println!("   UI:  http://localhost:3000");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
