use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{middleware, web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiError;
use crate::models::{
    CategoriesResponse, Category, CreatedQuestionResponse, DeletedQuestionResponse, ErrorResponse,
    Question, QuestionListResponse, QuestionPageResponse, QuestionsPostBody, QuizCategory,
    QuizRequest, QuizResponse,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod seed;
pub mod state;
pub mod store;

use state::AppState;
use store::Store;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::list_categories,
        handlers::list_questions,
        handlers::delete_question,
        handlers::post_questions,
        handlers::category_questions,
        handlers::play_quiz,
    ),
    components(
        schemas(
            Category, Question, QuestionsPostBody, QuizCategory, QuizRequest,
            CategoriesResponse, QuestionPageResponse, QuestionListResponse,
            CreatedQuestionResponse, DeletedQuestionResponse, QuizResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Trivia", description = "Trivia question bank endpoints")
    )
)]
pub struct ApiDoc;

pub fn run(listener: TcpListener, pool: PgPool) -> Result<Server, std::io::Error> {
    let data = web::Data::new(AppState {
        store: Store::new(pool),
    });

    let server = HttpServer::new(move || {
        // Undeserializable bodies get the same 422 envelope as field-level
        // validation failures, so the envelope holds API-wide.
        let json_config = web::JsonConfig::default()
            .error_handler(|_err, _req| ApiError::Unprocessable.into());

        App::new()
            .app_data(data.clone())
            .app_data(json_config)
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .route("/health", web::get().to(handlers::health_check))
            .route("/categories", web::get().to(handlers::list_categories))
            .route("/categories/{id}/questions", web::get().to(handlers::category_questions))
            .route("/questions", web::get().to(handlers::list_questions))
            .route("/questions", web::post().to(handlers::post_questions))
            .route("/questions/{id}", web::delete().to(handlers::delete_question))
            .route("/quizzes", web::post().to(handlers::play_quiz))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
