use actix_web::{web, HttpResponse, Responder};

use crate::error::ApiError;
use crate::models::{
    categories_map, CategoriesResponse, CreatedQuestionResponse, DeletedQuestionResponse,
    ErrorResponse, NewQuestion, PaginationParams, QuestionListResponse, QuestionPageResponse,
    QuestionsPostBody, QuizRequest, QuizResponse,
};
use crate::query;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health Check", body = String)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories as an id -> type map", body = CategoriesResponse),
        (status = 404, description = "No categories exist", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn list_categories(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let categories = data.store.list_categories().await?;

    // An empty category set is absence of data, which this API reports as
    // not-found across every read path.
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: categories_map(&categories),
    }))
}

#[utoipa::path(
    get,
    path = "/questions",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPageResponse),
        (status = 404, description = "Page is out of range", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn list_questions(
    data: web::Data<AppState>,
    params: web::Query<PaginationParams>,
) -> Result<HttpResponse, ApiError> {
    let page = params.page.unwrap_or(1);

    let questions = data.store.list_questions().await?;
    let current = query::paginate(&questions, page);

    // Out-of-range pages and an empty store look the same here; both are a
    // 404 by API contract.
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = data.store.list_categories().await?;

    Ok(HttpResponse::Ok().json(QuestionPageResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        current_category: None,
        categories: categories_map(&categories),
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedQuestionResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn delete_question(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let question_id = path.into_inner();

    let question = data
        .store
        .get_question(question_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    // The row can disappear between the lookup and the delete; the
    // rows_affected check covers that window.
    if !data.store.delete_question(question.id).await? {
        return Err(ApiError::NotFound);
    }

    log::info!("deleted question {}", question_id);

    Ok(HttpResponse::Ok().json(DeletedQuestionResponse {
        success: true,
        deleted_question: question_id,
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionsPostBody,
    responses(
        (status = 200, description = "Question created, or search results when searchTerm is present", body = QuestionListResponse),
        (status = 422, description = "Missing or empty required fields", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn post_questions(
    data: web::Data<AppState>,
    body: web::Json<QuestionsPostBody>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    // A body carrying `searchTerm` is a search, anything else is a
    // creation. An empty term searches with an empty pattern and so
    // returns every question; see DESIGN.md.
    match body.search_term {
        Some(term) => search_questions(&data, &term).await,
        None => create_question(&data, body).await,
    }
}

async fn search_questions(data: &AppState, term: &str) -> Result<HttpResponse, ApiError> {
    let questions = data.store.search_questions(term).await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

async fn create_question(
    data: &AppState,
    body: QuestionsPostBody,
) -> Result<HttpResponse, ApiError> {
    // Validation happens before any store call; a rejected request never
    // mutates anything.
    let new = NewQuestion {
        question: body.question.filter(|q| !q.is_empty()).ok_or(ApiError::Unprocessable)?,
        answer: body.answer.filter(|a| !a.is_empty()).ok_or(ApiError::Unprocessable)?,
        category: body.category.ok_or(ApiError::Unprocessable)?,
        difficulty: body.difficulty.ok_or(ApiError::Unprocessable)?,
    };

    let created = data.store.create_question(&new).await?;
    log::info!("created question {}", created.id);

    Ok(HttpResponse::Ok().json(CreatedQuestionResponse {
        success: true,
        question: created.question,
        answer: created.answer,
        category: created.category,
        difficulty: created.difficulty,
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category; empty for an unknown id", body = QuestionListResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn category_questions(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();
    let questions = data.store.questions_by_category(category_id).await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: Some(category_id),
    }))
}

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "One random question outside previous_questions", body = QuizResponse),
        (status = 404, description = "No candidates remain", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn play_quiz(
    data: web::Data<AppState>,
    body: web::Json<QuizRequest>,
) -> Result<HttpResponse, ApiError> {
    let QuizRequest { previous_questions, quiz_category } = body.into_inner();

    // Category id 0 is the all-categories sentinel. A specific category is
    // matched by its type name, not its id (inherited asymmetry with the
    // filter endpoint; see DESIGN.md).
    let scope = if quiz_category.id == 0 {
        data.store.list_questions().await?
    } else {
        data.store.questions_by_category_type(&quiz_category.kind).await?
    };

    let mut rng = rand::thread_rng();
    let question = query::next_quiz_question(&scope, &previous_questions, &mut rng)
        .ok_or(ApiError::NotFound)?
        .clone();

    Ok(HttpResponse::Ok().json(QuizResponse { success: true, question }))
}
