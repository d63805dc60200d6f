use sqlx::PgPool;

use crate::models::{Category, NewQuestion, Question};

/// All database access for the API. Handlers and the query service never
/// embed SQL; everything goes through these methods. Reads return rows in
/// ascending id order (creation order), which is the stable order every
/// endpoint exposes.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Store { pool }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_question(&self, id: i32) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Single-statement insert; the full row is persisted or nothing is.
    pub async fn create_question(&self, new: &NewQuestion) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, question, answer, category, difficulty",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await
    }

    /// Returns false when no row matched. Deleting an unknown id is not a
    /// no-op success; the handler turns false into a 404.
    pub async fn delete_question(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring match over the question text only. The
    /// term is bound, not interpolated; `%`/`_` inside it keep their SQL
    /// wildcard meaning, as in the original behavior.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE question ILIKE $1 ORDER BY id",
        )
        .bind(format!("%{}%", term))
        .fetch_all(&self.pool)
        .await
    }

    /// Equality filter on the category id. No existence check: an unknown
    /// id simply matches nothing.
    pub async fn questions_by_category(&self, category_id: i32) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = $1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Quiz scope lookup: matches on the category type name, exact and
    /// case-sensitive. The filter endpoint matches by id instead; the
    /// asymmetry is inherited API behavior (see DESIGN.md).
    pub async fn questions_by_category_type(&self, kind: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT q.id, q.question, q.answer, q.category, q.difficulty \
             FROM questions q JOIN categories c ON q.category = c.id \
             WHERE c.type = $1 ORDER BY q.id",
        )
        .bind(kind)
        .fetch_all(&self.pool)
        .await
    }
}
