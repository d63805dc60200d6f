use serde::Deserialize;
use sqlx::PgPool;
use walkdir::WalkDir;

/// Shape of a seed file under `seed/`: category names in id order, then
/// questions referencing those ids.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub categories: Vec<String>,
    pub questions: Vec<QuestionSeed>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionSeed {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Reads every `.json` file under `seed_dir`. Unreadable or unparsable
/// files are logged and skipped.
pub fn load_seed_files(seed_dir: &str) -> Vec<SeedFile> {
    let mut seeds = Vec::new();

    log::info!("Loading seed data from {}", seed_dir);

    for entry in WalkDir::new(seed_dir).into_iter().filter_map(|e| e.ok()) {
        if entry.path().extension().map_or(false, |ext| ext == "json") {
            let path = entry.path();
            log::info!("Loading file: {:?}", path);

            let content = match std::fs::read_to_string(path) {
                Ok(c) => c,
                Err(e) => {
                    log::error!("Failed to read file {:?}: {}", path, e);
                    continue;
                }
            };

            let seed: SeedFile = match serde_json::from_str(&content) {
                Ok(s) => s,
                Err(e) => {
                    log::error!("Failed to parse JSON {:?}: {}", path, e);
                    continue;
                }
            };

            seeds.push(seed);
        }
    }

    seeds
}

/// Inserts a seed file's categories and questions. Ids are assigned by the
/// store in insertion order.
pub async fn apply(pool: &PgPool, seed: &SeedFile) -> Result<(), sqlx::Error> {
    for kind in &seed.categories {
        sqlx::query("INSERT INTO categories (type) VALUES ($1)")
            .bind(kind)
            .execute(pool)
            .await?;
    }

    for q in &seed.questions {
        sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&q.question)
        .bind(&q.answer)
        .bind(q.category)
        .bind(q.difficulty)
        .execute(pool)
        .await?;
    }

    log::info!(
        "Seeded {} categories and {} questions",
        seed.categories.len(),
        seed.questions.len()
    );

    Ok(())
}
