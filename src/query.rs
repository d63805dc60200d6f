use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// One page of an already-fetched question list. Pages are 1-indexed; a
/// page past the end of the collection (or page 0) is empty, and the caller
/// treats an empty page as not-found.
pub fn paginate(questions: &[Question], page: u32) -> &[Question] {
    if page == 0 {
        return &[];
    }
    let start = (page as usize - 1) * QUESTIONS_PER_PAGE;
    if start >= questions.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(questions.len());
    &questions[start..end]
}

/// Uniform random pick among the questions whose id is not in `previous`.
/// `None` means the pool is exhausted. The generator is injected so tests
/// can seed it.
pub fn next_quiz_question<'a, R: Rng + ?Sized>(
    questions: &'a [Question],
    previous: &[i32],
    rng: &mut R,
) -> Option<&'a Question> {
    let candidates: Vec<&Question> = questions
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    candidates.choose(rng).copied()
}
