//! Problem response DTOs

use serde::Serialize;

use crate::models::{Difficulty, Problem};

#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub problem_id: i32,
    pub title: String,
    pub difficulty: Difficulty,
    pub link: String,
    pub competition_id: i32,
}

impl From<Problem> for ProblemResponse {
    fn from(problem: Problem) -> Self {
        Self {
            problem_id: problem.problem_id,
            title: problem.title,
            difficulty: problem.difficulty,
            link: problem.link,
            competition_id: problem.competition_id,
        }
    }
}
