//! Lesson catalog.
//!
//! The built-in catalog is compiled into the crate from `data/lessons.json`.
//! A custom catalog with the same shape can be loaded from disk.

use crate::error::{FinlitError, Result};
use crate::models::Lesson;
use crate::quiz;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUILTIN_LESSONS: &str = include_str!("../data/lessons.json");

/// Ordered collection of lessons, each with its quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// The lessons shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_LESSONS)
    }

    /// Parse a JSON array of lessons.
    ///
    /// Rejects duplicate ids and quizzes whose correct answer is not one of
    /// the options.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lessons: Vec<Lesson> = serde_json::from_str(json)?;
        Self::new(lessons)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading lesson catalog");
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn new(lessons: Vec<Lesson>) -> Result<Self> {
        for (idx, lesson) in lessons.iter().enumerate() {
            if lessons[..idx].iter().any(|l| l.id == lesson.id) {
                return Err(FinlitError::InvalidArgument(format!(
                    "duplicate lesson id '{}'",
                    lesson.id
                )));
            }
            quiz::validate(&lesson.quiz).map_err(|e| match e {
                FinlitError::InvalidArgument(msg) => {
                    FinlitError::InvalidArgument(format!("lesson '{}': {}", lesson.id, msg))
                }
                other => other,
            })?;
        }
        Ok(Self { lessons })
    }

    pub fn list(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn ids(&self) -> Vec<&str> {
        self.lessons.iter().map(|l| l.id.as_str()).collect()
    }

    pub fn get(&self, id: &str) -> Result<&Lesson> {
        self.lessons
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| FinlitError::NotFound(format!("Unknown lesson: {}", id)))
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}
