#![allow(dead_code)]

//! Process-lifetime in-memory store for skills and assessment results.
//!
//! Durability is out of scope: results live exactly as long as the process.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::questions::QuizQuestion;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsData {
    pub technical: Vec<String>,
    pub languages: Vec<String>,
}

/// A completed assessment, as stored.
#[derive(Debug, Clone, Serialize)]
pub struct StoredAssessment {
    pub id: usize,
    pub skill: String,
    pub accuracy: f64,
    pub report: String,
    pub questions: Vec<QuizQuestion>,
    pub answers: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
}

/// Shared in-memory store. Reads vastly outnumber writes; a `RwLock` around
/// each table keeps handler critical sections short.
pub struct MemoryStore {
    skills: RwLock<SkillsData>,
    results: RwLock<Vec<StoredAssessment>>,
}

impl MemoryStore {
    /// Creates a store seeded with the demo skill profile.
    pub fn new() -> Self {
        Self {
            skills: RwLock::new(SkillsData {
                technical: vec![
                    "Python".to_string(),
                    "React".to_string(),
                    "Data Analysis".to_string(),
                ],
                languages: vec!["JavaScript".to_string(), "SQL".to_string()],
            }),
            results: RwLock::new(Vec::new()),
        }
    }

    pub fn skills(&self) -> SkillsData {
        self.skills
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Appends an assessment result, assigning the next sequential id.
    pub fn save_result(
        &self,
        skill: String,
        accuracy: f64,
        report: String,
        questions: Vec<QuizQuestion>,
        answers: HashMap<String, String>,
    ) -> usize {
        let mut results = self
            .results
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = results.len() + 1;
        results.push(StoredAssessment {
            id,
            skill,
            accuracy,
            report,
            questions,
            answers,
            created_at: Utc::now(),
        });
        id
    }

    pub fn result_count(&self) -> usize {
        self.results
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_is_seeded_with_demo_skills() {
        let store = MemoryStore::new();
        let skills = store.skills();
        assert_eq!(skills.technical, vec!["Python", "React", "Data Analysis"]);
        assert_eq!(skills.languages, vec!["JavaScript", "SQL"]);
    }

    #[test]
    fn test_save_result_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.save_result(
            "Python".to_string(),
            75.0,
            "report".to_string(),
            vec![],
            HashMap::new(),
        );
        let second = store.save_result(
            "SQL".to_string(),
            50.0,
            "report".to_string(),
            vec![],
            HashMap::new(),
        );
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.result_count(), 2);
    }
}
