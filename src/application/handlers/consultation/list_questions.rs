//! ListQuestionsHandler - Query handler for the question catalog.

use std::sync::Arc;

use crate::domain::consultation::{Question, QuestionCatalog};

/// Handler returning the catalog unchanged, in catalog order.
pub struct ListQuestionsHandler {
    catalog: Arc<QuestionCatalog>,
}

impl ListQuestionsHandler {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self) -> Vec<Question> {
        self.catalog.questions().to_vec()
    }
}
