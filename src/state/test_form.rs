//! Draft state for the create-test form.
//!
//! The page keeps a `TestForm` in a signal, validates it into a [`NewTest`]
//! on submit, and feeds the backend's answer to [`apply_create_result`],
//! which posts the toast and resets the draft on success.

#[cfg(test)]
#[path = "test_form_test.rs"]
mod test_form_test;

use super::toast::ToastState;
use crate::net::error::ApiError;
use crate::net::types::{CreatedTest, NewTest};

/// Anthropic models offered in the model selects.
pub const ANTHROPIC_MODELS: [&str; 3] =
    ["claude-3-opus-20240229", "claude-3-haiku-20240307", "claude-3-5-sonnet-20240620"];

pub const MIN_REQUESTS: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestForm {
    pub title: String,
    pub description: String,
    pub user_message: String,
    pub review_message: String,
    pub num_requests: u32,
    /// One entry per model select; empty string means "Select Model".
    pub models: Vec<String>,
    pub submitting: bool,
}

impl Default for TestForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            user_message: String::new(),
            review_message: String::new(),
            num_requests: MIN_REQUESTS,
            models: vec![String::new()],
            submitting: false,
        }
    }
}

impl TestForm {
    pub fn add_model_slot(&mut self) {
        self.models.push(String::new());
    }

    /// Whether slots beyond the first exist, i.e. Remove buttons are offered.
    pub fn has_extra_model_slots(&self) -> bool {
        self.models.len() > 1
    }

    /// Remove a model slot, always keeping at least one.
    pub fn remove_model_slot(&mut self, index: usize) {
        if self.models.len() > 1 && index < self.models.len() {
            self.models.remove(index);
        }
    }

    pub fn set_model(&mut self, index: usize, model: String) {
        if let Some(slot) = self.models.get_mut(index) {
            *slot = model;
        }
    }

    /// Apply raw number-input text. Unparseable input leaves the value alone;
    /// anything below the minimum is clamped up.
    pub fn set_num_requests(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<u32>() {
            self.num_requests = value.max(MIN_REQUESTS);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check required fields and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn validate(&self) -> Result<NewTest, &'static str> {
        let title = self.title.trim();
        let description = self.description.trim();
        let user_message = self.user_message.trim();
        let review_message = self.review_message.trim();
        if title.is_empty() || description.is_empty() || user_message.is_empty() || review_message.is_empty() {
            return Err("Fill in title, description, user message, and review message.");
        }
        if self.num_requests < MIN_REQUESTS {
            return Err("Number of requests must be at least 1.");
        }
        if self.models.iter().any(|m| m.trim().is_empty()) {
            return Err("Select a model for every model slot.");
        }
        Ok(NewTest {
            title: title.to_owned(),
            description: description.to_owned(),
            user_message: user_message.to_owned(),
            review_message: review_message.to_owned(),
            num_requests: self.num_requests,
            selected_llms: self.models.iter().map(|m| m.trim().to_owned()).collect(),
        })
    }
}

pub fn created_message(test_id: &str) -> String {
    format!("Test ID: {test_id}")
}

/// Fold the create response into the draft and the toast queue.
pub fn apply_create_result(form: &mut TestForm, toasts: &mut ToastState, result: &Result<CreatedTest, ApiError>) {
    match result {
        Ok(created) => {
            toasts.success("Test created successfully", Some(created_message(&created.id)));
            form.reset();
        }
        Err(e) => {
            toasts.error("Error creating test", e);
            form.submitting = false;
        }
    }
}
