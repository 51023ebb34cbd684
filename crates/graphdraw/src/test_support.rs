//! Test support utilities for graphdraw.
//!
//! Renderers that stand in for a real template engine, so generator output
//! can be inspected without parsing HTML or shell scripts.

use std::cell::RefCell;

use crate::{
    generator::CellClasses,
    template::{RenderError, TemplateData, TemplateRenderer},
};

/// One captured call to [`RecordingRenderer::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderCall {
    pub template: String,
    pub commit_density: u32,
    pub msg: Option<String>,
    pub cells: Option<CellClasses>,
    pub dates: Vec<String>,
}

/// Captures template data and returns the dates (or message) as plain text.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: RefCell<Vec<RenderCall>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<RenderCall> {
        self.calls.borrow().last().cloned()
    }
}

impl TemplateRenderer for RecordingRenderer {
    fn render(&self, name: &str, data: &TemplateData<'_>) -> Result<Vec<u8>, RenderError> {
        let call = match data {
            TemplateData::Preview { cells, msg, .. } => RenderCall {
                template: name.to_string(),
                commit_density: data.commit_density(),
                msg: Some(msg.to_string()),
                cells: Some((*cells).clone()),
                dates: Vec::new(),
            },
            TemplateData::Script { dates, .. } => RenderCall {
                template: name.to_string(),
                commit_density: data.commit_density(),
                msg: None,
                cells: None,
                dates: dates.iter().map(ToString::to_string).collect(),
            },
        };
        let out = match &call.msg {
            Some(msg) => msg.clone(),
            None => call.dates.join("\n"),
        };
        self.calls.borrow_mut().push(call);
        Ok(out.into_bytes())
    }
}

/// Always fails, for checking that template errors propagate.
pub struct FailingRenderer;

impl TemplateRenderer for FailingRenderer {
    fn render(&self, name: &str, _data: &TemplateData<'_>) -> Result<Vec<u8>, RenderError> {
        Err(format!("template {name} exploded").into())
    }
}
