//! Plain-text rendering of a task collection.

use minijinja::{Environment, Value, context};
use thiserror::Error;

use crate::task::{
    domain::{Task, TaskStatus},
    services::TaskCollection,
};

const FILTER_TEMPLATE: &str = "{{ count or \"No\" }} corresponding {{ query }} task\
{% if count != 1 %}s{% endif %} found";
const TODO_TEMPLATE: &str = "{{ count or \"No\" }} task{% if count != 1 %}s{% endif %} to do";
const DONE_TEMPLATE: &str = "{{ count or \"No\" }} task{% if count != 1 %}s{% endif %} done";
const TASK_TEMPLATE: &str = "- [{{ priority }}] {{ deadline }} {{ title }}";

/// Error raised when a template cannot be rendered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render {template} template: {reason}")]
pub struct RenderError {
    /// Name of the failing template.
    pub template: &'static str,
    /// Renderer diagnostic.
    pub reason: String,
}

/// Renders the list headings and task lines.
///
/// Output lists the filter result (only when a filter is set), then the
/// "to do" group and the "done" group, each under a count heading:
///
/// ```text
/// 1 task to do
/// - [low] 2024-01-10 Buy milk
/// No tasks done
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRenderer {
    filter_template: String,
    todo_template: String,
    done_template: String,
    task_template: String,
}

impl TextRenderer {
    /// Creates a renderer with the default English templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter_template: FILTER_TEMPLATE.to_owned(),
            todo_template: TODO_TEMPLATE.to_owned(),
            done_template: DONE_TEMPLATE.to_owned(),
            task_template: TASK_TEMPLATE.to_owned(),
        }
    }

    /// Replaces the per-task line template.
    ///
    /// The template sees `id`, `title`, `deadline`, `priority` and `status`.
    #[must_use]
    pub fn with_task_template(mut self, template: impl Into<String>) -> Self {
        self.task_template = template.into();
        self
    }

    /// Renders the visible part of `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a template fails to render.
    pub fn render(&self, collection: &TaskCollection) -> Result<String, RenderError> {
        let environment = Environment::new();
        let mut lines = Vec::new();

        let query = collection.filter();
        if !query.is_empty() {
            let found = collection.visible().count();
            lines.push(render(
                &environment,
                "filter",
                &self.filter_template,
                context! { count => found, query => query },
            )?);
        }

        for (name, template, status) in [
            ("todo", &self.todo_template, TaskStatus::Todo),
            ("done", &self.done_template, TaskStatus::Done),
        ] {
            let count = collection.count_by_status(status);
            lines.push(render(
                &environment,
                name,
                template,
                context! { count => count },
            )?);
            for task in collection.visible_with_status(status) {
                lines.push(self.render_task(&environment, task)?);
            }
        }

        Ok(lines.join("\n"))
    }

    fn render_task(
        &self,
        environment: &Environment<'_>,
        task: &Task,
    ) -> Result<String, RenderError> {
        render(
            environment,
            "task",
            &self.task_template,
            context! {
                id => task.id().as_str(),
                title => task.title().as_str(),
                deadline => task.deadline().to_string(),
                priority => task.priority().as_str(),
                status => task.status().as_str(),
            },
        )
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render(
    environment: &Environment<'_>,
    name: &'static str,
    template: &str,
    context: Value,
) -> Result<String, RenderError> {
    environment
        .render_str(template, context)
        .map_err(|error| RenderError {
            template: name,
            reason: error.to_string(),
        })
}
