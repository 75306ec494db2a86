// File: crates/gantt-core/src/task.rs
// Summary: Task model (one bar) with start/end/duration resolution and dependency snapshots.
// Notes:
// - A task positioned with `depends_on` copies the dependency's end date once,
//   at build time. Later changes to the dependency are not propagated.

use std::fmt;

use chrono::{NaiveDate, TimeDelta};

use crate::category::Category;
use crate::date::{as_date, DateInput};
use crate::error::{GanttError, Result};
use crate::types::DEFAULT_COLOR;

/// Snapshot of the task another task was scheduled after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dependency {
    pub title: String,
    pub end_date: NaiveDate,
}

/// A single bar: resolved start, end and duration in days.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    title: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    duration: i64,
    category: Category,
    depends_on: Option<Dependency>,
}

impl Task {
    /// Start building a task. Exactly one of `start_date`/`depends_on` and one
    /// of `duration`/`end_date` must be supplied before [`TaskBuilder::build`].
    pub fn builder(title: impl Into<String>) -> TaskBuilder {
        TaskBuilder::new(title)
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn start_date(&self) -> NaiveDate { self.start_date }
    pub fn end_date(&self) -> NaiveDate { self.end_date }
    /// Length in whole days; always `end_date - start_date`.
    pub fn duration(&self) -> i64 { self.duration }
    pub fn category(&self) -> &Category { &self.category }
    pub fn depends_on(&self) -> Option<&Dependency> { self.depends_on.as_ref() }

    /// Days between `origin` and this task's start.
    pub fn offset_from(&self, origin: NaiveDate) -> i64 {
        (self.start_date - origin).num_days()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Collects the four permitted positioning combinations:
/// `depends_on` or `start_date`, then `duration` or `end_date`.
/// The first of each pair wins when both are set.
#[derive(Clone, Debug)]
pub struct TaskBuilder {
    title: String,
    start_date: Option<DateInput>,
    end_date: Option<DateInput>,
    duration: Option<i64>,
    depends_on: Option<Dependency>,
    color: Option<String>,
    category: Option<Category>,
}

impl TaskBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_date: None,
            end_date: None,
            duration: None,
            depends_on: None,
            color: None,
            category: None,
        }
    }

    pub fn start_date(mut self, date: impl Into<DateInput>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn end_date(mut self, date: impl Into<DateInput>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn duration(mut self, days: i64) -> Self {
        self.duration = Some(days);
        self
    }

    /// Schedule after `task`: start on its end date.
    pub fn depends_on(mut self, task: &Task) -> Self {
        self.depends_on = Some(Dependency { title: task.title.clone(), end_date: task.end_date });
        self
    }

    /// Bar color for the implicit untitled category. Ignored when a category is set.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn build(self) -> Result<Task> {
        let start_date = match (&self.depends_on, self.start_date) {
            (Some(dep), _) => dep.end_date,
            (None, Some(input)) => as_date(input).map_err(|e| {
                GanttError::InvalidTask(format!("start_date of {:?}: {e}", self.title))
            })?,
            (None, None) => {
                return Err(GanttError::InvalidTask(format!(
                    "{:?}: must specify depends_on or start_date",
                    self.title
                )))
            }
        };

        let (end_date, duration) = match (self.duration, self.end_date) {
            (Some(days), _) => {
                let end = TimeDelta::try_days(days)
                    .and_then(|delta| start_date.checked_add_signed(delta))
                    .ok_or_else(|| {
                        GanttError::InvalidTask(format!("{:?}: duration {days} out of range", self.title))
                    })?;
                (end, days)
            }
            (None, Some(input)) => {
                let end = as_date(input).map_err(|e| {
                    GanttError::InvalidTask(format!("end_date of {:?}: {e}", self.title))
                })?;
                (end, (end - start_date).num_days())
            }
            (None, None) => {
                return Err(GanttError::InvalidTask(format!(
                    "{:?}: must specify duration or end_date",
                    self.title
                )))
            }
        };

        if end_date < start_date {
            return Err(GanttError::InvalidTask(format!(
                "{:?}: start after end ({start_date} > {end_date})",
                self.title
            )));
        }

        let category = match self.category {
            Some(c) => c,
            None => Category::new("", self.color.as_deref().unwrap_or(DEFAULT_COLOR)),
        };

        Ok(Task {
            title: self.title,
            start_date,
            end_date,
            duration,
            category,
            depends_on: self.depends_on,
        })
    }
}

/// Anything [`crate::Chart::add_task`] can turn into a task.
pub trait IntoTask {
    fn into_task(self) -> Result<Task>;
}

impl IntoTask for Task {
    fn into_task(self) -> Result<Task> { Ok(self) }
}

impl IntoTask for TaskBuilder {
    fn into_task(self) -> Result<Task> { self.build() }
}
