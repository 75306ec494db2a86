// File: crates/gantt-demo/src/loader.rs
// Summary: Load tasks from CSV (title,start,end,duration,depends_on,category,color).

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use gantt_core::{Category, Task};
use tracing::debug;

/// Read tasks from a CSV file. See [`load_tasks`] for the format.
pub fn load_tasks_csv(path: &Path) -> Result<Vec<Task>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_tasks(file)
}

/// Parse tasks from CSV with headers. Recognised columns (case-insensitive,
/// any order, blank cells allowed): `title`, `start`, `end`, `duration`,
/// `depends_on`, `category`, `color`.
///
/// `depends_on` names the title of an earlier row. A row with a `category`
/// joins the category `(category, color)`; without one, `color` only tints
/// the bar.
pub fn load_tasks<R: Read>(reader: R) -> Result<Vec<Task>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "task csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_title = idx(&["title", "task", "name"]);
    let i_start = idx(&["start", "start_date"]);
    let i_end = idx(&["end", "end_date"]);
    let i_duration = idx(&["duration", "days"]);
    let i_depends = idx(&["depends_on", "after"]);
    let i_category = idx(&["category"]);
    let i_color = idx(&["color", "colour"]);

    if i_title.is_none() {
        bail!("task csv needs a title column");
    }

    let mut tasks: Vec<Task> = Vec::new();
    let mut by_title: HashMap<String, usize> = HashMap::new();

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = row + 2;
        let cell = |i: Option<usize>| -> Option<&str> {
            i.and_then(|ix| rec.get(ix)).filter(|s| !s.is_empty())
        };

        let title = cell(i_title).with_context(|| format!("line {line}: missing title"))?;
        let mut builder = Task::builder(title);

        if let Some(dep) = cell(i_depends) {
            let &dep_ix = by_title
                .get(dep)
                .with_context(|| format!("line {line}: depends_on {dep:?} does not name an earlier task"))?;
            builder = builder.depends_on(&tasks[dep_ix]);
        }
        if let Some(start) = cell(i_start) {
            builder = builder.start_date(start);
        }
        if let Some(days) = cell(i_duration) {
            let days: i64 = days.parse().with_context(|| format!("line {line}: bad duration {days:?}"))?;
            builder = builder.duration(days);
        }
        if let Some(end) = cell(i_end) {
            builder = builder.end_date(end);
        }
        match (cell(i_category), cell(i_color)) {
            (Some(cat), color) => {
                builder = builder.category(Category::new(cat, color.unwrap_or(gantt_core::types::DEFAULT_COLOR)));
            }
            (None, Some(color)) => builder = builder.color(color),
            (None, None) => {}
        }

        let task = builder.build().with_context(|| format!("line {line}"))?;
        by_title.insert(task.title().to_string(), tasks.len());
        tasks.push(task);
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
title,start,end,duration,depends_on,category,color
Task 1,2011-02-01,,5,,Complete,000
Task 2,,,10,Task 1,On Time,0c0
Task 3,,2011-02-20,,Task 2,Upcoming,00c
Task 4,2011-02-01,,12,,,c00
";

    #[test]
    fn loads_rows_in_order_with_dependencies() {
        let tasks = load_tasks(SAMPLE.as_bytes()).unwrap();
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks[1].start_date(), NaiveDate::from_ymd_opt(2011, 2, 6).unwrap());
        assert_eq!(tasks[2].duration(), 4);
        assert_eq!(tasks[2].category().title(), "Upcoming");
        assert_eq!(tasks[3].category().title(), "");
        assert_eq!(tasks[3].category().color(), "CC0000FF");
    }

    #[test]
    fn unknown_dependency_is_reported() {
        let csv = "title,duration,depends_on\nA,3,Nope\n";
        let err = load_tasks(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("does not name an earlier task"));
    }

    #[test]
    fn missing_title_column_fails() {
        let err = load_tasks("start,duration\n2011-02-01,3\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("title column"));
    }

    #[test]
    fn invalid_task_rows_fail_with_line_context() {
        let err = load_tasks("title,start\nA,2011-02-01\n".as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("duration or end_date"), "{msg}");
    }
}
