// File: crates/gantt-core/src/chart.rs
// Summary: Chart aggregate (ordered tasks + presentation settings) and chart-parameter derivation.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::axis::DaySeries;
use crate::category::Category;
use crate::color::rgb_part;
use crate::date::{as_date, DateInput};
use crate::error::{GanttError, Result};
use crate::params::{self, format_float, ChartParams};
use crate::task::{IntoTask, Task};
use crate::types::{
    BAR_AREA_PADDING_PX, BAR_SPACING_PX, DEFAULT_COLOR, GOOGLE_CHARTS_API_URL, HEIGHT,
    TRANSPARENT, WIDTH,
};

/// A Gantt chart: tasks in display order plus title, size and an optional
/// progress marker.
///
/// Everything derived from the tasks (date range, labels, series) is
/// recomputed on each call; the task list is the only state.
#[derive(Clone, PartialEq, Eq)]
pub struct Chart {
    pub title: String,
    pub width: u32,
    pub height: u32,
    progress: Option<NaiveDate>,
    tasks: Vec<Task>,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), width: WIDTH, height: HEIGHT, progress: None, tasks: Vec::new() }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Mark `date` with a vertical band, if it falls inside the chart's range.
    pub fn with_progress(mut self, date: impl Into<DateInput>) -> Result<Self> {
        self.progress = Some(as_date(date)?);
        Ok(self)
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn progress(&self) -> Option<NaiveDate> { self.progress }

    pub fn set_progress(&mut self, date: Option<NaiveDate>) { self.progress = date; }

    pub fn tasks(&self) -> &[Task] { &self.tasks }

    /// Direct access for callers that append or reorder tasks themselves.
    pub fn tasks_mut(&mut self) -> &mut Vec<Task> { &mut self.tasks }

    /// Append a task (or build one from a [`crate::TaskBuilder`]) and return it.
    pub fn add_task(&mut self, task: impl IntoTask) -> Result<&Task> {
        let task = task.into_task()?;
        self.tasks.push(task);
        self.tasks.last().ok_or(GanttError::EmptyChart)
    }

    /// Earliest task start.
    pub fn start_date(&self) -> Result<NaiveDate> {
        self.tasks.iter().map(Task::start_date).min().ok_or(GanttError::EmptyChart)
    }

    /// Latest task end.
    pub fn end_date(&self) -> Result<NaiveDate> {
        self.tasks.iter().map(Task::end_date).max().ok_or(GanttError::EmptyChart)
    }

    /// Overall span in days.
    pub fn duration(&self) -> Result<i64> {
        Ok((self.end_date()? - self.start_date()?).num_days())
    }

    /// Unique task categories in order of first use.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen = HashSet::new();
        self.tasks.iter().map(Task::category).filter(|c| seen.insert(*c)).collect()
    }

    /// One label per day from start to end inclusive (`duration() + 1` items).
    pub fn day_series(&self) -> Result<DaySeries> {
        let days = self.duration()? as usize + 1;
        Ok(DaySeries::new(self.start_date()?, days, self.width))
    }

    /// Parameters for the chart service.
    pub fn params(&self) -> Result<ChartParams> {
        self.params_with(ChartParams::new())
    }

    /// Parameters for the chart service with `overrides` applied last; an
    /// override replaces a computed value verbatim.
    pub fn params_with<K, V>(&self, overrides: impl IntoIterator<Item = (K, V)>) -> Result<ChartParams>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let start = self.start_date()?;
        let end = self.end_date()?;
        let duration = (end - start).num_days();
        // A single-day chart still gets one grid cell.
        let span = duration.max(1) as f64;

        let bar_thickness = ((f64::from(self.height) - BAR_AREA_PADDING_PX) / self.tasks.len() as f64)
            as i64
            - BAR_SPACING_PX;
        let grid_step = 100.0 / span;

        let categories = self.categories();
        let colors: Vec<&str> =
            std::iter::once(TRANSPARENT).chain(categories.iter().map(|c| c.color())).collect();

        let days: Vec<String> = self.day_series()?.collect();
        let titles: Vec<&str> = self.tasks.iter().rev().map(Task::title).collect();

        let mut out = ChartParams::new();
        out.insert(params::CHART_TYPE, "bhs");
        out.insert(params::COLORS, colors.join(","));
        out.insert(params::TITLE, self.title.as_str());
        out.insert(params::SIZE, format!("{}x{}", self.width, self.height));
        out.insert(params::DATA_SCALE, format!("0,{duration}"));
        out.insert(params::BAR_SIZE, format!("{bar_thickness},{BAR_SPACING_PX},0"));
        out.insert(params::GRID, format!("{},0", format_float(grid_step)));
        out.insert(params::AXES, "x,y");
        out.insert(
            params::AXIS_LABELS,
            format!("0:|{}|1:|{}", days.join("|"), titles.join("|")),
        );

        if categories.iter().any(|c| c.has_title()) {
            let legend: Vec<&str> =
                categories.iter().filter(|c| c.has_title()).map(|c| c.title()).collect();
            out.insert(params::LEGEND, format!("|{}", legend.join("|")));
        }

        if let Some(progress) = self.progress.filter(|p| (start..=end).contains(p)) {
            let fraction = (progress - start).num_days() as f64 / span;
            out.insert(
                params::MARKERS,
                format!("r,{}33,0,0,{}", rgb_part(DEFAULT_COLOR), format_float(fraction)),
            );
        }

        out.insert(params::DATA, self.data_string(start, &categories));
        out.merge(overrides);

        debug!(
            tasks = self.tasks.len(),
            categories = categories.len(),
            duration,
            "computed chart params"
        );
        Ok(out)
    }

    /// `t:` + per-task offsets, then one duration series per category with
    /// zeros where a task belongs to another category.
    fn data_string(&self, start: NaiveDate, categories: &[&Category]) -> String {
        let offsets: Vec<String> =
            self.tasks.iter().map(|t| t.offset_from(start).to_string()).collect();

        let series: Vec<String> = categories
            .iter()
            .map(|&c| {
                self.tasks
                    .iter()
                    .map(|t| if t.category() == c { t.duration().to_string() } else { "0".to_string() })
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();

        format!("t:{}|{}", offsets.join(","), series.join("|"))
    }

    /// GET URL embedding the parameters, against the public endpoint.
    pub fn url(&self) -> Result<String> {
        crate::transport::build_url(GOOGLE_CHARTS_API_URL, self)
    }
}

impl fmt::Debug for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = self.progress.map_or_else(|| "None".to_string(), |p| p.to_string());
        write!(f, "<GanttChart(width={}, height={}, progress={progress})>", self.width, self.height)
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
