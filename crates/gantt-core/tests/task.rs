// File: crates/gantt-core/tests/task.rs
// Purpose: Validate date coercion and task start/end/duration resolution.

use chrono::NaiveDate;
use gantt_core::{as_date, Category, GanttError, Task};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn as_date_accepts_dates_tuples_and_iso_text() {
    assert_eq!(as_date(ymd(2011, 2, 1)).unwrap(), ymd(2011, 2, 1));
    assert_eq!(as_date((2011, 2, 1)).unwrap(), ymd(2011, 2, 1));
    assert_eq!(as_date("2011-02-01").unwrap(), ymd(2011, 2, 1));
}

#[test]
fn as_date_rejects_impossible_values() {
    assert!(matches!(as_date((2011, 2, 30)), Err(GanttError::InvalidDate(_))));
    assert!(matches!(as_date((2011, 13, 1)), Err(GanttError::InvalidDate(_))));
    assert!(matches!(as_date("01/02/2011"), Err(GanttError::InvalidDate(_))));
}

#[test]
fn start_and_duration() {
    let t = Task::builder("Task 1").start_date(ymd(2011, 2, 1)).duration(5).build().unwrap();
    assert_eq!(t.start_date(), ymd(2011, 2, 1));
    assert_eq!(t.end_date(), ymd(2011, 2, 6));
    assert_eq!(t.duration(), 5);
}

#[test]
fn start_and_end() {
    let t = Task::builder("Test Task 1")
        .start_date(ymd(2009, 1, 1))
        .end_date(ymd(2009, 2, 1))
        .build()
        .unwrap();
    assert_eq!(t.duration(), 31);

    for days in [0_i64, 1, 27, 365] {
        let end = ymd(2012, 2, 1) + chrono::Days::new(days as u64);
        let t = Task::builder("t").start_date((2012, 2, 1)).end_date(end).build().unwrap();
        assert_eq!(t.duration(), days);
    }
}

#[test]
fn depends_on_takes_dependency_end() {
    let t1 = Task::builder("Task 1").start_date((2011, 2, 1)).end_date((2011, 2, 6)).build().unwrap();
    let t2 = Task::builder("Task 2").depends_on(&t1).duration(10).build().unwrap();
    assert_eq!(t2.start_date(), ymd(2011, 2, 6));
    assert_eq!(t2.end_date(), ymd(2011, 2, 16));
    assert_eq!(t2.depends_on().map(|d| d.title.as_str()), Some("Task 1"));

    let t3 = Task::builder("Task 3").depends_on(&t2).end_date((2011, 2, 20)).build().unwrap();
    assert_eq!(t3.start_date(), ymd(2011, 2, 16));
    assert_eq!(t3.duration(), 4);
}

#[test]
fn depends_on_is_a_snapshot() {
    let t1 = Task::builder("Task 1").start_date((2011, 2, 1)).duration(5).build().unwrap();
    let t2 = Task::builder("Task 2").depends_on(&t1).duration(3).build().unwrap();

    // Reschedule the dependency; the dependent keeps the old start.
    let t1 = Task::builder("Task 1").start_date((2011, 3, 1)).duration(5).build().unwrap();
    assert_eq!(t1.end_date(), ymd(2011, 3, 6));
    assert_eq!(t2.start_date(), ymd(2011, 2, 6));
    assert_eq!(t2.depends_on().unwrap().end_date, ymd(2011, 2, 6));
}

#[test]
fn depends_on_wins_over_start_date() {
    let t1 = Task::builder("a").start_date((2011, 2, 1)).duration(2).build().unwrap();
    let t2 = Task::builder("b").start_date((2010, 1, 1)).depends_on(&t1).duration(1).build().unwrap();
    assert_eq!(t2.start_date(), ymd(2011, 2, 3));
}

#[test]
fn missing_start_is_invalid() {
    let err = Task::builder("x").duration(3).build().unwrap_err();
    assert!(matches!(err, GanttError::InvalidTask(ref m) if m.contains("depends_on or start_date")));
}

#[test]
fn missing_span_is_invalid() {
    let err = Task::builder("x").start_date((2011, 2, 1)).build().unwrap_err();
    assert!(matches!(err, GanttError::InvalidTask(ref m) if m.contains("duration or end_date")));
}

#[test]
fn bad_dates_become_invalid_task() {
    let err = Task::builder("x").start_date((2011, 2, 31)).duration(1).build().unwrap_err();
    assert!(matches!(err, GanttError::InvalidTask(_)));
    let err = Task::builder("x").start_date((2011, 2, 1)).end_date("soon").build().unwrap_err();
    assert!(matches!(err, GanttError::InvalidTask(_)));
}

#[test]
fn end_before_start_is_invalid() {
    let err = Task::builder("x").start_date((2011, 2, 10)).end_date((2011, 2, 1)).build().unwrap_err();
    assert!(matches!(err, GanttError::InvalidTask(ref m) if m.contains("start after end")));
    let err = Task::builder("x").start_date((2011, 2, 10)).duration(-1).build().unwrap_err();
    assert!(matches!(err, GanttError::InvalidTask(_)));
}

#[test]
fn color_builds_an_untitled_category() {
    let t = Task::builder("t").start_date((2011, 2, 1)).duration(1).color("f00").build().unwrap();
    assert_eq!(t.category().color(), "FF0000FF");
    assert_eq!(t.category().title(), "");

    let t = Task::builder("t").start_date((2011, 2, 1)).duration(1).color("f00d").build().unwrap();
    assert_eq!(t.category().color(), "FF0000DD");

    let t = Task::builder("t").start_date((2011, 2, 1)).duration(1).build().unwrap();
    assert_eq!(t.category(), &Category::default());
}

#[test]
fn explicit_category_wins_over_color() {
    let late = Category::new("Late", "c00");
    let t = Task::builder("t")
        .start_date((2011, 2, 1))
        .duration(1)
        .color("0f0")
        .category(late.clone())
        .build()
        .unwrap();
    assert_eq!(t.category(), &late);
    assert_eq!(t.to_string(), "t");
}
