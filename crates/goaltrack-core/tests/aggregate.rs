use goaltrack_core::aggregate::summarize;
use goaltrack_core::models::{Goal, GoalKind};
use jiff::Timestamp;
use uuid::Uuid;

fn now() -> Timestamp {
    "2026-06-01T12:00:00Z".parse().unwrap()
}

fn progress_goal(progress: i64) -> Goal {
    let mut goal = Goal::new(Uuid::new_v4(), "goal", GoalKind::Progress, 2026, now()).unwrap();
    goal.set_progress(progress, now()).unwrap();
    goal
}

fn one_time_goal(completed: bool) -> Goal {
    let mut goal = Goal::new(Uuid::new_v4(), "goal", GoalKind::OneTime, 2026, now()).unwrap();
    if completed {
        goal.toggle(now()).unwrap();
    }
    goal
}

#[test]
fn empty_collection_summarizes_to_zero() {
    let summary = summarize(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.completed, 0);
    assert_eq!(summary.overall_progress, 0);
}

#[test]
fn mixed_collection_of_three() {
    // Progress 0, 50, 100 with exactly one goal completed.
    let goals = vec![progress_goal(0), progress_goal(50), progress_goal(100)];
    let summary = summarize(&goals);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.overall_progress, 50);
}

#[test]
fn one_time_goals_count_as_zero_or_one_hundred() {
    let goals = vec![one_time_goal(true), one_time_goal(false)];
    let summary = summarize(&goals);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.overall_progress, 50);
}

#[test]
fn mean_rounds_half_up() {
    // (0 + 1) / 2 = 0.5 rounds up to 1.
    let goals = vec![progress_goal(0), progress_goal(1)];
    assert_eq!(summarize(&goals).overall_progress, 1);

    // (99 + 100) / 2 = 99.5 rounds up to 100.
    let goals = vec![progress_goal(99), progress_goal(100)];
    assert_eq!(summarize(&goals).overall_progress, 100);

    // (0 + 0 + 1) / 3 ≈ 0.33 rounds down to 0.
    let goals = vec![progress_goal(0), progress_goal(0), progress_goal(1)];
    assert_eq!(summarize(&goals).overall_progress, 0);
}

#[test]
fn completed_never_exceeds_total_and_progress_stays_in_range() {
    let collections = vec![
        vec![],
        vec![progress_goal(100)],
        vec![one_time_goal(true), one_time_goal(true), progress_goal(3)],
        (0i64..=100).step_by(7).map(progress_goal).collect(),
    ];
    for goals in collections {
        let summary = summarize(&goals);
        assert!(summary.completed <= summary.total);
        assert!(summary.overall_progress <= 100);
    }
}

#[test]
fn summarize_is_pure() {
    let goals = vec![progress_goal(10), progress_goal(30)];
    assert_eq!(summarize(&goals), summarize(&goals));
}
