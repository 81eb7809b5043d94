use std::rc::Rc;
use studykit_core::{
    AttendanceStatus, ManualTimerDriver, QuizPhase, ScheduleDraft, SequentialIds, Tab, TabPolicy,
    Widget, WidgetConfig,
};

const ITEMS: &str = "alpha\nbeta\ngamma\ndelta\nepsilon\nzeta";

fn widget(policy: TabPolicy) -> (Widget, Rc<ManualTimerDriver>) {
    let driver = Rc::new(ManualTimerDriver::new());
    let config = WidgetConfig {
        tab_policy: policy,
        quiz_seed: Some(17),
        ..WidgetConfig::default()
    };
    let widget = Widget::with_sources(config, Rc::new(SequentialIds::new()), driver.clone());
    (widget, driver)
}

#[test]
fn keep_mounted_preserves_panels_and_runs_hidden_countdown() {
    let (mut widget, driver) = widget(TabPolicy::KeepMounted);
    widget
        .schedule_mut()
        .unwrap()
        .add(ScheduleDraft::new("Math", "Mon", "09:00", "B12"))
        .unwrap();

    widget.select(Tab::Quiz);
    let (quiz, rng) = widget.quiz_mut().unwrap();
    quiz.start(ITEMS, rng).unwrap();

    widget.select(Tab::Schedule);
    assert_eq!(widget.schedule().entries().len(), 1);

    for _ in 0..10 {
        widget.tick();
    }
    assert_eq!(widget.quiz().time_left(), 20);
    assert_eq!(driver.active_tokens().len(), 1);

    for _ in 0..20 {
        widget.tick();
    }
    assert_eq!(widget.quiz().phase(), QuizPhase::Finished);
    assert!(driver.active_tokens().is_empty());
}

#[test]
fn mount_on_demand_resets_left_panel_and_cancels_countdown() {
    let (mut widget, driver) = widget(TabPolicy::MountOnDemand);
    widget.select(Tab::Quiz);
    let (quiz, rng) = widget.quiz_mut().unwrap();
    quiz.start(ITEMS, rng).unwrap();
    assert_eq!(driver.active_tokens().len(), 1);

    widget.select(Tab::Attendance);
    assert!(driver.active_tokens().is_empty());
    assert_eq!(driver.cancelled_count(), 1);
    assert_eq!(widget.quiz().phase(), QuizPhase::Setup);
    assert_eq!(widget.tick(), QuizPhase::Setup);

    widget
        .attendance_mut()
        .unwrap()
        .record("Ana", AttendanceStatus::Present)
        .unwrap();
    widget.select(Tab::Planner);
    assert!(widget.attendance().records().is_empty());
}

#[test]
fn mount_on_demand_keeps_state_while_tab_stays_active() {
    let (mut widget, _driver) = widget(TabPolicy::MountOnDemand);
    widget
        .schedule_mut()
        .unwrap()
        .add(ScheduleDraft::new("Math", "Mon", "09:00", "B12"))
        .unwrap();
    assert!(!widget.select(Tab::Schedule));
    assert_eq!(widget.schedule().entries().len(), 1);
}

#[test]
fn shell_sections_are_independent_of_tabs() {
    let (mut widget, _driver) = widget(TabPolicy::MountOnDemand);
    widget.shell_mut().send("hi").unwrap();
    widget.select(Tab::Grades);
    widget.select(Tab::Quiz);
    assert_eq!(widget.shell().transcript().len(), 2);
}

#[test]
fn seeded_widgets_shuffle_identically() {
    let (mut first, _d1) = widget(TabPolicy::KeepMounted);
    let (mut second, _d2) = widget(TabPolicy::KeepMounted);
    let (quiz, rng) = first.quiz_mut().unwrap();
    quiz.start(ITEMS, rng).unwrap();
    let (quiz, rng) = second.quiz_mut().unwrap();
    quiz.start(ITEMS, rng).unwrap();
    assert_eq!(first.quiz().questions(), second.quiz().questions());
}

#[test]
fn mount_on_demand_refuses_hidden_panels_and_hidden_ticks() {
    let (mut widget, driver) = widget(TabPolicy::MountOnDemand);
    assert_eq!(widget.active(), Tab::Schedule);
    assert!(widget.quiz_mut().is_none());
    assert!(widget.attendance_mut().is_none());

    widget.select(Tab::Grades);
    for _ in 0..5 {
        assert_eq!(widget.tick(), QuizPhase::Setup);
    }
    assert_eq!(widget.quiz().time_left(), 30);
    assert!(driver.active_tokens().is_empty());
    assert_eq!(driver.started_count(), 0);

    widget.select(Tab::Attendance);
    widget
        .attendance_mut()
        .unwrap()
        .record("Ana", AttendanceStatus::Present)
        .unwrap();
    widget.select(Tab::Planner);
    assert!(widget.attendance_mut().is_none());
    widget.select(Tab::Attendance);
    assert!(widget.attendance().records().is_empty());
}

#[test]
fn mount_on_demand_ticks_reach_quiz_while_active() {
    let (mut widget, _driver) = widget(TabPolicy::MountOnDemand);
    widget.select(Tab::Quiz);
    let (quiz, rng) = widget.quiz_mut().unwrap();
    quiz.start(ITEMS, rng).unwrap();
    for _ in 0..5 {
        widget.tick();
    }
    assert_eq!(widget.quiz().time_left(), 25);
    assert_eq!(widget.quiz().phase(), QuizPhase::InProgress);
}
