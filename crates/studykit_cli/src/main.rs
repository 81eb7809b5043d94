//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `studykit_core` linkage and run one scripted widget session.
//! - Keep output deterministic (fixed ids and shuffle seed).
//!
//! Optional argument: absolute log directory; logs stay off without it.

use std::process::ExitCode;
use std::rc::Rc;
use studykit_core::{
    AttendanceStatus, GradeDraft, ManualTimerDriver, PanelError, PanelResult, PlannerDraft,
    ScheduleDraft, SequentialIds, Tab, TaskCategory, Widget, WidgetConfig,
};

const DEMO_QUIZ_ITEMS: &str = "mitochondria\nribosome\nnucleus\ncytoplasm\nchloroplast\nvacuole";

fn main() -> ExitCode {
    println!("studykit_core ping={}", studykit_core::ping());
    println!("studykit_core version={}", studykit_core::core_version());

    let config = WidgetConfig {
        quiz_seed: Some(42),
        ..WidgetConfig::default()
    };

    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(err) = studykit_core::init_logging(config.effective_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut widget = Widget::with_sources(
        config,
        Rc::new(SequentialIds::new()),
        Rc::new(ManualTimerDriver::new()),
    );

    match run_session(&mut widget) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scripted session failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_session(widget: &mut Widget) -> PanelResult<()> {
    let schedule = widget
        .schedule_mut()
        .ok_or(PanelError::NotMounted(Tab::Schedule.key()))?;
    schedule.add(ScheduleDraft::new("Chemistry", "Mon", "09:00", "Lab 1"))?;
    println!("schedule entries={}", schedule.entries().len());

    widget.select(Tab::Grades);
    let grades = widget
        .grades_mut()
        .ok_or(PanelError::NotMounted(Tab::Grades.key()))?;
    grades.add(GradeDraft::new("Chemistry", "88"))?;
    grades.add(GradeDraft::new("History", "71"))?;
    let summary = grades.summary();
    println!(
        "grades average={} grade={} result={}",
        summary.average_display,
        summary.letter.as_str(),
        summary.verdict.as_str()
    );

    widget.select(Tab::Attendance);
    let attendance = widget
        .attendance_mut()
        .ok_or(PanelError::NotMounted(Tab::Attendance.key()))?;
    attendance.record("Ana", AttendanceStatus::Present)?;
    attendance.record("Ana", AttendanceStatus::Late)?;
    println!("attendance students={}", attendance.records().len());

    widget.select(Tab::Planner);
    let planner = widget
        .planner_mut()
        .ok_or(PanelError::NotMounted(Tab::Planner.key()))?;
    planner.add(PlannerDraft::new("Read chapter 4", TaskCategory::School))?;
    println!("planner tasks={}", planner.tasks().len());

    widget.select(Tab::Quiz);
    let (quiz, rng) = widget
        .quiz_mut()
        .ok_or(PanelError::NotMounted(Tab::Quiz.key()))?;
    let count = quiz.start(DEMO_QUIZ_ITEMS, rng)?;
    println!("quiz questions={count}");
    let mut correct = true;
    while quiz.current_question().is_some() {
        quiz.answer(correct)?;
        correct = !correct;
    }
    let view = quiz.view();
    println!("quiz score={} of {}", view.score, view.total);

    Ok(())
}
