//! Tab controller owning every panel of the widget.
//!
//! # Responsibility
//! - Hold the active tab and all panel state in one place.
//! - Apply the configured tab policy when the user switches tabs.
//! - Fan host timer ticks out to the quiz countdown.
//!
//! # Invariants
//! - Exactly one tab is active.
//! - Under `MountOnDemand` a panel that is not active holds fresh state,
//!   so no countdown survives leaving the quiz tab.

use crate::config::{TabPolicy, WidgetConfig};
use crate::ids::{IdSource, RandomIds};
use crate::model::quiz::QuizPhase;
use crate::service::attendance_panel::AttendancePanel;
use crate::service::grades_panel::GradesPanel;
use crate::service::planner_panel::PlannerPanel;
use crate::service::quiz_panel::QuizPanel;
use crate::service::schedule_panel::SchedulePanel;
use crate::service::shell_service::Shell;
use crate::timer::{ManualTimerDriver, TimerDriver};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// The five inner-widget tabs, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Schedule,
    Grades,
    Attendance,
    Planner,
    Quiz,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Self::Schedule,
        Self::Grades,
        Self::Attendance,
        Self::Planner,
        Self::Quiz,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Schedule => "Schedule",
            Self::Grades => "Grades",
            Self::Attendance => "Attendance",
            Self::Planner => "Planner",
            Self::Quiz => "Quiz",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Schedule => "schedule",
            Self::Grades => "grades",
            Self::Attendance => "attendance",
            Self::Planner => "planner",
            Self::Quiz => "quiz",
        }
    }
}

/// Single owner of widget state.
pub struct Widget {
    config: WidgetConfig,
    ids: Rc<dyn IdSource>,
    timers: Rc<dyn TimerDriver>,
    rng: StdRng,
    active: Tab,
    schedule: SchedulePanel,
    grades: GradesPanel,
    attendance: AttendancePanel,
    planner: PlannerPanel,
    quiz: QuizPanel,
    shell: Shell,
}

impl Widget {
    /// Builds a widget with random ids and a hand-pumped timer driver.
    pub fn new(config: WidgetConfig) -> Self {
        Self::with_sources(
            config,
            Rc::new(RandomIds),
            Rc::new(ManualTimerDriver::new()),
        )
    }

    /// Builds a widget around host-provided id and timer sources.
    pub fn with_sources(
        config: WidgetConfig,
        ids: Rc<dyn IdSource>,
        timers: Rc<dyn TimerDriver>,
    ) -> Self {
        let rng = match config.quiz_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            schedule: SchedulePanel::new(ids.clone()),
            grades: GradesPanel::new(ids.clone()),
            attendance: AttendancePanel::new(),
            planner: PlannerPanel::new(ids.clone()),
            quiz: QuizPanel::new(config.quiz, timers.clone()),
            shell: Shell::new(),
            active: Tab::default(),
            config,
            ids,
            timers,
            rng,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switches tabs; returns `false` when `tab` was already active.
    pub fn select(&mut self, tab: Tab) -> bool {
        if tab == self.active {
            return false;
        }
        let previous = self.active;
        if self.config.tab_policy == TabPolicy::MountOnDemand {
            self.remount(previous);
        }
        self.active = tab;
        debug!(
            "event=tab_select module=widget status=ok from={} to={}",
            previous.key(),
            tab.key()
        );
        true
    }

    /// Whether `tab` currently holds live state that may be mutated.
    ///
    /// Always true under `KeepMounted`; only the active tab under
    /// `MountOnDemand`.
    pub fn is_mounted(&self, tab: Tab) -> bool {
        self.config.tab_policy == TabPolicy::KeepMounted || self.active == tab
    }

    /// One host timer period elapsed.
    ///
    /// Under `KeepMounted` the quiz counts down even while hidden; under
    /// `MountOnDemand` ticks only reach it while the quiz tab is active.
    pub fn tick(&mut self) -> QuizPhase {
        if !self.is_mounted(Tab::Quiz) {
            return self.quiz.phase();
        }
        self.quiz.tick()
    }

    pub fn schedule(&self) -> &SchedulePanel {
        &self.schedule
    }

    /// `None` when the schedule tab is not mounted.
    pub fn schedule_mut(&mut self) -> Option<&mut SchedulePanel> {
        self.is_mounted(Tab::Schedule).then_some(&mut self.schedule)
    }

    pub fn grades(&self) -> &GradesPanel {
        &self.grades
    }

    pub fn grades_mut(&mut self) -> Option<&mut GradesPanel> {
        self.is_mounted(Tab::Grades).then_some(&mut self.grades)
    }

    pub fn attendance(&self) -> &AttendancePanel {
        &self.attendance
    }

    pub fn attendance_mut(&mut self) -> Option<&mut AttendancePanel> {
        self.is_mounted(Tab::Attendance)
            .then_some(&mut self.attendance)
    }

    pub fn planner(&self) -> &PlannerPanel {
        &self.planner
    }

    pub fn planner_mut(&mut self) -> Option<&mut PlannerPanel> {
        self.is_mounted(Tab::Planner).then_some(&mut self.planner)
    }

    pub fn quiz(&self) -> &QuizPanel {
        &self.quiz
    }

    /// Quiz panel plus the widget's shuffle source, when mounted.
    pub fn quiz_mut(&mut self) -> Option<(&mut QuizPanel, &mut StdRng)> {
        if !self.is_mounted(Tab::Quiz) {
            return None;
        }
        Some((&mut self.quiz, &mut self.rng))
    }

    /// The shell sits outside the tab strip and is always mounted.
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }

    fn remount(&mut self, tab: Tab) {
        match tab {
            Tab::Schedule => self.schedule = SchedulePanel::new(self.ids.clone()),
            Tab::Grades => self.grades = GradesPanel::new(self.ids.clone()),
            Tab::Attendance => self.attendance = AttendancePanel::new(),
            Tab::Planner => self.planner = PlannerPanel::new(self.ids.clone()),
            // Dropping the old panel cancels its countdown.
            Tab::Quiz => self.quiz = QuizPanel::new(self.config.quiz, self.timers.clone()),
        }
        debug!("event=tab_remount module=widget status=ok tab={}", tab.key());
    }
}
