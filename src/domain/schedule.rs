use crate::domain::calendar::{self, NavigationDirection, ViewMode};
use crate::domain::error::DomainError;
use crate::domain::ids::IdGenerator;
use crate::domain::models::{DEFAULT_SUBJECT, Task, TaskForm, minutes_between, parse_hhmm};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct DaySummary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub planned_minutes: i64,
    pub completed_minutes: i64,
}

/// Owns every scheduled task plus the calendar cursor the views are built from.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    tasks: Vec<Task>,
    ids: IdGenerator,
    selected_date: NaiveDate,
    view_mode: ViewMode,
}

struct ValidatedForm {
    title: String,
    subject: String,
    start_time: String,
    end_time: String,
    duration_minutes: i64,
    description: Option<String>,
}

impl ScheduleStore {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            tasks: Vec::new(),
            ids: IdGenerator::new("tsk"),
            selected_date,
            view_mode: ViewMode::Day,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn navigate(&mut self, direction: NavigationDirection) -> NaiveDate {
        self.selected_date = calendar::navigate(self.selected_date, self.view_mode, direction);
        self.selected_date
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.selected_date = today;
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.get(task_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Adds a task on the currently selected date.
    pub fn add_task(&mut self, form: &TaskForm) -> Result<Task, DomainError> {
        let validated = validate_form(form)?;
        let task = Task {
            id: self.ids.next_id(),
            title: validated.title,
            subject: validated.subject,
            start_time: validated.start_time,
            end_time: validated.end_time,
            date: self.selected_date,
            duration_minutes: validated.duration_minutes,
            completed: false,
            priority: form.priority,
            task_type: form.task_type,
            color: form.task_type.color().to_string(),
            description: validated.description,
        };
        task.validate().map_err(DomainError::InvalidRecord)?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replaces the editable fields of an existing task. Id, date and
    /// completion state are kept.
    pub fn update_task(&mut self, task_id: &str, form: &TaskForm) -> Result<Task, DomainError> {
        let validated = validate_form(form)?;
        let slot = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| DomainError::TaskNotFound(task_id.to_string()))?;

        let task = Task {
            title: validated.title,
            subject: validated.subject,
            start_time: validated.start_time,
            end_time: validated.end_time,
            duration_minutes: validated.duration_minutes,
            priority: form.priority,
            task_type: form.task_type,
            color: form.task_type.color().to_string(),
            description: validated.description,
            ..slot.clone()
        };
        task.validate().map_err(DomainError::InvalidRecord)?;
        *slot = task.clone();
        Ok(task)
    }

    pub fn delete_task(&mut self, task_id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != task_id);
        self.tasks.len() != before
    }

    pub fn toggle_completion(&mut self, task_id: &str) -> Result<Task, DomainError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| DomainError::TaskNotFound(task_id.to_string()))?;
        task.completed = !task.completed;
        Ok(task.clone())
    }

    /// Tasks on `date` ordered by start time. Start times are validated as
    /// zero-padded "HH:MM", so string order is chronological; the sort is
    /// stable for equal start times.
    pub fn tasks_for_date(&self, date: NaiveDate) -> Vec<Task> {
        let mut tasks = self
            .tasks
            .iter()
            .filter(|task| task.date == date)
            .cloned()
            .collect::<Vec<_>>();
        tasks.sort_by(|left, right| left.start_time.cmp(&right.start_time));
        tasks
    }

    pub fn tasks_for_week(&self, date: NaiveDate) -> Vec<DaySchedule> {
        self.group_by_day(calendar::week_dates(date))
    }

    pub fn tasks_for_month(&self, date: NaiveDate) -> Vec<DaySchedule> {
        self.group_by_day(calendar::month_dates(date))
    }

    /// The days shown by the current view mode around the selected date.
    pub fn visible_schedule(&self) -> Vec<DaySchedule> {
        match self.view_mode {
            ViewMode::Day => self.group_by_day(vec![self.selected_date]),
            ViewMode::Week => self.tasks_for_week(self.selected_date),
            ViewMode::Month => self.tasks_for_month(self.selected_date),
        }
    }

    pub fn day_summary(&self, date: NaiveDate) -> DaySummary {
        self.tasks
            .iter()
            .filter(|task| task.date == date)
            .fold(DaySummary::default(), |mut summary, task| {
                summary.total_tasks += 1;
                summary.planned_minutes += task.duration_minutes;
                if task.completed {
                    summary.completed_tasks += 1;
                    summary.completed_minutes += task.duration_minutes;
                }
                summary
            })
    }

    fn group_by_day(&self, dates: Vec<NaiveDate>) -> Vec<DaySchedule> {
        dates
            .into_iter()
            .map(|date| DaySchedule {
                date,
                tasks: self.tasks_for_date(date),
            })
            .collect()
    }
}

fn validate_form(form: &TaskForm) -> Result<ValidatedForm, DomainError> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(DomainError::MissingField("title"));
    }
    let start_time = form.start_time.trim();
    if start_time.is_empty() {
        return Err(DomainError::MissingField("start_time"));
    }
    let end_time = form.end_time.trim();
    if end_time.is_empty() {
        return Err(DomainError::MissingField("end_time"));
    }

    let start = parse_hhmm(start_time, "start_time")?;
    let end = parse_hhmm(end_time, "end_time")?;
    if end <= start {
        return Err(DomainError::InvalidTimeRange {
            start: start_time.to_string(),
            end: end_time.to_string(),
        });
    }

    let subject = form.subject.trim();
    let description = form.description.trim();
    Ok(ValidatedForm {
        title: title.to_string(),
        subject: if subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            subject.to_string()
        },
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        duration_minutes: minutes_between(start, end),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{TaskPriority, TaskType};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
    }

    fn form(title: &str, start: &str, end: &str) -> TaskForm {
        TaskForm {
            title: title.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..TaskForm::default()
        }
    }

    fn store() -> ScheduleStore {
        ScheduleStore::new(date("2026-02-16"))
    }

    #[test]
    fn add_task_computes_duration_and_sorts_by_start() {
        let mut store = store();
        let later = store.add_task(&form("Algorithms", "11:00", "12:00")).expect("add later");
        let earlier = store.add_task(&form("React hooks", "09:00", "10:30")).expect("add earlier");

        assert_eq!(earlier.duration_minutes, 90);
        assert_eq!(later.duration_minutes, 60);

        let tasks = store.tasks_for_date(date("2026-02-16"));
        let ids = tasks.iter().map(|task| task.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec![earlier.id.as_str(), later.id.as_str()]);
    }

    #[test]
    fn add_task_uses_selected_date_and_defaults() {
        let mut store = store();
        store.select_date(date("2026-02-20"));
        let task = store
            .add_task(&TaskForm {
                task_type: TaskType::Exam,
                priority: TaskPriority::High,
                description: "   ".to_string(),
                ..form("Midterm", "13:00", "15:00")
            })
            .expect("add task");

        assert_eq!(task.date, date("2026-02-20"));
        assert_eq!(task.subject, DEFAULT_SUBJECT);
        assert_eq!(task.color, "#EF4444");
        assert_eq!(task.description, None);
        assert!(!task.completed);
        assert!(task.validate().is_ok());
        assert!(store.tasks_for_date(date("2026-02-16")).is_empty());
    }

    #[test]
    fn add_task_rejects_missing_fields_without_mutation() {
        let mut store = store();
        assert_eq!(
            store.add_task(&form("  ", "09:00", "10:00")),
            Err(DomainError::MissingField("title"))
        );
        assert_eq!(
            store.add_task(&form("Reading", "", "10:00")),
            Err(DomainError::MissingField("start_time"))
        );
        assert_eq!(
            store.add_task(&form("Reading", "09:00", "")),
            Err(DomainError::MissingField("end_time"))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn add_task_rejects_non_positive_ranges() {
        let mut store = store();
        assert!(matches!(
            store.add_task(&form("Reading", "10:00", "10:00")),
            Err(DomainError::InvalidTimeRange { .. })
        ));
        assert!(matches!(
            store.add_task(&form("Reading", "11:00", "10:00")),
            Err(DomainError::InvalidTimeRange { .. })
        ));
        assert!(matches!(
            store.add_task(&form("Reading", "9am", "10:00")),
            Err(DomainError::InvalidTime { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn update_task_preserves_identity_date_and_completion() {
        let mut store = store();
        let created = store.add_task(&form("Original", "09:00", "10:00")).expect("add task");
        store.toggle_completion(&created.id).expect("toggle");
        store.select_date(date("2026-03-01"));

        let updated = store
            .update_task(
                &created.id,
                &TaskForm {
                    subject: "Math".to_string(),
                    task_type: TaskType::Review,
                    ..form("Updated", "14:00", "14:45")
                },
            )
            .expect("update task");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, created.date);
        assert!(updated.completed);
        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.subject, "Math");
        assert_eq!(updated.duration_minutes, 45);
        assert_eq!(updated.color, TaskType::Review.color());
        assert_eq!(store.get(&created.id), Some(&updated));
    }

    #[test]
    fn update_task_rejects_unknown_or_invalid() {
        let mut store = store();
        let created = store.add_task(&form("Original", "09:00", "10:00")).expect("add task");
        assert_eq!(
            store.update_task("tsk-404", &form("x", "09:00", "10:00")),
            Err(DomainError::TaskNotFound("tsk-404".to_string()))
        );
        assert!(store.update_task(&created.id, &form("", "09:00", "10:00")).is_err());
        assert_eq!(store.get(&created.id), Some(&created));
    }

    #[test]
    fn delete_task_is_idempotent() {
        let mut store = store();
        let created = store.add_task(&form("Reading", "09:00", "10:00")).expect("add task");
        let kept = store.add_task(&form("Writing", "10:00", "11:00")).expect("add task");

        assert!(store.delete_task(&created.id));
        assert!(!store.delete_task(&created.id));
        assert_eq!(store.len(), 1);
        assert!(store.contains(&kept.id));
    }

    #[test]
    fn week_and_month_views_group_by_day() {
        let mut store = store();
        store.add_task(&form("Monday task", "09:00", "10:00")).expect("add");
        store.select_date(date("2026-02-21"));
        store.add_task(&form("Saturday task", "09:00", "10:00")).expect("add");
        store.select_date(date("2026-02-22"));
        store.add_task(&form("Next week", "09:00", "10:00")).expect("add");

        let week = store.tasks_for_week(date("2026-02-18"));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date("2026-02-15"));
        assert_eq!(week[1].tasks.len(), 1);
        assert_eq!(week[6].tasks[0].title, "Saturday task");
        assert_eq!(week.iter().map(|day| day.tasks.len()).sum::<usize>(), 2);

        let month = store.tasks_for_month(date("2026-02-18"));
        assert_eq!(month.len(), 28);
        assert_eq!(month.iter().map(|day| day.tasks.len()).sum::<usize>(), 3);
    }

    #[test]
    fn navigation_follows_view_mode() {
        let mut store = store();
        store.set_view_mode(ViewMode::Week);
        assert_eq!(store.navigate(NavigationDirection::Next), date("2026-02-23"));
        assert_eq!(store.visible_schedule().len(), 7);

        store.set_view_mode(ViewMode::Month);
        assert_eq!(store.navigate(NavigationDirection::Previous), date("2026-01-23"));

        store.set_view_mode(ViewMode::Day);
        assert_eq!(store.navigate(NavigationDirection::Previous), date("2026-01-22"));
        assert_eq!(store.visible_schedule().len(), 1);

        store.go_to_today(date("2026-10-14"));
        assert_eq!(store.selected_date(), date("2026-10-14"));
    }

    #[test]
    fn day_summary_totals_planned_and_completed_minutes() {
        let mut store = store();
        let first = store.add_task(&form("Reading", "09:00", "10:30")).expect("add");
        store.add_task(&form("Writing", "11:00", "11:45")).expect("add");
        store.toggle_completion(&first.id).expect("toggle");

        assert_eq!(
            store.day_summary(date("2026-02-16")),
            DaySummary {
                total_tasks: 2,
                completed_tasks: 1,
                planned_minutes: 135,
                completed_minutes: 90,
            }
        );
        assert_eq!(store.day_summary(date("2026-02-17")), DaySummary::default());
    }

    proptest! {
        #[test]
        fn toggle_twice_restores_task(start_minute in 0u32..1380u32, length in 1u32..60u32) {
            let start = format!("{:02}:{:02}", start_minute / 60, start_minute % 60);
            let end_minute = start_minute + length;
            let end = format!("{:02}:{:02}", end_minute / 60, end_minute % 60);

            let mut store = store();
            let created = store.add_task(&form("Task", &start, &end)).expect("add");
            prop_assert_eq!(created.duration_minutes, length as i64);

            let toggled = store.toggle_completion(&created.id).expect("toggle");
            prop_assert!(toggled.completed);
            let restored = store.toggle_completion(&created.id).expect("toggle");
            prop_assert_eq!(&restored, &created);
        }
    }
}
