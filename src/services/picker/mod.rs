//! Date picker controller.
//!
//! Owns the visible month panels, the selected date, the bound input's text
//! and the open/closed state, and turns navigation, selection, keyboard and
//! input-change events into state transitions followed by a full redraw.

mod frame;
mod input;

pub use frame::{DateDisplay, DrawFrame, Panel};
pub use input::{DateValue, PickerAction, PickerKey};

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::PickerResult;
use crate::models::day_cell::MonthGrid;
use crate::models::settings::{MainCalendar, PickerSettings};
use crate::models::view::CalendarView;
use crate::services::grid::{build_month_grid, weekday_header, GridContext};
use crate::services::strategy::{
    Clock, DateFormat, NoHooks, PatternFormat, PickerHooks, SystemClock,
};
use crate::services::title::build_title;
use crate::utils::date::shift_days;

pub struct DatePicker {
    settings: PickerSettings,
    calendars: Vec<CalendarView>,
    date: Option<NaiveDate>,
    is_open: bool,
    input_value: String,
    hooks: Box<dyn PickerHooks>,
    format: Box<dyn DateFormat>,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("calendars", &self.calendars)
            .field("date", &self.date)
            .field("is_open", &self.is_open)
            .field("input_value", &self.input_value)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`DatePicker`] with optional strategies.
pub struct DatePickerBuilder {
    settings: PickerSettings,
    input_value: String,
    hooks: Box<dyn PickerHooks>,
    format: Box<dyn DateFormat>,
    clock: Box<dyn Clock>,
}

impl DatePickerBuilder {
    pub fn new(settings: PickerSettings) -> Self {
        Self {
            settings,
            input_value: String::new(),
            hooks: Box::new(NoHooks),
            format: Box::new(PatternFormat),
            clock: Box::new(SystemClock),
        }
    }

    /// Current text of the bound input field
    pub fn input_value(mut self, value: impl Into<String>) -> Self {
        self.input_value = value.into();
        self
    }

    pub fn hooks(mut self, hooks: impl PickerHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn format(mut self, format: impl DateFormat + 'static) -> Self {
        self.format = Box::new(format);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Validate the settings and build a closed picker.
    ///
    /// The initial view comes from `default_date` when configured, else from
    /// the input's text (which is then selected silently), else today.
    pub fn build(self) -> PickerResult<DatePicker> {
        self.settings.validate()?;

        let mut picker = DatePicker {
            settings: self.settings,
            calendars: Vec::new(),
            date: None,
            is_open: false,
            input_value: self.input_value,
            hooks: self.hooks,
            format: self.format,
            clock: self.clock,
        };

        let initial = match picker.settings.default_date {
            Some(date) => Some((date, picker.settings.set_default_date)),
            None => picker.parse(&picker.input_value).ok().map(|date| (date, true)),
        };

        match initial {
            Some((date, true)) => picker.set_date_silently(date),
            Some((date, false)) => picker.goto_date(date),
            None => {
                let today = picker.clock.today();
                picker.goto_date(today);
            }
        }

        Ok(picker)
    }
}

impl DatePicker {
    pub fn builder(settings: PickerSettings) -> DatePickerBuilder {
        DatePickerBuilder::new(settings)
    }

    /// Picker with the default parser, no hooks and the system clock.
    pub fn new(settings: PickerSettings) -> PickerResult<Self> {
        DatePickerBuilder::new(settings).build()
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    /// Visible month panels, lead panel first.
    pub fn calendars(&self) -> &[CalendarView] {
        &self.calendars
    }

    /// The selected date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Text of the bound input as last written or observed.
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn parse(&self, text: &str) -> PickerResult<NaiveDate> {
        self.format
            .parse(text, &self.settings.format, self.settings.format_strict)
    }

    fn lead(&self) -> CalendarView {
        self.calendars
            .first()
            .copied()
            .unwrap_or_else(|| CalendarView::of(self.clock.today()))
    }

    /// First day of the lead panel through the last day of the last panel.
    pub fn visible_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.calendars.first()?.first_day()?;
        let last = self.calendars.last()?.last_day()?;
        Some((first, last))
    }

    pub fn is_visible(&self, date: NaiveDate) -> bool {
        self.visible_span()
            .is_some_and(|(first, last)| first <= date && date <= last)
    }

    // ---- navigation ----

    /// Bring `date` into view. Leaves the panels alone when it is already
    /// visible; otherwise restarts from the month of `date`, placed last
    /// when the main calendar is anchored right.
    pub fn goto_date(&mut self, date: NaiveDate) {
        if !self.is_visible(date) {
            let mut lead = CalendarView::of(date);
            if self.settings.main_calendar == MainCalendar::Right {
                lead = lead.offset(1 - self.settings.number_of_months as i32);
            }
            log::debug!("Resetting view to {} for {}", lead, date);
            self.calendars = vec![lead];
        }
        self.adjust_calendars();
    }

    /// Put `month` (0-based, may overflow) of the lead panel's year first.
    pub fn goto_month(&mut self, month: i32) {
        let lead = self.lead();
        self.set_lead(CalendarView::new(lead.year, month));
    }

    pub fn goto_year(&mut self, year: i32) {
        let lead = self.lead();
        self.set_lead(CalendarView::new(year, lead.month as i32));
    }

    pub fn goto_today(&mut self) {
        let today = self.clock.today();
        self.goto_date(today);
    }

    pub fn next_month(&mut self) {
        self.set_lead(self.lead().offset(1));
    }

    pub fn prev_month(&mut self) {
        self.set_lead(self.lead().offset(-1));
    }

    pub fn can_go_prev(&self) -> bool {
        self.lead() > self.settings.min_view()
    }

    pub fn can_go_next(&self) -> bool {
        self.calendars
            .last()
            .is_some_and(|last| *last < self.settings.max_view())
    }

    fn set_lead(&mut self, lead: CalendarView) {
        self.calendars = vec![lead];
        self.adjust_calendars();
    }

    /// Re-derive every panel from the lead panel and redraw.
    fn adjust_calendars(&mut self) {
        let lead = self.lead();
        self.calendars = (0..self.settings.number_of_months)
            .map(|c| lead.offset(c as i32))
            .collect();
        self.draw(false);
    }

    // ---- selection ----

    /// Select a date and fire `on_select`.
    ///
    /// Blank values clear the selection. Unparseable text is ignored.
    /// Dates outside `[min_date, max_date]` are clamped.
    pub fn set_date<'a>(&mut self, value: impl Into<DateValue<'a>>) {
        self.apply_date(value.into(), false);
    }

    /// Like [`set_date`](Self::set_date) without firing `on_select`.
    pub fn set_date_silently<'a>(&mut self, value: impl Into<DateValue<'a>>) {
        self.apply_date(value.into(), true);
    }

    fn apply_date(&mut self, value: DateValue<'_>, prevent_on_select: bool) {
        let date = match value {
            DateValue::Empty => return self.clear_date(),
            DateValue::Text(text) if text.trim().is_empty() => return self.clear_date(),
            DateValue::Date(date) => date,
            DateValue::DateTime(date_time) => date_time.date(),
            DateValue::Text(text) => match self.parse(text) {
                Ok(date) => date,
                Err(err) => {
                    log::debug!("Ignoring date input: {}", err);
                    return;
                }
            },
        };

        let clamped = self.settings.clamp(date);
        if clamped != date {
            log::debug!("Clamped {} to {}", date, clamped);
        }

        self.date = Some(clamped);
        self.goto_date(clamped);

        if !prevent_on_select {
            self.hooks.on_select(clamped);
        }
    }

    fn clear_date(&mut self) {
        self.date = None;
        self.draw(false);
    }

    /// Move the selection by a number of days, starting from today when
    /// nothing is selected.
    pub fn adjust_date(&mut self, days: i64) {
        let base = self.date.unwrap_or_else(|| self.clock.today());
        self.set_date(shift_days(base, days));
    }

    /// Format the selected date with an explicit pattern; empty when nothing
    /// is selected.
    pub fn format_with(&self, pattern: &str) -> String {
        self.date
            .map(|date| self.format.format(date, pattern))
            .unwrap_or_default()
    }

    /// Write the formatted selection back to the bound input.
    pub fn set_input_value(&mut self) {
        self.input_value = self.to_string();
    }

    /// The user edited the bound input. Parsed text selects its date;
    /// anything else leaves the selection untouched.
    pub fn handle_input_change(&mut self, text: &str) {
        self.input_value = text.to_string();
        match self.parse(text) {
            Ok(date) => self.set_date(date),
            Err(err) => log::debug!("Input change not applied: {}", err),
        }
    }

    // ---- lifecycle ----

    /// Returns `false` when already open.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }

        self.is_open = true;
        self.hooks.on_open();
        self.draw(false);
        true
    }

    /// Returns `false` when already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }

        self.is_open = false;
        self.hooks.on_close();
        true
    }

    fn finish_selection(&mut self) {
        self.set_input_value();
        self.close();
    }

    // ---- events ----

    /// Apply a user action; returns whether it changed anything.
    pub fn handle_action(&mut self, action: PickerAction) -> bool {
        match action {
            PickerAction::SelectDay(date) => {
                if !self.is_open || !self.is_selectable(date) {
                    log::debug!("Ignoring click on {}", date);
                    return false;
                }
                self.set_date(date);
                true
            }
            PickerAction::PrevMonth => {
                if !self.is_open || !self.can_go_prev() {
                    return false;
                }
                self.prev_month();
                true
            }
            PickerAction::NextMonth => {
                if !self.is_open || !self.can_go_next() {
                    return false;
                }
                self.next_month();
                true
            }
            PickerAction::SelectMonth(month) => {
                if !self.is_open {
                    return false;
                }
                self.goto_month(month);
                true
            }
            PickerAction::SelectYear(year) => {
                if !self.is_open {
                    return false;
                }
                self.goto_year(year);
                true
            }
            PickerAction::Today => {
                let today = self.clock.today();
                self.set_date_silently(today);
                self.finish_selection();
                true
            }
            PickerAction::Clear => {
                self.date = None;
                self.finish_selection();
                true
            }
            PickerAction::Done => {
                self.finish_selection();
                true
            }
            PickerAction::Dismiss => self.close(),
        }
    }

    /// Enter opens a closed picker. While open, arrows move the selection
    /// by a day or a week, Enter confirms and Escape closes.
    pub fn handle_key(&mut self, key: PickerKey) -> bool {
        if !self.is_open {
            return key == PickerKey::Enter && self.open();
        }

        match key {
            PickerKey::Left => self.adjust_date(-1),
            PickerKey::Right => self.adjust_date(1),
            PickerKey::Up => self.adjust_date(-7),
            PickerKey::Down => self.adjust_date(7),
            PickerKey::Enter => return self.handle_action(PickerAction::Done),
            PickerKey::Escape => return self.close(),
        }
        true
    }

    /// Whether a click on `date` would select it in the current panels.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.grids()
            .iter()
            .filter_map(|grid| grid.find(date))
            .any(|cell| cell.is_selectable())
    }

    // ---- drawing ----

    fn grids(&self) -> Vec<MonthGrid> {
        let hooks = &self.hooks;
        let is_day_disabled = |date: NaiveDate| hooks.is_day_disabled(date);
        let ctx = GridContext {
            settings: &self.settings,
            selected: self.date,
            today: self.clock.today(),
            is_day_disabled: &is_day_disabled,
        };
        self.calendars
            .iter()
            .map(|view| build_month_grid(*view, &ctx))
            .collect()
    }

    /// Generate the full frame for the current state without firing hooks.
    pub fn frame(&self) -> DrawFrame {
        let lead_year = self.lead().year;
        let panels = self
            .calendars
            .iter()
            .zip(self.grids())
            .enumerate()
            .map(|(c, (view, grid))| Panel {
                view: *view,
                title: build_title(&self.settings, c, *view, lead_year),
                grid,
            })
            .collect();

        DrawFrame {
            date_display: self.date_display(),
            header: weekday_header(&self.settings),
            panels,
            is_rtl: self.settings.is_rtl,
        }
    }

    /// Regenerate every visible panel and fire `on_draw`. Does nothing while
    /// closed unless `force` is set.
    pub fn draw(&mut self, force: bool) -> Option<DrawFrame> {
        if !self.is_open && !force {
            return None;
        }

        let frame = self.frame();
        self.hooks.on_draw(&frame);
        Some(frame)
    }

    pub fn date_display(&self) -> DateDisplay {
        let date = self.date.unwrap_or_else(|| self.clock.today());
        let labels = &self.settings.labels;
        DateDisplay {
            year_text: date.year().to_string(),
            date_text: format!(
                "{}, {} {}",
                labels.weekdays_short[date.weekday().num_days_from_sunday() as usize],
                labels.months_short[date.month0() as usize],
                date.day()
            ),
        }
    }
}

/// The selection in the configured format, or an empty string.
impl fmt::Display for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&self.settings.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::strategy::{FixedClock, MockPickerHooks};
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(ymd(2025, 6, 18))
    }

    fn picker(settings: PickerSettings) -> DatePicker {
        DatePicker::builder(settings).clock(clock()).build().unwrap()
    }

    /// Hooks that accept any number of draws and never disable days.
    fn quiet_hooks() -> MockPickerHooks {
        let mut hooks = MockPickerHooks::new();
        hooks.expect_on_draw().returning(|_| ());
        hooks.expect_is_day_disabled().return_const(false);
        hooks
    }

    #[test]
    fn test_starts_closed_on_today() {
        let p = picker(PickerSettings::default());
        assert!(!p.is_open());
        assert_eq!(p.date(), None);
        assert_eq!(p.calendars(), &[CalendarView::new(2025, 5)]);
        assert_eq!(p.to_string(), "");
    }

    #[test]
    fn test_initial_date_from_input_is_selected() {
        let p = DatePicker::builder(PickerSettings::default())
            .input_value("2024-02-29")
            .clock(clock())
            .build()
            .unwrap();
        assert_eq!(p.date(), Some(ymd(2024, 2, 29)));
        assert_eq!(p.calendars(), &[CalendarView::new(2024, 1)]);
    }

    #[test]
    fn test_default_date_without_selecting() {
        let settings = PickerSettings {
            default_date: Some(ymd(2023, 3, 4)),
            ..Default::default()
        };
        let p = picker(settings);
        assert_eq!(p.date(), None);
        assert_eq!(p.calendars(), &[CalendarView::new(2023, 2)]);
    }

    #[test]
    fn test_default_date_selected_silently_and_clamped() {
        let mut hooks = quiet_hooks();
        hooks.expect_on_select().never();

        let p = DatePicker::builder(PickerSettings {
            default_date: Some(ymd(2019, 5, 1)),
            set_default_date: true,
            min_date: Some(ymd(2020, 1, 1)),
            ..Default::default()
        })
        .clock(clock())
        .hooks(hooks)
        .build()
        .unwrap();

        assert_eq!(p.date(), Some(ymd(2020, 1, 1)));
        assert_eq!(p.calendars(), &[CalendarView::new(2020, 0)]);
    }

    #[test]
    fn test_build_rejects_invalid_settings() {
        let settings = PickerSettings {
            number_of_months: 0,
            ..Default::default()
        };
        assert!(DatePicker::new(settings).is_err());
    }

    #[test]
    fn test_set_date_clamps_to_bounds() {
        let mut p = picker(PickerSettings {
            min_date: Some(ymd(2020, 1, 1)),
            max_date: Some(ymd(2020, 12, 31)),
            ..Default::default()
        });

        p.set_date(ymd(2019, 5, 1));
        assert_eq!(p.date(), Some(ymd(2020, 1, 1)));

        p.set_date(ymd(2021, 1, 1));
        assert_eq!(p.date(), Some(ymd(2020, 12, 31)));
        assert_eq!(p.calendars(), &[CalendarView::new(2020, 11)]);
    }

    #[test]
    fn test_invalid_text_is_ignored_and_blank_clears() {
        let mut p = picker(PickerSettings::default());
        p.set_date("2025-03-09");
        assert_eq!(p.date(), Some(ymd(2025, 3, 9)));

        p.set_date("03/09/2025 nonsense");
        assert_eq!(p.date(), Some(ymd(2025, 3, 9)));

        p.set_date("  ");
        assert_eq!(p.date(), None);
    }

    #[test]
    fn test_date_time_is_truncated() {
        let mut p = picker(PickerSettings::default());
        let dt = ymd(2025, 3, 9).and_hms_opt(17, 30, 0).unwrap();
        p.set_date(dt);
        assert_eq!(p.date(), Some(ymd(2025, 3, 9)));
    }

    #[test]
    fn test_on_select_fires_unless_silent() {
        let mut hooks = quiet_hooks();
        hooks
            .expect_on_select()
            .withf(|date| *date == NaiveDate::from_ymd_opt(2025, 7, 4).unwrap())
            .times(1)
            .return_const(());

        let mut p = DatePicker::builder(PickerSettings::default())
            .clock(clock())
            .hooks(hooks)
            .build()
            .unwrap();

        p.set_date_silently(ymd(2025, 7, 1));
        p.set_date(ymd(2025, 7, 4));
    }

    #[test]
    fn test_goto_date_keeps_multi_month_span() {
        let mut p = picker(PickerSettings {
            number_of_months: 3,
            ..Default::default()
        });
        p.goto_date(ymd(2025, 1, 15));
        let span = vec![
            CalendarView::new(2025, 0),
            CalendarView::new(2025, 1),
            CalendarView::new(2025, 2),
        ];
        assert_eq!(p.calendars(), span.as_slice());

        p.goto_date(ymd(2025, 3, 31));
        assert_eq!(p.calendars(), span.as_slice());

        p.goto_date(ymd(2025, 4, 1));
        assert_eq!(p.calendars()[0], CalendarView::new(2025, 3));
        assert_eq!(p.calendars().len(), 3);
    }

    #[test]
    fn test_goto_date_anchored_right() {
        let mut p = picker(PickerSettings {
            number_of_months: 2,
            main_calendar: MainCalendar::Right,
            ..Default::default()
        });
        p.goto_date(ymd(2025, 1, 15));
        assert_eq!(
            p.calendars(),
            &[CalendarView::new(2024, 11), CalendarView::new(2025, 0)]
        );
    }

    #[test]
    fn test_month_navigation_rolls_year() {
        let mut p = picker(PickerSettings {
            number_of_months: 2,
            ..Default::default()
        });
        p.goto_date(ymd(2024, 11, 5));
        p.next_month();
        assert_eq!(
            p.calendars(),
            &[CalendarView::new(2024, 11), CalendarView::new(2025, 0)]
        );

        p.goto_date(ymd(2024, 1, 5));
        p.prev_month();
        assert_eq!(p.calendars()[0], CalendarView::new(2023, 11));

        p.goto_month(14);
        assert_eq!(p.calendars()[0], CalendarView::new(2024, 2));

        p.goto_year(1999);
        assert_eq!(p.calendars()[0], CalendarView::new(1999, 2));
    }

    #[test]
    fn test_open_close_are_idempotent() {
        let mut hooks = quiet_hooks();
        hooks.expect_on_open().times(1).return_const(());
        hooks.expect_on_close().times(1).return_const(());

        let mut p = DatePicker::builder(PickerSettings::default())
            .clock(clock())
            .hooks(hooks)
            .build()
            .unwrap();

        assert!(p.open());
        assert!(!p.open());
        assert!(p.is_open());
        assert!(p.close());
        assert!(!p.close());
    }

    #[test]
    fn test_draw_only_while_open() {
        let mut hooks = MockPickerHooks::new();
        hooks.expect_is_day_disabled().return_const(false);
        hooks.expect_on_open().return_const(());
        hooks.expect_on_draw().times(2).returning(|_| ());

        let mut p = DatePicker::builder(PickerSettings::default())
            .clock(clock())
            .hooks(hooks)
            .build()
            .unwrap();

        assert!(p.draw(false).is_none());
        // open draws once, the forced draw once more
        p.open();
        let frame = p.draw(true).unwrap();
        assert_eq!(frame.panels.len(), 1);
        assert_eq!(frame.date_display.date_text, "Wed, Jun 18");
    }

    #[test]
    fn test_hook_disabled_day_cannot_be_clicked() {
        let mut hooks = MockPickerHooks::new();
        hooks.expect_on_draw().returning(|_| ());
        hooks.expect_on_open().return_const(());
        hooks
            .expect_is_day_disabled()
            .returning(|date| date.day() == 13);
        hooks.expect_on_select().times(1).return_const(());

        let mut p = DatePicker::builder(PickerSettings::default())
            .clock(clock())
            .hooks(hooks)
            .build()
            .unwrap();

        assert!(!p.handle_action(PickerAction::SelectDay(ymd(2025, 6, 12))));
        p.open();
        assert!(!p.handle_action(PickerAction::SelectDay(ymd(2025, 6, 13))));
        assert!(p.handle_action(PickerAction::SelectDay(ymd(2025, 6, 12))));
        assert_eq!(p.date(), Some(ymd(2025, 6, 12)));
    }

    #[test]
    fn test_placeholder_days_cannot_be_clicked() {
        let mut p = picker(PickerSettings::default());
        p.open();
        // 1 July is a trailing placeholder of the June panel
        assert!(!p.handle_action(PickerAction::SelectDay(ymd(2025, 7, 1))));
        assert_eq!(p.date(), None);
    }

    #[test]
    fn test_adjoining_day_click_when_enabled() {
        let mut p = picker(PickerSettings {
            show_days_in_next_and_previous_months: true,
            enable_selection_days_in_next_and_previous_months: true,
            ..Default::default()
        });
        p.open();
        // 1 July trails the June panel
        assert!(p.handle_action(PickerAction::SelectDay(ymd(2025, 7, 1))));
        assert_eq!(p.date(), Some(ymd(2025, 7, 1)));
        assert_eq!(p.calendars(), &[CalendarView::new(2025, 6)]);
    }

    #[test]
    fn test_goto_today_returns_to_current_month() {
        let mut p = picker(PickerSettings {
            number_of_months: 2,
            ..Default::default()
        });
        p.goto_date(ymd(2024, 1, 10));
        assert_eq!(p.calendars()[0], CalendarView::new(2024, 0));

        p.goto_today();
        assert_eq!(
            p.calendars(),
            &[CalendarView::new(2025, 5), CalendarView::new(2025, 6)]
        );
        assert_eq!(p.date(), None);
    }

    #[test]
    fn test_nav_buttons_respect_bounds() {
        let mut p = picker(PickerSettings {
            min_date: Some(ymd(2025, 6, 1)),
            max_date: Some(ymd(2025, 7, 31)),
            ..Default::default()
        });
        p.open();
        assert!(!p.handle_action(PickerAction::PrevMonth));
        assert!(p.handle_action(PickerAction::NextMonth));
        assert_eq!(p.calendars()[0], CalendarView::new(2025, 6));
        assert!(!p.handle_action(PickerAction::NextMonth));
    }

    #[test]
    fn test_footer_buttons_write_input_and_close() {
        let mut p = picker(PickerSettings::default());

        p.open();
        assert!(p.handle_action(PickerAction::Today));
        assert_eq!(p.date(), Some(ymd(2025, 6, 18)));
        assert_eq!(p.input_value(), "2025-06-18");
        assert!(!p.is_open());

        p.open();
        p.handle_action(PickerAction::Clear);
        assert_eq!(p.date(), None);
        assert_eq!(p.input_value(), "");
        assert!(!p.is_open());

        p.open();
        p.set_date(ymd(2025, 6, 20));
        p.handle_action(PickerAction::Done);
        assert_eq!(p.input_value(), "2025-06-20");
        assert!(!p.is_open());
    }

    #[test]
    fn test_keyboard() {
        let mut p = picker(PickerSettings::default());
        assert!(!p.handle_key(PickerKey::Left));
        assert!(p.handle_key(PickerKey::Enter));
        assert!(p.is_open());

        p.handle_key(PickerKey::Right);
        assert_eq!(p.date(), Some(ymd(2025, 6, 19)));
        p.handle_key(PickerKey::Down);
        assert_eq!(p.date(), Some(ymd(2025, 6, 26)));
        p.handle_key(PickerKey::Down);
        assert_eq!(p.date(), Some(ymd(2025, 7, 3)));
        assert_eq!(p.calendars()[0], CalendarView::new(2025, 6));
        p.handle_key(PickerKey::Up);
        p.handle_key(PickerKey::Left);
        assert_eq!(p.date(), Some(ymd(2025, 6, 25)));

        assert!(p.handle_key(PickerKey::Enter));
        assert!(!p.is_open());
        assert_eq!(p.input_value(), "2025-06-25");
    }

    #[test]
    fn test_input_change() {
        let mut p = picker(PickerSettings {
            format: "DD.MM.YYYY".to_string(),
            format_strict: true,
            ..Default::default()
        });
        p.handle_input_change("24.12.2025");
        assert_eq!(p.date(), Some(ymd(2025, 12, 24)));
        assert_eq!(p.to_string(), "24.12.2025");

        p.handle_input_change("2025-12-25");
        assert_eq!(p.date(), Some(ymd(2025, 12, 24)));
        assert_eq!(p.input_value(), "2025-12-25");
        assert_eq!(p.format_with("D MMMM"), "24 December");
    }
}
