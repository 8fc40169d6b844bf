//! Calendar view controller.
//!
//! Backs one calendar screen: tracks the active view and anchor date, keeps
//! the rendered grid in sync with them, and routes booking, drag-and-drop and
//! cancellation into the screen's own [`AppointmentStore`].

use chrono::{NaiveDate, NaiveTime, Weekday};

use crate::error::SchedulingError;
use crate::models::appointment::{Appointment, AppointmentId};
use crate::models::settings::Settings;
use crate::models::time_slot::TimeSlot;
use crate::models::ui::ViewType;
use crate::models::working_hours::WorkingHoursConfig;
use crate::services::appointment::{AppointmentSnapshot, AppointmentStore};
use crate::services::booking::{BookingDetails, BookingDialog};
use crate::services::grid::{self, generate_grid, CalendarGrid};
use crate::services::notification::{LogNotifier, Notifier};
use crate::services::slots::{find_slot, generate_slots};
use crate::utils::clock::{Clock, SystemClock};

/// Construction-time configuration for one calendar screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    pub week_start: Weekday,
    pub initial_view: ViewType,
    pub working_hours: WorkingHoursConfig,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            initial_view: ViewType::Month,
            working_hours: WorkingHoursConfig::default(),
        }
    }
}

impl CalendarConfig {
    pub fn from_settings(settings: &Settings) -> Result<Self, SchedulingError> {
        Ok(Self {
            week_start: settings.week_start(),
            initial_view: settings.default_view,
            working_hours: settings.working_hours_config()?,
        })
    }
}

pub struct CalendarController<C: Clock = SystemClock> {
    clock: C,
    notifier: Box<dyn Notifier>,
    store: AppointmentStore,
    working_hours: WorkingHoursConfig,
    week_start: Weekday,
    current_view: ViewType,
    view_date: NaiveDate,
    grid: CalendarGrid,
}

impl<C: Clock> CalendarController<C> {
    /// Start in the configured view, anchored at the clock's today.
    pub fn new(clock: C, config: CalendarConfig) -> Self {
        let view_date = clock.today();
        let grid = generate_grid(view_date, config.initial_view, config.week_start);

        Self {
            clock,
            notifier: Box::new(LogNotifier),
            store: AppointmentStore::new(),
            working_hours: config.working_hours,
            week_start: config.week_start,
            current_view: config.initial_view,
            view_date,
            grid,
        }
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_store(mut self, store: AppointmentStore) -> Self {
        self.store = store;
        self
    }

    pub fn current_view(&self) -> ViewType {
        self.current_view
    }

    pub fn view_date(&self) -> NaiveDate {
        self.view_date
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn working_hours(&self) -> &WorkingHoursConfig {
        &self.working_hours
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        grid::is_today(date, self.clock.today())
    }

    pub fn is_current_month(&self, date: NaiveDate) -> bool {
        grid::is_current_month(date, self.view_date)
    }

    /// Switch by view name. Names other than day/week/month are ignored.
    pub fn switch_to_view(&mut self, view: &str) {
        match view.parse::<ViewType>() {
            Ok(view) => self.set_view(view),
            Err(reason) => log::debug!("Ignoring view switch: {}", reason),
        }
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.current_view = view;
        self.regenerate();
    }

    pub fn previous(&mut self) {
        self.view_date = grid::shift(self.view_date, self.current_view, -1);
        self.regenerate();
    }

    pub fn next(&mut self) {
        self.view_date = grid::shift(self.view_date, self.current_view, 1);
        self.regenerate();
    }

    pub fn go_to_today(&mut self) {
        self.go_to(self.clock.today());
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.view_date = date;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.grid = generate_grid(self.view_date, self.current_view, self.week_start);
    }

    /// Replace the working hours. An invalid config is reported and the
    /// previous one stays in effect.
    pub fn set_working_hours(&mut self, config: WorkingHoursConfig) -> Result<(), SchedulingError> {
        self.report(config.validate())?;
        log::info!(
            "Working hours set to {}-{} in {} minute slots",
            config.start_time.format("%H:%M"),
            config.end_time.format("%H:%M"),
            config.slot_duration_minutes
        );
        self.working_hours = config;
        Ok(())
    }

    pub fn slots_for(&self, date: NaiveDate) -> Result<Vec<TimeSlot>, SchedulingError> {
        self.report(generate_slots(&self.working_hours, date))
    }

    pub fn appointments_for_cell(&self, date: NaiveDate, slot: NaiveTime) -> Vec<&Appointment> {
        self.store.query(date, slot)
    }

    /// Appointments on any date the current grid shows.
    pub fn appointments_in_view(&self) -> Vec<&Appointment> {
        let (start, end) = self.grid.date_range();
        self.store.in_range(start, end)
    }

    /// Book a free, bookable slot. Nothing changes on failure.
    pub fn book(
        &mut self,
        date: NaiveDate,
        slot: NaiveTime,
        details: BookingDetails,
    ) -> Result<AppointmentId, SchedulingError> {
        self.report(self.check_bookable(date, slot))?;

        let appointment = details
            .into_appointment(date, slot)
            .map_err(SchedulingError::InvalidAppointment);
        let appointment = self.report(appointment)?;

        let id = self.store.add(appointment);
        log::info!("Booked appointment {} on {} at {}", id, date, slot.format("%H:%M"));
        Ok(id)
    }

    /// Collect details from `dialog`, then book. A free slot is checked
    /// before the dialog opens; `Ok(None)` means the user cancelled.
    pub fn request_booking(
        &mut self,
        dialog: &mut dyn BookingDialog,
        date: NaiveDate,
        slot: NaiveTime,
    ) -> Result<Option<AppointmentId>, SchedulingError> {
        self.report(self.check_bookable(date, slot))?;

        match dialog.collect(date, slot) {
            Some(details) => self.book(date, slot, details).map(Some),
            None => {
                log::debug!("Booking on {} at {} cancelled", date, slot.format("%H:%M"));
                Ok(None)
            }
        }
    }

    fn check_bookable(&self, date: NaiveDate, slot: NaiveTime) -> Result<(), SchedulingError> {
        let slots = generate_slots(&self.working_hours, date)?;
        match find_slot(&slots, slot) {
            Some(found) if !found.is_break() => {}
            _ => return Err(SchedulingError::SlotNotBookable { date, time: slot }),
        }

        if self.store.is_booked(date, slot) {
            return Err(SchedulingError::SlotAlreadyBooked { date, time: slot });
        }

        Ok(())
    }

    /// Drop a dragged appointment onto a cell. Applied immediately with no
    /// occupancy check, matching a direct move in the store.
    pub fn drop_appointment(
        &mut self,
        id: AppointmentId,
        target_date: NaiveDate,
        target_slot: NaiveTime,
    ) -> Result<(), SchedulingError> {
        self.store.move_to(id, target_date, target_slot)
    }

    pub fn cancel(&mut self, id: AppointmentId) -> Result<Appointment, SchedulingError> {
        let removed = self.store.remove(id)?;
        log::info!("Cancelled appointment {} ({})", id, removed.title);
        Ok(removed)
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AppointmentStore {
        &mut self.store
    }

    pub fn snapshot(&self) -> AppointmentSnapshot {
        self.store.snapshot()
    }

    fn report<T>(&self, result: Result<T, SchedulingError>) -> Result<T, SchedulingError> {
        if let Err(err) = &result {
            self.notifier.notify(&err.to_string());
        }
        result
    }
}
