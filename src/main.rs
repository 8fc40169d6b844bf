// Clinic Calendar
// Main entry point: prints the current view and today's schedule

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use clinic_calendar::models::ui::ViewType;
use clinic_calendar::services::appointment::persistence::load_snapshot;
use clinic_calendar::services::appointment::AppointmentStore;
use clinic_calendar::services::calendar::{CalendarConfig, CalendarController};
use clinic_calendar::services::settings::SettingsService;
use clinic_calendar::utils::clock::{Clock, SystemClock};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Clinic Calendar");

    let settings_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(SettingsService::default_path);
    let settings_service = SettingsService::new(settings_path);
    let settings = settings_service.get()?;

    let config = CalendarConfig::from_settings(&settings).context("Invalid working hours")?;
    let snapshot = load_snapshot(&settings_service.appointments_path())?;
    let calendar = CalendarController::new(SystemClock, config)
        .with_store(AppointmentStore::from_snapshot(snapshot));

    print_grid(&calendar);
    print_schedule(&calendar, calendar.today())?;

    Ok(())
}

fn print_grid<C: Clock>(calendar: &CalendarController<C>) {
    let grid = calendar.grid();
    println!(
        "{} view around {}",
        grid.view,
        grid.anchor.format("%B %-d, %Y")
    );

    for week in &grid.weeks {
        let row: Vec<String> = week.iter().map(|date| cell(calendar, *date)).collect();
        println!("{}", row.join(" "));
    }
    println!();
}

fn cell<C: Clock>(calendar: &CalendarController<C>, date: NaiveDate) -> String {
    let booked = calendar.store().on_date(date).len();
    let marker = if calendar.is_today(date) {
        '*'
    } else if calendar.current_view() == ViewType::Month && !calendar.is_current_month(date) {
        '.'
    } else {
        ' '
    };

    match booked {
        0 => format!("{}{:>2}   ", marker, date.day()),
        n => format!("{}{:>2}({})", marker, date.day(), n.min(9)),
    }
}

fn print_schedule<C: Clock>(calendar: &CalendarController<C>, date: NaiveDate) -> Result<()> {
    let slots = calendar.slots_for(date)?;
    if slots.is_empty() {
        println!("{}: closed", date.format("%A %Y-%m-%d"));
        return Ok(());
    }

    println!("{}", date.format("%A %Y-%m-%d"));
    for slot in slots {
        if slot.is_break() {
            println!(
                "  {} - {}  [{}]",
                slot.start.format("%H:%M"),
                slot.end.format("%H:%M"),
                slot.label
            );
            continue;
        }

        let booked = calendar.appointments_for_cell(date, slot.start);
        match booked.first() {
            Some(appointment) => println!("  {}  {}", slot.label, appointment.title),
            None => println!("  {}  free", slot.label),
        }
    }

    Ok(())
}
