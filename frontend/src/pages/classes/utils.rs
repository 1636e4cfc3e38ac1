use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::api::DirectedClass;
use crate::state::reservations::ReserveOutcome;

pub const CLASSES_LOAD_ERROR: &str =
    "Error al cargar las clases. Por favor, intente de nuevo más tarde.";
pub const DAY_LOAD_ERROR: &str = "Error al cargar las clases para este día.";

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

/// Days that have at least one class; classes without a day are skipped.
pub fn marked_days(classes: &[DirectedClass]) -> BTreeSet<NaiveDate> {
    classes.iter().filter_map(|class| class.day).collect()
}

/// `None` when `day` is already selected, so re-clicking does not refetch.
pub fn next_selection(current: Option<NaiveDate>, day: NaiveDate) -> Option<NaiveDate> {
    (current != Some(day)).then_some(day)
}

pub fn duration_label(minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) if minutes > 0 => format!("Duración: {} minutos", minutes),
        _ => "Duración: ? minutos".to_string(),
    }
}

/// e.g. "martes, 1 de abril de 2025".
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                month: self.month + 1,
                ..self
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                month: self.month - 1,
                ..self
            }
        }
    }

    pub fn title(self) -> String {
        let name = MONTHS[(self.month.clamp(1, 12) - 1) as usize];
        format!("{} {}", name, self.year)
    }

    /// Monday-first weeks; cells outside the month are `None`.
    pub fn weeks(self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = self.first_day() else {
            return Vec::new();
        };
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut day = first;
        while day.month() == self.month {
            let col = day.weekday().num_days_from_monday() as usize;
            week[col] = Some(day);
            if col == 6 {
                weeks.push(week);
                week = [None; 7];
            }
            day += Duration::days(1);
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }
        weeks
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingFeedback {
    Success(String),
    Error { title: String, message: String },
}

pub fn booking_feedback(outcome: &ReserveOutcome) -> BookingFeedback {
    match outcome {
        ReserveOutcome::Reserved(_) => BookingFeedback::Success(outcome.message()),
        ReserveOutcome::Duplicate => BookingFeedback::Error {
            title: "Reserva Duplicada".into(),
            message: outcome.message(),
        },
        ReserveOutcome::Busy | ReserveOutcome::Failed(_) => BookingFeedback::Error {
            title: "Error".into(),
            message: outcome.message(),
        },
    }
}
