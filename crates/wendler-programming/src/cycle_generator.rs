// ABOUTME: Cycle generator - builds the four-week, two-day cycle of workouts
// ABOUTME: Validates the day split and computes each week's calendar range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cycle Generator
//!
//! Produces a complete [`Cycle`] from four training maxes and a day split.
//! It knows nothing about other cycles: deactivating a previous active cycle
//! is the persistence layer's job.

use std::num::NonZeroU32;

use chrono::{Duration, NaiveDate};
use tracing::{info, warn};
use wendler_core::constants::cycle::{
    DAYS_PER_CALENDAR_WEEK, DAYS_PER_WEEK, MOVEMENTS_PER_DAY, WEEKS_PER_CYCLE,
};
use wendler_core::constants::formats::WEEK_LABEL_DATE_FORMAT;
use wendler_core::models::{Cycle, Movement, TrainingMaxSet, WeekDateRange, WorkoutSchedule};
use wendler_core::{ProgramError, ProgramResult};

use crate::config::ProgramConfig;
use crate::schedule::validate_week;
use crate::workout_generator::WorkoutGenerator;

fn day_pair(day: u8, movements: &[Movement]) -> ProgramResult<[Movement; 2]> {
    match *movements {
        [first, second] if first == second => Err(ProgramError::invalid_schedule(format!(
            "day {day} lists {first} twice; pick two distinct movements"
        ))),
        [first, second] => Ok([first, second]),
        _ => Err(ProgramError::invalid_schedule(format!(
            "day {day} must have exactly {MOVEMENTS_PER_DAY} movements, got {}",
            movements.len()
        ))),
    }
}

/// Check a two-day split and turn it into a schedule
///
/// Each day needs two distinct movements, and together the days must cover
/// all four movements exactly once.
///
/// # Errors
///
/// Returns `ProgramError::InvalidScheduleAssignment` describing the first violation
pub fn validate_schedule(
    day1_movements: &[Movement],
    day2_movements: &[Movement],
) -> ProgramResult<WorkoutSchedule> {
    let schedule = check_split(day1_movements, day2_movements)?;
    for (day, movements) in schedule.days() {
        if movements.contains(&Movement::Squat) && movements.contains(&Movement::Deadlift) {
            warn!(day, "Squat and deadlift share a day; splitting them across days is recommended");
        }
    }
    Ok(schedule)
}

fn check_split(
    day1_movements: &[Movement],
    day2_movements: &[Movement],
) -> ProgramResult<WorkoutSchedule> {
    let day1 = day_pair(1, day1_movements)?;
    let day2 = day_pair(2, day2_movements)?;

    if let Some(shared) = day1.iter().find(|movement| day2.contains(movement)) {
        return Err(ProgramError::invalid_schedule(format!(
            "{shared} is assigned to both days"
        )));
    }
    if let Some(missing) = Movement::ALL
        .iter()
        .find(|movement| !day1.contains(movement) && !day2.contains(movement))
    {
        return Err(ProgramError::invalid_schedule(format!(
            "{missing} is not assigned to any day"
        )));
    }

    Ok(WorkoutSchedule {
        day1_movements: day1,
        day2_movements: day2,
    })
}

/// Check that a cycle built elsewhere has the shape this generator produces
///
/// Used on cycles read back from storage before they are mutated: a valid
/// split, complete training maxes, one workout per week and day whose
/// movements match the split and carry sets, and a date range per week.
///
/// # Errors
///
/// - `ProgramError::InvalidWeek` for a workout or date range outside weeks 1-4
/// - `ProgramError::MissingTrainingMax` if a training max is missing
/// - `ProgramError::InvalidScheduleAssignment` for any other mismatch
pub fn validate_cycle(cycle: &Cycle) -> ProgramResult<()> {
    let schedule = check_split(
        &cycle.schedule.day1_movements,
        &cycle.schedule.day2_movements,
    )?;
    cycle.training_maxes.ensure_complete()?;

    let expected = usize::from(WEEKS_PER_CYCLE) * usize::from(DAYS_PER_WEEK);
    if cycle.workouts.len() != expected {
        return Err(ProgramError::invalid_schedule(format!(
            "cycle has {} workouts, expected {expected}",
            cycle.workouts.len()
        )));
    }

    for (index, workout) in cycle.workouts.iter().enumerate() {
        let (week, day) = (validate_week(workout.week)?, workout.day);
        if !(1..=DAYS_PER_WEEK).contains(&day) {
            return Err(ProgramError::invalid_schedule(format!(
                "week {week} has a workout on day {day}; expected 1-{DAYS_PER_WEEK}"
            )));
        }
        if cycle.workouts[..index]
            .iter()
            .any(|earlier| earlier.week == week && earlier.day == day)
        {
            return Err(ProgramError::invalid_schedule(format!(
                "week {week} day {day} appears more than once"
            )));
        }
        let [first, second] = workout.movements[..] else {
            return Err(ProgramError::invalid_schedule(format!(
                "week {week} day {day} has {} movements, expected {MOVEMENTS_PER_DAY}",
                workout.movements.len()
            )));
        };
        if first == second {
            return Err(ProgramError::invalid_schedule(format!(
                "week {week} day {day} lists {first} twice"
            )));
        }
        for movement in [first, second] {
            if schedule.day_of(movement) != Some(day) {
                return Err(ProgramError::invalid_schedule(format!(
                    "week {week} day {day} lists {movement}, which the split trains on another day"
                )));
            }
            if workout.sets_for(movement).map_or(0, <[_]>::len) == 0 {
                return Err(ProgramError::invalid_schedule(format!(
                    "week {week} day {day} has no sets for {movement}"
                )));
            }
        }
    }

    for range in &cycle.week_dates {
        validate_week(range.week)?;
    }
    if let Some(week) = (1..=WEEKS_PER_CYCLE).find(|&week| cycle.week_range(week).is_none()) {
        return Err(ProgramError::invalid_schedule(format!(
            "cycle has no date range for week {week}"
        )));
    }
    Ok(())
}

/// Calendar range of every week of a cycle starting on `start_date`
#[must_use]
pub fn week_dates(start_date: NaiveDate) -> Vec<WeekDateRange> {
    (1..=WEEKS_PER_CYCLE)
        .map(|week| {
            let start = start_date + Duration::days(i64::from(week - 1) * DAYS_PER_CALENDAR_WEEK);
            let end = start + Duration::days(DAYS_PER_CALENDAR_WEEK - 1);
            WeekDateRange {
                week,
                start_date: start,
                end_date: end,
                start_label: start.format(WEEK_LABEL_DATE_FORMAT).to_string(),
                end_label: end.format(WEEK_LABEL_DATE_FORMAT).to_string(),
            }
        })
        .collect()
}

/// Builds complete cycles
#[derive(Debug, Clone, Copy)]
pub struct CycleGenerator<'a> {
    workouts: WorkoutGenerator<'a>,
}

impl<'a> CycleGenerator<'a> {
    /// Create a generator over a configuration
    #[must_use]
    pub const fn new(config: &'a ProgramConfig) -> Self {
        Self {
            workouts: WorkoutGenerator::new(config),
        }
    }

    /// Create an active cycle from training maxes and a two-day split
    ///
    /// # Errors
    ///
    /// - `ProgramError::InvalidScheduleAssignment` if the split is invalid
    /// - `ProgramError::MissingTrainingMax` if any movement lacks a training max
    pub fn create_cycle(
        &self,
        training_maxes: &TrainingMaxSet,
        day1_movements: &[Movement],
        day2_movements: &[Movement],
        start_date: NaiveDate,
        cycle_number: NonZeroU32,
    ) -> ProgramResult<Cycle> {
        let schedule = validate_schedule(day1_movements, day2_movements)?;
        self.create_cycle_with_schedule(training_maxes, schedule, start_date, cycle_number)
    }

    /// Create an active cycle from an already validated schedule
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::MissingTrainingMax` if any movement lacks a training max
    pub fn create_cycle_with_schedule(
        &self,
        training_maxes: &TrainingMaxSet,
        schedule: WorkoutSchedule,
        start_date: NaiveDate,
        cycle_number: NonZeroU32,
    ) -> ProgramResult<Cycle> {
        training_maxes.ensure_complete()?;

        let mut workouts = Vec::new();
        for week in 1..=WEEKS_PER_CYCLE {
            for (day, movements) in schedule.days() {
                workouts.push(
                    self.workouts
                        .build_workout(training_maxes, week, day, &movements)?,
                );
            }
        }

        info!(
            cycle.number = cycle_number.get(),
            cycle.start = %start_date,
            cycle.workouts = workouts.len(),
            unit = %training_maxes.unit(),
            "Created training cycle"
        );

        Ok(Cycle {
            cycle_number,
            start_date,
            training_maxes: training_maxes.clone(),
            schedule,
            is_active: true,
            workouts,
            week_dates: week_dates(start_date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wendler_core::models::{WeightUnit, WorkoutStatus};

    fn training_maxes() -> TrainingMaxSet {
        TrainingMaxSet::from_maxes(
            WeightUnit::Pounds,
            [
                (Movement::Squat, 300.0),
                (Movement::Bench, 200.0),
                (Movement::Deadlift, 350.0),
                (Movement::OverheadPress, 140.0),
            ],
        )
        .unwrap()
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    #[test]
    fn test_rejects_duplicated_movement_across_days() {
        let result = validate_schedule(
            &[Movement::Squat, Movement::Bench],
            &[Movement::Squat, Movement::Deadlift],
        );
        assert!(matches!(
            result,
            Err(ProgramError::InvalidScheduleAssignment { .. })
        ));
    }

    #[test]
    fn test_rejects_repeated_movement_within_day() {
        let result = validate_schedule(
            &[Movement::Bench, Movement::Bench],
            &[Movement::Squat, Movement::Deadlift],
        );
        assert!(matches!(
            result,
            Err(ProgramError::InvalidScheduleAssignment { .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_day_size() {
        let result = validate_schedule(
            &[Movement::Squat, Movement::Bench, Movement::Deadlift],
            &[Movement::OverheadPress],
        );
        assert_eq!(
            result,
            Err(ProgramError::invalid_schedule(
                "day 1 must have exactly 2 movements, got 3"
            ))
        );
    }

    #[test]
    fn test_squat_and_deadlift_together_is_allowed() {
        assert!(validate_schedule(
            &[Movement::Squat, Movement::Deadlift],
            &[Movement::Bench, Movement::OverheadPress],
        )
        .is_ok());
    }

    #[test]
    fn test_week_dates_are_consecutive_weeks() {
        let ranges = week_dates(start());
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[0].start_date, start());
        assert_eq!(ranges[0].end_date, NaiveDate::from_ymd_opt(2025, 1, 12).unwrap());
        assert_eq!(ranges[3].start_date, NaiveDate::from_ymd_opt(2025, 1, 27).unwrap());
        assert_eq!(ranges[3].end_date, NaiveDate::from_ymd_opt(2025, 2, 2).unwrap());
        assert_eq!(ranges[0].start_label, "Jan 06");
        assert_eq!(ranges[3].end_label, "Feb 02");
    }

    #[test]
    fn test_cycle_has_eight_not_started_workouts() {
        let config = ProgramConfig::default();
        let cycle = CycleGenerator::new(&config)
            .create_cycle(
                &training_maxes(),
                &[Movement::Squat, Movement::Bench],
                &[Movement::Deadlift, Movement::OverheadPress],
                start(),
                NonZeroU32::MIN,
            )
            .unwrap();

        assert!(cycle.is_active);
        assert_eq!(cycle.workouts.len(), 8);
        assert!(cycle
            .workouts
            .iter()
            .all(|w| w.status == WorkoutStatus::NotStarted));
        let order: Vec<(u8, u8)> = cycle.workouts.iter().map(|w| (w.week, w.day)).collect();
        assert_eq!(
            order,
            vec![(1, 1), (1, 2), (2, 1), (2, 2), (3, 1), (3, 2), (4, 1), (4, 2)]
        );
    }

    fn generated() -> Cycle {
        let config = ProgramConfig::default();
        CycleGenerator::new(&config)
            .create_cycle(
                &training_maxes(),
                &[Movement::Squat, Movement::Bench],
                &[Movement::Deadlift, Movement::OverheadPress],
                start(),
                NonZeroU32::MIN,
            )
            .unwrap()
    }

    #[test]
    fn test_generated_cycle_passes_shape_check() {
        assert_eq!(validate_cycle(&generated()), Ok(()));
    }

    #[test]
    fn test_shape_check_rejects_week_out_of_range() {
        let mut cycle = generated();
        cycle.workouts[7].week = 5;
        assert_eq!(
            validate_cycle(&cycle),
            Err(ProgramError::InvalidWeek { week: 5 })
        );
    }

    #[test]
    fn test_shape_check_rejects_wrong_movement_count() {
        let mut cycle = generated();
        cycle.workouts[0].movements.pop();
        assert_eq!(
            validate_cycle(&cycle),
            Err(ProgramError::invalid_schedule(
                "week 1 day 1 has 1 movements, expected 2"
            ))
        );
    }

    #[test]
    fn test_shape_check_rejects_movement_on_wrong_day() {
        let mut cycle = generated();
        cycle.workouts[0].movements = vec![Movement::Squat, Movement::Deadlift];
        assert!(matches!(
            validate_cycle(&cycle),
            Err(ProgramError::InvalidScheduleAssignment { .. })
        ));
    }

    #[test]
    fn test_shape_check_rejects_inconsistent_split() {
        let mut cycle = generated();
        cycle.schedule.day2_movements = [Movement::Squat, Movement::OverheadPress];
        assert_eq!(
            validate_cycle(&cycle),
            Err(ProgramError::invalid_schedule("squat is assigned to both days"))
        );
    }

    #[test]
    fn test_shape_check_rejects_duplicate_slot_and_missing_dates() {
        let mut duplicated = generated();
        duplicated.workouts[1].day = 1;
        assert_eq!(
            validate_cycle(&duplicated),
            Err(ProgramError::invalid_schedule(
                "week 1 day 1 appears more than once"
            ))
        );

        let mut undated = generated();
        undated.week_dates.pop();
        assert_eq!(
            validate_cycle(&undated),
            Err(ProgramError::invalid_schedule(
                "cycle has no date range for week 4"
            ))
        );
    }

    #[test]
    fn test_incomplete_training_maxes_fail() {
        let config = ProgramConfig::default();
        let partial =
            TrainingMaxSet::from_maxes(WeightUnit::Pounds, [(Movement::Squat, 300.0)]).unwrap();
        let result = CycleGenerator::new(&config).create_cycle(
            &partial,
            &[Movement::Squat, Movement::Bench],
            &[Movement::Deadlift, Movement::OverheadPress],
            start(),
            NonZeroU32::MIN,
        );
        assert_eq!(
            result.unwrap_err(),
            ProgramError::MissingTrainingMax {
                movement: Movement::Bench
            }
        );
    }
}
