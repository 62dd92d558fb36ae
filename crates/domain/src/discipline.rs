// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Discipline score calculation.
//!
//! The final score is a fixed weighted sum of four percentages. Inputs are
//! not clamped: values outside 0-100 flow through the arithmetic unchanged.

use serde::Serialize;

/// Weight of daily attendance.
pub const ATTENDANCE_WEIGHT: f64 = 0.25;
/// Weight of assembly attendance.
pub const ASSEMBLY_WEIGHT: f64 = 0.15;
/// Weight of daily log completion.
pub const DAILY_LOG_WEIGHT: f64 = 0.20;
/// Weight of report timeliness.
pub const REPORT_WEIGHT: f64 = 0.40;

/// Computes the weighted discipline score.
#[must_use]
pub fn final_score(attendance: f64, assembly: f64, daily_log: f64, report: f64) -> f64 {
    attendance.mul_add(
        ATTENDANCE_WEIGHT,
        assembly.mul_add(
            ASSEMBLY_WEIGHT,
            daily_log.mul_add(DAILY_LOG_WEIGHT, report * REPORT_WEIGHT),
        ),
    )
}

/// An employee's discipline metrics.
///
/// The final score is derived in the constructor and cannot be set on its own.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DisciplineScore {
    attendance: f64,
    assembly: f64,
    daily_log: f64,
    report: f64,
    #[serde(rename = "final")]
    final_score: f64,
}

impl DisciplineScore {
    /// Creates a score from its four components.
    #[must_use]
    pub fn new(attendance: f64, assembly: f64, daily_log: f64, report: f64) -> Self {
        Self {
            attendance,
            assembly,
            daily_log,
            report,
            final_score: final_score(attendance, assembly, daily_log, report),
        }
    }

    /// Daily attendance percentage.
    #[must_use]
    pub const fn attendance(&self) -> f64 {
        self.attendance
    }

    /// Assembly attendance percentage.
    #[must_use]
    pub const fn assembly(&self) -> f64 {
        self.assembly
    }

    /// Daily log completion percentage.
    #[must_use]
    pub const fn daily_log(&self) -> f64 {
        self.daily_log
    }

    /// Report timeliness percentage.
    #[must_use]
    pub const fn report(&self) -> f64 {
        self.report
    }

    /// The weighted final score.
    #[must_use]
    pub const fn final_score(&self) -> f64 {
        self.final_score
    }

    /// The bucket the final score falls into.
    #[must_use]
    pub fn category(&self) -> DisciplineCategory {
        DisciplineCategory::from_score(self.final_score)
    }
}

/// Dashboard buckets for the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisciplineCategory {
    /// Above 90.
    Excellent,
    /// 75 up to and including 90.
    Good,
    /// 60 up to 75.
    Fair,
    /// Below 60.
    Poor,
}

impl DisciplineCategory {
    /// All categories, best first.
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    /// Buckets a final score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 90.0 {
            Self::Excellent
        } else if score >= 75.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Returns the dashboard label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Sangat Baik",
            Self::Good => "Baik",
            Self::Fair => "Cukup",
            Self::Poor => "Kurang",
        }
    }
}
