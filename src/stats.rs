//! Derived statistics and achievement evaluation.
//!
//! Everything in this module is a pure function over a snapshot of the
//! progress collection: no I/O, no clock reads. Where a predicate needs
//! "now" (the speed-learner window) the caller passes it in, which keeps
//! evaluation deterministic and testable.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category, LearningPath, TOTAL_MODULES};
use crate::progress_model::{CompletionStatus, ProgressRecord};

/// Number of records in the given status. Modules with no record at all
/// count as `not_started` only implicitly, by being absent here.
pub fn count_by_status(records: &[ProgressRecord], status: CompletionStatus) -> usize {
    records
        .iter()
        .filter(|r| r.completion_status == status)
        .count()
}

/// Total study time across the collection, in minutes.
pub fn total_time_spent(records: &[ProgressRecord]) -> u64 {
    records.iter().map(|r| r.time_spent_minutes).sum()
}

/// Completed share of `total_module_count`, rounded to a whole percent.
/// Returns 0 when the denominator is 0.
pub fn overall_percentage(records: &[ProgressRecord], total_module_count: usize) -> u8 {
    if total_module_count == 0 {
        return 0;
    }
    let completed = count_by_status(records, CompletionStatus::Completed);
    ((completed as f64 / total_module_count as f64) * 100.0).round() as u8
}

fn completed_in_category(records: &[ProgressRecord], category: Category) -> usize {
    records
        .iter()
        .filter(|r| r.category == category && r.completion_status == CompletionStatus::Completed)
        .count()
}

/// Dashboard overview counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningStats {
    pub total_modules: usize,
    pub completed_modules: usize,
    pub in_progress_modules: usize,
    pub time_spent_minutes: u64,
    pub hours_spent: u64,
    pub overall_percentage: u8,
}

/// Folds the collection into the dashboard overview.
pub fn learning_stats(records: &[ProgressRecord]) -> LearningStats {
    let time_spent_minutes = total_time_spent(records);
    LearningStats {
        total_modules: TOTAL_MODULES,
        completed_modules: count_by_status(records, CompletionStatus::Completed),
        in_progress_modules: count_by_status(records, CompletionStatus::InProgress),
        time_spent_minutes,
        hours_spent: ((time_spent_minutes as f64) / 60.0).round() as u64,
        overall_percentage: overall_percentage(records, TOTAL_MODULES),
    }
}

/// Completed share of a learning path, rounded to a whole percent.
pub fn path_progress(path: &LearningPath, records: &[ProgressRecord]) -> u8 {
    if path.modules.is_empty() {
        return 0;
    }
    let completed = path
        .modules
        .iter()
        .filter(|module_id| {
            records.iter().any(|r| {
                r.module_id == **module_id && r.completion_status == CompletionStatus::Completed
            })
        })
        .count();
    ((completed as f64 / path.modules.len() as f64) * 100.0).round() as u8
}

/// Suggests the next learning path from how many modules are completed:
/// under 5 the beginner path, under 10 intermediate, under 15 advanced,
/// then the case-studies path.
pub fn recommended_path(records: &[ProgressRecord]) -> &'static LearningPath {
    let completed = count_by_status(records, CompletionStatus::Completed);
    let paths = catalog::paths();
    if completed < 5 {
        &paths[0]
    } else if completed < 10 {
        &paths[1]
    } else if completed < 15 {
        &paths[2]
    } else {
        &paths[3]
    }
}

/// The fixed set of unlockable achievements.
///
/// Each variant is an independent predicate over the same collection
/// snapshot; evaluation order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementId {
    FirstSteps,
    FundamentalsMaster,
    ComponentsExpert,
    PatternPro,
    AdvancedArchitect,
    CaseStudyChampion,
    SpeedLearner,
    Completionist,
}

impl AchievementId {
    pub const ALL: [AchievementId; 8] = [
        AchievementId::FirstSteps,
        AchievementId::FundamentalsMaster,
        AchievementId::ComponentsExpert,
        AchievementId::PatternPro,
        AchievementId::AdvancedArchitect,
        AchievementId::CaseStudyChampion,
        AchievementId::SpeedLearner,
        AchievementId::Completionist,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AchievementId::FirstSteps => "First Steps",
            AchievementId::FundamentalsMaster => "Fundamentals Master",
            AchievementId::ComponentsExpert => "Components Expert",
            AchievementId::PatternPro => "Pattern Pro",
            AchievementId::AdvancedArchitect => "Advanced Architect",
            AchievementId::CaseStudyChampion => "Case Study Champion",
            AchievementId::SpeedLearner => "Speed Learner",
            AchievementId::Completionist => "System Design Master",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementId::FirstSteps => "Complete your first learning module",
            AchievementId::FundamentalsMaster => "Complete all fundamental modules",
            AchievementId::ComponentsExpert => "Master all system components",
            AchievementId::PatternPro => "Learn all architectural patterns",
            AchievementId::AdvancedArchitect => "Complete all advanced topics",
            AchievementId::CaseStudyChampion => "Solve all real-world system design cases",
            AchievementId::SpeedLearner => "Complete 5 modules in one week",
            AchievementId::Completionist => "Complete all learning modules",
        }
    }

    /// Whether this achievement's predicate holds for the snapshot.
    /// `now` anchors the trailing 7-day window used by `SpeedLearner`.
    pub fn is_unlocked(&self, records: &[ProgressRecord], now: DateTime<Utc>) -> bool {
        match self {
            AchievementId::FirstSteps => {
                count_by_status(records, CompletionStatus::Completed) >= 1
            }
            AchievementId::FundamentalsMaster => {
                completed_in_category(records, Category::Fundamentals) >= 4
            }
            AchievementId::ComponentsExpert => {
                completed_in_category(records, Category::Components) >= 5
            }
            AchievementId::PatternPro => completed_in_category(records, Category::Patterns) >= 4,
            AchievementId::AdvancedArchitect => {
                completed_in_category(records, Category::Advanced) >= 4
            }
            AchievementId::CaseStudyChampion => {
                completed_in_category(records, Category::CaseStudies) >= 7
            }
            AchievementId::SpeedLearner => {
                let cutoff = now - Duration::days(7);
                records
                    .iter()
                    .filter(|r| {
                        r.completion_status == CompletionStatus::Completed
                            && r.last_accessed.is_some_and(|t| t >= cutoff)
                    })
                    .count()
                    >= 5
            }
            AchievementId::Completionist => {
                count_by_status(records, CompletionStatus::Completed) >= TOTAL_MODULES
            }
        }
    }
}

/// The set of unlocked achievements, in declaration order for stability.
pub fn evaluate_achievements(records: &[ProgressRecord], now: DateTime<Utc>) -> Vec<AchievementId> {
    AchievementId::ALL
        .iter()
        .copied()
        .filter(|a| a.is_unlocked(records, now))
        .collect()
}

/// One row of the achievements page: the badge plus its unlock state.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementStatus {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Unlock state for every achievement, in declaration order.
pub fn achievement_report(
    records: &[ProgressRecord],
    now: DateTime<Utc>,
) -> Vec<AchievementStatus> {
    AchievementId::ALL
        .iter()
        .map(|a| AchievementStatus {
            id: *a,
            title: a.title(),
            description: a.description(),
            unlocked: a.is_unlocked(records, now),
        })
        .collect()
}
