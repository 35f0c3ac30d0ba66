//! Status counts and the donut chart derived from them.

use std::f64::consts::{FRAC_PI_2, TAU};
use taskboard_api::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(
            Self {
                total: tasks.len(),
                ..Self::default()
            },
            |mut stats, task| {
                match task.status {
                    TaskStatus::Pending => stats.pending += 1,
                    TaskStatus::InProgress => stats.in_progress += 1,
                    TaskStatus::Completed => stats.completed += 1,
                }
                stats
            },
        )
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }
}

pub const PENDING_COLOR: &str = "#f59e0b";
pub const IN_PROGRESS_COLOR: &str = "#3b82f6";
pub const COMPLETED_COLOR: &str = "#10b981";
pub const SEGMENT_BORDER_COLOR: &str = "#fff";
pub const SEGMENT_BORDER_WIDTH: f64 = 2.0;
pub const EMPTY_RING_COLOR: &str = "#e5e7eb";

pub fn chart_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "Pending",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::Completed => "Completed",
    }
}

pub fn chart_color(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => PENDING_COLOR,
        TaskStatus::InProgress => IN_PROGRESS_COLOR,
        TaskStatus::Completed => COMPLETED_COLOR,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub status: TaskStatus,
    pub label: &'static str,
    pub color: &'static str,
    pub value: usize,
    /// Radians, clockwise from 12 o'clock being `-PI/2`
    pub start_angle: f64,
    pub end_angle: f64,
}

impl DonutSegment {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Three fixed-colored segments, one per status, in pending / in progress /
/// completed order. Segments with no tasks have zero sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub segments: Vec<DonutSegment>,
    pub total: usize,
}

impl DonutChart {
    pub fn from_stats(stats: &TaskStats) -> Self {
        let counted = stats.pending + stats.in_progress + stats.completed;
        let mut angle = -FRAC_PI_2;

        let segments = TaskStatus::ALL
            .into_iter()
            .map(|status| {
                let value = stats.count(status);
                let sweep = if counted == 0 {
                    0.0
                } else {
                    TAU * value as f64 / counted as f64
                };
                let segment = DonutSegment {
                    status,
                    label: chart_label(status),
                    color: chart_color(status),
                    value,
                    start_angle: angle,
                    end_angle: angle + sweep,
                };
                angle += sweep;
                segment
            })
            .collect();

        Self {
            segments,
            total: counted,
        }
    }

    /// Nothing to draw but the empty ring
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Segments worth drawing
    pub fn visible_segments(&self) -> impl Iterator<Item = &DonutSegment> {
        self.segments.iter().filter(|s| s.value > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::task;

    #[test]
    fn test_counts_by_status() {
        let tasks = vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::Completed),
            task("3", TaskStatus::InProgress),
            task("4", TaskStatus::Completed),
            task("5", TaskStatus::Pending),
        ];
        assert_eq!(
            TaskStats::from_tasks(&tasks),
            TaskStats {
                pending: 2,
                in_progress: 1,
                completed: 2,
                total: 5,
            }
        );
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        assert_eq!(TaskStats::from_tasks(&[]), TaskStats::default());

        let chart = DonutChart::from_stats(&TaskStats::default());
        assert!(chart.is_empty());
        assert_eq!(chart.visible_segments().count(), 0);
        assert_eq!(chart.segments.len(), 3);
    }

    #[test]
    fn test_donut_segments_cover_the_circle() {
        let chart = DonutChart::from_stats(&TaskStats {
            pending: 1,
            in_progress: 1,
            completed: 2,
            total: 4,
        });

        let colors: Vec<_> = chart.segments.iter().map(|s| s.color).collect();
        assert_eq!(colors, ["#f59e0b", "#3b82f6", "#10b981"]);

        let first = &chart.segments[0];
        let last = &chart.segments[2];
        assert!((first.start_angle + FRAC_PI_2).abs() < 1e-9);
        assert!((last.end_angle - (TAU - FRAC_PI_2)).abs() < 1e-9);
        assert!((last.sweep() - TAU / 2.0).abs() < 1e-9);

        for pair in chart.segments.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_status_fills_the_ring() {
        let chart = DonutChart::from_stats(&TaskStats {
            completed: 3,
            total: 3,
            ..TaskStats::default()
        });
        let visible: Vec<_> = chart.visible_segments().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].label, "Completed");
        assert!((visible[0].sweep() - TAU).abs() < 1e-9);
    }
}
