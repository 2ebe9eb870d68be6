use serde::Serialize;

use crate::model::entry::Entry;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl Default for ValueDomain {
    fn default() -> Self {
        Self { min: 1.0, max: 100.0 }
    }
}

impl ValueDomain {
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Plot area in canvas coordinates. `y` grows downward.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width: width.max(0.0), height: height.max(0.0) }
    }

    /// Inner plot area of a `width` x `height` canvas with equal padding on every side.
    pub fn padded(width: f64, height: f64, padding: f64) -> Self {
        Self::new(padding, padding, width - 2.0 * padding, height - 2.0 * padding)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, point: PlotPoint) -> bool {
        point.x >= self.left && point.x <= self.right() && point.y >= self.top && point.y <= self.bottom()
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps entries onto `rect`, one point per entry, in input order.
///
/// Points are spaced evenly by index rather than by date. Moods are clamped
/// to `domain` before mapping, and higher moods land closer to `rect.top`.
/// Callers sort chronologically first if they want a trend line.
pub fn project(entries: &[Entry], domain: ValueDomain, rect: PlotRect) -> Vec<PlotPoint> {
    let step = if entries.len() > 1 {
        rect.width / (entries.len() - 1) as f64
    } else {
        0.0
    };

    entries.iter()
        .enumerate()
        .map(|(i, entry)| PlotPoint {
            x: rect.left + step * i as f64,
            y: mood_to_y(entry.mood, domain, rect),
        })
        .collect()
}

fn mood_to_y(mood: i32, domain: ValueDomain, rect: PlotRect) -> f64 {
    let span = domain.max - domain.min;
    if span <= 0.0 {
        return rect.top + rect.height / 2.0;
    }
    let normalized = (domain.max - domain.clamp(f64::from(mood))) / span; // 0 at max, 1 at min
    rect.top + normalized * rect.height
}

/// Stable chronological sort; entries sharing a date keep their input order.
pub fn sort_chronologically(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.date);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(d: u32, mood: i32) -> Entry {
        Entry::new(NaiveDate::from_ymd_opt(2024, 1, d).unwrap(), mood, "")
    }

    fn rect() -> PlotRect {
        PlotRect::padded(720.0, 360.0, 48.0)
    }

    #[test]
    fn test_empty_input_projects_nothing() {
        assert!(project(&[], ValueDomain::default(), rect()).is_empty());
    }

    #[test]
    fn test_single_point_inside_rect() {
        let points = project(&[entry(1, 42)], ValueDomain::default(), rect());
        assert_eq!(points.len(), 1);
        assert!(rect().contains(points[0]));
        assert_eq!(points[0].x, rect().left);
    }

    #[test]
    fn test_even_spacing_ignores_date_gaps() {
        let entries = vec![entry(1, 50), entry(2, 50), entry(30, 50)];
        let points = project(&entries, ValueDomain::default(), rect());
        assert_eq!(points[0].x, 48.0);
        assert_eq!(points[1].x, 48.0 + 312.0);
        assert_eq!(points[2].x, 672.0);
    }

    #[test]
    fn test_y_is_inverted() {
        let entries = vec![entry(1, 100), entry(2, 1)];
        let points = project(&entries, ValueDomain::default(), rect());
        assert_eq!(points[0].y, rect().top);
        assert_eq!(points[1].y, rect().bottom());
        assert!(points[0].y < points[1].y);
    }

    #[test]
    fn test_out_of_domain_moods_clamp() {
        let entries = vec![entry(1, 150), entry(2, 100), entry(3, -20), entry(4, 1)];
        let points = project(&entries, ValueDomain::default(), rect());
        assert_eq!(points[0].y, points[1].y);
        assert_eq!(points[2].y, points[3].y);
        assert!(points.iter().all(|p| rect().contains(*p)));
    }

    #[test]
    fn test_projection_keeps_input_order() {
        let entries = vec![entry(3, 90), entry(1, 10)];
        let points = project(&entries, ValueDomain::default(), rect());
        assert!(points[0].y < points[1].y);
    }

    #[test]
    fn test_degenerate_domain_centers_points() {
        let domain = ValueDomain { min: 50.0, max: 50.0 };
        let points = project(&[entry(1, 10)], domain, PlotRect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(points[0].y, 5.0);
    }

    #[test]
    fn test_sort_chronologically_is_stable() {
        let entries = vec![entry(5, 1), entry(2, 2), entry(5, 3)];
        let moods: Vec<i32> = sort_chronologically(&entries).iter().map(|e| e.mood).collect();
        assert_eq!(moods, vec![2, 1, 3]);
    }
}
