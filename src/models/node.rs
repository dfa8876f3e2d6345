//! Node and time window types.

use serde::{Deserialize, Serialize};

/// A delivery time window at a node.
///
/// The cumulative time on arrival (after any waiting) must fall inside
/// `[start, end]`.
///
/// # Examples
///
/// ```
/// use u_cvrptw::models::TimeWindow;
///
/// let tw = TimeWindow::new(100.0, 200.0).unwrap();
/// assert!(tw.start() <= tw.end());
/// assert!(tw.contains(150.0));
/// assert!(!tw.contains(250.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: f64,
    end: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `start > end` or either value is non-finite.
    pub fn new(start: f64, end: f64) -> Option<Self> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// Earliest time service may begin.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Latest time service may begin.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `true` if the given time falls within this window.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }
}

/// A location in a routing instance.
///
/// Node 0 is always the depot. Nodes carry integer coordinates, a
/// non-negative demand and, except for the depot, a time window.
///
/// # Examples
///
/// ```
/// use u_cvrptw::models::{Node, TimeWindow};
///
/// let depot = Node::depot(82, 76);
/// assert_eq!(depot.index(), 0);
/// assert!(depot.is_depot());
///
/// let n = Node::new(1, 96, 44, 19)
///     .with_time_window(TimeWindow::new(50891.0, 68891.0).unwrap());
/// assert_eq!(n.demand(), 19);
/// assert_eq!(depot.manhattan_distance(&n), 46);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    index: usize,
    x: i64,
    y: i64,
    demand: i64,
    time_window: Option<TimeWindow>,
}

impl Node {
    /// Creates a node without a time window.
    pub fn new(index: usize, x: i64, y: i64, demand: i64) -> Self {
        Self {
            index,
            x,
            y,
            demand,
            time_window: None,
        }
    }

    /// Creates the depot (index 0, demand 0) at the given coordinates.
    pub fn depot(x: i64, y: i64) -> Self {
        Self::new(0, x, y, 0)
    }

    /// Sets the time window of this node.
    pub fn with_time_window(mut self, tw: TimeWindow) -> Self {
        self.time_window = Some(tw);
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_depot(&self) -> bool {
        self.index == 0
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    /// Units delivered at this node.
    pub fn demand(&self) -> i64 {
        self.demand
    }

    /// Time window, if any. The depot has none; it is bounded by the horizon.
    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }

    /// Manhattan (L1) distance to another node.
    pub fn manhattan_distance(&self, other: &Node) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window_valid() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert_eq!(tw.start(), 10.0);
        assert_eq!(tw.end(), 20.0);
    }

    #[test]
    fn test_time_window_invalid() {
        assert!(TimeWindow::new(20.0, 10.0).is_none());
        assert!(TimeWindow::new(f64::NAN, 10.0).is_none());
        assert!(TimeWindow::new(10.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_time_window_contains_is_inclusive() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert!(tw.contains(10.0));
        assert!(tw.contains(20.0));
        assert!(!tw.contains(9.9));
        assert!(!tw.contains(20.1));
    }

    #[test]
    fn test_depot() {
        let d = Node::depot(5, 7);
        assert_eq!(d.index(), 0);
        assert_eq!(d.demand(), 0);
        assert!(d.is_depot());
        assert!(d.time_window().is_none());
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Node::new(1, 0, 0, 0);
        let b = Node::new(2, 3, -4, 0);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
        assert_eq!(a.manhattan_distance(&a), 0);
    }
}
