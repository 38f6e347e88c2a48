use swing_solvers::transient::fixed_step::{Sample, Solution};

use crate::model::State;

/// One recorded point of a pendulum trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub time: f64,
    pub angle: f64,
    pub angular_velocity: f64,
}

impl Point {
    /// Returns the angular state at this point.
    #[must_use]
    pub fn state(&self) -> State {
        State::new(self.angle, self.angular_velocity)
    }
}

impl From<Sample<2>> for Point {
    fn from(sample: Sample<2>) -> Self {
        let [angle, angular_velocity] = sample.state;
        Self {
            time: sample.time,
            angle,
            angular_velocity,
        }
    }
}

/// The recorded points of one run, in increasing time order.
///
/// The first point is the initial condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Trajectory {
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }
}

impl From<Solution<2>> for Trajectory {
    fn from(solution: Solution<2>) -> Self {
        solution.samples.into_iter().map(Point::from).collect()
    }
}

impl FromIterator<Point> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
