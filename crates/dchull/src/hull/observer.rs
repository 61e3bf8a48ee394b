//! Progress sink for the divide-and-conquer driver.
//!
//! The driver reports base-case hulls, every tangent it settles on, and every merged
//! hull. Observers are write-only: they never see mutable engine state and cannot
//! change the result.

use crate::geom2::Point;

/// Which of the two bridging tangents was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TangentKind {
    Upper,
    Lower,
}

/// Callbacks invoked by the driver. All methods default to no-ops.
pub trait MergeObserver {
    /// A partition of at most three points became a hull.
    fn on_base(&mut self, _hull: &[Point]) {}
    /// A tangent from the left hull (`from`) to the right hull (`to`) was found.
    fn on_tangent(&mut self, _kind: TangentKind, _from: Point, _to: Point) {}
    /// `left` and `right` were merged into `merged`.
    fn on_merge(&mut self, _left: &[Point], _right: &[Point], _merged: &[Point]) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {}

/// One recorded driver event.
#[derive(Clone, Debug, PartialEq)]
pub enum MergeEvent {
    Base(Vec<Point>),
    Tangent {
        kind: TangentKind,
        from: Point,
        to: Point,
    },
    Merge {
        left: Vec<Point>,
        right: Vec<Point>,
        merged: Vec<Point>,
    },
}

/// Observer that keeps every event in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<MergeEvent>,
}

impl RecordingObserver {
    pub fn merges(&self) -> impl Iterator<Item = &MergeEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, MergeEvent::Merge { .. }))
    }
}

impl MergeObserver for RecordingObserver {
    fn on_base(&mut self, hull: &[Point]) {
        self.events.push(MergeEvent::Base(hull.to_vec()));
    }
    fn on_tangent(&mut self, kind: TangentKind, from: Point, to: Point) {
        self.events.push(MergeEvent::Tangent { kind, from, to });
    }
    fn on_merge(&mut self, left: &[Point], right: &[Point], merged: &[Point]) {
        self.events.push(MergeEvent::Merge {
            left: left.to_vec(),
            right: right.to_vec(),
            merged: merged.to_vec(),
        });
    }
}
