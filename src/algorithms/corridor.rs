//! Tunnel intrusion evaluation
//!
//! A tunnel is an ordered list of waypoints joined by straight segments.
//! A position is compliant when it lies within `width` (inclusive) of at
//! least one segment, and an intruder otherwise. An empty tunnel has no
//! corridor at all, so every position is an intruder; a single waypoint
//! acts as a zero-length segment.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithms::segment::distance_point_to_segment;
use crate::core::Point;

/// Per-call summary over all tunnel segments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorridorAssessment {
    /// Index `i` of the nearest segment `(tunnel[i], tunnel[i + 1])`.
    /// `Some(0)` for a single-waypoint tunnel, `None` for an empty one
    /// (or when no distance is comparable, e.g. NaN coordinates).
    pub nearest_segment: Option<usize>,
    /// Distance to the nearest segment, infinite for an empty tunnel
    pub min_distance: f64,
    pub intruder: bool,
}

/// Consecutive waypoint pairs. A single waypoint yields one degenerate
/// pair with itself; an empty tunnel yields nothing.
pub fn segments(tunnel: &[Point]) -> impl Iterator<Item = (&Point, &Point)> + '_ {
    let single = match tunnel {
        [only] => Some((only, only)),
        _ => None,
    };
    single
        .into_iter()
        .chain(tunnel.windows(2).map(|pair| (&pair[0], &pair[1])))
}

/// Returns `true` if `position` is strictly farther than `width` from every
/// segment of `tunnel`.
///
/// Stops at the first segment within `width`.
pub fn is_intruder(position: &Point, tunnel: &[Point], width: f64) -> bool {
    if tunnel.is_empty() {
        debug!("empty tunnel, position {:?} is an intruder", position);
        return true;
    }
    if let [only] = tunnel {
        let d = distance_point_to_segment(only, only, position);
        trace!("single waypoint: distance {:.6} (width {})", d, width);
        return d > width;
    }

    let mut min_dist = f64::INFINITY;
    for (i, (a, b)) in segments(tunnel).enumerate() {
        let d = distance_point_to_segment(a, b, position);
        trace!("segment {}: distance {:.6} (width {})", i, d, width);
        if d <= width {
            debug!("position {:?} inside segment {} ({:.6} <= {})", position, i, d, width);
            return false;
        }
        if d < min_dist {
            min_dist = d;
        }
    }

    let intruder = min_dist > width;
    debug!("position {:?}: nearest distance {:.6}, width {}, intruder {}", position, min_dist, width, intruder);
    intruder
}

/// Evaluates every segment and reports the nearest one.
///
/// `assess(..).intruder` always agrees with [`is_intruder`].
pub fn assess(position: &Point, tunnel: &[Point], width: f64) -> CorridorAssessment {
    let mut nearest_segment = None;
    let mut min_distance = f64::INFINITY;
    let mut within = false;

    for (i, (a, b)) in segments(tunnel).enumerate() {
        let d = distance_point_to_segment(a, b, position);
        trace!("segment {}: distance {:.6}", i, d);
        within |= d <= width;
        if d < min_distance {
            nearest_segment = Some(i);
            min_distance = d;
        }
    }

    let intruder = match tunnel {
        [] => true,
        [only] => distance_point_to_segment(only, only, position) > width,
        _ => !within && min_distance > width,
    };
    CorridorAssessment { nearest_segment, min_distance, intruder }
}
