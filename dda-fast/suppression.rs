use dda_core::Point2D;

use crate::types::ScoredCorner;

/// Post-processing of raw segment-test corners
pub struct CornerSuppression;

impl CornerSuppression {
    /// Drop corners lying within `radius` of any already-known location
    pub fn exclude_known(corners: &mut Vec<ScoredCorner>, known: &[Point2D], radius: f64) {
        if known.is_empty() || radius <= 0.0 {
            return;
        }
        let radius_sq = radius * radius;
        corners.retain(|c| {
            let p = Point2D::from(c.coord);
            known.iter().all(|k| p.distance_sq(k) >= radius_sq)
        });
    }

    /// Greedy non-maximum suppression, strongest first.
    ///
    /// Sorting is stable so equal responses keep their scan order.
    pub fn non_maximum_suppression(corners: &[ScoredCorner], min_distance: f32) -> Vec<ScoredCorner> {
        if corners.is_empty() {
            return Vec::new();
        }

        let mut sorted = corners.to_vec();
        sorted.sort_by(|a, b| b.response.total_cmp(&a.response));

        if min_distance <= 0.0 {
            return sorted;
        }

        let mut suppressed: Vec<ScoredCorner> = Vec::new();
        let min_distance_sq = min_distance * min_distance;

        for candidate in sorted {
            let is_local_max = suppressed.iter().all(|existing| {
                let dx = (candidate.coord.x - existing.coord.x) as f32;
                let dy = (candidate.coord.y - existing.coord.y) as f32;
                dx * dx + dy * dy >= min_distance_sq
            });

            if is_local_max {
                suppressed.push(candidate);
            }
        }

        suppressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dda_core::PixelCoord;

    fn corner(x: i32, y: i32, response: f32) -> ScoredCorner {
        ScoredCorner { coord: PixelCoord::new(x, y), response }
    }

    #[test]
    fn test_nms_keeps_strongest() {
        let corners = vec![corner(10, 10, 5.0), corner(11, 10, 9.0), corner(30, 30, 1.0)];
        let kept = CornerSuppression::non_maximum_suppression(&corners, 3.0);
        assert_eq!(kept, vec![corner(11, 10, 9.0), corner(30, 30, 1.0)]);
    }

    #[test]
    fn test_nms_min_distance_holds() {
        let corners: Vec<_> = (0..20).map(|i| corner(i, i % 3, (i * 7 % 11) as f32)).collect();
        let kept = CornerSuppression::non_maximum_suppression(&corners, 5.0);
        for i in 0..kept.len() {
            for j in (i + 1)..kept.len() {
                let dx = (kept[i].coord.x - kept[j].coord.x) as f32;
                let dy = (kept[i].coord.y - kept[j].coord.y) as f32;
                assert!((dx * dx + dy * dy).sqrt() >= 5.0);
            }
        }
    }

    #[test]
    fn test_nms_ties_keep_scan_order() {
        let corners = vec![corner(1, 1, 2.0), corner(50, 1, 2.0), corner(90, 1, 2.0)];
        let kept = CornerSuppression::non_maximum_suppression(&corners, 3.0);
        assert_eq!(kept, corners);
    }

    #[test]
    fn test_zero_distance_only_sorts() {
        let corners = vec![corner(1, 1, 1.0), corner(1, 2, 3.0)];
        let kept = CornerSuppression::non_maximum_suppression(&corners, 0.0);
        assert_eq!(kept, vec![corner(1, 2, 3.0), corner(1, 1, 1.0)]);
    }

    #[test]
    fn test_exclude_known() {
        let mut corners = vec![corner(10, 10, 1.0), corner(20, 20, 1.0), corner(40, 40, 1.0)];
        let known = [Point2D::new(11.0, 10.0), Point2D::new(40.0, 44.0)];
        CornerSuppression::exclude_known(&mut corners, &known, 4.0);
        // (40, 40) is exactly 4 away and survives
        assert_eq!(corners, vec![corner(20, 20, 1.0), corner(40, 40, 1.0)]);
    }

    #[test]
    fn test_exclude_with_zero_radius_is_noop() {
        let mut corners = vec![corner(10, 10, 1.0)];
        CornerSuppression::exclude_known(&mut corners, &[Point2D::new(10.0, 10.0)], 0.0);
        assert_eq!(corners.len(), 1);
    }
}
