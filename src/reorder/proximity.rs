//! Proximity - nearest-centroid lookup and insertion side

use crate::primitives::Position;

use super::sampler::Candidate;

/// Which edge of the target the dragged page lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl Side {
    /// Split along the vertical line through `centroid`. The row is
    /// assumed single, so y never participates.
    pub fn from_pointer(pointer: Position, centroid: Position) -> Self {
        if pointer.x < centroid.x {
            Self::Before
        } else {
            Self::After
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub target: &'a Candidate,
    pub side: Side,
}

/// Find the candidate whose centroid is closest to `pointer`.
///
/// `pointer` must already be in document coordinates. Equidistant
/// candidates resolve to the earliest one in `candidates`; the tie-break
/// is arbitrary but stable. Linear in the candidate count.
pub fn resolve(pointer: Position, candidates: &[Candidate]) -> Option<Resolution<'_>> {
    let mut best: Option<(&Candidate, f32)> = None;
    for candidate in candidates {
        let d = pointer.distance(&candidate.centroid);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((candidate, d)),
        }
    }

    best.map(|(target, _)| Resolution {
        target,
        side: Side::from_pointer(pointer, target.centroid),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(xs: &[f32]) -> Vec<Candidate> {
        xs.iter()
            .enumerate()
            .map(|(i, &x)| Candidate {
                item_id: format!("p{i}"),
                index: i,
                centroid: Position::new(x, 50.0),
            })
            .collect()
    }

    #[test]
    fn picks_nearest() {
        let candidates = row(&[0.0, 10.0, 20.0]);
        let r = resolve(Position::new(9.0, 50.0), &candidates).unwrap();
        assert_eq!(r.target.item_id, "p1");
        assert_eq!(r.target.index, 1);
    }

    #[test]
    fn side_partition() {
        let candidates = row(&[10.0]);
        let before = resolve(Position::new(9.0, 50.0), &candidates).unwrap();
        assert_eq!(before.side, Side::Before);
        let after = resolve(Position::new(11.0, 50.0), &candidates).unwrap();
        assert_eq!(after.side, Side::After);
    }

    #[test]
    fn pointer_on_centroid_is_after() {
        let candidates = row(&[10.0]);
        let r = resolve(Position::new(10.0, 0.0), &candidates).unwrap();
        assert_eq!(r.side, Side::After);
    }

    #[test]
    fn tie_goes_to_earlier_candidate() {
        let candidates = row(&[0.0, 20.0]);
        let r = resolve(Position::new(10.0, 50.0), &candidates).unwrap();
        assert_eq!(r.target.item_id, "p0");

        let mut reversed = candidates.clone();
        reversed.reverse();
        let r = resolve(Position::new(10.0, 50.0), &reversed).unwrap();
        assert_eq!(r.target.item_id, "p1");
    }

    #[test]
    fn uses_both_axes_for_distance() {
        let candidates = vec![
            Candidate {
                item_id: "far-y".into(),
                index: 0,
                centroid: Position::new(10.0, 200.0),
            },
            Candidate {
                item_id: "near".into(),
                index: 1,
                centroid: Position::new(30.0, 50.0),
            },
        ];
        let r = resolve(Position::new(12.0, 50.0), &candidates).unwrap();
        assert_eq!(r.target.item_id, "near");
        assert_eq!(r.side, Side::Before);
    }

    #[test]
    fn empty_candidates_resolve_nothing() {
        assert!(resolve(Position::new(0.0, 0.0), &[]).is_none());
    }
}
