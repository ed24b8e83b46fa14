//! AABB collision detection and impulse resolution
//!
//! Every candidate pair is tested for overlap, pushed apart along the axis of
//! least penetration, then given an impulse along that axis. Static bodies take
//! part as obstacles with zero inverse mass.

use crate::core::Vec2;
use crate::rigid_body::RigidBody;

/// Overlap between two bodies.
///
/// `normal` points from body 2 toward body 1; `penetration` is how far body 1
/// reaches into body 2 (`-normal * depth`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub normal: Vec2,
    pub penetration: Vec2,
    pub depth: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    /// AABBs do not overlap
    Apart,
    /// Overlap corrected; `impulse` is false when the bodies were already separating
    Resolved { impulse: bool },
    /// Overlapping but unresolvable (two static bodies, degenerate numbers)
    Skipped,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub pairs_tested: u32,
    pub contacts: u32,
    pub impulses: u32,
    pub skipped: u32,
}

/// Candidate pair source. Pairs must be `(i, j)` with `i < j`.
pub trait BroadPhase {
    fn candidate_pairs(&mut self, bodies: &[RigidBody], out: &mut Vec<(usize, usize)>);
}

/// Reference broad phase: every unordered pair in registry order.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllPairs;

impl BroadPhase for AllPairs {
    fn candidate_pairs(&mut self, bodies: &[RigidBody], out: &mut Vec<(usize, usize)>) {
        out.clear();
        let n = bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                out.push((i, j));
            }
        }
    }
}

pub fn collides(a: &RigidBody, b: &RigidBody) -> bool {
    a.aabb().overlaps(&b.aabb())
}

/// Compute the minimum translation for an overlapping pair.
///
/// Ties between the axes resolve along Y.
pub fn detect(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let box1 = a.aabb();
    let box2 = b.aabb();
    if !box1.overlaps(&box2) {
        return None;
    }

    let overlap_x = box1.overlap_x(&box2);
    let overlap_y = box1.overlap_y(&box2);

    let (normal, depth) = if overlap_x < overlap_y {
        let nx = if box1.left() < box2.left() { -1.0 } else { 1.0 };
        (Vec2::new(nx, 0.0), overlap_x)
    } else {
        let ny = if box1.top() < box2.top() { -1.0 } else { 1.0 };
        (Vec2::new(0.0, ny), overlap_y)
    };

    Some(Contact { normal, penetration: -normal * depth, depth })
}

/// Detect and resolve one pair in place.
pub fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> PairOutcome {
    let Some(contact) = detect(a, b) else {
        return PairOutcome::Apart;
    };

    // === Positional correction ===
    let p = contact.penetration;
    match (a.is_static(), b.is_static()) {
        (false, false) => {
            a.pos -= p * 0.5;
            b.pos += p * 0.5;
        }
        (false, true) => a.pos -= p,
        (true, false) => b.pos += p,
        (true, true) => return PairOutcome::Skipped,
    }

    // === Impulse ===
    let n = contact.normal;
    let velocity_along_normal = (a.velocity - b.velocity).dot(n);
    if velocity_along_normal >= 0.0 {
        return PairOutcome::Resolved { impulse: false };
    }

    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if !(inv_mass_sum.is_finite() && inv_mass_sum > 0.0) {
        return PairOutcome::Skipped;
    }

    let restitution = a.material().bounciness.min(b.material().bounciness);
    let j = -(1.0 + restitution) * velocity_along_normal / inv_mass_sum;
    if !j.is_finite() {
        return PairOutcome::Skipped;
    }

    let impulse = n * j;
    if !a.is_static() {
        a.velocity += impulse * a.inv_mass();
    }
    if !b.is_static() {
        b.velocity -= impulse * b.inv_mass();
    }
    PairOutcome::Resolved { impulse: true }
}

/// Resolve every candidate pair produced by `broad_phase`.
///
/// `pairs` is scratch space reused between ticks.
pub fn resolve_all(
    bodies: &mut [RigidBody],
    broad_phase: &mut dyn BroadPhase,
    pairs: &mut Vec<(usize, usize)>,
) -> ResolveSummary {
    let mut summary = ResolveSummary::default();
    broad_phase.candidate_pairs(bodies, pairs);

    for &(i, j) in pairs.iter() {
        if i >= j || j >= bodies.len() {
            summary.skipped += 1;
            continue;
        }
        summary.pairs_tested += 1;
        let (head, tail) = bodies.split_at_mut(j);
        match resolve_pair(&mut head[i], &mut tail[0]) {
            PairOutcome::Apart => {}
            PairOutcome::Resolved { impulse } => {
                summary.contacts += 1;
                if impulse {
                    summary.impulses += 1;
                }
            }
            PairOutcome::Skipped => {
                summary.contacts += 1;
                summary.skipped += 1;
            }
        }
    }
    summary
}
