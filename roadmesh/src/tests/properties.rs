use crate::{assemble, assemble_from, place, Pose, RoadSegment};
use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

/// Uniform in [0, 1]
fn unit(g: &mut Gen) -> f32 {
    let v = <u32 as Arbitrary>::arbitrary(g);
    v as f32 / u32::MAX as f32
}

#[derive(Debug, Copy, Clone)]
struct ArbSegment(RoadSegment);

impl Arbitrary for ArbSegment {
    fn arbitrary(g: &mut Gen) -> Self {
        let length = if bool::arbitrary(g) {
            0.0
        } else {
            unit(g) * 50.0
        };
        let theta = match u8::arbitrary(g) % 4 {
            0 => 0.0,
            1 => 90.0,
            _ => (unit(g) - 0.5) * 720.0,
        };
        ArbSegment(RoadSegment::new(
            length,
            (unit(g) - 0.2) * 30.0,
            theta,
            0.1 + unit(g) * 5.0,
        ))
    }
}

fn segments(v: &[ArbSegment]) -> Vec<RoadSegment> {
    v.iter().map(|s| s.0).collect()
}

fn quickcheck() -> QuickCheck {
    QuickCheck::new().tests(200)
}

#[test]
fn quickcheck_mesh_invariants() {
    quickcheck().quickcheck(
        (|v: Vec<ArbSegment>| -> TestResult {
            let m = assemble(&segments(&v)).unwrap();
            let n = m.vertices.len();

            if n % 2 != 0 || m.uvs.len() != n || m.triangles.len() % 3 != 0 {
                return TestResult::failed();
            }
            if m.triangles.iter().any(|&i| i as usize >= n) {
                return TestResult::failed();
            }
            TestResult::from_bool(m.validate().is_ok())
        }) as fn(Vec<ArbSegment>) -> TestResult,
    );
}

#[test]
fn quickcheck_uvs_are_stations() {
    quickcheck().quickcheck(
        (|v: Vec<ArbSegment>| -> bool {
            let m = assemble(&segments(&v)).unwrap();
            m.uvs.iter().enumerate().all(|(i, uv)| {
                uv.x == (i % 2) as f32 && uv.y == (i / 2) as f32
            })
        }) as fn(Vec<ArbSegment>) -> bool,
    );
}

#[test]
fn quickcheck_idempotent() {
    quickcheck().quickcheck(
        (|v: Vec<ArbSegment>| -> bool {
            let s = segments(&v);
            assemble(&s).unwrap() == assemble(&s).unwrap()
        }) as fn(Vec<ArbSegment>) -> bool,
    );
}

#[test]
fn quickcheck_weld_removes_one_station_per_seam() {
    quickcheck().quickcheck(
        (|v: Vec<ArbSegment>| -> bool {
            let s = segments(&v);
            let kept: Vec<_> = s.iter().filter(|s| !s.is_degenerate()).collect();
            let expected = kept
                .iter()
                .map(|s| s.n_local_vertices().unwrap())
                .sum::<usize>()
                .saturating_sub(2 * kept.len().saturating_sub(1));
            assemble(&s).unwrap().vertices.len() == expected
        }) as fn(Vec<ArbSegment>) -> bool,
    );
}

#[test]
fn quickcheck_pose_is_trailing_midpoint() {
    quickcheck().quickcheck(
        (|v: Vec<ArbSegment>| -> TestResult {
            let s = segments(&v);
            let Some(last) = s.iter().rposition(|s| !s.is_degenerate()) else {
                return TestResult::discard();
            };
            let (m, end) = assemble_from(Pose::ORIGIN, &s).unwrap();
            let n = m.vertices.len();
            let mid = m.vertices[n - 2].midpoint(m.vertices[n - 1]);
            if end.position != mid {
                return TestResult::failed();
            }

            // the pose before the last real segment leads to the same end
            let (_, before) = assemble_from(Pose::ORIGIN, &s[..last]).unwrap();
            let placed = place(before, last, &s[last]).unwrap();
            TestResult::from_bool(placed.next.position == mid)
        }) as fn(Vec<ArbSegment>) -> TestResult,
    );
}

#[test]
fn quickcheck_arc_tail_is_exact() {
    quickcheck().quickcheck(
        (|s: ArbSegment| -> TestResult {
            let s = s.0;
            if s.theta.0 == 0.0 {
                return TestResult::discard();
            }
            let v = s.local_vertices().unwrap();
            let r = s.effective_radius();
            let (w, l) = (s.width, s.length);
            let t = s.theta.abs().to_radians();
            let (outer_x, inner_x) = if s.theta.0 > 0.0 {
                (r - (r + w) * t.cos(), r - (r - w) * t.cos())
            } else {
                (-r + (r + w) * t.cos(), -r + (r - w) * t.cos())
            };
            let outer_z = (r + w) * t.sin() + l;
            let inner_z = (r - w) * t.sin() + l;
            let (left, right) = (v[v.len() - 2], v[v.len() - 1]);
            let (outer, inner) = if s.theta.0 > 0.0 {
                (left, right)
            } else {
                (right, left)
            };
            let tol = 1e-3 * (1.0 + r + l);
            TestResult::from_bool(
                (outer.x - outer_x).abs() < tol
                    && (outer.z - outer_z).abs() < tol
                    && (inner.x - inner_x).abs() < tol
                    && (inner.z - inner_z).abs() < tol,
            )
        }) as fn(ArbSegment) -> TestResult,
    );
}
