mod common;

use approx::assert_abs_diff_eq;
use detector_bank::bank::{fold_query, BankParams, CellIndex, DetectorBank, DetectorKind};
use detector_bank::image::ImageView;
use detector_bank::{Axis, BankError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::f64::consts::PI;

/// 9 × 9 kernels; 5 offsets, 3 widths, 5 angles with angle index 2 at zero.
fn small(kind: DetectorKind, transpose_flips_offset: bool) -> BankParams {
    BankParams {
        kind,
        offset_step: 0.5,
        angle_steps: 2.0,
        width_min: 1.0,
        width_max: 2.0,
        width_step: 0.5,
        half_length: 3,
        transpose_flips_offset,
    }
}

#[test]
fn strides_match_shape() {
    common::init_logging();
    let bank = DetectorBank::new(&small(DetectorKind::Line, false)).unwrap();
    let s = bank.strides();
    let dims = bank.grid().dims();
    for i in 0..dims.len() {
        assert_eq!(s[i], s[i + 1] * dims[i]);
    }
    assert_eq!(s[5], 1);
    assert_eq!(s[0], bank.data().len());
    let b = bank.byte_strides();
    for i in 0..s.len() {
        assert_eq!(b[i], s[i] * std::mem::size_of::<f32>());
    }
}

#[test]
fn every_cell_has_a_distinct_kernel_offset() {
    let bank = DetectorBank::new(&small(DetectorKind::Line, false)).unwrap();
    let counts = bank.counts();
    let img = bank.grid().image_len();
    let mut seen = HashSet::new();
    for a in 0..counts.angle {
        for w in 0..counts.width {
            for o in 0..counts.offset {
                let idx = bank.index_of(o, w, a);
                assert_eq!(idx % img, 0);
                assert!(idx + img <= bank.data().len());
                assert!(seen.insert(idx));
            }
        }
    }
    assert_eq!(seen.len(), counts.kernels());
}

#[test]
fn nearest_recovers_sampled_cells() {
    let bank = DetectorBank::new(&small(DetectorKind::Line, false)).unwrap();
    for cell in bank.cells() {
        let v = bank.cell_values(cell);
        // Stored angles lie in [-π/4, π/4]; the band edges are ambiguous, skip them.
        if v.angle.abs() > PI / 4.0 - 1e-9 {
            continue;
        }
        assert_eq!(bank.nearest_cell(v.offset, v.width, v.angle), Ok(cell));
        assert_eq!(bank.nearest(v.offset, v.width, v.angle), Ok(bank.index_at(cell)));
    }
}

#[test]
fn opposite_direction_with_negated_offset_is_equivalent() {
    let mut rng = StdRng::seed_from_u64(11);
    for flip in [false, true] {
        let bank = DetectorBank::new(&small(DetectorKind::Line, flip)).unwrap();
        for _ in 0..200 {
            let offset = rng.random_range(-0.9..0.9);
            let width = rng.random_range(1.0..2.0);
            let angle = rng.random_range(-PI..PI);
            let (o1, a1) = fold_query(offset, angle, flip);
            let (o2, a2) = fold_query(-offset, angle + PI, flip);
            assert_abs_diff_eq!(o1, o2, epsilon = 1e-12);
            assert_abs_diff_eq!(a1, a2, epsilon = 1e-9);
            // Away from rounding boundaries the lookups agree exactly.
            let near_boundary = |v: f64, step: f64| {
                let frac = (v / step).fract().abs();
                (frac - 0.5).abs() < 1e-6
            };
            if near_boundary(a1 + PI / 4.0, PI / 8.0) || near_boundary(o1 + 1.0, 0.5) {
                continue;
            }
            assert_eq!(
                bank.nearest(offset, width, angle),
                bank.nearest(-offset, width, angle + PI)
            );
        }
    }
}

#[test]
fn out_of_range_queries_are_reported() {
    let bank = DetectorBank::new(&small(DetectorKind::Line, false)).unwrap();
    assert_eq!(
        bank.nearest(0.0, 5.0, 0.0),
        Err(BankError::OutOfRange {
            axis: Axis::Width,
            index: 8,
            extent: 3
        })
    );
    assert!(matches!(
        bank.nearest(3.0, 1.5, 0.0),
        Err(BankError::OutOfRange {
            axis: Axis::Offset,
            ..
        })
    ));
    assert!(matches!(
        bank.nearest(0.0, f64::NAN, 0.0),
        Err(BankError::OutOfRange {
            axis: Axis::Width,
            ..
        })
    ));
}

#[test]
fn line_kernels_at_zero_angle_sum_to_zero() {
    common::init_logging();
    let bank = DetectorBank::new(&small(DetectorKind::Line, false)).unwrap();
    let counts = bank.counts();
    for w in 0..counts.width {
        for o in 0..counts.offset {
            let k = bank.kernel(o, w, 2);
            assert_abs_diff_eq!(k.sum(), 0.0, epsilon = 1e-4);
        }
    }
}

#[test]
fn line_kernel_peaks_on_the_line() {
    let bank = DetectorBank::new(&small(DetectorKind::Line, false)).unwrap();
    // Offset 0, width 2, angle 0: the bright band is centred on the middle row.
    let k = bank.kernel(2, 2, 2);
    let mid = bank.support() / 2;
    assert_abs_diff_eq!(bank.anchor().y, mid as f64 + 0.5);
    let centre_row: f32 = k.row(mid).iter().sum();
    assert!(centre_row > 0.0);
    for y in 0..bank.support() {
        if y != mid {
            assert!(k.row(y).iter().sum::<f32>() < centre_row);
        }
    }
    assert!(k.get(mid, 0).abs() <= 1e-6);
}

#[test]
fn zero_offset_line_kernels_are_point_symmetric() {
    let bank = DetectorBank::new(&small(DetectorKind::Line, false)).unwrap();
    let counts = bank.counts();
    let n = bank.support();
    // Offset index 2 is zero; a centred line maps onto itself under a half turn.
    for a in 0..counts.angle {
        for w in 0..counts.width {
            let k = bank.kernel(2, w, a);
            for y in 0..n {
                for x in 0..n {
                    assert_abs_diff_eq!(k.get(x, y), k.get(n - 1 - x, n - 1 - y), epsilon = 1e-4);
                }
            }
        }
    }
}

#[test]
fn half_space_kernels_are_masked_weights() {
    common::init_logging();
    let bank = DetectorBank::new(&small(DetectorKind::HalfSpace, false)).unwrap();
    for &v in bank.data() {
        assert!((-1e-5..=1.0 + 1e-5).contains(&v), "value {v} outside [0, 1]");
    }
    let norm = bank.norm().unwrap();
    assert!(norm.is_finite());
    let first = bank.kernel_at(CellIndex {
        offset: 0,
        width: 0,
        angle: 0,
    });
    assert_abs_diff_eq!(norm, first.sum() - 1.0, epsilon = 1e-6);
    // Corners lie outside the disk mask.
    assert_eq!(first.get(0, 0), 0.0);
}

#[test]
fn half_space_ignores_width() {
    let bank = DetectorBank::new(&small(DetectorKind::HalfSpace, false)).unwrap();
    let a = bank.kernel(1, 0, 3);
    let b = bank.kernel(1, 2, 3);
    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn bank_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DetectorBank>();

    let bank = DetectorBank::new(&small(DetectorKind::Line, false)).unwrap();
    let sums: Vec<f32> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..3)
            .map(|a| {
                let bank = &bank;
                s.spawn(move || bank.kernel(2, 1, a).sum())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sums.len(), 3);
}
