use linechart_rs::core::{
    DataPoint, FillContext, FillRegion, FillShape, FillShapes, LimitBand, annotate_series,
};
use linechart_rs::render::{Color, PathVerb};

fn band(top: f64, bottom: f64) -> LimitBand {
    LimitBand::new(top, bottom, Color::rgb(1.0, 0.0, 0.0)).expect("valid band")
}

fn ctx(fill_min: f64, axis_min: f64, axis_max: f64) -> FillContext {
    FillContext {
        fill_min,
        phase_y: 1.0,
        axis_min,
        axis_max,
    }
}

#[test]
fn large_window_is_split_into_bounded_chunks() {
    let points: Vec<DataPoint> = (0..300)
        .map(|i| DataPoint::new(f64::from(i), 1.0))
        .collect();
    let augmented = annotate_series(&points, None, 0.0);

    let shapes: Vec<FillShape> =
        FillShapes::new(&augmented, None, ctx(0.0, 0.0, 2.0)).collect();

    assert_eq!(shapes.len(), 3);
    for shape in &shapes {
        match shape {
            FillShape::Polygon { region, .. } => assert_eq!(*region, FillRegion::Band),
            FillShape::Vertical { .. } => panic!("no isolated points in this series"),
        }
    }
}

#[test]
fn adjacent_chunks_share_their_boundary_point() {
    let points: Vec<DataPoint> = (0..300)
        .map(|i| DataPoint::new(f64::from(i), 1.0))
        .collect();
    let augmented = annotate_series(&points, None, 0.0);

    let shapes: Vec<FillShape> =
        FillShapes::new(&augmented, None, ctx(0.0, 0.0, 2.0)).collect();

    let last_x = |shape: &FillShape| -> f64 {
        let FillShape::Polygon { path, .. } = shape else {
            panic!("expected polygon");
        };
        // Second-to-last verb is the drop back to the baseline.
        let verbs = path.verbs();
        match verbs[verbs.len() - 2] {
            PathVerb::LineTo { x, .. } => x,
            _ => panic!("expected baseline line"),
        }
    };
    let first_x = |shape: &FillShape| -> f64 {
        let FillShape::Polygon { path, .. } = shape else {
            panic!("expected polygon");
        };
        match path.verbs()[0] {
            PathVerb::MoveTo { x, .. } => x,
            _ => panic!("expected baseline move"),
        }
    };

    assert_eq!(last_x(&shapes[0]), first_x(&shapes[1]));
    assert_eq!(last_x(&shapes[1]), first_x(&shapes[2]));
    assert_eq!(last_x(&shapes[2]), 299.0);
}

#[test]
fn gap_forces_an_early_chunk_boundary() {
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 50.0, 51.0, 52.0, 53.0, 54.0];
    let points: Vec<DataPoint> = xs.iter().map(|&x| DataPoint::new(x, 1.0)).collect();
    let augmented = annotate_series(&points, None, 10.0);

    let shapes: Vec<FillShape> =
        FillShapes::new(&augmented, None, ctx(0.0, 0.0, 2.0)).collect();

    assert_eq!(shapes.len(), 2);
    let FillShape::Polygon { path, .. } = &shapes[0] else {
        panic!("expected polygon");
    };
    let verbs = path.verbs();
    // The first polygon ends before the gap, never bridging it.
    assert_eq!(verbs[verbs.len() - 2], PathVerb::LineTo { x: 4.0, y: 0.0 });
    let FillShape::Polygon { path, .. } = &shapes[1] else {
        panic!("expected polygon");
    };
    assert_eq!(path.verbs()[0], PathVerb::MoveTo { x: 50.0, y: 0.0 });
}

#[test]
fn band_splits_the_fill_into_three_clipped_regions() {
    let points = vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 10.0)];
    let limits = band(5.0, -5.0);
    let augmented = annotate_series(&points, Some(&limits), 0.0);

    let shapes: Vec<FillShape> =
        FillShapes::new(&augmented, Some(&limits), ctx(-10.0, -10.0, 10.0)).collect();

    assert_eq!(shapes.len(), 3);

    let FillShape::Polygon { path, region } = &shapes[0] else {
        panic!("expected polygon");
    };
    assert_eq!(*region, FillRegion::Band);
    assert_eq!(
        path.verbs(),
        &[
            PathVerb::MoveTo { x: 0.0, y: -5.0 },
            PathVerb::LineTo { x: 0.0, y: 0.0 },
            PathVerb::LineTo { x: 0.5, y: 5.0 },
            PathVerb::LineTo { x: 1.0, y: 5.0 },
            PathVerb::LineTo { x: 1.0, y: -5.0 },
            PathVerb::Close,
        ]
    );

    let FillShape::Polygon { path, region } = &shapes[1] else {
        panic!("expected polygon");
    };
    assert_eq!(*region, FillRegion::AboveTop);
    assert_eq!(
        path.verbs(),
        &[
            PathVerb::MoveTo { x: 0.0, y: 5.0 },
            PathVerb::LineTo { x: 0.0, y: 5.0 },
            PathVerb::LineTo { x: 0.5, y: 5.0 },
            PathVerb::LineTo { x: 1.0, y: 10.0 },
            PathVerb::LineTo { x: 1.0, y: 5.0 },
            PathVerb::Close,
        ]
    );

    let FillShape::Polygon { path, region } = &shapes[2] else {
        panic!("expected polygon");
    };
    assert_eq!(*region, FillRegion::BelowBottom);
    assert_eq!(
        path.verbs(),
        &[
            PathVerb::MoveTo { x: 0.0, y: -10.0 },
            PathVerb::LineTo { x: 0.0, y: -5.0 },
            PathVerb::LineTo { x: 0.5, y: -5.0 },
            PathVerb::LineTo { x: 1.0, y: -5.0 },
            PathVerb::LineTo { x: 1.0, y: -10.0 },
            PathVerb::Close,
        ]
    );
}

#[test]
fn offscreen_regions_are_skipped() {
    let points = vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)];
    let limits = band(5.0, -5.0);
    let augmented = annotate_series(&points, Some(&limits), 0.0);

    // Axis window sits entirely inside the band, so only the in-band
    // polygon is produced.
    let shapes: Vec<FillShape> =
        FillShapes::new(&augmented, Some(&limits), ctx(0.0, 0.0, 4.0)).collect();

    assert_eq!(shapes.len(), 1);
    let FillShape::Polygon { region, .. } = &shapes[0] else {
        panic!("expected polygon");
    };
    assert_eq!(*region, FillRegion::Band);
}

#[test]
fn isolated_point_without_band_yields_one_vertical() {
    let augmented = annotate_series(&[DataPoint::new(2.0, 3.0)], None, 1.0);

    let shapes: Vec<FillShape> =
        FillShapes::new(&augmented, None, ctx(-10.0, -10.0, 10.0)).collect();

    assert_eq!(
        shapes,
        vec![FillShape::Vertical {
            x: 2.0,
            y_from: -10.0,
            y_to: 3.0,
            region: FillRegion::Band,
        }]
    );
}

#[test]
fn isolated_point_with_band_yields_one_vertical_per_region() {
    let limits = band(5.0, -5.0);
    let augmented = annotate_series(&[DataPoint::new(2.0, 3.0)], Some(&limits), 1.0);

    let shapes: Vec<FillShape> =
        FillShapes::new(&augmented, Some(&limits), ctx(-10.0, -10.0, 10.0)).collect();

    assert_eq!(
        shapes,
        vec![
            FillShape::Vertical {
                x: 2.0,
                y_from: 5.0,
                y_to: 5.0,
                region: FillRegion::AboveTop,
            },
            FillShape::Vertical {
                x: 2.0,
                y_from: -10.0,
                y_to: -5.0,
                region: FillRegion::BelowBottom,
            },
            FillShape::Vertical {
                x: 2.0,
                y_from: -5.0,
                y_to: 3.0,
                region: FillRegion::Band,
            },
        ]
    );
}

#[test]
fn phase_scales_data_y_but_not_baselines() {
    let points = vec![DataPoint::new(0.0, 4.0), DataPoint::new(1.0, 8.0)];
    let augmented = annotate_series(&points, None, 0.0);
    let half_phase = FillContext {
        fill_min: 0.0,
        phase_y: 0.5,
        axis_min: 0.0,
        axis_max: 10.0,
    };

    let shapes: Vec<FillShape> = FillShapes::new(&augmented, None, half_phase).collect();

    assert_eq!(shapes.len(), 1);
    let FillShape::Polygon { path, .. } = &shapes[0] else {
        panic!("expected polygon");
    };
    assert_eq!(
        path.verbs(),
        &[
            PathVerb::MoveTo { x: 0.0, y: 0.0 },
            PathVerb::LineTo { x: 0.0, y: 2.0 },
            PathVerb::LineTo { x: 1.0, y: 4.0 },
            PathVerb::LineTo { x: 1.0, y: 0.0 },
            PathVerb::Close,
        ]
    );
}

#[test]
fn band_baseline_follows_the_fill_level() {
    let points = vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)];
    let limits = band(5.0, -5.0);
    let augmented = annotate_series(&points, Some(&limits), 0.0);

    // Fill level above the bottom threshold wins as the in-band baseline.
    let shapes: Vec<FillShape> =
        FillShapes::new(&augmented, Some(&limits), ctx(0.0, -10.0, 10.0)).collect();
    let FillShape::Polygon { path, region } = &shapes[0] else {
        panic!("expected polygon");
    };
    assert_eq!(*region, FillRegion::Band);
    assert_eq!(path.verbs()[0], PathVerb::MoveTo { x: 0.0, y: 0.0 });

    // A band entirely below the fill level anchors to its own top instead.
    let low = band(-2.0, -4.0);
    let augmented = annotate_series(&points, Some(&low), 0.0);
    let shapes: Vec<FillShape> =
        FillShapes::new(&augmented, Some(&low), ctx(0.0, -10.0, 10.0)).collect();
    let in_band = shapes
        .iter()
        .find_map(|shape| match shape {
            FillShape::Polygon { path, region } if *region == FillRegion::Band => Some(path),
            _ => None,
        })
        .expect("in-band polygon");
    assert_eq!(in_band.verbs()[0], PathVerb::MoveTo { x: 0.0, y: -2.0 });
}
