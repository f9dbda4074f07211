use gridline::{bresenham_3d, line_to, line_to_3d, trig_dist, Line2, Point2, Point3};
use gridline_test_utils::{assert_line_3d, reference_line_to, FuzzConfig, PointSource};

#[test_log::test]
fn line_to_matches_reference_on_random_pairs() {
    let config = FuzzConfig::default();
    for (p1, p2) in PointSource::pairs2(&config) {
        assert_eq!(
            line_to(p1, p2, 0),
            reference_line_to(p1, p2, 0),
            "line {p1} -> {p2}"
        );
    }
}

#[test]
fn line_to_matches_reference_under_other_seeds() {
    for seed in 1..4 {
        let config = FuzzConfig::builder()
            .seed(seed)
            .coordinate_range(20)
            .cases(300)
            .build()
            .unwrap();
        for (p1, p2) in PointSource::pairs2(&config) {
            assert_eq!(line_to(p1, p2, 0), reference_line_to(p1, p2, 0));
        }
    }
}

#[test]
fn trig_dist_basics() {
    assert_eq!(trig_dist(Point2::ZERO, Point2::ZERO), 0.0);
    assert_eq!(trig_dist(Point2::ZERO, Point2::EAST), 1.0);
}

/// Every error term between -1 and twice the ideal start offset (in the
/// direction of its sign) still ends the line on its end point, and gives
/// the same points as the reference rasterizer.
#[test]
fn line_to_boundaries() {
    for i in -60..60 {
        for j in -60..60 {
            let a = Point2::new(i, j).abs() * 2;
            let dominant = a.x.max(a.y);
            let minor = a.x.min(a.y);
            let ideal = minor - dominant / 2;
            let sign = ideal.signum();
            let max_offset = ideal.abs() * 2 + 1;
            let end = Point2::new(i, j);
            for k in -1..=max_offset {
                let t = k * sign;
                let line = line_to(Point2::ZERO, end, t);
                assert_eq!(line.last(), Some(&end), "t = {t}");
                assert_eq!(line, reference_line_to(Point2::ZERO, end, t), "t = {t}");
            }
        }
    }
}

#[test]
fn iterator_and_callback_agree() {
    let config = FuzzConfig::builder().cases(200).build().unwrap();
    let mut source = PointSource::new(&config);
    for _ in 0..config.cases() {
        let (p1, p2) = (source.point2(), source.point2());
        let t = source.int(-3, 3);
        let mut visited = Vec::new();
        gridline::bresenham_2d(p1, p2, t, |p| {
            visited.push(p);
            true
        });
        assert_eq!(visited, Line2::new(p1, p2, t).collect::<Vec<_>>());
    }
}

fn collect_3d(source: Point3, destination: Point3) -> Vec<Point3> {
    let mut path = Vec::new();
    bresenham_3d(source, destination, 0, 0, |p| {
        path.push(p);
        true
    });
    path
}

/// Lines from `src` to every point on the three far faces of the cube of
/// side `dist` in the octant given by `sign`.
fn check_triaxis(src: Point3, sign: Point3, dist: i32) {
    for a in 0..=dist {
        for b in 0..=dist {
            for offset in [
                Point3::new(a, b, dist),
                Point3::new(a, dist, b),
                Point3::new(dist, b, a),
            ] {
                let dst = src
                    + Point3::new(offset.x * sign.x, offset.y * sign.y, offset.z * sign.z);
                assert_line_3d(src, dst, &collect_3d(src, dst), dist as usize);
            }
        }
    }
}

fn check_cube(src: Point3, dist: i32) {
    for x in [-1, 1] {
        for y in [-1, 1] {
            for z in [-1, 1] {
                check_triaxis(src, Point3::new(x, y, z), dist);
            }
        }
    }
}

#[test]
fn bresenham_3d_reaches_immediate_neighbours() {
    check_cube(Point3::ZERO, 1);
}

#[test_log::test]
fn bresenham_3d_reaches_every_point_in_cube() {
    check_cube(Point3::ZERO, 5);
    check_cube(Point3::new(-7, 13, 2), 3);
}

#[test]
fn line_to_3d_on_random_pairs_is_well_formed() {
    let config = FuzzConfig::builder()
        .seed(9)
        .coordinate_range(30)
        .cases(500)
        .build()
        .unwrap();
    let mut source = PointSource::new(&config);
    for _ in 0..config.cases() {
        let (p1, p2) = (source.point3(), source.point3());
        if p1 == p2 {
            continue;
        }
        let len = gridline::square_dist_3d(p1, p2) as usize;
        assert_line_3d(p1, p2, &line_to_3d(p1, p2, 0, 0), len);
    }
}
