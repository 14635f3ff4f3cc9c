//! Whole-pipeline properties of the heatmap renderer

use heatsplat::rendering::background::background_rows;
use heatsplat::rendering::bmp::{pixel_data_len, BmpHeader};
use heatsplat::rendering::intensity::accumulate;
use heatsplat::{Canvas, Color, HeatmapConfig, Point};

fn spread_points() -> Vec<Point> {
    vec![
        Point::new(0.1, 0.1),
        Point::new(0.15, 0.12),
        Point::new(0.9, 0.85),
        Point::weighted(0.5, 0.5, 2.0),
    ]
}

#[test]
fn empty_input_renders_pure_background() {
    let cfg = HeatmapConfig::default();
    for (w, h) in [(1, 1), (3, 5), (17, 4), (64, 48)] {
        let pixels = heatsplat::render_pixels(Canvas::new(w, h), &[], &cfg).unwrap();
        let rows = background_rows(h, cfg.background);
        for (y, row) in pixels.rows().enumerate() {
            assert!(row.iter().all(|&c| c == rows[y]), "{}x{} row {}", w, h, y);
        }
    }
}

#[test]
fn empty_input_bytes_match_gradient() {
    let bmp = heatsplat::generate_heatmap(Canvas::new(3, 5), &[], &HeatmapConfig::default()).unwrap();
    // bottom row first: full-brightness base in BGR
    assert_eq!(&bmp[54..57], &[250, 247, 245]);
    // top row last: 5% brightness, truncated
    let top = bmp.len() - 12;
    assert_eq!(&bmp[top..top + 3], &[12, 12, 12]);
}

#[test]
fn point_pixel_beats_far_pixels() {
    let canvas = Canvas::new(120, 80);
    let radius = 4.0;
    let points = spread_points();
    let mut grid = accumulate(canvas, &points, radius);
    grid.normalize();

    let reach = 3.0 * radius;
    for p in &points {
        let own = grid.get(
            (p.x * 120.0).min(119.0) as u32,
            (p.y * 80.0).min(79.0) as u32,
        );
        for y in 0..canvas.height {
            for x in 0..canvas.width {
                let far = points.iter().all(|q| {
                    let dx = f64::from(x) - q.x * 120.0;
                    let dy = f64::from(y) - q.y * 80.0;
                    (dx * dx + dy * dy).sqrt() > reach
                });
                if far {
                    assert!(own >= grid.get(x, y));
                }
            }
        }
    }
}

#[test]
fn normalized_peak_is_exactly_one() {
    let mut grid = accumulate(Canvas::new(60, 40), &spread_points(), 5.0);
    grid.normalize();
    assert_eq!(grid.peak(), 1.0);

    let mut empty = accumulate(Canvas::new(60, 40), &[], 5.0);
    empty.normalize();
    assert_eq!(empty.peak(), 0.0);
}

#[test]
fn header_round_trip() {
    for (w, h) in [(1, 1), (2, 3), (7, 7), (33, 10)] {
        let bmp = heatsplat::generate_heatmap(Canvas::new(w, h), &spread_points(), &HeatmapConfig::default())
            .unwrap();
        let header = BmpHeader::parse(&bmp).unwrap();
        assert_eq!(header.width, w as i32);
        assert_eq!(header.height, h as i32);
        assert_eq!(header.bits_per_pixel, 24);
        assert_eq!(header.file_size as usize, bmp.len());
        assert_eq!(header.image_size as usize, pixel_data_len(w, h));
    }
}

#[test]
fn generation_is_idempotent() {
    let cfg = HeatmapConfig { radius: 9.0, opacity: 0.8, ..Default::default() };
    let a = heatsplat::generate_heatmap(Canvas::new(50, 30), &spread_points(), &cfg).unwrap();
    let b = heatsplat::generate_heatmap(Canvas::new(50, 30), &spread_points(), &cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_opacity_hides_heat() {
    let cfg = HeatmapConfig { opacity: 0.0, ..Default::default() };
    let with = heatsplat::generate_heatmap(Canvas::new(20, 20), &spread_points(), &cfg).unwrap();
    let without = heatsplat::generate_heatmap(Canvas::new(20, 20), &[], &cfg).unwrap();
    assert_eq!(with, without);
}

#[test]
fn hot_spot_takes_hot_color() {
    let cfg = HeatmapConfig {
        opacity: 1.0,
        hot_color: Color::rgb(255, 0, 0),
        background: Color::WHITE,
        ..Default::default()
    };
    let pixels = heatsplat::render_pixels(Canvas::new(10, 10), &[Point::new(0.5, 0.5)], &cfg).unwrap();
    assert_eq!(pixels.get(5, 5), Color::rgb(255, 0, 0));
}

#[test]
fn invalid_inputs_fail_fast() {
    let pts = [Point::new(0.5, 0.5)];
    let bad_radius = HeatmapConfig { radius: 0.0, ..Default::default() };
    assert!(matches!(
        heatsplat::generate_heatmap(Canvas::new(4, 4), &pts, &bad_radius),
        Err(heatsplat::Error::InvalidRadius(_))
    ));
    let bad_opacity = HeatmapConfig { opacity: 1.5, ..Default::default() };
    assert!(matches!(
        heatsplat::generate_heatmap(Canvas::new(4, 4), &pts, &bad_opacity),
        Err(heatsplat::Error::InvalidOpacity(_))
    ));
    assert!(matches!(
        heatsplat::generate_heatmap(Canvas::new(4, 0), &pts, &HeatmapConfig::default()),
        Err(heatsplat::Error::InvalidCanvas { .. })
    ));
}
