//! Line rasterization tests

use tinyraster::{Canvas, Color, LineRasterizer, Lines, Position, Rng};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

/// Fixed cases plus a reproducible batch of random lines
fn lines() -> Vec<(Position, Position)> {
    let p = Position::new;
    let mut cases = vec![
        // Horizontal
        (p(0, 0), p(WIDTH - 1, 0)),
        // Vertical
        (p(0, 0), p(0, HEIGHT - 1)),
        // Shallower than 45 degrees
        (p(0, HEIGHT / 2), p(WIDTH - 1, HEIGHT / 4)),
        // Steeper than 45 degrees
        (p(0, HEIGHT / 2), p(WIDTH / 4, HEIGHT - 1)),
        // 45 degrees
        (p(0, 0), p(120, 120)),
        // A single point
        (p(17, 4), p(17, 4)),
    ];
    let mut rng = Rng::new(0xb7e5);
    for _ in 0..500 {
        cases.push((
            Position::random(WIDTH, HEIGHT, &mut rng),
            Position::random(WIDTH, HEIGHT, &mut rng),
        ));
    }
    cases
}

#[test]
fn test_line_contains_endpoints() {
    for (start, end) in lines() {
        let positions = Lines.pixel_positions(start, end);
        assert_eq!(positions.first(), Some(&start));
        assert_eq!(positions.last(), Some(&end));
    }
}

#[test]
fn test_line_reverse_is_exact() {
    for (start, end) in lines() {
        let mut reversed = Lines.pixel_positions(end, start);
        reversed.reverse();
        assert_eq!(
            Lines.pixel_positions(start, end),
            reversed,
            "{:?} -> {:?}",
            start,
            end
        );
    }
}

#[test]
fn test_line_is_connected() {
    for (start, end) in lines() {
        let positions = Lines.pixel_positions(start, end);
        for pair in positions.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let step_x = (a.x as isize - b.x as isize).abs();
            let step_y = (a.y as isize - b.y as isize).abs();
            assert!(step_x <= 1 && step_y <= 1, "gap between {:?} and {:?}", a, b);
            assert!(step_x + step_y > 0, "repeated position {:?}", a);
        }
    }
}

#[test]
fn test_line_visits_every_major_step() {
    for (start, end) in lines() {
        let dx = (start.x as isize - end.x as isize).abs() as usize;
        let dy = (start.y as isize - end.y as isize).abs() as usize;
        assert_eq!(Lines.pixel_positions(start, end).len(), dx.max(dy) + 1);
    }
}

#[test]
fn test_line_stays_close_to_the_ideal_line() {
    for (start, end) in lines().into_iter().filter(|(s, e)| s != e) {
        let (x0, y0) = (start.x as f64, start.y as f64);
        let (dx, dy) = (end.x as f64 - x0, end.y as f64 - y0);
        for pos in Lines.pixel_positions(start, end) {
            let deviation = if dx.abs() >= dy.abs() {
                (pos.y as f64 - (y0 + dy * (pos.x as f64 - x0) / dx)).abs()
            } else {
                (pos.x as f64 - (x0 + dx * (pos.y as f64 - y0) / dy)).abs()
            };
            assert!(deviation <= 0.5 + 1e-9, "{:?} strays from {:?} -> {:?}", pos, start, end);
        }
    }
}

#[test]
fn test_draw_random_lines() {
    let mut rng = Rng::new(2023);
    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    canvas.clear(Color::RED);

    for _ in 0..100 {
        let start = Position::random(WIDTH, HEIGHT, &mut rng);
        let end = Position::random(WIDTH, HEIGHT, &mut rng);
        let color = Color::random(&mut rng);
        Lines.draw_line(&mut canvas, start, end, color).unwrap();
        assert_eq!(canvas.get_pixel(end).unwrap(), color);
    }
}
