use tinyraster::{Canvas, Color, Lines, Position, Rng};

const W: usize = 640;
const H: usize = 480;

fn main() -> tinyraster::Result<()> {
    env_logger::init();

    let mut canvas = Canvas::new(W, H);
    canvas.clear(Color::RED);

    // Same seed, same picture
    let mut rng = Rng::new(0x11e5);
    for _ in 0..100 {
        let start = Position::random(W, H, &mut rng);
        let end = Position::random(W, H, &mut rng);
        Lines.draw_line(&mut canvas, start, end, Color::random(&mut rng))?;
    }

    canvas.save_image("drawLine.ppm")?;
    log::info!("wrote drawLine.ppm");
    Ok(())
}
