use tinyraster::{
    math::distance, BoundsMode, Canvas, Color, Interpolate, Position, Rng, ShadedVertex, ShaderStage, Uniform,
};
use vek::{Rgb, Vec2};

const W: usize = 640;
const H: usize = 480;

/// Zooms the scene about the centre of the screen and shows the unzoomed colours through a circular lens around
/// the cursor. Everything outside the lens is mixed with noise.
///
/// Uniforms: `[zoom, cursor_x, cursor_y, _, _, _, radius]`. The three colour slots are unused.
struct Lens {
    zoom: f64,
    cursor: Position,
    radius: f64,
    rng: Rng,
}

impl ShaderStage for Lens {
    fn set_uniforms(&mut self, uniform: &Uniform) {
        self.zoom = uniform[0];
        self.cursor = Position::new(uniform[1].max(0.0) as usize, uniform[2].max(0.0) as usize);
        self.radius = uniform[6];
    }

    // Zoomed vertices easily leave the screen
    fn bounds_mode(&self) -> BoundsMode {
        BoundsMode::Clip
    }

    fn vertex_shader(&mut self, mut vertex: ShadedVertex) -> ShadedVertex {
        let centre = Vec2::new((W / 2) as f64, (H / 2) as f64);
        vertex.pos = centre - (centre - vertex.pos) * self.zoom;
        vertex
    }

    fn fragment_shader(&mut self, fragment: &ShadedVertex) -> Color {
        let inside = fragment
            .position()
            .map_or(false, |pos| distance(pos, self.cursor) <= self.radius * self.zoom);
        if inside {
            return fragment.to_color();
        }

        let noise = Rgb::<f64>::from(Color::random(&mut self.rng));
        Color::from_rgb_f64(Rgb::lerp_unchecked(fragment.color, noise, 0.5))
    }
}

fn main() -> tinyraster::Result<()> {
    env_logger::init();

    let (w, h) = ((W - 1) as f64, (H - 1) as f64);
    let vertices = [
        ShadedVertex::new(0.0, 0.0, 255.0, 0.0, 0.0),
        ShadedVertex::new(w, h, 0.0, 255.0, 0.0),
        ShadedVertex::new(0.0, h, 0.0, 0.0, 255.0),
        ShadedVertex::new(w, 0.0, 0.0, 0.0, 255.0),
    ];
    let indices = [0, 1, 2, 0, 1, 3];

    let mut lens = Lens {
        zoom: 1.0,
        cursor: Position::new(W / 2, H / 2),
        radius: 20.0,
        rng: Rng::new(7),
    };

    let frames = [
        Uniform::new([1.0, 320.0, 240.0, 0.0, 0.0, 0.0, 60.0]),
        Uniform::new([1.5, 100.0, 100.0, 0.0, 0.0, 0.0, 40.0]),
        Uniform::new([0.5, 500.0, 400.0, 0.0, 0.0, 0.0, 80.0]),
    ];

    let mut canvas = Canvas::new(W, H);
    for (i, uniform) in frames.iter().enumerate() {
        canvas.pixels_mut().iter_mut().for_each(|c| *c = Color::BLACK);
        lens.set_uniforms(uniform);
        lens.render(&mut canvas, &vertices, &indices)?;

        let path = format!("lens_{}.ppm", i);
        canvas.save_image(&path)?;
        log::info!("wrote {} (zoom {})", path, uniform[0]);
    }
    Ok(())
}
