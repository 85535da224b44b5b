use std::path::Path;

use anyhow::{ensure, Context};
use glam::Vec2;
use image::{Rgba, RgbaImage};
use ring_scatter::prelude::{AreaBounds, DrawCommand};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when examples are chained.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Output image settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// Area region mapped onto the image, before margin.
    pub view: AreaBounds,
    /// Extra border around `view` in area units.
    pub margin: f32,
    pub background: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), view: AreaBounds) -> Self {
        Self {
            image_size,
            view,
            margin: 0.0,
            background: [0, 0, 0],
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    fn view_min_max(&self) -> (Vec2, Vec2) {
        (
            self.view.min - Vec2::splat(self.margin),
            self.view.max + Vec2::splat(self.margin),
        )
    }

    /// Area coordinates to pixel coordinates, y pointing down.
    fn to_pixel(&self, p: Vec2) -> Vec2 {
        let (min, max) = self.view_min_max();
        let size = max - min;
        let (w, h) = self.image_size;
        Vec2::new(
            (p.x - min.x) / size.x * w as f32,
            (max.y - p.y) / size.y * h as f32,
        )
    }

    fn pixels_per_unit(&self) -> f32 {
        let (min, max) = self.view_min_max();
        self.image_size.0 as f32 / (max.x - min.x)
    }
}

/// Rasterizes debug draw commands into a PNG at `path`.
pub fn render_draw_commands_to_png(
    commands: &[DrawCommand],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    ensure!(w > 0 && h > 0, "image size must be non-zero");
    let size = config.view.size() + Vec2::splat(config.margin * 2.0);
    ensure!(size.x > 0.0 && size.y > 0.0, "view must have a positive size");

    let [r, g, b] = config.background;
    let mut img = RgbaImage::from_pixel(w, h, Rgba([r, g, b, 255]));

    for command in commands {
        match *command {
            DrawCommand::Rect { min, max, color } => {
                let top_left = config.to_pixel(Vec2::new(min.x, max.y));
                let bottom_right = config.to_pixel(Vec2::new(max.x, min.y));
                draw_rect_outline(&mut img, top_left, bottom_right, Rgba(color));
            }
            DrawCommand::Point {
                position,
                radius,
                color,
            } => {
                let center = config.to_pixel(position);
                let radius_px = (radius * config.pixels_per_unit()).max(1.0);
                draw_disc(&mut img, center, radius_px, Rgba(color));
            }
        }
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Wrote {} draw commands to {}.", commands.len(), path.display());
    Ok(())
}

fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_rect_outline(img: &mut RgbaImage, top_left: Vec2, bottom_right: Vec2, color: Rgba<u8>) {
    let x0 = top_left.x.round() as i64;
    let y0 = top_left.y.round() as i64;
    let x1 = (bottom_right.x.round() as i64 - 1).max(x0);
    let y1 = (bottom_right.y.round() as i64 - 1).max(y0);
    for x in x0..=x1 {
        put(img, x, y0, color);
        put(img, x, y1, color);
    }
    for y in y0..=y1 {
        put(img, x0, y, color);
        put(img, x1, y, color);
    }
}

fn draw_disc(img: &mut RgbaImage, center: Vec2, radius: f32, color: Rgba<u8>) {
    let r = radius.ceil() as i64;
    let cx = center.x.floor() as i64;
    let cy = center.y.floor() as i64;
    let r2 = radius * radius;
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx * dx + dy * dy) as f32 <= r2 {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}
