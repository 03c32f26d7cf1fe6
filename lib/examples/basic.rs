/// Basic example: Render a synthetic image as colored text art
///
/// Draws a gradient with a bright circle and prints the plain-text rendering
use chromaglyph::{RenderConfig, render};
use image::{Rgb, RgbImage};

fn main() {
    println!("chromaglyph - Basic Example");
    println!("===========================\n");

    let width = 160;
    let height = 120;

    // Horizontal gradient from dark blue to orange
    let mut img = RgbImage::from_fn(width, height, |x, _| {
        let t = x as f32 / (width - 1) as f32;
        Rgb([(t * 255.0) as u8, (t * 140.0) as u8, ((1.0 - t) * 120.0) as u8])
    });

    // White circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 35.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            if (dx * dx + dy * dy).sqrt() < radius {
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let config = RenderConfig::with_width(64);
    println!("Rendering at {} columns", config.width);
    println!();

    let grid = render(&img, &config).expect("Failed to render");

    print!("{}", grid.to_plain_text());
    println!("\nGrid: {}x{} cells", grid.width(), grid.height());
}
