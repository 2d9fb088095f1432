use std::env::args;
use std::fs::write;
use std::time::{Duration, Instant};
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use rgb::FromSlice;
use morphicon::*;

/// Plays `returned -> done -> late -> returned` and writes one PNG per frame
/// as `<prefix>-<n>.png`.
fn main() {
	let prefix = args().nth(1).unwrap_or_else(|| "frame".into());
	let (w, h) = (256, 256);
	let frame_time = Duration::from_millis(16);

	let mut icon = MorphingIcon::new(Config::default().with_stroke_width(12.0));
	icon.set_bounds(w as f32, h as f32);

	let mut canvas: Vec<u8> = vec![0; w * h * 4];
	let mut mask = vec![0u8; w * h];
	let mut n = 0;
	let now = Instant::now();

	for target in [IconType::Done, IconType::Late, IconType::Returned] {
		icon.animate_to(target);
		loop {
			let running = icon.tick(frame_time);
			if icon.take_redraw() {
				{
					let mut rasterizer = DefaultRasterizer::new(canvas.as_rgba_mut(), &mut mask, w, h, w, true).unwrap();
					rasterizer.clear();
					icon.draw(&mut rasterizer);
				}
				write_png(&format!("{}-{:03}.png", prefix, n), &canvas, w, h);
				n += 1;
			}
			if !running {
				break;
			}
		}
	}

	println!("rendered {} frames in {}ms.", n, now.elapsed().as_millis());
}

fn write_png(name: &str, canvas: &[u8], w: usize, h: usize) {
	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgba);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(canvas).unwrap();
	}
	write(name, &png_buf).unwrap();
}
