// src/main.rs
//! Framebuffer rendering demo.
//!
//! Maps the configured framebuffer device, loads a TrueType font, and
//! walks through the engine's text and shape primitives. Pass a JSON
//! config path as the first argument to override the defaults.

use anyhow::Context;
use log::info;

use fbtext::{
    BoxSpec, BoxStyle, Config, Framebuffer, Rgb565, Surface, TextRenderer, TrueTypeFont,
};

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            Config::load(&path).with_context(|| format!("failed to load config '{path}'"))?
        }
        None => Config::default(),
    };
    info!(
        "display {}x{} on {}, font {}",
        config.display.width,
        config.display.height,
        config.display.device.display(),
        config.font.path.display()
    );

    let mut fb = Framebuffer::open(
        &config.display.device,
        config.display.width,
        config.display.height,
    )
    .context("failed to acquire the frame surface")?;
    let font = TrueTypeFont::from_file(&config.font.path)
        .with_context(|| format!("failed to load font '{}'", config.font.path.display()))?;
    let renderer = TextRenderer::new(font);

    let (width, height) = (fb.width(), fb.height());
    let mut surface = Surface::new(width, height, fb.pixels())?;
    surface.clear(Rgb565::BLACK);

    renderer.render(&mut surface, b"Plain text rendering", 50, 50, Rgb565::WHITE, 45.0);

    // A fixed-size rectangular box: both dimensions given, so no auto-sizing.
    renderer.render_with_box(
        &mut surface,
        b"Fixed-size box",
        50,
        100,
        Rgb565::YELLOW,
        &BoxSpec {
            color: Rgb565::BLUE,
            padding: 0,
            style: BoxStyle::Rectangle,
            radius: 0,
            width: 400,
            height: 50,
        },
        50.0,
    );

    // Auto-sized rounded boxes at increasing corner radii.
    for (text, y, radius, size, box_color) in [
        (&b"Auto-sized box (r=15)"[..], 170, 15, 25.0, Rgb565::RED),
        (&b"Auto-sized box (r=20)"[..], 220, 20, 20.0, Rgb565::MAGENTA),
        (&b"Auto-sized box (r=30)"[..], 280, 30, 20.0, Rgb565::CYAN),
    ] {
        renderer.render_with_box(
            &mut surface,
            text,
            50,
            y,
            Rgb565::WHITE,
            &BoxSpec {
                color: box_color,
                padding: 10,
                style: BoxStyle::Rounded,
                radius,
                width: 0,
                height: 0,
            },
            size,
        );
    }

    // Raw shape primitives, no text involved.
    surface.draw_rect(50, 350, 200, 60, Rgb565::GREEN);
    surface.fill_rect(300, 350, 200, 60, Rgb565::GREEN);
    surface.draw_rounded_rect(50, 420, 200, 60, 15, Rgb565::YELLOW);
    surface.fill_rounded_rect(300, 420, 200, 60, 25, Rgb565::YELLOW);

    // A square with radius = side/2 degenerates to a disc.
    surface.fill_rounded_rect(520, 100, 100, 100, 50, Rgb565::WHITE);
    renderer.render(&mut surface, b"round", 545, 140, Rgb565::BLACK, 20.0);

    // Multi-line output is repeated render calls at caller-chosen offsets.
    surface.fill_rounded_rect(520, 340, 240, 140, 15, Rgb565::LIGHT_GRAY);
    for (i, line) in [&b"first line"[..], b"second line", b"third line"]
        .into_iter()
        .enumerate()
    {
        renderer.render(
            &mut surface,
            line,
            535,
            360 + 30 * i as i32,
            Rgb565::RED,
            28.0,
        );
    }

    info!("demo frame rendered");
    Ok(())
}
