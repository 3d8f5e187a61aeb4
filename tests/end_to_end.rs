// tests/end_to_end.rs
//! End-to-end scenarios driving the public API with the deterministic
//! font engine.

use fbtext::{
    utf8, BoxSpec, BoxStyle, FixedFont, FontEngine, Pixel, Rgb565, Surface, TextRenderer,
};

fn lit_pixels(surface: &Surface<'_, Rgb565>, background: Rgb565) -> Vec<(i32, i32)> {
    let (w, h) = (surface.width() as i32, surface.height() as i32);
    (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| surface.get_pixel(x, y) != Some(background))
        .collect()
}

#[test]
fn clear_fill_readback_scenario() {
    let mut backing = vec![Rgb565::RED; 100];
    let mut surface = Surface::new(10, 10, &mut backing).unwrap();
    surface.clear(Rgb565::BLACK);
    surface.fill_rect(2, 2, 4, 4, Rgb565::WHITE);
    assert_eq!(surface.get_pixel(4, 4), Some(Rgb565::WHITE));
    assert_eq!(surface.get_pixel(0, 0), Some(Rgb565::BLACK));
}

#[test_log::test]
fn single_codepoint_render_scenario() {
    let mut backing = vec![Rgb565::BLACK; 64 * 64];
    let mut surface = Surface::new(64, 64, &mut backing).unwrap();
    let renderer = TextRenderer::new(FixedFont::new());

    let (x, y) = (10, 10);
    renderer.render(&mut surface, b"A", x, y, Rgb565::WHITE, 20.0);

    let lit = lit_pixels(&surface, Rgb565::BLACK);
    assert!(!lit.is_empty(), "glyph should touch pixels");

    let min_x = lit.iter().map(|&(px, _)| px).min().unwrap();
    let max_x = lit.iter().map(|&(px, _)| px).max().unwrap();
    let min_y = lit.iter().map(|&(_, py)| py).min().unwrap();
    let max_y = lit.iter().map(|&(_, py)| py).max().unwrap();
    assert!(min_x >= 0 && max_x < 64 && min_y >= 0 && max_y < 64);

    // The glyph may not start left of the pen minus its side bearing.
    let font = renderer.font();
    let scale = font.scale_for_pixel_height(20.0);
    let lsb = font.horizontal_metrics('A' as u32).left_side_bearing * scale;
    assert!(min_x >= x - lsb.ceil() as i32);
}

#[test_log::test]
fn auto_sized_box_matches_measured_extent() {
    let mut backing = vec![Rgb565::BLACK; 128 * 64];
    let mut surface = Surface::new(128, 64, &mut backing).unwrap();
    let renderer = TextRenderer::new(FixedFont::new());

    let (x, y, padding, size) = (20, 20, 5, 20.0);
    let spec = BoxSpec {
        color: Rgb565::BLUE,
        padding,
        style: BoxStyle::Rectangle,
        radius: 0,
        width: 0,
        height: 0,
    };
    renderer.render_with_box(&mut surface, b"ABC", x, y, Rgb565::WHITE, &spec, size);

    // The top padding row holds nothing but box pixels, so its extent is
    // the box width; the left padding column likewise gives the height.
    let top = y - padding;
    let left = x - padding;
    let box_row: Vec<i32> = (0..128)
        .filter(|&px| surface.get_pixel(px, top) == Some(Rgb565::BLUE))
        .collect();
    let box_col: Vec<i32> = (0..64)
        .filter(|&py| surface.get_pixel(left, py) == Some(Rgb565::BLUE))
        .collect();

    let expected_width = renderer.measure_width(b"ABC", size) + 2 * padding;
    let expected_height = renderer.measure_height(size) + 2 * padding;
    assert_eq!(box_row.len() as i32, expected_width);
    assert_eq!(box_col.len() as i32, expected_height);
    assert_eq!(*box_row.first().unwrap(), left);
    assert_eq!(*box_col.first().unwrap(), top);
}

#[test]
fn zero_radius_box_equals_rectangle_box() {
    let draw = |style: BoxStyle| {
        let mut backing = vec![Rgb565::BLACK; 96 * 48];
        {
            let mut surface = Surface::new(96, 48, &mut backing).unwrap();
            let renderer = TextRenderer::new(FixedFont::new());
            let spec = BoxSpec {
                color: Rgb565::GREEN,
                padding: 6,
                style,
                radius: 0,
                width: 0,
                height: 0,
            };
            renderer.render_with_box(&mut surface, b"AB", 15, 12, Rgb565::WHITE, &spec, 20.0);
        }
        backing
    };
    assert_eq!(draw(BoxStyle::Rounded), draw(BoxStyle::Rectangle));
}

#[test]
fn single_point_line() {
    let mut backing = vec![Rgb565::BLACK; 16 * 16];
    let mut surface = Surface::new(16, 16, &mut backing).unwrap();
    surface.draw_line(6, 6, 6, 6, Rgb565::WHITE);
    assert_eq!(lit_pixels(&surface, Rgb565::BLACK), vec![(6, 6)]);
}

#[test]
fn blend_endpoints_through_packed_domain() {
    let bg = Rgb565::pack(10, 200, 30);
    let fg = Rgb565::pack(240, 20, 180);
    assert_eq!(Rgb565::blend(bg, fg, 0), bg);
    assert_eq!(Rgb565::blend(bg, fg, 255), fg);
}

#[test]
fn decode_round_trip_with_isolated_failures() {
    // Valid runs re-encode to the original bytes.
    let text = "mixed 中文 and 😀";
    let rebuilt: String = utf8::scalars(text.as_bytes())
        .map(|cp| char::from_u32(cp).unwrap())
        .collect();
    assert_eq!(rebuilt.as_bytes(), text.as_bytes());

    // Each malformed byte becomes exactly one replacement scalar.
    let mut bytes = b"ok".to_vec();
    bytes.push(0xFF);
    bytes.push(0xFE);
    bytes.extend_from_slice("中".as_bytes());
    let decoded: Vec<u32> = utf8::scalars(&bytes).collect();
    assert_eq!(
        decoded,
        vec![
            'o' as u32,
            'k' as u32,
            utf8::REPLACEMENT,
            utf8::REPLACEMENT,
            '中' as u32
        ]
    );
}

#[test]
fn boxed_text_then_overdraw_shapes() {
    // A small dashboard-style frame: boxed label, separator line, gauge
    // outline. Exercises every primitive in one pass.
    let mut backing = vec![Rgb565::BLACK; 160 * 80];
    let mut surface = Surface::new(160, 80, &mut backing).unwrap();
    let renderer = TextRenderer::new(FixedFont::new());

    renderer.render_with_box(
        &mut surface,
        b"STATUS",
        12,
        8,
        Rgb565::BLACK,
        &BoxSpec {
            color: Rgb565::LIGHT_GRAY,
            padding: 4,
            style: BoxStyle::Rounded,
            radius: 5,
            width: 0,
            height: 0,
        },
        16.0,
    );
    surface.draw_line(8, 40, 151, 40, Rgb565::WHITE);
    surface.draw_rounded_rect(8, 48, 80, 24, 6, Rgb565::GREEN);
    surface.fill_rounded_rect(96, 48, 56, 24, 6, Rgb565::DARK_GREEN);

    // Separator present and endpoint-inclusive.
    assert_eq!(surface.get_pixel(8, 40), Some(Rgb565::WHITE));
    assert_eq!(surface.get_pixel(151, 40), Some(Rgb565::WHITE));
    // Gauge outline corner is rounded off.
    assert_eq!(surface.get_pixel(8, 48), Some(Rgb565::BLACK));
    // Filled gauge body present.
    assert_eq!(surface.get_pixel(120, 60), Some(Rgb565::DARK_GREEN));
}
