use crate::{
    foundation::{
        core::{Point, Rect, Rgba8},
        math::mul_div255_u8,
    },
    render::frame::FrameRGBA,
};

pub type PremulRgba8 = [u8; 4];

/// Source-over of one premultiplied pixel, with extra layer opacity.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Pixel range whose centers fall inside `rect`, clipped to the frame.
pub(crate) fn pixel_span(frame: &FrameRGBA, rect: Rect) -> Option<(u32, u32, u32, u32)> {
    let clip = |v: f64, max: u32| -> u32 { (v - 0.5).ceil().clamp(0.0, f64::from(max)) as u32 };
    let x0 = clip(rect.x0, frame.width);
    let x1 = clip(rect.x1, frame.width);
    let y0 = clip(rect.y0, frame.height);
    let y1 = clip(rect.y1, frame.height);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

/// Paint `rect` with a solid straight-alpha color.
pub fn fill_rect(frame: &mut FrameRGBA, rect: Rect, color: Rgba8, opacity: f32) {
    let src = color.to_premul();
    let Some((x0, y0, x1, y1)) = pixel_span(frame, rect) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let out = over(frame.pixel(x, y), src, opacity);
            frame.set_pixel(x, y, out);
        }
    }
}

/// Paint `rect` with a color computed per pixel center.
pub fn fill_rect_with(frame: &mut FrameRGBA, rect: Rect, shade: impl Fn(Point) -> Rgba8) {
    let Some((x0, y0, x1, y1)) = pixel_span(frame, rect) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let out = over(frame.pixel(x, y), shade(p).to_premul(), 1.0);
            frame.set_pixel(x, y, out);
        }
    }
}

/// Composite `src` onto `dst` with its top-left corner at `(dx, dy)`.
pub fn blit(dst: &mut FrameRGBA, src: &FrameRGBA, dx: i64, dy: i64, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }
    for sy in 0..src.height {
        let y = i64::from(sy) + dy;
        if y < 0 || y >= i64::from(dst.height) {
            continue;
        }
        for sx in 0..src.width {
            let x = i64::from(sx) + dx;
            if x < 0 || x >= i64::from(dst.width) {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            let out = over(dst.pixel(x, y), src.pixel(sx, sy), opacity);
            dst.set_pixel(x, y, out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
