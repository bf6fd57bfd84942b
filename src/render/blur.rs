use crate::{
    foundation::{
        core::Rect,
        error::{VitrineError, VitrineResult},
    },
    render::{composite::pixel_span, frame::FrameRGBA},
};

/// Gaussian blur of a premultiplied RGBA8 buffer. Edges clamp.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> VitrineResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| VitrineError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(VitrineError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    convolve_axis(src, &mut tmp, width, height, Axis::Rows, &kernel);
    convolve_axis(&tmp, &mut out, width, height, Axis::Columns, &kernel);
    Ok(out)
}

/// Kernel radius covering three standard deviations.
pub fn radius_for_sigma(sigma: f64) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil() as u32
}

/// Blur the pixels under `rect` in place, sampling only from inside it.
///
/// This is what `backdrop-filter: blur(Npx)` does to the backdrop of an
/// element: the blur radius in CSS is the Gaussian standard deviation.
pub fn blur_region(frame: &mut FrameRGBA, rect: Rect, sigma_px: f64) -> VitrineResult<()> {
    let radius = radius_for_sigma(sigma_px);
    if radius == 0 {
        return Ok(());
    }
    let Some((x0, y0, x1, y1)) = pixel_span(frame, rect) else {
        return Ok(());
    };
    let (w, h) = (x1 - x0, y1 - y0);

    let mut region = Vec::with_capacity((w as usize) * (h as usize) * 4);
    for y in y0..y1 {
        for x in x0..x1 {
            region.extend_from_slice(&frame.pixel(x, y));
        }
    }
    let blurred = blur_rgba8_premul(&region, w, h, radius, sigma_px as f32)?;
    for (i, px) in blurred.chunks_exact(4).enumerate() {
        let x = x0 + (i as u32) % w;
        let y = y0 + (i as u32) / w;
        frame.set_pixel(x, y, [px[0], px[1], px[2], px[3]]);
    }
    Ok(())
}

/// Normalized Gaussian taps in Q16 fixed point, summing to exactly `1 << 16`.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> VitrineResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(VitrineError::validation("blur sigma must be > 0"));
    }

    let r = i64::from(radius);
    let two_var = 2.0 * f64::from(sigma).powi(2);
    let taps: Vec<f64> = (-r..=r)
        .map(|i| (-((i * i) as f64) / two_var).exp())
        .collect();
    let total: f64 = taps.iter().sum();
    if total <= 0.0 {
        return Err(VitrineError::render("gaussian kernel sum is zero"));
    }

    let mut q: Vec<u32> = taps
        .iter()
        .map(|t| ((t / total) * Q16).round().clamp(0.0, Q16) as u32)
        .collect();
    // rounding drift lands on the center tap
    let drift = Q16 as i64 - q.iter().map(|&v| i64::from(v)).sum::<i64>();
    let mid = q.len() / 2;
    q[mid] = (i64::from(q[mid]) + drift).clamp(0, Q16 as i64) as u32;
    Ok(q)
}

const Q16: f64 = 65536.0;

#[derive(Clone, Copy)]
enum Axis {
    Rows,
    Columns,
}

/// One separable pass along `axis`, clamping samples at the buffer edge.
fn convolve_axis(src: &[u8], dst: &mut [u8], width: u32, height: u32, axis: Axis, k: &[u32]) {
    let (w, h) = (width as usize, height as usize);
    let radius = k.len() / 2;
    let (len, stride) = match axis {
        Axis::Rows => (w, 1),
        Axis::Columns => (h, w),
    };
    let lines = match axis {
        Axis::Rows => h,
        Axis::Columns => w,
    };

    for line in 0..lines {
        let base = match axis {
            Axis::Rows => line * w,
            Axis::Columns => line,
        };
        for pos in 0..len {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sp = (pos + ki).saturating_sub(radius).min(len - 1);
                let idx = (base + sp * stride) * 4;
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out = (base + pos * stride) * 4;
            for (c, a) in acc.into_iter().enumerate() {
                dst[out + c] = q16_to_u8(a);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
