//! Compositor - clears a surface and draws sprites onto it in order
//!
//! Draw order is list order; later sprites overwrite earlier ones. Color
//! sprites are flat fills. Image sprites are blitted 1:1 with binary
//! transparency (alpha 0 skips the pixel, any other alpha overwrites).
//!
//! Positions and sizes are truncated toward zero to whole pixels before
//! drawing, and every write is clipped to the surface.

use crate::sprite::{AnySprite, ColorSprite, ImageSprite};
use crate::surface::PixelSurface;
use crate::types::pixel_alpha;

/// Clear `surface` to its background and draw `sprites` in order.
pub fn compose<'a>(surface: &mut PixelSurface, sprites: impl IntoIterator<Item = &'a AnySprite>) {
    surface.clear();
    for sprite in sprites {
        draw_sprite(surface, sprite);
    }
}

/// Draw one sprite without clearing. Inactive sprites are skipped.
pub fn draw_sprite(surface: &mut PixelSurface, sprite: &AnySprite) {
    match sprite {
        AnySprite::Color(s) => draw_color(surface, s),
        AnySprite::Image(s) => draw_image(surface, s),
    }
}

fn draw_color(surface: &mut PixelSurface, sprite: &ColorSprite) {
    let body = &sprite.body;
    if !body.active {
        return;
    }
    // Float casts saturate, so far off-surface bodies land near i32::MIN/MAX.
    let x0 = body.x as i32;
    let y0 = body.y as i32;
    surface.fill_rect(
        x0,
        y0,
        x0.saturating_add(body.width as i32),
        y0.saturating_add(body.height as i32),
        sprite.color.to_pixel(),
    );
}

fn draw_image(surface: &mut PixelSurface, sprite: &ImageSprite) {
    let body = &sprite.body;
    if !body.active {
        return;
    }
    let Some(image) = sprite.image() else {
        return;
    };

    let x0 = body.x as i32;
    let y0 = body.y as i32;
    // The source is never scaled: the drawn area is the display rectangle
    // further limited by the bitmap size.
    let draw_w = (body.width as i32).min(image.width() as i32);
    let draw_h = (body.height as i32).min(image.height() as i32);

    let src_w = image.width() as usize;
    let src = image.pixels();
    for sy in 0..draw_h.max(0) {
        let y = y0.saturating_add(sy);
        if y < 0 {
            continue;
        }
        if y >= surface.height() as i32 {
            break;
        }
        let row = sy as usize * src_w;
        for sx in 0..draw_w.max(0) {
            let x = x0.saturating_add(sx);
            if x < 0 {
                continue;
            }
            if x >= surface.width() as i32 {
                break;
            }
            let pixel = src[row + sx as usize];
            if pixel_alpha(pixel) > 0 {
                surface.set(x, y, pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::types::Rgb;

    const BG: Rgb = Rgb::new(10, 10, 10);

    #[test]
    fn later_sprites_win_on_overlap() {
        let mut surface = PixelSurface::new(20, 20, BG);
        let a: AnySprite = ColorSprite::new(0.0, 0.0, 10.0, 10.0, Rgb::new(255, 0, 0)).into();
        let b: AnySprite = ColorSprite::new(5.0, 5.0, 10.0, 10.0, Rgb::new(0, 0, 255)).into();
        compose(&mut surface, [&a, &b]);

        assert_eq!(surface.get(7, 7), Some(Rgb::new(0, 0, 255).to_pixel()));
        assert_eq!(surface.get(2, 2), Some(Rgb::new(255, 0, 0).to_pixel()));
        assert_eq!(surface.get(18, 2), Some(BG.to_pixel()));
    }

    #[test]
    fn inactive_sprites_are_not_drawn() {
        let mut surface = PixelSurface::new(4, 4, BG);
        let mut s = ColorSprite::new(0.0, 0.0, 4.0, 4.0, Rgb::WHITE);
        s.body.active = false;
        compose(&mut surface, [&AnySprite::from(s)]);
        assert!(surface.pixels().iter().all(|&p| p == BG.to_pixel()));
    }

    #[test]
    fn transparent_pixels_are_skipped() {
        let mut surface = PixelSurface::new(4, 1, BG);
        let bmp = Bitmap::from_pixels(4, 1, vec![0xFF112233, 0x00FFFFFF, 0x01445566, 0]).unwrap();
        let sprite: AnySprite = ImageSprite::new(0.0, 0.0, bmp).into();
        compose(&mut surface, [&sprite]);
        assert_eq!(
            surface.pixels(),
            &[0xFF112233, BG.to_pixel(), 0x01445566, BG.to_pixel()]
        );
    }

    #[test]
    fn image_clipped_at_negative_origin_keeps_source_offset() {
        let mut surface = PixelSurface::new(3, 3, BG);
        let bmp = Bitmap::from_fn(3, 3, |x, y| 0xFF000000 | (y * 3 + x));
        let sprite: AnySprite = ImageSprite::new(-1.0, -1.0, bmp).into();
        compose(&mut surface, [&sprite]);
        // Surface (0,0) shows source (1,1).
        assert_eq!(surface.get(0, 0), Some(0xFF000004));
        assert_eq!(surface.get(1, 1), Some(0xFF000008));
        assert_eq!(surface.get(2, 2), Some(BG.to_pixel()));
    }

    #[test]
    fn image_is_not_scaled_to_a_larger_body() {
        let mut surface = PixelSurface::new(4, 4, BG);
        let mut sprite = ImageSprite::new(0.0, 0.0, Bitmap::from_fn(2, 2, |_, _| 0xFFABCDEF));
        sprite.body.width = 4.0;
        sprite.body.height = 4.0;
        compose(&mut surface, [&AnySprite::from(sprite)]);
        assert_eq!(surface.get(1, 1), Some(0xFFABCDEF));
        assert_eq!(surface.get(2, 2), Some(BG.to_pixel()));
    }

    #[test]
    fn released_image_is_skipped() {
        let mut surface = PixelSurface::new(2, 2, BG);
        let mut sprite = ImageSprite::new(0.0, 0.0, Bitmap::from_fn(2, 2, |_, _| 0xFFFFFFFF));
        sprite.release();
        sprite.body.active = true;
        compose(&mut surface, [&AnySprite::from(sprite)]);
        assert!(surface.pixels().iter().all(|&p| p == BG.to_pixel()));
    }

    #[test]
    fn far_off_surface_sprites_draw_nothing() {
        let mut surface = PixelSurface::new(8, 8, BG);
        let scene: Vec<AnySprite> = vec![
            ColorSprite::new(3.0e9, 0.0, 10.0, 10.0, Rgb::WHITE).into(),
            ColorSprite::new(0.0, 3.0e9, 10.0, 10.0, Rgb::WHITE).into(),
            ColorSprite::new(-3.0e9, -3.0e9, 10.0, 10.0, Rgb::WHITE).into(),
            ColorSprite::new(0.0, 0.0, 3.0e9, 3.0e9, Rgb::WHITE).into(),
            ImageSprite::new(3.0e9, 3.0e9, Bitmap::from_fn(2, 2, |_, _| 0xFFFFFFFF)).into(),
        ];
        compose(&mut surface, &scene[..4]);
        assert!(surface.pixels().iter().all(|&p| p == Rgb::WHITE.to_pixel()));

        compose(&mut surface, [&scene[0], &scene[1], &scene[2], &scene[4]]);
        assert!(surface.pixels().iter().all(|&p| p == BG.to_pixel()));
    }

    #[test]
    fn compose_clears_previous_frame() {
        let mut surface = PixelSurface::new(2, 2, BG);
        surface.set(0, 0, 0xFFFFFFFF);
        compose(&mut surface, std::iter::empty());
        assert_eq!(surface.get(0, 0), Some(BG.to_pixel()));
    }
}
