use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use pixel_arcade::core::{Bitmap, ColorSprite, ImageSprite, PixelSurface, SpriteGroup};
use pixel_arcade::term::{CellGrid, SurfaceView, Viewport};
use pixel_arcade::types::Rgb;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Both checks live in one test: the counter is process-global.
#[test]
fn compose_and_surface_view_are_allocation_free_after_warmup() {
    let mut surface = PixelSurface::new(160, 96, Rgb::BLACK);
    let view = SurfaceView::default();
    let viewport = Viewport::new(160, 48);
    let mut grid = CellGrid::new(viewport.width, viewport.height);

    let mut player = ColorSprite::new(10.0, 10.0, 8.0, 8.0, Rgb::WHITE);
    player.body.vx = 1.0;
    let image = ImageSprite::new(40.0, 40.0, Bitmap::from_fn(16, 16, |x, _| 0xFF000000 | x));

    let mut group = SpriteGroup::new(8);
    group.add(player);
    group.add(image.clone());
    group.compose_onto(&mut surface);
    view.render_into(&surface, viewport, &mut grid);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            player.advance(0.1, 96.0);
            group.compose_onto(&mut surface);
            view.render_into(&surface, viewport, &mut grid);
        }
    });

    assert_eq!(allocs, 0);
}
