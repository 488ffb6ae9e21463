//! TerminalPlatform: runs a game in the terminal with crossterm.
//!
//! Presenting maps the surface through [`SurfaceView`] and flushes it with
//! [`TerminalRenderer`]. Input is drained without blocking; each press or
//! repeat marks the key held, and keys are released either by a real release
//! event or, on terminals that never send one, by the hold timeout.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use tracing::{debug, info};

use crate::core::{
    ArcadeConfig, AudioSink, BlockFont, FontRasterizer, KeyboardState, PixelSurface, Platform,
};
use crate::cells::CellGrid;
use crate::input::{is_close_request, map_key_event, KeyHoldTracker};
use crate::media::CommandAudio;
use crate::renderer::TerminalRenderer;
use crate::surface_view::{SurfaceView, Viewport};

pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    view: SurfaceView,
    grid: CellGrid,
    font: BlockFont,
    held: KeyHoldTracker,
    audio: Box<dyn AudioSink>,
    keyboard_enhanced: bool,
    active: bool,
}

impl TerminalPlatform {
    /// Enter raw mode on the alternate screen and request key release events.
    pub fn new(config: &ArcadeConfig) -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter(&config.title)?;

        let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
            && execute!(
                std::io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .is_ok();
        info!(keyboard_enhanced, "terminal platform ready");

        Ok(Self {
            renderer,
            view: SurfaceView::new(config.background),
            grid: CellGrid::new(0, 0),
            font: BlockFont::default(),
            held: KeyHoldTracker::with_key_release_timeout_ms(config.key_release_timeout_ms),
            audio: Box::new(CommandAudio::system()),
            keyboard_enhanced,
            active: true,
        })
    }

    pub fn with_audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        if self.keyboard_enhanced {
            let _ = execute!(std::io::stdout(), PopKeyboardEnhancementFlags);
        }
        self.renderer.exit()
    }
}

impl Platform for TerminalPlatform {
    fn present(&mut self, surface: &PixelSurface) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(surface, Viewport::new(w, h), &mut self.grid);
        self.renderer.present(&mut self.grid)
    }

    fn pump_events(&mut self, keys: &mut KeyboardState) -> Result<bool> {
        let now = Instant::now();
        while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && is_close_request(key) {
                        debug!("close requested from keyboard");
                        return Ok(false);
                    }
                    let Some(k) = map_key_event(key) else {
                        continue;
                    };
                    match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            self.held.press(k, now);
                            keys.set_key(k, true);
                        }
                        KeyEventKind::Release => {
                            self.held.release(k);
                            keys.set_key(k, false);
                        }
                    }
                }
                Event::Resize(_, _) => self.renderer.invalidate(),
                _ => {}
            }
        }

        for key in self.held.expire(now) {
            keys.set_key(key, false);
        }
        Ok(true)
    }

    fn font(&self) -> &dyn FontRasterizer {
        &self.font
    }

    fn play_sound(&mut self, path: &Path) -> Result<()> {
        self.audio.play_async(path)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.restore()
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.restore();
    }
}
