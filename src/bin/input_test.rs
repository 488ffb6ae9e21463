//! Keyboard probe: prints each terminal key event and the logical key it maps to.
//!
//! Useful for checking whether a terminal reports key release events (needed
//! for held keys without the release timeout). Esc or Ctrl+C exits.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use pixel_arcade::input::{is_close_request, map_key_event};
use pixel_arcade::types::Key;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();

    let result = run(&mut out, enhanced);

    if enhanced {
        let _ = execute!(out, PopKeyboardEnhancementFlags);
    }
    let _ = terminal::disable_raw_mode();
    result
}

fn run(out: &mut impl Write, enhanced: bool) -> Result<()> {
    write!(
        out,
        "keyboard enhancement: {}\r\npress keys (Esc or Ctrl+C to quit)\r\n",
        if enhanced { "on" } else { "off" }
    )?;
    out.flush()?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let mapped = map_key_event(key);
        let slot = mapped.map(|k| format!("{:#06x} slot {}", k.0, k.slot()));
        write!(
            out,
            "{:?} {:?} mods={:?} -> {}\r\n",
            key.kind,
            key.code,
            key.modifiers,
            slot.as_deref().unwrap_or("unmapped")
        )?;
        out.flush()?;

        if key.kind == KeyEventKind::Press
            && (is_close_request(key) || mapped == Some(Key::ESCAPE))
        {
            return Ok(());
        }
    }
}
