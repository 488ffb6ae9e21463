//! Flappy-style demo game.
//!
//! Pure game state on top of the runtime: nothing here touches the terminal,
//! so the whole loop can be driven by a `HeadlessPlatform` in tests.

use std::path::PathBuf;

use anyhow::Result;

use pixel_arcade::core::{
    collision, AnimatedSprite, Arcade, Bitmap, ColorSprite, ImageSprite, Platform, SpriteGroup,
};
use pixel_arcade::types::{Key, Rgb};

pub const GRAVITY: f32 = 0.25;
pub const FLAP_VELOCITY: f32 = -2.5;
pub const PIPE_SPEED: f32 = -1.0;
pub const PIPE_WIDTH: f32 = 12.0;
pub const PIPE_GAP: f32 = 36.0;
pub const SPAWN_INTERVAL: u32 = 70;
pub const GROUND_HEIGHT: f32 = 6.0;
pub const BIRD_W: u32 = 8;
pub const BIRD_H: u32 = 6;
pub const BIRD_X: f32 = 30.0;
const WING_INTERVAL: u32 = 6;
const GROUP_CAPACITY: usize = 64;

const PIPE_COLOR: Rgb = Rgb::new(60, 190, 70);
const GROUND_COLOR: Rgb = Rgb::new(200, 170, 90);
const TEXT_COLOR: Rgb = Rgb::WHITE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Playing,
    Paused,
    Over,
}

/// LCG with Numerical Recipes constants; deterministic for a given seed.
#[derive(Debug, Clone)]
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_range(&mut self, max: u32) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.state >> 8) % max.max(1)
    }
}

#[derive(Debug, Clone)]
struct Pipe {
    top: ColorSprite,
    bottom: ColorSprite,
    scored: bool,
}

pub struct Flappy {
    width: f32,
    play_height: f32,
    player: AnimatedSprite,
    pipes: Vec<Pipe>,
    ground: ColorSprite,
    group: SpriteGroup,
    phase: Phase,
    score: u32,
    best: u32,
    spawn_timer: u32,
    rng: SimpleRng,
    seed: u32,
    crash_sound: Option<PathBuf>,
}

/// One bird frame; `wing_row` selects the wing position.
fn bird_frame(wing_row: u32) -> Bitmap {
    let body = Rgb::new(250, 200, 40).to_pixel();
    let wing = Rgb::new(230, 120, 20).to_pixel();
    let eye = Rgb::BLACK.to_pixel();
    let beak = Rgb::new(240, 80, 40).to_pixel();
    Bitmap::from_fn(BIRD_W, BIRD_H, |x, y| {
        let corner = (x == 0 || x == BIRD_W - 1) && (y == 0 || y == BIRD_H - 1);
        match (x, y) {
            _ if corner => 0,
            (5, 1) => eye,
            (7, 3) => beak,
            (7, _) => 0,
            (1..=3, row) if row == wing_row => wing,
            _ => body,
        }
    })
}

fn bird(y: f32) -> Result<AnimatedSprite> {
    let frames = [1, 2, 3, 2]
        .into_iter()
        .map(|row| ImageSprite::new(BIRD_X, y, bird_frame(row)))
        .collect();
    AnimatedSprite::from_frames(frames, WING_INTERVAL)
}

impl Flappy {
    pub fn new(width: u32, height: u32, seed: u32) -> Result<Self> {
        let width = width as f32;
        let play_height = (height as f32 - GROUND_HEIGHT).max(BIRD_H as f32);
        Ok(Self {
            width,
            play_height,
            player: bird(play_height / 2.0)?,
            pipes: Vec::new(),
            ground: ColorSprite::new(0.0, play_height, width, GROUND_HEIGHT, GROUND_COLOR),
            group: SpriteGroup::new(GROUP_CAPACITY),
            phase: Phase::Ready,
            score: 0,
            best: 0,
            spawn_timer: 0,
            rng: SimpleRng::new(seed),
            seed,
            crash_sound: None,
        })
    }

    pub fn with_crash_sound(mut self, path: Option<PathBuf>) -> Self {
        self.crash_sound = path;
        self
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    #[cfg(test)]
    pub fn pipe_count(&self) -> usize {
        self.pipes.len()
    }

    #[cfg(test)]
    pub fn player(&self) -> &AnimatedSprite {
        &self.player
    }

    /// Back to the ready screen. The best score survives.
    pub fn reset(&mut self) -> Result<()> {
        self.player.release();
        self.player = bird(self.play_height / 2.0)?;
        self.pipes.clear();
        self.phase = Phase::Ready;
        self.score = 0;
        self.spawn_timer = 0;
        self.rng = SimpleRng::new(self.seed);
        Ok(())
    }

    /// One frame: input, simulation, drawing.
    pub fn step<P: Platform>(&mut self, arcade: &mut Arcade<P>) -> Result<()> {
        self.handle_input(arcade)?;
        if self.tick() {
            if let Some(path) = &self.crash_sound {
                arcade.play_sound(path);
            }
        }
        self.render(arcade)
    }

    fn handle_input<P: Platform>(&mut self, arcade: &mut Arcade<P>) -> Result<()> {
        if arcade.key_pressed_once(Key::ESCAPE) {
            arcade.set_running(false);
            return Ok(());
        }
        // Query every key each frame so edges are not carried over.
        let flap = arcade.key_pressed_once(Key::SPACE) | arcade.key_pressed_once(Key::UP);
        let pause = arcade.key_pressed_once(Key::P);
        let restart = arcade.key_pressed_once(Key::R);

        if restart {
            return self.reset();
        }
        match self.phase {
            Phase::Ready if flap => {
                self.phase = Phase::Playing;
                self.flap();
            }
            Phase::Playing if pause => self.phase = Phase::Paused,
            Phase::Playing if flap => self.flap(),
            Phase::Paused if pause => self.phase = Phase::Playing,
            _ => {}
        }
        Ok(())
    }

    fn flap(&mut self) {
        self.player.set_velocity(0.0, FLAP_VELOCITY);
    }

    /// Advance the simulation one frame. Returns `true` on the frame the bird
    /// crashes.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            Phase::Ready => {
                // Hover in place; only the wings move.
                self.player.set_velocity(0.0, 0.0);
                self.player.advance(0.0, self.play_height);
                false
            }
            Phase::Playing => self.tick_playing(),
            Phase::Paused | Phase::Over => false,
        }
    }

    fn tick_playing(&mut self) -> bool {
        self.player.advance(GRAVITY, self.play_height);

        for pipe in &mut self.pipes {
            pipe.top.advance(0.0, self.play_height);
            pipe.bottom.advance(0.0, self.play_height);
            if !pipe.scored && pipe.top.body.x + PIPE_WIDTH < BIRD_X {
                pipe.scored = true;
                self.score += 1;
            }
        }
        self.pipes.retain(|p| p.top.body.x + PIPE_WIDTH > 0.0);

        self.spawn_timer += 1;
        if self.spawn_timer >= SPAWN_INTERVAL {
            self.spawn_timer = 0;
            self.spawn_pipe();
        }

        if self.crashed() {
            self.phase = Phase::Over;
            self.best = self.best.max(self.score);
            return true;
        }
        false
    }

    fn spawn_pipe(&mut self) {
        let margin = 8.0;
        let span = (self.play_height - PIPE_GAP - 2.0 * margin).max(1.0) as u32;
        let gap_top = margin + self.rng.next_range(span) as f32;
        let gap_bottom = gap_top + PIPE_GAP;
        let x = self.width;

        let mut top = ColorSprite::new(x, 0.0, PIPE_WIDTH, gap_top, PIPE_COLOR);
        top.body.vx = PIPE_SPEED;
        let mut bottom = ColorSprite::new(
            x,
            gap_bottom,
            PIPE_WIDTH,
            self.play_height - gap_bottom,
            PIPE_COLOR,
        );
        bottom.body.vx = PIPE_SPEED;
        self.pipes.push(Pipe {
            top,
            bottom,
            scored: false,
        });
    }

    fn crashed(&self) -> bool {
        let Some(frame) = self.player.current_frame() else {
            return false;
        };
        if frame.body.y >= self.play_height - frame.body.height {
            return true;
        }
        self.pipes.iter().any(|p| {
            collision::overlaps(&frame.body, &p.top.body)
                || collision::overlaps(&frame.body, &p.bottom.body)
        })
    }

    fn render<P: Platform>(&mut self, arcade: &mut Arcade<P>) -> Result<()> {
        self.group.clear();
        for pipe in &self.pipes {
            self.group.add(pipe.top);
            self.group.add(pipe.bottom);
        }
        self.group.add(self.ground);
        self.group.add_animated(&self.player);
        arcade.compose(&self.group);

        arcade.render_text(&self.score.to_string(), 2.0, 2.0, TEXT_COLOR);
        let mid = self.play_height / 2.0;
        match self.phase {
            Phase::Ready => {
                arcade.render_text_centered("FLAPPY", mid - 20.0, TEXT_COLOR);
                arcade.render_text_centered_blink("PRESS SPACE", mid + 12.0, TEXT_COLOR, 20);
            }
            Phase::Paused => arcade.render_text_centered("PAUSED", mid - 2.0, TEXT_COLOR),
            Phase::Over => {
                arcade.render_text_centered("GAME OVER", mid - 10.0, TEXT_COLOR);
                arcade.render_text_centered(&format!("BEST {}", self.best), mid, TEXT_COLOR);
                arcade.render_text_centered_blink("R TO RESTART", mid + 10.0, TEXT_COLOR, 20);
            }
            Phase::Playing => {}
        }
        arcade.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_arcade::core::{ArcadeConfig, HeadlessPlatform};

    fn arcade() -> Arcade<HeadlessPlatform> {
        Arcade::init(ArcadeConfig::default(), HeadlessPlatform::new()).unwrap()
    }

    fn press(arcade: &mut Arcade<HeadlessPlatform>, key: Key) {
        arcade.platform_mut().push_key(key, true);
        arcade.update().unwrap();
    }

    fn release(arcade: &mut Arcade<HeadlessPlatform>, key: Key) {
        arcade.platform_mut().push_key(key, false);
        arcade.update().unwrap();
    }

    #[test]
    fn bird_frames_have_transparent_corners() {
        let frame = bird_frame(2);
        assert_eq!(frame.get(0, 0), Some(0));
        assert_ne!(frame.get(2, 2), Some(0));
    }

    #[test]
    fn ready_screen_hovers() {
        let mut game = Flappy::new(160, 96, 7).unwrap();
        let y0 = game.player().current_frame().unwrap().body.y;
        for _ in 0..30 {
            assert!(!game.tick());
        }
        assert_eq!(game.player().current_frame().unwrap().body.y, y0);
        assert_eq!(game.phase(), Phase::Ready);
    }

    #[test]
    fn space_starts_and_bird_falls_to_the_ground() {
        let mut arcade = arcade();
        let mut game = Flappy::new(160, 96, 7).unwrap();

        press(&mut arcade, Key::SPACE);
        game.step(&mut arcade).unwrap();
        assert_eq!(game.phase(), Phase::Playing);

        let mut crashed = false;
        for _ in 0..200 {
            arcade.update().unwrap();
            game.step(&mut arcade).unwrap();
            if game.phase() == Phase::Over {
                crashed = true;
                break;
            }
        }
        assert!(crashed);
        assert!(arcade.platform().presented_frames() > 1);
    }

    #[test]
    fn pause_freezes_simulation() {
        let mut arcade = arcade();
        let mut game = Flappy::new(160, 96, 7).unwrap();
        press(&mut arcade, Key::SPACE);
        game.step(&mut arcade).unwrap();
        release(&mut arcade, Key::SPACE);

        press(&mut arcade, Key::P);
        game.step(&mut arcade).unwrap();
        assert_eq!(game.phase(), Phase::Paused);

        let y = game.player().current_frame().unwrap().body.y;
        for _ in 0..10 {
            arcade.update().unwrap();
            game.step(&mut arcade).unwrap();
        }
        assert_eq!(game.player().current_frame().unwrap().body.y, y);
    }

    #[test]
    fn pipes_spawn_and_score() {
        let mut game = Flappy::new(160, 96, 7).unwrap();
        game.phase = Phase::Playing;
        let mut max_score = 0;
        for _ in 0..400 {
            // Keep the bird in the middle of the gap's column.
            game.player.set_velocity(0.0, 0.0);
            game.player.set_position(BIRD_X, game.play_height / 2.0);
            game.pipes.iter_mut().for_each(|p| {
                p.top.body.height = 1.0;
                p.bottom.body.y = game.play_height - 1.0;
                p.bottom.body.height = 1.0;
            });
            game.tick();
            max_score = max_score.max(game.score());
        }
        assert!(max_score >= 3);
        assert!(game.pipe_count() <= 3);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn escape_stops_the_loop_and_restart_resets() {
        let mut arcade = arcade();
        let mut game = Flappy::new(160, 96, 7).unwrap();
        game.score = 5;
        game.phase = Phase::Over;

        press(&mut arcade, Key::R);
        game.step(&mut arcade).unwrap();
        assert_eq!(game.phase(), Phase::Ready);
        assert_eq!(game.score(), 0);

        press(&mut arcade, Key::ESCAPE);
        game.step(&mut arcade).unwrap();
        assert!(!arcade.is_running());
    }

    #[test]
    fn crash_plays_configured_sound() {
        let mut arcade = arcade();
        let mut game = Flappy::new(160, 96, 7)
            .unwrap()
            .with_crash_sound(Some(PathBuf::from("crash.wav")));
        game.phase = Phase::Playing;
        game.player.set_position(BIRD_X, game.play_height);
        game.step(&mut arcade).unwrap();
        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(arcade.platform().sounds(), &[PathBuf::from("crash.wav")]);
    }
}
