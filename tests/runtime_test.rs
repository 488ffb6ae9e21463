//! Game-loop tests against the headless platform.

use std::path::PathBuf;

use approx::assert_relative_eq;

use pixel_arcade::core::{
    Arcade, ArcadeConfig, ColorSprite, HeadlessPlatform, ImageSprite, MemoryCodec, SpriteGroup,
};
use pixel_arcade::core::{Bitmap, ImageCodec};
use pixel_arcade::types::{Key, Rgb};

fn arcade(width: u32, height: u32) -> Arcade<HeadlessPlatform> {
    let config = ArcadeConfig::new(width, height, "test", Rgb::BLACK);
    Arcade::init(config, HeadlessPlatform::new()).unwrap()
}

#[test]
fn falling_box_lands_on_floor() {
    let mut arcade = arcade(64, 100);
    let mut body = ColorSprite::new(10.0, 0.0, 10.0, 10.0, Rgb::WHITE);

    let mut frames = 0;
    while arcade.update().unwrap() && frames < 100 {
        body.advance(0.5, arcade.height() as f32);
        let mut group = SpriteGroup::new(1);
        group.add(body);
        arcade.render_group(&group).unwrap();
        frames += 1;
    }

    assert_relative_eq!(body.body.y, 90.0);
    assert_relative_eq!(body.body.vy, 0.0);
    assert_eq!(arcade.platform().presented_frames(), 100);
    let frame = arcade.platform().last_frame().unwrap();
    assert_eq!(frame.get(10, 99), Some(Rgb::WHITE.to_pixel()));
    assert_eq!(frame.get(10, 89), Some(Rgb::BLACK.to_pixel()));
}

#[test]
fn pressed_once_across_frames() {
    let mut arcade = arcade(8, 8);

    arcade.platform_mut().push_key(Key::SPACE, true);
    arcade.update().unwrap();
    assert!(arcade.key_pressed_once(Key::SPACE));

    // Still held next frame: no new edge.
    arcade.update().unwrap();
    assert!(!arcade.key_pressed_once(Key::SPACE));
    assert!(arcade.key_down(Key::SPACE));

    arcade.platform_mut().push_key(Key::SPACE, false);
    arcade.update().unwrap();
    assert!(!arcade.key_pressed_once(Key::SPACE));

    arcade.platform_mut().push_key(Key::SPACE, true);
    arcade.update().unwrap();
    assert!(arcade.key_pressed_once(Key::SPACE));
}

#[test]
fn keys_sharing_a_slot_alias() {
    let mut arcade = arcade(8, 8);
    arcade.platform_mut().push_key(Key(0x0152), true);
    arcade.update().unwrap();
    // 0x0152 and UP (0xff52) share slot 0x52.
    assert!(arcade.key_down(Key::UP));
}

#[test]
fn close_request_ends_loop() {
    let mut arcade = arcade(8, 8);
    let mut frames = 0;
    while arcade.update().unwrap() {
        frames += 1;
        if frames == 3 {
            arcade.platform_mut().request_close();
        }
    }
    assert_eq!(frames, 3);
    assert_eq!(arcade.frame_counter(), 3);
    assert!(!arcade.is_running());
    assert!(arcade.quit().unwrap().is_shut_down());
}

#[test]
fn blinking_prompt_alternates() {
    let mut arcade = arcade(48, 8);
    let white = Rgb::WHITE.to_pixel();
    let mut visible = Vec::new();
    for _ in 0..8 {
        arcade.compose(&SpriteGroup::new(0));
        arcade.render_text_centered_blink("GO", 1.0, Rgb::WHITE, 2);
        arcade.present().unwrap();
        visible.push(arcade.platform().last_frame().unwrap().pixels().contains(&white));
        arcade.update().unwrap();
    }
    assert_eq!(
        visible,
        vec![true, true, false, false, true, true, false, false]
    );
}

#[test]
fn centered_text_is_centered() {
    let mut arcade = arcade(21, 6);
    arcade.render_text_centered("HI", 0.0, Rgb::WHITE);
    // "HI" is 7px wide -> x = (21 - 7) / 2 = 7; H starts with a lit pixel.
    assert_eq!(arcade.surface().get(7, 0), Some(Rgb::WHITE.to_pixel()));
    assert_eq!(arcade.surface().get(6, 0), Some(Rgb::BLACK.to_pixel()));
}

#[test]
fn play_sound_is_forwarded() {
    let mut arcade = arcade(8, 8);
    arcade.play_sound("jump.wav");
    arcade.play_sound("hit.wav");
    assert_eq!(
        arcade.platform().sounds(),
        &[PathBuf::from("jump.wav"), PathBuf::from("hit.wav")]
    );
}

#[test]
fn released_image_stops_colliding_and_drawing() {
    let codec = MemoryCodec::new().with_image("p.png", Bitmap::from_fn(1, 1, |_, _| 0xFFFFFFFF));
    let mut a = ImageSprite::load(0.0, 0.0, 4.0, 4.0, "p.png", &codec).unwrap();
    let b = ImageSprite::new(2.0, 2.0, codec.decode(std::path::Path::new("p.png")).unwrap());
    assert!(a.collides_with(&b));

    a.release();
    a.release();
    assert!(!a.collides_with(&b));

    let mut arcade = arcade(8, 8);
    let mut group = SpriteGroup::new(1);
    group.add(a);
    arcade.render_group(&group).unwrap();
    let frame = arcade.platform().last_frame().unwrap();
    assert!(frame.pixels().iter().all(|&p| p == Rgb::BLACK.to_pixel()));
}
