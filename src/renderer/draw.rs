//! Draw list construction
//!
//! Lays out each screen in the 512x512 logical space. Sprite sheets:
//! - duck: two 64x64 frames side by side (wings up, wings down)
//! - pipe: 128 wide; cap at y 0..64, rim at y 64..128, body from y 128
//! - cloud: a single image drawn centered

use glam::Vec2;
use serde::Serialize;

use super::instance::{SpriteInstance, colors};
use super::snapshot::{DuckView, PipeView, RenderState};
use crate::consts::*;
use crate::sim::{GamePhase, Rect, SpriteId};

/// Vertical step between pipe body segments
const PIPE_TILE: f32 = 64.0;

const ATTRIBUTION: [&str; 6] = [
    "All sound effects found on freesound.com",
    "Duck quack on restart created by crazyduckman",
    "Ambient duck sounds created by jaredi",
    "Wing flap sound created by ani_music",
    "Coin sound created by ProjectsU012",
    "Crash sound created by ProjectsU012",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    /// `pos` is the top-left corner
    TopLeft,
    /// `pos` is the center of the baseline
    CenterBaseline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub bold: bool,
    pub align: TextAlign,
    pub color: [f32; 4],
    /// Drop shadow color and offset
    pub shadow: Option<([f32; 4], Vec2)>,
}

impl TextItem {
    fn menu(text: impl Into<String>, pos: Vec2, size: f32) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            bold: false,
            align: TextAlign::CenterBaseline,
            color: colors::MENU_TEXT,
            shadow: None,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DebugRect {
    pub rect: Rect,
    pub color: [f32; 4],
}

/// Everything a backend needs to paint one frame, in paint order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    pub sprites: Vec<SpriteInstance>,
    /// Drawn after sprites
    pub text: Vec<TextItem>,
    /// Play screen only. Drawn last, over every sprite, so the duck's box
    /// also shows through the pipes.
    pub debug_rects: Vec<DebugRect>,
}

/// Lay out the screen for a snapshot
pub fn build_draw_list(state: &RenderState) -> DrawList {
    let mut list = DrawList::default();
    match state.phase {
        GamePhase::Start => title_screen(&mut list),
        GamePhase::Playing => play_screen(&mut list, state),
        GamePhase::End => game_over_screen(&mut list, state.score),
    }
    list
}

fn title_screen(list: &mut DrawList) {
    let center = SCREEN_SIZE / 2.0;
    list.clear_color = colors::MENU_BACKGROUND;
    list.text.push(
        TextItem::menu("Welcome to FlappyDuck!", Vec2::new(center, SCREEN_SIZE / 3.0), 32.0)
            .bold(),
    );
    let prompt_y = 2.0 * SCREEN_SIZE / 3.0;
    list.text.push(TextItem::menu(
        "Press <space> to start",
        Vec2::new(center, prompt_y),
        18.0,
    ));
    list.text.push(TextItem::menu(
        "Press <m> to toggle sound effects",
        Vec2::new(center, prompt_y + 18.0),
        18.0,
    ));
    list.sprites.push(SpriteInstance::whole(
        SpriteId::DUCK,
        Vec2::new((SCREEN_SIZE - 2.0 * DUCK_SIZE) / 2.0, (SCREEN_SIZE - DUCK_SIZE) / 2.0),
    ));
}

fn play_screen(list: &mut DrawList, state: &RenderState) {
    list.clear_color = colors::SKY;

    for cloud in &state.clouds {
        list.sprites.push(SpriteInstance::centered(cloud.sprite, cloud.pos));
    }
    list.sprites.push(duck_sprite(&state.duck));
    for pipe in &state.pipes {
        pipe_sprites(&mut list.sprites, pipe);
    }

    list.text.push(TextItem {
        text: format!("Score: {}", state.score),
        pos: Vec2::ZERO,
        size: 18.0,
        bold: false,
        align: TextAlign::TopLeft,
        color: colors::SCORE,
        shadow: Some((colors::SCORE_SHADOW, Vec2::ONE)),
    });

    if let Some(colliders) = &state.colliders {
        list.debug_rects = colliders
            .iter()
            .map(|&rect| DebugRect {
                rect,
                color: colors::COLLIDER,
            })
            .collect();
    }
}

fn game_over_screen(list: &mut DrawList, score: u32) {
    let center = SCREEN_SIZE / 2.0;
    let prompt_y = 2.0 * SCREEN_SIZE / 3.0;
    list.clear_color = colors::MENU_BACKGROUND;
    list.text
        .push(TextItem::menu("Game Over", Vec2::new(center, SCREEN_SIZE / 3.0), 32.0).bold());
    list.text.push(TextItem::menu(
        format!("Your score was: {}", score),
        Vec2::new(center, center),
        18.0,
    ));
    list.text.push(TextItem::menu(
        "Press <r> to restart",
        Vec2::new(center, prompt_y),
        18.0,
    ));
    for (i, line) in ATTRIBUTION.iter().enumerate() {
        let y = prompt_y + 14.0 * (i + 1) as f32;
        list.text
            .push(TextItem::menu(*line, Vec2::new(center, y), 14.0));
    }
}

fn duck_sprite(duck: &DuckView) -> SpriteInstance {
    let frame_x = if duck.wings_up { 0.0 } else { DUCK_SIZE };
    SpriteInstance::new(
        SpriteId::DUCK,
        [frame_x, 0.0, DUCK_SIZE, DUCK_SIZE],
        [duck.pos.x, duck.pos.y, DUCK_SIZE, DUCK_SIZE],
    )
}

/// Bottom pipe grows down from the gap, top pipe grows up from it
fn pipe_sprites(out: &mut Vec<SpriteInstance>, pipe: &PipeView) {
    let w = PIPE_SPRITE_WIDTH;
    let body_src = [0.0, 128.0, w, 256.0];
    let top_clear = pipe.clear_pos;
    let bottom_clear = (top_clear + pipe.gap_size).min(SCREEN_SIZE);

    out.push(SpriteInstance::new(
        SpriteId::PIPE,
        [0.0, 64.0, w, 128.0],
        [pipe.x, bottom_clear, w, 128.0],
    ));
    let mut pos = bottom_clear + 128.0;
    while pos < SCREEN_SIZE {
        out.push(SpriteInstance::new(SpriteId::PIPE, body_src, [pipe.x, pos, w, 256.0]));
        pos += PIPE_TILE;
    }

    out.push(SpriteInstance::new(
        SpriteId::PIPE,
        [0.0, 0.0, w, 64.0],
        [pipe.x, top_clear - 128.0, w, 64.0],
    ));
    let mut pos = top_clear - 192.0;
    while pos + PIPE_TILE > 0.0 {
        out.push(SpriteInstance::new(SpriteId::PIPE, body_src, [pipe.x, pos, w, 256.0]));
        pos -= PIPE_TILE;
    }
}
