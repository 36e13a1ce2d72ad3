//! Read-only view of a session for renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Rect, SpriteId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuckView {
    /// Sprite top-left
    pub pos: Vec2,
    /// Selects the animation frame
    pub wings_up: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub x: f32,
    pub clear_pos: f32,
    pub gap_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudView {
    /// Sprite center
    pub pos: Vec2,
    pub sprite: SpriteId,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub phase: GamePhase,
    pub score: u32,
    pub duck: DuckView,
    /// Oldest first
    pub pipes: Vec<PipeView>,
    /// Oldest first
    pub clouds: Vec<CloudView>,
    /// Duck collider then each pipe's top and bottom collider; debug only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colliders: Option<Vec<Rect>>,
}

impl RenderState {
    pub fn capture(state: &GameState) -> Self {
        let colliders = state.debug_colliders.then(|| {
            std::iter::once(state.duck.collider)
                .chain(
                    state
                        .pipes
                        .iter()
                        .flat_map(|p| [p.collider_top, p.collider_bottom]),
                )
                .collect()
        });

        Self {
            phase: state.phase,
            score: state.score,
            duck: DuckView {
                pos: state.duck.pos(),
                wings_up: state.duck.wings_up,
            },
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    clear_pos: p.clear_pos,
                    gap_size: p.gap_size,
                })
                .collect(),
            clouds: state
                .clouds
                .iter()
                .map(|c| CloudView {
                    pos: c.body.pos,
                    sprite: c.sprite,
                })
                .collect(),
            colliders,
        }
    }
}

impl GameState {
    /// Snapshot for the renderer; colliders only when `debug_colliders` is set
    pub fn render_state(&self) -> RenderState {
        RenderState::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Action, SessionConfig};

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut state = GameState::new(21);
        state.handle_action(Action::Confirm);
        state.advance();
        state.handle_action(Action::BeginFlap);

        let snap = state.render_state();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.duck.pos, state.duck.pos());
        assert!(!snap.duck.wings_up);
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].x, 512.0);
        assert!(snap.colliders.is_none());
    }

    #[test]
    fn test_debug_snapshot_carries_colliders() {
        let mut state = GameState::with_config(SessionConfig {
            seed: 21,
            debug_colliders: true,
            ..SessionConfig::default()
        });
        state.handle_action(Action::Confirm);
        state.advance();

        let colliders = state.render_state().colliders.unwrap();
        assert_eq!(colliders.len(), 3);
        assert_eq!(colliders[0], state.duck.collider);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(21);
        let json = serde_json::to_string(&state.render_state()).unwrap();
        assert!(json.contains("\"phase\":\"Start\""));
        assert!(!json.contains("colliders"));
    }
}
