use ggez::graphics::Rect;
use log::{debug, info};

use super::structs::*;

/// Circle against axis-aligned rectangle. Touching counts as overlapping.
pub fn circle_overlaps_rect(center: Point2, radius: f32, rect: &Rect) -> bool {
    let half_w = rect.w / 2.0;
    let half_h = rect.h / 2.0;
    let dx = (center.x - (rect.x + half_w)).abs();
    let dy = (center.y - (rect.y + half_h)).abs();

    if dx > half_w + radius || dy > half_h + radius {
        return false;
    }
    if dx <= half_w || dy <= half_h {
        return true;
    }

    let corner_x = dx - half_w;
    let corner_y = dy - half_h;
    corner_x * corner_x + corner_y * corner_y <= radius * radius
}

/// Sends the ball back and parks it flush against the paddle's inner face.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if !circle_overlaps_rect(ball.pos, ball.radius, &paddle.rect) {
        return false;
    }
    ball.velocity.x = -ball.velocity.x;
    ball.pos.x = match side {
        Side::Left => paddle.rect.x + paddle.rect.w + ball.radius,
        Side::Right => paddle.rect.x - ball.radius,
    };
    true
}

/// Which side scored, if the ball has left the field.
fn point_scored(ball: &Ball, screen_width: f32) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > screen_width {
        Some(Side::Left)
    } else {
        None
    }
}

/// The ball is served toward the player who just scored.
fn serve_velocity(scorer: Side) -> Vector2 {
    match scorer {
        Side::Left => Vector2::new(-BALL_SPEED, BALL_SPEED),
        Side::Right => Vector2::new(BALL_SPEED, BALL_SPEED),
    }
}

/// Advances the match by one frame. Does nothing once the match is over.
pub fn update(state: &mut GameState, input: &InputState) {
    if state.score.game_over {
        return;
    }

    state.left.apply_input(input.left_up, input.left_down);
    state.right.apply_input(input.right_up, input.right_down);
    state.left.clamp(state.screen_height);
    state.right.clamp(state.screen_height);

    state.ball.integrate();
    if state.ball.bounce_walls(state.screen_height) {
        debug!("Wall bounce at {:?}", state.ball.pos);
    }

    for &side in &[Side::Left, Side::Right] {
        let paddle = *state.paddle(side);
        if bounce_off_paddle(&mut state.ball, &paddle, side) {
            debug!("{:?} paddle return at {:?}", side, state.ball.pos);
        }
    }

    if let Some(scorer) = point_scored(&state.ball, state.screen_width) {
        state.score.record_point(scorer);
        state.ball.reset(serve_velocity(scorer));
        info!(
            "{:?} player scores, {} - {}, {:?} fouls: {}",
            scorer,
            state.score.left_score,
            state.score.right_score,
            scorer.opponent(),
            state.score.fouls(scorer.opponent())
        );
    }

    if state.score.check_game_over() {
        if let Some(winner) = state.score.winner() {
            info!("Game over, {:?} player wins", winner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn idle() -> InputState {
        InputState::default()
    }

    #[test]
    fn circle_overlap_edges_and_corners() {
        let rect = Rect::new(50.0, 185.0, 10.0, 80.0);

        assert!(circle_overlaps_rect(Point2::new(68.0, 200.0), 8.0, &rect));
        assert!(!circle_overlaps_rect(Point2::new(68.5, 200.0), 8.0, &rect));
        assert!(circle_overlaps_rect(Point2::new(55.0, 180.0), 8.0, &rect));

        // Just off the top-right corner, inside the bounding box but outside the radius.
        assert!(!circle_overlaps_rect(Point2::new(66.0, 179.0), 8.0, &rect));
        assert!(circle_overlaps_rect(Point2::new(64.0, 182.0), 8.0, &rect));
    }

    #[test]
    fn ball_moves_by_velocity_each_frame() {
        let mut state = GameState::new();
        update(&mut state, &idle());
        assert_eq!(state.ball.pos, Point2::new(404.0, 229.0));
        update(&mut state, &idle());
        assert_eq!(state.ball.pos, Point2::new(408.0, 233.0));
    }

    #[test]
    fn paddles_move_independently() {
        let mut state = GameState::new();
        let input = InputState {
            left_up: true,
            right_down: true,
            ..InputState::default()
        };
        update(&mut state, &input);
        assert_eq!(state.left.rect.y, 180.0);
        assert_eq!(state.right.rect.y, 190.0);
    }

    #[test]
    fn both_keys_on_one_paddle_cancel() {
        let mut state = GameState::new();
        let input = InputState {
            left_up: true,
            left_down: true,
            right_up: true,
            right_down: true,
        };
        update(&mut state, &input);
        assert_eq!(state.left.rect.y, 185.0);
        assert_eq!(state.right.rect.y, 185.0);
    }

    #[test]
    fn ball_bounces_off_top_wall() {
        let mut state = GameState::new();
        state.ball.pos = Point2::new(300.0, 11.0);
        state.ball.velocity = Vector2::new(4.0, -4.0);
        update(&mut state, &idle());
        assert_eq!(state.ball.pos, Point2::new(304.0, 7.0));
        assert_eq!(state.ball.velocity, Vector2::new(4.0, 4.0));
        update(&mut state, &idle());
        assert_eq!(state.ball.velocity, Vector2::new(4.0, 4.0));
    }

    #[test]
    fn ball_bounces_off_bottom_wall() {
        let mut state = GameState::new();
        state.ball.pos = Point2::new(300.0, 439.0);
        update(&mut state, &idle());
        assert_eq!(state.ball.pos.y, 443.0);
        assert_eq!(state.ball.velocity, Vector2::new(4.0, -4.0));
    }

    #[test]
    fn left_paddle_return_snaps_to_edge() {
        let mut state = GameState::new();
        state.ball.pos = Point2::new(70.0, 220.0);
        state.ball.velocity = Vector2::new(-4.0, 4.0);
        update(&mut state, &idle());
        assert_eq!(state.ball.velocity, Vector2::new(4.0, 4.0));
        assert_eq!(state.ball.pos, Point2::new(68.0, 224.0));
    }

    #[test]
    fn right_paddle_return_snaps_to_edge() {
        let mut state = GameState::new();
        state.ball.pos = Point2::new(730.0, 220.0);
        state.ball.velocity = Vector2::new(4.0, 4.0);
        update(&mut state, &idle());
        assert_eq!(state.ball.velocity, Vector2::new(-4.0, 4.0));
        assert_eq!(state.ball.pos, Point2::new(732.0, 224.0));
    }

    #[test]
    fn miss_beside_paddle_keeps_direction() {
        let mut state = GameState::new();
        state.ball.pos = Point2::new(70.0, 100.0);
        state.ball.velocity = Vector2::new(-4.0, 4.0);
        update(&mut state, &idle());
        assert_eq!(state.ball.velocity, Vector2::new(-4.0, 4.0));
        assert_eq!(state.ball.pos, Point2::new(66.0, 104.0));
    }

    #[test]
    fn ball_past_left_edge_scores_for_right() {
        let mut state = GameState::new();
        state.ball.pos = Point2::new(3.0, 100.0);
        state.ball.velocity = Vector2::new(-4.0, 4.0);
        update(&mut state, &idle());

        assert_eq!(state.score.right_score, 1);
        assert_eq!(state.score.left_fouls, 1);
        assert_eq!(state.score.left_score, 0);
        assert_eq!(state.score.right_fouls, 0);
        assert_eq!(state.ball.pos, Point2::new(400.0, 225.0));
        assert_eq!(state.ball.velocity, Vector2::new(4.0, 4.0));
    }

    #[test]
    fn ball_past_right_edge_scores_for_left() {
        let mut state = GameState::new();
        state.ball.pos = Point2::new(797.0, 100.0);
        update(&mut state, &idle());

        assert_eq!(state.score.left_score, 1);
        assert_eq!(state.score.right_fouls, 1);
        assert_eq!(state.score.right_score, 0);
        assert_eq!(state.score.left_fouls, 0);
        assert_eq!(state.ball.pos, Point2::new(400.0, 225.0));
        assert_eq!(state.ball.velocity, Vector2::new(-4.0, 4.0));
    }

    #[test]
    fn ball_on_screen_edge_is_still_in_play() {
        let mut state = GameState::new();
        state.ball.pos = Point2::new(796.0, 100.0);
        update(&mut state, &idle());
        assert_eq!(state.ball.pos.x, 800.0);
        assert_eq!(state.score, MatchState::new(FOUL_LIMIT));
    }

    #[test]
    fn eleventh_foul_ends_the_match() {
        let mut state = GameState::new();
        state.score.left_fouls = FOUL_LIMIT - 1;
        state.score.right_score = FOUL_LIMIT - 1;
        state.ball.pos = Point2::new(3.0, 100.0);
        state.ball.velocity = Vector2::new(-4.0, 4.0);
        update(&mut state, &idle());

        assert!(state.score.game_over);
        assert_eq!(state.score.left_fouls, FOUL_LIMIT);
        assert_eq!(state.score.winner_message(), Some("RIGHT PLAYER WINS!"));
    }

    #[test]
    fn nothing_moves_after_game_over() {
        let mut state = GameState::new();
        state.score.left_fouls = FOUL_LIMIT;
        state.score.check_game_over();
        state.ball.pos = Point2::new(-1.0, 100.0);
        let frozen = state.clone();

        let input = InputState {
            left_up: true,
            right_down: true,
            ..InputState::default()
        };
        for _ in 0..10 {
            update(&mut state, &input);
        }
        assert_eq!(state, frozen);
    }

    fn any_input() -> impl Strategy<Value = InputState> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(left_up, left_down, right_up, right_down)| InputState {
                left_up,
                left_down,
                right_up,
                right_down,
            },
        )
    }

    proptest! {
        #[test]
        fn paddles_stay_on_screen(inputs in prop::collection::vec(any_input(), 1..400)) {
            let mut state = GameState::new();
            for input in &inputs {
                update(&mut state, input);
                for paddle in &[state.left, state.right] {
                    prop_assert!(paddle.rect.y >= 0.0);
                    prop_assert!(paddle.rect.y <= SCREEN_HEIGHT - PADDLE_HEIGHT);
                }
            }
        }

        #[test]
        fn counters_never_decrease(inputs in prop::collection::vec(any_input(), 1..2000)) {
            let mut state = GameState::new();
            for input in &inputs {
                let before = state.score;
                update(&mut state, input);
                let after = state.score;
                prop_assert!(after.left_score >= before.left_score);
                prop_assert!(after.right_score >= before.right_score);
                prop_assert!(after.left_fouls >= before.left_fouls);
                prop_assert!(after.right_fouls >= before.right_fouls);
                prop_assert!(!before.game_over || after == before);
                prop_assert!(state.ball.velocity.x != 0.0 && state.ball.velocity.y != 0.0);
            }
        }
    }
}
