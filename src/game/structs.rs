use ggez::graphics::Rect;
use ggez::nalgebra as na;

pub type Point2 = na::Point2<f32>;
pub type Vector2 = na::Vector2<f32>;

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 450.0;

pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 80.0;
/// Paddle movement in pixels per frame.
pub const PADDLE_SPEED: f32 = 5.0;
/// Distance from the screen edge to the outer side of each paddle.
pub const PADDLE_MARGIN: f32 = 50.0;

pub const BALL_RADIUS: f32 = 8.0;
/// Ball speed along each axis, in pixels per frame.
pub const BALL_SPEED: f32 = 4.0;

pub const FOUL_LIMIT: u32 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32) -> Paddle {
        Paddle {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
        }
    }

    /// Both keys held apply both moves, so they cancel.
    pub fn apply_input(&mut self, up: bool, down: bool) {
        if up {
            self.rect.y -= self.speed;
        }
        if down {
            self.rect.y += self.speed;
        }
    }

    pub fn clamp(&mut self, screen_height: f32) {
        let max_y = screen_height - self.rect.h;
        self.rect.y = self.rect.y.max(0.0).min(max_y);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Point2,
    pub velocity: Vector2,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Ball {
        Ball {
            pos: screen_center(),
            velocity: Vector2::new(BALL_SPEED, BALL_SPEED),
            radius: BALL_RADIUS,
        }
    }

    pub fn integrate(&mut self) {
        self.pos += self.velocity;
    }

    /// Reflects off the top or bottom wall. The position is left alone, so the
    /// ball can sit a little past the wall for a frame.
    pub fn bounce_walls(&mut self, screen_height: f32) -> bool {
        if self.pos.y <= self.radius || self.pos.y >= screen_height - self.radius {
            self.velocity.y = -self.velocity.y;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, velocity: Vector2) {
        self.pos = screen_center();
        self.velocity = velocity;
    }
}

pub fn screen_center() -> Point2 {
    Point2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// Points and fouls for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    pub left_score: u32,
    pub right_score: u32,
    pub left_fouls: u32,
    pub right_fouls: u32,
    pub foul_limit: u32,
    pub game_over: bool,
}

impl MatchState {
    pub fn new(foul_limit: u32) -> MatchState {
        MatchState {
            left_score: 0,
            right_score: 0,
            left_fouls: 0,
            right_fouls: 0,
            foul_limit,
            game_over: false,
        }
    }

    /// The scorer gains a point and the other side takes a foul.
    pub fn record_point(&mut self, scorer: Side) {
        match scorer {
            Side::Left => {
                self.left_score += 1;
                self.right_fouls += 1;
            }
            Side::Right => {
                self.right_score += 1;
                self.left_fouls += 1;
            }
        }
    }

    pub fn fouls(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_fouls,
            Side::Right => self.right_fouls,
        }
    }

    pub fn check_game_over(&mut self) -> bool {
        if self.left_fouls >= self.foul_limit || self.right_fouls >= self.foul_limit {
            self.game_over = true;
        }
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        if !self.game_over {
            return None;
        }
        if self.left_fouls >= self.foul_limit {
            Some(Side::Right)
        } else {
            Some(Side::Left)
        }
    }

    pub fn winner_message(&self) -> Option<&'static str> {
        self.winner().map(|side| match side {
            Side::Left => "LEFT PLAYER WINS!",
            Side::Right => "RIGHT PLAYER WINS!",
        })
    }
}

/// Key state sampled once per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: MatchState,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl GameState {
    pub fn new() -> GameState {
        let paddle_y = SCREEN_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
        GameState {
            left: Paddle::new(PADDLE_MARGIN, paddle_y),
            right: Paddle::new(SCREEN_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH, paddle_y),
            ball: Ball::new(),
            score: MatchState::new(FOUL_LIMIT),
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}
