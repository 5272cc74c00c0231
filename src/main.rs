//! A two-player Pong with fouls, built on ggez.
//! Whoever lets the ball past their paddle eleven times loses.

use ggez;
use ggez::conf;
use ggez::event::{self, EventHandler, KeyCode, KeyMods};
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh};
use ggez::input::keyboard;
use ggez::timer;
use ggez::{Context, ContextBuilder, GameResult};
use log::info;

mod game;

use game::{GameState, InputState, Point2, SCREEN_HEIGHT, SCREEN_WIDTH};

const DESIRED_FPS: u32 = 60;

const CENTER_CIRCLE_RADIUS: f32 = 80.0;
const SCORE_FONT_SIZE: f32 = 40.0;
const FOUL_FONT_SIZE: f32 = 20.0;

/// **********************************************************************
/// Input is read straight off the keyboard every tick rather than tracked
/// through key events, so holding both keys of a pair simply cancels out.
/// **********************************************************************

impl InputState {
    fn from_keyboard(ctx: &Context) -> InputState {
        InputState {
            left_up: keyboard::is_key_pressed(ctx, KeyCode::W),
            left_down: keyboard::is_key_pressed(ctx, KeyCode::S),
            right_up: keyboard::is_key_pressed(ctx, KeyCode::Up),
            right_down: keyboard::is_key_pressed(ctx, KeyCode::Down),
        }
    }
}

/// **********************************************************************
/// The `MainState` is our game's "global" state. All the rules live in
/// `game`; this just wires them to ggez.
/// **********************************************************************

struct MainState {
    game: GameState,
}

impl MainState {
    fn new() -> MainState {
        print_instructions();
        MainState {
            game: GameState::new(),
        }
    }
}

fn print_instructions() {
    println!();
    println!("Welcome to 2D Ping Pong!");
    println!();
    println!("How to play:");
    println!("Left player moves with W/S, right player with the up/down arrows.");
    println!("Letting the ball past you is a foul. {} fouls and you lose.", game::FOUL_LIMIT);
    println!("Escape quits.");
    println!();
}

fn background_color() -> Color {
    Color::from_rgb(154, 205, 50)
}

fn dark_green() -> Color {
    Color::from_rgb(0, 117, 44)
}

fn foul_red() -> Color {
    Color::from_rgb(230, 41, 55)
}

fn banner_yellow() -> Color {
    Color::from_rgb(253, 249, 0)
}

fn draw_text(ctx: &mut Context, text: &graphics::Text, x: f32, y: f32, color: Color) -> GameResult {
    graphics::draw(ctx, text, (Point2::new(x, y), 0.0, color))
}

fn sized_text(s: String, size: f32) -> graphics::Text {
    graphics::Text::new((s, graphics::Font::default(), size))
}

fn draw_court(ctx: &mut Context) -> GameResult {
    let line = Mesh::new_line(
        ctx,
        &[
            Point2::new(SCREEN_WIDTH / 2.0, 0.0),
            Point2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT),
        ],
        1.0,
        graphics::WHITE,
    )?;
    graphics::draw(ctx, &line, DrawParam::default())?;

    let circle = Mesh::new_circle(
        ctx,
        DrawMode::fill(),
        game::screen_center(),
        CENTER_CIRCLE_RADIUS,
        0.1,
        dark_green(),
    )?;
    graphics::draw(ctx, &circle, DrawParam::default())
}

fn draw_pieces(ctx: &mut Context, state: &GameState) -> GameResult {
    for paddle in &[state.left, state.right] {
        let rect = Mesh::new_rectangle(ctx, DrawMode::fill(), paddle.rect, graphics::WHITE)?;
        graphics::draw(ctx, &rect, DrawParam::default())?;
    }

    let ball = Mesh::new_circle(
        ctx,
        DrawMode::fill(),
        state.ball.pos,
        state.ball.radius,
        0.1,
        graphics::WHITE,
    )?;
    graphics::draw(ctx, &ball, DrawParam::default())
}

fn draw_scoreboard(ctx: &mut Context, state: &GameState) -> GameResult {
    let score = &state.score;

    let left = sized_text(score.left_score.to_string(), SCORE_FONT_SIZE);
    let right = sized_text(score.right_score.to_string(), SCORE_FONT_SIZE);
    draw_text(ctx, &left, SCREEN_WIDTH / 4.0, 20.0, graphics::WHITE)?;
    draw_text(ctx, &right, 3.0 * SCREEN_WIDTH / 4.0, 20.0, graphics::WHITE)?;

    let left_fouls = sized_text(format!("Fouls: {}", score.left_fouls), FOUL_FONT_SIZE);
    let right_fouls = sized_text(format!("Fouls: {}", score.right_fouls), FOUL_FONT_SIZE);
    draw_text(ctx, &left_fouls, 10.0, SCREEN_HEIGHT - 30.0, foul_red())?;
    draw_text(ctx, &right_fouls, SCREEN_WIDTH - 130.0, SCREEN_HEIGHT - 30.0, foul_red())
}

fn draw_game_over(ctx: &mut Context, message: &str) -> GameResult {
    let banner = sized_text(message.to_string(), SCORE_FONT_SIZE);
    let banner_x = SCREEN_WIDTH / 2.0 - banner.width(ctx) as f32 / 2.0;
    draw_text(ctx, &banner, banner_x, SCREEN_HEIGHT / 2.0 - 20.0, banner_yellow())?;

    let hint = sized_text("Press [ESC] to exit".to_string(), FOUL_FONT_SIZE);
    draw_text(
        ctx,
        &hint,
        SCREEN_WIDTH / 2.0 - 100.0,
        SCREEN_HEIGHT / 2.0 + 30.0,
        graphics::WHITE,
    )
}

/// **********************************************************************
/// Now we implement the `EventHandler` trait from `ggez::event`, which provides
/// ggez with callbacks for updating and drawing our game, as well as
/// handling input events.
/// **********************************************************************
impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while timer::check_update_time(ctx, DESIRED_FPS) {
            let input = InputState::from_keyboard(ctx);
            game::update(&mut self.game, &input);
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, background_color());

        draw_court(ctx)?;
        draw_pieces(ctx, &self.game)?;
        draw_scoreboard(ctx, &self.game)?;

        if let Some(message) = self.game.score.winner_message() {
            draw_game_over(ctx, message)?;
        }

        graphics::present(ctx)?;

        // Hand the rest of the timeslice back to the OS so we don't spin
        // at 100% CPU when vsync is off.
        timer::yield_now();
        Ok(())
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        keycode: KeyCode,
        _keymod: KeyMods,
        _repeat: bool,
    ) {
        if let KeyCode::Escape = keycode {
            info!("Escape pressed, quitting");
            event::quit(ctx);
        }
    }
}

pub fn main() -> GameResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cb = ContextBuilder::new("foul_pong", "ggez")
        .window_setup(conf::WindowSetup::default().title("2D Ping Pong").vsync(true))
        .window_mode(conf::WindowMode::default().dimensions(SCREEN_WIDTH, SCREEN_HEIGHT));

    let (ctx, events_loop) = &mut cb.build()?;
    info!("Window open at {}x{}", SCREEN_WIDTH, SCREEN_HEIGHT);

    let game = &mut MainState::new();
    event::run(ctx, events_loop, game)
}
