//! Per-phase drawing

use glam::Vec2;

use super::Surface;
use crate::consts::{COURT_HEIGHT, COURT_WIDTH};
use crate::game::{Game, GamePhase};
use crate::sim::Paddle;
use crate::ui::{self, TEXT_FONT, TITLE_FONT};

/// Length of each dash (and gap) on the centre line
const CENTER_DASH: f32 = 10.0;
/// Score text baseline
const SCORE_BASELINE: f32 = 30.0;

/// Draw whatever the current phase shows
pub fn draw<S: Surface + ?Sized>(game: &Game, surface: &mut S) {
    clear(game, surface);
    match game.phase {
        GamePhase::Menu => draw_menu(game, surface),
        GamePhase::Playing => draw_court(game, surface),
        GamePhase::Victory { .. } => draw_victory(game, surface),
    }
}

fn clear<S: Surface + ?Sized>(game: &Game, surface: &mut S) {
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(COURT_WIDTH, COURT_HEIGHT),
        &game.settings.palette.background,
    );
}

fn draw_menu<S: Surface + ?Sized>(game: &Game, surface: &mut S) {
    let labels = &game.settings.labels;
    let fg = &game.settings.palette.foreground;
    let cx = COURT_WIDTH / 2.0;

    surface.fill_text(&labels.title, cx, ui::title_baseline(), TITLE_FONT, fg);
    for item in ui::menu_items(labels) {
        surface.fill_text(item.label, cx, item.baseline, TEXT_FONT, fg);
    }
}

fn draw_court<S: Surface + ?Sized>(game: &Game, surface: &mut S) {
    let palette = &game.settings.palette;
    let m = &game.session;
    let cx = COURT_WIDTH / 2.0;

    surface.stroke_dashed_line(
        Vec2::new(cx, 0.0),
        Vec2::new(cx, COURT_HEIGHT),
        CENTER_DASH,
        &palette.foreground,
    );

    draw_paddle(game, &m.left, surface);
    draw_paddle(game, &m.right, surface);

    surface.fill_circle(m.ball.body.center(), m.ball.radius, &palette.ball);

    let score = format!("{} : {}", m.score.left, m.score.right);
    surface.fill_text(&score, cx, SCORE_BASELINE, TEXT_FONT, &palette.foreground);
}

fn draw_paddle<S: Surface + ?Sized>(game: &Game, paddle: &Paddle, surface: &mut S) {
    let color = game.settings.palette.paddle(paddle.side);
    surface.fill_rect(paddle.body.pos, paddle.body.size, color);
}

fn draw_victory<S: Surface + ?Sized>(game: &Game, surface: &mut S) {
    let GamePhase::Victory { winner } = game.phase else {
        return;
    };
    let labels = &game.settings.labels;
    let fg = &game.settings.palette.foreground;
    let cx = COURT_WIDTH / 2.0;
    let mid = COURT_HEIGHT / 2.0;

    surface.fill_text(&labels.victory, cx, mid - 40.0, TITLE_FONT, fg);
    surface.fill_text(&labels.win_line(winner), cx, mid, TEXT_FONT, fg);
    surface.fill_text(&labels.back_to_menu, cx, mid + 40.0, TEXT_FONT, fg);
}
