//! Page handlers: landing page, game page, and highscore page.
//!
//! Pages are rendered server-side with `format!` templates. The game page
//! embeds the board of the freshly started round plus a small script that
//! drives the check and score endpoints from the browser.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::info;
use rand::rng;

use crate::config::game::{BOARD_ALPHABET, GRID_COL, GRID_ROW};
use crate::game::board::generate_board;
use crate::game::types::Board;
use crate::server::http_error::game_error_response;
use crate::server::sessions::{load_session, save_session, session_cookie};
use crate::server::state::AppState;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Word Grid</title></head>
<body>
  <h1>Word Grid</h1>
  <p>Find as many words as you can on a random letter grid.</p>
  <p><a href="/home">Start a game</a></p>
  <p><a href="/highscores">Highscore & Games Played</a></p>
</body>
</html>
"#;

/// `GET /` — static landing page, no game state involved.
pub async fn landing_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(LANDING_PAGE)
}

/// `GET /home` — start a new round.
///
/// Generates a fresh board, stores it in the player's session (discarding any
/// previous round), and renders the game page embedding it.
pub async fn game_page(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let board = match generate_board(GRID_ROW, GRID_COL, BOARD_ALPHABET, &mut rng()) {
        Ok(board) => board,
        Err(e) => return game_error_response(&e, None),
    };

    let (id, mut session) = load_session(&req, &state);
    info!("session {}: new game started", id);

    let html = render_game_page(&board);
    session.start_game(board);
    save_session(&state, id, session);

    HttpResponse::Ok()
        .cookie(session_cookie(id))
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// `GET /highscores` — session scoreboard.
///
/// Reads the session stats, defaulting absent values to zero and persisting
/// the defaults back into the session store.
pub async fn highscores_page(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let (id, session) = load_session(&req, &state);
    let stats = session.stats;
    save_session(&state, id, session);

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Highscores</title></head>
<body>
  <h1 id="highscorewelcome">Welcome to the Highscore Page</h1>
  <p>Highscore: <span id="highscore">{}</span></p>
  <p>Games played: <span id="games-played">{}</span></p>
  <p><a href="/home">Back to the game</a></p>
</body>
</html>
"#,
        stats.highscore, stats.games_played
    );

    HttpResponse::Ok()
        .cookie(session_cookie(id))
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Render the board as an HTML table, one cell per letter.
fn render_board_table(board: &Board) -> String {
    let rows: String = board
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|letter| format!("<td>{}</td>", letter))
                .collect();
            format!("    <tr>{}</tr>\n", cells)
        })
        .collect();
    format!("<table id=\"board\">\n{}  </table>", rows)
}

fn render_game_page(board: &Board) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Word Grid</title></head>
<body>
  <h1 id="gamepagewelcome">Welcome to the Game Page</h1>
  {}
  <form id="word-form">
    <input id="word" name="word" autocomplete="off">
    <button type="submit">Check</button>
  </form>
  <p>Score: <span id="score">0</span></p>
  <p id="verdict"></p>
  <button id="end-game">End game</button>
  <p id="record"></p>
  <script>
    let score = 0;
    document.getElementById("word-form").addEventListener("submit", async (evt) => {{
      evt.preventDefault();
      const word = document.getElementById("word").value;
      const resp = await fetch(`/check?word=${{encodeURIComponent(word)}}`);
      const data = await resp.json();
      document.getElementById("verdict").textContent = data.result;
      if (data.result === "ok") {{
        score += word.length;
        document.getElementById("score").textContent = score;
      }}
    }});
    document.getElementById("end-game").addEventListener("click", async () => {{
      const resp = await fetch("/playerdata", {{
        method: "POST",
        headers: {{"Content-Type": "application/json"}},
        body: JSON.stringify({{score: `${{score}}`}}),
      }});
      const data = await resp.json();
      document.getElementById("record").textContent = data.brokeRecord
        ? `New record: ${{data.highscore}}!`
        : `Highscore: ${{data.highscore}} (games played: ${{data.games_played}})`;
    }});
  </script>
</body>
</html>
"#,
        render_board_table(board)
    )
}
