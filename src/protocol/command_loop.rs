//! Line-oriented stdio front-end.
//!
//! Keeps one live game and a player per seat. Human seats take moves through
//! `move`; computer seats play on `go`. Replies go to the given writer, one
//! line each; failures are reported as `info string <cmd> error: ...`.

use std::io::{self, BufRead, Write};

use crate::board::coordinates::is_valid_index;
use crate::board::tile_state::TileIndex;
use crate::engines::player_factory::{build_player, PlayerKind};
use crate::engines::player_trait::Player;
use crate::game_state::game_state::GameState;
use crate::utils::render_board::render_game_state;

const PROGRAM_NAME: &str = "Plum Checkers";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    writeln!(stdout, "{PROGRAM_NAME} ready")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct Seat {
    kind: PlayerKind,
    player: Box<dyn Player>,
}

impl Seat {
    fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            player: build_player(kind, None),
        }
    }
}

struct Session {
    game: GameState,
    seats: [Seat; 2],
}

impl Session {
    fn new() -> Self {
        Self {
            game: GameState::new_game(),
            seats: [Seat::new(PlayerKind::Human), Seat::new(PlayerKind::AlphaBeta)],
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let reply = match cmd {
            "newgame" => {
                self.new_game();
                Ok(vec!["ok".to_owned()])
            }
            "position" => self.handle_position(&args),
            "state" => Ok(vec![self.game.state_string()]),
            "board" => Ok(render_game_state(&self.game).lines().map(str::to_owned).collect()),
            "moves" => self.handle_moves(&args),
            "move" => self.handle_move(&args),
            "player" => self.handle_player(&args),
            "setoption" => self.handle_setoption(&args),
            "go" => self.handle_go(),
            "result" => Ok(vec![format!("result {}", self.game.result())]),
            "quit" => return Ok(true),
            other => Err(format!("unknown command '{other}'")),
        };

        match reply {
            Ok(lines) => {
                for reply_line in lines {
                    writeln!(out, "{reply_line}")?;
                }
            }
            Err(err) => writeln!(out, "info string {cmd} error: {err}")?,
        }
        Ok(false)
    }

    fn new_game(&mut self) {
        self.game.restart();
        for seat in &mut self.seats {
            if let Some(human) = seat.player.as_human_mut() {
                if human.is_awaiting_move() {
                    human.skip_next_move();
                }
            }
        }
    }

    fn handle_position(&mut self, args: &[&str]) -> Result<Vec<String>, String> {
        let encoded = args.first().ok_or("missing state string")?;
        self.game.set_state_string(encoded);
        Ok(vec![self.game.state_string()])
    }

    fn handle_moves(&self, args: &[&str]) -> Result<Vec<String>, String> {
        let moves = match args.first() {
            Some(tok) => self.game.legal_moves_from(parse_tile(tok)?),
            None => self.game.legal_moves(),
        };
        let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
        Ok(vec![format!("moves {}", listed.join(" ")).trim_end().to_owned()])
    }

    fn handle_move(&mut self, args: &[&str]) -> Result<Vec<String>, String> {
        let (start, end) = match args {
            [start, end, ..] => (parse_tile(start)?, parse_tile(end)?),
            _ => return Err("usage: move <start> <end>".to_owned()),
        };

        let seat = &mut self.seats[seat_index(self.game.is_p1_turn())];
        let played = match seat.player.as_human_mut() {
            Some(human) => {
                if !human.is_awaiting_move() {
                    human.decide(&mut self.game).map_err(|e| e.to_string())?;
                }
                human
                    .submit_move(&mut self.game, start, end)
                    .map_err(|e| e.to_string())?
            }
            None => {
                return Err(format!("side to move is played by {}", seat.kind));
            }
        };
        Ok(vec![format!("played {played}")])
    }

    fn handle_player(&mut self, args: &[&str]) -> Result<Vec<String>, String> {
        let [side, kind, ..] = args else {
            return Err("usage: player <1|2> <kind>".to_owned());
        };
        let index = parse_side(side)?;
        let kind = kind.parse::<PlayerKind>()?;
        self.seats[index] = Seat::new(kind);
        Ok(vec![format!("player {} {}", index + 1, kind)])
    }

    fn handle_setoption(&mut self, args: &[&str]) -> Result<Vec<String>, String> {
        let [side, name, value, ..] = args else {
            return Err("usage: setoption <1|2> <name> <value>".to_owned());
        };
        let index = parse_side(side)?;
        self.seats[index]
            .player
            .set_option(name, value)
            .map_err(|e| e.to_string())?;
        Ok(vec!["ok".to_owned()])
    }

    fn handle_go(&mut self) -> Result<Vec<String>, String> {
        if self.game.is_game_over() {
            return Ok(vec![format!("result {}", self.game.result())]);
        }

        let seat = &mut self.seats[seat_index(self.game.is_p1_turn())];
        let decision = seat
            .player
            .decide(&mut self.game)
            .map_err(|e| e.to_string())?;

        let mut lines = decision.info_lines;
        match decision.chosen_move {
            Some(mv) => lines.push(format!("played {mv}")),
            None if seat.player.is_human() => lines.push("waiting for human move".to_owned()),
            None => lines.push("played none".to_owned()),
        }
        Ok(lines)
    }
}

fn seat_index(p1_turn: bool) -> usize {
    if p1_turn {
        0
    } else {
        1
    }
}

fn parse_side(token: &str) -> Result<usize, String> {
    match token {
        "1" => Ok(0),
        "2" => Ok(1),
        other => Err(format!("invalid player '{other}', expected 1 or 2")),
    }
}

fn parse_tile(token: &str) -> Result<TileIndex, String> {
    token
        .parse::<TileIndex>()
        .ok()
        .filter(|index| is_valid_index(*index))
        .ok_or_else(|| format!("invalid tile index '{token}'"))
}
