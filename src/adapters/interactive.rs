//! Agent that reads moves typed by a person

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    Error, Result,
    ports::{Agent, AgentKind},
    tictactoe::{Board, Move, Player},
};

const FORMAT_HINT: &str = "Please enter in format: row,col";
const INVALID_MOVE: &str = "Invalid move. Try again.";

/// Prompts on `output` and reads `row,col` lines from `input` until a legal
/// move is entered
pub struct InteractiveAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl InteractiveAgent<StdinLock<'static>, Stdout> {
    /// Agent bound to the process's stdin and stdout
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractiveAgent<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Give back the output sink, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").map_err(|e| Error::io("write to console", e))
    }
}

/// Parse `row,col`. Returns `None` unless the text is two integers separated
/// by a comma. Range is not checked here; integers too large for `i64`
/// saturate.
pub fn parse_coordinates(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.trim().split(',');
    let row = parse_integer(parts.next()?)?;
    let col = parse_integer(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let saturated = if text.starts_with('-') { i64::MIN } else { i64::MAX };
    Some(text.parse().unwrap_or(saturated))
}

impl<R: BufRead, W: Write> Agent for InteractiveAgent<R, W> {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Move> {
        let legal = board.available_moves();
        if legal.is_empty() {
            return Err(Error::NoValidMoves);
        }

        loop {
            write!(self.output, "Player {player}'s turn (row,col): ")
                .and_then(|_| self.output.flush())
                .map_err(|e| Error::io("write prompt", e))?;

            let mut raw = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut raw)
                .map_err(|e| Error::io("read move", e))?;
            if read == 0 {
                return Err(Error::InputClosed);
            }

            let line = String::from_utf8_lossy(&raw);
            let Some((row, col)) = parse_coordinates(&line) else {
                self.say(FORMAT_HINT)?;
                continue;
            };

            let candidate = usize::try_from(row)
                .ok()
                .zip(usize::try_from(col).ok())
                .and_then(|(row, col)| Move::new(row, col).ok())
                .filter(|mv| legal.contains(mv));

            match candidate {
                Some(mv) => return Ok(mv),
                None => self.say(INVALID_MOVE)?,
            }
        }
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Interactive
    }

    fn name(&self) -> &str {
        &self.name
    }
}
