use std::io::{BufRead, Write};

use tracing::warn;

use crate::{
    game::GameController,
    history::MoveHistory,
    message::{Intent, Reply},
    turn::GameStatus,
    win::winning_line,
};

/// Runs a game on a line-oriented terminal until the input runs out or
/// the player quits.
pub fn play<R, W>(
    mut game: GameController,
    input: R,
    mut output: W,
) -> anyhow::Result<GameController>
where
    R: BufRead,
    W: Write,
{
    draw(&game, &mut output)?;
    let mut lines = input.lines();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }

        let intent = match line.parse::<Intent>() {
            Ok(intent) => intent,
            Err(e) => {
                writeln!(output, "Invalid input: {e}. Enter \"x y\", \"goto i\" or \"q\".")?;
                continue;
            }
        };

        match game.dispatch(intent) {
            Ok(Reply::Played(GameStatus::Won(marker))) => {
                draw(&game, &mut output)?;
                writeln!(output, "{marker} won!")?;
            }
            Ok(Reply::Played(GameStatus::Drawn)) => {
                draw(&game, &mut output)?;
                writeln!(output, "Draw.")?;
            }
            Ok(_) => draw(&game, &mut output)?,
            Err(e) => {
                warn!(?intent, error = %e, "rejected intent");
                writeln!(output, "Can't do that: {e}.")?;
            }
        }
    }

    Ok(game)
}

fn draw<W: Write>(game: &GameController, output: &mut W) -> std::io::Result<()> {
    let board = game.board();
    writeln!(output, "\n{board}\n")?;

    match game.status() {
        GameStatus::InProgress => writeln!(output, "Next player: {}", game.next_player())?,
        GameStatus::Won(_) => {
            if let Some((marker, line)) = winning_line(board) {
                writeln!(output, "Winner: {marker} ({line})")?;
            }
        }
        GameStatus::Drawn => writeln!(output, "Draw")?,
    }

    let history = game.history();
    for (index, mv, _) in history.entries() {
        let current = if index == history.cursor() { " <" } else { "" };
        let played = mv.map(|mv| format!(" ({mv})")).unwrap_or_default();
        writeln!(
            output,
            "{}: Go to {}{played}{current}",
            index,
            MoveHistory::describe(index)
        )?;
    }
    Ok(())
}
