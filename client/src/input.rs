use common::games::tictactoe::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Place(Position),
    Quit,
}

/// Accepts `row col`, `row,col` or `q`/`quit`. Range checks are left to the engine.
pub fn parse_command(line: &str) -> Result<PlayerCommand, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(PlayerCommand::Quit);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(format!("Expected 'row col', got '{}'", line));
    };

    let row = row
        .parse::<usize>()
        .map_err(|_| format!("Row '{}' is not a number", row))?;
    let col = col
        .parse::<usize>()
        .map_err(|_| format!("Column '{}' is not a number", col))?;

    Ok(PlayerCommand::Place(Position::new(row, col)))
}
