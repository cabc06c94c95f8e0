//! Interactive rank prompt.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the prompt provides the "run `rank-avg` and type five ranks" UX

use std::io::{self, BufRead, Write};

use crate::domain::TEAM_SIZE;
use crate::error::AppError;

const INTRO: &str = "Интерактивный режим. Введите 5 званий (RU/EN, можно сокращения). \
                     Примеры: д1, аск1, бронза 2, ascendant3, иммо1, radiant";

/// Ask for each of the five ranks on stdin.
pub fn prompt_for_ranks() -> Result<Vec<String>, AppError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    read_ranks(&mut stdin.lock(), &mut stdout)
}

/// Prompt loop over arbitrary reader/writer (testable without a terminal).
///
/// Answers are taken as typed (trimmed); validation happens in the pipeline.
pub fn read_ranks<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<String>, AppError> {
    writeln!(output, "{INTRO}").map_err(|e| AppError::new(4, format!("Failed to write prompt: {e}")))?;

    let mut ranks = Vec::with_capacity(TEAM_SIZE);
    for i in 1..=TEAM_SIZE {
        write!(output, "Звание {i}: ")
            .and_then(|_| output.flush())
            .map_err(|e| AppError::new(4, format!("Failed to write prompt: {e}")))?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .map_err(|e| AppError::new(4, format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Err(AppError::usage(format!(
                "ввод прерван: получено {} из {TEAM_SIZE} званий.",
                ranks.len()
            )));
        }

        tracing::debug!(index = i, input = line.trim(), "rank entered");
        ranks.push(line.trim().to_string());
    }

    Ok(ranks)
}
