use thiserror::Error;

use crate::domain::{Family, TEAM_SIZE};

/// Invalid team input.
///
/// Messages are meant for the end user and are printed verbatim by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("Ожидалось ровно {expected} званий, получено: {got}.")]
    WrongCount { expected: usize, got: usize },

    #[error(
        "Не удалось распознать ранг: «{raw}». \
         Поддерживаемые примеры: «алмаз 1», «diamond2», «г1», «ascendant 3», «иммо2», «radiant»."
    )]
    UnrecognizedRank { raw: String },

    #[error(
        "Для ранга «{}» требуется подуровень 1|2|3. Например: «{} 1».",
        .family.display_name(),
        .family.display_name().to_lowercase()
    )]
    MissingSubTier { family: Family },

    #[error(
        "Неверный подуровень для «{}»: {tier}. Допустимо: 1, 2 или 3.",
        .family.display_name()
    )]
    InvalidSubTier { family: Family, tier: u32 },
}

impl RankError {
    pub fn wrong_count(got: usize) -> Self {
        RankError::WrongCount {
            expected: TEAM_SIZE,
            got,
        }
    }
}

/// Error surfaced by the binary: a message plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Invalid user input (exit code 2).
    pub fn usage(message: impl std::fmt::Display) -> Self {
        Self::new(2, format!("Ошибка: {message}"))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<RankError> for AppError {
    fn from(err: RankError) -> Self {
        AppError::usage(err)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
