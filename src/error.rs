use crate::basic::{GridDim, GridPoint};
use crate::snake::orientation::GeometryError;
use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    /// A grid lookup outside of the board
    OutOfRange { point: GridPoint, dim: GridDim },
    /// The snake body is not a chain of axis-aligned single steps
    Geometry(GeometryError),
    /// No free cell left to place food on
    NoSpace,
    /// A cell the snake starts on is not pathable
    Blocked { point: GridPoint },
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameError(e) => write!(f, "ggez: {}", e),
            Self::OutOfRange { point, dim } => {
                write!(f, "{:?} is outside the {}x{} board", point, dim.x, dim.y)
            }
            Self::Geometry(e) => write!(f, "{}", e),
            Self::NoSpace => write!(f, "no free cell for food"),
            Self::Blocked { point } => write!(f, "{:?} is a wall", point),
        }
    }
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<GeometryError> for Error {
    fn from(e: GeometryError) -> Self {
        Self(ErrorType::Geometry(e), vec![])
    }
}

impl From<ErrorType> for Error {
    fn from(error_type: ErrorType) -> Self {
        Self(error_type, vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_is_printed_innermost_last() {
        let result: Result = Err(Error::from(ErrorType::NoSpace));
        let error = result
            .with_trace_step("Food::place")
            .with_trace_step("Game::reset")
            .unwrap_err();

        assert!(matches!(error.error_type(), ErrorType::NoSpace));
        let text = format!("{}", error);
        let outer = text.find("Game::reset").unwrap();
        let inner = text.find("Food::place").unwrap();
        assert!(outer < inner);
    }

    #[test]
    fn test_error_names_the_cell() {
        let error = Error::from(ErrorType::OutOfRange {
            point: GridPoint::new(3, 0),
            dim: GridDim::new(3, 3),
        });
        assert!(format!("{}", error).contains("<3, 0> is outside the 3x3 board"));

        let error = Error::from(ErrorType::Blocked { point: GridPoint::new(2, 0) });
        assert!(format!("{}", error).contains("<2, 0> is a wall"));
    }
}
