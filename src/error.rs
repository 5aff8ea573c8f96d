//! Error types for the library core and the CLI front-end.
//!
//! `FitError` is the typed error surface of the fitting/statistics code:
//! callers can match on what went wrong (mismatched inputs, a failed solve,
//! a degenerate score). `AppError` is the binary's exit-code-carrying error;
//! every `FitError` maps into it at the app boundary.

/// Library-level fitting error.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// The x and y sequences differ in length. Checked at the entry of every
    /// public fitting operation.
    LengthMismatch { len_x: usize, len_y: usize },
    /// Fewer samples than the operation needs: an empty fit input, or a
    /// statistics window wider than the sample (n < degree + 1).
    Underdetermined { n: usize, needed: usize },
    /// The least-squares solve produced no finite solution at any tolerance.
    SolveFailed { degree: usize },
    /// A candidate's criterion score was non-finite (strict mode only).
    NumericDegenerate { degree: usize, score: f64 },
    /// Every candidate degree failed or scored non-finite.
    NoViableDegree { reasons: Vec<(usize, String)> },
}

pub type FitResult<T> = Result<T, FitError>;

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::LengthMismatch { len_x, len_y } => {
                write!(f, "x and y have different lengths: {len_x} vs {len_y}")
            }
            FitError::Underdetermined { n, needed } => {
                write!(f, "underdetermined: n={n} < {needed}")
            }
            FitError::SolveFailed { degree } => {
                write!(f, "least-squares solve failed for degree {degree}")
            }
            FitError::NumericDegenerate { degree, score } => {
                write!(f, "non-finite criterion score for degree {degree}: {score}")
            }
            FitError::NoViableDegree { reasons } => {
                write!(f, "no candidate degree produced a usable fit")?;
                for (degree, reason) in reasons {
                    write!(f, "; d={degree}: {reason}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for FitError {}

/// Binary-level error: a message plus the process exit code.
///
/// Exit codes: 2 = usage/input problem, 3 = insufficient data,
/// 4 = numeric/internal failure.
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

    pub fn exit_code(&self) -> u8 {
        self.exit_code
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

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let exit_code = match &err {
            FitError::LengthMismatch { .. } => 2,
            FitError::Underdetermined { .. } | FitError::NoViableDegree { .. } => 3,
            FitError::SolveFailed { .. } | FitError::NumericDegenerate { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_display_names_both_lengths() {
        let err = FitError::LengthMismatch { len_x: 3, len_y: 5 };
        assert_eq!(err.to_string(), "x and y have different lengths: 3 vs 5");
    }

    #[test]
    fn fit_errors_map_to_documented_exit_codes() {
        let cases = [
            (FitError::LengthMismatch { len_x: 1, len_y: 2 }, 2),
            (FitError::Underdetermined { n: 4, needed: 6 }, 3),
            (FitError::NoViableDegree { reasons: vec![] }, 3),
            (FitError::SolveFailed { degree: 5 }, 4),
            (
                FitError::NumericDegenerate {
                    degree: 9,
                    score: f64::NAN,
                },
                4,
            ),
        ];
        for (err, expected) in cases {
            let app: AppError = err.into();
            assert_eq!(app.exit_code(), expected);
        }
    }
}
