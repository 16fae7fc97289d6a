use crate::color::validate_color;
use crate::models::Submission;
use crate::profanity::ForbiddenWords;

/// Why a submission was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    InvalidColor { text: String, color: String },
    Profanity { text: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
    /// Submissions that passed, in input order, colors normalized.
    pub accepted: Vec<Submission>,
    pub rejected: Vec<Rejection>,
}

/// Run the color check then the profanity check on every submission.
///
/// A failure on either check drops the whole submission, so no text is ever
/// accepted without its color.
pub fn validate(submissions: Vec<Submission>, forbidden: &ForbiddenWords) -> Validated {
    let mut validated = Validated::default();

    for submission in submissions {
        let color = match validate_color(&submission.color) {
            Ok(hex) => hex,
            Err(_) => {
                validated.rejected.push(Rejection::InvalidColor {
                    color: submission.color.trim().to_string(),
                    text: submission.text,
                });
                continue;
            }
        };

        if forbidden.contains_profanity(&submission.text) {
            validated.rejected.push(Rejection::Profanity {
                text: submission.text,
            });
            continue;
        }

        validated.accepted.push(Submission {
            text: submission.text,
            color,
        });
    }

    validated
}
