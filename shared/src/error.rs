use std::fmt;
use validator::ValidationErrors;

/// Reasons a prize catalog is refused before the wheel is built.
#[derive(Debug)]
pub enum CatalogError {
    Empty,
    InvalidOption {
        index: usize,
        name: String,
        errors: ValidationErrors,
    },
    TotalWeightNotFinite,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "prize catalog must contain at least one option"),
            CatalogError::InvalidOption { index, name, errors } => {
                write!(f, "prize option {} ({:?}) is invalid: {}", index, name, errors)
            }
            CatalogError::TotalWeightNotFinite => {
                write!(f, "sum of prize weights is not a finite number")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::InvalidOption { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_option() {
        let err = CatalogError::InvalidOption {
            index: 3,
            name: "Coupon".to_string(),
            errors: ValidationErrors::new(),
        };
        let text = err.to_string();
        assert!(text.contains("prize option 3"));
        assert!(text.contains("Coupon"));
    }

    #[test]
    fn test_empty_has_no_source() {
        use std::error::Error;
        assert!(CatalogError::Empty.source().is_none());
    }
}
