use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CatalogError;

/// A labeled, weighted entry on the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct PrizeOption {
    pub name: String,
    #[validate(custom = "validate_weight")]
    pub weight: f64,
}

impl PrizeOption {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if weight.is_finite() && weight > 0.0 {
        return Ok(());
    }
    let mut err = ValidationError::new("weight_not_positive");
    err.add_param(Cow::from("value"), &weight);
    err.message = Some(Cow::from("weight must be a finite number greater than zero"));
    Err(err)
}

/// An ordered, non-empty list of options whose weights have all been checked.
///
/// Zero weights are rejected rather than treated as one: a prize that should
/// never be drawn does not belong on the wheel.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PrizeCatalog {
    options: Vec<PrizeOption>,
    total_weight: f64,
}

impl PrizeCatalog {
    pub fn new(options: Vec<PrizeOption>) -> Result<Self, CatalogError> {
        if options.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, option) in options.iter().enumerate() {
            if let Err(errors) = option.validate() {
                return Err(CatalogError::InvalidOption {
                    index,
                    name: option.name.clone(),
                    errors,
                });
            }
        }

        let total_weight: f64 = options.iter().map(|o| o.weight).sum();
        if !total_weight.is_finite() {
            return Err(CatalogError::TotalWeightNotFinite);
        }

        Ok(Self {
            options,
            total_weight,
        })
    }

    pub fn options(&self) -> &[PrizeOption] {
        &self.options
    }

    pub fn get(&self, index: usize) -> Option<&PrizeOption> {
        self.options.get(index)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}
