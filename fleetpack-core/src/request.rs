//! Allocation request envelope and validation.

use thiserror::Error;

use crate::{CapacityUnit, DemandItem};

/// The two ordered input lists for one allocation run.
///
/// The caller's data layer maps its store and vehicle records into this
/// envelope before invoking an [`Allocator`](crate::Allocator). Input order
/// matters: capacity units keep their position as the allocation tie-break,
/// and equal demands are placed in input order.
///
/// # Examples
/// ```
/// use fleetpack_core::{CapacityUnit, DemandItem, PlanRequest};
///
/// let request = PlanRequest {
///     stores: vec![DemandItem::new(1, "Store 1", 5.0)],
///     vehicles: vec![CapacityUnit::new(1, "Van 1", 10.0)],
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Demand items to place, in the caller's order.
    pub stores: Vec<DemandItem>,
    /// Fleet capacity units, in the caller's order.
    pub vehicles: Vec<CapacityUnit>,
}

/// Errors returned by [`PlanRequest::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanRequestValidationError {
    /// A demand value was NaN or infinite.
    #[error("demand for item {id} is not a finite number")]
    NonFiniteDemand {
        /// Identifier of the offending demand item.
        id: u64,
    },
    /// A demand value was negative.
    #[error("demand for item {id} is negative ({demand})")]
    NegativeDemand {
        /// Identifier of the offending demand item.
        id: u64,
        /// The rejected value.
        demand: f64,
    },
    /// A capacity value was NaN or infinite.
    #[error("capacity for unit {id} is not a finite number")]
    NonFiniteCapacity {
        /// Identifier of the offending capacity unit.
        id: u64,
    },
    /// A capacity value was negative.
    #[error("capacity for unit {id} is negative ({capacity})")]
    NegativeCapacity {
        /// Identifier of the offending capacity unit.
        id: u64,
        /// The rejected value.
        capacity: f64,
    },
}

impl PlanRequest {
    /// Check both input lists against the engine's preconditions.
    ///
    /// Demands and capacities must be finite and non-negative. Empty lists
    /// and zero values are valid; infeasibility is a property of the
    /// allocation outcome, not of the request.
    ///
    /// # Errors
    /// Returns the first violation found, naming the offending record.
    pub fn validate(&self) -> Result<(), PlanRequestValidationError> {
        for item in &self.stores {
            if !item.demand.is_finite() {
                return Err(PlanRequestValidationError::NonFiniteDemand { id: item.id });
            }
            if item.demand < 0.0 {
                return Err(PlanRequestValidationError::NegativeDemand {
                    id: item.id,
                    demand: item.demand,
                });
            }
        }
        for unit in &self.vehicles {
            if !unit.capacity.is_finite() {
                return Err(PlanRequestValidationError::NonFiniteCapacity { id: unit.id });
            }
            if unit.capacity < 0.0 {
                return Err(PlanRequestValidationError::NegativeCapacity {
                    id: unit.id,
                    capacity: unit.capacity,
                });
            }
        }
        Ok(())
    }
}
