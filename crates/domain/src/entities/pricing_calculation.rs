//! PricingCalculation entity - price build-up for a bid

use serde::{Deserialize, Serialize};

use crate::common::finite_f64;
use crate::record::{CollectionKind, Record};
use crate::{OpportunityId, PricingCalculationId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCalculation {
    pub id: PricingCalculationId,
    pub opportunity_id: OpportunityId,
    #[serde(serialize_with = "finite_f64")]
    pub labor_cost: f64,
    #[serde(serialize_with = "finite_f64")]
    pub material_cost: f64,
    /// Indirect rate applied to direct costs (0.25 = 25%)
    #[serde(serialize_with = "finite_f64")]
    pub overhead_rate: f64,
    /// Fee applied on top of burdened cost (0.10 = 10%)
    #[serde(serialize_with = "finite_f64")]
    pub profit_margin: f64,
    /// Price as saved; not recomputed automatically
    #[serde(serialize_with = "finite_f64")]
    pub total_price: f64,
}

impl PricingCalculation {
    /// Creates a calculation with `total_price` derived from the inputs.
    pub fn new(
        opportunity_id: OpportunityId,
        labor_cost: f64,
        material_cost: f64,
        overhead_rate: f64,
        profit_margin: f64,
    ) -> Self {
        let mut calculation = Self {
            id: PricingCalculationId::new(),
            opportunity_id,
            labor_cost,
            material_cost,
            overhead_rate,
            profit_margin,
            total_price: 0.0,
        };
        calculation.total_price = calculation.derived_total();
        calculation
    }

    pub fn with_id(mut self, id: impl Into<PricingCalculationId>) -> Self {
        self.id = id.into();
        self
    }

    /// `(labor + materials) * (1 + overhead) * (1 + margin)`
    pub fn derived_total(&self) -> f64 {
        (self.labor_cost + self.material_cost)
            * (1.0 + self.overhead_rate)
            * (1.0 + self.profit_margin)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCalculationUpdate {
    #[serde(default)]
    pub opportunity_id: Option<OpportunityId>,
    #[serde(default)]
    pub labor_cost: Option<f64>,
    #[serde(default)]
    pub material_cost: Option<f64>,
    #[serde(default)]
    pub overhead_rate: Option<f64>,
    #[serde(default)]
    pub profit_margin: Option<f64>,
    #[serde(default)]
    pub total_price: Option<f64>,
}

impl Record for PricingCalculation {
    type Id = PricingCalculationId;
    type Update = PricingCalculationUpdate;

    const KIND: CollectionKind = CollectionKind::PricingCalculations;

    fn id(&self) -> &PricingCalculationId {
        &self.id
    }

    fn apply_update(&mut self, update: &PricingCalculationUpdate) {
        if let Some(opportunity_id) = &update.opportunity_id {
            self.opportunity_id = opportunity_id.clone();
        }
        if let Some(labor_cost) = update.labor_cost {
            self.labor_cost = labor_cost;
        }
        if let Some(material_cost) = update.material_cost {
            self.material_cost = material_cost;
        }
        if let Some(overhead_rate) = update.overhead_rate {
            self.overhead_rate = overhead_rate;
        }
        if let Some(profit_margin) = update.profit_margin {
            self.profit_margin = profit_margin;
        }
        if let Some(total_price) = update.total_price {
            self.total_price = total_price;
        }
    }
}
