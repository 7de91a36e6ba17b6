use log::debug;
use rust_decimal::Decimal;

use crate::constants::{
    CONTRIBUTION_SHARE, MAX_CONTRIBUTION, PAY_IN_SHARE, PAY_IN_TO_CONTRIBUTION_RATIO,
};
use crate::fields::{AmountField, FieldConfig};

use super::calculator_model::{CalculatorField, CalculatorSnapshot, UpdateOrigin};

/// Splits a childcare account top-up between the parent's pay-in and the
/// government contribution.
///
/// Either the total or the pay-in can drive a recalculation; the other one
/// and the contribution are derived from it. The nominal split is 8:2, and
/// the contribution never exceeds what is left of [`MAX_CONTRIBUTION`] after
/// the amount already received this quarter.
///
/// Malformed input never fails: an entry that does not parse as a positive
/// number zeroes the derived fields and leaves the entered text as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionCalculator {
    total_amount: AmountField,
    already_contributed: AmountField,
    pay_in_amount: AmountField,
    contribution_amount: AmountField,
}

impl Default for ContributionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributionCalculator {
    pub fn new() -> Self {
        ContributionCalculator {
            total_amount: AmountField::new(FieldConfig::amount()),
            already_contributed: AmountField::new(FieldConfig::capped(MAX_CONTRIBUTION)),
            pay_in_amount: AmountField::new(FieldConfig::amount()),
            contribution_amount: AmountField::new(FieldConfig::amount()),
        }
    }

    /// Rebuilds a calculator from the text currently shown in the editable
    /// fields. No recalculation is run.
    pub fn from_texts(total_amount: &str, already_contributed: &str, pay_in_amount: &str) -> Self {
        let mut calculator = Self::new();
        calculator.total_amount.set_text(total_amount);
        calculator.already_contributed.set_text(already_contributed);
        calculator.pay_in_amount.set_text(pay_in_amount);
        calculator
    }

    pub fn total_amount(&self) -> &AmountField {
        &self.total_amount
    }

    pub fn already_contributed(&self) -> &AmountField {
        &self.already_contributed
    }

    pub fn pay_in_amount(&self) -> &AmountField {
        &self.pay_in_amount
    }

    pub fn contribution_amount(&self) -> &AmountField {
        &self.contribution_amount
    }

    pub fn on_field_changed(&mut self, field: CalculatorField, raw: &str) {
        match field {
            CalculatorField::Total => self.on_total_amount_changed(raw),
            CalculatorField::PayIn => self.on_pay_in_amount_changed(raw),
            CalculatorField::AlreadyContributed => self.on_already_contributed_changed(raw),
        }
    }

    pub fn on_total_amount_changed(&mut self, raw_total: &str) {
        self.total_amount.set_text(raw_total);
        self.recalculate_from_total();
    }

    pub fn on_pay_in_amount_changed(&mut self, raw_pay_in: &str) {
        self.pay_in_amount.set_text(raw_pay_in);
        self.recalculate_from_pay_in();
    }

    /// A change in the amount already received moves the cap, so the split of
    /// the current total is redone.
    pub fn on_already_contributed_changed(&mut self, raw_already_contributed: &str) {
        self.already_contributed.set_text(raw_already_contributed);
        self.recalculate_from_total();
    }

    /// Amount already received this quarter, zero when blank or unparseable
    /// and held inside `[0, MAX_CONTRIBUTION]`.
    pub fn already_contributed_value(&self) -> Decimal {
        let already_contributed = self.already_contributed.value().unwrap_or(Decimal::ZERO);
        self.already_contributed
            .config()
            .constrain(already_contributed)
    }

    /// Contribution still available this quarter.
    pub fn max_contribution(&self) -> Decimal {
        (MAX_CONTRIBUTION - self.already_contributed_value()).max(Decimal::ZERO)
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            total_amount: self.total_amount.text().to_string(),
            already_contributed: self.already_contributed.text().to_string(),
            pay_in_amount: self.pay_in_amount.text().to_string(),
            contribution_amount: self.contribution_amount.text().to_string(),
            max_contribution: self.contribution_amount.config().format(self.max_contribution()),
        }
    }

    fn recalculate_from_total(&mut self) {
        let total = match self.total_amount.value() {
            Some(total) if total > Decimal::ZERO => total,
            _ => {
                debug!(
                    "Total '{}' is not a positive amount, clearing pay-in and contribution",
                    self.total_amount.text()
                );
                self.pay_in_amount.set_value(Decimal::ZERO);
                self.contribution_amount.set_value(Decimal::ZERO);
                return;
            }
        };

        let pay_in = total * PAY_IN_SHARE;
        let contribution = total * CONTRIBUTION_SHARE;
        self.apply(UpdateOrigin::Total, pay_in, contribution);
    }

    fn recalculate_from_pay_in(&mut self) {
        let pay_in = match self.pay_in_amount.value() {
            Some(pay_in) if pay_in > Decimal::ZERO => pay_in,
            _ => {
                debug!(
                    "Pay-in '{}' is not a positive amount, clearing total and contribution",
                    self.pay_in_amount.text()
                );
                self.total_amount.set_value(Decimal::ZERO);
                self.contribution_amount.set_value(Decimal::ZERO);
                return;
            }
        };

        // Rounded before the cap and the sum so the shown total is exactly
        // the shown pay-in plus the shown contribution.
        let contribution = self
            .contribution_amount
            .config()
            .round(pay_in * PAY_IN_TO_CONTRIBUTION_RATIO);
        self.apply(UpdateOrigin::PayIn, pay_in, contribution);
    }

    fn apply(&mut self, origin: UpdateOrigin, pay_in: Decimal, contribution: Decimal) {
        let mut pay_in = pay_in.max(Decimal::ZERO);
        let mut contribution = contribution.max(Decimal::ZERO);
        let max_contribution = self.max_contribution();

        if contribution > max_contribution {
            let excess = contribution - max_contribution;
            debug!(
                "Contribution {} exceeds remaining cap {} by {} ({:?} driven)",
                contribution, max_contribution, excess, origin
            );
            // The parent funds what the cap no longer covers, unless the
            // pay-in is the amount they typed.
            if origin == UpdateOrigin::Total {
                pay_in += excess;
            }
            contribution = max_contribution;
        }

        match origin {
            UpdateOrigin::Total => self.pay_in_amount.set_value(pay_in),
            UpdateOrigin::PayIn => {
                let total = pay_in
                    .checked_add(contribution)
                    .filter(|total| self.total_amount.config().is_representable(*total));
                match total {
                    Some(total) => self.total_amount.set_value(total),
                    None => {
                        debug!(
                            "Total for pay-in {} is out of range, clearing total and contribution",
                            pay_in
                        );
                        self.total_amount.set_value(Decimal::ZERO);
                        self.contribution_amount.set_value(Decimal::ZERO);
                        return;
                    }
                }
            }
        }
        self.contribution_amount.set_value(contribution);
    }
}
