//! Tests for the contribution calculator entry points and the cap.

#[cfg(test)]
mod tests {
    use crate::calculator::{CalculatorField, ContributionCalculator};
    use rust_decimal_macros::dec;

    fn calculator_with_already_contributed(already: &str) -> ContributionCalculator {
        ContributionCalculator::from_texts("", already, "")
    }

    fn assert_split(calculator: &ContributionCalculator, pay_in: &str, contribution: &str) {
        assert_eq!(calculator.pay_in_amount().text(), pay_in, "pay-in");
        assert_eq!(
            calculator.contribution_amount().text(),
            contribution,
            "contribution"
        );
    }

    // ==================== Total-driven Tests ====================

    #[test]
    fn test_total_splits_eight_to_two() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("100.00");

        assert_split(&calculator, "80.00", "20.00");
        assert_eq!(calculator.total_amount().text(), "100.00");
    }

    #[test]
    fn test_total_above_cap_moves_excess_to_pay_in() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("3000.00");

        assert_split(&calculator, "2500.00", "500.00");
    }

    #[test]
    fn test_total_with_partially_used_cap() {
        let mut calculator = calculator_with_already_contributed("450.00");
        calculator.on_total_amount_changed("1000.00");

        assert_split(&calculator, "950.00", "50.00");
    }

    #[test]
    fn test_total_exactly_at_cap_is_not_clamped() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("2500");

        assert_split(&calculator, "2000.00", "500.00");
    }

    #[test]
    fn test_total_with_cap_fully_used() {
        let mut calculator = calculator_with_already_contributed("500");
        calculator.on_total_amount_changed("250");

        assert_split(&calculator, "250.00", "0.00");
    }

    #[test]
    fn test_total_rounds_each_share_and_keeps_sum() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("0.03");

        assert_split(&calculator, "0.02", "0.01");
    }

    #[test]
    fn test_empty_total_zeroes_dependents() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("100");
        calculator.on_total_amount_changed("");

        assert_split(&calculator, "0.00", "0.00");
        assert_eq!(calculator.total_amount().text(), "");
    }

    #[test]
    fn test_unparseable_total_keeps_literal_text() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("12abc");

        assert_split(&calculator, "0.00", "0.00");
        assert_eq!(calculator.total_amount().text(), "12abc");
    }

    #[test]
    fn test_zero_and_negative_total_zero_dependents() {
        for raw in ["0", "0.00", "-100"] {
            let mut calculator = ContributionCalculator::new();
            calculator.on_total_amount_changed(raw);
            assert_split(&calculator, "0.00", "0.00");
        }
    }

    // ==================== Pay-in-driven Tests ====================

    #[test]
    fn test_pay_in_derives_contribution_and_total() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_pay_in_amount_changed("80.00");

        assert_eq!(calculator.contribution_amount().text(), "20.00");
        assert_eq!(calculator.total_amount().text(), "100.00");
        assert_eq!(calculator.pay_in_amount().text(), "80.00");
    }

    #[test]
    fn test_pay_in_above_cap_is_not_increased() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_pay_in_amount_changed("2400");

        // Nominal contribution 600 is capped; the typed pay-in stays as entered
        assert_eq!(calculator.contribution_amount().text(), "500.00");
        assert_eq!(calculator.total_amount().text(), "2900.00");
        assert_eq!(calculator.pay_in_amount().text(), "2400");
    }

    #[test]
    fn test_pay_in_with_partially_used_cap() {
        let mut calculator = calculator_with_already_contributed("450");
        calculator.on_pay_in_amount_changed("800");

        assert_eq!(calculator.contribution_amount().text(), "50.00");
        assert_eq!(calculator.total_amount().text(), "850.00");
    }

    #[test]
    fn test_pay_in_contribution_rounded_before_sum() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_pay_in_amount_changed("0.02");
        assert_eq!(calculator.contribution_amount().text(), "0.01");
        assert_eq!(calculator.total_amount().text(), "0.03");

        calculator.on_pay_in_amount_changed("33.33");
        assert_eq!(calculator.contribution_amount().text(), "8.33");
        assert_eq!(calculator.total_amount().text(), "41.66");
    }

    #[test]
    fn test_negative_pay_in_zeroes_dependents() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_pay_in_amount_changed("-5");

        assert_eq!(calculator.total_amount().text(), "0.00");
        assert_eq!(calculator.contribution_amount().text(), "0.00");
        assert_eq!(calculator.pay_in_amount().text(), "-5");
    }

    #[test]
    fn test_unparseable_pay_in_zeroes_dependents() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_pay_in_amount_changed("eighty");

        assert_eq!(calculator.total_amount().text(), "0.00");
        assert_eq!(calculator.contribution_amount().text(), "0.00");
    }

    #[test]
    fn test_pay_in_too_large_for_cents_zeroes_dependents() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_pay_in_amount_changed("79228162514264337593543950335");

        assert_eq!(calculator.total_amount().text(), "0.00");
        assert_eq!(calculator.contribution_amount().text(), "0.00");
    }

    #[test]
    fn test_pay_in_whose_total_overflows_zeroes_dependents() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_pay_in_amount_changed("792281625142643375935439503.35");

        assert_eq!(calculator.total_amount().text(), "0.00");
        assert_eq!(calculator.contribution_amount().text(), "0.00");
        assert_eq!(
            calculator.pay_in_amount().text(),
            "792281625142643375935439503.35"
        );
    }

    #[test]
    fn test_largest_total_still_splits() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("792281625142643375935439503.35");

        assert_eq!(calculator.contribution_amount().text(), "500.00");
        assert_eq!(
            calculator.pay_in_amount().text(),
            "792281625142643375935439003.35"
        );
    }

    // ==================== Already-contributed Tests ====================

    #[test]
    fn test_already_contributed_change_resplits_total() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("1000");
        assert_split(&calculator, "800.00", "200.00");

        calculator.on_already_contributed_changed("450");
        assert_split(&calculator, "950.00", "50.00");

        calculator.on_already_contributed_changed("");
        assert_split(&calculator, "800.00", "200.00");
    }

    #[test]
    fn test_max_contribution_floors_at_zero() {
        assert_eq!(
            calculator_with_already_contributed("").max_contribution(),
            dec!(500)
        );
        assert_eq!(
            calculator_with_already_contributed("120.50").max_contribution(),
            dec!(379.50)
        );
        assert_eq!(
            calculator_with_already_contributed("750").max_contribution(),
            dec!(0)
        );
        assert_eq!(
            calculator_with_already_contributed("-20").max_contribution(),
            dec!(500)
        );
        assert_eq!(
            calculator_with_already_contributed("n/a").max_contribution(),
            dec!(500)
        );
    }

    #[test]
    fn test_already_contributed_value_held_in_range() {
        assert_eq!(
            calculator_with_already_contributed("750").already_contributed_value(),
            dec!(500)
        );
        assert_eq!(
            calculator_with_already_contributed("-20").already_contributed_value(),
            dec!(0)
        );
        assert_eq!(
            calculator_with_already_contributed("450.25").already_contributed_value(),
            dec!(450.25)
        );
    }

    #[test]
    fn test_already_contributed_over_ceiling_gives_no_contribution() {
        let mut calculator = calculator_with_already_contributed("750");
        calculator.on_total_amount_changed("100");

        assert_split(&calculator, "100.00", "0.00");
    }

    // ==================== Idempotency Tests ====================

    #[test]
    fn test_feeding_pay_in_back_reproduces_total() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("123.45");
        let first = calculator.snapshot();

        let pay_in = first.pay_in_amount.clone();
        calculator.on_pay_in_amount_changed(&pay_in);
        let second = calculator.snapshot();

        assert_eq!(second.total_amount, "123.45");
        assert_eq!(second.contribution_amount, first.contribution_amount);
    }

    #[test]
    fn test_repeated_total_recalculation_at_cap_converges() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_total_amount_changed("3000");
        let first = calculator.snapshot();

        calculator.on_total_amount_changed("3000.00");
        assert_eq!(calculator.snapshot().pay_in_amount, first.pay_in_amount);
        assert_eq!(
            calculator.snapshot().contribution_amount,
            first.contribution_amount
        );

        // Driving from the clamped pay-in lands back on the same total
        calculator.on_pay_in_amount_changed("2500.00");
        assert_eq!(calculator.total_amount().text(), "3000.00");
        assert_eq!(calculator.contribution_amount().text(), "500.00");
    }

    // ==================== Dispatch / Snapshot Tests ====================

    #[test]
    fn test_on_field_changed_dispatches() {
        let mut calculator = ContributionCalculator::new();
        calculator.on_field_changed(CalculatorField::AlreadyContributed, "490");
        calculator.on_field_changed(CalculatorField::Total, "100");
        assert_split(&calculator, "90.00", "10.00");

        calculator.on_field_changed(CalculatorField::PayIn, "40");
        assert_eq!(calculator.total_amount().text(), "50.00");
        assert_eq!(calculator.contribution_amount().text(), "10.00");
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut calculator = calculator_with_already_contributed("100");
        calculator.on_total_amount_changed("100");

        let json = serde_json::to_value(calculator.snapshot()).unwrap();
        assert_eq!(json["totalAmount"], "100");
        assert_eq!(json["alreadyContributed"], "100");
        assert_eq!(json["payInAmount"], "80.00");
        assert_eq!(json["contributionAmount"], "20.00");
        assert_eq!(json["maxContribution"], "400.00");
    }

    #[test]
    fn test_calculator_field_serialization() {
        assert_eq!(
            serde_json::to_string(&CalculatorField::PayIn).unwrap(),
            "\"payIn\""
        );
        assert_eq!(
            serde_json::from_str::<CalculatorField>("\"alreadyContributed\"").unwrap(),
            CalculatorField::AlreadyContributed
        );
        assert_eq!(CalculatorField::Total.as_str(), "total");
    }
}
