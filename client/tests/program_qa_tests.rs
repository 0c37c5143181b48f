//! Programmer and QA wizard tests
//!
//! Covers the two-step programmer flow (identity, sheet figures with their
//! derived totals) and the two-step QA flow (allotment and checklist, then
//! per-process run details).

use std::str::FromStr;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use fabtrack_client::wizard::{ProgramForm, QaForm, StepOutcome, Wizard};
use shared::models::{recalculate_totals, ProcessKind, ProgramSheet, SheetField};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Programmer Wizard
// ============================================================================

mod programmer {
    use super::*;

    fn filled_wizard() -> Wizard<ProgramForm> {
        let mut wizard = Wizard::<ProgramForm>::new();
        let form = wizard.form_mut();
        form.material_id = Some(Uuid::new_v4());
        form.program_number = "2511AD-008".to_string();
        form.program_date = NaiveDate::from_ymd_opt(2025, 11, 14);
        form.edit_sheet(SheetField::QuantityProcessed, "4");
        form.edit_sheet(SheetField::WeightUsed, "12.5");
        form.edit_sheet(SheetField::CutLength, "3400");
        form.edit_sheet(SheetField::PierceCount, "18");
        form.edit_sheet(SheetField::MinutesPerSheet, "7.5");
        form.edit_sheet(SheetField::SheetCount, "6");
        wizard
    }

    #[test]
    fn test_identity_step_requires_selection_number_and_date() {
        let mut wizard = Wizard::<ProgramForm>::new();
        assert_eq!(wizard.next(), StepOutcome::Rejected);
        assert!(wizard.errors().get("material_id").is_some());
        assert!(wizard.errors().get("program_number").is_some());
        assert!(wizard.errors().get("program_date").is_some());
    }

    #[test]
    fn test_figures_step_requires_all_six_inputs() {
        let mut wizard = filled_wizard();
        wizard.next();
        wizard.form_mut().edit_sheet(SheetField::PierceCount, "");

        assert_eq!(wizard.next(), StepOutcome::Rejected);
        assert_eq!(wizard.step(), 2);
        assert!(wizard.errors().get("pierce_count").is_some());
    }

    #[test]
    fn test_totals_follow_every_input_edit() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.form().sheet.total_minutes, "45");

        wizard.form_mut().edit_sheet(SheetField::SheetCount, "8");
        let sheet = &wizard.form().sheet;
        assert_eq!(sheet.total_quantity, "32");
        assert_eq!(sheet.total_weight, "100");
        assert_eq!(sheet.total_pierce_count, "144");
        assert_eq!(sheet.total_minutes, "60");
    }

    #[test]
    fn test_payload_carries_parsed_figures() {
        let mut wizard = filled_wizard();
        wizard.next();
        assert_eq!(wizard.next(), StepOutcome::Advanced(2));

        let payload = wizard.begin_submit().unwrap();
        assert_eq!(payload.program_number, "2511AD-008");
        assert_eq!(payload.figures.sheet_count, dec("6"));
        assert_eq!(payload.figures.total_weight, dec("75"));
        assert_eq!(payload.figures.total_cut_length, dec("20400"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every total is the per-sheet value scaled by the sheet count
        #[test]
        fn prop_totals_are_count_scaled(
            count in 1i64..=50,
            quantity in 1i64..=200,
            weight in 1i64..=100_000,
            minutes in 1i64..=6_000
        ) {
            let weight = Decimal::new(weight, 3);
            let minutes = Decimal::new(minutes, 2);
            let sheet = recalculate_totals(&ProgramSheet {
                quantity_processed: quantity.to_string(),
                weight_used: weight.to_string(),
                minutes_per_sheet: minutes.to_string(),
                sheet_count: count.to_string(),
                ..ProgramSheet::default()
            });

            prop_assert_eq!(
                dec(&sheet.total_quantity),
                Decimal::from(count) * Decimal::from(quantity)
            );
            prop_assert_eq!(dec(&sheet.total_weight), Decimal::from(count) * weight);
            prop_assert_eq!(dec(&sheet.total_minutes), Decimal::from(count) * minutes);
            // Inputs that were never entered stay empty
            prop_assert_eq!(sheet.total_cut_length.as_str(), "");
            prop_assert_eq!(sheet.total_pierce_count.as_str(), "");
        }
    }
}

// ============================================================================
// QA Wizard
// ============================================================================

mod qa {
    use super::*;

    fn filled_wizard() -> Wizard<QaForm> {
        let mut wizard = Wizard::<QaForm>::new();
        let form = wizard.form_mut();
        form.program_number = "2511AD-008".to_string();
        form.toggle_machine(Uuid::new_v4());
        form.set_parameter("Burr", true);
        form.set_parameter("Dimensions", true);
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        for process in ProcessKind::ALL {
            form.set_process_date(process, date);
            form.set_cycle_time(process, "45");
        }
        wizard
    }

    #[test]
    fn test_first_step_requires_allotment_and_checklist() {
        let mut wizard = Wizard::<QaForm>::new();
        wizard.form_mut().program_number = "2511AD-008".to_string();

        assert_eq!(wizard.next(), StepOutcome::Rejected);
        assert!(wizard.errors().get("machine_ids").is_some());
        assert!(wizard.errors().get("parameters").is_some());
    }

    #[test]
    fn test_unselecting_the_only_machine_blocks_again() {
        let mut wizard = filled_wizard();
        let machine = wizard.form().machine_ids[0];
        wizard.form_mut().toggle_machine(machine);

        assert_eq!(wizard.next(), StepOutcome::Rejected);
        assert!(wizard.errors().get("machine_ids").is_some());
    }

    #[test]
    fn test_cycle_time_range_is_inclusive() {
        let mut wizard = filled_wizard();
        wizard.next();

        wizard.form_mut().set_cycle_time(ProcessKind::Laser, "600");
        assert_eq!(wizard.next(), StepOutcome::Advanced(2));

        wizard.form_mut().set_cycle_time(ProcessKind::Laser, "601");
        assert_eq!(wizard.next(), StepOutcome::Rejected);
        assert!(wizard.errors().get("processes.LASER.cycle_time").is_some());

        wizard.form_mut().set_cycle_time(ProcessKind::Laser, "0");
        assert_eq!(wizard.next(), StepOutcome::Rejected);
    }

    #[test]
    fn test_every_process_row_needs_a_date() {
        let mut wizard = Wizard::<QaForm>::new();
        let form = wizard.form_mut();
        form.program_number = "2511AD-008".to_string();
        form.toggle_machine(Uuid::new_v4());
        form.set_parameter("Burr", true);
        for process in ProcessKind::ALL {
            form.set_cycle_time(process, "30");
        }
        wizard.next();

        assert_eq!(wizard.next(), StepOutcome::Rejected);
        assert!(wizard.errors().get("processes.LASER.date").is_some());
        assert!(wizard.errors().get("processes.FOLDING.date").is_some());
        assert!(wizard.errors().get("processes.FORMING.date").is_some());
    }

    #[test]
    fn test_payload_carries_only_checked_parameters() {
        let mut wizard = filled_wizard();
        wizard.next();
        wizard.next();

        let payload = wizard.begin_submit().unwrap();
        assert_eq!(payload.parameters, vec!["Dimensions", "Burr"]);
        assert_eq!(payload.processes.len(), 3);
        assert_eq!(payload.processes[0].process, ProcessKind::Laser);
        assert_eq!(payload.processes[0].cycle_time_minutes, 45);
        assert_eq!(payload.machine_ids.len(), 1);
    }
}
