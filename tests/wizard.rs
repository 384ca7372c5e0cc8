//! Wizard state-machine behavior: transitions, gating, and submission.
mod common;
use common::*;
use junbi::error::{SubmissionError, WizardError};
use junbi::prelude::*;

#[test]
fn next_never_advances_while_the_step_has_errors() {
    let mut wizard = Wizard::open(blank_template());

    let err = wizard.next().expect_err("blank targeting must not advance");
    assert_eq!(wizard.current_step(), WizardStep::Targeting);
    match err {
        WizardError::StepBlocked { step, errors } => {
            assert_eq!(step, WizardStep::Targeting);
            assert!(errors.contains_key("targetingSettings.industries"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // The errors are also recorded on the wizard itself.
    assert!(
        wizard
            .field_errors()
            .contains_key("targetingSettings.keywords")
    );
}

#[test]
fn next_advances_through_all_steps_and_clamps_at_review() {
    let mut wizard = Wizard::open(blank_template());
    fill_valid(&mut wizard);

    assert_eq!(wizard.next().unwrap(), WizardStep::Messaging);
    assert_eq!(wizard.next().unwrap(), WizardStep::Execution);
    assert_eq!(wizard.next().unwrap(), WizardStep::Review);
    // Review clamps.
    assert_eq!(wizard.next().unwrap(), WizardStep::Review);
}

#[test]
fn previous_always_succeeds_and_never_validates() {
    let mut wizard = Wizard::open(blank_template());
    fill_valid(&mut wizard);
    wizard.next().unwrap();
    wizard.next().unwrap();

    // Break an earlier step; going back must still work.
    wizard
        .apply(FieldPatch::Keywords(String::new()))
        .unwrap();

    assert_eq!(wizard.previous().unwrap(), WizardStep::Messaging);
    assert_eq!(wizard.previous().unwrap(), WizardStep::Targeting);
    // Clamped at the first step.
    assert_eq!(wizard.previous().unwrap(), WizardStep::Targeting);
    assert!(wizard.field_errors().is_empty());
}

#[test]
fn applying_a_patch_clears_that_fields_error() {
    let mut wizard = Wizard::open(blank_template());
    wizard.next().expect_err("blank targeting must not advance");
    assert!(
        wizard
            .field_errors()
            .contains_key("targetingSettings.keywords")
    );

    wizard
        .apply(FieldPatch::Keywords("b2b".to_string()))
        .unwrap();
    assert!(
        !wizard
            .field_errors()
            .contains_key("targetingSettings.keywords")
    );
    // Unrelated errors stay recorded.
    assert!(
        wizard
            .field_errors()
            .contains_key("targetingSettings.industries")
    );
}

#[test]
fn section_writes_are_order_independent() {
    let mut forward = Wizard::open(blank_template());
    fill_valid(&mut forward);

    let mut reordered = Wizard::open(blank_template());
    let config = valid_config();
    reordered
        .apply(FieldPatch::RunsPerDay(config.execution.runs_per_day.unwrap()))
        .unwrap();
    reordered
        .apply(FieldPatch::CompanyDescription(
            config.messaging.company_description.clone(),
        ))
        .unwrap();
    fill_valid(&mut reordered);

    assert_eq!(forward.config(), reordered.config());
    assert_eq!(forward.config(), &config);
}

#[test]
fn submit_is_rejected_before_the_review_step() {
    let mut wizard = Wizard::open(blank_template());
    fill_valid(&mut wizard);

    let mut ledger = ledger_with(0);
    let launcher = MockLauncher::succeeding();
    let err = tokio_test::block_on(wizard.submit(Plan::Base, &mut ledger, &launcher))
        .expect_err("submission away from review must fail");

    assert!(matches!(err, WizardError::NotOnReviewStep(WizardStep::Targeting)));
    assert_eq!(launcher.call_count(), 0);
}

#[test]
fn submit_aggregates_errors_from_all_editing_steps() {
    let mut wizard = Wizard::open(seeded_template());
    wizard.next().unwrap();
    wizard.next().unwrap();
    wizard.next().unwrap();

    // Invalidate two different sections after reaching review.
    wizard.apply(FieldPatch::Keywords(String::new())).unwrap();
    wizard
        .apply(FieldPatch::CompanyDescription("too short".to_string()))
        .unwrap();

    let mut ledger = ledger_with(0);
    let launcher = MockLauncher::succeeding();
    let err = tokio_test::block_on(wizard.submit(Plan::Base, &mut ledger, &launcher))
        .expect_err("invalid config must not submit");

    match err {
        WizardError::ValidationFailed { errors, summary } => {
            assert!(errors.contains_key("targetingSettings.keywords"));
            assert!(errors.contains_key("messagingSettings.companyDescription"));
            assert!(summary.contains("targetingSettings.keywords"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(wizard.current_step(), WizardStep::Review);
    assert_eq!(launcher.call_count(), 0);
}

#[test]
fn trial_user_at_the_cap_is_refused_without_a_remote_call() {
    let mut wizard = Wizard::open(blank_template());
    walk_to_review(&mut wizard);

    let mut ledger = ledger_with(3);
    let launcher = MockLauncher::succeeding();
    let err = tokio_test::block_on(wizard.submit(Plan::Trial, &mut ledger, &launcher))
        .expect_err("capped trial must not submit");

    assert!(matches!(
        err,
        WizardError::Submission(SubmissionError::TrialLimitReached)
    ));
    assert_eq!(launcher.call_count(), 0);
    assert_eq!(ledger.count().unwrap(), 3);
    // State preserved for the upgrade path.
    assert_eq!(wizard.current_step(), WizardStep::Review);
    assert_eq!(wizard.phase(), WizardPhase::Editing);
}

#[test]
fn trial_user_below_the_cap_submits_and_is_charged_once() {
    let mut wizard = Wizard::open(blank_template());
    walk_to_review(&mut wizard);

    let mut ledger = ledger_with(2);
    let launcher = MockLauncher::succeeding();
    let handle = tokio_test::block_on(wizard.submit(Plan::Trial, &mut ledger, &launcher))
        .expect("trial below cap must submit");

    assert_eq!(launcher.call_count(), 1);
    assert_eq!(ledger.count().unwrap(), 3);
    assert!(handle.name.starts_with("Founder Outreach - "));
    assert_eq!(wizard.phase(), WizardPhase::Submitted);
}

#[test]
fn remote_failure_preserves_state_and_the_counter() {
    let mut wizard = Wizard::open(blank_template());
    walk_to_review(&mut wizard);
    let config_before = wizard.config().clone();

    let mut ledger = ledger_with(1);
    let launcher = MockLauncher::failing("service unavailable");
    let err = tokio_test::block_on(wizard.submit(Plan::Base, &mut ledger, &launcher))
        .expect_err("remote failure must surface");

    match err {
        WizardError::Submission(SubmissionError::Remote { message }) => {
            assert!(message.contains("service unavailable"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(wizard.current_step(), WizardStep::Review);
    assert_eq!(wizard.phase(), WizardPhase::Editing);
    assert_eq!(wizard.config(), &config_before);
    assert_eq!(ledger.count().unwrap(), 1);
}

#[test]
fn counter_moves_if_and_only_if_the_remote_call_succeeds() {
    for (outcome, expected_delta) in [
        (ScriptedOutcome::Succeed, 1),
        (ScriptedOutcome::FailService("boom".to_string()), 0),
        (ScriptedOutcome::FailTimeout, 0),
    ] {
        let mut wizard = Wizard::open(blank_template());
        walk_to_review(&mut wizard);

        let mut ledger = ledger_with(1);
        let launcher = MockLauncher::with_outcome(outcome);
        let _ = tokio_test::block_on(wizard.submit(Plan::Trial, &mut ledger, &launcher));

        assert_eq!(ledger.count().unwrap(), 1 + expected_delta);
    }
}

#[test]
fn a_submitted_wizard_rejects_every_further_operation() {
    let mut wizard = Wizard::open(blank_template());
    walk_to_review(&mut wizard);

    let mut ledger = ledger_with(0);
    let launcher = MockLauncher::succeeding();
    tokio_test::block_on(wizard.submit(Plan::Base, &mut ledger, &launcher)).unwrap();

    assert!(matches!(
        wizard.apply(FieldPatch::Keywords("late".to_string())),
        Err(WizardError::AlreadySubmitted)
    ));
    assert!(matches!(wizard.next(), Err(WizardError::AlreadySubmitted)));
    assert!(matches!(
        wizard.previous(),
        Err(WizardError::AlreadySubmitted)
    ));
    let second =
        tokio_test::block_on(wizard.submit(Plan::Base, &mut ledger, &launcher));
    assert!(matches!(second, Err(WizardError::AlreadySubmitted)));
    assert_eq!(launcher.call_count(), 1);
}

#[test]
fn step_indicator_reflects_progress_and_exposes_no_navigation() {
    let mut wizard = Wizard::open(blank_template());
    fill_valid(&mut wizard);
    wizard.next().unwrap();

    let indicator = wizard.step_indicator();
    assert_eq!(indicator.len(), 4);
    assert!(indicator[0].completed);
    assert!(indicator[1].current);
    assert!(!indicator[2].completed && !indicator[2].current);
    assert_eq!(indicator[3].index, 4);
}

#[test]
fn seeded_templates_prepopulate_the_config() {
    let wizard = Wizard::open(seeded_template());
    assert_eq!(wizard.config(), &valid_config());
    assert!(wizard.touched_sections().is_empty());
}
