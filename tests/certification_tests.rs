use pretty_assertions::assert_eq;
use protectron::*;

fn grade(inputs: CertificationInputs) -> CertificationGrade {
    CertificationGrader::default().grade(&inputs)
}

#[test]
fn test_sdk_gate_holds_even_at_perfect_score() {
    for (total, completed) in [(10, 10), (20, 20), (1, 1)] {
        let result = grade(CertificationInputs {
            total_requirements: total,
            completed_requirements: completed,
            sdk_connected: false,
            hitl_rules_active: 5,
            open_incidents: 0,
            recent_events: 100,
        });
        assert_eq!(result.certification_level, CertificationLevel::None);
        assert_eq!(
            result.certification_status,
            CertificationStatus::NotCertified
        );
    }
}

#[test]
fn test_zero_requirements_with_no_signals() {
    let result = grade(CertificationInputs {
        total_requirements: 0,
        completed_requirements: 0,
        sdk_connected: true,
        hitl_rules_active: 0,
        open_incidents: 0,
        recent_events: 0,
    });
    assert_eq!(result.base_score, 0.0);
    assert_eq!(result.bonus_points, 5);
    assert_eq!(result.final_score, 5.0);
    assert_eq!(result.certification_level, CertificationLevel::None);
}

#[test]
fn test_bonuses_alone_can_never_certify() {
    // Max bonus is 15 and bronze requires 70; zero completion is always "none".
    let result = grade(CertificationInputs {
        total_requirements: 0,
        completed_requirements: 0,
        sdk_connected: true,
        hitl_rules_active: 9,
        open_incidents: 0,
        recent_events: 9,
    });
    assert_eq!(result.bonus_points, 15);
    assert_eq!(result.certification_level, CertificationLevel::None);
}

#[test]
fn test_tier_boundaries() {
    let cases = [
        (100, CertificationLevel::Gold),   // 100 + 0
        (95, CertificationLevel::Gold),    // exactly the gold floor
        (94, CertificationLevel::Silver),  // one below gold
        (85, CertificationLevel::Silver),  // exactly the silver floor
        (84, CertificationLevel::Bronze),  // one below silver
        (70, CertificationLevel::Bronze),  // exactly the bronze floor
        (69, CertificationLevel::None),    // one below bronze
        (0, CertificationLevel::None),
    ];
    for (completed, expected) in cases {
        let result = grade(CertificationInputs {
            total_requirements: 100,
            completed_requirements: completed,
            sdk_connected: true,
            hitl_rules_active: 0,
            open_incidents: 7, // withholds the incident bonus
            recent_events: 0,
        });
        assert_eq!(
            result.certification_level, expected,
            "completed={completed} should be {expected:?}"
        );
    }
}

#[test]
fn test_final_score_caps_at_100() {
    let result = grade(CertificationInputs {
        total_requirements: 4,
        completed_requirements: 4,
        sdk_connected: true,
        hitl_rules_active: 1,
        open_incidents: 0,
        recent_events: 1,
    });
    assert_eq!(result.bonus_points, 15);
    assert_eq!(result.final_score, 100.0);
    assert_eq!(result.certification_status, CertificationStatus::Certified);
}

#[test]
fn test_verification_variant_has_no_none_tier() {
    assert_eq!(verified_tier(96.0), CertificationLevel::Gold);
    assert_eq!(verified_tier(90.0), CertificationLevel::Silver);
    assert_eq!(verified_tier(50.0), CertificationLevel::Bronze);
    assert_eq!(verified_tier(0.0), CertificationLevel::Bronze);
}

#[test]
fn test_verification_variant_ignores_sdk_gate_semantics() {
    // The gated grader says "none" for this system; the public verification
    // of an already-issued certificate at the same score says "gold".
    let gated = grade(CertificationInputs {
        total_requirements: 10,
        completed_requirements: 10,
        sdk_connected: false,
        hitl_rules_active: 1,
        open_incidents: 0,
        recent_events: 1,
    });
    assert_eq!(gated.certification_level, CertificationLevel::None);
    assert_eq!(verified_tier(gated.final_score), CertificationLevel::Gold);
}
