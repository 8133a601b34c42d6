use facequest_core::consts::DEFAULT_PASS_THRESHOLD;
use facequest_core::course::config::{CourseConfig, StepConfig};
use facequest_core::error::FacequestError;

#[test]
fn test_builtin_course_parses() {
    let course = CourseConfig::builtin();
    assert_eq!(course.title, "Facial Recognition Basics");
    assert_eq!(course.steps.len(), 5);

    let kinds: Vec<&str> = course.steps.iter().map(|s| s.kind_name()).collect();
    assert_eq!(
        kinds,
        vec![
            "reading",
            "pattern choice",
            "feature match",
            "feature match",
            "quiz"
        ]
    );
}

#[test]
fn test_builtin_course_is_valid() {
    let course = CourseConfig::builtin();
    let warnings = course.validate().unwrap();
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}

#[test]
fn test_builtin_nose_exercise_keeps_authored_bounds() {
    let course = CourseConfig::builtin();
    let StepConfig::FeatureMatch(nose) = &course.steps[3] else {
        panic!("step 4 should be the nose exercise");
    };
    // Authored asymmetric bounds, not centered on the target.
    assert!(nose.bounds.min_x > 0.0);
    assert!(nose.bounds.max_y < 1.0);
    assert!((nose.target.x - 0.5319149).abs() < 1e-6);
    assert_eq!(nose.threshold, DEFAULT_PASS_THRESHOLD);
}

#[test]
fn test_feature_match_defaults() {
    let toml = r#"
        title = "Mini"

        [[steps]]
        kind = "feature_match"
        title = "Find it"
        prompt = "Drag the filter"
        target = { x = 0.5, y = 0.5 }
        hints = { unmatched = "no", matched = "yes" }
    "#;
    let course = CourseConfig::from_toml_str(toml).unwrap();
    let StepConfig::FeatureMatch(fm) = &course.steps[0] else {
        panic!("expected a feature match step");
    };
    assert_eq!(fm.threshold, DEFAULT_PASS_THRESHOLD);
    assert_eq!(fm.bounds.min_x, 0.0);
    assert_eq!(fm.bounds.max_x, 1.0);
    assert!(fm.image.is_none());
}

#[test]
fn test_empty_course_rejected() {
    let course = CourseConfig::from_toml_str("title = \"Empty\"\nsteps = []").unwrap();
    assert!(matches!(
        course.validate(),
        Err(FacequestError::InvalidCourse(_))
    ));
}

#[test]
fn test_quiz_correct_index_out_of_range() {
    let toml = r#"
        title = "Broken"

        [[steps]]
        kind = "quiz"
        title = "Q"
        question = "Pick one"
        options = ["a", "b"]
        correct = 2
    "#;
    let course = CourseConfig::from_toml_str(toml).unwrap();
    assert!(matches!(
        course.validate(),
        Err(FacequestError::InvalidCourse(_))
    ));
}

#[test]
fn test_unreachable_target_warns() {
    let toml = r#"
        title = "Tuned"

        [[steps]]
        kind = "feature_match"
        title = "Find it"
        prompt = "Drag the filter"
        target = { x = 0.9, y = 0.9 }
        bounds = { min_x = 0.0, max_x = 0.5, min_y = 0.0, max_y = 0.5 }
        hints = { unmatched = "no", matched = "yes" }
    "#;
    let course = CourseConfig::from_toml_str(toml).unwrap();
    let warnings = course.validate().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].step, 0);
    assert!(warnings[0].message.contains("outside the drag bounds"));
}

#[test]
fn test_inverted_bounds_rejected() {
    let toml = r#"
        title = "Broken"

        [[steps]]
        kind = "feature_match"
        title = "Find it"
        prompt = "Drag the filter"
        target = { x = 0.5, y = 0.5 }
        bounds = { min_x = 0.8, max_x = 0.2, min_y = 0.0, max_y = 1.0 }
        hints = { unmatched = "no", matched = "yes" }
    "#;
    let course = CourseConfig::from_toml_str(toml).unwrap();
    assert!(course.validate().is_err());
}

#[test]
fn test_step_index_out_of_range() {
    let course = CourseConfig::builtin();
    assert!(matches!(
        course.step(99),
        Err(FacequestError::StepIndexOutOfRange { index: 99, total: 5 })
    ));
}

#[test]
fn test_builtin_session_end_to_end() {
    use facequest_core::geometry::{Point, ViewportRect};

    let course = CourseConfig::builtin();
    let StepConfig::FeatureMatch(eyes) = &course.steps[2] else {
        panic!("step 3 should be the eye exercise");
    };

    let mut session = eyes.session();
    session.set_viewport(ViewportRect::new(0.0, 0.0, 320.0, 160.0));
    // Eye target resolves to (200, 50) at this size.
    let v = session.release(Point::new(200.0, 50.0));
    assert!(v.matched);
    assert_eq!(session.hint(), eyes.hints.matched);
}
