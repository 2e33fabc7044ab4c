use voiceguard::application::ports::ClassifierError;
use voiceguard::domain::Classification;
use voiceguard::infrastructure::llm::parse_verdict;

#[test]
fn given_bare_json_when_parse_then_verdict() {
    let reply = r#"{"classification": "AI_GENERATED", "confidence_score": 0.91, "explanation": "Robotic cadence"}"#;

    let analysis = parse_verdict(reply).unwrap();

    assert_eq!(analysis.classification, Classification::AiGenerated);
    assert_eq!(analysis.confidence, 0.91);
    assert_eq!(analysis.explanation, "Robotic cadence");
}

#[test]
fn given_fenced_json_when_parse_then_verdict() {
    let reply = "Here is my analysis:\n```json\n{\"classification\": \"HUMAN\", \"confidence_score\": 0.66, \"explanation\": \"Audible breathing\"}\n```\nLet me know if you need more.";

    let analysis = parse_verdict(reply).unwrap();

    assert_eq!(analysis.classification, Classification::Human);
    assert_eq!(analysis.confidence, 0.66);
}

#[test]
fn given_json_embedded_in_prose_when_parse_then_verdict() {
    let reply = r#"Based on the sample, {"classification": "HUMAN", "confidence_score": 0.8, "explanation": "Natural pauses"} is my conclusion."#;

    let analysis = parse_verdict(reply).unwrap();

    assert_eq!(analysis.classification, Classification::Human);
}

#[test]
fn given_missing_explanation_when_parse_then_empty_string() {
    let reply = r#"{"classification": "HUMAN", "confidence_score": 0.5}"#;

    let analysis = parse_verdict(reply).unwrap();

    assert_eq!(analysis.explanation, "");
}

#[test]
fn given_no_json_when_parse_then_invalid_response() {
    let error = parse_verdict("The voice sounds human to me.").unwrap_err();

    assert!(matches!(error, ClassifierError::InvalidResponse(_)));
}

#[test]
fn given_malformed_json_when_parse_then_invalid_response() {
    let error = parse_verdict(r#"{"classification": "HUMAN", "confidence_score":}"#).unwrap_err();

    assert!(matches!(error, ClassifierError::InvalidResponse(_)));
}

#[test]
fn given_unknown_label_when_parse_then_invalid_response() {
    let reply = r#"{"classification": "SYNTHETIC", "confidence_score": 0.9, "explanation": "x"}"#;

    let error = parse_verdict(reply).unwrap_err();

    assert!(matches!(error, ClassifierError::InvalidResponse(_)));
    assert!(error.to_string().contains("SYNTHETIC"));
}

#[test]
fn given_confidence_above_one_when_parse_then_invalid_response() {
    let reply = r#"{"classification": "HUMAN", "confidence_score": 1.5, "explanation": "x"}"#;

    let error = parse_verdict(reply).unwrap_err();

    assert!(matches!(error, ClassifierError::InvalidResponse(_)));
}

#[test]
fn given_negative_confidence_when_parse_then_invalid_response() {
    let reply = r#"{"classification": "AI_GENERATED", "confidence_score": -0.2, "explanation": "x"}"#;

    let error = parse_verdict(reply).unwrap_err();

    assert!(matches!(error, ClassifierError::InvalidResponse(_)));
}

#[test]
fn given_boundary_confidences_when_parse_then_accepted() {
    let zero = parse_verdict(r#"{"classification": "HUMAN", "confidence_score": 0.0}"#).unwrap();
    let one = parse_verdict(r#"{"classification": "HUMAN", "confidence_score": 1.0}"#).unwrap();

    assert_eq!(zero.confidence, 0.0);
    assert_eq!(one.confidence, 1.0);
}
