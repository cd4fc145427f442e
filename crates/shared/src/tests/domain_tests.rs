use super::*;

fn valid_draft() -> Draft {
    Draft {
        recipient: "a@b.com".to_string(),
        subject: "Hi".to_string(),
        message: "Hello".to_string(),
        enhance_content: true,
    }
}

#[test]
fn apply_updates_only_the_named_field() {
    let mut draft = valid_draft();
    draft.apply(FieldUpdate::Subject("Other".to_string()));

    assert_eq!(draft.subject, "Other");
    assert_eq!(draft.recipient, "a@b.com");
    assert_eq!(draft.message, "Hello");
    assert!(draft.enhance_content);
}

#[test]
fn last_write_wins_per_field() {
    let mut draft = Draft::default();
    draft.apply(FieldUpdate::Recipient("first@x.io".to_string()));
    draft.apply(FieldUpdate::EnhanceContent(true));
    draft.apply(FieldUpdate::Recipient("second@x.io".to_string()));
    draft.apply(FieldUpdate::EnhanceContent(false));

    assert_eq!(draft.recipient, "second@x.io");
    assert!(!draft.enhance_content);
    assert!(draft.subject.is_empty());
}

#[test]
fn default_draft_is_empty() {
    assert!(Draft::default().is_empty());
    assert!(!valid_draft().is_empty());
}

#[test]
fn validate_accepts_complete_draft() {
    assert_eq!(valid_draft().validate(), Ok(()));
}

#[test]
fn validate_reports_missing_fields_in_form_order() {
    assert_eq!(
        Draft::default().validate(),
        Err(DraftValidationError::MissingRecipient)
    );

    let mut draft = valid_draft();
    draft.subject = "   ".to_string();
    draft.message.clear();
    assert_eq!(draft.validate(), Err(DraftValidationError::MissingSubject));

    draft.subject = "Hi".to_string();
    assert_eq!(draft.validate(), Err(DraftValidationError::MissingMessage));
}

#[test]
fn validate_rejects_malformed_recipient() {
    let mut draft = valid_draft();
    draft.recipient = "not-an-address".to_string();
    assert_eq!(
        draft.validate(),
        Err(DraftValidationError::InvalidRecipient(
            "not-an-address".to_string()
        ))
    );
}

#[test]
fn email_shape_rules() {
    assert!(is_email_shaped("a@b.com"));
    assert!(is_email_shaped("first.last+tag@mail.example.org"));
    assert!(is_email_shaped("root@localhost"));

    assert!(!is_email_shaped("@b.com"));
    assert!(!is_email_shaped("a@"));
    assert!(!is_email_shaped("a@@b.com"));
    assert!(!is_email_shaped("a@b@c.com"));
    assert!(!is_email_shaped("a b@c.com"));
    assert!(!is_email_shaped("a@b..com"));
    assert!(!is_email_shaped("a@.com"));
}

#[test]
fn to_request_snapshots_every_field() {
    let request = valid_draft().to_request();
    assert_eq!(request.recipient, "a@b.com");
    assert_eq!(request.subject, "Hi");
    assert_eq!(request.message, "Hello");
    assert!(request.enhance_content);
}
