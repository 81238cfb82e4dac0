//! Integration tests for batch command generation.

use idf_commands::{Batch, CommandTemplates, CommandsError, generate};
use idf_model::{ExitStatus, Identity};

const REGISTRY: &str = "ldap://zowe.org";

fn identity(mainframe_id: &str, distributed_id: &str, user_name: &str) -> Identity {
    Identity::new(mainframe_id, distributed_id, user_name)
}

fn racf_batch(identities: &[Identity]) -> Result<Batch, CommandsError> {
    generate(identities, REGISTRY, &CommandTemplates::racf())
}

#[test]
fn renders_one_command_per_valid_record_plus_refresh() {
    let identities = [
        identity("USER1", "uid=user1,ou=people", "User One"),
        identity("USER2", "uid=user2,ou=people", "User Two"),
    ];

    let batch = racf_batch(&identities).unwrap();

    assert_eq!(batch.status, ExitStatus::Normal);
    assert!(batch.rejections.is_empty());
    assert_eq!(batch.commands.len(), 3);
    insta::assert_snapshot!(
        batch.commands[0],
        @"RACMAP ID(USER1) MAP USERDIDFILTER(NAME('uid=user1,ou=people')) REGISTRY(NAME('ldap://zowe.org')) WITHLABEL('User One')"
    );
    insta::assert_snapshot!(
        batch.commands[1],
        @"RACMAP ID(USER2) MAP USERDIDFILTER(NAME('uid=user2,ou=people')) REGISTRY(NAME('ldap://zowe.org')) WITHLABEL('User Two')"
    );
    insta::assert_snapshot!(batch.commands[2], @"SETROPTS RACLIST(IDIDMAP) REFRESH");
}

#[test]
fn escapes_quotes_in_quoted_positions() {
    let identities = [identity("USER1", "cn=O'Brien,ou=people", "O'Brien")];

    let batch = racf_batch(&identities).unwrap();

    insta::assert_snapshot!(
        batch.commands[0],
        @"RACMAP ID(USER1) MAP USERDIDFILTER(NAME('cn=O''Brien,ou=people')) REGISTRY(NAME('ldap://zowe.org')) WITHLABEL('O''Brien')"
    );
}

#[test]
fn skips_invalid_record_and_preserves_order() {
    // B is invalid; A and C must come out in input order, refresh last.
    let identities = [
        identity("USERA", "uid=a,ou=people", "User A"),
        identity("MAINFRAMEIDTOOLONG", "uid=b,ou=people", "User B"),
        identity("USERC", "uid=c,ou=people", "User C"),
    ];

    let batch = racf_batch(&identities).unwrap();

    assert_eq!(batch.status, ExitStatus::Warning);
    assert_eq!(batch.commands.len(), 3);
    assert!(batch.commands[0].contains("ID(USERA)"));
    assert!(batch.commands[1].contains("ID(USERC)"));
    assert_eq!(batch.commands[2], "SETROPTS RACLIST(IDIDMAP) REFRESH");
    assert_eq!(batch.rejections.len(), 1);
    assert_eq!(batch.rejections[0].user_name, "User B");
}

#[test]
fn validates_raw_length_but_renders_trimmed() {
    // 7 characters with padding: passes the raw-length check, renders
    // trimmed.
    let identities = [identity(" USER1 ", " uid=user1,ou=people ", " User One ")];

    let batch = racf_batch(&identities).unwrap();

    assert_eq!(batch.status, ExitStatus::Normal);
    insta::assert_snapshot!(
        batch.commands[0],
        @"RACMAP ID(USER1) MAP USERDIDFILTER(NAME('uid=user1,ou=people')) REGISTRY(NAME('ldap://zowe.org')) WITHLABEL('User One')"
    );
}

#[test]
fn padded_mainframe_id_over_limit_is_rejected() {
    // "  USER1  " is 9 characters raw; the trimmed value would fit but the
    // check runs before trimming.
    let identities = [
        identity("  USER1  ", "uid=user1,ou=people", "User One"),
        identity("USER2", "uid=user2,ou=people", "User Two"),
    ];

    let batch = racf_batch(&identities).unwrap();

    assert_eq!(batch.status, ExitStatus::Warning);
    assert_eq!(batch.rejections.len(), 1);
    assert_eq!(batch.rejections[0].value, "  USER1  ");
}

#[test]
fn registry_is_substituted_untrimmed() {
    let identities = [identity("USER1", "uid=user1,ou=people", "User One")];

    let batch = generate(&identities, " ldap://zowe.org ", &CommandTemplates::racf()).unwrap();

    assert!(
        batch.commands[0].contains("REGISTRY(NAME(' ldap://zowe.org '))"),
        "registry must pass through as given: {}",
        batch.commands[0]
    );
}

#[test]
fn all_invalid_batch_returns_no_commands() {
    let identities = [
        identity("USER1", &"d".repeat(300), "User One"),
        identity("USER2", "uid=user2,ou=people", &"n".repeat(40)),
    ];

    let result = racf_batch(&identities);

    assert!(matches!(result, Err(CommandsError::EmptyBatch)));
}

#[test]
fn fatal_message_differs_from_warning_text() {
    let error = racf_batch(&[]).unwrap_err();
    let message = error.to_string();
    assert_eq!(message, "error when trying to create the identity mapping");
    assert!(!message.contains("has exceeded maximum length"));
}
