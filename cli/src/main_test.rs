use super::*;

#[test]
fn require_uid_trims_and_rejects_blank() {
    assert_eq!(require_uid(Some(" uid-1 ".to_owned())).unwrap(), "uid-1");
    assert!(matches!(require_uid(Some("   ".to_owned())), Err(CliError::MissingUid)));
    assert!(matches!(require_uid(None), Err(CliError::MissingUid)));
}

#[test]
fn parses_set_admin_with_key_file() {
    let cli = Cli::try_parse_from([
        "partyn-admin",
        "--service-account-file",
        "/etc/partyn/sa.json",
        "set-admin",
        "uid-1",
    ])
    .unwrap();
    assert_eq!(cli.service_account_file, Some(PathBuf::from("/etc/partyn/sa.json")));
    assert!(matches!(cli.command, Command::SetAdmin { uid: Some(ref uid) } if uid == "uid-1"));
}

#[test]
fn parses_show_claims_with_custom_identity_url() {
    let cli = Cli::try_parse_from(["partyn-admin", "--identity-url", "http://127.0.0.1:9099/v1", "show-claims", "uid-2"])
        .unwrap();
    assert_eq!(cli.identity_url, "http://127.0.0.1:9099/v1");
    assert!(matches!(cli.command, Command::ShowClaims { uid: Some(ref uid) } if uid == "uid-2"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["partyn-admin", "drop-users"]).is_err());
}

#[test]
fn missing_credentials_message_names_both_variables() {
    let message = CliError::MissingCredentials.to_string();
    assert!(message.contains("PARTYN_SERVICE_ACCOUNT_KEY"));
    assert!(message.contains("PARTYN_SERVICE_ACCOUNT_FILE"));
}
