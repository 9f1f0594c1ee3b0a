//! tests/vault_tests.rs
//! End-to-end: vault directory on disk -> locked profile -> unlock -> items.

mod common;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::{build_fixture, write_vault, TEST_PASSWORD, TEST_PROFILE, WRONG_PASSWORD};
use opvault_rs::{ErrorKind, OpvaultError, ProfileStatus, SecretBuffer, Vault};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn fixture_vault() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_vault(&build_fixture(TEST_PASSWORD), dir.path());
    dir
}

#[test]
fn open_unlock_and_read_everything() {
    let dir = fixture_vault();
    let vault = Vault::open(dir.path()).unwrap();
    let profile = vault.profile(TEST_PROFILE).unwrap();

    assert_eq!(profile.name(), TEST_PROFILE);
    assert_eq!(profile.status(), ProfileStatus::Locked);
    assert_eq!(profile.data().password_hint.as_deref(), Some("the dog"));
    assert_eq!(profile.sealed_items().len(), 3);
    assert_eq!(profile.sealed_folders().len(), 1);

    profile.unlock(TEST_PASSWORD).unwrap();

    let items = profile.items().unwrap();
    assert!(items.iter().all(|i| i.is_complete()));

    let mut titles: Vec<String> = items
        .iter()
        .filter_map(|i| i.overview.as_ref().ok()?.title.clone())
        .collect();
    titles.sort();
    assert_eq!(titles, ["Bank", "Meeting", "Wi-Fi"]);

    let login = items
        .iter()
        .find(|i| i.item.uuid == common::LOGIN_UUID)
        .unwrap();
    assert_eq!(login.detail.as_ref().unwrap().password(), Some("s3cret!"));

    let folders = profile.folders().unwrap();
    assert_eq!(
        folders[0].overview.as_ref().unwrap().title.as_deref(),
        Some("Work")
    );
}

#[test]
fn default_profile_is_found() {
    let dir = fixture_vault();
    let profile = Vault::open(dir.path()).unwrap().default_profile().unwrap();
    assert_eq!(profile.name(), "default");
}

#[test]
fn wrong_password_from_disk() {
    let dir = fixture_vault();
    let profile = Vault::open(dir.path()).unwrap().default_profile().unwrap();

    let err = profile.unlock(WRONG_PASSWORD).unwrap_err();
    assert!(matches!(err, OpvaultError::InvalidPassword));
    assert_eq!(
        profile.status(),
        ProfileStatus::LockedWithError(ErrorKind::InvalidPassword)
    );
    assert!(matches!(profile.items(), Err(OpvaultError::NotUnlocked)));
}

#[test]
fn passwords_are_zeroed_end_to_end() {
    let dir = fixture_vault();
    let profile = Vault::open(dir.path()).unwrap().default_profile().unwrap();

    let mut good = SecretBuffer::from(TEST_PASSWORD);
    profile.unlock_secret(&mut good).unwrap();
    assert_eq!(good.len(), 6);
    assert!(good.is_all_zero());

    let mut bad = SecretBuffer::from(WRONG_PASSWORD);
    assert!(profile.unlock_secret(&mut bad).is_err());
    assert_eq!(bad.len(), 23);
    assert!(bad.is_all_zero());
}

#[cfg(feature = "test-hooks")]
#[test]
fn observer_sees_zeroed_buffers_end_to_end() {
    let dir = fixture_vault();
    let profile = Vault::open(dir.path()).unwrap().default_profile().unwrap();

    let mut seen = Vec::new();
    profile
        .unlock_observed(TEST_PASSWORD, |buf| seen.push((buf.len(), buf.is_all_zero())))
        .unwrap();
    let _ = profile.unlock_observed(WRONG_PASSWORD, |buf| seen.push((buf.len(), buf.is_all_zero())));
    assert_eq!(seen, vec![(6, true), (23, true)]);
}

#[test]
fn missing_or_unsafe_profile_names() {
    let dir = fixture_vault();
    let vault = Vault::open(dir.path()).unwrap();

    for name in ["nope", "", "..", "../default", "default/..", "a\\b"] {
        assert!(
            matches!(vault.profile(name), Err(OpvaultError::ProfileNotFound(_))),
            "{name:?} should not resolve to a profile"
        );
    }
}

#[test]
fn profile_dir_without_profile_js_is_not_found() {
    let dir = fixture_vault();
    fs::create_dir(dir.path().join("empty")).unwrap();
    let vault = Vault::open(dir.path()).unwrap();
    assert!(matches!(
        vault.profile("empty"),
        Err(OpvaultError::ProfileNotFound(_))
    ));
}

#[test]
fn missing_vault_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Vault::open(dir.path().join("does-not-exist")).unwrap_err();
    assert!(matches!(err, OpvaultError::Io(_)), "got {err:?}");
}

#[test]
fn vault_path_that_is_a_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("vault");
    fs::write(&file, b"not a directory").unwrap();
    assert!(matches!(
        Vault::open(&file),
        Err(OpvaultError::MalformedVault(_))
    ));
}

#[test]
fn bad_profile_wrapper_is_malformed() {
    let dir = fixture_vault();
    let profile_js = dir.path().join(TEST_PROFILE).join("profile.js");
    let text = fs::read_to_string(&profile_js).unwrap();
    fs::write(&profile_js, text.replacen("var profile=", "profile=", 1)).unwrap();

    let vault = Vault::open(dir.path()).unwrap();
    assert!(matches!(
        vault.profile(TEST_PROFILE),
        Err(OpvaultError::MalformedVault(_))
    ));
}

#[test]
fn bad_base64_in_profile_is_malformed() {
    let dir = fixture_vault();
    let profile_js = dir.path().join(TEST_PROFILE).join("profile.js");
    let text = fs::read_to_string(&profile_js).unwrap();
    let broken = text.replacen("\"salt\":\"", "\"salt\":\"!!", 1);
    assert_ne!(broken, text);
    fs::write(&profile_js, broken).unwrap();

    let vault = Vault::open(dir.path()).unwrap();
    assert!(matches!(
        vault.profile(TEST_PROFILE),
        Err(OpvaultError::MalformedVault(_))
    ));
}

#[test]
fn tombstone_item_fails_on_its_own() {
    let dir = fixture_vault();
    fs::write(
        dir.path().join(TEST_PROFILE).join("band_0.js"),
        r#"ld({"0000000000000000000000000000DEAD":{"uuid":"0000000000000000000000000000DEAD","category":"099","trashed":true}});"#,
    )
    .unwrap();

    let profile = Vault::open(dir.path()).unwrap().default_profile().unwrap();
    assert_eq!(profile.sealed_items().len(), 4);
    profile.unlock(TEST_PASSWORD).unwrap();

    let items = profile.items().unwrap();
    // band_0 sorts first
    let tombstone = &items[0];
    assert_eq!(tombstone.item.uuid, "0000000000000000000000000000DEAD");
    assert!(tombstone.item.trashed);
    assert!(matches!(tombstone.overview, Err(OpvaultError::Format(_))));
    assert!(matches!(tombstone.detail, Err(OpvaultError::MalformedVault(_))));

    assert_eq!(items.iter().filter(|i| i.is_complete()).count(), 3);
}

#[test]
fn undecodable_item_field_fails_only_that_item() {
    let dir = fixture_vault();
    let fixture = build_fixture(TEST_PASSWORD);
    let donor = &fixture.items[0];
    let entry = json!({
        "uuid": "0000000000000000000000000000BEEF",
        "category": "001",
        "k": "!!notb64",
        "o": STANDARD.encode(&donor.o),
        "d": STANDARD.encode(&donor.d),
    });
    fs::write(
        dir.path().join(TEST_PROFILE).join("band_0.js"),
        format!("ld({{\"0000000000000000000000000000BEEF\":{entry}}});"),
    )
    .unwrap();

    let profile = Vault::open(dir.path()).unwrap().default_profile().unwrap();
    assert_eq!(profile.sealed_items().len(), 4);
    profile.unlock(TEST_PASSWORD).unwrap();

    let items = profile.items().unwrap();
    let broken = &items[0];
    assert_eq!(broken.item.uuid, "0000000000000000000000000000BEEF");
    assert!(broken.item.k.is_empty());
    assert_eq!(broken.overview.as_ref().unwrap().title.as_deref(), Some("Bank"));
    assert!(matches!(broken.detail, Err(OpvaultError::MalformedVault(_))));
    assert_eq!(items.iter().filter(|i| i.is_complete()).count(), 3);
}

#[test]
fn unparsable_entries_are_skipped() {
    let dir = fixture_vault();
    let profile_dir = dir.path().join(TEST_PROFILE);
    // No category, and a uuid of the wrong type.
    fs::write(
        profile_dir.join("band_0.js"),
        r#"ld({"A":{"uuid":"0000000000000000000000000000000A"},"B":{"uuid":7,"category":"001"}});"#,
    )
    .unwrap();
    let folders = fs::read_to_string(profile_dir.join("folders.js")).unwrap();
    fs::write(
        profile_dir.join("folders.js"),
        folders.replacen("loadFolders({", r#"loadFolders({"bad":{"created":1},"#, 1),
    )
    .unwrap();

    let profile = Vault::open(dir.path()).unwrap().default_profile().unwrap();
    assert_eq!(profile.sealed_items().len(), 3);
    assert_eq!(profile.sealed_folders().len(), 1);

    profile.unlock(TEST_PASSWORD).unwrap();
    assert!(profile.items().unwrap().iter().all(|i| i.is_complete()));
}

#[test]
fn missing_folders_file_is_empty() {
    let dir = fixture_vault();
    fs::remove_file(dir.path().join(TEST_PROFILE).join("folders.js")).unwrap();

    let profile = Vault::open(dir.path()).unwrap().default_profile().unwrap();
    profile.unlock(TEST_PASSWORD).unwrap();
    assert!(profile.folders().unwrap().is_empty());
    assert_eq!(profile.items().unwrap().len(), 3);
}
